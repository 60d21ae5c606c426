use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::core::member::ClusterMember;

/// A CD-HIT cluster with at least one member.
///
/// Members are keyed by accession. Inserting an accession that is already
/// present replaces the earlier record in place (last write wins), so the
/// member count always equals the number of distinct accessions and iteration
/// follows first-insertion order.
///
/// Clusters are only produced through [`ClusterBuilder::build`], which refuses
/// to create an empty cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Ordinal position of the cluster within the report (0-based)
    id: usize,

    /// Members in first-insertion order
    members: Vec<ClusterMember>,

    /// Index: accession -> position in members vec
    accession_to_index: HashMap<String, usize>,
}

impl Cluster {
    pub fn id(&self) -> usize {
        self.id
    }

    /// Number of distinct member accessions
    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn members(&self) -> &[ClusterMember] {
        &self.members
    }

    pub fn accessions(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.accession.as_str())
    }

    pub fn get(&self, accession: &str) -> Option<&ClusterMember> {
        self.accession_to_index
            .get(accession)
            .map(|&idx| &self.members[idx])
    }

    pub fn contains(&self, accession: &str) -> bool {
        self.accession_to_index.contains_key(accession)
    }

    /// The first member flagged as representative.
    ///
    /// Malformed reports may flag none or several members; that is not an error.
    pub fn representative(&self) -> Option<&ClusterMember> {
        self.members.iter().find(|m| m.is_representative)
    }
}

impl Serialize for Cluster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Cluster", 3)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("size", &self.size())?;
        state.serialize_field("members", &self.members)?;
        state.end()
    }
}

/// Accumulates members for a single cluster block
#[derive(Debug, Default)]
pub struct ClusterBuilder {
    id: usize,
    members: Vec<ClusterMember>,
    accession_to_index: HashMap<String, usize>,
}

impl ClusterBuilder {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Add a member, replacing any earlier member with the same accession.
    ///
    /// Returns the replaced member, if any.
    pub fn insert(&mut self, member: ClusterMember) -> Option<ClusterMember> {
        if let Some(&idx) = self.accession_to_index.get(&member.accession) {
            return Some(std::mem::replace(&mut self.members[idx], member));
        }

        self.accession_to_index
            .insert(member.accession.clone(), self.members.len());
        self.members.push(member);
        None
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Finish the cluster. Returns `None` if no members were added.
    pub fn build(self) -> Option<Cluster> {
        if self.members.is_empty() {
            return None;
        }

        Some(Cluster {
            id: self.id,
            members: self.members,
            accession_to_index: self.accession_to_index,
        })
    }
}
