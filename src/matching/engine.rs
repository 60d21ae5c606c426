use std::collections::HashSet;

use crate::core::cluster::Cluster;

/// Selects clusters that contain at least one reference accession
pub struct ReferenceMatcher<'a> {
    references: &'a [String],
}

impl<'a> ReferenceMatcher<'a> {
    pub fn new(references: &'a [String]) -> Self {
        Self { references }
    }

    /// Whether any reference accession is a member of the cluster.
    ///
    /// Stops at the first reference found.
    pub fn matches(&self, cluster: &Cluster) -> bool {
        self.references.iter().any(|r| cluster.contains(r))
    }

    /// Borrowing selection, in input order, each cluster at most once
    pub fn select<'c>(&self, clusters: &'c [Cluster]) -> Vec<&'c Cluster> {
        clusters.iter().filter(|c| self.matches(c)).collect()
    }

    /// Owning selection, in input order
    pub fn select_owned(&self, clusters: Vec<Cluster>) -> Vec<Cluster> {
        clusters.into_iter().filter(|c| self.matches(c)).collect()
    }

    /// References that are not a member of any cluster, in list order.
    ///
    /// These are not errors: a reference list may name sequences that were
    /// filtered out before clustering.
    pub fn unmatched(&self, clusters: &[Cluster]) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.references
            .iter()
            .map(String::as_str)
            .filter(|r| !clusters.iter().any(|c| c.contains(r)))
            .filter(|r| seen.insert(*r))
            .collect()
    }
}

/// Select the clusters that contain at least one of `references`.
///
/// Input order is preserved and each cluster appears at most once. References
/// that match no cluster are ignored.
pub fn select_referenced_clusters<'c>(
    clusters: &'c [Cluster],
    references: &[String],
) -> Vec<&'c Cluster> {
    ReferenceMatcher::new(references).select(clusters)
}
