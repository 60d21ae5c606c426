//! Core data types for CD-HIT cluster extraction.
//!
//! - [`ClusterMember`]: One sequence listed in a cluster block, with its length,
//!   percent identity to the representative, and representative flag
//! - [`Cluster`]: An ordered, accession-keyed set of members identified by its
//!   ordinal position in the report
//!
//! Both types are immutable once built. A [`Cluster`] always has at least one
//! member and its size always equals the number of distinct accessions.
//!
//! [`ClusterMember`]: member::ClusterMember
//! [`Cluster`]: cluster::Cluster

pub mod cluster;
pub mod member;
