//! Reference matching: selecting clusters that contain reference accessions.
//!
//! A cluster is selected when any accession from the reference list is one of
//! its members. Selection keeps report order, never repeats a cluster, and
//! ignores references that appear in no cluster.
//!
//! ## Example
//!
//! ```rust
//! use clstr_extract::matching::engine::select_referenced_clusters;
//! use clstr_extract::parsing::clstr::parse_clstr_text;
//!
//! let clusters = parse_clstr_text(">Cluster 0\n0\t120aa, >SEQ1... *\n1\t118aa, >SEQ2... at 97.50%\n");
//! let references = vec!["SEQ2".to_string()];
//!
//! let selected = select_referenced_clusters(&clusters, &references);
//! assert_eq!(selected.len(), 1);
//! ```

pub mod engine;

pub use engine::{select_referenced_clusters, ReferenceMatcher};
