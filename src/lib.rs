//! # clstr-extract
//!
//! A library for pulling reference-containing clusters out of CD-HIT reports.
//!
//! CD-HIT groups similar protein sequences into clusters and describes them in a
//! human-readable `.clstr` report. Given a list of reference accessions,
//! `clstr-extract` finds every cluster holding at least one of them and writes
//! each such cluster as a standalone FASTA file, using sequences from the FASTA
//! file that was clustered.
//!
//! ## Features
//!
//! - **Tolerant parsing**: Malformed member lines and empty clusters are logged
//!   and skipped, never fatal
//! - **Representative detection**: Members marked `*` are flagged and given 100% identity
//! - **Order-preserving selection**: Clusters are selected in report order, once each
//! - **Gzip support**: Sequence files may be gzip or bgzip compressed
//!
//! ## Example
//!
//! ```rust
//! use clstr_extract::parsing::clstr::parse_clstr_text;
//! use clstr_extract::matching::select_referenced_clusters;
//!
//! let report = ">Cluster 0\n0\t120aa, >SEQ1... *\n1\t118aa, >SEQ2... at 97.50%\n";
//! let clusters = parse_clstr_text(report);
//!
//! let references = vec!["SEQ2".to_string()];
//! let selected = select_referenced_clusters(&clusters, &references);
//!
//! assert_eq!(selected.len(), 1);
//! assert_eq!(selected[0].id(), 0);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Cluster and cluster member types
//! - [`parsing`]: Parsers for CD-HIT reports and reference lists
//! - [`matching`]: Reference-based cluster selection
//! - [`store`]: Sequence record lookup backed by FASTA files
//! - [`export`]: Writing selected clusters as FASTA files
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod export;
pub mod matching;
pub mod parsing;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::cluster::Cluster;
pub use crate::core::member::ClusterMember;
pub use crate::matching::engine::{select_referenced_clusters, ReferenceMatcher};
pub use crate::parsing::clstr::{parse_member, parse_report, ParsedReport, ReportAnomaly};
pub use crate::store::{fasta::FastaStore, SequenceStore};
