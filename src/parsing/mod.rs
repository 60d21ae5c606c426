//! Parsers for the text inputs of an extraction run.
//!
//! - **CD-HIT cluster reports** (`.clstr`): clusters, members, percent identity
//!   and representative flags
//! - **Reference lists** (`.txt`): one accession per line
//!
//! ## Example
//!
//! ```rust
//! use clstr_extract::parsing::clstr::parse_report;
//!
//! let report = ">Cluster 0\n0\t120aa, >SEQ1... *\n1\t118aa, >SEQ2... at 97.50%\n";
//! let parsed = parse_report(report);
//!
//! assert_eq!(parsed.clusters.len(), 1);
//! assert_eq!(parsed.clusters[0].size(), 2);
//! assert!(parsed.anomalies.is_empty());
//! ```
//!
//! ## Member line format
//!
//! | Field | Example | Notes |
//! |-------|---------|-------|
//! | member id | `1` | Rank within the cluster |
//! | length | `118aa,` | Amino acids |
//! | accession | `>SEQ2...` | Leading `>` optional |
//! | identity | `at 97.50%` or `*` | `*` marks the representative |

pub mod clstr;
pub mod reference_list;
