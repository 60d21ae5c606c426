//! Parser for CD-HIT cluster reports (`.clstr`).
//!
//! A report is a sequence of blocks, each opened by a `>Cluster N` header and
//! followed by one line per member:
//!
//! ```text
//! >Cluster 0
//! 0	120aa, >SEQ1... *
//! 1	118aa, >SEQ2... at 97.50%
//! ```
//!
//! The representative member is marked with `*` instead of a percentage.
//! Malformed member lines and empty blocks are reported as [`ReportAnomaly`]
//! values (and logged at warn level) but never abort the parse.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::cluster::{Cluster, ClusterBuilder};
use crate::core::member::ClusterMember;

/// Delimiter that opens every cluster block
pub const CLUSTER_HEADER: &str = ">Cluster";

/// Marker CD-HIT prints in place of a percentage for the representative
pub const REPRESENTATIVE_MARKER: &str = "*";

static MEMBER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<local_id>\d*)\s*(?P<length>\d*)aa,\s*>?(?P<accession>.*)\.\.\.\s*(?:at)?\s*(?P<percent>[0-9.*]*)%?",
    )
    .expect("member line pattern is valid")
});

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a member line could not be turned into a [`ClusterMember`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemberErrorReason {
    #[error("line does not match the CD-HIT member pattern")]
    NoMatch,

    #[error("invalid member id '{0}'")]
    InvalidLocalId(String),

    #[error("invalid sequence length '{0}'")]
    InvalidLength(String),

    #[error("empty accession")]
    EmptyAccession,

    #[error("invalid percent identity '{0}'")]
    InvalidPercent(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to parse '{line}': {reason}")]
pub struct MemberParseError {
    /// The offending line
    pub line: String,
    pub reason: MemberErrorReason,
}

impl MemberParseError {
    fn new(line: &str, reason: MemberErrorReason) -> Self {
        Self {
            line: line.to_string(),
            reason,
        }
    }
}

/// A recoverable problem found while parsing a report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportAnomaly {
    /// A member line was skipped
    UnparsableLine {
        /// Ordinal of the cluster block containing the line
        cluster: usize,
        /// 1-based line number within the report
        line_number: usize,
        error: MemberParseError,
    },

    /// A block produced no members and was dropped
    EmptyCluster { cluster: usize },
}

/// Result of parsing a whole report
#[derive(Debug, Clone, Default)]
pub struct ParsedReport {
    /// Non-empty clusters in report order
    pub clusters: Vec<Cluster>,

    /// Skipped lines and dropped blocks, in the order they were found
    pub anomalies: Vec<ReportAnomaly>,

    /// Number of `>Cluster` blocks seen, including dropped ones
    pub block_count: usize,
}

impl ParsedReport {
    pub fn empty_cluster_count(&self) -> usize {
        self.anomalies
            .iter()
            .filter(|a| matches!(a, ReportAnomaly::EmptyCluster { .. }))
            .count()
    }

    pub fn skipped_line_count(&self) -> usize {
        self.anomalies
            .iter()
            .filter(|a| matches!(a, ReportAnomaly::UnparsableLine { .. }))
            .count()
    }
}

/// Parse a single member line of a cluster block.
///
/// Text after the percentage is ignored. The accession is everything between
/// the optional `>` and the last `...` on the line.
///
/// # Errors
///
/// Returns a [`MemberParseError`] carrying the line if it does not match the
/// member pattern or if a captured field is empty or out of range.
pub fn parse_member(line: &str) -> Result<ClusterMember, MemberParseError> {
    let caps = MEMBER_LINE
        .captures(line)
        .ok_or_else(|| MemberParseError::new(line, MemberErrorReason::NoMatch))?;

    let local_id_str = &caps["local_id"];
    let local_id: u32 = local_id_str.parse().map_err(|_| {
        MemberParseError::new(
            line,
            MemberErrorReason::InvalidLocalId(local_id_str.to_string()),
        )
    })?;

    let length_str = &caps["length"];
    let length = length_str
        .parse::<u32>()
        .ok()
        .filter(|&len| len > 0)
        .ok_or_else(|| {
            MemberParseError::new(
                line,
                MemberErrorReason::InvalidLength(length_str.to_string()),
            )
        })?;

    let accession = &caps["accession"];
    if accession.is_empty() {
        return Err(MemberParseError::new(
            line,
            MemberErrorReason::EmptyAccession,
        ));
    }

    let percent_str = &caps["percent"];
    if percent_str == REPRESENTATIVE_MARKER {
        return Ok(ClusterMember::representative(accession, local_id, length));
    }

    let percent = percent_str
        .parse::<f64>()
        .ok()
        .filter(|p| (0.0..=100.0).contains(p))
        .ok_or_else(|| {
            MemberParseError::new(
                line,
                MemberErrorReason::InvalidPercent(percent_str.to_string()),
            )
        })?;

    Ok(ClusterMember::new(accession, local_id, length, percent))
}

/// Parse a full report, collecting anomalies alongside the clusters.
///
/// Blocks are numbered from 0 in report order; the number printed in each
/// `>Cluster` header is ignored. Any text before the first header is discarded.
/// Blank lines inside a block do not match the member pattern and are
/// reported like any other unparsable line.
pub fn parse_report(text: &str) -> ParsedReport {
    let mut report = ParsedReport::default();
    let mut blocks = text.split(CLUSTER_HEADER);

    // Line number of the first line of the next block
    let mut line_base = 1;
    if let Some(preamble) = blocks.next() {
        if !preamble.trim().is_empty() {
            debug!(
                bytes = preamble.len(),
                "Discarding text before the first cluster header"
            );
        }
        line_base += preamble.matches('\n').count();
    }

    for (ordinal, block) in blocks.enumerate() {
        report.block_count += 1;
        let mut builder = ClusterBuilder::new(ordinal);

        // First line is the remainder of the header, e.g. " 0"
        for (offset, line) in block.lines().enumerate().skip(1) {
            match parse_member(line) {
                Ok(member) => {
                    if let Some(previous) = builder.insert(member) {
                        debug!(
                            cluster = ordinal,
                            accession = %previous.accession,
                            "Duplicate accession in cluster, keeping the later record"
                        );
                    }
                }
                Err(error) => {
                    let line_number = line_base + offset;
                    warn!(
                        cluster = ordinal,
                        line_number,
                        reason = %error.reason,
                        "Failed to parse cluster member: {line}"
                    );
                    report.anomalies.push(ReportAnomaly::UnparsableLine {
                        cluster: ordinal,
                        line_number,
                        error,
                    });
                }
            }
        }

        if let Some(cluster) = builder.build() {
            report.clusters.push(cluster);
        } else {
            warn!(cluster = ordinal, "Cluster {ordinal} is empty, skipping");
            report
                .anomalies
                .push(ReportAnomaly::EmptyCluster { cluster: ordinal });
        }

        line_base += block.matches('\n').count();
    }

    report
}

/// Parse report text into its non-empty clusters
pub fn parse_clstr_text(text: &str) -> Vec<Cluster> {
    parse_report(text).clusters
}

/// Read and parse a CD-HIT cluster file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read as UTF-8 text.
pub fn parse_clstr_file(path: &Path) -> Result<ParsedReport, ParseError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_report(&content))
}

/// Check if the path has the conventional CD-HIT cluster extension
pub fn is_clstr_file(path: &Path) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("clstr"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_MEMBER_REPORT: &str =
        ">Cluster 0\n0\t120aa, >SEQ1... *\n1\t118aa, >SEQ2... at 97.50%\n";

    #[test]
    fn test_parse_representative_member() {
        let member = parse_member("0\t120aa, >SEQ1... *").unwrap();
        assert_eq!(member.accession, "SEQ1");
        assert_eq!(member.local_id, 0);
        assert_eq!(member.length, 120);
        assert!(member.is_representative);
        assert!((member.percent_identity - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_member_with_percent() {
        let member = parse_member("1\t118aa, >SEQ2... at 97.50%").unwrap();
        assert_eq!(member.accession, "SEQ2");
        assert_eq!(member.local_id, 1);
        assert_eq!(member.length, 118);
        assert!(!member.is_representative);
        assert!((member.percent_identity - 97.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_member_without_gt_prefix() {
        let member = parse_member("2 300aa, WP_000001.1... at 88%").unwrap();
        assert_eq!(member.accession, "WP_000001.1");
        assert_eq!(member.length, 300);
    }

    #[test]
    fn test_parse_member_accession_with_dots() {
        // Accession extends to the last "..." on the line
        let member = parse_member("0\t50aa, >sp|P12345.2|ABC_HUMAN... *").unwrap();
        assert_eq!(member.accession, "sp|P12345.2|ABC_HUMAN");
    }

    #[test]
    fn test_parse_member_is_case_insensitive() {
        let member = parse_member("3\t75AA, >SEQ9... AT 99.00%").unwrap();
        assert_eq!(member.accession, "SEQ9");
        assert!((member.percent_identity - 99.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_member_no_match() {
        let err = parse_member("this is not a member line").unwrap_err();
        assert_eq!(err.reason, MemberErrorReason::NoMatch);
        assert_eq!(err.line, "this is not a member line");
    }

    #[test]
    fn test_parse_member_empty_captures() {
        let err = parse_member("\t120aa, >SEQ1... *").unwrap_err();
        assert_eq!(err.reason, MemberErrorReason::InvalidLocalId(String::new()));

        let err = parse_member("0\taa, >SEQ1... *").unwrap_err();
        assert_eq!(err.reason, MemberErrorReason::InvalidLength(String::new()));

        let err = parse_member("0\t120aa, >... *").unwrap_err();
        assert_eq!(err.reason, MemberErrorReason::EmptyAccession);

        let err = parse_member("0\t120aa, >SEQ1... at %").unwrap_err();
        assert_eq!(err.reason, MemberErrorReason::InvalidPercent(String::new()));
    }

    #[test]
    fn test_parse_member_invalid_values() {
        let err = parse_member("0\t0aa, >SEQ1... *").unwrap_err();
        assert_eq!(err.reason, MemberErrorReason::InvalidLength("0".to_string()));

        let err = parse_member("0\t10aa, >SEQ1... at 1.2.3%").unwrap_err();
        assert_eq!(
            err.reason,
            MemberErrorReason::InvalidPercent("1.2.3".to_string())
        );

        let err = parse_member("0\t10aa, >SEQ1... at 150%").unwrap_err();
        assert_eq!(err.reason, MemberErrorReason::InvalidPercent("150".to_string()));
    }

    #[test]
    fn test_member_line_round_trip() {
        let lines = [
            "0\t120aa, >SEQ1... at 100.00%",
            "7\t4aa, >x... at 0.00%",
            "12\t9999aa, >WP_012345678.1... at 42.25%",
            "1\t118aa, >SEQ2... at 97.555%",
            "2\t64aa, >SEQ3... at 3.14159%",
            "3\t80aa, >SEQ4... at 99.9999999%",
            "4\t80aa, >SEQ5... at 85%",
        ];
        for line in lines {
            let member = parse_member(line).unwrap();
            let reparsed = parse_member(&member.to_clstr_line()).unwrap();
            assert_eq!(member, reparsed, "round trip failed for {line}");
        }

        let rep = parse_member("0\t120aa, >SEQ1... *").unwrap();
        assert_eq!(parse_member(&rep.to_clstr_line()).unwrap(), rep);
    }

    #[test]
    fn test_parse_report_two_members() {
        let clusters = parse_clstr_text(TWO_MEMBER_REPORT);
        assert_eq!(clusters.len(), 1);

        let cluster = &clusters[0];
        assert_eq!(cluster.id(), 0);
        assert_eq!(cluster.size(), 2);

        let seq1 = cluster.get("SEQ1").unwrap();
        assert!(seq1.is_representative);
        assert!((seq1.percent_identity - 100.0).abs() < f64::EPSILON);

        let seq2 = cluster.get("SEQ2").unwrap();
        assert!(!seq2.is_representative);
        assert!((seq2.percent_identity - 97.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_report_ignores_header_ids() {
        let report = ">Cluster 17\n0\t10aa, >A... *\n>Cluster 42\n0\t10aa, >B... *\n";
        let clusters = parse_clstr_text(report);
        let ids: Vec<usize> = clusters.iter().map(Cluster::id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_parse_report_unparsable_block() {
        let report = ">Cluster 0\ngarbage\nmore garbage\n>Cluster 1\n0\t10aa, >B... *\n";
        let parsed = parse_report(report);

        assert_eq!(parsed.block_count, 2);
        assert_eq!(parsed.clusters.len(), 1);
        assert_eq!(parsed.clusters[0].id(), 1);
        assert_eq!(parsed.empty_cluster_count(), 1);
        assert_eq!(parsed.skipped_line_count(), 2);
        assert!(parsed
            .anomalies
            .contains(&ReportAnomaly::EmptyCluster { cluster: 0 }));
    }

    #[test]
    fn test_parse_report_skips_bad_line_only() {
        let report = ">Cluster 0\n0\t10aa, >A... *\nnot a member\n2\t12aa, >C... at 90.00%\n";
        let parsed = parse_report(report);

        assert_eq!(parsed.clusters.len(), 1);
        assert_eq!(parsed.clusters[0].size(), 2);
        match &parsed.anomalies[..] {
            [ReportAnomaly::UnparsableLine {
                cluster,
                line_number,
                error,
            }] => {
                assert_eq!(*cluster, 0);
                assert_eq!(*line_number, 3);
                assert_eq!(error.line, "not a member");
            }
            other => panic!("unexpected anomalies: {other:?}"),
        }
    }

    #[test]
    fn test_parse_report_line_numbers_across_blocks() {
        let report = ">Cluster 0\n0\t10aa, >A... *\n>Cluster 1\n0\t10aa, >B... *\nbad\n";
        let parsed = parse_report(report);
        match &parsed.anomalies[..] {
            [ReportAnomaly::UnparsableLine {
                cluster,
                line_number,
                ..
            }] => {
                assert_eq!(*cluster, 1);
                assert_eq!(*line_number, 5);
            }
            other => panic!("unexpected anomalies: {other:?}"),
        }
    }

    #[test]
    fn test_parse_report_duplicate_accessions() {
        let report = ">Cluster 0\n0\t10aa, >A... *\n1\t20aa, >A... at 90.00%\n";
        let clusters = parse_clstr_text(report);

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].size(), 1);
        let member = clusters[0].get("A").unwrap();
        assert_eq!(member.local_id, 1);
        assert!(!member.is_representative);
    }

    #[test]
    fn test_parse_report_discards_preamble() {
        let report = "CD-HIT output\n0\t10aa, >PRE... *\n>Cluster 0\n0\t10aa, >A... *\n";
        let parsed = parse_report(report);

        assert_eq!(parsed.clusters.len(), 1);
        assert!(parsed.anomalies.is_empty());
        assert!(!parsed.clusters[0].contains("PRE"));
    }

    #[test]
    fn test_parse_report_empty_input() {
        let parsed = parse_report("");
        assert!(parsed.clusters.is_empty());
        assert!(parsed.anomalies.is_empty());
        assert_eq!(parsed.block_count, 0);
    }

    #[test]
    fn test_parse_report_header_only() {
        let parsed = parse_report(">Cluster 0");
        assert!(parsed.clusters.is_empty());
        assert_eq!(
            parsed.anomalies,
            vec![ReportAnomaly::EmptyCluster { cluster: 0 }]
        );
    }

    #[test]
    fn test_parse_report_whitespace_line_is_anomaly() {
        let parsed = parse_report(">Cluster 0\n0\t10aa, >A... *\n   \t\n");

        assert_eq!(parsed.clusters.len(), 1);
        assert_eq!(parsed.clusters[0].size(), 1);
        assert_eq!(parsed.skipped_line_count(), 1);
        match &parsed.anomalies[..] {
            [ReportAnomaly::UnparsableLine {
                line_number, error, ..
            }] => {
                assert_eq!(*line_number, 3);
                assert_eq!(error.line, "   \t");
                assert_eq!(error.reason, MemberErrorReason::NoMatch);
            }
            other => panic!("unexpected anomalies: {other:?}"),
        }
    }

    #[test]
    fn test_parse_report_trailing_newline_adds_no_anomaly() {
        let parsed = parse_report(">Cluster 0\n0\t10aa, >A... *\n");
        assert!(parsed.anomalies.is_empty());
    }

    #[test]
    fn test_parse_report_crlf() {
        let report = ">Cluster 0\r\n0\t120aa, >SEQ1... *\r\n1\t118aa, >SEQ2... at 97.50%\r\n";
        let clusters = parse_clstr_text(report);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].size(), 2);
    }

    #[test]
    fn test_parse_report_invariants_and_idempotence() {
        let report = ">Cluster 0\n0\t10aa, >A... *\nbad\n>Cluster 1\n\n>Cluster 2\n0\t5aa, >B... *\n1\t5aa, >B... at 95.00%\n2\t6aa, >C... at 91.00%\n";
        let first = parse_report(report);
        let second = parse_report(report);

        assert_eq!(first.clusters, second.clusters);
        assert_eq!(first.anomalies, second.anomalies);
        for cluster in &first.clusters {
            assert!(cluster.size() > 0);
            assert_eq!(cluster.size(), cluster.members().len());
            assert_eq!(cluster.size(), cluster.accessions().count());
        }
    }

    #[test]
    fn test_parse_clstr_file() {
        let mut temp = NamedTempFile::with_suffix(".clstr").unwrap();
        temp.write_all(TWO_MEMBER_REPORT.as_bytes()).unwrap();
        temp.flush().unwrap();

        let parsed = parse_clstr_file(temp.path()).unwrap();
        assert_eq!(parsed.clusters.len(), 1);
        assert!(is_clstr_file(temp.path()));
    }

    #[test]
    fn test_parse_clstr_file_missing() {
        let result = parse_clstr_file(Path::new("/nonexistent/report.clstr"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[test]
    fn test_is_clstr_file() {
        assert!(is_clstr_file(Path::new("proteins.clstr")));
        assert!(is_clstr_file(Path::new("/data/PROTEINS.CLSTR")));
        assert!(!is_clstr_file(Path::new("proteins.txt")));
        assert!(!is_clstr_file(Path::new("proteins")));
    }
}
