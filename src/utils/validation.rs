//! Input sanity checks shared by the CLI commands.

use std::path::{Path, PathBuf};

use crate::parsing::clstr::is_clstr_file;
use crate::parsing::reference_list::is_reference_list_file;
use crate::store::fasta::is_protein_fasta_file;

/// An input whose extension does not match what the command expects.
///
/// These are advisory only; the input is still read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtensionWarning {
    #[error("{} may not be a txt file", .0.display())]
    ReferenceList(PathBuf),
    #[error("{} may not be a FASTA file", .0.display())]
    SequenceFile(PathBuf),
    #[error("{} may not be a CD-Hit cluster file", .0.display())]
    ClusterFile(PathBuf),
}

/// Check input extensions against the usual `.txt`, `.faa` and `.clstr`.
///
/// A `.gz`/`.bgz` suffix on the sequence file is accepted.
#[must_use]
pub fn check_file_extensions(
    reference_list: &Path,
    sequence_file: &Path,
    cluster_file: &Path,
) -> Vec<ExtensionWarning> {
    let mut warnings = Vec::new();

    if !is_reference_list_file(reference_list) {
        warnings.push(ExtensionWarning::ReferenceList(reference_list.to_path_buf()));
    }
    if !is_protein_fasta_file(sequence_file) {
        warnings.push(ExtensionWarning::SequenceFile(sequence_file.to_path_buf()));
    }
    if !is_clstr_file(cluster_file) {
        warnings.push(ExtensionWarning::ClusterFile(cluster_file.to_path_buf()));
    }

    warnings
}
