//! FASTA materialization of selected clusters.
//!
//! Each cluster is written to `Cluster<id>.faa` as the concatenation of its
//! members' records, in member order. Members without a record in the
//! [`SequenceStore`] are logged at error level and left out; the rest of the
//! cluster is still written.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::core::cluster::Cluster;
use crate::store::{format_record, SequenceStore};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to format record {accession}: {source}")]
    Format {
        accession: String,
        #[source]
        source: std::io::Error,
    },
}

/// FASTA text for one cluster plus bookkeeping about what was included
#[derive(Debug, Clone, Serialize)]
pub struct ClusterFasta {
    pub cluster_id: usize,

    /// Concatenated FASTA records
    #[serde(skip)]
    pub fasta: Vec<u8>,

    /// Accessions written, in member order
    pub written: Vec<String>,

    /// Accessions with no record in the store
    pub missing: Vec<String>,
}

/// A cluster file written to disk
#[derive(Debug, Clone, Serialize)]
pub struct WrittenCluster {
    pub path: PathBuf,

    #[serde(flatten)]
    pub content: ClusterFasta,
}

/// Output file name for a cluster, e.g. `Cluster12.faa`
pub fn cluster_file_name(cluster_id: usize) -> String {
    format!("Cluster{cluster_id}.faa")
}

/// Build the FASTA text for a cluster from the store.
///
/// # Errors
///
/// Returns `ExportError::Format` if a record cannot be serialized.
pub fn cluster_fasta<S: SequenceStore + ?Sized>(
    cluster: &Cluster,
    store: &S,
) -> Result<ClusterFasta, ExportError> {
    let mut out = ClusterFasta {
        cluster_id: cluster.id(),
        fasta: Vec::new(),
        written: Vec::with_capacity(cluster.size()),
        missing: Vec::new(),
    };

    for accession in cluster.accessions() {
        let Some(record) = store.get(accession) else {
            error!(
                cluster = cluster.id(),
                accession, "Sequence not found in FASTA file, skipping"
            );
            out.missing.push(accession.to_string());
            continue;
        };

        let bytes = format_record(record).map_err(|source| ExportError::Format {
            accession: accession.to_string(),
            source,
        })?;
        out.fasta.extend_from_slice(&bytes);
        out.written.push(accession.to_string());
    }

    Ok(out)
}

/// Write one FASTA file per cluster into `dir`, overwriting existing files.
///
/// Stops at the first I/O error; files written before it remain valid.
///
/// # Errors
///
/// Returns `ExportError::CreateDir` if `dir` cannot be created,
/// `ExportError::Write` if a cluster file cannot be written, or
/// `ExportError::Format` if a record cannot be serialized.
pub fn write_cluster_files<S: SequenceStore + ?Sized>(
    dir: &Path,
    clusters: &[&Cluster],
    store: &S,
) -> Result<Vec<WrittenCluster>, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(clusters.len());
    for cluster in clusters {
        let content = cluster_fasta(*cluster, store)?;
        if content.written.is_empty() {
            warn!(
                cluster = cluster.id(),
                "No sequences found for cluster, writing an empty file"
            );
        }

        let path = dir.join(cluster_file_name(cluster.id()));
        info!(path = %path.display(), "Writing cluster");
        std::fs::write(&path, &content.fasta).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        written.push(WrittenCluster { path, content });
    }

    Ok(written)
}
