//! Sequence-record storage.
//!
//! A [`SequenceStore`] maps an accession to its full FASTA record. Lookups for
//! absent accessions return `None`; callers log and skip them.
//!
//! - [`fasta::FastaStore`]: records loaded into memory from a (optionally
//!   gzipped) FASTA file

use noodles::fasta as noodles_fasta;
use thiserror::Error;

pub mod fasta;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read sequence file: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Lookup of sequence records by accession
pub trait SequenceStore {
    /// The record for `accession`, or `None` if the store has no such record
    fn get(&self, accession: &str) -> Option<&noodles_fasta::Record>;

    /// Number of records in the store
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Serialize a single record as FASTA text
///
/// # Errors
///
/// Returns an I/O error if the record cannot be written.
pub fn format_record(record: &noodles_fasta::Record) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = noodles_fasta::io::Writer::new(&mut buf);
        writer.write_record(record)?;
    }
    Ok(buf)
}
