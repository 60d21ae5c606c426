//! In-memory sequence store loaded from a FASTA file using noodles.
//!
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.faa`, `.fa`, `.fasta`, `.fna` (uncompressed)
//! - any of the above with `.gz` or `.bgz` appended (compressed)

use std::collections::HashMap;
use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::{debug, warn};

use crate::store::{SequenceStore, StoreError};

const FASTA_EXTENSIONS: [&str; 4] = ["faa", "fa", "fasta", "fna"];

/// Check if the path has a FASTA extension, optionally gzipped
pub fn is_fasta_file(path: &Path) -> bool {
    let inner = if is_gzipped(path) {
        path.file_stem().map(Path::new)
    } else {
        Some(path)
    };

    inner
        .and_then(Path::extension)
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            FASTA_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Check if the path is a protein FASTA (`.faa`, optionally gzipped)
pub fn is_protein_fasta_file(path: &Path) -> bool {
    let inner = if is_gzipped(path) {
        path.file_stem().map(Path::new)
    } else {
        Some(path)
    };

    inner
        .and_then(Path::extension)
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("faa"))
}

/// Check if the path is a gzipped file
fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz") || ext.eq_ignore_ascii_case("bgz"))
}

/// Sequence records keyed by name (the first word of the definition line)
#[derive(Debug, Default)]
pub struct FastaStore {
    records: HashMap<String, fasta::Record>,
}

impl FastaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every record of a FASTA file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be opened or
    /// `StoreError::Noodles` if a record is malformed.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let file = std::fs::File::open(path)?;

        let store = if is_gzipped(path) {
            let reader = BufReader::new(MultiGzDecoder::new(file));
            Self::from_reader(reader)?
        } else {
            Self::from_reader(BufReader::new(file))?
        };

        debug!(
            path = %path.display(),
            records = store.len(),
            "Loaded sequence records"
        );
        Ok(store)
    }

    /// Load every record from a buffered FASTA reader.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Noodles` if a record is malformed.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, StoreError> {
        let mut fasta_reader = fasta::io::Reader::new(reader);
        let mut store = Self::new();

        for result in fasta_reader.records() {
            let record = result
                .map_err(|e| StoreError::Noodles(format!("Failed to parse FASTA record: {e}")))?;
            store.insert(record);
        }

        Ok(store)
    }

    /// Add a record. A record with the same name replaces the earlier one.
    pub fn insert(&mut self, record: fasta::Record) {
        let name = String::from_utf8_lossy(record.name()).to_string();
        if self.records.insert(name.clone(), record).is_some() {
            warn!(accession = %name, "Duplicate FASTA record, keeping the later one");
        }
    }
}

impl SequenceStore for FastaStore {
    fn get(&self, accession: &str) -> Option<&fasta::Record> {
        self.records.get(accession)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
