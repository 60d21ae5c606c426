//! Command-line interface for clstr-extract.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **extract**: Write every cluster containing a reference sequence to its own FASTA file
//! - **clusters**: List the clusters parsed from a CD-HIT report
//!
//! ## Usage
//!
//! ```text
//! # Extract reference clusters into the current directory
//! clstr-extract extract -r refs.txt -s proteins.faa -i proteins.clstr
//!
//! # Write into a different directory and print a JSON summary
//! clstr-extract --format json extract -r refs.txt -s proteins.faa -i proteins.clstr -o out/
//!
//! # Preview which clusters would be extracted
//! clstr-extract clusters -i proteins.clstr --reference-list refs.txt
//! ```

use clap::{Parser, Subcommand};

pub mod clusters;
pub mod extract;

#[derive(Parser)]
#[command(name = "clstr-extract")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Extract CD-HIT clusters containing reference sequences as FASTA files")]
#[command(
    long_about = "clstr-extract reads a CD-HIT cluster report, finds every cluster containing at least one accession from a reference list, and writes each such cluster as Cluster<id>.faa using sequences from a FASTA file.\n\nCluster ids are the 0-based position of the cluster in the report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write clusters containing reference sequences as FASTA files
    Extract(extract::ExtractArgs),

    /// List clusters parsed from a CD-HIT cluster file
    Clusters(clusters::ClustersArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
