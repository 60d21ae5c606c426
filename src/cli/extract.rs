use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::{debug, info, warn};

use crate::cli::OutputFormat;
use crate::core::cluster::Cluster;
use crate::export::{write_cluster_files, WrittenCluster};
use crate::matching::ReferenceMatcher;
use crate::parsing::clstr::{parse_clstr_file, ParsedReport};
use crate::parsing::reference_list::parse_reference_list_file;
use crate::store::fasta::FastaStore;
use crate::store::SequenceStore;
use crate::utils::validation::check_file_extensions;

#[derive(Args)]
pub struct ExtractArgs {
    /// File of sequence identifiers (one per line) whose clusters should be written
    #[arg(short = 'r', long, value_name = "LIST")]
    pub reference_list: PathBuf,

    /// FASTA file providing the sequences to extract (may be gzipped)
    #[arg(short = 's', long, value_name = "FASTA")]
    pub sequence_file: PathBuf,

    /// CD-HIT cluster file providing the clustering
    #[arg(short = 'i', long, value_name = "CLUSTER")]
    pub cluster_file: PathBuf,

    /// Directory to write Cluster<id>.faa files into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

/// Execute extract subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be read or an output file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExtractArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        eprintln!("Sequence list file:  {}", args.reference_list.display());
        eprintln!("Sequence FASTA file: {}", args.sequence_file.display());
        eprintln!("CD-Hit cluster file: {}", args.cluster_file.display());
    }

    for warning in check_file_extensions(
        &args.reference_list,
        &args.sequence_file,
        &args.cluster_file,
    ) {
        warn!("{warning}");
    }

    let references = parse_reference_list_file(&args.reference_list).with_context(|| {
        format!(
            "Failed to read reference list {}",
            args.reference_list.display()
        )
    })?;
    let store = FastaStore::load(&args.sequence_file).with_context(|| {
        format!(
            "Failed to load sequences from {}",
            args.sequence_file.display()
        )
    })?;
    let report = parse_clstr_file(&args.cluster_file).with_context(|| {
        format!(
            "Failed to read cluster file {}",
            args.cluster_file.display()
        )
    })?;

    if verbose {
        eprintln!(
            "Loaded {} references, {} sequences, {} clusters",
            references.len(),
            store.len(),
            report.clusters.len()
        );
    }

    let matcher = ReferenceMatcher::new(&references);
    let selected = matcher.select(&report.clusters);
    let unmatched = matcher.unmatched(&report.clusters);
    if !unmatched.is_empty() {
        debug!(
            count = unmatched.len(),
            "References not found in any cluster"
        );
    }

    if matches!(format, OutputFormat::Text) {
        for cluster in &selected {
            println!(
                "Cluster {} was found to have reference sequences.",
                cluster.id()
            );
        }
    }

    let written = write_cluster_files(&args.output_dir, &selected, &store)?;
    info!(clusters = written.len(), "All reference clusters written");

    match format {
        OutputFormat::Text => print_text_summary(&written),
        OutputFormat::Json => print_json_summary(&args, &report, &selected, &written, &unmatched)?,
        OutputFormat::Tsv => print_tsv_summary(&written),
    }

    Ok(())
}

fn print_text_summary(written: &[WrittenCluster]) {
    println!();
    for cluster in written {
        println!("Writing {}", cluster.path.display());
        if !cluster.content.missing.is_empty() {
            println!(
                "  {} sequence(s) missing from FASTA: {}",
                cluster.content.missing.len(),
                cluster.content.missing.join(", ")
            );
        }
    }
    println!("\nAll reference clusters written!");
}

fn print_json_summary(
    args: &ExtractArgs,
    report: &ParsedReport,
    selected: &[&Cluster],
    written: &[WrittenCluster],
    unmatched: &[&str],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "inputs": {
            "reference_list": args.reference_list.display().to_string(),
            "sequence_file": args.sequence_file.display().to_string(),
            "cluster_file": args.cluster_file.display().to_string(),
        },
        "report": {
            "blocks": report.block_count,
            "clusters": report.clusters.len(),
            "empty_clusters": report.empty_cluster_count(),
            "skipped_lines": report.skipped_line_count(),
        },
        "selected_clusters": selected.iter().map(|c| c.id()).collect::<Vec<_>>(),
        "written": written,
        "unmatched_references": unmatched,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(written: &[WrittenCluster]) {
    println!("cluster_id\tpath\twritten\tmissing");
    for cluster in written {
        println!(
            "{}\t{}\t{}\t{}",
            cluster.content.cluster_id,
            cluster.path.display(),
            cluster.content.written.len(),
            cluster.content.missing.len(),
        );
    }
}
