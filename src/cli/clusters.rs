use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::cluster::Cluster;
use crate::matching::ReferenceMatcher;
use crate::parsing::clstr::parse_clstr_file;
use crate::parsing::reference_list::parse_reference_list_file;

#[derive(Args)]
pub struct ClustersArgs {
    /// CD-HIT cluster file
    #[arg(short = 'i', long, value_name = "CLUSTER")]
    pub cluster_file: PathBuf,

    /// Only list clusters containing an accession from this list
    #[arg(short = 'r', long, value_name = "LIST")]
    pub reference_list: Option<PathBuf>,
}

/// Execute clusters subcommand
///
/// # Errors
///
/// Returns an error if the cluster file or reference list cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClustersArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let report = parse_clstr_file(&args.cluster_file).with_context(|| {
        format!(
            "Failed to read cluster file {}",
            args.cluster_file.display()
        )
    })?;

    if verbose {
        eprintln!(
            "Parsed {} clusters from {} blocks ({} empty, {} lines skipped)",
            report.clusters.len(),
            report.block_count,
            report.empty_cluster_count(),
            report.skipped_line_count()
        );
    }

    let clusters: Vec<&Cluster> = if let Some(path) = &args.reference_list {
        let references = parse_reference_list_file(path)
            .with_context(|| format!("Failed to read reference list {}", path.display()))?;
        ReferenceMatcher::new(&references).select(&report.clusters)
    } else {
        report.clusters.iter().collect()
    };

    match format {
        OutputFormat::Text => print_text_clusters(&clusters),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&clusters)?),
        OutputFormat::Tsv => print_tsv_clusters(&clusters),
    }

    Ok(())
}

fn print_text_clusters(clusters: &[&Cluster]) {
    if clusters.is_empty() {
        eprintln!("No clusters found.");
        return;
    }

    for cluster in clusters {
        let representative = cluster
            .representative()
            .map_or("-", |m| m.accession.as_str());
        println!(
            "Cluster {}: {} member(s), representative {}",
            cluster.id(),
            cluster.size(),
            representative
        );
        for member in cluster.members() {
            let marker = if member.is_representative { "*" } else { " " };
            println!(
                "  {marker} {}\t{}aa\t{:.2}%",
                member.accession, member.length, member.percent_identity
            );
        }
    }
}

fn print_tsv_clusters(clusters: &[&Cluster]) {
    println!("cluster_id\tsize\trepresentative\tmembers");
    for cluster in clusters {
        let representative = cluster
            .representative()
            .map_or("", |m| m.accession.as_str());
        let members: Vec<&str> = cluster.accessions().collect();
        println!(
            "{}\t{}\t{}\t{}",
            cluster.id(),
            cluster.size(),
            representative,
            members.join(",")
        );
    }
}
