use clap::Parser;
use tracing_subscriber::EnvFilter;

use clstr_extract::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("clstr_extract=debug,info")
    } else {
        EnvFilter::new("clstr_extract=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Extract(args) => {
            cli::extract::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Clusters(args) => {
            cli::clusters::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
