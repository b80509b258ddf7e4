//! sentimeter - feedback sentiment scoring over HTTP or the command line

use anyhow::Result;
use clap::Parser;
use sentimeter::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI args first so --log-level can seed the filter
    let cli = cli::Cli::parse();

    // Initialize logging (stderr keeps stdout clean for --format json)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
