//! bikeshare CLI entry point.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bikeshare::cli::{Args, LinePrompt, Session};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging; stderr keeps report output on stdout clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_filter().into()),
        )
        .init();

    let registry = args.registry();
    tracing::info!("Reading trip data from {}", registry.data_dir().display());

    let mut prompt = LinePrompt::new().context("Failed to initialize terminal prompt")?;
    if let Some(history) = &args.history {
        prompt = prompt.with_history(history);
    }

    let mut session = Session::new(registry, prompt, io::stdout());
    session.run().context("Session failed")?;

    Ok(())
}
