//! `site` - static build and inspection CLI for the home page.
//!
//! Developed by The Site Authors (c)2026

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries rendered output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    tracing::debug!("site v{}", env!("CARGO_PKG_VERSION"));

    commands::run(cli.command)
}
