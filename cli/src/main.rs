mod cli;
mod commands;

use acs_seats::ImportConfig;
use anyhow::Context;
use cli::{Cli, Commands};
use commands::{apportion, stats};
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ImportConfig::from_json_file(path)
            .with_context(|| format!("[cli] Failed to load config {}", path.display()))?,
        None => ImportConfig::default(),
    };

    match &cli.command {
        Commands::Stats(args) => stats::run(&config, args),
        Commands::Apportion(args) => apportion::run(&config, args),
    }
}

/// `RUST_LOG` wins; otherwise -v/-vv raise the level from warn.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> { run() }
