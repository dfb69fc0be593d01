use std::path::PathBuf;

/// ACS statistics and apportionment CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "acs-seats", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON configuration file (survey year/span, seats, excluded states)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Import per-county ACS statistics and write them as JSON
    Stats(StatsArgs),

    /// Apportion House seats from county population totals
    Apportion(ApportionArgs),
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// ACS summary-file directory (or .zip archive of one)
    #[arg(value_hint = clap::ValueHint::AnyPath)]
    pub acs: PathBuf,

    /// Output JSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ApportionArgs {
    /// ACS summary-file directory (or .zip archive of one)
    #[arg(value_hint = clap::ValueHint::AnyPath)]
    pub acs: PathBuf,

    /// Number of seats, overrides the configured value (default 435)
    #[arg(short, long)]
    pub seats: Option<u32>,

    /// States that receive no seats, overrides the configured list (default DC,PR)
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}
