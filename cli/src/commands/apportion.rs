use std::collections::BTreeSet;

use acs_seats::{AcsDir, DiskSource, Geography, ImportConfig, apportion, import_acs, import_counties, state_populations};
use anyhow::{Context, Result};

use crate::cli::ApportionArgs;

pub fn run(config: &ImportConfig, args: &ApportionArgs) -> Result<()> {
    let seats = args.seats.unwrap_or(config.representatives);
    let excluded: BTreeSet<String> = if args.exclude.is_empty() {
        config.excluded_states.clone()
    } else {
        args.exclude.iter().map(|s| s.trim().to_ascii_uppercase()).collect()
    };

    let acs = AcsDir::open(&args.acs)?;
    let counties = import_counties(acs.path())
        .context("[apportion] Failed to read ACS geography data")?;
    let geographies: Vec<Geography> = counties.iter().map(Geography::County).collect();

    let source = DiskSource::new(acs.path(), config.estimate_prefix());
    let stats = import_acs(&source, &geographies)
        .context("[apportion] Failed to read ACS estimate data")?;

    let populations = state_populations(&counties, &stats, &excluded)?;
    tracing::info!(states = populations.len(), seats, "[apportion] apportioning");

    for (state, reps) in apportion(&populations, seats, &excluded)? {
        println!("{reps:02}\t{state}");
    }
    Ok(())
}
