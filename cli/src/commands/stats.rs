use std::io::Write;

use acs_seats::{AcsDir, AcsStatistics, DiskSource, Geography, ImportConfig, import_acs, import_states, write_json_file};
use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::StatsArgs;

#[derive(Serialize)]
struct CountyStats<'a> {
    id: &'a str,
    state: &'a str,
    name: &'a str,
    #[serde(flatten)]
    stats: &'a AcsStatistics,
}

pub fn run(config: &ImportConfig, args: &StatsArgs) -> Result<()> {
    let acs = AcsDir::open(&args.acs)?;
    tracing::info!(path = %acs.path().display(), "[stats] loading geographies");

    let states = import_states(acs.path())?;
    let geographies: Vec<Geography> = states.iter()
        .flat_map(|state| state.county_geographies())
        .collect();

    let source = DiskSource::new(acs.path(), config.estimate_prefix());
    let stats = import_acs(&source, &geographies)
        .context("[stats] Failed to read ACS estimate data")?;

    let rows = states.iter()
        .flat_map(|state| &state.counties)
        .filter_map(|county| stats.get(&county.id).map(|stats| CountyStats {
            id: &county.id,
            state: &county.state,
            name: &county.name,
            stats,
        }))
        .collect::<Vec<_>>();

    match &args.output {
        Some(path) => write_json_file(path, &rows)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &rows)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
