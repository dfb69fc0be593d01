//! End-to-end import: geography directory, sequence statistics, state populations.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use ahash::AHashMap;
use anyhow::Context;
use tracing::info;

use crate::acs::{self, AcsStatistics, SequenceSource, SequenceTable, StatType, SEQUENCE_TABLES};
use crate::error::{ImportError, Result};
use crate::geo::{County, DirectoryBuilder, Geography, State};
use crate::io::{discover_geography_files, read_rows};

/// Reads all of the states (with their counties) out of the ACS geography files under `dir`.
pub fn import_states(dir: &Path) -> anyhow::Result<Vec<State>> {
    let files = discover_geography_files(dir)?;
    info!(dir = %dir.display(), files = files.len(), "reading geography files");

    let mut builder = DirectoryBuilder::new();
    for path in &files {
        let rows = read_rows(path)?;
        builder.add_rows(&rows)
            .with_context(|| format!("[import] Invalid geography file {}", path.display()))?;
    }
    Ok(builder.finish())
}

/// Every county under `dir`, grouped by state in file order.
pub fn import_counties(dir: &Path) -> anyhow::Result<Vec<County>> {
    Ok(import_states(dir)?
        .into_iter()
        .flat_map(|state| state.counties)
        .collect())
}

/// Imports every registered ACS statistic for the provided geographies, keyed by geography id.
pub fn import_acs<S: SequenceSource + ?Sized>(
    source: &S,
    geographies: &[Geography<'_>],
) -> Result<AHashMap<String, AcsStatistics>> {
    let tables: Vec<&SequenceTable> = SEQUENCE_TABLES.iter().collect();
    let fragments = acs::load(source, geographies, &tables)?;
    let stats = acs::assemble(fragments, &tables)?;
    info!(geographies = stats.len(), tables = tables.len(), "ACS import complete");
    Ok(stats)
}

/// Sum county total populations by state, skipping `excluded` states.
pub fn state_populations(
    counties: &[County],
    stats: &AHashMap<String, AcsStatistics>,
    excluded: &BTreeSet<String>,
) -> Result<BTreeMap<String, u64>> {
    let mut populations = BTreeMap::new();
    for county in counties.iter().filter(|c| !excluded.contains(&c.state)) {
        let population = stats.get(&county.id)
            .and_then(|s| s.total_population)
            .ok_or_else(|| ImportError::MissingStatistic {
                geo_id: county.id.clone(),
                stat: StatType::TotalPopulation,
            })?;
        *populations.entry(county.state.clone()).or_default() += population.total;
    }
    Ok(populations)
}
