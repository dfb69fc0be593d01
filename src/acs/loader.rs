use std::collections::BTreeMap;
use std::path::Path;

use ahash::AHashMap;
use tracing::{debug, trace};

use crate::error::{ImportError, Result};
use crate::geo::Geography;
use super::{group_by_sequence, parse_sequence, Fragment, SequenceSource, SequenceTable};

/// Extract `tables` for every geography, returning the fragments keyed by geography id.
///
/// Geographies are grouped by state and tables by sequence file, so each estimate file that is
/// needed is read exactly once. A geography's record number is its row index in every file of
/// its state. Any failure aborts the whole load.
pub fn load<S: SequenceSource + ?Sized>(
    source: &S,
    geographies: &[Geography<'_>],
    tables: &[&SequenceTable],
) -> Result<AHashMap<String, Vec<Fragment>>> {
    let mut results: AHashMap<String, Vec<Fragment>> = geographies.iter()
        .map(|geo| (geo.geo_id().to_string(), Vec::with_capacity(tables.len())))
        .collect();

    let mut by_state: BTreeMap<String, Vec<Geography<'_>>> = BTreeMap::new();
    for geo in geographies {
        by_state.entry(geo.state_code().to_ascii_lowercase()).or_default().push(*geo);
    }

    let groups = group_by_sequence(tables);

    for (state, geos) in &by_state {
        for (sequence, group) in &groups {
            let path = source.path(state, sequence);
            debug!(state = %state, sequence = %sequence, path = %path.display(), "reading sequence file");

            let rows = source.read(&path)?;
            check_record_numbers(geos, &rows, &path)?;

            for geo in geos {
                let row = &rows[geo.record_number() as usize];
                trace!(geo_id = geo.geo_id(), record_number = geo.record_number(), "extracting row");

                let fragments = results.entry(geo.geo_id().to_string()).or_default();
                for table in group {
                    let fields = row.get(table.range()).ok_or_else(|| ImportError::TruncatedRow {
                        geo_id: geo.geo_id().to_string(),
                        stat: table.stat,
                        required: table.range().end,
                        found: row.len(),
                        path: path.clone(),
                    })?;
                    fragments.push(parse_sequence(table, fields, geo.geo_id(), &path)?);
                }
            }
        }
    }

    debug!(geographies = results.len(), files = by_state.len() * groups.len(), "sequence load complete");
    Ok(results)
}

/// Every record number must address a row of the file; checked up front so that a misaligned
/// directory fails before anything is extracted.
fn check_record_numbers(geos: &[Geography<'_>], rows: &[Vec<String>], path: &Path) -> Result<()> {
    match geos.iter().find(|geo| geo.record_number() as usize >= rows.len()) {
        Some(geo) => Err(ImportError::RecordNotFound {
            geo_id: geo.geo_id().to_string(),
            record_number: geo.record_number(),
            rows: rows.len(),
            path: path.to_path_buf(),
        }),
        None => Ok(()),
    }
}
