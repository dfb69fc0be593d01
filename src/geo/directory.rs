use ahash::AHashMap;
use tracing::{debug, trace};

use crate::error::{ImportError, Result};
use super::{County, GeoType, State};

// Field positions in an ACS geography file row.
const STATE_IDX: usize = 1;
const SUMLEVEL_IDX: usize = 2;
const COMPONENT_IDX: usize = 3;
const RECNO_IDX: usize = 4;
const GEOID_IDX: usize = 48;
const NAME_IDX: usize = 49;

/// Component code of the whole entity (as opposed to urban/rural parts).
const COMPONENT_WHOLE: &str = "00";

/// One fixed-position row of a geography file.
#[derive(Debug, Clone, Copy)]
pub struct GeoRecord<'a> {
    fields: &'a [String],
}

impl<'a> GeoRecord<'a> {
    pub fn new(fields: &'a [String]) -> Self { Self { fields } }

    fn field(&self, idx: usize) -> Option<&'a str> {
        self.fields.get(idx).map(|s| s.trim())
    }

    fn geo_id(&self) -> &'a str { self.field(GEOID_IDX).unwrap_or("<unknown>") }

    fn require(&self, idx: usize, what: &str) -> Result<&'a str> {
        self.field(idx).ok_or_else(|| ImportError::MalformedRecord {
            geo_id: self.geo_id().to_string(),
            reason: format!("missing {what} field (record has {} fields)", self.fields.len()),
        })
    }

    /// Record number, which must be a positive integer.
    fn record_number(&self) -> Result<u32> {
        let raw = self.require(RECNO_IDX, "record number")?;
        match raw.parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ImportError::MalformedRecord {
                geo_id: self.geo_id().to_string(),
                reason: format!("invalid record number {raw:?}"),
            }),
        }
    }

    /// Entity type of this record, `None` for summary levels the directory skips.
    fn ty(&self) -> Result<Option<GeoType>> {
        let ty = GeoType::from_summary_level(self.require(SUMLEVEL_IDX, "summary level")?);
        if ty == Some(GeoType::State) && self.require(COMPONENT_IDX, "component")? != COMPONENT_WHOLE {
            return Ok(None);
        }
        Ok(ty)
    }
}

/// Accumulates geography records (from any number of files) into a State -> County tree.
///
/// Counties keep the order they were added in, since that order mirrors the row layout of
/// the sequence files.
#[derive(Debug, Default)]
pub struct DirectoryBuilder {
    states: Vec<State>,
    index: AHashMap<String, usize>, // state abbrev -> position in `states`
}

impl DirectoryBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn num_states(&self) -> usize { self.states.len() }

    /// Add a single geography record.
    pub fn add_record(&mut self, record: GeoRecord<'_>) -> Result<()> {
        let record_number = record.record_number()?;

        match record.ty()? {
            Some(GeoType::State) => self.add_state(record, record_number),
            Some(GeoType::County) => self.add_county(record, record_number),
            None => Ok(()),
        }
    }

    /// Add every row of one geography file, in file order.
    pub fn add_rows(&mut self, rows: &[Vec<String>]) -> Result<()> {
        rows.iter().try_for_each(|row| self.add_record(GeoRecord::new(row)))
    }

    /// Finish building, returning states in the order they were first observed.
    pub fn finish(self) -> Vec<State> {
        debug!(
            states = self.states.len(),
            counties = self.states.iter().map(|s| s.counties.len()).sum::<usize>(),
            "geography directory built"
        );
        self.states
    }

    fn add_state(&mut self, record: GeoRecord<'_>, record_number: u32) -> Result<()> {
        let abbrev = record.require(STATE_IDX, "state")?.to_string();
        if self.index.contains_key(&abbrev) {
            return Err(ImportError::Consistency(format!(
                "duplicate state record {} for {abbrev}", record.geo_id()
            )));
        }

        let id = record.require(GEOID_IDX, "geography id")?.to_string();
        let name = record.require(NAME_IDX, "name")?.to_string();

        trace!(state = %abbrev, record_number, "state");
        self.index.insert(abbrev.clone(), self.states.len());
        self.states.push(State { id, abbrev, name, record_number, counties: Vec::new() });
        Ok(())
    }

    fn add_county(&mut self, record: GeoRecord<'_>, record_number: u32) -> Result<()> {
        let state_code = record.require(STATE_IDX, "state")?;
        let idx = *self.index.get(state_code).ok_or_else(|| ImportError::Consistency(format!(
            "county {} references state {state_code} before its state record", record.geo_id()
        )))?;

        // "Kent County, Rhode Island" -> "Kent County"
        let name = record.require(NAME_IDX, "name")?;
        let name = name.split(',').next().unwrap_or(name);

        self.states[idx].counties.push(County {
            id: record.require(GEOID_IDX, "geography id")?.to_string(),
            state: state_code.to_string(),
            name: name.to_string(),
            record_number,
        });
        Ok(())
    }
}
