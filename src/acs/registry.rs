use std::{fmt, path::Path};

use crate::error::{ImportError, Result};
use super::{FoodStamps, Fragment, TotalPopulation};

/// Statistic types that can be imported from ACS sequence files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatType {
    TotalPopulation,
    FoodStamps,
}

impl StatType {
    pub fn to_str(&self) -> &'static str {
        match self {
            StatType::TotalPopulation => "total_population",
            StatType::FoodStamps => "food_stamps",
        }
    }

    /// Registered descriptor for this statistic.
    pub fn table(&self) -> &'static SequenceTable {
        match self {
            StatType::TotalPopulation => &SEQUENCE_TABLES[0],
            StatType::FoodStamps => &SEQUENCE_TABLES[1],
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.to_str()) }
}

/// Where one statistic lives inside the ACS summary file.
#[derive(Debug)]
pub struct SequenceTable {
    pub stat: StatType,
    /// Census table id, e.g. "B01003".
    pub table_id: &'static str,
    /// Sequence file holding the table, e.g. "0003".
    pub sequence: &'static str,
    /// 1-based position of the table's first estimate within a sequence row.
    pub offset: usize,
    /// Number of consecutive estimate fields.
    pub count: usize,
    /// Builds the fragment from exactly `count` parsed fields, in declared order.
    parse: fn(&[u64]) -> Fragment,
}

/// Every supported statistic. Supporting a new one means adding a row here
/// (and a `Fragment` variant for its values).
pub static SEQUENCE_TABLES: [SequenceTable; 2] = [
    SequenceTable {
        stat: StatType::TotalPopulation,
        table_id: "B01003",
        sequence: "0003",
        offset: 130,
        count: 1,
        parse: TotalPopulation::from_fields,
    },
    SequenceTable {
        stat: StatType::FoodStamps,
        table_id: "C22001",
        sequence: "0094",
        offset: 128,
        count: 3,
        parse: FoodStamps::from_fields,
    },
];

impl SequenceTable {
    /// 0-based half-open field range of this table within a sequence row.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.offset.saturating_sub(1);
        start..start + self.count
    }
}

/// Group tables by sequence file, keeping the order in which each sequence first appears.
pub fn group_by_sequence<'a>(tables: &[&'a SequenceTable]) -> Vec<(&'a str, Vec<&'a SequenceTable>)> {
    let mut groups: Vec<(&'a str, Vec<&'a SequenceTable>)> = Vec::new();
    for &table in tables {
        match groups.iter_mut().find(|(seq, _)| *seq == table.sequence) {
            Some((_, group)) => group.push(table),
            None => groups.push((table.sequence, vec![table])),
        }
    }
    groups
}

/// Parse the raw estimate fields of one table into its fragment.
/// `geo_id` and `path` locate the row in error reports.
pub fn parse_sequence(table: &SequenceTable, fields: &[String], geo_id: &str, path: &Path) -> Result<Fragment> {
    if fields.len() != table.count {
        return Err(ImportError::Consistency(format!(
            "table {} expects {} fields, got {} for geography {geo_id} in '{}'",
            table.table_id, table.count, fields.len(), path.display()
        )));
    }

    let values = fields.iter()
        .map(|field| field.trim().parse::<u64>().map_err(|_| ImportError::FieldFormat {
            geo_id: geo_id.to_string(),
            stat: table.stat,
            value: field.clone(),
            path: path.to_path_buf(),
        }))
        .collect::<Result<Vec<_>>>()?;

    Ok((table.parse)(&values))
}
