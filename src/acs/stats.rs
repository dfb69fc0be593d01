use ahash::AHashMap;
use serde::Serialize;

use crate::error::{ImportError, Result};
use super::{SequenceTable, StatType};

/// Total population (table B01003).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalPopulation {
    pub total: u64,
}

/// Households receiving food stamps/SNAP in the past 12 months (table C22001).
/// `total` is expected to equal `yes + no`; the source data is trusted on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodStamps {
    #[serde(skip)]
    pub total: u64,
    pub yes: u64,
    pub no: u64,
}

impl TotalPopulation {
    pub(crate) fn from_fields(fields: &[u64]) -> Fragment {
        Fragment::TotalPopulation(Self { total: fields[0] })
    }
}

impl FoodStamps {
    pub(crate) fn from_fields(fields: &[u64]) -> Fragment {
        Fragment::FoodStamps(Self { total: fields[0], yes: fields[1], no: fields[2] })
    }
}

/// One statistic extracted from one sequence row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    TotalPopulation(TotalPopulation),
    FoodStamps(FoodStamps),
}

impl Fragment {
    pub fn stat(&self) -> StatType {
        match self {
            Fragment::TotalPopulation(_) => StatType::TotalPopulation,
            Fragment::FoodStamps(_) => StatType::FoodStamps,
        }
    }
}

/// All statistics imported for one geography. Statistics that were not requested stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AcsStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_population: Option<TotalPopulation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_stamps: Option<FoodStamps>,
}

impl AcsStatistics {
    pub fn get(&self, stat: StatType) -> Option<Fragment> {
        match stat {
            StatType::TotalPopulation => self.total_population.map(Fragment::TotalPopulation),
            StatType::FoodStamps => self.food_stamps.map(Fragment::FoodStamps),
        }
    }

    /// Store a fragment, refusing to overwrite a statistic already present.
    fn insert(&mut self, geo_id: &str, fragment: Fragment) -> Result<()> {
        if self.get(fragment.stat()).is_some() {
            return Err(ImportError::Consistency(format!(
                "duplicate {} fragment for geography {geo_id}", fragment.stat()
            )));
        }
        match fragment {
            Fragment::TotalPopulation(v) => self.total_population = Some(v),
            Fragment::FoodStamps(v) => self.food_stamps = Some(v),
        }
        Ok(())
    }
}

/// Merge the loader's per-geography fragments into one statistics bundle per geography.
///
/// Every fragment must belong to one of `tables`; anything else means the loader and the
/// request disagree, and the whole import is rejected.
pub fn assemble(
    fragments: AHashMap<String, Vec<Fragment>>,
    tables: &[&SequenceTable],
) -> Result<AHashMap<String, AcsStatistics>> {
    fragments.into_iter()
        .map(|(geo_id, fragments)| {
            let mut stats = AcsStatistics::default();
            for fragment in fragments {
                if !tables.iter().any(|table| table.stat == fragment.stat()) {
                    return Err(ImportError::UnknownFragment { geo_id, stat: fragment.stat() });
                }
                stats.insert(&geo_id, fragment)?;
            }
            Ok((geo_id, stats))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acs::SEQUENCE_TABLES;

    fn all_tables() -> Vec<&'static SequenceTable> { SEQUENCE_TABLES.iter().collect() }

    #[test]
    fn assembles_bundles() {
        let food = Fragment::FoodStamps(FoodStamps { total: 5, yes: 3, no: 2 });
        let pop = Fragment::TotalPopulation(TotalPopulation { total: 12 });

        let fragments = AHashMap::from_iter([
            ("05000US44007".to_string(), vec![pop, food]),
            ("05000US44009".to_string(), vec![food]),
        ]);
        let stats = assemble(fragments, &all_tables()).unwrap();

        assert_eq!(stats["05000US44007"].total_population, Some(TotalPopulation { total: 12 }));
        assert_eq!(stats["05000US44007"].food_stamps, Some(FoodStamps { total: 5, yes: 3, no: 2 }));
        assert_eq!(stats["05000US44009"].total_population, None);
    }

    #[test]
    fn empty_fragment_list_leaves_everything_unset() {
        let fragments = AHashMap::from_iter([("04000US44".to_string(), Vec::new())]);
        let stats = assemble(fragments, &all_tables()).unwrap();
        assert_eq!(stats["04000US44"], AcsStatistics::default());
    }

    #[test]
    fn unrequested_fragment_is_rejected() {
        let tables: Vec<_> = SEQUENCE_TABLES.iter()
            .filter(|t| t.stat == StatType::TotalPopulation)
            .collect();
        let fragments = AHashMap::from_iter([(
            "05000US44007".to_string(),
            vec![Fragment::FoodStamps(FoodStamps { total: 5, yes: 3, no: 2 })],
        )]);

        match assemble(fragments, &tables).unwrap_err() {
            ImportError::UnknownFragment { geo_id, stat } => {
                assert_eq!(geo_id, "05000US44007");
                assert_eq!(stat, StatType::FoodStamps);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_fragment_is_rejected() {
        let pop = Fragment::TotalPopulation(TotalPopulation { total: 1 });
        let fragments = AHashMap::from_iter([("05000US44007".to_string(), vec![pop, pop])]);
        assert!(matches!(assemble(fragments, &all_tables()), Err(ImportError::Consistency(_))));
    }

    #[test]
    fn serializes_without_unset_fields() {
        let stats = AcsStatistics {
            total_population: None,
            food_stamps: Some(FoodStamps { total: 5, yes: 3, no: 2 }),
        };
        assert_eq!(serde_json::to_string(&stats).unwrap(), r#"{"food_stamps":{"yes":3,"no":2}}"#);
    }
}
