use std::{collections::BTreeSet, path::Path};

use serde::{Deserialize, Deserializer, Serialize};

use crate::common::read_json_file;

/// Settings for one import + apportionment run. Every field has a default, so a config
/// file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Survey year of the summary files, e.g. 2015.
    pub survey_year: u16,
    /// Estimate period in years (1 or 5).
    pub survey_span: u8,
    /// Number of seats to apportion.
    pub representatives: u32,
    /// Jurisdictions that do not receive seats (postal codes, upper-cased on load).
    #[serde(deserialize_with = "upper_case_codes")]
    pub excluded_states: BTreeSet<String>,
}

fn upper_case_codes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeSet<String>, D::Error> {
    let codes = Vec::<String>::deserialize(deserializer)?;
    Ok(codes.iter().map(|code| code.trim().to_ascii_uppercase()).collect())
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            survey_year: 2015,
            survey_span: 1,
            representatives: 435,
            excluded_states: ["DC", "PR"].into_iter().map(String::from).collect(),
        }
    }
}

impl ImportConfig {
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> { read_json_file(path) }

    /// Estimate-file name prefix, e.g. "e20151".
    pub fn estimate_prefix(&self) -> String {
        format!("e{}{}", self.survey_year, self.survey_span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ImportConfig::default();
        assert_eq!(config.estimate_prefix(), "e20151");
        assert_eq!(config.representatives, 435);
        assert!(config.excluded_states.contains("PR"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ImportConfig = serde_json::from_str(r#"{"survey_span": 5, "excluded_states": ["PR"]}"#).unwrap();
        assert_eq!(config.estimate_prefix(), "e20155");
        assert_eq!(config.representatives, 435);
        assert_eq!(config.excluded_states.len(), 1);
    }

    #[test]
    fn excluded_states_are_upper_cased() {
        let config: ImportConfig = serde_json::from_str(r#"{"excluded_states": ["dc", " pr", "Gu"]}"#).unwrap();
        let codes: Vec<_> = config.excluded_states.iter().map(String::as_str).collect();
        assert_eq!(codes, ["DC", "GU", "PR"]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_json::from_str::<ImportConfig>(r#"{"seats": 3}"#).is_err());
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acs.json");
        std::fs::write(&path, r#"{"representatives": 100}"#).unwrap();
        assert_eq!(ImportConfig::from_json_file(&path).unwrap().representatives, 100);
    }
}
