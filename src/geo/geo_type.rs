/// Summary levels the directory understands. Everything else in a geography file is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoType {
    State,      // Highest-level entity
    County,     // County -> State
}

impl GeoType {
    /// Census summary-level code for this entity type.
    pub fn summary_level(&self) -> &'static str {
        match self {
            GeoType::State => "040",
            GeoType::County => "050",
        }
    }

    pub fn from_summary_level(code: &str) -> Option<GeoType> {
        match code {
            "040" => Some(GeoType::State),
            "050" => Some(GeoType::County),
            _ => None,
        }
    }
}
