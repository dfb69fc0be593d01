use serde::Serialize;

/// A United States county (or county-equivalent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct County {
    pub id: String,
    pub state: String,
    pub name: String,
    pub record_number: u32,
}

/// A state or territory, owning its counties in file-encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    pub id: String,
    pub abbrev: String,
    pub name: String,
    pub record_number: u32,
    pub counties: Vec<County>,
}

/// Anything the sequence loader can look up: either a state or a county.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geography<'a> {
    State(&'a State),
    County(&'a County),
}

impl<'a> Geography<'a> {
    /// Globally unique geography id, e.g. "05000US44007".
    pub fn geo_id(&self) -> &'a str {
        match self {
            Geography::State(state) => &state.id,
            Geography::County(county) => &county.id,
        }
    }

    /// Two-letter postal code of the owning state.
    pub fn state_code(&self) -> &'a str {
        match self {
            Geography::State(state) => &state.abbrev,
            Geography::County(county) => &county.state,
        }
    }

    /// Row index of this geography in every sequence file of its state.
    pub fn record_number(&self) -> u32 {
        match self {
            Geography::State(state) => state.record_number,
            Geography::County(county) => county.record_number,
        }
    }
}

impl<'a> From<&'a State> for Geography<'a> {
    fn from(state: &'a State) -> Self { Geography::State(state) }
}

impl<'a> From<&'a County> for Geography<'a> {
    fn from(county: &'a County) -> Self { Geography::County(county) }
}

impl State {
    /// All counties of this state as lookup geographies.
    pub fn county_geographies(&self) -> impl Iterator<Item = Geography<'_>> {
        self.counties.iter().map(Geography::County)
    }
}
