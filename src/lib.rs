#![doc = "ACS statistics import and Huntington-Hill apportionment"]
mod acs;
mod apportion;
mod common;
mod config;
mod error;
mod geo;
mod import;
mod io;

#[doc(inline)]
pub use acs::{
    assemble, group_by_sequence, load, parse_sequence, sequence_file_name,
    AcsStatistics, DiskSource, FoodStamps, Fragment, SequenceSource, SequenceTable, StatType,
    TotalPopulation, SEQUENCE_TABLES,
};

#[doc(inline)]
pub use apportion::apportion;

#[doc(inline)]
pub use common::{AcsDir, read_json_file, write_json_file};

#[doc(inline)]
pub use config::ImportConfig;

#[doc(inline)]
pub use error::{ApportionError, ImportError, Result};

#[doc(inline)]
pub use geo::{County, DirectoryBuilder, GeoRecord, GeoType, Geography, State};

#[doc(inline)]
pub use import::{import_acs, import_counties, import_states, state_populations};

#[doc(inline)]
pub use io::{discover_geography_files, read_rows};
