//! American Community Survey sequence-file import.

mod loader;
mod registry;
mod source;
mod stats;

pub use loader::load;
pub use registry::{group_by_sequence, parse_sequence, SequenceTable, StatType, SEQUENCE_TABLES};
pub use source::{sequence_file_name, DiskSource, SequenceSource};
pub use stats::{assemble, AcsStatistics, FoodStamps, Fragment, TotalPopulation};
