//! File-level IO for ACS summary files: reading headerless CSV and locating geography files.

mod csv;
mod discover;

pub use csv::read_rows;
pub use discover::discover_geography_files;
