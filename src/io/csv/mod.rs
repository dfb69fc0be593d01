//! Headerless CSV reading for ACS summary files.

mod read;

pub use read::*;
