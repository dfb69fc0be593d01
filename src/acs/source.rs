use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::io;

/// Access to ACS estimate files, one per (state, sequence) pair.
///
/// The loader resolves a path once per pair and reads it at most once per call.
pub trait SequenceSource {
    /// Path of the estimate file for a lower-case state code and sequence id.
    fn path(&self, state: &str, sequence: &str) -> PathBuf;

    /// Read every row of the file at `path`.
    fn read(&self, path: &Path) -> Result<Vec<Vec<String>>>;
}

/// File name of an estimate file, e.g. `e20151ri0094000.txt`.
pub fn sequence_file_name(prefix: &str, state: &str, sequence: &str) -> String {
    format!("{prefix}{state}{sequence}000.txt")
}

/// Estimate files stored side by side in one directory.
#[derive(Debug, Clone)]
pub struct DiskSource {
    root: PathBuf,
    prefix: String,
}

impl DiskSource {
    /// `prefix` is the survey part of the file name, e.g. "e20151" for the 2015 1-year estimates.
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self { root: root.into(), prefix: prefix.into() }
    }
}

impl SequenceSource for DiskSource {
    fn path(&self, state: &str, sequence: &str) -> PathBuf {
        self.root.join(sequence_file_name(&self.prefix, state, sequence))
    }

    fn read(&self, path: &Path) -> Result<Vec<Vec<String>>> { io::read_rows(path) }
}
