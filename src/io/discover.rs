//! Locating ACS geography files on disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use walkdir::WalkDir;

/// Recursively find per-state geography files (`g{year}{span}{state}.csv`) under `dir`,
/// sorted by path.
///
/// The nation-wide `us` file is skipped: its record numbers index the nation-level
/// estimate files, not the per-state ones.
pub fn discover_geography_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = Regex::new(r"(?i)^g\d{5}([a-z]{2})\.csv$")?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("[io::discover] Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() { continue }

        let Some(name) = entry.file_name().to_str() else { continue };
        match pattern.captures(name) {
            Some(caps) if !caps[1].eq_ignore_ascii_case("us") => files.push(entry.into_path()),
            _ => {}
        }
    }

    files.sort();
    Ok(files)
}
