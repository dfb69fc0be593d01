use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tempfile::TempDir;
use zip::ZipArchive;

/// Error unless the directory already exists.
pub fn require_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("[common::fs] Directory does not exist: {}", path.display());
    }
    if !path.is_dir() {
        bail!("[common::fs] Path exists but is not a directory: {}", path.display());
    }
    Ok(())
}

/// An ACS summary-file directory, either given directly or extracted from a `.zip` archive.
/// An extracted directory is deleted when this value is dropped.
#[derive(Debug)]
pub struct AcsDir {
    root: PathBuf,
    _extracted: Option<TempDir>,
}

impl AcsDir {
    /// Open `path`, extracting it into a temporary directory first if it is a `.zip` file.
    pub fn open(path: &Path) -> Result<Self> {
        let is_zip = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
        if !is_zip {
            require_dir_exists(path)?;
            return Ok(Self { root: path.to_path_buf(), _extracted: None });
        }

        let tmp = TempDir::new().context("[common::fs] Failed to create extraction directory")?;
        extract_zip(path, tmp.path())?;
        Ok(Self { root: tmp.path().to_path_buf(), _extracted: Some(tmp) })
    }

    pub fn path(&self) -> &Path { &self.root }
}

/// Extracts the given `.zip` file to the target directory.
fn extract_zip(zip_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = fs::File::open(zip_path)
        .with_context(|| format!("[common::fs] Failed to open {}", zip_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("[common::fs] Failed to read zip archive {}", zip_path.display()))?;
    archive.extract(dest_dir)
        .with_context(|| format!("[common::fs] Failed to extract {} to {}", zip_path.display(), dest_dir.display()))?;
    Ok(())
}
