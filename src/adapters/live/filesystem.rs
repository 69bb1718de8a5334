//! Live filesystem adapter using `std::fs`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
///
/// Writes go through a staging file that is renamed over the destination,
/// so a failed write never leaves a truncated document behind.
pub struct LiveFileSystem;

/// Staging path used during a write: the destination name plus `.tmp`,
/// in the same directory so the final rename stays on one filesystem.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(|| OsString::from("out"), OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}

impl FileSystem for LiveFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let staging = staging_path(path);
        std::fs::write(&staging, contents)?;
        if let Err(err) = std::fs::rename(&staging, path) {
            let _ = std::fs::remove_file(&staging);
            return Err(err.into());
        }
        Ok(())
    }
}
