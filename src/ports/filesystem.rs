//! Filesystem port for file I/O operations.

use std::path::Path;

/// Provides filesystem access for reading tracked files and writing the
/// composed document.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or is
    /// not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Replaces the file at `path` with `contents` in one observable step.
    ///
    /// Implementations must never leave a truncated file at `path`: after
    /// a failed write the destination still holds its previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
