//! Resilient acquisition of tracked project files.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Prefix of the sentinel text embedded in place of an unreadable file.
const PLACEHOLDER_PREFIX: &str = "[unavailable: ";

/// Reads `relative` under `root`, degrading to a placeholder on failure.
///
/// A missing or unreadable auxiliary file must not abort generation; the
/// placeholder carries the path and the underlying error so the gap stays
/// visible in the composed document.
pub fn acquire(fs: &dyn FileSystem, root: &Path, relative: &str) -> String {
    let path = root.join(relative);
    match fs.read_to_string(&path) {
        Ok(text) => text,
        Err(err) => placeholder(relative, &err.to_string()),
    }
}

/// Formats the sentinel text substituted for an unreadable file.
#[must_use]
pub fn placeholder(relative: &str, error: &str) -> String {
    format!("{PLACEHOLDER_PREFIX}{relative}: {error}]")
}

/// Returns `true` if acquired text is a placeholder rather than content.
#[must_use]
pub fn is_placeholder(text: &str) -> bool {
    text.starts_with(PLACEHOLDER_PREFIX)
}
