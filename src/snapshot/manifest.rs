//! Project manifest loading and verbatim re-embedding.

use std::path::Path;

use serde_json::Value;

use crate::ports::filesystem::FileSystem;

/// Relative path of the manifest within the project root.
pub const MANIFEST_PATH: &str = "package.json";

/// Parsed project manifest, kept as arbitrary JSON.
///
/// The shape is never validated; the composed document re-embeds the
/// record verbatim. Only a missing or unparsable manifest file is fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    raw: Value,
}

impl Manifest {
    /// Loads and parses the manifest under `root`.
    ///
    /// # Errors
    ///
    /// Returns an error string when the file cannot be read or is not
    /// valid JSON. Either case is fatal for the run.
    pub fn load(fs: &dyn FileSystem, root: &Path) -> Result<Self, String> {
        let path = root.join(MANIFEST_PATH);
        let text = fs
            .read_to_string(&path)
            .map_err(|e| format!("failed to read manifest at {}: {e}", path.display()))?;
        Self::parse(&text).map_err(|e| format!("failed to parse manifest at {}: {e}", path.display()))
    }

    /// Parses manifest text into a record.
    ///
    /// # Errors
    ///
    /// Returns the JSON parse error message when the text is malformed.
    pub fn parse(text: &str) -> Result<Self, String> {
        let raw: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
        Ok(Self { raw })
    }

    /// The declared `version` field, or `"unknown"` when absent.
    #[must_use]
    pub fn version(&self) -> &str {
        self.raw.get("version").and_then(Value::as_str).unwrap_or("unknown")
    }

    /// Re-serializes the manifest as pretty-printed JSON.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveFileSystem;

    #[test]
    fn parses_and_exposes_the_declared_version() {
        let manifest = Manifest::parse(r#"{"name": "chain-service", "version": "1.0.0"}"#).unwrap();
        assert_eq!(manifest.version(), "1.0.0");
    }

    #[test]
    fn version_falls_back_to_unknown() {
        let manifest = Manifest::parse(r#"{"name": "chain-service"}"#).unwrap();
        assert_eq!(manifest.version(), "unknown");
    }

    #[test]
    fn malformed_text_is_an_error() {
        assert!(Manifest::parse("{ not json").is_err());
    }

    #[test]
    fn pretty_json_round_trips_the_record() {
        let manifest =
            Manifest::parse(r#"{"version": "2.1.0", "dependencies": {"express": "^4"}}"#).unwrap();
        let pretty = manifest.to_pretty_json();
        assert!(pretty.contains("\"version\": \"2.1.0\""));
        assert!(pretty.contains("\"express\": \"^4\""));
        assert_eq!(Manifest::parse(&pretty).unwrap(), manifest);
    }

    #[test]
    fn load_reads_package_json_under_the_root() {
        let dir = std::env::temp_dir().join("ctxsnap_manifest_load");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("package.json"), r#"{"version": "3.2.1"}"#).unwrap();

        let manifest = Manifest::load(&LiveFileSystem, &dir).unwrap();
        assert_eq!(manifest.version(), "3.2.1");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_fails_when_the_manifest_is_missing() {
        let dir = std::env::temp_dir().join("ctxsnap_manifest_missing");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let result = Manifest::load(&LiveFileSystem, &dir);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("manifest"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
