//! Service context bundling the port trait objects.

use std::path::Path;

use crate::adapters::live::{LiveClock, LiveFileSystem};
use crate::adapters::replaying::{ReplayingClock, ReplayingFileSystem};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire
/// up different adapter implementations (live, replaying).
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the system clock and real disk I/O.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Box::new(LiveClock), fs: Box::new(LiveFileSystem) }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// Both ports are served by the same cassette; each port/method pair
    /// keeps an independent cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read cassette file {}: {e}", path.display()))?;
        let cassette: crate::cassette::format::Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("failed to parse cassette file {}: {e}", path.display()))?;

        Ok(Self::replaying_cassette(&cassette))
    }

    /// Creates a replaying context directly from an in-memory cassette.
    #[must_use]
    pub fn replaying_cassette(cassette: &crate::cassette::format::Cassette) -> Self {
        Self {
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(cassette))),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(cassette))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn replaying_context_serves_frozen_clock_and_fs() {
        let cassette = Cassette {
            name: "ctx-test".into(),
            recorded_at: Utc::now(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "clock".into(),
                    method: "now".into(),
                    input: json!({}),
                    output: json!("2025-07-01T08:00:00Z"),
                },
                Interaction {
                    seq: 1,
                    port: "fs".into(),
                    method: "read_to_string".into(),
                    input: json!({"path": "/project/README.md"}),
                    output: json!({"ok": "# Readme"}),
                },
            ],
        };

        let ctx = ServiceContext::replaying_cassette(&cassette);
        assert_eq!(ctx.clock.now().to_rfc3339(), "2025-07-01T08:00:00+00:00");
        let text = ctx.fs.read_to_string(Path::new("/project/README.md")).unwrap();
        assert_eq!(text, "# Readme");
    }

    #[test]
    fn replaying_from_file_round_trips_through_yaml() {
        let cassette = Cassette {
            name: "ctx-file-test".into(),
            recorded_at: Utc::now(),
            interactions: vec![Interaction {
                seq: 0,
                port: "clock".into(),
                method: "now".into(),
                input: json!({}),
                output: json!("2024-12-31T23:59:59Z"),
            }],
        };
        let dir = std::env::temp_dir().join("ctxsnap_ctx_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("run.cassette.yaml");
        std::fs::write(&path, serde_yaml::to_string(&cassette).unwrap()).unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();
        assert_eq!(ctx.clock.now().to_rfc3339(), "2024-12-31T23:59:59+00:00");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_errors_on_missing_cassette_file() {
        let result = ServiceContext::replaying(Path::new("/nonexistent/run.cassette.yaml"));
        assert!(result.is_err());
    }
}
