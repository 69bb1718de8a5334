//! Context snapshot pipeline: acquisition, scanning, and composition.

pub mod acquire;
pub mod compose;
pub mod manifest;
pub mod scan;

/// Default character cap for truncated source excerpts.
pub const DEFAULT_MAX_EXCERPT_CHARS: usize = 2000;

/// Default output path for the composed document, relative to the root.
pub const DEFAULT_OUTPUT_PATH: &str = "LLM_CONTEXT.md";

/// Relative path of the module the method scanner runs on.
pub const ANALYZER_PATH: &str = "services/chain-analyzer.js";

/// Static declaration of one tracked project file.
#[derive(Debug, Clone, Copy)]
pub struct SourceSpec {
    /// Path relative to the project root.
    pub path: &'static str,
    /// Section title used when the file is embedded.
    pub title: &'static str,
    /// Whether the embedded excerpt is cut at the configured character cap.
    pub truncate: bool,
}

/// The fixed set of tracked files, in embedding order.
///
/// The two bundled browser assets are the only entries with no upper bound
/// on generated size, so only their excerpts truncate.
pub const TRACKED_SOURCES: [SourceSpec; 7] = [
    SourceSpec { path: "server.js", title: "Server entry point", truncate: false },
    SourceSpec { path: "routes/api.js", title: "API route definitions", truncate: false },
    SourceSpec {
        path: "services/registry-client.js",
        title: "Registry API client",
        truncate: false,
    },
    SourceSpec {
        path: "services/chain-analyzer.js",
        title: "Ownership-chain analyzer",
        truncate: false,
    },
    SourceSpec { path: "public/app.js", title: "Frontend script", truncate: true },
    SourceSpec { path: "public/index.html", title: "Markup entry point", truncate: true },
    SourceSpec { path: "README.md", title: "Project readme", truncate: false },
];

/// A tracked file together with its acquired text.
///
/// Acquired fresh on every run and never mutated afterwards; the text is
/// either file content or the acquirer's placeholder marker.
#[derive(Debug, Clone, PartialEq)]
pub struct AcquiredSource {
    /// Path relative to the project root.
    pub path: String,
    /// Section title used when the file is embedded.
    pub title: String,
    /// Whether the embedded excerpt is cut at the configured character cap.
    pub truncate: bool,
    /// Acquired file content, or a placeholder marker.
    pub text: String,
}

impl AcquiredSource {
    /// Pairs a source declaration with its acquired text.
    #[must_use]
    pub fn new(spec: &SourceSpec, text: String) -> Self {
        Self {
            path: spec.path.to_string(),
            title: spec.title.to_string(),
            truncate: spec.truncate,
            text,
        }
    }
}

/// Tunable parameters of a snapshot run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotOptions {
    /// Character cap applied to truncated excerpts.
    pub max_excerpt_chars: usize,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self { max_excerpt_chars: DEFAULT_MAX_EXCERPT_CHARS }
    }
}
