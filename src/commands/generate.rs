//! `ctxsnap generate` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::snapshot::manifest::Manifest;
use crate::snapshot::{acquire, compose, scan};
use crate::snapshot::{AcquiredSource, SnapshotOptions, ANALYZER_PATH, TRACKED_SOURCES};

/// Execute the `generate` command against the live environment.
///
/// # Errors
///
/// Returns an error string when the manifest is missing or unparsable, or
/// when the composed document cannot be written.
pub fn run(root: &Path, output: &Path, options: &SnapshotOptions) -> Result<(), String> {
    let ctx = ServiceContext::live();
    run_with_context(&ctx, root, output, options)
}

/// Runs the acquire, scan, compose, write pipeline with the given context.
///
/// Per-file read failures degrade to placeholders; only the manifest and
/// the final write can fail the run.
fn run_with_context(
    ctx: &ServiceContext,
    root: &Path,
    output: &Path,
    options: &SnapshotOptions,
) -> Result<(), String> {
    let manifest = Manifest::load(ctx.fs.as_ref(), root)?;

    let mut sources = Vec::with_capacity(TRACKED_SOURCES.len());
    for spec in &TRACKED_SOURCES {
        let text = acquire::acquire(ctx.fs.as_ref(), root, spec.path);
        sources.push(AcquiredSource::new(spec, text));
    }

    let analyzer_text = sources
        .iter()
        .find(|source| source.path == ANALYZER_PATH)
        .map_or("", |source| source.text.as_str());
    let methods = scan::extract_method_names(analyzer_text);

    let generated_at = ctx.clock.now();
    let document = compose::compose(&manifest, &sources, &methods, generated_at, options);

    let destination = root.join(output);
    ctx.fs.write(&destination, &document).map_err(|e| {
        format!("failed to write context document to {}: {e}", destination.display())
    })?;

    let embedded = sources.iter().filter(|s| !acquire::is_placeholder(&s.text)).count();
    println!(
        "Context written to {} ({} methods, {}/{} sources embedded)",
        destination.display(),
        methods.len(),
        embedded,
        sources.len(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    /// Cassette for a run where only the manifest and the analyzer exist.
    fn make_run_cassette() -> Cassette {
        let mut interactions = vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "read_to_string".into(),
            input: json!({"path": "/project/package.json"}),
            output: json!({"ok": r#"{"name": "chain-service", "version": "1.4.2"}"#}),
        }];

        // Tracked sources, in declaration order. Every read but the
        // analyzer's fails.
        for (offset, spec) in TRACKED_SOURCES.iter().enumerate() {
            let output = if spec.path == ANALYZER_PATH {
                json!({"ok": "buildChain(records) {}\ndetectGaps(chain) {}\nmodule.exports = {};"})
            } else {
                json!({"err": format!("No such file or directory: {}", spec.path)})
            };
            interactions.push(Interaction {
                seq: 1 + offset as u64,
                port: "fs".into(),
                method: "read_to_string".into(),
                input: json!({"path": format!("/project/{}", spec.path)}),
                output,
            });
        }

        interactions.push(Interaction {
            seq: 8,
            port: "clock".into(),
            method: "now".into(),
            input: json!({}),
            output: json!("2025-07-01T08:00:00Z"),
        });
        interactions.push(Interaction {
            seq: 9,
            port: "fs".into(),
            method: "write".into(),
            input: json!({"path": "/project/LLM_CONTEXT.md"}),
            output: json!(null),
        });

        Cassette { name: "generate-run".into(), recorded_at: Utc::now(), interactions }
    }

    #[test]
    fn pipeline_succeeds_with_degraded_sources() {
        let ctx = ServiceContext::replaying_cassette(&make_run_cassette());
        let result = run_with_context(
            &ctx,
            Path::new("/project"),
            Path::new("LLM_CONTEXT.md"),
            &SnapshotOptions::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn missing_manifest_is_fatal() {
        let cassette = Cassette {
            name: "no-manifest".into(),
            recorded_at: Utc::now(),
            interactions: vec![Interaction {
                seq: 0,
                port: "fs".into(),
                method: "read_to_string".into(),
                input: json!({"path": "/project/package.json"}),
                output: json!({"err": "No such file or directory (os error 2)"}),
            }],
        };
        let ctx = ServiceContext::replaying_cassette(&cassette);
        let result = run_with_context(
            &ctx,
            Path::new("/project"),
            Path::new("LLM_CONTEXT.md"),
            &SnapshotOptions::default(),
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("manifest"));
    }

    #[test]
    fn failed_write_is_fatal() {
        let mut cassette = make_run_cassette();
        let write = cassette
            .interactions
            .iter_mut()
            .find(|i| i.method == "write")
            .expect("cassette records a write");
        write.output = json!({"err": "Permission denied (os error 13)"});

        let ctx = ServiceContext::replaying_cassette(&cassette);
        let result = run_with_context(
            &ctx,
            Path::new("/project"),
            Path::new("LLM_CONTEXT.md"),
            &SnapshotOptions::default(),
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Permission denied"));
    }
}
