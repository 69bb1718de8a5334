//! Composition of the final context document.

use chrono::{DateTime, Utc};

use crate::snapshot::manifest::Manifest;
use crate::snapshot::{AcquiredSource, SnapshotOptions, ANALYZER_PATH};

/// Marker appended to excerpts cut at the configured character cap.
pub const TRUNCATION_MARKER: &str = "[truncated]";

const TITLE: &str = "\
# Ownership-Chain Service: LLM Context Snapshot

This document is generated on every change to the repository. It bundles
the project narrative, the declared API surface, and the current source of
the tracked files into one artifact suitable as context for a language
model or a new contributor. Do not edit it by hand.
";

const PURPOSE: &str = "\
## Purpose

The ownership-chain service reconstructs the ownership history of a road
vehicle from national vehicle registry extracts. Given a plate or VIN, it
fetches the registered transfer records, orders them into a chain, checks
the chain for continuity, and reports the current owner together with any
gaps or overlaps it found. The service exists because raw registry
extracts list transfers in filing order, not ownership order, and routinely
contain duplicated or out-of-sequence records that buyers need resolved
before a sale.
";

const ARCHITECTURE: &str = "\
## Architecture

```text
browser (public/index.html + public/app.js)
    |  fetch /api/...
    v
server.js
    |
    v
routes/api.js ----> services/chain-analyzer.js
                         |
                         v
                services/registry-client.js ----> national vehicle registry API
```

`server.js` boots Express and mounts the router. `routes/api.js` validates
requests and translates analyzer results into HTTP responses. The analyzer
is pure domain logic; only `registry-client.js` talks to the network.
";

const WORKFLOW: &str = "\
## Workflow

1. The user submits a plate or VIN in the frontend form.
2. `routes/api.js` validates the identifier format and rejects obviously
   malformed input before any network call.
3. `registry-client.js` requests the registry extract for the vehicle and
   normalizes field names across the registry's two response formats.
4. `chain-analyzer.js` orders the transfer records by registration date
   and links them into an ownership chain.
5. The analyzer flags gaps (a transfer whose seller is not the previous
   buyer) and overlaps (two records claiming the same period).
6. The route serializes the chain, the findings, and the resolved current
   owner back to the frontend.
";

const DATA_SHAPES: &str = r#"## Data Shapes

A normalized registry extract record:

```json
{
  "plate": "FX482KL",
  "vin": "ZFA19200001234567",
  "transfer": {
    "registeredOn": "2019-03-11",
    "seller": { "taxCode": "RSSMRA70A01H501S", "name": "Mario Rossi" },
    "buyer": { "taxCode": "VRDGPP81B02F205X", "name": "Giuseppe Verdi" }
  },
  "source": "extract-2024-11"
}
```

Records arrive unordered and may repeat; the analyzer treats the pair
(registeredOn, buyer.taxCode) as the record identity when deduplicating.
"#;

const ALGORITHM: &str = "\
## Chain Reconstruction Algorithm

The analyzer sorts transfer records by registration date, earliest first,
then walks the sorted list once. Each record extends the chain when its
seller matches the buyer of the previous record. A mismatch opens a gap:
the chain is split, the missing span is recorded with both bounding
owners, and reconstruction continues from the mismatched record. Records
whose period overlaps an already-linked record are kept out of the chain
and reported separately rather than guessed at. The current owner is the
buyer of the last linked record, and the chain is marked complete only
when it starts at the vehicle's first registration and contains no gaps.
The algorithm is deliberately conservative: it never invents a link the
registry does not assert.
";

const RESPONSE_EXAMPLES: &str = r#"## Response Examples

`POST /api/analyze` on a clean history:

```json
{
  "plate": "FX482KL",
  "complete": true,
  "currentOwner": { "taxCode": "VRDGPP81B02F205X", "name": "Giuseppe Verdi" },
  "chain": [
    { "from": "2015-06-02", "to": "2019-03-11", "owner": "Mario Rossi" },
    { "from": "2019-03-11", "to": null, "owner": "Giuseppe Verdi" }
  ],
  "gaps": [],
  "overlaps": []
}
```

With a break in the chain:

```json
{
  "plate": "FX482KL",
  "complete": false,
  "currentOwner": { "taxCode": "VRDGPP81B02F205X", "name": "Giuseppe Verdi" },
  "chain": [ "..." ],
  "gaps": [
    { "after": "Mario Rossi", "before": "Luca Bianchi", "span": "2017-01-09..2018-05-30" }
  ],
  "overlaps": []
}
```
"#;

const API_SURFACE: &str = "\
## API Surface

- `GET /api/health` liveness probe; reports the service version from the
  manifest.
- `POST /api/analyze` body `{ \"plate\": \"...\" }` or `{ \"vin\": \"...\" }`;
  runs the full reconstruction and returns the shapes above.
- `GET /api/vehicle/:plate` returns the cached normalized extract for a
  vehicle without running the analyzer.

Errors use a single envelope: `{ \"error\": { \"code\": \"...\", \"message\":
\"...\" } }` with HTTP 400 for validation failures and 502 when the
registry is unreachable.
";

/// Composes the full markdown document.
///
/// Pure: the same manifest, sources, names, timestamp, and options always
/// yield the same text. Placeholder texts embed exactly like file content.
#[must_use]
pub fn compose(
    manifest: &Manifest,
    sources: &[AcquiredSource],
    methods: &[String],
    generated_at: DateTime<Utc>,
    options: &SnapshotOptions,
) -> String {
    let mut doc = String::new();

    for section in [
        TITLE,
        PURPOSE,
        ARCHITECTURE,
        WORKFLOW,
        DATA_SHAPES,
        ALGORITHM,
        RESPONSE_EXAMPLES,
        API_SURFACE,
    ] {
        doc.push_str(section);
        doc.push('\n');
    }

    push_methods_section(&mut doc, methods);
    push_excerpts_section(&mut doc, sources, options);
    push_manifest_section(&mut doc, manifest);
    push_footer(&mut doc, manifest, methods, generated_at);

    doc
}

/// The analyzer method listing, in scanner order.
fn push_methods_section(doc: &mut String, methods: &[String]) {
    doc.push_str("## Analyzer Methods\n\n");
    doc.push_str(&format!(
        "{} method(s) detected in `{ANALYZER_PATH}` by structural scan:\n\n",
        methods.len()
    ));
    if methods.is_empty() {
        doc.push_str("(none detected)\n");
    } else {
        for name in methods {
            doc.push_str(&format!("- `{name}`\n"));
        }
    }
    doc.push('\n');
}

/// One fenced block per tracked file, bounded for the browser assets.
fn push_excerpts_section(doc: &mut String, sources: &[AcquiredSource], options: &SnapshotOptions) {
    doc.push_str("## Source Excerpts\n\n");
    for source in sources {
        doc.push_str(&format!("### `{}` ({})\n\n", source.path, source.title));
        doc.push_str(&format!("```{}\n", fence_language(&source.path)));
        let excerpt = if source.truncate {
            truncate_chars(&source.text, options.max_excerpt_chars)
        } else {
            source.text.clone()
        };
        doc.push_str(&excerpt);
        if !excerpt.ends_with('\n') {
            doc.push('\n');
        }
        doc.push_str("```\n\n");
    }
}

/// The manifest, re-embedded verbatim as pretty-printed JSON.
fn push_manifest_section(doc: &mut String, manifest: &Manifest) {
    doc.push_str("## Manifest\n\n```json\n");
    doc.push_str(&manifest.to_pretty_json());
    doc.push_str("\n```\n\n");
}

fn push_footer(
    doc: &mut String,
    manifest: &Manifest,
    methods: &[String],
    generated_at: DateTime<Utc>,
) {
    doc.push_str("---\n\n");
    doc.push_str(&format!("Generated at: {}\n", generated_at.to_rfc3339()));
    doc.push_str(&format!("Service version: {}\n", manifest.version()));
    doc.push_str(&format!("Extracted methods: {}\n", methods.len()));
}

/// Cuts `text` to at most `max_chars` characters, appending the truncation
/// marker on its own line when anything was cut.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut_at, _)) => {
            let mut excerpt = text[..cut_at].to_string();
            if !excerpt.ends_with('\n') {
                excerpt.push('\n');
            }
            excerpt.push_str(TRUNCATION_MARKER);
            excerpt.push('\n');
            excerpt
        }
        None => text.to_string(),
    }
}

/// Fence language tag for an embedded file, from its extension.
fn fence_language(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("js") => "javascript",
        Some("html") => "html",
        Some("md") => "markdown",
        Some("json") => "json",
        _ => "text",
    }
}
