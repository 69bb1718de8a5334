//! Structural extraction of method names from JavaScript source text.

/// Identifiers excluded from results regardless of how they match.
///
/// Both belong to the CommonJS export convention, not to the analyzer's
/// own API surface.
const RESERVED_NAMES: [&str; 2] = ["module", "exports"];

/// Extracts distinct method names from a source blob, in first-seen order.
///
/// A candidate is an identifier immediately followed by a parenthesized
/// argument list and an opening brace: the structural shape of a method
/// definition header. This is a lossy heuristic, not a parser: it also
/// matches control-flow headers of the same shape and misses arrow-style
/// assignments. Good enough for presentational metadata.
///
/// Never fails; returns an empty list when nothing matches.
#[must_use]
pub fn extract_method_names(source: &str) -> Vec<String> {
    let bytes = source.as_bytes();
    let mut names: Vec<String> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !is_identifier_start(bytes[i]) {
            i += 1;
            continue;
        }

        // An identifier continuing a longer word is not a candidate.
        if i > 0 && is_identifier_char(bytes[i - 1]) {
            while i < bytes.len() && is_identifier_char(bytes[i]) {
                i += 1;
            }
            continue;
        }

        let start = i;
        while i < bytes.len() && is_identifier_char(bytes[i]) {
            i += 1;
        }
        let name = &source[start..i];

        if let Some(after) = match_signature_tail(bytes, i) {
            if !is_reserved(name) && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
            i = after;
        }
    }

    names
}

/// Matches `( non-paren-run ) {` starting at `i`, allowing surrounding
/// whitespace. Returns the index just past the opening brace.
fn match_signature_tail(bytes: &[u8], mut i: usize) -> Option<usize> {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i >= bytes.len() || bytes[i] != b'(' {
        return None;
    }
    i += 1;
    while i < bytes.len() && bytes[i] != b')' {
        i += 1;
    }
    if i >= bytes.len() {
        return None;
    }
    i += 1;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'{' {
        Some(i + 1)
    } else {
        None
    }
}

fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_identifier_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.iter().any(|reserved| name.eq_ignore_ascii_case(reserved))
}
