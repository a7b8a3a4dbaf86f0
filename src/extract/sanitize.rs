//! Generic string sanitizer for renderer-bound text.

use std::collections::BTreeMap;

/// Strip the characters that break the renderer's prop tables: double
/// quotes, backticks and newlines. Idempotent.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '"' | '`' | '\n' | '\r'))
        .collect()
}

/// Sanitize every value of a tag map, keeping keys untouched.
pub fn sanitize_tags(tags: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    tags.iter()
        .map(|(key, value)| (key.clone(), sanitize(value)))
        .collect()
}
