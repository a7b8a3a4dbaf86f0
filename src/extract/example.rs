//! Description and usage-example formatting.

use std::collections::BTreeMap;

use super::sanitize::sanitize;

const FENCE: &str = "```tsx";
const LIVE_FENCE: &str = "```tsx live";

/// Pick the doc description: an explicit `@description` tag beats the
/// tool's free-text description. The result is sanitized either way.
pub fn resolve_description(free_text: &str, tags: &BTreeMap<String, String>) -> String {
    match tags.get("description") {
        Some(tag) => sanitize(tag),
        None => sanitize(free_text),
    }
}

/// Wrap an `@example` tag as a live-previewable fenced code block. Content
/// that already carries a `tsx` fence is upgraded in place instead of being
/// wrapped a second time.
pub fn format_example(tag: &str) -> String {
    if tag.contains(FENCE) {
        tag.lines()
            .map(|line| {
                if line.trim() == FENCE {
                    LIVE_FENCE.to_string()
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        format!("{LIVE_FENCE}\n{tag}\n```")
    }
}
