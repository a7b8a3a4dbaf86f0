//! Type-string canonicalization.
//!
//! The checker prints a handful of well-known types as long generated
//! unions. Those exact strings are rewritten to short human names; every
//! other type string only passes through the generic sanitizer. The table is
//! data, not branches, so new entries never touch pipeline logic.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::sanitize::sanitize;

/// Exact verbose type string -> canonical short name.
static CANONICAL_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "string | number | boolean | ReactElement<any, string | JSXElementConstructor<any>> | Iterable<ReactNode> | ReactPortal",
            "React.ReactNode",
        ),
        (
            "false | RegisteredStyle<ViewStyle> | Falsy | AnimatedStyleProp<ViewStyle> | RecursiveArray<AnimatedStyleProp<ViewStyle>>",
            "Animated.ViewStyle",
        ),
    ])
});

/// Collapse a type string to its display form: exact table hits get the
/// mapped short name, everything else is passed through the sanitizer
/// unchanged. Long unions outside the table are never auto-summarized.
pub fn canonicalize(raw: &str) -> String {
    match CANONICAL_TYPES.get(raw) {
        Some(short) => (*short).to_string(),
        None => sanitize(raw),
    }
}
