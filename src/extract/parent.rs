//! Parent-label resolution.
//!
//! Every prop is attributed to the type that declared it so the renderer can
//! group inherited props. The extraction tool reports declaration sites; the
//! first one wins. Anonymous type literals get attributed to the package or
//! file they live in instead of their placeholder name.

use crate::core::{Declaration, RawPropItem};
use crate::introspect::file_stem;

/// Marker preceding a `@types/<package>` path segment.
const TYPES_PACKAGE_MARKER: &str = "@types/";
/// Marker preceding any third-party dependency path segment.
const DEPENDENCY_MARKER: &str = "node_modules/";

/// Placeholder names the extraction tool uses for anonymous type literals.
fn is_anonymous_type_literal(declaration: &Declaration) -> bool {
    matches!(declaration.name.as_str(), "__type" | "TypeLiteral")
}

fn segment_after<'a>(path: &'a str, marker: &str) -> Option<&'a str> {
    let idx = path.find(marker)?;
    let rest = &path[idx + marker.len()..];
    rest.split('/').next().filter(|segment| !segment.is_empty())
}

/// Resolve the parent label of a prop. Order matters:
/// first declaration record -> anonymous literals attributed by path ->
/// named declarations by their own name -> reported parent -> `""`.
pub fn resolve_parent_label(prop: &RawPropItem) -> String {
    match prop.declarations.first() {
        Some(declaration) if is_anonymous_type_literal(declaration) => {
            if let Some(package) = segment_after(&declaration.file_name, TYPES_PACKAGE_MARKER) {
                package.to_string()
            } else if let Some(package) = segment_after(&declaration.file_name, DEPENDENCY_MARKER)
            {
                package.to_string()
            } else {
                file_stem(&declaration.file_name).to_string()
            }
        }
        Some(declaration) => declaration.name.clone(),
        None => prop
            .parent
            .as_ref()
            .map(|parent| parent.name.clone())
            .unwrap_or_default(),
    }
}
