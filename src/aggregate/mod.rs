//! Aggregation and shared-type deduplication.
//!
//! The final pipeline stage: pick one canonical doc per source file, let the
//! consumer hook register parent types and shared aliases, and produce the
//! sorted processed docs.

pub mod caches;

pub use caches::SharedCaches;

use std::collections::{BTreeMap, HashMap};

use crate::core::{PreProcessedDoc, PreProcessedPropItem, ProcessedPropItem};
use crate::extract::{canonicalize, sanitize};
use crate::introspect::file_stem;

/// Collapse a pre-processed prop to its final renderer shape: declarations
/// and tags stripped, type reduced to one display string.
pub fn process_prop(prop: &PreProcessedPropItem) -> ProcessedPropItem {
    let display = prop
        .prop_type
        .raw
        .as_deref()
        .unwrap_or(&prop.prop_type.name);
    ProcessedPropItem {
        name: prop.name.clone(),
        required: prop.required,
        default_value: prop.default_value.clone(),
        description: prop.description.clone(),
        type_display: canonicalize(display),
        parent: prop.parent.clone(),
    }
}

/// Required props first, alphabetical within each group. Stable for ties.
pub fn sort_props(props: &mut [ProcessedPropItem]) {
    props.sort_by(|a, b| b.required.cmp(&a.required).then_with(|| a.name.cmp(&b.name)));
}

/// One winner per source file path: the doc whose display name
/// case-insensitively equals the file stem, else the first doc encountered
/// for that path. Output preserves first-occurrence order of paths.
pub fn select_primary_docs(docs: Vec<PreProcessedDoc>) -> Vec<PreProcessedDoc> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<PreProcessedDoc>> = HashMap::new();
    for doc in docs {
        if !groups.contains_key(&doc.file_path) {
            order.push(doc.file_path.clone());
        }
        groups.entry(doc.file_path.clone()).or_default().push(doc);
    }

    let mut selected = Vec::with_capacity(order.len());
    for path in order {
        let Some(mut group) = groups.remove(&path) else {
            continue;
        };
        let stem = file_stem(&path);
        let winner = group
            .iter()
            .position(|doc| doc.display_name.eq_ignore_ascii_case(stem))
            .unwrap_or(0);
        selected.push(group.swap_remove(winner));
    }
    selected
}

/// Context handed to the `on_process_doc` hook: registration side-channels
/// into the doc's parent-types map and the run's shared caches.
pub struct DocHooks<'a> {
    pub(crate) parent_types: &'a mut BTreeMap<String, Vec<String>>,
    pub(crate) caches: &'a mut SharedCaches,
}

impl DocHooks<'_> {
    /// Register props under their parent labels. Appends each prop name to
    /// its parent's ordered list (once per doc) and records the canonical
    /// processed form in the shared cache the first time the
    /// (parent, name) pair is seen this run.
    pub fn add_to_parent_types(&mut self, props: &[PreProcessedPropItem]) {
        for prop in props {
            let names = self.parent_types.entry(prop.parent.clone()).or_default();
            if names.iter().any(|name| name == &prop.name) {
                continue;
            }
            names.push(prop.name.clone());
            self.caches.insert_parent_type_prop(process_prop(prop));
        }
    }

    /// Register a documentation-worthy named type alias.
    pub fn add_to_shared_type_aliases(&mut self, name: &str, value: &str) {
        self.caches.insert_type_alias(name, value);
    }

    /// The generic sanitizer, for consumer-formatted strings.
    pub fn format_string(&self, input: &str) -> String {
        sanitize(input)
    }
}
