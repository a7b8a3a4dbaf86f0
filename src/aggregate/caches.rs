//! Run-scoped shared caches.
//!
//! One `SharedCaches` value lives for exactly one docgen run; a fresh run
//! gets a fresh value (or an explicit `reset()`), so nothing leaks across
//! runs. The parent-type records keep insertion order and hold one canonical
//! record per (parent, name) pair; the first insertion wins for the whole
//! run.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::core::ProcessedPropItem;
use crate::extract::{canonicalize, sanitize};

#[derive(Debug, Default, Serialize)]
pub struct SharedCaches {
    parent_type_props: Vec<ProcessedPropItem>,
    #[serde(skip)]
    seen: HashSet<(String, String)>,
    type_aliases: BTreeMap<String, String>,
}

impl SharedCaches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both caches. Equivalent to starting a new run.
    pub fn reset(&mut self) {
        self.parent_type_props.clear();
        self.seen.clear();
        self.type_aliases.clear();
    }

    /// Insert the canonical record for a (parent, name) pair. Returns false
    /// when the pair was already recorded this run.
    pub(crate) fn insert_parent_type_prop(&mut self, prop: ProcessedPropItem) -> bool {
        let key = (prop.parent.clone(), prop.name.clone());
        if self.seen.insert(key) {
            self.parent_type_props.push(prop);
            true
        } else {
            false
        }
    }

    /// Register a documented type alias; the value is sanitized and
    /// canonicalized before storage.
    pub fn insert_type_alias(&mut self, name: &str, value: &str) {
        self.type_aliases
            .insert(name.to_string(), canonicalize(&sanitize(value)));
    }

    pub fn parent_type_props(&self) -> &[ProcessedPropItem] {
        &self.parent_type_props
    }

    pub fn type_aliases(&self) -> &BTreeMap<String, String> {
        &self.type_aliases
    }
}
