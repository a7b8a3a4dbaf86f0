//! Core data model for the documentation pipeline.
//!
//! Docs and props move through three stages: the raw shape deserialized from
//! the extraction tool's JSON, a pre-processed shape with sanitized strings
//! and resolved parent labels, and the final processed shape consumed by the
//! documentation renderer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Target platform of a component module, derived from its file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    /// Mobile counterpart modules use the `.native.` infix convention;
    /// everything else is a web module.
    pub fn from_path(path: &str) -> Self {
        if path.contains(".native.") {
            Platform::Native
        } else {
            Platform::Web
        }
    }
}

/// One exported component or hook as reported by the extraction tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDoc {
    pub display_name: String,
    pub file_path: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(default)]
    pub props: PropCollection,
}

/// The extraction tool emits props as a name-keyed object; a plain array is
/// accepted too.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropCollection {
    List(Vec<RawPropItem>),
    Map(BTreeMap<String, RawPropItem>),
}

impl Default for PropCollection {
    fn default() -> Self {
        PropCollection::List(Vec::new())
    }
}

impl PropCollection {
    pub fn into_vec(self) -> Vec<RawPropItem> {
        match self {
            PropCollection::List(props) => props,
            PropCollection::Map(props) => props.into_values().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PropCollection::List(props) => props.len(),
            PropCollection::Map(props) => props.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One prop as reported by the extraction tool. Read-only to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPropItem {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default_value: Option<RawDefaultValue>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(rename = "type")]
    pub prop_type: PropType,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
    #[serde(default)]
    pub parent: Option<ParentRef>,
}

/// The tool wraps defaults in an object so that `null` defaults stay
/// distinguishable from "no default".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDefaultValue {
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Type descriptor attached to a raw prop: display name, raw source text,
/// and enumerated literal values where the tool could expand them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropType {
    pub name: String,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub value: Option<Vec<TypeValue>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeValue {
    pub value: String,
}

/// Declaration site of a prop: originating file plus the declaring
/// construct's name (anonymous type literals get a placeholder name).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub file_name: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRef {
    pub name: String,
    #[serde(default)]
    pub file_name: String,
}

/// A raw prop after sanitization, parent-label resolution and default-value
/// resolution. `parent` is never absent; it is `""` only when the tool
/// reported no declaration and no parent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreProcessedPropItem {
    pub name: String,
    pub required: bool,
    pub default_value: Option<String>,
    pub description: String,
    pub tags: BTreeMap<String, String>,
    pub prop_type: PropType,
    pub declarations: Vec<Declaration>,
    pub parent: String,
    /// JSON snapshot of the tool's original type descriptor; populated only
    /// in debug builds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_type: Option<serde_json::Value>,
}

/// A doc after per-doc normalization and optional default-element
/// augmentation, before aggregation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreProcessedDoc {
    pub display_name: String,
    pub file_path: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub tags: BTreeMap<String, String>,
    pub platform: Platform,
    pub props: Vec<PreProcessedPropItem>,
}

/// Final prop shape: declarations and tags stripped, type collapsed to one
/// display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedPropItem {
    pub name: String,
    pub required: bool,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub type_display: String,
    pub parent: String,
}

/// Final doc shape persisted for the renderer, carrying the per-doc map from
/// parent-type label to the ordered prop names that parent contributed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedDoc {
    pub display_name: String,
    pub file_path: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    pub props: Vec<ProcessedPropItem>,
    #[serde(default)]
    pub parent_types: BTreeMap<String, Vec<String>>,
}
