//! Doc extraction and normalization.
//!
//! Turns one raw extraction-tool doc into its pre-processed form: sanitized
//! strings, resolved parent labels, resolved default values, and (for
//! polymorphic web components) props inherited from the platform default
//! element.

pub mod augment;
pub mod canonical;
pub mod example;
pub mod parent;
pub mod sanitize;

pub use augment::{augment_with_default_element, polymorphic_parent_label};
pub use canonical::canonicalize;
pub use example::{format_example, resolve_description};
pub use parent::resolve_parent_label;
pub use sanitize::{sanitize, sanitize_tags};

use crate::core::{Platform, PreProcessedDoc, PreProcessedPropItem, RawDoc, RawPropItem};

/// Resolve a prop's default: an explicit `@default` tag overrides whatever
/// the extraction tool reported.
pub fn resolve_default_value(prop: &RawPropItem) -> Option<String> {
    if let Some(tag) = prop.tags.get("default") {
        return Some(sanitize(tag));
    }
    prop.default_value
        .as_ref()
        .and_then(|default| stringify_default(&default.value))
}

fn stringify_default(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(sanitize(text)),
        other => Some(other.to_string()),
    }
}

fn pre_process_prop(raw: RawPropItem) -> PreProcessedPropItem {
    let parent = resolve_parent_label(&raw);
    let default_value = resolve_default_value(&raw);
    let description = resolve_description(&raw.description, &raw.tags);
    let tags = sanitize_tags(&raw.tags);
    let original_type = if cfg!(debug_assertions) {
        serde_json::to_value(&raw.prop_type).ok()
    } else {
        None
    };

    let mut prop_type = raw.prop_type;
    if let Some(raw_text) = prop_type.raw.take() {
        prop_type.raw = Some(sanitize(&raw_text));
    }

    PreProcessedPropItem {
        name: raw.name,
        required: raw.required,
        default_value,
        description,
        tags,
        prop_type,
        declarations: raw.declarations,
        parent,
        original_type,
    }
}

/// Normalize one raw doc. Stateless apart from the raw input; augmentation
/// happens separately so the pipeline can run without a program.
pub fn pre_process_doc(raw: RawDoc) -> PreProcessedDoc {
    let platform = Platform::from_path(&raw.file_path);
    let description = resolve_description(&raw.description, &raw.tags);
    let example = raw.tags.get("example").map(|tag| format_example(tag));
    let tags = sanitize_tags(&raw.tags);
    let props = raw.props.into_vec().into_iter().map(pre_process_prop).collect();

    PreProcessedDoc {
        display_name: raw.display_name,
        file_path: raw.file_path,
        description,
        example,
        tags,
        platform,
        props,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PropType, RawDefaultValue};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn raw_prop(name: &str) -> RawPropItem {
        RawPropItem {
            name: name.to_string(),
            required: false,
            default_value: None,
            description: String::new(),
            tags: BTreeMap::new(),
            prop_type: PropType {
                name: "string".to_string(),
                raw: None,
                value: None,
            },
            declarations: Vec::new(),
            parent: None,
        }
    }

    #[test]
    fn test_default_tag_overrides_tool_default() {
        let mut prop = raw_prop("size");
        prop.default_value = Some(RawDefaultValue {
            value: json!("small"),
        });
        prop.tags
            .insert("default".to_string(), "\"medium\"".to_string());
        assert_eq!(resolve_default_value(&prop), Some("medium".to_string()));
    }

    #[test]
    fn test_tool_default_used_without_tag() {
        let mut prop = raw_prop("size");
        prop.default_value = Some(RawDefaultValue {
            value: json!("small"),
        });
        assert_eq!(resolve_default_value(&prop), Some("small".to_string()));
    }

    #[test]
    fn test_null_default_is_absent() {
        let mut prop = raw_prop("size");
        prop.default_value = Some(RawDefaultValue { value: json!(null) });
        assert_eq!(resolve_default_value(&prop), None);
    }

    #[test]
    fn test_non_string_defaults_are_stringified() {
        let mut prop = raw_prop("count");
        prop.default_value = Some(RawDefaultValue { value: json!(3) });
        assert_eq!(resolve_default_value(&prop), Some("3".to_string()));

        prop.default_value = Some(RawDefaultValue { value: json!(false) });
        assert_eq!(resolve_default_value(&prop), Some("false".to_string()));
    }

    #[test]
    fn test_pre_process_sanitizes_type_raw() {
        let doc: RawDoc = serde_json::from_value(json!({
            "displayName": "Badge",
            "filePath": "src/components/Badge/Badge.tsx",
            "props": [{
                "name": "color",
                "type": { "name": "enum", "raw": "\"primary\" | \"critical\"" }
            }]
        }))
        .unwrap();
        let doc = pre_process_doc(doc);
        assert_eq!(
            doc.props[0].prop_type.raw.as_deref(),
            Some("primary | critical")
        );
    }

    #[test]
    fn test_pre_process_doc_example_and_description() {
        let doc: RawDoc = serde_json::from_value(json!({
            "displayName": "Button",
            "filePath": "src/components/Button/Button.tsx",
            "description": "free text",
            "tags": {
                "description": "Tagged description",
                "example": "<Button />"
            },
            "props": []
        }))
        .unwrap();
        let doc = pre_process_doc(doc);
        assert_eq!(doc.description, "Tagged description");
        assert_eq!(doc.example.as_deref(), Some("```tsx live\n<Button />\n```"));
        assert_eq!(doc.platform, Platform::Web);
    }

    #[test]
    fn test_native_platform_detected() {
        let doc: RawDoc = serde_json::from_value(json!({
            "displayName": "Button",
            "filePath": "src/components/Button/Button.native.tsx",
            "props": []
        }))
        .unwrap();
        assert_eq!(pre_process_doc(doc).platform, Platform::Native);
    }
}
