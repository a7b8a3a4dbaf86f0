//! Default-element augmentation for polymorphic web components.
//!
//! A polymorphic component renders to a concrete intrinsic element when no
//! `as` override is given. Its documentation should therefore show that
//! element's native props as inherited. Augmentation is all-or-nothing: any
//! unresolved signal returns the doc unchanged (except for the `as` default,
//! which is patched as soon as the element name resolves).

use log::debug;
use std::collections::HashSet;
use std::path::Path;

use crate::core::{Platform, PreProcessedDoc, PreProcessedPropItem, PropType};
use crate::introspect::{default_element_name, intrinsic_props, ProgramContext, TypeChecker};

use super::sanitize::sanitize;

/// Parent label carried by props inherited from a default element.
pub fn polymorphic_parent_label(element: &str) -> String {
    format!("PolymorphicDefault<{element}>")
}

fn is_polymorphic(doc: &PreProcessedDoc) -> bool {
    doc.props
        .iter()
        .any(|prop| prop.name == "as" || prop.parent == "polymorphism")
}

fn patch_as_default(doc: &mut PreProcessedDoc, element: &str) {
    if let Some(as_prop) = doc.props.iter_mut().find(|prop| prop.name == "as") {
        let empty = as_prop
            .default_value
            .as_deref()
            .is_none_or(|value| value.is_empty());
        if empty {
            as_prop.default_value = Some(element.to_string());
        }
    }
}

/// Augment a doc with the props of its declared default element. Applies
/// only to web docs that already exhibit polymorphism; every resolution
/// failure silently skips augmentation.
pub fn augment_with_default_element(
    mut doc: PreProcessedDoc,
    program: &ProgramContext,
) -> PreProcessedDoc {
    if doc.platform != Platform::Web || !is_polymorphic(&doc) {
        return doc;
    }

    let checker = program.checker();
    let file = Path::new(&doc.file_path);
    let Some(module) = program.module_for(file) else {
        debug!("{}: source file not in program, skipping augmentation", doc.display_name);
        return doc;
    };
    let Some(element) = default_element_name(&checker, &module.path, &doc.display_name) else {
        debug!("{}: no default element declaration", doc.display_name);
        return doc;
    };
    let Some(intrinsics) = program.intrinsic_elements() else {
        return doc;
    };

    // A polymorphic prop must never display an empty default.
    patch_as_default(&mut doc, &element);

    let Some(bag) = intrinsic_props(&checker, intrinsics, &element) else {
        debug!("{}: intrinsic catalogue has no '{element}' entry", doc.display_name);
        return doc;
    };

    let existing: HashSet<&str> = doc.props.iter().map(|prop| prop.name.as_str()).collect();
    let parent = polymorphic_parent_label(&element);
    let mut inherited = Vec::new();
    for member in bag {
        if existing.contains(member.name.as_str()) {
            continue;
        }
        let type_text = sanitize(&checker.type_to_string(&member.ty));
        inherited.push(PreProcessedPropItem {
            name: member.name,
            required: false,
            default_value: None,
            description: member.doc.map(|doc| sanitize(&doc)).unwrap_or_default(),
            tags: Default::default(),
            prop_type: PropType {
                name: type_text.clone(),
                raw: Some(type_text),
                value: None,
            },
            declarations: Vec::new(),
            parent: parent.clone(),
            original_type: None,
        });
    }
    if !inherited.is_empty() {
        debug!(
            "{}: inherited {} props from default element '{element}'",
            doc.display_name,
            inherited.len()
        );
        doc.props.extend(inherited);
    }
    doc
}
