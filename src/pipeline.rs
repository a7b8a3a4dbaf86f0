//! Pipeline orchestration: a single forward pass from raw extraction-tool
//! docs to renderer-ready processed docs plus the run's shared caches.

use log::debug;
use std::collections::BTreeMap;

use crate::aggregate::{process_prop, select_primary_docs, sort_props, DocHooks, SharedCaches};
use crate::core::{PreProcessedDoc, ProcessedDoc, RawDoc};
use crate::extract::{augment_with_default_element, pre_process_doc};
use crate::introspect::ProgramContext;

/// Hook invoked once per primary doc, before final sorting. The consumer
/// decides what to register; without a hook a doc's parent-types map stays
/// empty.
pub type ProcessDocHook<'h> = dyn FnMut(&PreProcessedDoc, &mut DocHooks<'_>) + 'h;

#[derive(Default)]
pub struct PipelineOptions<'h> {
    pub on_process_doc: Option<Box<ProcessDocHook<'h>>>,
}

impl<'h> PipelineOptions<'h> {
    pub fn with_hook(
        hook: impl FnMut(&PreProcessedDoc, &mut DocHooks<'_>) + 'h,
    ) -> Self {
        Self {
            on_process_doc: Some(Box::new(hook)),
        }
    }
}

pub struct PipelineOutput {
    pub docs: Vec<ProcessedDoc>,
    pub caches: SharedCaches,
}

/// Run the whole pipeline. `program` enables default-element augmentation;
/// without one the docs are normalized and aggregated as-is.
pub fn run_pipeline(
    program: Option<&ProgramContext>,
    raw_docs: Vec<RawDoc>,
    mut options: PipelineOptions<'_>,
) -> PipelineOutput {
    let pre_processed: Vec<PreProcessedDoc> = raw_docs
        .into_iter()
        .map(pre_process_doc)
        .map(|doc| match program {
            Some(program) => augment_with_default_element(doc, program),
            None => doc,
        })
        .collect();

    let primaries = select_primary_docs(pre_processed);
    debug!("aggregating {} primary docs", primaries.len());

    let mut caches = SharedCaches::new();
    let mut docs = Vec::with_capacity(primaries.len());
    for doc in primaries {
        let mut parent_types = BTreeMap::new();
        if let Some(hook) = options.on_process_doc.as_mut() {
            let mut hooks = DocHooks {
                parent_types: &mut parent_types,
                caches: &mut caches,
            };
            hook(&doc, &mut hooks);
        }

        let mut props: Vec<_> = doc.props.iter().map(process_prop).collect();
        sort_props(&mut props);

        docs.push(ProcessedDoc {
            display_name: doc.display_name,
            file_path: doc.file_path,
            description: doc.description,
            example: doc.example,
            tags: doc.tags,
            props,
            parent_types,
        });
    }

    PipelineOutput { docs, caches }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn raw_docs(value: serde_json::Value) -> Vec<RawDoc> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_pipeline_without_hook_leaves_parent_types_empty() {
        let docs = raw_docs(json!([{
            "displayName": "Badge",
            "filePath": "src/components/Badge/Badge.tsx",
            "props": [
                { "name": "color", "required": true, "type": { "name": "string" } },
                { "name": "size", "type": { "name": "string" } }
            ]
        }]));
        let output = run_pipeline(None, docs, PipelineOptions::default());
        assert_eq!(output.docs.len(), 1);
        assert!(output.docs[0].parent_types.is_empty());
        assert!(output.caches.parent_type_props().is_empty());
        // required first, then alphabetical
        let names: Vec<&str> = output.docs[0].props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["color", "size"]);
    }

    #[test]
    fn test_pipeline_hook_populates_parent_types_and_caches() {
        let docs = raw_docs(json!([
            {
                "displayName": "Tabs",
                "filePath": "src/components/Tabs/Tabs.tsx",
                "props": [{
                    "name": "value",
                    "type": { "name": "string" },
                    "declarations": [{ "fileName": "src/components/Tabs/Tabs.tsx", "name": "TabsProps" }]
                }]
            },
            {
                "displayName": "TabsItem",
                "filePath": "src/components/Tabs/TabsItem.tsx",
                "props": [{
                    "name": "value",
                    "type": { "name": "string" },
                    "declarations": [{ "fileName": "src/components/Tabs/Tabs.tsx", "name": "TabsProps" }]
                }]
            }
        ]));
        let options =
            PipelineOptions::with_hook(|doc: &PreProcessedDoc, hooks: &mut DocHooks| {
                hooks.add_to_parent_types(&doc.props);
                hooks.add_to_shared_type_aliases("Size", "'small' | 'medium'");
            });
        let output = run_pipeline(None, docs, options);

        assert_eq!(output.docs.len(), 2);
        for doc in &output.docs {
            assert_eq!(
                doc.parent_types.get("TabsProps"),
                Some(&vec!["value".to_string()])
            );
        }
        // The shared cache holds one canonical record across both docs.
        assert_eq!(output.caches.parent_type_props().len(), 1);
        assert_eq!(
            output.caches.type_aliases().get("Size").map(String::as_str),
            Some("'small' | 'medium'")
        );
    }

    #[test]
    fn test_pipeline_selects_primary_docs() {
        let docs = raw_docs(json!([
            {
                "displayName": "TestComp",
                "filePath": "src/RollingNumber.tsx",
                "props": []
            },
            {
                "displayName": "RollingNumber",
                "filePath": "src/RollingNumber.tsx",
                "props": []
            }
        ]));
        let output = run_pipeline(None, docs, PipelineOptions::default());
        assert_eq!(output.docs.len(), 1);
        assert_eq!(output.docs[0].display_name, "RollingNumber");
    }
}
