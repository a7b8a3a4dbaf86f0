// Export modules for library usage
pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod introspect;
pub mod io;
pub mod pipeline;

// Re-export commonly used types
pub use crate::aggregate::{select_primary_docs, sort_props, DocHooks, SharedCaches};
pub use crate::core::{
    Declaration, Platform, PreProcessedDoc, PreProcessedPropItem, ProcessedDoc,
    ProcessedPropItem, PropType, RawDoc, RawPropItem,
};
pub use crate::error::PropdocError;
pub use crate::extract::{
    augment_with_default_element, canonicalize, pre_process_doc, sanitize,
};
pub use crate::introspect::{
    default_element_name, intrinsic_props, ProgramContext, TypeChecker, TypeProperty, TypeRef,
};
pub use crate::io::{create_writer, DocgenReport, JsonWriter, OutputWriter};
pub use crate::pipeline::{run_pipeline, PipelineOptions, PipelineOutput, ProcessDocHook};
