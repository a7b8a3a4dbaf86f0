//! The `generate` command: load config, read raw docs, build the program,
//! run the pipeline, write the report.

use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use crate::aggregate::DocHooks;
use crate::config::load_config;
use crate::core::{PreProcessedDoc, RawDoc};
use crate::error::PropdocError;
use crate::introspect::ProgramContext;
use crate::io::{create_writer, expand_globs, read_file, DocgenReport};
use crate::pipeline::{run_pipeline, PipelineOptions};

pub struct GenerateConfig {
    pub config: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub raw_docs: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub fn generate(args: GenerateConfig) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(root) = args.root {
        config.root = root;
    }
    if let Some(raw_docs) = args.raw_docs {
        config.raw_docs = raw_docs;
    }
    if let Some(output) = args.output {
        config.output = Some(output);
    }

    let raw_docs_path = if config.raw_docs.is_absolute() {
        config.raw_docs.clone()
    } else {
        config.root.join(&config.raw_docs)
    };
    let raw_docs: Vec<RawDoc> = serde_json::from_str(&read_file(&raw_docs_path)?)
        .map_err(PropdocError::Input)
        .with_context(|| format!("failed to parse {}", raw_docs_path.display()))?;
    info!("loaded {} raw docs from {}", raw_docs.len(), raw_docs_path.display());

    let files = expand_globs(&config.root, &config.sources)?;
    let program = ProgramContext::build(&config.root, &files)?;
    info!("introspecting {} source modules", program.modules().len());

    // The documentation site registers every prop under its parent type.
    let options = PipelineOptions::with_hook(|doc: &PreProcessedDoc, hooks: &mut DocHooks| {
        hooks.add_to_parent_types(&doc.props);
    });
    let output = run_pipeline(Some(&program), raw_docs, options);
    info!(
        "processed {} docs, {} shared parent-type props",
        output.docs.len(),
        output.caches.parent_type_props().len()
    );

    let mut writer = create_writer(config.output.as_deref())?;
    writer.write_report(&DocgenReport::from_output(&output))?;
    Ok(())
}
