//! Output writing for the documentation renderer.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::core::{ProcessedDoc, ProcessedPropItem};
use crate::pipeline::PipelineOutput;

/// The combined side-table the renderer consumes: processed docs plus the
/// two shared caches.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocgenReport<'a> {
    pub docs: &'a [ProcessedDoc],
    pub shared_parent_types: &'a [ProcessedPropItem],
    pub shared_type_aliases: &'a BTreeMap<String, String>,
}

impl<'a> DocgenReport<'a> {
    pub fn from_output(output: &'a PipelineOutput) -> Self {
        Self {
            docs: &output.docs,
            shared_parent_types: output.caches.parent_type_props(),
            shared_type_aliases: output.caches.type_aliases(),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &DocgenReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DocgenReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// A JSON writer over the given file, or stdout when no path is given.
pub fn create_writer(output: Option<&Path>) -> anyhow::Result<Box<dyn OutputWriter>> {
    match output {
        Some(path) => Ok(Box::new(JsonWriter::new(File::create(path)?))),
        None => Ok(Box::new(JsonWriter::new(io::stdout()))),
    }
}
