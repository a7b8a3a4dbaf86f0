//! Tree-sitter parser integration for TypeScript/TSX component modules.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tree_sitter::{Language, Node, Parser};

/// TypeScript grammar variant selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsVariant {
    TypeScript,
    Tsx,
}

impl TsVariant {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "ts" | "mts" | "cts" => Some(TsVariant::TypeScript),
            "tsx" => Some(TsVariant::Tsx),
            _ => None,
        }
    }
}

fn get_language(variant: TsVariant) -> Language {
    match variant {
        TsVariant::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        TsVariant::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

/// One parsed module of the program: path, source text and parse tree.
#[derive(Clone)]
pub struct SourceModule {
    pub path: PathBuf,
    pub source: String,
    pub tree: tree_sitter::Tree,
    pub variant: TsVariant,
}

impl SourceModule {
    /// Declaration files (`.d.ts`) are type-only ambient modules.
    pub fn is_declaration_file(&self) -> bool {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".d.ts"))
    }
}

/// Determine grammar variant from a file path.
pub fn detect_variant(path: &Path) -> TsVariant {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(TsVariant::from_extension)
        .unwrap_or(TsVariant::TypeScript)
}

/// Parse TypeScript/TSX source code into a module.
pub fn parse_source(content: &str, path: &Path, variant: TsVariant) -> Result<SourceModule> {
    let mut parser = Parser::new();
    let language = get_language(variant);

    parser
        .set_language(&language)
        .context("Failed to set tree-sitter language")?;

    let tree = parser
        .parse(content, None)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(SourceModule {
        path: path.to_path_buf(),
        source: content.to_string(),
        tree,
        variant,
    })
}

/// Get text for a tree-sitter node.
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Base name of a path without its extension.
pub fn file_stem(path: &str) -> &str {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("")
}
