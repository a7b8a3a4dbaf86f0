//! Project configuration (`.propdoc.toml`).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PropdocError;

pub const DEFAULT_CONFIG_PATH: &str = ".propdoc.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropdocConfig {
    /// Project root the source globs and raw-docs path resolve against.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Globs selecting the component/hook modules to introspect.
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    /// Extraction-tool JSON output to consume.
    #[serde(default = "default_raw_docs")]
    pub raw_docs: PathBuf,

    /// Report destination; stdout when unset.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_sources() -> Vec<String> {
    vec![
        "src/**/*.tsx".to_string(),
        "src/**/*.ts".to_string(),
    ]
}

fn default_raw_docs() -> PathBuf {
    PathBuf::from("docgen.json")
}

impl Default for PropdocConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            sources: default_sources(),
            raw_docs: default_raw_docs(),
            output: None,
        }
    }
}

impl PropdocConfig {
    fn from_toml(contents: &str) -> Result<Self, PropdocError> {
        toml::from_str(contents).map_err(|err| PropdocError::Config(err.to_string()))
    }
}

/// Load configuration. An explicitly given path must exist; the default
/// path is optional and falls back to built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<PropdocConfig, PropdocError> {
    match path {
        Some(path) => {
            let contents =
                fs::read_to_string(path).map_err(|err| PropdocError::io(path, err))?;
            PropdocConfig::from_toml(&contents)
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                let contents = fs::read_to_string(default)
                    .map_err(|err| PropdocError::io(default, err))?;
                PropdocConfig::from_toml(&contents)
            } else {
                Ok(PropdocConfig::default())
            }
        }
    }
}
