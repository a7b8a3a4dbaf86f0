//! The `init` command: write a default configuration file.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::config::{PropdocConfig, DEFAULT_CONFIG_PATH};

pub fn init_config(force: bool) -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if path.exists() && !force {
        bail!("{DEFAULT_CONFIG_PATH} already exists (use --force to overwrite)");
    }

    let config = PropdocConfig::default();
    let contents =
        toml::to_string_pretty(&config).context("failed to serialize default configuration")?;
    fs::write(path, contents)
        .with_context(|| format!("failed to write {DEFAULT_CONFIG_PATH}"))?;
    println!("Created {DEFAULT_CONFIG_PATH}");
    Ok(())
}
