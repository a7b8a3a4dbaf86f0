use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "propdoc")]
#[command(about = "Extract and normalize component prop documentation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the documentation pipeline over a component tree
    Generate {
        /// Path to the configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Project root containing the component sources
        #[arg(long)]
        root: Option<PathBuf>,

        /// Extraction-tool JSON output to consume
        #[arg(long = "raw-docs")]
        raw_docs: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a default .propdoc.toml
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
