use anyhow::Result;
use clap::Parser;
use propdoc::cli::{Cli, Commands};
use propdoc::commands::generate::{generate, GenerateConfig};
use propdoc::commands::init::init_config;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            root,
            raw_docs,
            output,
        } => generate(GenerateConfig {
            config,
            root,
            raw_docs,
            output,
        }),
        Commands::Init { force } => init_config(force),
    }
}
