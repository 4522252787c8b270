use std::path::PathBuf;

use clap::Parser;
use vocab_config::Config;

/// Flashcards from a term/definition dictionary
#[derive(Parser, Debug)]
#[command(name = "vocab", version)]
pub struct Cli {
    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dictionary JSON file to use instead of the bundled one
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Resolve config: file if given, else environment, then CLI flags on top
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };

    if let Some(path) = &cli.dictionary {
        config.dictionary.path = Some(path.clone());
    }
    if cli.json_logs {
        config.log.json = true;
    }

    Ok(config)
}
