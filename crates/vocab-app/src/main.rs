use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vocab_config::log::LogConfig;

pub mod events;
pub mod profile;
pub mod state;
pub mod ui;


use self::profile::Cli;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = profile::load_config(&cli)?;
    init_tracing(&config.log);

    let mut state = AppState::new(config);
    events::event_loop(&mut state, io::stdin().lock(), io::stdout().lock())
}

/// Logs go to stderr; stdout belongs to the flashcards
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
