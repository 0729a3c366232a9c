//! ambro-prefs - Main Entry Point

mod cli;
mod commands;
mod config;

use ambro_a11y::{DurableStore, PreferenceStore, Storage, UnavailableStorage};
use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    tracing::debug!("Using {:?}", config);

    let storage: Box<dyn DurableStore> = match Storage::local(&config.storage_path) {
        Ok(storage) => {
            tracing::debug!("Opened {:?} with {} entries", storage.path(), storage.length());
            Box::new(storage)
        }
        Err(e) => {
            tracing::warn!("{}; preferences will not persist", e);
            Box::new(UnavailableStorage)
        }
    };

    let mut store = PreferenceStore::new(storage);
    store.bootstrap(&config.media_preferences());

    commands::execute(&cli.command, &mut store, &mut std::io::stdout().lock())
}
