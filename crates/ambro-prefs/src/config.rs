//! Configuration

use crate::cli::Cli;
use ambro_a11y::{ColorSchemePreference, MediaPreferences};
use std::path::PathBuf;

/// Front-end configuration options
#[derive(Debug, Clone)]
pub struct Config {
    /// Durable storage file
    pub storage_path: PathBuf,

    /// Ambient dark color scheme signal
    pub prefers_dark: bool,

    /// Ambient reduced motion signal
    pub prefers_reduced_motion: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("ambro-preferences.tsv"),
            prefers_dark: false,
            prefers_reduced_motion: false,
        }
    }
}

impl Config {
    /// Defaults overridden by flags and environment (resolved by clap)
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            storage_path: cli.storage.clone().unwrap_or(defaults.storage_path),
            prefers_dark: cli.prefers_dark,
            prefers_reduced_motion: cli.prefers_reduced_motion,
        }
    }

    /// Ambient signals for bootstrap
    pub fn media_preferences(&self) -> MediaPreferences {
        let mut prefs = MediaPreferences::new();
        if self.prefers_dark {
            prefs.set_color_scheme(ColorSchemePreference::Dark);
        }
        prefs.set_reduced_motion(self.prefers_reduced_motion);
        prefs
    }
}
