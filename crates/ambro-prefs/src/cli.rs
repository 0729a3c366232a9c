//! Command line

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ambro-prefs", version, about = "Inspect and change persisted accessibility preferences")]
pub struct Cli {
    /// File holding persisted preferences
    #[arg(long, env = "AMBRO_STORAGE", global = true)]
    pub storage: Option<PathBuf>,

    /// Simulate `(prefers-color-scheme: dark)`
    #[arg(long, env = "AMBRO_PREFERS_DARK", global = true)]
    pub prefers_dark: bool,

    /// Simulate `(prefers-reduced-motion: reduce)`
    #[arg(long, env = "AMBRO_PREFERS_REDUCED_MOTION", global = true)]
    pub prefers_reduced_motion: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the resolved preferences and document attributes
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Change one preference
    Set {
        #[arg(value_enum)]
        field: Field,
        value: String,
    },
    /// Switch between high-contrast and the default theme
    ToggleContrast,
    /// List the accessibility panel's controls
    Controls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    FontSize,
    Theme,
    ReduceMotion,
}
