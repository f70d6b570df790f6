//! Command-line interface for Fyyur.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fyyur - venue and artist booking site
#[derive(Parser, Debug)]
#[command(name = "fyyur")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the search path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the web server (default)
    #[command(alias = "run")]
    Serve,

    /// Create a default config file
    Init,

    /// Apply database migrations and exit
    Migrate,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}
