use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Browse cat breeds and facts in the terminal.
#[derive(Debug, Parser)]
#[command(name = "feline", version, about)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/feline/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable the decorative sparkle effect
    #[arg(long)]
    pub no_sparkles: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Command-line flags win over the config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if self.no_sparkles {
            config.sparkles.enabled = false;
        }
    }
}
