use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub sparkles: SparkleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Render loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval when no input arrives (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Decorative sparkle effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparkleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Delay between spawns in milliseconds (default: 600).
    #[serde(default = "default_sparkle_interval_ms")]
    pub interval_ms: u64,
    /// How long a sparkle stays on screen in milliseconds (default: 1800).
    #[serde(default = "default_sparkle_lifetime_ms")]
    pub lifetime_ms: u64,
    /// Upper bound on simultaneously visible sparkles (default: 12).
    #[serde(default = "default_sparkle_max_alive")]
    pub max_alive: usize,
}

/// Log output. The TUI owns stdout, so logs always go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `FELINE_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<cache_dir>/feline/feline.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

fn default_sparkle_interval_ms() -> u64 {
    600
}

fn default_sparkle_lifetime_ms() -> u64 {
    1800
}

fn default_sparkle_max_alive() -> usize {
    12
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for SparkleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: default_sparkle_interval_ms(),
            lifetime_ms: default_sparkle_lifetime_ms(),
            max_alive: default_sparkle_max_alive(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl SparkleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.lifetime_ms)
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    pub fn file_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("feline")
                .join("feline.log"),
        }
    }
}
