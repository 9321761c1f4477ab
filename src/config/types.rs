use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::labels::{LabelOverrides, Labels, Locale};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset for every presentation string.
    #[serde(default)]
    pub locale: Locale,
    /// Per-string overrides applied on top of the locale preset.
    #[serde(default)]
    pub labels: LabelOverrides,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when neither CLI nor `RUST_LOG` set one.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. The terminal belongs to the UI, so logs never go to stdout.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Locale preset with `[labels]` overrides applied.
    pub fn labels(&self) -> Labels {
        Labels::for_locale(self.locale).with_overrides(&self.labels)
    }
}

impl LoggingConfig {
    /// Configured log file, or `quizcards.log` under the platform cache dir.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("quizcards")
                .join("quizcards.log")
        })
    }
}
