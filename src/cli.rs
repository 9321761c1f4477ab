use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, Locale};

/// Flashcard quiz for the terminal.
#[derive(Debug, Parser)]
#[command(name = "quizcards", version, about)]
pub struct Cli {
    /// Config file to read instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Label preset, overrides `locale` from the config file.
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `quizcards::vdom=trace`.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Fold command-line overrides into a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
