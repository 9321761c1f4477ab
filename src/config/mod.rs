//! Configuration: presentation strings and logging.

mod labels;
mod loader;
mod types;

pub use labels::{LabelOverrides, Labels, Locale};
pub use loader::ConfigError;
pub use types::{Config, LoggingConfig};
