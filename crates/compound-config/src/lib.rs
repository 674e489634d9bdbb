//! compound-config
//!
//! Process-level settings for the finance tracker: where the document lives
//! and which log directives apply. Owns the Config model plus its JSON file.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
