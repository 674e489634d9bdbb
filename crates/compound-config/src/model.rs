use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_APP_DIR: &str = "compound";
pub const DEFAULT_DATA_FILE: &str = "compound.json";
pub const DEFAULT_LOG_DIRECTIVE: &str = "compound=info";

/// Settings that decide where the tracker stores its document and how it logs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Explicit document location. Defaults to `<data dir>/compound/compound.json`.
    pub data_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// `tracing` filter directive applied on top of `RUST_LOG`.
    pub log_filter: Option<String>,
}

impl Config {
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        Self {
            data_file: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn resolve_data_file(&self) -> PathBuf {
        if let Some(path) = &self.data_file {
            return path.clone();
        }

        match dirs::data_dir() {
            Some(base) => base.join(DEFAULT_APP_DIR).join(DEFAULT_DATA_FILE),
            None => PathBuf::from("data").join(DEFAULT_DATA_FILE),
        }
    }

    pub fn log_directive(&self) -> &str {
        self.log_filter
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_LOG_DIRECTIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_file_wins() {
        let cfg = Config::with_data_file("/tmp/ledger.json");
        assert_eq!(cfg.resolve_data_file(), PathBuf::from("/tmp/ledger.json"));
    }

    #[test]
    fn default_data_file_is_named_compound_json() {
        let path = Config::default().resolve_data_file();
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some(DEFAULT_DATA_FILE)
        );
    }

    #[test]
    fn blank_log_filter_falls_back_to_default() {
        let cfg = Config {
            log_filter: Some("  ".into()),
            ..Config::default()
        };
        assert_eq!(cfg.log_directive(), DEFAULT_LOG_DIRECTIVE);
    }
}
