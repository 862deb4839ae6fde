//! Configuration loading for the artwork browser.
//!
//! Every field has a default, so running without a config file is valid.
//! A file given by `--config` or `ARTIC_TUI_CONFIG` overrides individual
//! fields; unknown fields are rejected.

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu";
pub const DEFAULT_ROWS_PER_PAGE: u64 = 12;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TuiConfig {
    pub api_base_url: String,
    pub rows_per_page: u64,
    pub rows_per_page_options: Vec<u64>,
    /// No timeout when unset.
    pub request_timeout_ms: Option<u64>,
    pub tick_rate_ms: u64,
    pub log_path: PathBuf,
    pub log_filter: String,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            rows_per_page_options: vec![12, 24, 48],
            request_timeout_ms: None,
            tick_rate_ms: 250,
            log_path: PathBuf::from("artic-tui.log"),
            log_filter: "artic_tui=info,artic_core=info".to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "synthbrute".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    /// Resolve the config path from `--config` then `ARTIC_TUI_CONFIG`,
    /// falling back to defaults when neither is given.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match config_path_from_args().or_else(config_path_from_env) {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api_base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must start with http:// or https://".to_string(),
            });
        }
        if self.rows_per_page_options.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "rows_per_page_options",
                reason: "must not be empty".to_string(),
            });
        }
        if self.rows_per_page_options.contains(&0) {
            return Err(ConfigError::InvalidValue {
                field: "rows_per_page_options",
                reason: "every option must be > 0".to_string(),
            });
        }
        if self.rows_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rows_per_page",
                reason: "must be > 0".to_string(),
            });
        }
        if !self.rows_per_page_options.contains(&self.rows_per_page) {
            return Err(ConfigError::InvalidValue {
                field: "rows_per_page",
                reason: format!("must be one of {:?}", self.rows_per_page_options),
            });
        }
        if self.request_timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0 when set".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_filter",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "synthbrute" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'synthbrute' is supported".to_string(),
            });
        }
        Ok(())
    }

    /// Page sizes in ascending order without duplicates.
    pub fn page_size_options(&self) -> Vec<u64> {
        let mut options = self.rows_per_page_options.clone();
        options.sort_unstable();
        options.dedup();
        options
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("ARTIC_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
