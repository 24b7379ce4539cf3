//! Runtime settings of the terminal front-end, read from the environment
//! (and from a `.env` file when there is one)

use std::{env, path::PathBuf};

use log::LevelFilter;
use thiserror::Error;

pub const LOG_FILE_VAR: &str = "FORMCHECK_LOG_FILE";
pub const LOG_LEVEL_VAR: &str = "FORMCHECK_LOG_LEVEL";
pub const REJECT_EXAMPLES_VAR: &str = "FORMCHECK_REJECT_EXAMPLES";
pub const REPORT_FILE_VAR: &str = "FORMCHECK_REPORT_FILE";

const DEFAULT_LOG_FILE: &str = "./formcheck.log";
const DEFAULT_REPORT_FILE: &str = "./report.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// Whether a value equal to the field's example text is refused
    pub reject_examples: bool,
    /// Destination of the JSON report export
    pub report_file: PathBuf,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {var}")]
    InvalidValue { var: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: DEFAULT_LOG_FILE.into(),
            log_level: LevelFilter::Info,
            reject_examples: true,
            report_file: DEFAULT_REPORT_FILE.into(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a configuration from any variable source; unset variables keep
    /// their default
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(LOG_FILE_VAR) {
            config.log_file = path.into();
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = level.parse().map_err(|_| ConfigError::InvalidValue {
                var: LOG_LEVEL_VAR,
                value: level.clone(),
            })?;
        }

        if let Some(flag) = lookup(REJECT_EXAMPLES_VAR) {
            config.reject_examples = parse_flag(&flag).ok_or(ConfigError::InvalidValue {
                var: REJECT_EXAMPLES_VAR,
                value: flag.clone(),
            })?;
        }

        if let Some(path) = lookup(REPORT_FILE_VAR) {
            config.report_file = path.into();
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
