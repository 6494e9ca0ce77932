//! Configuration loading and validation errors.

use super::error_code::{self, SurveyErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl SurveyErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => error_code::CONFIG_PARSE_ERROR,
            Self::Invalid { .. } => error_code::CONFIG_INVALID,
        }
    }
}
