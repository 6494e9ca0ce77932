//! Errors raised by the feedback/correction ledger.

use super::error_code::{self, SurveyErrorCode};

/// Errors that can occur while recording feedback or applying corrections.
/// All of them are raised before any mutation takes place.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("Unknown finding: {id}")]
    UnknownFinding { id: String },

    #[error("Invalid {field} value: {value:?}")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("Field cannot be corrected: {field}")]
    UnsupportedField { field: String },

    #[error("Correction sets no field")]
    EmptyCorrection,

    #[error("Training export failed: {message}")]
    Export { message: String },
}

impl SurveyErrorCode for FeedbackError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownFinding { .. } => error_code::UNKNOWN_FINDING,
            Self::InvalidEnumValue { .. } => error_code::INVALID_ENUM_VALUE,
            Self::UnsupportedField { .. } => error_code::UNSUPPORTED_FIELD,
            Self::EmptyCorrection => error_code::EMPTY_CORRECTION,
            Self::Export { .. } => error_code::EXPORT_ERROR,
        }
    }
}

impl From<serde_json::Error> for FeedbackError {
    fn from(e: serde_json::Error) -> Self {
        Self::Export { message: e.to_string() }
    }
}

impl From<std::io::Error> for FeedbackError {
    fn from(e: std::io::Error) -> Self {
        Self::Export { message: e.to_string() }
    }
}
