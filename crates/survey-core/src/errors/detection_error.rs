//! Errors raised by the detection pipeline.

use super::error_code::{self, SurveyErrorCode};

/// Errors that can occur while building rule sets or analyzing a document.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("No analyzable text: {usable_tokens} usable tokens after normalization")]
    EmptyInput { usable_tokens: usize },

    #[error("Invalid rule set: {reason}")]
    InvalidRuleSet { reason: String },
}

impl SurveyErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput { .. } => error_code::EMPTY_INPUT,
            Self::InvalidRuleSet { .. } => error_code::INVALID_RULE_SET,
        }
    }
}
