mod config_error;
mod detection_error;
pub mod error_code;
mod feedback_error;

pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use feedback_error::FeedbackError;

use error_code::SurveyErrorCode;

/// Top-level error type for the Survey engine.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    #[error("detection error: {0}")]
    Detection(#[from] DetectionError),

    #[error("feedback error: {0}")]
    Feedback(#[from] FeedbackError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl SurveyErrorCode for SurveyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Detection(e) => e.error_code(),
            Self::Feedback(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience type alias.
pub type SurveyResult<T> = Result<T, SurveyError>;
