//! # survey-core
//!
//! Foundation crate for the Survey defect detection engine.
//! Defines the closed reference enums, identifiers, errors, config, and tracing.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::SurveyConfig;
pub use errors::error_code::SurveyErrorCode;
pub use errors::{ConfigError, DetectionError, FeedbackError, SurveyError, SurveyResult};
pub use types::category::DefectCategory;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::identifiers::{FindingId, ReportId};
pub use types::severity::SeverityLevel;
