//! Severity assessment.

pub mod assessor;
pub mod vocabulary;

pub use assessor::{SeverityAssessment, SeverityAssessor, SeveritySource, DEFAULT_SEVERITY};
