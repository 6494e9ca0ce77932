//! Reviewer feedback, label corrections, and training-data export.

pub mod ledger;
pub mod types;

pub use ledger::FeedbackLedger;
pub use types::{
    Correction, CorrectionRequest, Feedback, LabelSnapshot, TrainingMetrics, TrainingRecord, Verdict,
};
