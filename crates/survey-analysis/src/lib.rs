//! # survey-analysis
//!
//! Defect detection engine for building-survey text.
//! Contains the normalizer, rule set, severity and location extraction,
//! confidence scoring, aggregation, insights, and the feedback ledger.

pub mod text;
pub mod rules;
pub mod severity;
pub mod location;
pub mod confidence;
pub mod aggregation;
pub mod insights;
pub mod engine;
pub mod feedback;

pub use aggregation::{DistributionSummary, Finding};
pub use engine::{DefectEngine, DefectReport};
pub use feedback::{CorrectionRequest, FeedbackLedger, TrainingRecord, Verdict};
pub use rules::{PatternRule, RuleSet};
