//! Bounded confidence scoring.

pub mod scorer;

pub use scorer::{ConfidenceBreakdown, ConfidenceScorer, ScoreInput};
