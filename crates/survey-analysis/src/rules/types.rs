//! Pattern rules and the candidate matches they produce.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use survey_core::{DefectCategory, SeverityLevel};

/// A weighted phrase belonging to exactly one defect category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRule {
    pub category: DefectCategory,
    /// Keyword or phrase, matched case-insensitively on word boundaries.
    pub phrase: String,
    /// Base weight, must be finite and > 0.
    pub weight: f64,
    /// Severity this phrase implies on its own, if any.
    pub severity_hint: Option<SeverityLevel>,
}

impl PatternRule {
    pub fn new(category: DefectCategory, phrase: impl Into<String>, weight: f64) -> Self {
        Self {
            category,
            phrase: phrase.into(),
            weight,
            severity_hint: None,
        }
    }

    pub fn with_severity_hint(mut self, level: SeverityLevel) -> Self {
        self.severity_hint = Some(level);
        self
    }

    /// Stable identifier, `category:phrase`.
    pub fn id(&self) -> String {
        format!("{}:{}", self.category.name(), self.phrase)
    }
}

/// An unconfirmed detection from a single rule in a single window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub category: DefectCategory,
    /// The rule phrase that fired.
    pub pattern: String,
    /// Rule weight; the candidate's raw confidence contribution.
    pub weight: f64,
    pub severity_hint: Option<SeverityLevel>,
    pub window_index: usize,
    /// Evidence span: the window's byte range.
    pub window_start: usize,
    pub window_end: usize,
    /// Matched phrase span, including any inflection suffix.
    pub matched_start: usize,
    pub matched_end: usize,
    pub matched_text: String,
}

impl CandidateMatch {
    /// Canonical order, independent of rule iteration order.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.window_index
            .cmp(&other.window_index)
            .then(self.matched_start.cmp(&other.matched_start))
            .then(self.matched_end.cmp(&other.matched_end))
            .then(self.category.cmp(&other.category))
            .then(self.pattern.cmp(&other.pattern))
            .then(self.weight.total_cmp(&other.weight))
            .then(self.severity_hint.cmp(&other.severity_hint))
    }
}
