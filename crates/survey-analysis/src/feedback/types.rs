//! Feedback, correction, and training-record types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use survey_core::errors::FeedbackError;
use survey_core::{DefectCategory, FindingId, ReportId, SeverityLevel};

use crate::aggregation::Finding;

/// Reviewer verdict on a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn all() -> &'static [Verdict] {
        &[Self::Correct, Self::Incorrect]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
        }
    }

    /// Case-insensitive parse of `correct` / `incorrect`.
    pub fn parse_str(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.name().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The correctable labels of a finding at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSnapshot {
    pub category: DefectCategory,
    pub severity: SeverityLevel,
    pub location: Option<String>,
    pub description: String,
}

impl LabelSnapshot {
    pub fn of(finding: &Finding) -> Self {
        Self {
            category: finding.category,
            severity: finding.severity,
            location: finding.location.clone(),
            description: finding.description.clone(),
        }
    }
}

/// One accept/reject judgement. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Global, strictly increasing across all training records.
    pub sequence: u64,
    pub finding_id: FindingId,
    pub report_id: ReportId,
    pub verdict: Verdict,
    pub timestamp: DateTime<Utc>,
    pub session_id: String,
    /// Labels the reviewer judged.
    pub label: LabelSnapshot,
    pub confidence: f64,
    pub excerpt: String,
}

/// One applied label correction. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub sequence: u64,
    pub finding_id: FindingId,
    pub report_id: ReportId,
    pub prior: LabelSnapshot,
    pub corrected: LabelSnapshot,
    /// The finding's excerpt, which corrections never change.
    pub excerpt: String,
    pub timestamp: DateTime<Utc>,
    pub session_id: String,
}

/// Requested label changes. Absent fields stay untouched; a blank location
/// clears it. A location is stored trimmed, with the casing it was submitted
/// with. At least one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRequest {
    pub category: Option<String>,
    pub severity: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl CorrectionRequest {
    /// Correctable field names.
    pub const FIELDS: [&'static str; 4] = ["category", "severity", "location", "description"];

    /// Build from a field → value map. Any key outside [`Self::FIELDS`] is
    /// rejected with [`FeedbackError::UnsupportedField`].
    pub fn from_fields<I, K, V>(fields: I) -> Result<Self, FeedbackError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::default();
        for (key, value) in fields {
            let slot = match key.as_ref() {
                "category" => &mut request.category,
                "severity" => &mut request.severity,
                "location" => &mut request.location,
                "description" => &mut request.description,
                other => {
                    return Err(FeedbackError::UnsupportedField {
                        field: other.to_string(),
                    })
                }
            };
            *slot = Some(value.into());
        }
        Ok(request)
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.severity.is_none()
            && self.location.is_none()
            && self.description.is_none()
    }

    /// Parse enum-valued fields. Fails before anything is mutated.
    pub(crate) fn parse(&self) -> Result<ParsedCorrection, FeedbackError> {
        if self.is_empty() {
            return Err(FeedbackError::EmptyCorrection);
        }
        let category = self
            .category
            .as_deref()
            .map(|v| {
                DefectCategory::parse_str(v).ok_or_else(|| FeedbackError::InvalidEnumValue {
                    field: "category",
                    value: v.to_string(),
                })
            })
            .transpose()?;
        let severity = self
            .severity
            .as_deref()
            .map(|v| {
                SeverityLevel::parse_str(v).ok_or_else(|| FeedbackError::InvalidEnumValue {
                    field: "severity",
                    value: v.to_string(),
                })
            })
            .transpose()?;
        let location = self.location.as_deref().map(|v| {
            let v = v.trim();
            (!v.is_empty()).then(|| v.to_string())
        });
        Ok(ParsedCorrection {
            category,
            severity,
            location,
            description: self.description.clone(),
        })
    }
}

/// A validated [`CorrectionRequest`].
#[derive(Debug, Clone)]
pub(crate) struct ParsedCorrection {
    pub category: Option<DefectCategory>,
    pub severity: Option<SeverityLevel>,
    pub location: Option<Option<String>>,
    pub description: Option<String>,
}

impl ParsedCorrection {
    pub fn apply(self, finding: &mut Finding) {
        if let Some(category) = self.category {
            finding.category = category;
        }
        if let Some(severity) = self.severity {
            finding.severity = severity;
        }
        if let Some(location) = self.location {
            finding.location = location;
        }
        if let Some(description) = self.description {
            finding.description = description;
        }
    }
}

/// One exported training example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrainingRecord {
    Feedback(Feedback),
    Correction(Correction),
}

impl TrainingRecord {
    pub fn sequence(&self) -> u64 {
        match self {
            Self::Feedback(f) => f.sequence,
            Self::Correction(c) => c.sequence,
        }
    }

    pub fn finding_id(&self) -> &FindingId {
        match self {
            Self::Feedback(f) => &f.finding_id,
            Self::Correction(c) => &c.finding_id,
        }
    }
}

/// Feedback and correction totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetrics {
    pub feedback_count: u64,
    pub correct: u64,
    pub incorrect: u64,
    pub corrections: u64,
    /// `correct / (correct + incorrect)`; `None` until feedback exists.
    pub accuracy: Option<f64>,
}

impl TrainingMetrics {
    pub fn from_counts(correct: u64, incorrect: u64, corrections: u64) -> Self {
        Self {
            feedback_count: correct + incorrect,
            correct,
            incorrect,
            corrections,
            accuracy: accuracy(correct, incorrect),
        }
    }
}

pub(crate) fn accuracy(correct: u64, incorrect: u64) -> Option<f64> {
    let total = correct + incorrect;
    (total > 0).then(|| correct as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_parses_case_insensitively() {
        assert_eq!(Verdict::parse_str("Correct"), Some(Verdict::Correct));
        assert_eq!(Verdict::parse_str(" incorrect "), Some(Verdict::Incorrect));
        assert_eq!(Verdict::parse_str("maybe"), None);
    }

    #[test]
    fn from_fields_rejects_unknown_keys() {
        let err = CorrectionRequest::from_fields([("severity", "high"), ("confidence", "0.9")]).unwrap_err();
        assert!(matches!(err, FeedbackError::UnsupportedField { ref field } if field == "confidence"));
    }

    #[test]
    fn parse_rejects_bad_enum_values() {
        let request = CorrectionRequest::from_fields([("category", "asbestosis")]).unwrap();
        let err = request.parse().unwrap_err();
        assert!(matches!(err, FeedbackError::InvalidEnumValue { field: "category", .. }));
    }

    #[test]
    fn blank_location_clears() {
        let request = CorrectionRequest::from_fields([("location", "  ")]).unwrap();
        assert_eq!(request.parse().unwrap().location, Some(None));
        let request = CorrectionRequest::from_fields([("location", "North Wall")]).unwrap();
        assert_eq!(request.parse().unwrap().location, Some(Some("North Wall".to_string())));
    }

    #[test]
    fn parse_rejects_empty_request() {
        let err = CorrectionRequest::default().parse().unwrap_err();
        assert!(matches!(err, FeedbackError::EmptyCorrection));
    }

    #[test]
    fn accuracy_needs_feedback() {
        assert_eq!(accuracy(0, 0), None);
        assert_eq!(accuracy(7, 1), Some(0.875));
    }
}
