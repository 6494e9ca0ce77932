//! Core types for candidate aggregation.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use survey_core::{DefectCategory, FindingId, ReportId, SeverityLevel};

use crate::location::ResolvedLocation;
use crate::rules::CandidateMatch;
use crate::severity::SeverityAssessment;

/// A candidate after severity, location and confidence enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedCandidate {
    pub candidate: CandidateMatch,
    pub severity: SeverityAssessment,
    pub location: Option<ResolvedLocation>,
    pub confidence: f64,
    /// Text of the window the candidate was found in.
    pub excerpt: String,
    /// Distinct other patterns of the same category in the same window.
    pub corroborating_patterns: Vec<String>,
}

/// A confirmed, deduplicated defect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable within its report; derived from report, category and excerpt span.
    pub id: FindingId,
    pub report_id: ReportId,
    pub category: DefectCategory,
    pub severity: SeverityLevel,
    /// Lowercased location phrase, `None` when nothing was in range.
    pub location: Option<String>,
    /// Within the scorer's `[floor, ceiling]`.
    pub confidence: f64,
    /// Window text the finding was detected in. Never changes.
    pub excerpt: String,
    /// Starts as the excerpt; correctable.
    pub description: String,
    /// Byte span of the excerpt in the normalized text.
    pub start: usize,
    pub end: usize,
    /// Byte span of the matched phrase.
    pub matched_start: usize,
    pub matched_end: usize,
    pub matched_text: String,
    /// Rule phrase of the surviving candidate.
    pub pattern: String,
    /// Every other pattern that fired for this finding, sorted.
    pub corroborating_patterns: SmallVec<[String; 4]>,
    /// Severity indicator phrase, when severity came from the text.
    pub severity_indicator: Option<String>,
    /// Number of candidates merged into this finding.
    pub evidence_count: usize,
}

impl Finding {
    /// Output order: severity desc, confidence desc, offset asc, category name.
    pub fn output_cmp(&self, other: &Self) -> Ordering {
        other
            .severity
            .cmp(&self.severity)
            .then(other.confidence.total_cmp(&self.confidence))
            .then(self.start.cmp(&other.start))
            .then(self.category.name().cmp(other.category.name()))
    }
}

/// Category and severity distributions over a report's findings.
/// Every enum value is present, zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub by_category: BTreeMap<DefectCategory, usize>,
    pub by_severity: BTreeMap<SeverityLevel, usize>,
    pub total: usize,
}

impl DistributionSummary {
    pub fn category_count(&self, category: DefectCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    pub fn severity_count(&self, level: SeverityLevel) -> usize {
        self.by_severity.get(&level).copied().unwrap_or(0)
    }
}
