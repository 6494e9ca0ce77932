//! Priority findings: the high-severity, high-confidence head of a report.

use survey_core::SeverityLevel;

use crate::aggregation::Finding;

/// Findings with severity ≥ high and confidence strictly above `threshold`,
/// at most `limit`, in the order given.
pub fn priority_findings(findings: &[Finding], threshold: f64, limit: usize) -> Vec<Finding> {
    findings
        .iter()
        .filter(|f| f.severity >= SeverityLevel::High && f.confidence > threshold)
        .take(limit)
        .cloned()
        .collect()
}
