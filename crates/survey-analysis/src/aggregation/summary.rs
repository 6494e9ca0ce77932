//! Distribution summaries.

use std::collections::BTreeMap;

use survey_core::{DefectCategory, SeverityLevel};

use super::types::{DistributionSummary, Finding};

/// Count findings per category and per severity, zero-filling absent values.
pub fn summarize(findings: &[Finding]) -> DistributionSummary {
    let mut by_category: BTreeMap<DefectCategory, usize> =
        DefectCategory::all().iter().map(|&c| (c, 0)).collect();
    let mut by_severity: BTreeMap<SeverityLevel, usize> =
        SeverityLevel::all().iter().map(|&s| (s, 0)).collect();

    for finding in findings {
        *by_category.entry(finding.category).or_insert(0) += 1;
        *by_severity.entry(finding.severity).or_insert(0) += 1;
    }

    DistributionSummary {
        by_category,
        by_severity,
        total: findings.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_is_zero_filled() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.by_category.len(), DefectCategory::all().len());
        assert_eq!(summary.by_severity.len(), SeverityLevel::all().len());
        assert!(summary.by_category.values().all(|&n| n == 0));
        assert!(summary.by_severity.values().all(|&n| n == 0));
    }
}
