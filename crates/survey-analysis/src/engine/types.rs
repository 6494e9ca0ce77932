//! Report output of a single analysis.

use serde::{Deserialize, Serialize};
use survey_core::{FindingId, ReportId};

use crate::aggregation::{DistributionSummary, Finding};
use crate::insights::Recommendation;

/// Everything detected in one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectReport {
    pub report_id: ReportId,
    /// Deduplicated findings in output order.
    pub findings: Vec<Finding>,
    pub summary: DistributionSummary,
    /// High-severity, high-confidence subset of `findings`, same order.
    pub priority_findings: Vec<Finding>,
    pub recommendations: Vec<Recommendation>,
    /// Windows that survived segmentation.
    pub window_count: usize,
}

impl DefectReport {
    pub fn finding(&self, id: &FindingId) -> Option<&Finding> {
        self.findings.iter().find(|f| &f.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}
