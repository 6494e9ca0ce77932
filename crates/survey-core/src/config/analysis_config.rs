//! Pipeline-level analysis configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the analysis pipeline and report insights.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Window count at which matching switches to the rayon pool. Default: 64.
    pub parallel_window_threshold: Option<usize>,
    /// Priority findings need confidence strictly above this. Default: 0.7.
    pub priority_confidence_threshold: Option<f64>,
    /// Maximum number of priority findings in a report. Default: 5.
    pub max_priority_findings: Option<usize>,
}

impl AnalysisConfig {
    pub fn effective_parallel_window_threshold(&self) -> usize {
        self.parallel_window_threshold.unwrap_or(64)
    }

    pub fn effective_priority_confidence_threshold(&self) -> f64 {
        self.priority_confidence_threshold.unwrap_or(0.7)
    }

    pub fn effective_max_priority_findings(&self) -> usize {
        self.max_priority_findings.unwrap_or(5)
    }
}
