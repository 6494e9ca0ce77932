//! FeedbackLedger: live findings plus the append-only training log.
//!
//! State is sharded per report in a `DashMap`. Every mutation of a report
//! happens under its entry lock, so concurrent feedback on the same finding
//! never loses counter updates while different reports proceed in parallel.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use dashmap::DashMap;
use survey_core::errors::FeedbackError;
use survey_core::{FindingId, FxHashMap, ReportId};

use super::types::{
    accuracy, Correction, CorrectionRequest, Feedback, LabelSnapshot, TrainingMetrics, TrainingRecord, Verdict,
};
use crate::aggregation::Finding;
use crate::engine::DefectReport;

/// Per-report state.
#[derive(Debug, Default)]
struct ReportLedger {
    findings: FxHashMap<FindingId, Finding>,
    feedback: Vec<Feedback>,
    corrections: Vec<Correction>,
    correct: u64,
    incorrect: u64,
}

impl ReportLedger {
    fn metrics(&self) -> TrainingMetrics {
        TrainingMetrics::from_counts(self.correct, self.incorrect, self.corrections.len() as u64)
    }
}

/// Records reviewer feedback and corrections against registered findings.
#[derive(Debug, Default)]
pub struct FeedbackLedger {
    reports: DashMap<ReportId, ReportLedger>,
    index: DashMap<FindingId, ReportId>,
    sequence: AtomicU64,
    correct: AtomicU64,
    incorrect: AtomicU64,
    corrections: AtomicU64,
}

impl FeedbackLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a report's findings addressable. Re-registering keeps the live
    /// (possibly corrected) copies of findings already known.
    pub fn register_report(&self, report: &DefectReport) {
        let mut entry = self.reports.entry(report.report_id.clone()).or_default();
        for finding in &report.findings {
            entry
                .findings
                .entry(finding.id.clone())
                .or_insert_with(|| finding.clone());
            self.index.insert(finding.id.clone(), report.report_id.clone());
        }
        tracing::debug!(
            report = %report.report_id,
            findings = report.findings.len(),
            "registered report"
        );
    }

    /// Current labels of a finding.
    pub fn finding(&self, id: &FindingId) -> Option<Finding> {
        let report_id = self.index.get(id)?.clone();
        self.reports.get(&report_id)?.findings.get(id).cloned()
    }

    /// Append a verdict for `finding_id`.
    pub fn record_feedback(
        &self,
        finding_id: &FindingId,
        verdict: Verdict,
        session_id: &str,
    ) -> Result<Feedback, FeedbackError> {
        let report_id = self.report_of(finding_id)?;
        let mut ledger = self
            .reports
            .get_mut(&report_id)
            .ok_or_else(|| unknown(finding_id))?;
        let finding = ledger.findings.get(finding_id).ok_or_else(|| unknown(finding_id))?;

        let record = Feedback {
            sequence: self.sequence.fetch_add(1, Ordering::Relaxed),
            finding_id: finding_id.clone(),
            report_id: report_id.clone(),
            verdict,
            timestamp: Utc::now(),
            session_id: session_id.to_string(),
            label: LabelSnapshot::of(finding),
            confidence: finding.confidence,
            excerpt: finding.excerpt.clone(),
        };

        match verdict {
            Verdict::Correct => {
                ledger.correct += 1;
                self.correct.fetch_add(1, Ordering::Relaxed);
            }
            Verdict::Incorrect => {
                ledger.incorrect += 1;
                self.incorrect.fetch_add(1, Ordering::Relaxed);
            }
        }
        ledger.feedback.push(record.clone());
        tracing::debug!(finding = %finding_id, %verdict, "recorded feedback");
        Ok(record)
    }

    /// Validate `request`, then apply the supplied fields and append the
    /// correction. On error nothing changes.
    pub fn apply_correction(
        &self,
        finding_id: &FindingId,
        request: &CorrectionRequest,
        session_id: &str,
    ) -> Result<Correction, FeedbackError> {
        let parsed = request.parse().inspect_err(|e| {
            tracing::warn!(finding = %finding_id, error = %e, "rejected correction");
        })?;
        let report_id = self.report_of(finding_id)?;
        let mut ledger = self
            .reports
            .get_mut(&report_id)
            .ok_or_else(|| unknown(finding_id))?;
        let finding = ledger
            .findings
            .get_mut(finding_id)
            .ok_or_else(|| unknown(finding_id))?;

        let prior = LabelSnapshot::of(finding);
        parsed.apply(finding);
        let corrected = LabelSnapshot::of(finding);
        let record = Correction {
            sequence: self.sequence.fetch_add(1, Ordering::Relaxed),
            finding_id: finding_id.clone(),
            report_id: report_id.clone(),
            prior,
            corrected,
            excerpt: finding.excerpt.clone(),
            timestamp: Utc::now(),
            session_id: session_id.to_string(),
        };

        ledger.corrections.push(record.clone());
        self.corrections.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(finding = %finding_id, "applied correction");
        Ok(record)
    }

    /// Accuracy over every report; `None` before any feedback.
    pub fn accuracy(&self) -> Option<f64> {
        accuracy(
            self.correct.load(Ordering::Relaxed),
            self.incorrect.load(Ordering::Relaxed),
        )
    }

    /// Accuracy of one report; `None` when unknown or without feedback.
    pub fn report_accuracy(&self, report_id: &ReportId) -> Option<f64> {
        self.reports.get(report_id)?.metrics().accuracy
    }

    /// Totals over every report.
    pub fn metrics(&self) -> TrainingMetrics {
        TrainingMetrics::from_counts(
            self.correct.load(Ordering::Relaxed),
            self.incorrect.load(Ordering::Relaxed),
            self.corrections.load(Ordering::Relaxed),
        )
    }

    pub fn report_metrics(&self, report_id: &ReportId) -> Option<TrainingMetrics> {
        self.reports.get(report_id).map(|ledger| ledger.metrics())
    }

    /// Every feedback and correction record, ordered by sequence.
    pub fn training_records(&self) -> Vec<TrainingRecord> {
        let mut records: Vec<TrainingRecord> = Vec::new();
        for ledger in self.reports.iter() {
            records.extend(ledger.feedback.iter().cloned().map(TrainingRecord::Feedback));
            records.extend(ledger.corrections.iter().cloned().map(TrainingRecord::Correction));
        }
        records.sort_by_key(TrainingRecord::sequence);
        records
    }

    /// Write training records as JSON lines. Returns the number written.
    pub fn export_jsonl<W: Write>(&self, mut writer: W) -> Result<usize, FeedbackError> {
        let records = self.training_records();
        for record in &records {
            serde_json::to_writer(&mut writer, record)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        tracing::info!(records = records.len(), "exported training records");
        Ok(records.len())
    }

    fn report_of(&self, finding_id: &FindingId) -> Result<ReportId, FeedbackError> {
        match self.index.get(finding_id) {
            Some(report_id) => Ok(report_id.clone()),
            None => {
                tracing::warn!(finding = %finding_id, "unknown finding");
                Err(unknown(finding_id))
            }
        }
    }
}

fn unknown(finding_id: &FindingId) -> FeedbackError {
    FeedbackError::UnknownFinding {
        id: finding_id.to_string(),
    }
}
