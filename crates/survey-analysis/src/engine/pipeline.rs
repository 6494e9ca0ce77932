//! DefectEngine: end-to-end detection over one document.
//!
//! (1) Normalizer → windows
//! (2) RuleSet per window → candidates (rayon above the window threshold)
//! (3) Severity, location and confidence enrichment per candidate
//! (4) Deduplicator → ordered findings
//! (5) Summary, priority findings and recommendations

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use rayon::prelude::*;
use survey_core::config::AnalysisConfig;
use survey_core::errors::{DetectionError, SurveyError};
use survey_core::{DefectCategory, ReportId, SurveyConfig};
use xxhash_rust::xxh3::xxh3_64;

use super::types::DefectReport;
use crate::aggregation::{summarize, Deduplicator, EnrichedCandidate};
use crate::confidence::{ConfidenceScorer, ScoreInput};
use crate::insights::{priority_findings, recommendations};
use crate::location::LocationExtractor;
use crate::rules::{CandidateMatch, RuleSet};
use crate::severity::SeverityAssessor;
use crate::text::{NormalizedDocument, Normalizer, TextWindow};

/// Stateless detection engine. Shareable across threads; the rule set is
/// held behind an `Arc` so several engines can use one compiled table.
#[derive(Debug, Clone)]
pub struct DefectEngine {
    rules: Arc<RuleSet>,
    normalizer: Normalizer,
    severity: SeverityAssessor,
    locator: LocationExtractor,
    scorer: ConfidenceScorer,
    dedup: Deduplicator,
    analysis: AnalysisConfig,
}

impl DefectEngine {
    /// Build an engine around an injected rule set. The config is validated first.
    pub fn new(rules: Arc<RuleSet>, config: &SurveyConfig) -> Result<Self, SurveyError> {
        config.validate()?;
        Ok(Self {
            rules,
            normalizer: Normalizer::new(&config.normalizer),
            severity: SeverityAssessor::new(&config.severity)?,
            locator: LocationExtractor::new(&config.location)?,
            scorer: ConfidenceScorer::new(config.scoring.clone()),
            dedup: Deduplicator::new(),
            analysis: config.analysis.clone(),
        })
    }

    /// Standard rule table with default configuration.
    pub fn with_defaults() -> Result<Self, SurveyError> {
        Self::new(Arc::new(RuleSet::standard()?), &SurveyConfig::default())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn scorer(&self) -> &ConfidenceScorer {
        &self.scorer
    }

    /// Pre-aggregation candidates in canonical order.
    pub fn candidates(&self, text: &str) -> Result<Vec<CandidateMatch>, DetectionError> {
        let doc = self.normalizer.normalize(text)?;
        Ok(self
            .per_window(&doc, |w| self.rules.match_window(w))
            .into_iter()
            .flatten()
            .collect())
    }

    /// Analyze one document. Without a `report_id` a stable one is derived
    /// from the normalized text.
    pub fn analyze(&self, text: &str, report_id: Option<ReportId>) -> Result<DefectReport, DetectionError> {
        let doc = self.normalizer.normalize(text)?;
        let report_id = report_id.unwrap_or_else(|| derive_report_id(doc.text()));
        let _span = tracing::info_span!("analyze", report = %report_id).entered();

        let enriched: Vec<EnrichedCandidate> = self
            .per_window(&doc, |w| self.enrich_window(&doc, w))
            .into_iter()
            .flatten()
            .collect();
        let candidate_count = enriched.len();

        let findings = self.dedup.deduplicate(&report_id, enriched);
        let summary = summarize(&findings);
        let priority = priority_findings(
            &findings,
            self.analysis.effective_priority_confidence_threshold(),
            self.analysis.effective_max_priority_findings(),
        );
        let recommendations = recommendations(&summary);

        tracing::info!(
            windows = doc.windows().len(),
            candidates = candidate_count,
            findings = findings.len(),
            priority = priority.len(),
            "analysis complete"
        );

        Ok(DefectReport {
            report_id,
            findings,
            summary,
            priority_findings: priority,
            recommendations,
            window_count: doc.windows().len(),
        })
    }

    /// Run `f` over every window, in window order; data-parallel once the
    /// window count reaches the configured threshold.
    fn per_window<T, F>(&self, doc: &NormalizedDocument, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&TextWindow) -> T + Sync + Send,
    {
        let windows = doc.windows();
        if windows.len() >= self.analysis.effective_parallel_window_threshold() {
            windows.par_iter().map(&f).collect()
        } else {
            windows.iter().map(&f).collect()
        }
    }

    fn enrich_window(&self, doc: &NormalizedDocument, window: &TextWindow) -> Vec<EnrichedCandidate> {
        let candidates = self.rules.match_window(window);
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut patterns: BTreeMap<DefectCategory, BTreeSet<&str>> = BTreeMap::new();
        for c in &candidates {
            patterns.entry(c.category).or_default().insert(c.pattern.as_str());
        }
        let has_measurement = self.scorer.has_measurement(&window.text);

        candidates
            .iter()
            .map(|c| {
                let corroborating_patterns: Vec<String> = patterns
                    .get(&c.category)
                    .into_iter()
                    .flatten()
                    .filter(|&&p| p != c.pattern)
                    .map(|p| p.to_string())
                    .collect();
                let severity = self.severity.assess(doc, window, c);
                let location = self.locator.locate(doc, window, c);
                let confidence = self.scorer.score(&ScoreInput {
                    weight: c.weight,
                    corroboration: corroborating_patterns.len(),
                    has_location: location.is_some(),
                    severity_from_indicator: severity.from_indicator(),
                    has_measurement,
                });
                EnrichedCandidate {
                    candidate: c.clone(),
                    severity,
                    location,
                    confidence,
                    excerpt: window.text.clone(),
                    corroborating_patterns,
                }
            })
            .collect()
    }
}

/// `r-<xxh3>` over the normalized text.
pub fn derive_report_id(normalized_text: &str) -> ReportId {
    ReportId::new(format!("r-{:016x}", xxh3_64(normalized_text.as_bytes())))
}
