//! The compiled, immutable category rule set.

use survey_core::errors::DetectionError;
use survey_core::DefectCategory;

use super::defaults::default_rules;
use super::types::{CandidateMatch, PatternRule};
use crate::text::{PhraseMatcher, TextWindow};

/// All pattern rules compiled into one automaton.
///
/// Constructed once and shared read-only across analyses (`Send + Sync`).
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<PatternRule>,
    matcher: PhraseMatcher,
}

impl RuleSet {
    /// Validate and compile `rules`.
    pub fn new(rules: Vec<PatternRule>) -> Result<Self, DetectionError> {
        if rules.is_empty() {
            return Err(DetectionError::InvalidRuleSet {
                reason: "rule set is empty".to_string(),
            });
        }
        for rule in &rules {
            if !rule.phrase.chars().any(char::is_alphanumeric) {
                return Err(DetectionError::InvalidRuleSet {
                    reason: format!("rule for {} has no usable phrase: {:?}", rule.category, rule.phrase),
                });
            }
            if !rule.weight.is_finite() || rule.weight <= 0.0 {
                return Err(DetectionError::InvalidRuleSet {
                    reason: format!("rule {} has non-positive weight {}", rule.id(), rule.weight),
                });
            }
        }

        let matcher = PhraseMatcher::new(rules.iter().map(|r| r.phrase.as_str())).map_err(|e| {
            DetectionError::InvalidRuleSet {
                reason: format!("failed to compile rule automaton: {e}"),
            }
        })?;

        tracing::debug!(rules = rules.len(), "compiled rule set");
        Ok(Self { rules, matcher })
    }

    /// The built-in building-survey rule table.
    pub fn standard() -> Result<Self, DetectionError> {
        Self::new(default_rules())
    }

    /// Match one window: one candidate per rule occurrence, canonically ordered.
    pub fn match_window(&self, window: &TextWindow) -> Vec<CandidateMatch> {
        let mut candidates: Vec<CandidateMatch> = self
            .matcher
            .find_all(&window.text, window.start)
            .into_iter()
            .filter_map(|hit| {
                let rule = self.rules.get(hit.phrase)?;
                let local = (hit.start - window.start)..(hit.end - window.start);
                Some(CandidateMatch {
                    category: rule.category,
                    pattern: rule.phrase.clone(),
                    weight: rule.weight,
                    severity_hint: rule.severity_hint,
                    window_index: window.index,
                    window_start: window.start,
                    window_end: window.end,
                    matched_start: hit.start,
                    matched_end: hit.end,
                    matched_text: window.text[local].to_string(),
                })
            })
            .collect();
        candidates.sort_by(CandidateMatch::canonical_cmp);
        candidates
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Rules belonging to one category.
    pub fn rules_for(&self, category: DefectCategory) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter().filter(move |r| r.category == category)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
