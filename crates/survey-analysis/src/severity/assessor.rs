//! Severity assessment from contextual indicator vocabulary.
//!
//! The scan region is the candidate's window extended by a fixed number of
//! tokens on each side, clamped to the sentence the window was cut from.
//! When indicators of several levels co-occur the highest wins. A rule's
//! severity hint takes part as one more indicator. With nothing to go on the
//! level is [`DEFAULT_SEVERITY`].

use serde::{Deserialize, Serialize};
use survey_core::config::SeverityConfig;
use survey_core::errors::DetectionError;
use survey_core::SeverityLevel;

use super::vocabulary::INDICATORS;
use crate::rules::CandidateMatch;
use crate::text::{NormalizedDocument, PhraseMatcher, TextWindow};

/// Severity assigned when no indicator and no rule hint is found.
pub const DEFAULT_SEVERITY: SeverityLevel = SeverityLevel::Medium;

/// Where an assessed severity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeveritySource {
    /// An indicator phrase in the text.
    Indicator,
    /// The matched rule's severity hint outranked every indicator.
    RuleHint,
    /// Nothing found; [`DEFAULT_SEVERITY`].
    Default,
}

/// Result of assessing one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityAssessment {
    pub level: SeverityLevel,
    pub source: SeveritySource,
    /// Text of the deciding indicator, lowercased, when `source` is `Indicator`.
    pub indicator: Option<String>,
}

impl SeverityAssessment {
    /// Severity backed by explicit vocabulary in the text.
    pub fn from_indicator(&self) -> bool {
        self.source == SeveritySource::Indicator
    }
}

/// Assigns a [`SeverityLevel`] to candidate matches.
#[derive(Debug, Clone)]
pub struct SeverityAssessor {
    matcher: PhraseMatcher,
    levels: Vec<SeverityLevel>,
    neighborhood_tokens: usize,
}

impl SeverityAssessor {
    /// Assessor with the built-in indicator vocabulary.
    pub fn new(config: &SeverityConfig) -> Result<Self, DetectionError> {
        Self::with_vocabulary(
            INDICATORS.iter().map(|&(level, phrase)| (level, phrase.to_string())),
            config,
        )
    }

    /// Assessor with a custom indicator vocabulary.
    pub fn with_vocabulary<I>(vocabulary: I, config: &SeverityConfig) -> Result<Self, DetectionError>
    where
        I: IntoIterator<Item = (SeverityLevel, String)>,
    {
        let (levels, phrases): (Vec<SeverityLevel>, Vec<String>) = vocabulary.into_iter().unzip();
        let matcher = PhraseMatcher::new(&phrases).map_err(|e| DetectionError::InvalidRuleSet {
            reason: format!("failed to compile severity vocabulary: {e}"),
        })?;
        Ok(Self {
            matcher,
            levels,
            neighborhood_tokens: config.effective_neighborhood_tokens(),
        })
    }

    pub fn assess(
        &self,
        doc: &NormalizedDocument,
        window: &TextWindow,
        candidate: &CandidateMatch,
    ) -> SeverityAssessment {
        let from = window
            .token_start
            .saturating_sub(self.neighborhood_tokens)
            .max(window.sentence_token_start);
        let to = (window.token_end + self.neighborhood_tokens).min(window.sentence_token_end);
        let (region, base) = doc.slice_tokens(from, to);

        // Highest level wins; among equals the earliest indicator is reported.
        let mut best: Option<(SeverityLevel, usize, usize)> = None;
        for hit in self.matcher.find_all(region, base) {
            let Some(&level) = self.levels.get(hit.phrase) else {
                continue;
            };
            let better = match best {
                None => true,
                Some((best_level, best_start, _)) => {
                    level > best_level || (level == best_level && hit.start < best_start)
                }
            };
            if better {
                best = Some((level, hit.start, hit.end));
            }
        }

        match (best, candidate.severity_hint) {
            (Some((level, _, _)), Some(hint)) if hint > level => SeverityAssessment {
                level: hint,
                source: SeveritySource::RuleHint,
                indicator: None,
            },
            (Some((level, start, end)), _) => SeverityAssessment {
                level,
                source: SeveritySource::Indicator,
                indicator: Some(doc.text()[start..end].to_ascii_lowercase()),
            },
            (None, Some(hint)) => SeverityAssessment {
                level: hint,
                source: SeveritySource::RuleHint,
                indicator: None,
            },
            (None, None) => SeverityAssessment {
                level: DEFAULT_SEVERITY,
                source: SeveritySource::Default,
                indicator: None,
            },
        }
    }
}
