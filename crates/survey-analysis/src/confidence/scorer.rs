//! ConfidenceScorer: additive evidence model clamped to `[floor, ceiling]`.
//!
//! base weight + diminishing corroboration bonus + context bonuses
//! (location resolved, explicit severity vocabulary, measurement in the window).

use regex::Regex;
use serde::{Deserialize, Serialize};
use survey_core::config::ScoringConfig;

/// Measurements such as `3mm`, `2.5 m`, `40%`.
const MEASUREMENT_PATTERN: &str = r"(?i)\b\d+(\.\d+)? ?(mm|cm|m|inch|inches|feet|ft|%)(\b|$|\s)";

/// Evidence gathered for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInput {
    /// Rule weight of the candidate's pattern.
    pub weight: f64,
    /// Distinct other patterns of the same category in the same window.
    pub corroboration: usize,
    pub has_location: bool,
    /// Severity came from indicator vocabulary rather than a hint or the default.
    pub severity_from_indicator: bool,
    pub has_measurement: bool,
}

/// Per-factor contributions, kept for explainability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub base: f64,
    pub corroboration_bonus: f64,
    pub location_bonus: f64,
    pub severity_bonus: f64,
    pub measurement_bonus: f64,
    /// Clamped total.
    pub value: f64,
}

/// Scores candidates on the `0.0..=1.0` scale.
#[derive(Debug, Clone)]
pub struct ConfidenceScorer {
    config: ScoringConfig,
    measurement: Option<Regex>,
}

impl ConfidenceScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            measurement: Regex::new(MEASUREMENT_PATTERN).ok(),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn floor(&self) -> f64 {
        self.config.floor
    }

    pub fn ceiling(&self) -> f64 {
        self.config.ceiling
    }

    /// `(floor + ceiling) / 2`.
    pub fn midpoint(&self) -> f64 {
        self.config.midpoint()
    }

    /// Confidence for one candidate, always within `[floor, ceiling]`.
    pub fn score(&self, input: &ScoreInput) -> f64 {
        self.breakdown(input).value
    }

    /// Confidence with each factor's contribution.
    pub fn breakdown(&self, input: &ScoreInput) -> ConfidenceBreakdown {
        let c = &self.config;
        let base = input.weight;
        let corroboration_bonus = self.corroboration_bonus(input.corroboration);
        let location_bonus = if input.has_location { c.location_bonus } else { 0.0 };
        let severity_bonus = if input.severity_from_indicator {
            c.severity_indicator_bonus
        } else {
            0.0
        };
        let measurement_bonus = if input.has_measurement { c.measurement_bonus } else { 0.0 };

        let raw = base + corroboration_bonus + location_bonus + severity_bonus + measurement_bonus;
        ConfidenceBreakdown {
            base,
            corroboration_bonus,
            location_bonus,
            severity_bonus,
            measurement_bonus,
            value: self.clamp(raw),
        }
    }

    /// `Σ_{i=1..k} step·decay^(i-1)`, capped. Monotone non-decreasing in `k`.
    pub fn corroboration_bonus(&self, k: usize) -> f64 {
        let c = &self.config;
        let mut total = 0.0;
        let mut step = c.corroboration_step;
        for _ in 0..k {
            total += step;
            if total >= c.max_corroboration_bonus {
                return c.max_corroboration_bonus;
            }
            step *= c.corroboration_decay;
            if step <= f64::EPSILON {
                break;
            }
        }
        total.min(c.max_corroboration_bonus)
    }

    /// Whether `text` carries a measurement.
    pub fn has_measurement(&self, text: &str) -> bool {
        self.measurement.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Clamp into `[floor, ceiling]`. NaN goes to the floor.
    fn clamp(&self, raw: f64) -> f64 {
        let (floor, ceiling) = (self.config.floor, self.config.ceiling);
        if raw.is_nan() {
            return floor;
        }
        if raw < floor {
            floor
        } else if raw > ceiling {
            ceiling
        } else {
            raw
        }
    }
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
