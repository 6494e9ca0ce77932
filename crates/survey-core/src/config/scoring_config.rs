//! Confidence scorer constants.

use serde::{Deserialize, Serialize};

/// Tunable confidence constants. Confidence lives on the `0.0..=1.0` scale and
/// is always clamped to `[floor, ceiling]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Lowest confidence ever emitted (default: 0.30).
    pub floor: f64,
    /// Highest confidence ever emitted (default: 0.95).
    pub ceiling: f64,
    /// Bonus for the first corroborating pattern (default: 0.10).
    pub corroboration_step: f64,
    /// Geometric decay applied to each further corroborating pattern (default: 0.7).
    pub corroboration_decay: f64,
    /// Cap on the total corroboration bonus (default: 0.25).
    pub max_corroboration_bonus: f64,
    /// Bonus when a location was resolved (default: 0.05).
    pub location_bonus: f64,
    /// Bonus when severity came from explicit vocabulary (default: 0.05).
    pub severity_indicator_bonus: f64,
    /// Bonus when the window contains a measurement such as `3mm` (default: 0.05).
    pub measurement_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            floor: 0.30,
            ceiling: 0.95,
            corroboration_step: 0.10,
            corroboration_decay: 0.7,
            max_corroboration_bonus: 0.25,
            location_bonus: 0.05,
            severity_indicator_bonus: 0.05,
            measurement_bonus: 0.05,
        }
    }
}

impl ScoringConfig {
    /// Midpoint of the declared confidence range.
    pub fn midpoint(&self) -> f64 {
        (self.floor + self.ceiling) / 2.0
    }
}
