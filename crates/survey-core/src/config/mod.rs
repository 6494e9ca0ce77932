pub mod analysis_config;
pub mod context_config;
pub mod normalizer_config;
pub mod scoring_config;

use serde::{Deserialize, Serialize};

pub use analysis_config::AnalysisConfig;
pub use context_config::{LocationConfig, SeverityConfig};
pub use normalizer_config::NormalizerConfig;
pub use scoring_config::ScoringConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SurveyConfig {
    pub normalizer: NormalizerConfig,
    pub severity: SeverityConfig,
    pub location: LocationConfig,
    pub scoring: ScoringConfig,
    pub analysis: AnalysisConfig,
}

impl SurveyConfig {
    /// Load config from a TOML string, falling back to defaults for missing
    /// fields, then validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = &self.normalizer;
        if n.effective_max_window_tokens() == 0 {
            return Err(invalid("normalizer.max_window_tokens", "must be positive"));
        }
        if n.effective_overlap_tokens() >= n.effective_max_window_tokens() {
            return Err(invalid(
                "normalizer.overlap_tokens",
                format!(
                    "overlap {} must be smaller than max_window_tokens {}",
                    n.effective_overlap_tokens(),
                    n.effective_max_window_tokens()
                ),
            ));
        }

        let s = &self.scoring;
        if !(0.0..=1.0).contains(&s.floor) || !(0.0..=1.0).contains(&s.ceiling) {
            return Err(invalid("scoring.floor", "floor and ceiling must lie in [0, 1]"));
        }
        if s.floor > s.ceiling {
            return Err(invalid(
                "scoring.floor",
                format!("floor {} exceeds ceiling {}", s.floor, s.ceiling),
            ));
        }
        let bonuses = [
            ("scoring.corroboration_step", s.corroboration_step),
            ("scoring.max_corroboration_bonus", s.max_corroboration_bonus),
            ("scoring.location_bonus", s.location_bonus),
            ("scoring.severity_indicator_bonus", s.severity_indicator_bonus),
            ("scoring.measurement_bonus", s.measurement_bonus),
        ];
        for (field, value) in bonuses {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("must be a non-negative number, got {value}")));
            }
        }
        if !(0.0..=1.0).contains(&s.corroboration_decay) {
            return Err(invalid("scoring.corroboration_decay", "must lie in [0, 1]"));
        }

        let threshold = self.analysis.effective_priority_confidence_threshold();
        if !(0.0..=1.0).contains(&threshold) {
            return Err(invalid("analysis.priority_confidence_threshold", "must lie in [0, 1]"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    let reason = reason.into();
    ::tracing::warn!(field, %reason, "rejected config value");
    ConfigError::Invalid { field, reason }
}
