//! Config loading, validation, and error-code tests.

use proptest::prelude::*;
use survey_core::config::SurveyConfig;
use survey_core::errors::ConfigError;
use survey_core::{DefectCategory, DetectionError, FeedbackError, SeverityLevel, SurveyError, SurveyErrorCode};

#[test]
fn empty_toml_yields_defaults() {
    let config = SurveyConfig::from_toml("").unwrap();
    assert_eq!(config.normalizer.effective_min_window_tokens(), 2);
    assert_eq!(config.normalizer.effective_max_window_tokens(), 48);
    assert_eq!(config.severity.effective_neighborhood_tokens(), 8);
    assert_eq!(config.location.effective_neighborhood_tokens(), 12);
    assert_eq!(config.scoring.floor, 0.30);
    assert_eq!(config.scoring.ceiling, 0.95);
    assert!((config.scoring.midpoint() - 0.625).abs() < 1e-12);
    assert_eq!(config.analysis.effective_max_priority_findings(), 5);
}

#[test]
fn partial_sections_override_only_given_fields() {
    let config = SurveyConfig::from_toml(
        r#"
        [normalizer]
        max_window_tokens = 32

        [scoring]
        location_bonus = 0.08

        [analysis]
        parallel_window_threshold = 16
        "#,
    )
    .unwrap();
    assert_eq!(config.normalizer.effective_max_window_tokens(), 32);
    assert_eq!(config.normalizer.effective_overlap_tokens(), 8);
    assert_eq!(config.scoring.location_bonus, 0.08);
    assert_eq!(config.scoring.measurement_bonus, 0.05);
    assert_eq!(config.analysis.effective_parallel_window_threshold(), 16);
}

#[test]
fn floor_above_ceiling_is_rejected() {
    let err = SurveyConfig::from_toml("[scoring]\nfloor = 0.9\nceiling = 0.5\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "scoring.floor", .. }));
    assert_eq!(err.error_code(), "CONFIG_INVALID");
}

#[test]
fn overlap_must_be_smaller_than_window() {
    let err = SurveyConfig::from_toml("[normalizer]\nmax_window_tokens = 8\noverlap_tokens = 8\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "normalizer.overlap_tokens", .. }));
}

#[test]
fn negative_bonus_is_rejected() {
    let err = SurveyConfig::from_toml("[scoring]\nmeasurement_bonus = -0.1\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "scoring.measurement_bonus", .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = SurveyConfig::from_toml("[scoring\nfloor = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
}

#[test]
fn error_codes_pass_through_the_top_level_error() {
    let err: SurveyError = DetectionError::EmptyInput { usable_tokens: 0 }.into();
    assert_eq!(err.error_code(), "EMPTY_INPUT");
    let err: SurveyError = FeedbackError::UnknownFinding { id: "x".into() }.into();
    assert_eq!(err.error_code(), "UNKNOWN_FINDING");
}

proptest! {
    #[test]
    fn category_names_parse_in_any_case(idx in 0usize..10, upper in proptest::collection::vec(any::<bool>(), 12)) {
        let category = DefectCategory::all()[idx];
        let mixed: String = category
            .name()
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, &u)| if u { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(DefectCategory::parse_str(&mixed), Some(category));
    }

    #[test]
    fn unknown_severity_names_do_not_parse(s in "[a-z]{1,12}") {
        let known = SeverityLevel::all().iter().any(|l| l.name() == s);
        prop_assert_eq!(SeverityLevel::parse_str(&s).is_some(), known);
    }
}
