//! End-to-end detection tests over realistic survey sentences.

use survey_analysis::engine::DefectEngine;
use survey_analysis::insights::Recommendation;
use survey_core::{DefectCategory, DetectionError, SeverityLevel};

// ─── Helpers ───────────────────────────────────────────────────────────────

fn engine() -> DefectEngine {
    DefectEngine::with_defaults().unwrap()
}

// ─── Detection ─────────────────────────────────────────────────────────────

#[test]
fn foundation_crack_is_structural_critical_and_located() {
    let engine = engine();
    let report = engine
        .analyze(
            "Severe cracking observed in the foundation wall, urgent repair needed.",
            None,
        )
        .unwrap();
    assert!(!report.findings.is_empty());
    let f = &report.findings[0];
    assert_eq!(f.category, DefectCategory::Structural);
    assert_eq!(f.severity, SeverityLevel::Critical);
    assert!(f.location.as_deref().is_some_and(|l| l.contains("foundation")));
    assert!(f.confidence > engine.scorer().midpoint());
    assert!(f.confidence <= engine.scorer().ceiling());
    assert_eq!(f.excerpt, "Severe cracking observed in the foundation wall, urgent repair needed.");
}

#[test]
fn defect_without_location_vocabulary_has_no_location() {
    let report = engine()
        .analyze("Significant rodent activity was observed recently.", None)
        .unwrap();
    assert_eq!(report.findings.len(), 1);
    let f = &report.findings[0];
    assert_eq!(f.category, DefectCategory::Pest);
    assert_eq!(f.severity, SeverityLevel::High);
    assert_eq!(f.location, None);
    assert_eq!(f.pattern, "rodent activity");
    assert_eq!(f.corroborating_patterns.as_slice(), ["rodent"]);
    assert_eq!(report.priority_findings.len(), 1);
}

#[test]
fn clean_text_yields_zero_findings_and_zero_filled_summary() {
    let report = engine()
        .analyze("The property presents well and the kitchen is tidy.", None)
        .unwrap();
    assert!(report.is_empty());
    assert_eq!(report.summary.total, 0);
    assert_eq!(report.summary.by_category.len(), 10);
    assert_eq!(report.summary.by_severity.len(), 4);
    assert!(report.summary.by_category.values().all(|&n| n == 0));
    assert!(report.priority_findings.is_empty());
    assert!(report.recommendations.is_empty());
}

#[test]
fn empty_and_unanalyzable_input_is_rejected() {
    let engine = engine();
    for text in ["", "   \n\t ", "-- ... !!!"] {
        let err = engine.analyze(text, None).unwrap_err();
        assert!(matches!(err, DetectionError::EmptyInput { .. }), "{text:?}");
    }
}

#[test]
fn text_with_no_analyzable_window_is_an_empty_report() {
    let report = engine().analyze("Ok.", None).unwrap();
    assert_eq!(report.window_count, 0);
    assert!(report.is_empty());
    assert_eq!(report.summary.total, 0);
    assert!(report.recommendations.is_empty());
}

#[test]
fn two_word_defect_sentences_are_detected() {
    let report = engine()
        .analyze(
            "The kitchen units are in good order throughout. Asbestos present. Woodworm noted.",
            None,
        )
        .unwrap();
    assert_eq!(report.window_count, 3);
    let categories: Vec<DefectCategory> = report.findings.iter().map(|f| f.category).collect();
    assert!(categories.contains(&DefectCategory::Safety), "{categories:?}");
    assert!(categories.contains(&DefectCategory::Pest), "{categories:?}");
    let asbestos = report
        .findings
        .iter()
        .find(|f| f.category == DefectCategory::Safety)
        .unwrap();
    assert_eq!(asbestos.excerpt, "Asbestos present.");
    assert_eq!(asbestos.severity, SeverityLevel::High);
}

#[test]
fn short_standalone_defect_notes_are_detected() {
    let engine = engine();
    for (text, category) in [
        ("Subsidence evident.", DefectCategory::Structural),
        ("Roof leaks.", DefectCategory::Roofing),
        ("Rising damp.", DefectCategory::Moisture),
    ] {
        let report = engine.analyze(text, None).unwrap();
        assert!(
            report.findings.iter().any(|f| f.category == category),
            "{text:?}: {:?}",
            report.findings
        );
    }
}

#[test]
fn inflected_forms_fire_their_rules() {
    let engine = engine();
    for (text, category, pattern) in [
        ("The bedroom ceiling is visibly sagging badly.", DefectCategory::Structural, "sag"),
        ("The lintel has sagged over the opening.", DefectCategory::Structural, "sag"),
        ("Signs of leakage beneath the bath panel.", DefectCategory::Moisture, "leak"),
    ] {
        let report = engine.analyze(text, None).unwrap();
        let finding = report
            .findings
            .iter()
            .find(|f| f.category == category)
            .unwrap_or_else(|| panic!("{text:?}: {:?}", report.findings));
        assert!(
            finding.pattern == pattern
                || finding.corroborating_patterns.iter().any(|p| p == pattern),
            "{text:?}: {finding:?}"
        );
    }
}

#[test]
fn same_category_mentions_in_one_sentence_merge() {
    let report = engine()
        .analyze("Damp and mould and condensation noted on the ceiling.", None)
        .unwrap();
    assert_eq!(report.findings.len(), 1);
    let f = &report.findings[0];
    assert_eq!(f.category, DefectCategory::Moisture);
    assert_eq!(f.evidence_count, 3);
    assert_eq!(f.corroborating_patterns.len(), 2);
    assert_eq!(f.location.as_deref(), Some("ceiling"));
}

#[test]
fn mention_in_chunk_overlap_yields_one_finding() {
    let mut words = vec!["word"; 60];
    words[44] = "damp";
    let report = engine().analyze(&words.join(" "), None).unwrap();
    assert_eq!(report.window_count, 2);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].evidence_count, 2);
}

// ─── Ordering and insights ─────────────────────────────────────────────────

#[test]
fn findings_are_ordered_by_severity_then_confidence() {
    let report = engine()
        .analyze(
            "Exposed wiring in the garage is a fire hazard. Minor paint scuffs on the hallway wall.",
            None,
        )
        .unwrap();
    let categories: Vec<DefectCategory> = report.findings.iter().map(|f| f.category).collect();
    assert_eq!(
        categories,
        vec![
            DefectCategory::Safety,
            DefectCategory::Electrical,
            DefectCategory::Cosmetic,
            DefectCategory::Structural,
        ]
    );
    let severities: Vec<SeverityLevel> = report.findings.iter().map(|f| f.severity).collect();
    assert_eq!(
        severities,
        vec![SeverityLevel::Critical, SeverityLevel::High, SeverityLevel::Low, SeverityLevel::Low]
    );
    assert_eq!(report.findings[2].pattern, "paint");
    assert_eq!(report.findings[2].location.as_deref(), Some("hallway wall"));

    assert_eq!(report.summary.total, 4);
    assert_eq!(report.summary.severity_count(SeverityLevel::Low), 2);
    assert_eq!(report.summary.severity_count(SeverityLevel::Medium), 0);
    assert_eq!(report.summary.category_count(DefectCategory::Safety), 1);

    let priority: Vec<DefectCategory> = report.priority_findings.iter().map(|f| f.category).collect();
    assert_eq!(priority, vec![DefectCategory::Safety, DefectCategory::Electrical]);

    assert_eq!(
        report.recommendations,
        vec![
            Recommendation::AddressCriticalImmediately,
            Recommendation::ScheduleProfessionalInspection,
            Recommendation::ConsultStructuralEngineer,
            Recommendation::ElectricianInspection,
            Recommendation::PrioritizeSafetyHazards,
            Recommendation::DocumentRepairs,
            Recommendation::BudgetMaintenance,
        ]
    );
}

#[test]
fn report_serializes_to_json() {
    let report = engine()
        .analyze("Slipped slates and a blocked gutter on the rear roof.", None)
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["findings"][0]["category"], "roofing");
    assert_eq!(json["summary"]["by_category"]["hvac"], 0);
    assert_eq!(json["summary"]["by_severity"]["critical"], 0);
}
