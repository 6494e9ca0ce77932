//! Repeated runs and rule-order permutations must not change results.

use std::sync::Arc;

use survey_analysis::engine::DefectEngine;
use survey_analysis::rules::{defaults::default_rules, RuleSet};
use survey_core::SurveyConfig;

const REPORT: &str = "\
    Severe cracking observed in the foundation wall, urgent repair needed. \
    Significant damp patches on the bedroom 2 ceiling with black mould around the window. \
    Exposed wiring found in the garage near the consumer unit. \
    Minor hairline crack of 2mm above the lounge door. \
    Slipped slates and blocked gutters on the rear roof slope, water penetration likely. \
    Evidence of woodworm in the loft joists and rodent activity in the cellar.";

fn engine_with(rules: Vec<survey_analysis::PatternRule>) -> DefectEngine {
    DefectEngine::new(Arc::new(RuleSet::new(rules).unwrap()), &SurveyConfig::default()).unwrap()
}

#[test]
fn repeated_runs_are_identical() {
    let engine = DefectEngine::with_defaults().unwrap();
    let first = engine.analyze(REPORT, None).unwrap();
    let second = engine.analyze(REPORT, None).unwrap();
    assert_eq!(first, second);
    assert!(first.findings.len() >= 6);
}

#[test]
fn reversed_rule_order_gives_identical_candidates_and_findings() {
    let forward = engine_with(default_rules());
    let mut reversed_rules = default_rules();
    reversed_rules.reverse();
    let reversed = engine_with(reversed_rules);

    assert_eq!(forward.candidates(REPORT).unwrap(), reversed.candidates(REPORT).unwrap());
    assert_eq!(forward.analyze(REPORT, None).unwrap(), reversed.analyze(REPORT, None).unwrap());
}

#[test]
fn finding_ids_are_unique_within_a_report() {
    let report = DefectEngine::with_defaults().unwrap().analyze(REPORT, None).unwrap();
    let mut ids: Vec<&str> = report.findings.iter().map(|f| f.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), report.findings.len());
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(DefectEngine::with_defaults().unwrap());
    let expected = engine.analyze(REPORT, None).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                s.spawn(move || engine.analyze(REPORT, None).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
