//! Full-document analysis benchmark (short report, 200 and 2K sentences).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use survey_analysis::confidence::{ConfidenceScorer, ScoreInput};
use survey_analysis::engine::DefectEngine;

const SENTENCES: &[&str] = &[
    "Severe cracking observed in the foundation wall, urgent repair needed.",
    "Significant damp patches on the bedroom 2 ceiling with black mould around the window.",
    "Exposed wiring found in the garage near the consumer unit.",
    "Minor hairline crack of 2mm above the lounge door.",
    "Slipped tiles and blocked gutters on the rear roof slope.",
    "The boiler is serviced annually and the radiators work well.",
    "Evidence of woodworm in the loft joists.",
    "Dripping tap and slow drainage in the bathroom basin.",
];

fn make_document(sentences: usize) -> String {
    SENTENCES.iter().cycle().take(sentences).copied().collect::<Vec<_>>().join(" ")
}

fn bench_analysis(c: &mut Criterion) {
    let engine = DefectEngine::with_defaults().expect("default engine");
    let short = make_document(SENTENCES.len());
    let medium = make_document(200);
    let long = make_document(2_000);

    c.bench_function("analyze_short_report", |b| {
        b.iter(|| black_box(engine.analyze(black_box(&short), None)))
    });

    c.bench_function("analyze_200_sentences", |b| {
        b.iter(|| black_box(engine.analyze(black_box(&medium), None)))
    });

    c.bench_function("analyze_2k_sentences", |b| {
        b.iter(|| black_box(engine.analyze(black_box(&long), None)))
    });
}

fn bench_scoring(c: &mut Criterion) {
    let scorer = ConfidenceScorer::default();
    c.bench_function("confidence_10k_candidates", |b| {
        b.iter(|| {
            let total: f64 = (0..10_000)
                .map(|i| {
                    scorer.score(&ScoreInput {
                        weight: 0.4 + (i % 4) as f64 * 0.1,
                        corroboration: i % 6,
                        has_location: i % 2 == 0,
                        severity_from_indicator: i % 3 == 0,
                        has_measurement: i % 5 == 0,
                    })
                })
                .sum();
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_analysis, bench_scoring);
criterion_main!(benches);
