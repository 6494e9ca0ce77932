//! Deduplication of overlapping same-category candidates into findings.
//!
//! Candidates of one category whose evidence spans intersect belong to one
//! group; grouping is transitive over chained overlaps. Each group yields a
//! single finding built from its most confident candidate.

use std::collections::BTreeSet;

use smallvec::SmallVec;
use survey_core::{DefectCategory, FindingId, FxHashMap, ReportId};
use xxhash_rust::xxh3::xxh3_64;

use super::types::{EnrichedCandidate, Finding};

/// Merges enriched candidates into ordered findings.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator;

impl Deduplicator {
    pub fn new() -> Self {
        Self
    }

    /// One finding per overlap group, in output order.
    pub fn deduplicate(&self, report_id: &ReportId, candidates: Vec<EnrichedCandidate>) -> Vec<Finding> {
        let mut by_category: FxHashMap<DefectCategory, Vec<EnrichedCandidate>> = FxHashMap::default();
        for candidate in candidates {
            by_category.entry(candidate.candidate.category).or_default().push(candidate);
        }

        let mut findings = Vec::new();
        for (_, mut group_source) in by_category {
            group_source.sort_by(|a, b| {
                a.candidate
                    .window_start
                    .cmp(&b.candidate.window_start)
                    .then(a.candidate.window_end.cmp(&b.candidate.window_end))
                    .then_with(|| a.candidate.canonical_cmp(&b.candidate))
            });
            for group in overlap_groups(group_source) {
                if let Some(finding) = merge_group(report_id, group) {
                    findings.push(finding);
                }
            }
        }

        findings.sort_by(Finding::output_cmp);
        tracing::debug!(findings = findings.len(), "deduplicated candidates");
        findings
    }
}

/// Split candidates sorted by span start into transitive overlap groups.
fn overlap_groups(sorted: Vec<EnrichedCandidate>) -> Vec<Vec<EnrichedCandidate>> {
    let mut groups: Vec<Vec<EnrichedCandidate>> = Vec::new();
    let mut group_end = 0;
    for candidate in sorted {
        let (start, end) = (candidate.candidate.window_start, candidate.candidate.window_end);
        match groups.last_mut() {
            Some(group) if start < group_end => {
                group_end = group_end.max(end);
                group.push(candidate);
            }
            _ => {
                group_end = end;
                groups.push(vec![candidate]);
            }
        }
    }
    groups
}

/// Build the finding for one group from its most confident candidate,
/// ties broken by earliest matched offset.
fn merge_group(report_id: &ReportId, group: Vec<EnrichedCandidate>) -> Option<Finding> {
    let evidence_count = group.len();
    let mut patterns: BTreeSet<String> = BTreeSet::new();
    for c in &group {
        patterns.insert(c.candidate.pattern.clone());
        patterns.extend(c.corroborating_patterns.iter().cloned());
    }

    let survivor = group.into_iter().reduce(|best, c| {
        let better = c.confidence > best.confidence
            || (c.confidence == best.confidence && c.candidate.matched_start < best.candidate.matched_start);
        if better {
            c
        } else {
            best
        }
    })?;

    patterns.remove(&survivor.candidate.pattern);
    let c = survivor.candidate;
    let id = finding_id(report_id, c.category, c.window_start, c.window_end);
    Some(Finding {
        id,
        report_id: report_id.clone(),
        category: c.category,
        severity: survivor.severity.level,
        location: survivor.location.map(|l| l.text),
        confidence: survivor.confidence,
        description: survivor.excerpt.clone(),
        excerpt: survivor.excerpt,
        start: c.window_start,
        end: c.window_end,
        matched_start: c.matched_start,
        matched_end: c.matched_end,
        matched_text: c.matched_text,
        pattern: c.pattern,
        corroborating_patterns: patterns.into_iter().collect::<SmallVec<[String; 4]>>(),
        severity_indicator: survivor.severity.indicator,
        evidence_count,
    })
}

/// `<report>/f-<xxh3>` over report id, category and excerpt span.
pub fn finding_id(report_id: &ReportId, category: DefectCategory, start: usize, end: usize) -> FindingId {
    let key = format!("{}\u{1f}{}\u{1f}{start}\u{1f}{end}", report_id.as_str(), category.name());
    FindingId::new(format!("{}/f-{:016x}", report_id, xxh3_64(key.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CandidateMatch;
    use crate::severity::{SeverityAssessment, SeveritySource};
    use survey_core::SeverityLevel;

    fn enriched(
        category: DefectCategory,
        pattern: &str,
        span: (usize, usize),
        matched_start: usize,
        confidence: f64,
    ) -> EnrichedCandidate {
        EnrichedCandidate {
            candidate: CandidateMatch {
                category,
                pattern: pattern.to_string(),
                weight: confidence,
                severity_hint: None,
                window_index: 0,
                window_start: span.0,
                window_end: span.1,
                matched_start,
                matched_end: matched_start + pattern.len(),
                matched_text: pattern.to_string(),
            },
            severity: SeverityAssessment {
                level: SeverityLevel::Medium,
                source: SeveritySource::Default,
                indicator: None,
            },
            location: None,
            confidence,
            excerpt: format!("window {}..{}", span.0, span.1),
            corroborating_patterns: Vec::new(),
        }
    }

    fn report() -> ReportId {
        ReportId::new("r-1")
    }

    #[test]
    fn overlapping_same_category_yields_one_finding() {
        let findings = Deduplicator::new().deduplicate(
            &report(),
            vec![
                enriched(DefectCategory::Moisture, "damp", (0, 40), 4, 0.55),
                enriched(DefectCategory::Moisture, "mould", (0, 40), 20, 0.70),
                enriched(DefectCategory::Moisture, "stain", (30, 80), 50, 0.60),
            ],
        );
        assert_eq!(findings.len(), 1);
        let f = &findings[0];
        assert_eq!(f.pattern, "mould");
        assert_eq!(f.confidence, 0.70);
        assert_eq!(f.evidence_count, 3);
        assert_eq!(f.corroborating_patterns.as_slice(), ["damp", "stain"]);
    }

    #[test]
    fn different_categories_are_not_merged() {
        let findings = Deduplicator::new().deduplicate(
            &report(),
            vec![
                enriched(DefectCategory::Moisture, "leak", (0, 40), 4, 0.6),
                enriched(DefectCategory::Roofing, "leak", (0, 40), 4, 0.5),
            ],
        );
        assert_eq!(findings.len(), 2);
        assert_ne!(findings[0].id, findings[1].id);
    }

    #[test]
    fn disjoint_spans_stay_separate() {
        let findings = Deduplicator::new().deduplicate(
            &report(),
            vec![
                enriched(DefectCategory::Pest, "rodent", (0, 40), 4, 0.6),
                enriched(DefectCategory::Pest, "rodent", (40, 90), 44, 0.6),
            ],
        );
        assert_eq!(findings.len(), 2);
        assert!(findings[0].start < findings[1].start);
    }

    #[test]
    fn confidence_ties_keep_earliest_match() {
        let findings = Deduplicator::new().deduplicate(
            &report(),
            vec![
                enriched(DefectCategory::Structural, "wall", (0, 40), 30, 0.6),
                enriched(DefectCategory::Structural, "crack", (0, 40), 10, 0.6),
            ],
        );
        assert_eq!(findings[0].pattern, "crack");
    }

    #[test]
    fn ids_are_scoped_and_stable() {
        let a = finding_id(&report(), DefectCategory::Hvac, 0, 40);
        let b = finding_id(&report(), DefectCategory::Hvac, 0, 40);
        let other = finding_id(&ReportId::new("r-2"), DefectCategory::Hvac, 0, 40);
        assert_eq!(a, b);
        assert_ne!(a, other);
        assert!(a.as_str().starts_with("r-1/f-"));
    }
}
