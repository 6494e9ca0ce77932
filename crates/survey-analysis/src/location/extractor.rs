//! Nearest-location resolution around a matched defect phrase.

use serde::{Deserialize, Serialize};
use survey_core::config::LocationConfig;
use survey_core::errors::DetectionError;

use super::vocabulary::{terms, TermKind};
use crate::rules::CandidateMatch;
use crate::text::{NormalizedDocument, PhraseMatcher, TextWindow};

/// A location mention attached to a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Lowercased location phrase, e.g. `north wall` or `bedroom 2`.
    pub text: String,
    /// Byte span of the phrase in the normalized text.
    pub start: usize,
    pub end: usize,
    /// Token distance to the matched defect phrase; 0 when adjacent or overlapping.
    pub distance: usize,
}

/// Merged run of adjacent vocabulary hits.
#[derive(Debug, Clone, Copy)]
struct Mention {
    start: usize,
    end: usize,
    has_element: bool,
}

/// Resolves the nearest room/building-element mention for a candidate.
#[derive(Debug, Clone)]
pub struct LocationExtractor {
    matcher: PhraseMatcher,
    kinds: Vec<TermKind>,
    neighborhood_tokens: usize,
}

impl LocationExtractor {
    pub fn new(config: &LocationConfig) -> Result<Self, DetectionError> {
        Self::with_vocabulary(terms().map(|(t, k)| (t.to_string(), k)), config)
    }

    pub fn with_vocabulary<I>(vocabulary: I, config: &LocationConfig) -> Result<Self, DetectionError>
    where
        I: IntoIterator<Item = (String, TermKind)>,
    {
        let (phrases, kinds): (Vec<String>, Vec<TermKind>) = vocabulary.into_iter().unzip();
        let matcher = PhraseMatcher::new(&phrases).map_err(|e| DetectionError::InvalidRuleSet {
            reason: format!("failed to compile location vocabulary: {e}"),
        })?;
        Ok(Self {
            matcher,
            kinds,
            neighborhood_tokens: config.effective_neighborhood_tokens(),
        })
    }

    /// Nearest location by token distance, ties broken by earliest
    /// occurrence. `None` when no element is in range.
    pub fn locate(
        &self,
        doc: &NormalizedDocument,
        window: &TextWindow,
        candidate: &CandidateMatch,
    ) -> Option<ResolvedLocation> {
        let (match_first, match_end) = doc.token_range(candidate.matched_start, candidate.matched_end);
        let from = match_first
            .saturating_sub(self.neighborhood_tokens)
            .max(window.sentence_token_start);
        let to = (match_end + self.neighborhood_tokens).min(window.sentence_token_end);
        let (region, base) = doc.slice_tokens(from, to);

        let text = doc.text();
        let mut mentions: Vec<Mention> = Vec::new();
        for hit in self.matcher.find_longest(region, base) {
            let is_element = self.kinds.get(hit.phrase) == Some(&TermKind::Element);
            match mentions.last_mut() {
                Some(last) if &text[last.end..hit.start] == " " => {
                    last.end = hit.end;
                    last.has_element |= is_element;
                }
                _ => mentions.push(Mention {
                    start: hit.start,
                    end: hit.end,
                    has_element: is_element,
                }),
            }
        }

        mentions
            .into_iter()
            .filter(|m| m.has_element)
            .map(|m| {
                let end = extend_with_number(doc, m.end, to);
                let (first, last_end) = doc.token_range(m.start, end);
                let distance = if last_end <= match_first {
                    match_first - last_end
                } else if first >= match_end {
                    first - match_end
                } else {
                    0
                };
                ResolvedLocation {
                    text: text[m.start..end].to_ascii_lowercase(),
                    start: m.start,
                    end,
                    distance,
                }
            })
            .min_by_key(|loc| (loc.distance, loc.start))
    }
}

/// Extend a mention ending at `end` over a directly following number token
/// (`bedroom 2`, `unit 4b`), without leaving the scan region.
fn extend_with_number(doc: &NormalizedDocument, end: usize, region_token_end: usize) -> usize {
    let text = doc.text();
    if !text[end..].starts_with(' ') {
        return end;
    }
    let next = doc.token_index_at(end + 1);
    if next >= region_token_end {
        return end;
    }
    let token = doc.tokens()[next];
    let word = text[token.start..token.end].trim_end_matches(|c: char| !c.is_alphanumeric());
    let numbered = word.chars().next().is_some_and(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_alphanumeric());
    if numbered {
        token.start + word.len()
    } else {
        end
    }
}
