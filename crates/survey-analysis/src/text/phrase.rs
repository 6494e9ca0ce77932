//! Word-boundary aware, case-insensitive multi-phrase matching.
//!
//! One Aho–Corasick automaton per vocabulary. Hits must start on a word
//! boundary and end on one, optionally after a short inflection suffix so
//! that `crack` also covers `cracks`, `cracked` and `cracking`. A doubled
//! final consonant is accepted before `-ed`/`-ing` (`sag` → `sagging`).

use aho_corasick::{AhoCorasick, BuildError, MatchKind};

/// Suffixes accepted between a phrase and the following word boundary.
const INFLECTIONS: &[&str] = &[
    "s", "es", "d", "ed", "ing", "ings", "ly", "ness", "age", "ages",
];

/// Suffixes accepted after a repeat of the phrase's final consonant.
const DOUBLED_INFLECTIONS: &[&str] = &["ed", "ing", "ings"];

/// One phrase occurrence. Offsets are absolute byte offsets into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseHit {
    /// Index of the phrase in the vocabulary the matcher was built from.
    pub phrase: usize,
    pub start: usize,
    /// End of the hit, including any inflection suffix.
    pub end: usize,
}

/// Compiled phrase vocabulary.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    automaton: AhoCorasick,
    len: usize,
}

impl PhraseMatcher {
    /// Compile a vocabulary. Phrases are whitespace-normalized before compiling
    /// so multi-word phrases line up with normalized document text.
    pub fn new<I, S>(phrases: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized: Vec<String> = phrases
            .into_iter()
            .map(|p| normalize_phrase(p.as_ref()))
            .collect();
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&normalized)?;
        Ok(Self {
            automaton,
            len: normalized.len(),
        })
    }

    /// Number of phrases in the vocabulary.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All boundary-respecting hits in `haystack`, overlapping hits included.
    /// `base` is the absolute offset of `haystack` within the document.
    /// Hits are returned sorted by (start, end, phrase).
    pub fn find_all(&self, haystack: &str, base: usize) -> Vec<PhraseHit> {
        let mut hits: Vec<PhraseHit> = self
            .automaton
            .find_overlapping_iter(haystack)
            .filter_map(|m| {
                if !starts_on_boundary(haystack, m.start()) {
                    return None;
                }
                let end = boundary_end(haystack, m.end())?;
                Some(PhraseHit {
                    phrase: m.pattern().as_usize(),
                    start: base + m.start(),
                    end: base + end,
                })
            })
            .collect();
        hits.sort_by_key(|h| (h.start, h.end, h.phrase));
        hits
    }

    /// Leftmost-longest, non-overlapping subset of [`find_all`](Self::find_all).
    pub fn find_longest(&self, haystack: &str, base: usize) -> Vec<PhraseHit> {
        let mut hits = self.find_all(haystack, base);
        hits.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)).then(a.phrase.cmp(&b.phrase)));
        let mut kept: Vec<PhraseHit> = Vec::with_capacity(hits.len());
        for hit in hits {
            match kept.last() {
                Some(last) if hit.start < last.end => {}
                _ => kept.push(hit),
            }
        }
        kept
    }
}

/// Collapse internal whitespace and trim.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

fn starts_on_boundary(haystack: &str, start: usize) -> bool {
    haystack[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c))
}

/// Resolve where a hit ending at `end` really ends, or `None` if it stops in
/// the middle of a word that is not an accepted inflection.
fn boundary_end(haystack: &str, end: usize) -> Option<usize> {
    let rest = &haystack[end..];
    match rest.chars().next() {
        None => return Some(end),
        Some(c) if !is_word_char(c) => return Some(end),
        _ => {}
    }

    let suffix_len = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_alphabetic())
        .map_or(rest.len(), |(i, _)| i);
    let suffix = &rest[..suffix_len];
    let after = rest[suffix_len..].chars().next();
    if after.is_some_and(is_word_char) {
        return None;
    }
    let accepted = INFLECTIONS.iter().any(|inf| suffix.eq_ignore_ascii_case(inf))
        || doubles_final_consonant(&haystack[..end], suffix);
    accepted.then_some(end + suffix_len)
}

/// `suffix` repeats the last letter of `phrase` and then carries an
/// `-ed`/`-ing` ending.
fn doubles_final_consonant(phrase: &str, suffix: &str) -> bool {
    let Some(last) = phrase.chars().next_back() else {
        return false;
    };
    if !last.is_ascii_alphabetic() || "aeiouAEIOU".contains(last) {
        return false;
    }
    let mut chars = suffix.chars();
    chars.next().is_some_and(|c| c.eq_ignore_ascii_case(&last))
        && DOUBLED_INFLECTIONS
            .iter()
            .any(|inf| chars.as_str().eq_ignore_ascii_case(inf))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(phrases: &[&str]) -> PhraseMatcher {
        PhraseMatcher::new(phrases.iter().copied()).unwrap()
    }

    #[test]
    fn matches_case_insensitively_on_word_boundaries() {
        let m = matcher(&["crack"]);
        let hits = m.find_all("Crack here, no Crackle there", 0);
        assert_eq!(hits.len(), 1);
        assert_eq!((hits[0].start, hits[0].end), (0, 5));
    }

    #[test]
    fn accepts_inflection_suffixes() {
        let m = matcher(&["crack", "leak"]);
        let text = "cracking walls and leaks";
        let hits = m.find_all(text, 0);
        assert_eq!(hits.len(), 2);
        assert_eq!(&text[hits[0].start..hits[0].end], "cracking");
        assert_eq!(&text[hits[1].start..hits[1].end], "leaks");
    }

    #[test]
    fn accepts_doubled_consonant_and_age_suffixes() {
        let m = matcher(&["sag", "leak"]);
        let text = "sagging joists, a sagged beam and some leakage";
        let found: Vec<&str> = m
            .find_all(text, 0)
            .iter()
            .map(|h| &text[h.start..h.end])
            .collect();
        assert_eq!(found, vec!["sagging", "sagged", "leakage"]);
    }

    #[test]
    fn doubled_suffix_needs_the_same_consonant() {
        let m = matcher(&["sag"]);
        assert!(m.find_all("sage and sagling and sagge", 0).is_empty());
    }

    #[test]
    fn rejects_embedded_matches() {
        let m = matcher(&["tap"]);
        assert!(m.find_all("the tapestry and kitap", 0).is_empty());
    }

    #[test]
    fn base_offset_is_applied() {
        let m = matcher(&["roof"]);
        let hits = m.find_all("a roof", 100);
        assert_eq!(hits[0].start, 102);
    }

    #[test]
    fn longest_prefers_multi_word_phrases() {
        let m = matcher(&["floor", "first floor"]);
        let hits = m.find_longest("on the first floor landing", 0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].phrase, 1);
    }

    #[test]
    fn multi_word_phrases_are_whitespace_normalized() {
        let m = matcher(&["water   damage"]);
        assert_eq!(m.find_all("visible water damage", 0).len(), 1);
    }
}
