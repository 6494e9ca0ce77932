//! Normalized document model: tokens and evidence windows.

use serde::{Deserialize, Serialize};

/// A maximal run of non-whitespace in the normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    /// Contains at least one alphanumeric character.
    pub usable: bool,
}

/// A contiguous span of normalized text scanned for pattern matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextWindow {
    pub index: usize,
    /// Byte offsets into the normalized text.
    pub start: usize,
    pub end: usize,
    /// Token range `[token_start, token_end)`.
    pub token_start: usize,
    pub token_end: usize,
    /// Token range of the sentence this window was cut from.
    pub sentence_token_start: usize,
    pub sentence_token_end: usize,
    /// Original-case text of the window.
    pub text: String,
}

impl TextWindow {
    /// Whether two windows' byte ranges intersect.
    pub fn overlaps(&self, other: &TextWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Whitespace-collapsed text plus its tokens and evidence windows.
#[derive(Debug, Clone)]
pub struct NormalizedDocument {
    pub(crate) text: String,
    pub(crate) tokens: Vec<Token>,
    pub(crate) windows: Vec<TextWindow>,
}

impl NormalizedDocument {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn windows(&self) -> &[TextWindow] {
        &self.windows
    }

    pub fn usable_token_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.usable).count()
    }

    /// Index of the token containing `offset`, or of the first token starting
    /// after it. Clamped to the last token.
    pub fn token_index_at(&self, offset: usize) -> usize {
        let idx = self.tokens.partition_point(|t| t.end <= offset);
        idx.min(self.tokens.len().saturating_sub(1))
    }

    /// Token range covering the byte range `[start, end)`.
    pub fn token_range(&self, start: usize, end: usize) -> (usize, usize) {
        let first = self.token_index_at(start);
        let last = self.token_index_at(end.saturating_sub(1).max(start));
        (first, last + 1)
    }

    /// Byte range covered by the token range `[token_start, token_end)`.
    /// Empty ranges map to an empty span at the start of `token_start`.
    pub fn byte_range(&self, token_start: usize, token_end: usize) -> (usize, usize) {
        if token_start >= token_end || token_start >= self.tokens.len() {
            let at = self.tokens.get(token_start).map_or(self.text.len(), |t| t.start);
            return (at, at);
        }
        let last = token_end.min(self.tokens.len()) - 1;
        (self.tokens[token_start].start, self.tokens[last].end)
    }

    /// Text covered by the token range, original casing.
    pub fn slice_tokens(&self, token_start: usize, token_end: usize) -> (&str, usize) {
        let (start, end) = self.byte_range(token_start, token_end);
        (&self.text[start..end], start)
    }
}
