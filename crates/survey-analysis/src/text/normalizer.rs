//! Text cleanup and segmentation into evidence windows.
//!
//! Whitespace runs collapse to a single space and the text keeps its casing.
//! Sentences end at a token whose last significant character is `.`, `!` or
//! `?`, so decimals such as `3.5mm` never split. Each sentence becomes one
//! window; long sentences are cut into fixed-size chunks that overlap, so a
//! defect mention is always whole in at least one chunk.

use survey_core::config::NormalizerConfig;
use survey_core::errors::DetectionError;

use super::window::{NormalizedDocument, TextWindow, Token};

/// Closing characters allowed after a sentence terminator (`end." next`).
const TRAILING_CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201d}', '\u{2019}'];

/// Cleans raw extracted text and segments it into windows.
#[derive(Debug, Clone)]
pub struct Normalizer {
    min_window_tokens: usize,
    max_window_tokens: usize,
    overlap_tokens: usize,
}

impl Normalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        let max_window_tokens = config.effective_max_window_tokens().max(1);
        Self {
            min_window_tokens: config.effective_min_window_tokens(),
            max_window_tokens,
            overlap_tokens: config.effective_overlap_tokens().min(max_window_tokens - 1),
        }
    }

    /// Normalize `raw` and segment it.
    ///
    /// Fails with [`DetectionError::EmptyInput`] only when the text has zero
    /// usable tokens. Text whose sentences are all below the minimum length
    /// yields a document with no windows.
    pub fn normalize(&self, raw: &str) -> Result<NormalizedDocument, DetectionError> {
        let (text, tokens) = collapse(raw);
        let usable_tokens = tokens.iter().filter(|t| t.usable).count();
        if usable_tokens == 0 {
            return Err(DetectionError::EmptyInput { usable_tokens });
        }

        let mut doc = NormalizedDocument {
            text,
            tokens,
            windows: Vec::new(),
        };
        doc.windows = self.segment(&doc);

        tracing::debug!(
            tokens = doc.tokens.len(),
            usable_tokens,
            windows = doc.windows.len(),
            "normalized document"
        );
        Ok(doc)
    }

    fn segment(&self, doc: &NormalizedDocument) -> Vec<TextWindow> {
        let mut windows = Vec::new();
        for (sent_start, sent_end) in sentences(doc) {
            let mut chunk_start = sent_start;
            loop {
                let chunk_end = (chunk_start + self.max_window_tokens).min(sent_end);
                let usable = doc.tokens[chunk_start..chunk_end]
                    .iter()
                    .filter(|t| t.usable)
                    .count();
                if usable >= self.min_window_tokens.max(1) {
                    let (start, end) = doc.byte_range(chunk_start, chunk_end);
                    windows.push(TextWindow {
                        index: windows.len(),
                        start,
                        end,
                        token_start: chunk_start,
                        token_end: chunk_end,
                        sentence_token_start: sent_start,
                        sentence_token_end: sent_end,
                        text: doc.text[start..end].to_string(),
                    });
                }
                if chunk_end >= sent_end {
                    break;
                }
                chunk_start = chunk_end - self.overlap_tokens;
            }
        }
        windows
    }
}

/// Collapse whitespace and record token spans in the collapsed text.
fn collapse(raw: &str) -> (String, Vec<Token>) {
    let mut text = String::with_capacity(raw.len());
    let mut tokens = Vec::new();
    for piece in raw.split_whitespace() {
        if !text.is_empty() {
            text.push(' ');
        }
        let start = text.len();
        text.push_str(piece);
        tokens.push(Token {
            start,
            end: text.len(),
            usable: piece.chars().any(char::is_alphanumeric),
        });
    }
    (text, tokens)
}

/// Sentence token ranges `[start, end)`.
fn sentences(doc: &NormalizedDocument) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, token) in doc.tokens.iter().enumerate() {
        let word = doc.text[token.start..token.end].trim_end_matches(TRAILING_CLOSERS);
        if word.ends_with(['.', '!', '?']) {
            out.push((start, i + 1));
            start = i + 1;
        }
    }
    if start < doc.tokens.len() {
        out.push((start, doc.tokens.len()));
    }
    out
}
