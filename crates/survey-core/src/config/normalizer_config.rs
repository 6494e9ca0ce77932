//! Text normalizer configuration.

use serde::{Deserialize, Serialize};

/// Configuration for text cleanup and window segmentation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Windows with fewer usable tokens are discarded. Default: 2.
    pub min_window_tokens: Option<usize>,
    /// Sentences longer than this are split into overlapping chunks. Default: 48.
    pub max_window_tokens: Option<usize>,
    /// Token overlap between consecutive chunks of a long sentence. Default: 8.
    pub overlap_tokens: Option<usize>,
}

impl NormalizerConfig {
    pub fn effective_min_window_tokens(&self) -> usize {
        self.min_window_tokens.unwrap_or(2)
    }

    pub fn effective_max_window_tokens(&self) -> usize {
        self.max_window_tokens.unwrap_or(48)
    }

    pub fn effective_overlap_tokens(&self) -> usize {
        self.overlap_tokens.unwrap_or(8)
    }
}
