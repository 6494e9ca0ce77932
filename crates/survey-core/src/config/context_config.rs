//! Neighborhood sizes for the severity assessor and location extractor.

use serde::{Deserialize, Serialize};

/// Severity assessor configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SeverityConfig {
    /// Tokens scanned beyond each window edge, clamped to the enclosing
    /// sentence. Default: 8.
    pub neighborhood_tokens: Option<usize>,
}

impl SeverityConfig {
    pub fn effective_neighborhood_tokens(&self) -> usize {
        self.neighborhood_tokens.unwrap_or(8)
    }
}

/// Location extractor configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LocationConfig {
    /// Tokens scanned before and after the matched phrase, clamped to the
    /// enclosing sentence. Default: 12.
    pub neighborhood_tokens: Option<usize>,
}

impl LocationConfig {
    pub fn effective_neighborhood_tokens(&self) -> usize {
        self.neighborhood_tokens.unwrap_or(12)
    }
}
