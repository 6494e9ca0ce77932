//! Candidate deduplication and report distributions.

pub mod dedup;
pub mod summary;
pub mod types;

pub use dedup::{finding_id, Deduplicator};
pub use summary::summarize;
pub use types::{DistributionSummary, EnrichedCandidate, Finding};
