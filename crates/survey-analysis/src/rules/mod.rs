//! Category rule set: weighted phrases per defect category.

pub mod defaults;
pub mod rule_set;
pub mod types;

pub use rule_set::RuleSet;
pub use types::{CandidateMatch, PatternRule};
