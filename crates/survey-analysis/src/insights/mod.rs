//! Report insights: priority findings and maintenance recommendations.

pub mod priority;
pub mod recommendations;

pub use priority::priority_findings;
pub use recommendations::{recommendations, Recommendation};
