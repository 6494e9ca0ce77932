//! Detection engine and report types.

pub mod pipeline;
pub mod types;

pub use pipeline::{derive_report_id, DefectEngine};
pub use types::DefectReport;
