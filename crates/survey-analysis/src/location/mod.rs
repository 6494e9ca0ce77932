//! Location extraction.

pub mod extractor;
pub mod vocabulary;

pub use extractor::{LocationExtractor, ResolvedLocation};
pub use vocabulary::TermKind;
