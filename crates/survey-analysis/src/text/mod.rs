//! Text normalization, windowing, and phrase matching.

pub mod normalizer;
pub mod phrase;
pub mod window;

pub use normalizer::Normalizer;
pub use phrase::{PhraseHit, PhraseMatcher};
pub use window::{NormalizedDocument, TextWindow, Token};
