//! Room and building-element vocabulary.

use serde::{Deserialize, Serialize};

/// Whether a term names a place on its own or only qualifies one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKind {
    /// A room, storey, or building element (`kitchen`, `first floor`, `wall`).
    Element,
    /// A qualifier (`north`, `rear`); only part of a location when adjacent to an element.
    Modifier,
}

pub const ELEMENTS: &[&str] = &[
    // Rooms
    "kitchen", "bathroom", "bedroom", "master bedroom", "living room", "dining room",
    "lounge", "hallway", "hall", "landing", "utility room", "en suite", "en-suite",
    "study", "conservatory", "basement", "cellar", "attic", "loft", "garage",
    "porch", "room", "unit", "flat", "apartment",
    // Storeys
    "ground floor", "first floor", "second floor", "third floor", "top floor",
    "upper floor", "lower floor",
    // Elements
    "roof", "roof space", "ceiling", "floor", "wall", "party wall", "gable",
    "foundation", "chimney", "chimney stack", "stairs", "staircase", "stairwell",
    "window", "door", "doorway", "bay window", "skirting", "joist", "rafter",
    "exterior", "interior", "elevation", "facade", "balcony", "patio", "driveway",
    "garden", "crawl space", "crawlspace", "eaves", "soffit",
];

pub const MODIFIERS: &[&str] = &[
    "north", "south", "east", "west", "north-east", "north-west", "south-east",
    "south-west", "northern", "southern", "eastern", "western", "front", "rear",
    "back", "side", "left", "right", "upper", "lower", "internal", "external",
    "main",
];

/// Every term with its kind, elements first.
pub fn terms() -> impl Iterator<Item = (&'static str, TermKind)> {
    ELEMENTS
        .iter()
        .map(|&t| (t, TermKind::Element))
        .chain(MODIFIERS.iter().map(|&t| (t, TermKind::Modifier)))
}
