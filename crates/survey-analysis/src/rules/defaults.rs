//! Built-in rule table for building-survey text.
//!
//! Weights: multi-word technical phrases 0.65–0.70, specific single
//! keywords 0.55–0.60, generic words that also describe sound elements 0.40.

use survey_core::DefectCategory::{self, *};
use survey_core::SeverityLevel::{self, Critical, High};

use super::types::PatternRule;

const PHRASE: f64 = 0.70;
const TECHNICAL: f64 = 0.65;
const SPECIFIC: f64 = 0.60;
const KEYWORD: f64 = 0.55;
const GENERIC: f64 = 0.40;

/// (category, phrase, weight, severity hint)
type RuleRow = (DefectCategory, &'static str, f64, Option<SeverityLevel>);

const TABLE: &[RuleRow] = &[
    // Structural
    (Structural, "crack", SPECIFIC, None),
    (Structural, "fracture", SPECIFIC, None),
    (Structural, "settlement", SPECIFIC, None),
    (Structural, "subsidence", TECHNICAL, Some(High)),
    (Structural, "structural damage", PHRASE, None),
    (Structural, "structural movement", PHRASE, None),
    (Structural, "structural failure", PHRASE, Some(Critical)),
    (Structural, "foundation crack", PHRASE, None),
    (Structural, "load bearing", TECHNICAL, None),
    (Structural, "stress fracture", PHRASE, None),
    (Structural, "bowing", KEYWORD, None),
    (Structural, "sag", KEYWORD, None),
    (Structural, "foundation", GENERIC, None),
    (Structural, "beam", GENERIC, None),
    (Structural, "column", GENERIC, None),
    (Structural, "lintel", GENERIC, None),
    (Structural, "wall", GENERIC, None),
    // Moisture
    (Moisture, "damp", SPECIFIC, None),
    (Moisture, "moisture", SPECIFIC, None),
    (Moisture, "leak", KEYWORD, None),
    (Moisture, "water damage", PHRASE, None),
    (Moisture, "water ingress", PHRASE, None),
    (Moisture, "water infiltration", PHRASE, None),
    (Moisture, "rising damp", PHRASE, None),
    (Moisture, "mold", SPECIFIC, None),
    (Moisture, "mould", SPECIFIC, None),
    (Moisture, "black mold", PHRASE, Some(High)),
    (Moisture, "condensation", SPECIFIC, None),
    (Moisture, "wet rot", PHRASE, None),
    (Moisture, "dry rot", PHRASE, Some(High)),
    // Electrical
    (Electrical, "wiring", SPECIFIC, None),
    (Electrical, "electrical", KEYWORD, None),
    (Electrical, "electrical fault", PHRASE, None),
    (Electrical, "electrical hazard", PHRASE, Some(High)),
    (Electrical, "exposed wiring", PHRASE, Some(High)),
    (Electrical, "electrical panel", TECHNICAL, None),
    (Electrical, "circuit breaker", TECHNICAL, None),
    (Electrical, "consumer unit", TECHNICAL, None),
    (Electrical, "fuse", KEYWORD, None),
    (Electrical, "circuit", KEYWORD, None),
    (Electrical, "socket", KEYWORD, None),
    (Electrical, "outlet", KEYWORD, None),
    (Electrical, "grounding", KEYWORD, None),
    (Electrical, "earthing", KEYWORD, None),
    (Electrical, "switch", GENERIC, None),
    (Electrical, "power", GENERIC, None),
    // Plumbing
    (Plumbing, "pipe", KEYWORD, None),
    (Plumbing, "plumbing", SPECIFIC, None),
    (Plumbing, "plumbing leak", PHRASE, None),
    (Plumbing, "drain", KEYWORD, None),
    (Plumbing, "drainage", KEYWORD, None),
    (Plumbing, "blockage", SPECIFIC, None),
    (Plumbing, "water pressure", PHRASE, None),
    (Plumbing, "water line", TECHNICAL, None),
    (Plumbing, "corrosion", KEYWORD, None),
    (Plumbing, "toilet", GENERIC, None),
    (Plumbing, "sink", GENERIC, None),
    (Plumbing, "tap", GENERIC, None),
    // Roofing
    (Roofing, "roof", KEYWORD, None),
    (Roofing, "roof damage", PHRASE, None),
    (Roofing, "roof membrane", TECHNICAL, None),
    (Roofing, "missing shingles", PHRASE, None),
    (Roofing, "missing tiles", PHRASE, None),
    (Roofing, "slipped slates", PHRASE, None),
    (Roofing, "gutter", KEYWORD, None),
    (Roofing, "chimney", KEYWORD, None),
    (Roofing, "flashing", SPECIFIC, None),
    (Roofing, "water penetration", PHRASE, None),
    (Roofing, "leak", GENERIC, None),
    (Roofing, "tile", GENERIC, None),
    (Roofing, "slate", GENERIC, None),
    // HVAC
    (Hvac, "heating", KEYWORD, None),
    (Hvac, "heating system", TECHNICAL, None),
    (Hvac, "ventilation", SPECIFIC, None),
    (Hvac, "air conditioning", TECHNICAL, None),
    (Hvac, "hvac", SPECIFIC, None),
    (Hvac, "boiler", SPECIFIC, None),
    (Hvac, "radiator", KEYWORD, None),
    (Hvac, "ductwork", SPECIFIC, None),
    (Hvac, "refrigerant leak", PHRASE, Some(High)),
    (Hvac, "vent", GENERIC, None),
    // Insulation
    (Insulation, "insulation", SPECIFIC, None),
    (Insulation, "thermal bridging", PHRASE, None),
    (Insulation, "cold spot", PHRASE, None),
    (Insulation, "heat loss", PHRASE, None),
    (Insulation, "energy efficiency", TECHNICAL, None),
    (Insulation, "draught", KEYWORD, None),
    (Insulation, "draft", GENERIC, None),
    (Insulation, "thermal", GENERIC, None),
    // Pest
    (Pest, "pest", SPECIFIC, None),
    (Pest, "infestation", SPECIFIC, None),
    (Pest, "pest infestation", PHRASE, None),
    (Pest, "termite", SPECIFIC, Some(High)),
    (Pest, "termite damage", PHRASE, Some(High)),
    (Pest, "rodent", SPECIFIC, None),
    (Pest, "rodent activity", PHRASE, None),
    (Pest, "woodworm", SPECIFIC, None),
    (Pest, "wood-boring beetle", PHRASE, None),
    (Pest, "insect", KEYWORD, None),
    (Pest, "beetle", KEYWORD, None),
    // Safety
    (Safety, "safety", KEYWORD, None),
    (Safety, "hazard", SPECIFIC, None),
    (Safety, "dangerous", SPECIFIC, None),
    (Safety, "asbestos", TECHNICAL, Some(High)),
    (Safety, "lead paint", PHRASE, Some(High)),
    (Safety, "fire safety", PHRASE, None),
    (Safety, "fire hazard", PHRASE, Some(Critical)),
    (Safety, "fall hazard", PHRASE, Some(High)),
    (Safety, "emergency exit", TECHNICAL, None),
    (Safety, "fire exit", TECHNICAL, None),
    (Safety, "smoke alarm", TECHNICAL, None),
    (Safety, "smoke detector", TECHNICAL, None),
    (Safety, "carbon monoxide", PHRASE, Some(Critical)),
    (Safety, "handrail", KEYWORD, None),
    // Cosmetic
    (Cosmetic, "paint", KEYWORD, None),
    (Cosmetic, "peeling", KEYWORD, None),
    (Cosmetic, "decoration", KEYWORD, None),
    (Cosmetic, "cosmetic", SPECIFIC, None),
    (Cosmetic, "wallpaper", KEYWORD, None),
    (Cosmetic, "scuff", KEYWORD, None),
    (Cosmetic, "stain", KEYWORD, None),
    (Cosmetic, "appearance", GENERIC, None),
    (Cosmetic, "finish", GENERIC, None),
    (Cosmetic, "surface", GENERIC, None),
];

/// The built-in rules, one [`PatternRule`] per table row.
pub fn default_rules() -> Vec<PatternRule> {
    TABLE
        .iter()
        .map(|&(category, phrase, weight, hint)| PatternRule {
            category,
            phrase: phrase.to_string(),
            weight,
            severity_hint: hint,
        })
        .collect()
}
