//! The closed set of defect categories.

use serde::{Deserialize, Serialize};

/// The 10 defect categories. Immutable reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectCategory {
    Structural,
    Moisture,
    Electrical,
    Plumbing,
    Roofing,
    Hvac,
    Insulation,
    Pest,
    Safety,
    Cosmetic,
}

impl DefectCategory {
    /// All 10 categories, in declaration order.
    pub fn all() -> &'static [DefectCategory] {
        &[
            Self::Structural, Self::Moisture, Self::Electrical, Self::Plumbing,
            Self::Roofing, Self::Hvac, Self::Insulation, Self::Pest,
            Self::Safety, Self::Cosmetic,
        ]
    }

    /// Category name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Moisture => "moisture",
            Self::Electrical => "electrical",
            Self::Plumbing => "plumbing",
            Self::Roofing => "roofing",
            Self::Hvac => "hvac",
            Self::Insulation => "insulation",
            Self::Pest => "pest",
            Self::Safety => "safety",
            Self::Cosmetic => "cosmetic",
        }
    }

    /// Parse from string. Case-insensitive, surrounding whitespace ignored.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structural" => Some(Self::Structural),
            "moisture" => Some(Self::Moisture),
            "electrical" => Some(Self::Electrical),
            "plumbing" => Some(Self::Plumbing),
            "roofing" => Some(Self::Roofing),
            "hvac" => Some(Self::Hvac),
            "insulation" => Some(Self::Insulation),
            "pest" => Some(Self::Pest),
            "safety" => Some(Self::Safety),
            "cosmetic" => Some(Self::Cosmetic),
            _ => None,
        }
    }
}

impl std::fmt::Display for DefectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
