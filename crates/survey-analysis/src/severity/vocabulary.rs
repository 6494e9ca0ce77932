//! Severity indicator vocabulary.

use survey_core::SeverityLevel::{self, *};

/// (level, indicator phrase)
pub const INDICATORS: &[(SeverityLevel, &str)] = &[
    (Critical, "urgent"),
    (Critical, "immediate"),
    (Critical, "critical"),
    (Critical, "danger"),
    (Critical, "dangerous"),
    (Critical, "severe"),
    (Critical, "collapse"),
    (Critical, "major structural"),
    (Critical, "safety risk"),
    (Critical, "unsafe"),
    (High, "significant"),
    (High, "major"),
    (High, "serious"),
    (High, "extensive"),
    (High, "widespread"),
    (High, "important"),
    (Medium, "moderate"),
    (Medium, "noticeable"),
    (Medium, "visible"),
    (Medium, "minor structural"),
    (Medium, "needs attention"),
    (Medium, "requires attention"),
    (Low, "minor"),
    (Low, "cosmetic"),
    (Low, "superficial"),
    (Low, "small"),
    (Low, "slight"),
    (Low, "minimal"),
];
