//! Maintenance recommendations derived from a report's distributions.

use std::fmt;

use serde::{Deserialize, Serialize};
use survey_core::{DefectCategory, SeverityLevel};

use crate::aggregation::DistributionSummary;

/// A maintenance recommendation with a stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    AddressCriticalImmediately,
    ScheduleProfessionalInspection,
    ConsultStructuralEngineer,
    ImproveVentilation,
    ElectricianInspection,
    PrioritizeSafetyHazards,
    PlumberInspection,
    RoofRepair,
    PestControl,
    DocumentRepairs,
    BudgetMaintenance,
}

impl Recommendation {
    pub fn code(&self) -> &'static str {
        match self {
            Self::AddressCriticalImmediately => "address_critical_immediately",
            Self::ScheduleProfessionalInspection => "schedule_professional_inspection",
            Self::ConsultStructuralEngineer => "consult_structural_engineer",
            Self::ImproveVentilation => "improve_ventilation",
            Self::ElectricianInspection => "electrician_inspection",
            Self::PrioritizeSafetyHazards => "prioritize_safety_hazards",
            Self::PlumberInspection => "plumber_inspection",
            Self::RoofRepair => "roof_repair",
            Self::PestControl => "pest_control",
            Self::DocumentRepairs => "document_repairs",
            Self::BudgetMaintenance => "budget_maintenance",
        }
    }

    /// Human-readable advice.
    pub fn text(&self) -> &'static str {
        match self {
            Self::AddressCriticalImmediately => "URGENT: Address critical defects immediately for safety",
            Self::ScheduleProfessionalInspection => {
                "HIGH: Schedule professional inspection for major defects"
            }
            Self::ConsultStructuralEngineer => "Structural: Consult structural engineer for assessment",
            Self::ImproveVentilation => "Moisture: Investigate sources and improve ventilation",
            Self::ElectricianInspection => "Electrical: Have qualified electrician inspect wiring",
            Self::PrioritizeSafetyHazards => "Safety: Address safety hazards as priority",
            Self::PlumberInspection => "Plumbing: Have a plumber trace leaks and check pressure",
            Self::RoofRepair => "Roofing: Arrange roof repairs before further weather damage",
            Self::PestControl => "Pest: Engage pest control and seal entry points",
            Self::DocumentRepairs => "Document all repairs and maintain regular inspection schedule",
            Self::BudgetMaintenance => "Budget for medium/low priority items in maintenance plan",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Severity advice first, then per-category advice, then the general items.
/// A report without findings gets no advice.
pub fn recommendations(summary: &DistributionSummary) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if summary.total == 0 {
        return out;
    }
    if summary.severity_count(SeverityLevel::Critical) > 0 {
        out.push(Recommendation::AddressCriticalImmediately);
    }
    if summary.severity_count(SeverityLevel::High) > 0 {
        out.push(Recommendation::ScheduleProfessionalInspection);
    }

    let per_category = [
        (DefectCategory::Structural, Recommendation::ConsultStructuralEngineer),
        (DefectCategory::Moisture, Recommendation::ImproveVentilation),
        (DefectCategory::Electrical, Recommendation::ElectricianInspection),
        (DefectCategory::Safety, Recommendation::PrioritizeSafetyHazards),
        (DefectCategory::Plumbing, Recommendation::PlumberInspection),
        (DefectCategory::Roofing, Recommendation::RoofRepair),
        (DefectCategory::Pest, Recommendation::PestControl),
    ];
    for (category, rec) in per_category {
        if summary.category_count(category) > 0 {
            out.push(rec);
        }
    }

    out.push(Recommendation::DocumentRepairs);
    out.push(Recommendation::BudgetMaintenance);
    out
}
