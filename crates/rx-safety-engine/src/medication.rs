//! Medication order types and practitioner systems.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Medication Orders
// =============================================================================

/// A fully structured modern-medicine (allopathic) medication order.
///
/// Identity for all rule lookups is the canonical generic name, which is
/// normalized to uppercase via [`MedicationOrder::canonical_name`] before
/// any comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MedicationOrder {
    /// Canonical generic drug name (uppercase identity key, e.g. `"METFORMIN"`).
    pub generic_name: String,
    /// Suggested brand names, if any (generic-first prescribing keeps this
    /// advisory only).
    pub brand_suggestions: Vec<String>,
    /// Strength with unit, e.g. `"1000mg"`.
    pub strength: String,
    /// Dosage form, e.g. `"tablet"`.
    pub dosage_form: String,
    /// Administration route, e.g. `"oral"`.
    pub route: String,
    /// Human-readable frequency, e.g. `"Twice daily"`.
    pub frequency: String,
    /// Treatment duration in days.
    pub duration_days: u32,
    /// Total units to dispense over the full duration.
    pub quantity: u32,
    /// Free-text instructions to the patient.
    pub instructions: String,
    /// RxNorm concept code, when known.
    pub rxnorm_code: Option<String>,
}

impl MedicationOrder {
    /// The uppercase identity key used for all rule-table lookups.
    pub fn canonical_name(&self) -> String {
        self.generic_name.to_uppercase()
    }
}

/// A traditional-system (AYUSH) medication order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraditionalMedication {
    /// Preparation name (traditional-system identity key, e.g. `"Triphala"`).
    pub name: String,
    /// Preparation type, e.g. `"churna"` (powder) or `"vati"` (tablet).
    pub preparation: String,
    /// Dose as written, e.g. `"3g"`.
    pub dose: String,
    /// Dosing frequency as written, e.g. `"twice daily"`.
    pub frequency: String,
    /// Vehicle/carrier the preparation is taken with, e.g. `"warm water"`.
    pub anupana: Option<String>,
    /// Treatment duration in days.
    pub duration_days: u32,
    /// NAMASTE terminology code, when known.
    pub namaste_code: Option<String>,
}

// =============================================================================
// Practitioner Systems
// =============================================================================

/// The medical system a practitioner is licensed under.
///
/// Drives the prescribing-rights gate: traditional-system practitioners
/// may not order scheduled (Schedule H/X) drugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PractitionerSystem {
    /// Modern/allopathic medicine.
    Allopathy,
    /// Ayurveda.
    Ayurveda,
    /// Homeopathy.
    Homeopathy,
    /// Unani.
    Unani,
}

impl PractitionerSystem {
    /// Returns true for the traditional (AYUSH) systems.
    pub fn is_traditional(&self) -> bool {
        !matches!(self, PractitionerSystem::Allopathy)
    }
}

impl fmt::Display for PractitionerSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PractitionerSystem::Allopathy => "Allopathy",
            PractitionerSystem::Ayurveda => "Ayurveda",
            PractitionerSystem::Homeopathy => "Homeopathy",
            PractitionerSystem::Unani => "Unani",
        };
        write!(f, "{name}")
    }
}

/// Error returned when parsing an unrecognized practitioner system name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown practitioner system: {0}")]
pub struct UnknownSystemError(
    /// The unrecognized system name, lowercased.
    pub String,
);

impl FromStr for PractitionerSystem {
    type Err = UnknownSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allopathy" => Ok(PractitionerSystem::Allopathy),
            "ayurveda" => Ok(PractitionerSystem::Ayurveda),
            "homeopathy" => Ok(PractitionerSystem::Homeopathy),
            "unani" => Ok(PractitionerSystem::Unani),
            other => Err(UnknownSystemError(other.to_string())),
        }
    }
}
