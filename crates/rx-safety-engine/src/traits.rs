//! The drug knowledge capability trait.
//!
//! This module defines the [`DrugKnowledge`] trait that must be implemented
//! by any reference-data source the engine evaluates against. The built-in
//! [`ReferenceKnowledge`](crate::ReferenceKnowledge) tables implement it;
//! a production deployment can substitute a real reference database without
//! touching the parser, checker or scorer.
//!
//! All methods are pure lookups: absence of a rule is `None`, never an
//! error, and implementations must be deterministic and side-effect-free.

use crate::finding::Severity;

// =============================================================================
// Knowledge Records
// =============================================================================

/// Canonical identity of a drug resolved from a shorthand code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrugIdentity {
    /// Canonical generic name, uppercase (e.g. `"METFORMIN"`).
    pub generic_name: String,
    /// Accepted dosage forms, most common first.
    pub dosage_forms: Vec<String>,
    /// RxNorm concept code, when known.
    pub rxnorm_code: Option<String>,
}

/// A dosing frequency resolved from a frequency code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencySchedule {
    /// Human-readable text, e.g. `"Twice daily"`.
    pub display: String,
    /// Doses per day, used to compute dispense quantity.
    pub daily_multiplier: u32,
}

/// A pairwise interaction rule from the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionRule {
    /// Clinical severity of the interaction.
    pub severity: Severity,
    /// What happens when the two substances are combined.
    pub description: String,
    /// Suggested clinical action.
    pub recommendation: String,
    /// Literature citations supporting the rule.
    pub references: Vec<String>,
}

// =============================================================================
// Capability Trait
// =============================================================================

/// Read-only drug reference data the engine evaluates against.
///
/// # Lookup Contracts
///
/// - [`resolve_drug`](Self::resolve_drug) takes the lowercase shorthand
///   token (e.g. `"metf"`).
/// - [`resolve_frequency`](Self::resolve_frequency) returning `None` is not
///   an error: the expander falls back to the uppercased code with a daily
///   multiplier of 1.
/// - [`drug_drug_interaction`](Self::drug_drug_interaction) must be
///   symmetric: `(A, B)` and `(B, A)` yield the identical rule.
///   Implementations key on the sorted canonical pair.
/// - [`herb_drug_interaction`](Self::herb_drug_interaction) is directional
///   (herb first): the rule tables encode the direction of the known
///   clinical literature, so the pair is never sorted.
///
/// Implementations must be `Send + Sync`; the engine shares one knowledge
/// source across concurrent checks by reference, without locking.
pub trait DrugKnowledge: Send + Sync {
    /// Resolves a lowercase shorthand drug code to its canonical identity.
    fn resolve_drug(&self, code: &str) -> Option<DrugIdentity>;

    /// Resolves a lowercase frequency code to its dosing schedule.
    fn resolve_frequency(&self, code: &str) -> Option<FrequencySchedule>;

    /// Looks up a drug-drug interaction rule for two generic names,
    /// order-independently.
    fn drug_drug_interaction(&self, a: &str, b: &str) -> Option<InteractionRule>;

    /// Looks up a herb-drug interaction rule for an ordered
    /// (herb, drug generic name) pair.
    fn herb_drug_interaction(&self, herb: &str, drug: &str) -> Option<InteractionRule>;

    /// Looks up a contraindication message for a (drug generic name,
    /// condition tag) pair.
    fn contraindication(&self, drug: &str, condition: &str) -> Option<String>;
}
