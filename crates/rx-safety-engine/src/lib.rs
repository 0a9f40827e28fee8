//! # rx-safety-engine
//!
//! Prescription safety engine for dual-system (allopathic + AYUSH)
//! prescribing.
//!
//! This crate is the rule-evaluation core behind a prescribing service: it
//! expands clinician shorthand into structured medication orders, enforces
//! scope-of-practice prescribing restrictions, checks medication sets for
//! drug-drug, herb-drug, contraindication and allergy risks, and reduces
//! the findings to a single 0-10 safety score.
//!
//! It performs no I/O, authentication or storage. The surrounding service
//! loads patient data, calls the engine, and persists/serializes whatever
//! comes back.
//!
//! ## Key Properties
//!
//! - **Pure and stateless** - every operation is a synchronous computation
//!   over its inputs; identical inputs give bit-identical verdicts
//! - **Injectable knowledge** - rule tables sit behind the [`DrugKnowledge`]
//!   trait, so the built-in [`ReferenceKnowledge`] can be swapped for a real
//!   reference database without touching the checker or scorer
//! - **Lock-free sharing** - the knowledge source is immutable after
//!   construction and shared by reference across concurrent checks
//!
//! ## Quick Start
//!
//! ```rust
//! use rx_safety_engine::{PractitionerSystem, ReferenceKnowledge, SafetyEngine};
//!
//! let knowledge = ReferenceKnowledge::new();
//! let engine = SafetyEngine::new(&knowledge);
//!
//! // Expand clinician shorthand
//! let metformin = engine.expand_shorthand("Metf 1000 bd 30d").unwrap();
//! let aspirin = engine.expand_shorthand("Aspi 75 od 30d").unwrap();
//! assert_eq!(metformin.quantity, 60);
//!
//! // Gate-check and evaluate in one call
//! let verdict = engine
//!     .check_prescription(
//!         PractitionerSystem::Allopathy,
//!         &[metformin, aspirin],
//!         &[],
//!         &[],
//!         &[],
//!     )
//!     .unwrap();
//!
//! // METFORMIN + ASPIRIN is a known moderate interaction: 10 - 1.0
//! assert_eq!(verdict.safety_score, 9.0);
//! ```
//!
//! ## Evaluation Order
//!
//! | Pass | Inputs | Severity |
//! |------|--------|----------|
//! | Drug-drug | every unordered medication pair | from rule table |
//! | Herb-drug | every traditional x modern pair, herb first | from rule table |
//! | Contraindication | every medication x condition tag | always critical |
//! | Allergy | every medication vs. allergy list | always critical |
//!
//! Findings keep this order in the verdict, and the safety score is a
//! single order-independent linear reduction over them.
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize on all public types (finding kinds as
//!   `drug_drug`/`herb_drug`/..., severities lowercase)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      rx-safety-engine                        │
//! │                                                              │
//! │  SafetyEngine<'_, K: DrugKnowledge>                          │
//! │  ├── expand_shorthand: parse (rx-shorthand) → resolve codes  │
//! │  ├── validate_prescribing_rights: Schedule H/X gate          │
//! │  ├── check_interactions: four passes → SafetyVerdict         │
//! │  └── check_prescription: gate, then check                    │
//! │                                                              │
//! │  Dependencies:                                               │
//! │  ├── rx-shorthand - shorthand grammar (ShorthandOrder)       │
//! │  └── DrugKnowledge impl - rule tables (ReferenceKnowledge)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod checker;
mod engine;
mod error;
mod finding;
mod knowledge;
mod medication;
mod rights;
mod score;
mod traits;

// Public re-exports
pub use checker::check_interactions;
pub use engine::SafetyEngine;
pub use error::{EngineError, EngineResult};
pub use finding::{FindingKind, InteractionFinding, SafetyVerdict, Severity, ALLERGY_MESSAGE};
pub use knowledge::{canonical_pair, ReferenceKnowledge};
pub use medication::{
    MedicationOrder, PractitionerSystem, TraditionalMedication, UnknownSystemError,
};
pub use rights::{nmc_compliant, validate_prescribing_rights};
pub use score::{safety_score, MAX_SCORE};
pub use traits::{DrugIdentity, DrugKnowledge, FrequencySchedule, InteractionRule};

// Re-export commonly used types from the parser crate for convenience
pub use rx_shorthand::{parse as parse_shorthand, ShorthandError, ShorthandOrder};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        // Verify all public types are accessible
        let _: Option<SafetyVerdict> = None;
        let _: Option<InteractionFinding> = None;
        let _: Option<MedicationOrder> = None;
        let _: Option<TraditionalMedication> = None;
        let _: Option<EngineResult<()>> = None;
    }

    #[test]
    fn test_re_exports() {
        // Verify re-exports work
        let order = parse_shorthand("metf 1000 bd 30d").unwrap();
        assert_eq!(order.drug_code, "metf");
        assert_eq!(MAX_SCORE, 10.0);
    }
}
