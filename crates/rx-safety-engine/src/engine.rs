//! The engine façade: shorthand expansion, rights gating and interaction
//! checking over a borrowed knowledge source.

use rx_shorthand::parse;

use crate::checker::check_interactions;
use crate::error::{EngineError, EngineResult};
use crate::finding::SafetyVerdict;
use crate::medication::{MedicationOrder, PractitionerSystem, TraditionalMedication};
use crate::rights::validate_prescribing_rights;
use crate::traits::DrugKnowledge;

/// Route applied to every expanded shorthand order.
const DEFAULT_ROUTE: &str = "oral";
/// Dosage form used when the knowledge base lists none.
const DEFAULT_FORM: &str = "tablet";
/// Instruction text applied to every expanded shorthand order; the
/// prescribing UI may override it downstream.
const DEFAULT_INSTRUCTIONS: &str = "Take after meals";

/// The prescription safety engine.
///
/// Borrows an immutable [`DrugKnowledge`] source and exposes the four
/// engine operations as pure, synchronous calls. One engine (or one
/// knowledge source behind many engines) can serve concurrent requests
/// without coordination.
///
/// # Example
///
/// ```rust
/// use rx_safety_engine::{ReferenceKnowledge, SafetyEngine};
///
/// let knowledge = ReferenceKnowledge::new();
/// let engine = SafetyEngine::new(&knowledge);
///
/// let med = engine.expand_shorthand("Metf 1000 bd 30d").unwrap();
/// assert_eq!(med.generic_name, "METFORMIN");
/// assert_eq!(med.quantity, 60);
///
/// let verdict = engine.check_interactions(&[med], &[], &[], &[]);
/// assert_eq!(verdict.safety_score, 10.0);
/// ```
pub struct SafetyEngine<'a, K: DrugKnowledge + ?Sized> {
    knowledge: &'a K,
}

impl<'a, K: DrugKnowledge + ?Sized> SafetyEngine<'a, K> {
    /// Creates an engine over the given knowledge source.
    pub fn new(knowledge: &'a K) -> Self {
        Self { knowledge }
    }

    /// Expands a shorthand line into a full [`MedicationOrder`].
    ///
    /// Fails if the text does not match the grammar or the drug code is
    /// not in the knowledge base. An unrecognized frequency code is NOT a
    /// failure: it passes through as its own uppercased display text with
    /// a daily multiplier of 1.
    pub fn expand_shorthand(&self, text: &str) -> EngineResult<MedicationOrder> {
        let order = parse(text)?;

        let identity = self
            .knowledge
            .resolve_drug(&order.drug_code)
            .ok_or_else(|| EngineError::UnknownDrugCode(order.drug_code.clone()))?;

        let (frequency, daily_multiplier) =
            match self.knowledge.resolve_frequency(&order.frequency_code) {
                Some(schedule) => (schedule.display, schedule.daily_multiplier),
                None => (order.frequency_code.to_uppercase(), 1),
            };

        Ok(MedicationOrder {
            generic_name: identity.generic_name,
            brand_suggestions: Vec::new(),
            strength: format!("{}mg", order.strength),
            dosage_form: identity
                .dosage_forms
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_FORM.to_string()),
            route: DEFAULT_ROUTE.to_string(),
            frequency,
            duration_days: order.duration_days,
            quantity: daily_multiplier * order.duration_days,
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            rxnorm_code: identity.rxnorm_code,
        })
    }

    /// Gate-checks prescribing rights for the practitioner's system.
    ///
    /// See [`validate_prescribing_rights`](crate::validate_prescribing_rights).
    pub fn validate_prescribing_rights(
        &self,
        system: PractitionerSystem,
        medications: &[MedicationOrder],
    ) -> EngineResult<()> {
        validate_prescribing_rights(system, medications)
    }

    /// Evaluates the medication set and returns a scored verdict.
    ///
    /// Empty slices model missing optional inputs and contribute zero
    /// findings. Given well-formed inputs this cannot fail.
    pub fn check_interactions(
        &self,
        medications: &[MedicationOrder],
        traditional: &[TraditionalMedication],
        conditions: &[String],
        allergies: &[String],
    ) -> SafetyVerdict {
        check_interactions(self.knowledge, medications, traditional, conditions, allergies)
    }

    /// The full prescribing flow: rights gate first, then interaction
    /// check. A gate failure short-circuits with no partial findings.
    pub fn check_prescription(
        &self,
        system: PractitionerSystem,
        medications: &[MedicationOrder],
        traditional: &[TraditionalMedication],
        conditions: &[String],
        allergies: &[String],
    ) -> EngineResult<SafetyVerdict> {
        self.validate_prescribing_rights(system, medications)?;
        Ok(self.check_interactions(medications, traditional, conditions, allergies))
    }
}
