//! Prescribing-rights validation and NMC generic-first compliance.

use crate::error::{EngineError, EngineResult};
use crate::medication::{MedicationOrder, PractitionerSystem};

/// Instruction-text markers identifying scheduled drugs.
const SCHEDULE_MARKERS: [&str; 2] = ["Schedule H", "Schedule X"];

/// Gate-checks a practitioner's system against a proposed medication set.
///
/// Traditional-system practitioners (ayurveda, homeopathy, unani) may not
/// order drugs whose instructions carry a Schedule H/X marker; any match
/// fails the whole set with [`EngineError::ScopeOfPractice`]. Allopathic
/// practitioners are not gated here, including for traditional-medicine
/// orders (known one-sided policy).
///
/// This check is a precondition: it runs before interaction checking and
/// a failure short-circuits the prescribing flow with no partial findings.
pub fn validate_prescribing_rights(
    system: PractitionerSystem,
    medications: &[MedicationOrder],
) -> EngineResult<()> {
    if !system.is_traditional() {
        return Ok(());
    }

    for med in medications {
        let scheduled = SCHEDULE_MARKERS
            .iter()
            .any(|marker| med.instructions.contains(marker));
        if scheduled {
            return Err(EngineError::ScopeOfPractice { system });
        }
    }

    Ok(())
}

/// NMC generic-first compliance: true iff every order carries a non-empty,
/// fully uppercase generic name.
pub fn nmc_compliant(medications: &[MedicationOrder]) -> bool {
    medications
        .iter()
        .all(|med| !med.generic_name.is_empty() && med.generic_name == med.canonical_name())
}
