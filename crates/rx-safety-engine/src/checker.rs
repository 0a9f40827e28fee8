//! The interaction/risk checker: four evaluation passes over a proposed
//! medication set.
//!
//! Passes always run in the same order — drug-drug, herb-drug,
//! contraindications, allergy alerts — and append to one findings list, so
//! identical inputs produce an identical verdict. Missing optional inputs
//! (no traditional medications, no conditions, no allergies) are modeled
//! as empty slices and simply contribute zero findings; no pass can fail.

use crate::finding::{InteractionFinding, SafetyVerdict};
use crate::knowledge::canonical_pair;
use crate::medication::{MedicationOrder, TraditionalMedication};
use crate::score::safety_score;
use crate::traits::DrugKnowledge;

/// Evaluates the full medication set and produces a scored verdict.
pub fn check_interactions<K: DrugKnowledge + ?Sized>(
    knowledge: &K,
    medications: &[MedicationOrder],
    traditional: &[TraditionalMedication],
    conditions: &[String],
    allergies: &[String],
) -> SafetyVerdict {
    let mut findings = Vec::new();

    drug_drug_pass(knowledge, medications, &mut findings);
    herb_drug_pass(knowledge, traditional, medications, &mut findings);
    contraindication_pass(knowledge, medications, conditions, &mut findings);
    allergy_pass(medications, allergies, &mut findings);

    let score = safety_score(&findings);
    SafetyVerdict {
        findings,
        safety_score: score,
    }
}

/// Pass 1: every unordered pair of modern medications (i < j).
///
/// The finding is built from the canonicalized (sorted) pair, so swapping
/// the two medications in the input yields an identical finding.
fn drug_drug_pass<K: DrugKnowledge + ?Sized>(
    knowledge: &K,
    medications: &[MedicationOrder],
    findings: &mut Vec<InteractionFinding>,
) {
    for (i, med1) in medications.iter().enumerate() {
        for med2 in &medications[i + 1..] {
            let (first, second) = canonical_pair(&med1.canonical_name(), &med2.canonical_name());
            if let Some(rule) = knowledge.drug_drug_interaction(&first, &second) {
                findings.push(InteractionFinding::drug_drug(&first, &second, &rule));
            }
        }
    }
}

/// Pass 2: every traditional medication against every modern one,
/// herb first. The ordered lookup carries any literature citations.
fn herb_drug_pass<K: DrugKnowledge + ?Sized>(
    knowledge: &K,
    traditional: &[TraditionalMedication],
    medications: &[MedicationOrder],
    findings: &mut Vec<InteractionFinding>,
) {
    for herb in traditional {
        for med in medications {
            let drug = med.canonical_name();
            if let Some(rule) = knowledge.herb_drug_interaction(&herb.name, &drug) {
                findings.push(InteractionFinding::herb_drug(&herb.name, &drug, &rule));
            }
        }
    }
}

/// Pass 3: every (medication, condition tag) pair. Hits are always critical.
fn contraindication_pass<K: DrugKnowledge + ?Sized>(
    knowledge: &K,
    medications: &[MedicationOrder],
    conditions: &[String],
    findings: &mut Vec<InteractionFinding>,
) {
    for med in medications {
        let drug = med.canonical_name();
        for condition in conditions {
            if let Some(message) = knowledge.contraindication(&drug, condition) {
                findings.push(InteractionFinding::contraindication(
                    &drug, condition, &message,
                ));
            }
        }
    }
}

/// Pass 4: case-insensitive exact match of each medication against the
/// patient allergy list.
fn allergy_pass(
    medications: &[MedicationOrder],
    allergies: &[String],
    findings: &mut Vec<InteractionFinding>,
) {
    for med in medications {
        let name = med.canonical_name();
        let allergic = allergies
            .iter()
            .any(|allergy| allergy.to_uppercase() == name);
        if allergic {
            findings.push(InteractionFinding::allergy(&name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::{FindingKind, Severity};
    use crate::knowledge::ReferenceKnowledge;

    fn order(generic_name: &str) -> MedicationOrder {
        MedicationOrder {
            generic_name: generic_name.to_string(),
            brand_suggestions: Vec::new(),
            strength: "500mg".to_string(),
            dosage_form: "tablet".to_string(),
            route: "oral".to_string(),
            frequency: "Once daily".to_string(),
            duration_days: 30,
            quantity: 30,
            instructions: "Take after meals".to_string(),
            rxnorm_code: None,
        }
    }

    fn herb(name: &str) -> TraditionalMedication {
        TraditionalMedication {
            name: name.to_string(),
            preparation: "churna".to_string(),
            dose: "3g".to_string(),
            frequency: "twice daily".to_string(),
            anupana: Some("warm water".to_string()),
            duration_days: 30,
            namaste_code: None,
        }
    }

    #[test]
    fn test_no_inputs_is_clean_verdict() {
        let kb = ReferenceKnowledge::new();
        let verdict = check_interactions(&kb, &[], &[], &[], &[]);
        assert!(verdict.is_clean());
        assert_eq!(verdict.safety_score, 10.0);
    }

    #[test]
    fn test_drug_drug_pass_finds_known_pair() {
        let kb = ReferenceKnowledge::new();
        let meds = vec![order("METFORMIN"), order("ASPIRIN")];
        let verdict = check_interactions(&kb, &meds, &[], &[], &[]);
        assert_eq!(verdict.findings.len(), 1);
        assert_eq!(verdict.findings[0].kind, FindingKind::DrugDrug);
        assert_eq!(verdict.findings[0].severity, Severity::Moderate);
        assert_eq!(verdict.safety_score, 9.0);
    }

    #[test]
    fn test_drug_drug_pass_normalizes_case() {
        let kb = ReferenceKnowledge::new();
        let meds = vec![order("metformin"), order("Aspirin")];
        let verdict = check_interactions(&kb, &meds, &[], &[], &[]);
        assert_eq!(verdict.findings.len(), 1);
    }

    #[test]
    fn test_herb_drug_pass_is_directional() {
        let kb = ReferenceKnowledge::new();
        let meds = vec![order("METFORMIN")];
        let herbs = vec![herb("Triphala")];
        let verdict = check_interactions(&kb, &meds, &herbs, &[], &[]);
        assert_eq!(verdict.findings.len(), 1);
        let finding = &verdict.findings[0];
        assert_eq!(finding.kind, FindingKind::HerbDrug);
        assert_eq!(finding.subject, "Triphala");
        assert_eq!(finding.counterpart.as_deref(), Some("METFORMIN"));
        assert!(!finding.references.is_empty());
    }

    #[test]
    fn test_contraindication_pass_is_critical() {
        let kb = ReferenceKnowledge::new();
        let meds = vec![order("METFORMIN")];
        let conditions = vec!["kidney_disease".to_string()];
        let verdict = check_interactions(&kb, &meds, &[], &conditions, &[]);
        assert_eq!(verdict.findings.len(), 1);
        assert_eq!(verdict.findings[0].kind, FindingKind::Contraindication);
        assert_eq!(verdict.findings[0].severity, Severity::Critical);
        assert_eq!(verdict.safety_score, 7.0);
    }

    #[test]
    fn test_allergy_pass_matches_case_insensitively() {
        let kb = ReferenceKnowledge::new();
        let meds = vec![order("ASPIRIN")];
        let allergies = vec!["aspirin".to_string()];
        let verdict = check_interactions(&kb, &meds, &[], &[], &allergies);
        assert_eq!(verdict.findings.len(), 1);
        assert_eq!(verdict.findings[0].kind, FindingKind::Allergy);
        assert_eq!(verdict.safety_score, 6.0);
    }

    #[test]
    fn test_findings_preserve_category_order() {
        let kb = ReferenceKnowledge::new();
        let meds = vec![order("METFORMIN"), order("ASPIRIN")];
        let herbs = vec![herb("Triphala")];
        let conditions = vec!["kidney_disease".to_string()];
        let allergies = vec!["ASPIRIN".to_string()];
        let verdict = check_interactions(&kb, &meds, &herbs, &conditions, &allergies);

        let kinds: Vec<_> = verdict.findings.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FindingKind::DrugDrug,
                FindingKind::HerbDrug,
                FindingKind::Contraindication,
                FindingKind::Allergy,
            ]
        );
        // 10 - 1.0 (moderate) - 1.0 (moderate) - 3.0 (contra) - 4.0 (allergy)
        assert_eq!(verdict.safety_score, 1.0);
    }

    #[test]
    fn test_check_is_idempotent() {
        let kb = ReferenceKnowledge::new();
        let meds = vec![order("METFORMIN"), order("ASPIRIN")];
        let herbs = vec![herb("Ashwagandha")];
        let first = check_interactions(&kb, &meds, &herbs, &[], &[]);
        let second = check_interactions(&kb, &meds, &herbs, &[], &[]);
        assert_eq!(first, second);
    }
}
