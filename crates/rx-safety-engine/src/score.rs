//! Safety scoring: reduces a finding set to a single 0-10 verdict.

use crate::finding::{FindingKind, InteractionFinding, Severity};

/// Score of a prescription with no findings.
pub const MAX_SCORE: f64 = 10.0;

const CONTRAINDICATION_DEDUCTION: f64 = 3.0;
const ALLERGY_DEDUCTION: f64 = 4.0;

/// Deduction applied for a drug-drug or herb-drug interaction finding.
fn interaction_deduction(severity: Severity) -> f64 {
    match severity {
        Severity::Critical => 3.0,
        Severity::Severe => 2.0,
        Severity::Moderate => 1.0,
        Severity::Mild => 0.5,
    }
}

/// Computes the overall safety score for a finding set.
///
/// Starts at [`MAX_SCORE`] and deducts per finding: interactions by
/// severity, contraindications a flat 3.0, allergy alerts a flat 4.0,
/// clamped at 0.0. A single linear pass over the findings, so the result
/// is independent of finding order.
pub fn safety_score(findings: &[InteractionFinding]) -> f64 {
    let mut score = MAX_SCORE;

    for finding in findings {
        score -= match finding.kind {
            FindingKind::DrugDrug | FindingKind::HerbDrug => {
                interaction_deduction(finding.severity)
            }
            FindingKind::Contraindication => CONTRAINDICATION_DEDUCTION,
            FindingKind::Allergy => ALLERGY_DEDUCTION,
        };
    }

    score.max(0.0)
}
