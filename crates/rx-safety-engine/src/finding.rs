//! Interaction findings and the safety verdict.

use crate::traits::InteractionRule;

/// Fixed message attached to every allergy finding.
pub const ALLERGY_MESSAGE: &str = "Patient has known allergy to this medication";

const ALLERGY_RECOMMENDATION: &str = "Do not dispense; verify allergy history";

// =============================================================================
// Finding Types
// =============================================================================

/// The category of a safety finding.
///
/// Categories also define the deterministic ordering of findings in a
/// [`SafetyVerdict`]: drug-drug first, then herb-drug, then
/// contraindications, then allergy alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FindingKind {
    /// Interaction between two modern pharmaceuticals.
    DrugDrug,
    /// Interaction between a traditional preparation and a modern drug.
    HerbDrug,
    /// Drug contraindicated by a patient condition.
    Contraindication,
    /// Known patient allergy to a prescribed drug.
    Allergy,
}

/// Clinical severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Minor clinical significance.
    Mild,
    /// Monitor; dose adjustment may be needed.
    Moderate,
    /// Combination generally to be avoided.
    Severe,
    /// Must not proceed without specialist review.
    Critical,
}

/// A single safety finding for a proposed medication set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionFinding {
    /// Finding category.
    pub kind: FindingKind,
    /// Clinical severity. Contraindication and allergy findings are always
    /// [`Severity::Critical`].
    pub severity: Severity,
    /// The primary substance involved (drug generic name or herb name).
    pub subject: String,
    /// The second party: the other drug for interactions, the condition
    /// tag for contraindications, absent for allergy alerts.
    pub counterpart: Option<String>,
    /// What the finding means clinically.
    pub description: String,
    /// Suggested clinical action.
    pub recommendation: String,
    /// Literature citations supporting the rule, if any.
    pub references: Vec<String>,
}

impl InteractionFinding {
    /// Builds a drug-drug finding from a knowledge-base rule.
    pub fn drug_drug(drug1: &str, drug2: &str, rule: &InteractionRule) -> Self {
        Self {
            kind: FindingKind::DrugDrug,
            severity: rule.severity,
            subject: drug1.to_string(),
            counterpart: Some(drug2.to_string()),
            description: rule.description.clone(),
            recommendation: rule.recommendation.clone(),
            references: rule.references.clone(),
        }
    }

    /// Builds a herb-drug finding from a knowledge-base rule (herb first).
    pub fn herb_drug(herb: &str, drug: &str, rule: &InteractionRule) -> Self {
        Self {
            kind: FindingKind::HerbDrug,
            severity: rule.severity,
            subject: herb.to_string(),
            counterpart: Some(drug.to_string()),
            description: rule.description.clone(),
            recommendation: rule.recommendation.clone(),
            references: rule.references.clone(),
        }
    }

    /// Builds a contraindication finding. Always critical, whatever the
    /// rule table might otherwise imply.
    pub fn contraindication(drug: &str, condition: &str, message: &str) -> Self {
        Self {
            kind: FindingKind::Contraindication,
            severity: Severity::Critical,
            subject: drug.to_string(),
            counterpart: Some(condition.to_string()),
            description: message.to_string(),
            recommendation: "Contraindicated; select an alternative agent".to_string(),
            references: Vec::new(),
        }
    }

    /// Builds an allergy alert. Always critical, with a fixed message.
    pub fn allergy(drug: &str) -> Self {
        Self {
            kind: FindingKind::Allergy,
            severity: Severity::Critical,
            subject: drug.to_string(),
            counterpart: None,
            description: ALLERGY_MESSAGE.to_string(),
            recommendation: ALLERGY_RECOMMENDATION.to_string(),
            references: Vec::new(),
        }
    }
}

// =============================================================================
// Safety Verdict
// =============================================================================

/// The complete outcome of an interaction check.
///
/// Findings are ordered by category (drug-drug, herb-drug,
/// contraindication, allergy) and within a category by input order, so
/// identical inputs always produce an identical verdict.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafetyVerdict {
    /// All findings, in deterministic category order.
    pub findings: Vec<InteractionFinding>,
    /// Overall safety score in [0, 10]; 10 means no findings.
    pub safety_score: f64,
}

impl SafetyVerdict {
    /// Returns true when the check produced no findings at all.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Drug-drug and herb-drug interaction findings.
    pub fn interactions(&self) -> impl Iterator<Item = &InteractionFinding> {
        self.findings
            .iter()
            .filter(|f| matches!(f.kind, FindingKind::DrugDrug | FindingKind::HerbDrug))
    }

    /// Contraindication findings.
    pub fn contraindications(&self) -> impl Iterator<Item = &InteractionFinding> {
        self.findings
            .iter()
            .filter(|f| f.kind == FindingKind::Contraindication)
    }

    /// Allergy alert findings.
    pub fn allergy_alerts(&self) -> impl Iterator<Item = &InteractionFinding> {
        self.findings.iter().filter(|f| f.kind == FindingKind::Allergy)
    }
}
