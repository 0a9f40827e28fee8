//! Built-in reference knowledge tables.
//!
//! [`ReferenceKnowledge`] is the static, in-memory stand-in for a full drug
//! reference database. The tables are built once at construction and never
//! mutated, so a single instance can be shared by reference across
//! concurrent checks without synchronization.

use hashbrown::HashMap;

use crate::finding::Severity;
use crate::traits::{DrugIdentity, DrugKnowledge, FrequencySchedule, InteractionRule};

/// Canonicalizes an unordered drug pair into its sorted uppercase key.
///
/// Drug-drug rules are symmetric, so `(A, B)` and `(B, A)` must hit the
/// same table entry. This is the one place that ordering is decided.
pub fn canonical_pair(a: &str, b: &str) -> (String, String) {
    let a = a.to_uppercase();
    let b = b.to_uppercase();
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The built-in immutable drug knowledge tables.
///
/// Contents mirror the curated seed rules of the reference system: a small
/// formulary of common drugs, standard Indian prescribing frequency codes,
/// and pairwise interaction/contraindication rules. Construct once with
/// [`ReferenceKnowledge::new`] and share by reference.
#[derive(Debug, Clone)]
pub struct ReferenceKnowledge {
    drugs: HashMap<String, DrugIdentity>,
    frequencies: HashMap<String, FrequencySchedule>,
    drug_drug: HashMap<(String, String), InteractionRule>,
    herb_drug: HashMap<(String, String), InteractionRule>,
    contraindications: HashMap<(String, String), String>,
}

impl ReferenceKnowledge {
    /// Builds the full table set.
    pub fn new() -> Self {
        Self {
            drugs: Self::drug_table(),
            frequencies: Self::frequency_table(),
            drug_drug: Self::drug_drug_table(),
            herb_drug: Self::herb_drug_table(),
            contraindications: Self::contraindication_table(),
        }
    }

    fn drug_table() -> HashMap<String, DrugIdentity> {
        let mut table = HashMap::new();
        for (code, generic, rxnorm) in [
            ("metf", "METFORMIN", "6809"),
            ("amlo", "AMLODIPINE", "17767"),
            ("aspi", "ASPIRIN", "1191"),
            ("para", "PARACETAMOL", "161"),
            ("ator", "ATORVASTATIN", "83367"),
        ] {
            table.insert(
                code.to_string(),
                DrugIdentity {
                    generic_name: generic.to_string(),
                    dosage_forms: vec!["tablet".to_string()],
                    rxnorm_code: Some(rxnorm.to_string()),
                },
            );
        }
        table
    }

    fn frequency_table() -> HashMap<String, FrequencySchedule> {
        let mut table = HashMap::new();
        for (code, display, daily_multiplier) in [
            ("od", "Once daily", 1),
            ("bd", "Twice daily", 2),
            ("tid", "Three times daily", 3),
            ("qid", "Four times daily", 4),
            ("hs", "At bedtime", 1),
        ] {
            table.insert(
                code.to_string(),
                FrequencySchedule {
                    display: display.to_string(),
                    daily_multiplier,
                },
            );
        }
        table
    }

    fn drug_drug_table() -> HashMap<(String, String), InteractionRule> {
        let mut table = HashMap::new();
        table.insert(
            canonical_pair("METFORMIN", "ASPIRIN"),
            InteractionRule {
                severity: Severity::Moderate,
                description: "Aspirin may enhance the hypoglycemic effect of Metformin"
                    .to_string(),
                recommendation: "Monitor blood glucose levels closely".to_string(),
                references: Vec::new(),
            },
        );
        table.insert(
            canonical_pair("ASPIRIN", "WARFARIN"),
            InteractionRule {
                severity: Severity::Severe,
                description: "Aspirin increases bleeding risk with Warfarin".to_string(),
                recommendation: "Avoid combination; if unavoidable, monitor INR closely"
                    .to_string(),
                references: Vec::new(),
            },
        );
        table
    }

    fn herb_drug_table() -> HashMap<(String, String), InteractionRule> {
        let mut table = HashMap::new();
        // Keys are (herb name as written, drug generic name) - directional.
        table.insert(
            ("Triphala".to_string(), "METFORMIN".to_string()),
            InteractionRule {
                severity: Severity::Moderate,
                description: "Triphala may enhance hypoglycemic effects of Metformin"
                    .to_string(),
                recommendation: "Monitor blood glucose levels closely. Consider adjusting doses."
                    .to_string(),
                references: vec!["J Ethnopharmacol. 2015;179:190-197".to_string()],
            },
        );
        table.insert(
            ("Ashwagandha".to_string(), "METFORMIN".to_string()),
            InteractionRule {
                severity: Severity::Moderate,
                description: "Ashwagandha may enhance hypoglycemic effects".to_string(),
                recommendation: "Monitor blood glucose. Start with lower doses.".to_string(),
                references: vec!["J Ethnopharmacol. 2015;179:190-197".to_string()],
            },
        );
        table
    }

    fn contraindication_table() -> HashMap<(String, String), String> {
        let mut table = HashMap::new();
        table.insert(
            ("METFORMIN".to_string(), "kidney_disease".to_string()),
            "Contraindicated in severe renal impairment".to_string(),
        );
        table.insert(
            ("ASPIRIN".to_string(), "bleeding_disorder".to_string()),
            "Contraindicated in active bleeding disorders".to_string(),
        );
        table
    }
}

impl Default for ReferenceKnowledge {
    fn default() -> Self {
        Self::new()
    }
}

impl DrugKnowledge for ReferenceKnowledge {
    fn resolve_drug(&self, code: &str) -> Option<DrugIdentity> {
        self.drugs.get(code).cloned()
    }

    fn resolve_frequency(&self, code: &str) -> Option<FrequencySchedule> {
        self.frequencies.get(code).cloned()
    }

    fn drug_drug_interaction(&self, a: &str, b: &str) -> Option<InteractionRule> {
        self.drug_drug.get(&canonical_pair(a, b)).cloned()
    }

    fn herb_drug_interaction(&self, herb: &str, drug: &str) -> Option<InteractionRule> {
        // Herb name is matched as written; only the drug side is canonical.
        self.herb_drug
            .get(&(herb.to_string(), drug.to_uppercase()))
            .cloned()
    }

    fn contraindication(&self, drug: &str, condition: &str) -> Option<String> {
        self.contraindications
            .get(&(drug.to_uppercase(), condition.to_string()))
            .cloned()
    }
}
