//! Safety-score property tests: bounds, additivity and permutation
//! invariance over finding sets.

use rx_safety_engine::{
    safety_score, InteractionFinding, InteractionRule, Severity, MAX_SCORE,
};

fn interaction(a: &str, b: &str, severity: Severity) -> InteractionFinding {
    let rule = InteractionRule {
        severity,
        description: format!("{a} x {b}"),
        recommendation: "monitor".to_string(),
        references: Vec::new(),
    };
    InteractionFinding::drug_drug(a, b, &rule)
}

#[test]
fn empty_finding_set_scores_ten() {
    assert_eq!(safety_score(&[]), MAX_SCORE);
}

#[test]
fn score_never_leaves_bounds() {
    let severities = [
        Severity::Mild,
        Severity::Moderate,
        Severity::Severe,
        Severity::Critical,
    ];

    // Growing adversarial sets across every severity mix
    for n in 0..50 {
        let findings: Vec<_> = (0..n)
            .map(|i| interaction("A", "B", severities[i % severities.len()]))
            .collect();
        let score = safety_score(&findings);
        assert!((0.0..=MAX_SCORE).contains(&score), "n={n} score={score}");
    }
}

#[test]
fn large_adversarial_set_floors_at_zero() {
    let findings: Vec<_> = (0..100)
        .map(|_| InteractionFinding::allergy("ASPIRIN"))
        .collect();
    assert_eq!(safety_score(&findings), 0.0);
}

#[test]
fn deductions_are_additive() {
    let findings = vec![
        interaction("A", "B", Severity::Mild),       // -0.5
        interaction("A", "C", Severity::Moderate),   // -1.0
        interaction("B", "C", Severity::Severe),     // -2.0
        InteractionFinding::contraindication("A", "cond", "m"), // -3.0
    ];
    assert_eq!(safety_score(&findings), 3.5);
}

#[test]
fn score_is_invariant_under_all_rotations() {
    let base = vec![
        interaction("A", "B", Severity::Mild),
        interaction("A", "C", Severity::Critical),
        InteractionFinding::herb_drug(
            "Triphala",
            "METFORMIN",
            &InteractionRule {
                severity: Severity::Moderate,
                description: "d".to_string(),
                recommendation: "r".to_string(),
                references: Vec::new(),
            },
        ),
        InteractionFinding::contraindication("C", "cond", "m"),
        InteractionFinding::allergy("B"),
    ];
    let expected = safety_score(&base);

    for shift in 0..base.len() {
        let mut rotated = base.clone();
        rotated.rotate_left(shift);
        assert_eq!(safety_score(&rotated), expected, "rotation {shift}");
    }
}

#[test]
fn herb_drug_findings_deduct_by_severity_like_drug_drug() {
    let rule = InteractionRule {
        severity: Severity::Severe,
        description: "d".to_string(),
        recommendation: "r".to_string(),
        references: Vec::new(),
    };
    let as_drug = vec![interaction("A", "B", Severity::Severe)];
    let as_herb = vec![InteractionFinding::herb_drug("HerbX", "B", &rule)];
    assert_eq!(safety_score(&as_drug), safety_score(&as_herb));
}

#[test]
fn single_allergy_scores_six_regardless_of_position() {
    let mut findings = vec![
        InteractionFinding::allergy("ASPIRIN"),
        interaction("A", "B", Severity::Moderate),
    ];
    assert_eq!(safety_score(&findings), 5.0);
    findings.swap(0, 1);
    assert_eq!(safety_score(&findings), 5.0);

    assert_eq!(
        safety_score(&[InteractionFinding::allergy("ASPIRIN")]),
        MAX_SCORE - 4.0
    );
}
