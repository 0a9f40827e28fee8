//! Parsed representation of a medication shorthand line.

/// A medication order as written in shorthand, before any code resolution.
///
/// This is the direct structural reading of the input line. The drug and
/// frequency codes are stored lowercased and unresolved; whether they name
/// a real drug or a known dosing schedule is decided by the consuming
/// crate's knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShorthandOrder {
    /// Shorthand drug code, lowercased (e.g. `"metf"`).
    pub drug_code: String,
    /// Numeric strength as written (unit is implied by the drug, e.g. mg).
    pub strength: u32,
    /// Frequency code, lowercased (e.g. `"bd"`).
    pub frequency_code: String,
    /// Treatment duration in days (the `30` of `30d`).
    pub duration_days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_order_equality() {
        let a = ShorthandOrder {
            drug_code: "metf".to_string(),
            strength: 1000,
            frequency_code: "bd".to_string(),
            duration_days: 30,
        };
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[cfg(feature = "serde")]
    mod wire_format {
        use super::*;

        #[test]
        fn test_shorthand_order_round_trips() {
            let order = ShorthandOrder {
                drug_code: "metf".to_string(),
                strength: 1000,
                frequency_code: "bd".to_string(),
                duration_days: 30,
            };
            let json = serde_json::to_string(&order).unwrap();
            assert!(json.contains("\"drug_code\":\"metf\""));
            let back: ShorthandOrder = serde_json::from_str(&json).unwrap();
            assert_eq!(back, order);
        }
    }
}
