//! Error types for the safety engine.

use rx_shorthand::ShorthandError;
use thiserror::Error;

use crate::medication::PractitionerSystem;

/// Errors that can occur during engine operations.
///
/// All variants are recoverable and caller-visible; none are process-fatal.
/// [`Shorthand`](EngineError::Shorthand) and
/// [`UnknownDrugCode`](EngineError::UnknownDrugCode) are distinct here but
/// must be reported to clients as the same "cannot expand shorthand"
/// outcome; the transport layer maps both to the same 400-class response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The shorthand text does not match the grammar.
    #[error("cannot expand shorthand: {0}")]
    Shorthand(#[from] ShorthandError),

    /// The shorthand parsed, but the drug code is not in the knowledge base.
    #[error("cannot expand shorthand: unknown drug code '{0}'")]
    UnknownDrugCode(String),

    /// A traditional-system practitioner attempted to order a scheduled drug.
    #[error("{system} practitioners cannot prescribe Schedule H/X drugs")]
    ScopeOfPractice {
        /// The practitioner's system.
        system: PractitionerSystem,
    },
}

/// Result type for engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_of_practice_message_names_system() {
        let err = EngineError::ScopeOfPractice {
            system: PractitionerSystem::Ayurveda,
        };
        assert_eq!(
            err.to_string(),
            "Ayurveda practitioners cannot prescribe Schedule H/X drugs"
        );
    }

    #[test]
    fn test_unknown_drug_code_message() {
        let err = EngineError::UnknownDrugCode("unkn".to_string());
        assert_eq!(err.to_string(), "cannot expand shorthand: unknown drug code 'unkn'");
    }

    #[test]
    fn test_error_from_shorthand_error() {
        let parse_err = rx_shorthand::parse("bad input").unwrap_err();
        let err: EngineError = parse_err.into();
        assert!(matches!(err, EngineError::Shorthand(_)));
        assert!(err.to_string().starts_with("cannot expand shorthand"));
    }
}
