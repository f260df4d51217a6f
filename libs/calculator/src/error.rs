//! # Error Types
//!
//! Session errors. Body and unit errors pass through unchanged.

use bodies::BodyError;
use thiserror::Error;
use units::UnitError;

/// Errors raised by the calculator session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// Form input that is not a non-negative number.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation needed a body but none is selected.
    #[error("No body selected")]
    NoBodySelected,

    /// Error from the body model.
    #[error(transparent)]
    Body(#[from] BodyError),

    /// Error from the unit converter.
    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Result type alias for session operations.
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use units::Dimension;

    #[test]
    fn test_wrapped_errors_keep_their_message() {
        let err: CalculatorError = UnitError::InvalidUnit {
            dimension: Dimension::Area,
            unit: "km2".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid area unit: 'km2'");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CalculatorError>();
    }
}
