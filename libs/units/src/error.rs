//! # Error Types
//!
//! Conversion has exactly one failure mode: a unit code outside the fixed
//! table for its dimension. There are no partial conversions or fallbacks.

use thiserror::Error;

use crate::dimension::Dimension;

/// Errors raised by unit conversion.
///
/// ## Example
///
/// ```rust
/// use units::{convert_area, Dimension, UnitError};
///
/// let err = convert_area(5.0, "m2", "km2").unwrap_err();
/// assert_eq!(
///     err,
///     UnitError::InvalidUnit { dimension: Dimension::Area, unit: "km2".to_string() }
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// The unit code is not in the table for `dimension`.
    #[error("Invalid {dimension} unit: '{unit}'")]
    InvalidUnit {
        /// Dimension whose table was consulted
        dimension: Dimension,
        /// Code that was not found
        unit: String,
    },
}

/// Result type alias for unit conversion.
pub type UnitResult<T> = Result<T, UnitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UnitError::InvalidUnit {
            dimension: Dimension::Length,
            unit: "xyz".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid length unit: 'xyz'");
    }
}
