//! Form input validation.
//!
//! An empty field means the user is clearing it and counts as zero. Anything
//! else must be a finite number `>= 0`.

use crate::error::{CalculatorError, CalculatorResult};

/// Parses the text of a parameter field.
///
/// # Errors
/// [`CalculatorError::InvalidArgument`] for non-numeric, negative or
/// non-finite input.
///
/// # Examples
/// ```
/// use calculator::parse_entry;
///
/// assert_eq!(parse_entry("").unwrap(), 0.0);
/// assert_eq!(parse_entry("2.5").unwrap(), 2.5);
/// assert!(parse_entry("-1").is_err());
/// assert!(parse_entry("abc").is_err());
/// ```
pub fn parse_entry(text: &str) -> CalculatorResult<f64> {
    if text.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| CalculatorError::InvalidArgument(format!("'{text}' is not a number")))?;
    if !value.is_finite() {
        return Err(CalculatorError::InvalidArgument(format!(
            "'{text}' is not a finite number"
        )));
    }
    if value < 0.0 {
        return Err(CalculatorError::InvalidArgument(format!(
            "'{text}' must be zero or positive"
        )));
    }
    Ok(value)
}

/// Whether `text` is acceptable as the new content of a parameter field.
///
/// # Examples
/// ```
/// use calculator::validate_entry;
///
/// assert!(validate_entry(""));
/// assert!(validate_entry("10"));
/// assert!(!validate_entry("1,5"));
/// ```
pub fn validate_entry(text: &str) -> bool {
    parse_entry(text).is_ok()
}
