//! # Binding Errors
//!
//! Errors surfaced by the `_internal` helpers. Exported functions turn them
//! into JavaScript strings.

use calculator::CalculatorError;
use thiserror::Error;
use units::UnitError;

/// Errors raised at the JavaScript boundary.
#[derive(Error, Debug)]
pub enum BindingError {
    /// Dimension name other than `length`, `area` or `volume`.
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    /// Error from the calculator session.
    #[error(transparent)]
    Calculator(#[from] CalculatorError),

    /// Error from the unit converter.
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// Result could not be encoded as JSON.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for binding helpers.
pub type BindingResult<T> = Result<T, BindingError>;
