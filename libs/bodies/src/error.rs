//! # Error Types
//!
//! Error types for body operations. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - Reading an unknown parameter is an error, never a silent default
//! - Errors include the body name and offending key

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while working with bodies.
///
/// ## Example
///
/// ```rust
/// use bodies::{Body, BodyError, BodyKind};
///
/// let sphere = Body::create(BodyKind::Sphere, None);
/// match sphere.get("lado") {
///     Ok(value) => println!("lado = {value}"),
///     Err(BodyError::NotFound { body, key }) => assert_eq!((body, key.as_str()), ("esfera", "lado")),
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    /// The requested parameter key is not one of the body's fixed keys.
    #[error("Parameter '{key}' not found on body '{body}'")]
    NotFound {
        /// Name of the body that was queried
        body: &'static str,
        /// Key that was requested
        key: String,
    },

    /// The requested body kind is not compiled in.
    #[error("Unknown body kind: {0}")]
    UnknownKind(String),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for body operations.
pub type BodyResult<T> = Result<T, BodyError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = BodyError::NotFound {
            body: "cubo",
            key: "radio".to_string(),
        };
        assert!(err.to_string().contains("radio"));
        assert!(err.to_string().contains("cubo"));

        let kind_err = BodyError::UnknownKind("torus".to_string());
        assert!(kind_err.to_string().contains("torus"));
    }

    /// Test error types are Send + Sync for use behind UI callbacks.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BodyError>();
    }
}
