//! # Config Crate
//!
//! Centralized configuration constants for the volumetric calculator.
//! Display precision, labels and asset locations live here so that the
//! body model, the unit converter and the calculator session agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DISPLAY_DECIMALS, FIXED_NOTATION_LIMIT, SCIENTIFIC_THRESHOLD};
//!
//! // Results between the two limits are shown with fixed decimals
//! let volume = 8.0;
//! assert!(volume > SCIENTIFIC_THRESHOLD);
//! assert!(volume < FIXED_NOTATION_LIMIT);
//! assert_eq!(DISPLAY_DECIMALS, 4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
