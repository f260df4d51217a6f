//! Calculator session for the volumetric calculator.
//!
//! This crate sits between a presentation layer and the pure `bodies` and
//! `units` crates. It owns the selected body, validates form input, applies
//! the selected units and formats results for display.
//!
//! ```
//! use bodies::BodyKind;
//! use calculator::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.select(BodyKind::Cube);
//! let results = calc.change_value("lado", "2").unwrap();
//! assert_eq!(results.volume, 8.0);
//! assert_eq!(results.surface, 24.0);
//! ```
//!
//! # Debugging
//!
//! Call [`init_tracing`] once at startup and enable output with
//! `RUST_LOG=calculator=debug`.

pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod session;

pub use error::{CalculatorError, CalculatorResult};
pub use format::{format_value, format_value_with};
pub use input::{parse_entry, validate_entry};
pub use logging::init_tracing;
pub use session::{Calculator, FormattedResults, Results, UnitSelection};
