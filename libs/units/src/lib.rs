//! Unit conversion for the volumetric calculator.
//!
//! Each physical [`Dimension`] has one base unit (m, m2, m3) and a scale
//! table giving how many of each unit make up one base unit. Every
//! conversion goes through the base unit; there is no pairwise table.
//!
//! ```
//! use units::{convert_length, convert_volume};
//!
//! assert_eq!(convert_length(1000.0, "m", "km").unwrap(), 1.0);
//! assert_eq!(convert_volume(1.0, "m3", "l").unwrap(), 1000.0);
//! assert!(convert_length(1.0, "xyz", "m").is_err());
//! ```
//!
//! Only bare unit codes are accepted. Labels such as `"km-Kilómetros"` must be
//! split by the caller.

pub mod convert;
pub mod dimension;
pub mod error;
pub mod table;

pub use convert::{
    convert, convert_area, convert_length, convert_volume, from_base, scale, to_base, units,
};
pub use dimension::Dimension;
pub use error::{UnitError, UnitResult};
pub use table::{ScaleTable, UnitSpec};
