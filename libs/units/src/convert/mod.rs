//! Conversion functions. All of them are pure functions of their arguments.

use crate::dimension::Dimension;
use crate::error::UnitResult;

/// Units of `unit` per one base unit of `dimension`.
///
/// # Errors
/// [`UnitError::InvalidUnit`](crate::UnitError::InvalidUnit) for codes outside
/// the dimension's table.
pub fn scale(dimension: Dimension, unit: &str) -> UnitResult<f64> {
    dimension.table().scale(unit)
}

/// `(code, name)` pairs of a dimension in menu order.
///
/// # Examples
/// ```
/// use units::{units, Dimension};
///
/// let labels: Vec<String> = units(Dimension::Length)
///     .map(|(code, name)| format!("{code}-{name}"))
///     .collect();
/// assert_eq!(labels[0], "km-Kilómetros");
/// ```
pub fn units(dimension: Dimension) -> impl Iterator<Item = (&'static str, &'static str)> {
    dimension.table().units.iter().map(|unit| (unit.code, unit.name))
}

/// Expresses `value` (in `unit`) in the dimension's base unit.
///
/// # Examples
/// ```
/// use units::{to_base, Dimension};
///
/// assert_eq!(to_base(Dimension::Length, 250.0, "cm").unwrap(), 2.5);
/// ```
pub fn to_base(dimension: Dimension, value: f64, unit: &str) -> UnitResult<f64> {
    Ok(value / scale(dimension, unit)?)
}

/// Expresses `value` (in the base unit) in `unit`.
///
/// # Examples
/// ```
/// use units::{from_base, Dimension};
///
/// assert_eq!(from_base(Dimension::Volume, 2.0, "l").unwrap(), 2000.0);
/// ```
pub fn from_base(dimension: Dimension, value: f64, unit: &str) -> UnitResult<f64> {
    Ok(value * scale(dimension, unit)?)
}

/// Converts `value` from `from` to `to`, routing through the base unit.
///
/// Both codes are validated before any arithmetic happens.
pub fn convert(dimension: Dimension, value: f64, from: &str, to: &str) -> UnitResult<f64> {
    let from_scale = scale(dimension, from)?;
    let to_scale = scale(dimension, to)?;
    Ok(value / from_scale * to_scale)
}

/// Converts a length between any two of `m km hm dam dm cm mm inch`.
///
/// # Examples
/// ```
/// use units::convert_length;
///
/// assert_eq!(convert_length(1.0, "km", "m").unwrap(), 1000.0);
/// let inches = convert_length(1.0, "m", "inch").unwrap();
/// assert!((inches - 39.37007874).abs() < 1e-9);
/// ```
pub fn convert_length(value: f64, from: &str, to: &str) -> UnitResult<f64> {
    convert(Dimension::Length, value, from, to)
}

/// Converts an area. Only the identity conversion `m2 -> m2` is available.
///
/// # Examples
/// ```
/// use units::convert_area;
///
/// assert_eq!(convert_area(5.0, "m2", "m2").unwrap(), 5.0);
/// assert!(convert_area(5.0, "m2", "km2").is_err());
/// ```
pub fn convert_area(value: f64, from: &str, to: &str) -> UnitResult<f64> {
    convert(Dimension::Area, value, from, to)
}

/// Converts a volume between any two of `m3 l dm3 ml cm3 mm3`.
///
/// # Examples
/// ```
/// use units::convert_volume;
///
/// assert_eq!(convert_volume(1.0, "l", "m3").unwrap(), 0.001);
/// assert_eq!(convert_volume(1.0, "m3", "mm3").unwrap(), 1e9);
/// ```
pub fn convert_volume(value: f64, from: &str, to: &str) -> UnitResult<f64> {
    convert(Dimension::Volume, value, from, to)
}
