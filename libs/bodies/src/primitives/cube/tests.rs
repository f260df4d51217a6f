//! Tests for the cube primitive.
//!
//! These tests verify that the cube primitive:
//! - Applies the closed-form formulas
//! - Exposes exactly one parameter key
//! - Leaves non-positive sides to the caller

use super::*;

/// Side 2 gives volume 8 and surface 24.
#[test]
fn test_cube_side_two() {
    let c = Cube::new(2.0);
    assert_eq!(c.volume(), 8.0);
    assert_eq!(c.surface(), 24.0);
}

/// A unit cube has unit volume and six unit faces.
#[test]
fn test_cube_unit() {
    let c = Cube::new(1.0);
    assert_eq!(c.volume(), 1.0);
    assert_eq!(c.surface(), 6.0);
}

/// Fractional sides follow the same formulas.
#[test]
fn test_cube_fractional_side() {
    let c = Cube::new(0.5);
    assert_eq!(c.volume(), 0.125);
    assert_eq!(c.surface(), 1.5);
}

/// Zero is the default and yields empty results.
#[test]
fn test_cube_default_is_zero() {
    let c = Cube::default();
    assert_eq!(c.side(), 0.0);
    assert_eq!(c.volume(), 0.0);
    assert_eq!(c.surface(), 0.0);
}

/// Negative sides are not rejected.
#[test]
fn test_cube_negative_side_propagates() {
    let c = Cube::new(-3.0);
    assert_eq!(c.volume(), -27.0);
    assert_eq!(c.surface(), 54.0);
}

/// Only `lado` is a parameter of the cube.
#[test]
fn test_cube_parameter_keys() {
    let c = Cube::new(1.0);
    assert_eq!(c.parameter_keys(), &["lado"]);
    assert_eq!(c.parameter("lado"), Some(1.0));
    assert_eq!(c.parameter("radio"), None);
}
