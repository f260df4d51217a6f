//! Sphere primitive parameterized by its radius.

use std::f64::consts::PI;

use config::constants::DEFAULT_PARAMETER;

use super::Solid;

/// Sphere configured via its radius (`"radio"`).
///
/// Negative radii are not rejected here; input validation belongs to the
/// caller and the formulas are applied as-is.
///
/// # Examples
/// ```
/// use bodies::{Solid, Sphere};
///
/// let sphere = Sphere::new(3.0);
/// let expected = 4.0 / 3.0 * std::f64::consts::PI * 27.0;
/// assert!((sphere.volume() - expected).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Body name.
    pub const NAME: &'static str = "esfera";

    /// Parameter key holding the radius.
    pub const RADIUS: &'static str = "radio";

    const KEYS: &'static [&'static str] = &[Self::RADIUS];

    /// Creates a sphere with the given radius.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Returns the radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(DEFAULT_PARAMETER)
    }
}

impl Solid for Sphere {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parameter_keys(&self) -> &'static [&'static str] {
        Self::KEYS
    }

    fn parameter(&self, key: &str) -> Option<f64> {
        (key == Self::RADIUS).then_some(self.radius)
    }

    fn parameter_mut(&mut self, key: &str) -> Option<&mut f64> {
        if key == Self::RADIUS {
            Some(&mut self.radius)
        } else {
            None
        }
    }

    /// `4/3 * pi * r^3`
    fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }

    /// `4 * pi * r^2`
    fn surface(&self) -> f64 {
        4.0 * PI * self.radius.powi(2)
    }
}
