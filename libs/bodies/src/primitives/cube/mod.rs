//! Cube primitive parameterized by its side length.

use config::constants::DEFAULT_PARAMETER;

use super::Solid;

/// Cube configured via its side length (`"lado"`).
///
/// # Examples
/// ```
/// use bodies::{Cube, Solid};
///
/// let cube = Cube::new(2.0);
/// assert_eq!(cube.volume(), 8.0);
/// assert_eq!(cube.surface(), 24.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    side: f64,
}

impl Cube {
    /// Body name.
    pub const NAME: &'static str = "cubo";

    /// Parameter key holding the side length.
    pub const SIDE: &'static str = "lado";

    const KEYS: &'static [&'static str] = &[Self::SIDE];

    /// Creates a cube with the given side length.
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    /// Returns the side length.
    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new(DEFAULT_PARAMETER)
    }
}

impl Solid for Cube {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parameter_keys(&self) -> &'static [&'static str] {
        Self::KEYS
    }

    fn parameter(&self, key: &str) -> Option<f64> {
        (key == Self::SIDE).then_some(self.side)
    }

    fn parameter_mut(&mut self, key: &str) -> Option<&mut f64> {
        if key == Self::SIDE {
            Some(&mut self.side)
        } else {
            None
        }
    }

    fn volume(&self) -> f64 {
        self.side.powi(3)
    }

    fn surface(&self) -> f64 {
        6.0 * self.side.powi(2)
    }
}

#[cfg(test)]
mod tests;
