//! Primitive bodies and the capability set they share.
//!
//! Each primitive owns its fixed parameter set and implements [`Solid`].

pub mod cube;
pub mod sphere;

/// Capability set every body kind provides.
///
/// Parameter keys are fixed per implementation; only values change.
///
/// # Examples
/// ```
/// use bodies::{Solid, Sphere};
///
/// let sphere = Sphere::new(1.0);
/// assert_eq!(sphere.parameter_keys(), &["radio"]);
/// assert_eq!(sphere.parameter("radio"), Some(1.0));
/// assert_eq!(sphere.parameter("lado"), None);
/// ```
pub trait Solid {
    /// Lowercase body name, also used for image lookup.
    fn name(&self) -> &'static str;

    /// Fixed parameter keys in form order.
    fn parameter_keys(&self) -> &'static [&'static str];

    /// Current value of `key`, or `None` when the key is not part of this body.
    fn parameter(&self, key: &str) -> Option<f64>;

    /// Mutable slot for `key`, or `None` when the key is not part of this body.
    fn parameter_mut(&mut self, key: &str) -> Option<&mut f64>;

    /// Volume in cubic units of the parameters.
    fn volume(&self) -> f64;

    /// Surface area in square units of the parameters.
    fn surface(&self) -> f64;
}
