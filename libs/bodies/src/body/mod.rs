//! The [`Body`] enum: one variant per compiled-in primitive.
//!
//! Reads are strict (unknown keys fail with [`BodyError::NotFound`]) while
//! [`Body::set`] silently ignores unknown keys. [`Body::try_set`] is the
//! strict writer for callers that want to surface typos.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::constants::IMAGE_EXTENSION;
use serde::{Deserialize, Serialize};

use crate::error::{BodyError, BodyResult};
use crate::kind::BodyKind;
use crate::primitives::{cube::Cube, sphere::Sphere, Solid};

/// A geometric body with a fixed parameter set.
///
/// Serializes as `{"name": "<body name>", "parameters": {<key>: <value>}}`.
///
/// # Examples
/// ```
/// use bodies::{Body, BodyKind};
///
/// let mut sphere = Body::create(BodyKind::Sphere, None);
/// sphere.set("radio", 3.0);
/// assert_eq!(sphere.get("radio"), Ok(3.0));
/// assert!(sphere.get("lado").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodySnapshot", into = "BodySnapshot")]
pub enum Body {
    /// A sphere.
    Sphere(Sphere),
    /// A cube.
    Cube(Cube),
}

impl Body {
    /// Creates a body of `kind` with default parameters, then applies
    /// `initial` using the same policy as [`Body::set`].
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeMap;
    /// use bodies::{Body, BodyKind};
    ///
    /// let initial = BTreeMap::from([("lado".to_string(), 3.0)]);
    /// let cube = Body::create(BodyKind::Cube, Some(&initial));
    /// assert_eq!(cube.volume(), 27.0);
    /// ```
    pub fn create(kind: BodyKind, initial: Option<&BTreeMap<String, f64>>) -> Self {
        let mut body = match kind {
            BodyKind::Sphere => Body::Sphere(Sphere::default()),
            BodyKind::Cube => Body::Cube(Cube::default()),
        };
        for (key, value) in initial.into_iter().flatten() {
            body.set(key, *value);
        }
        body
    }

    /// One default-valued body per kind, in menu order.
    pub fn catalog() -> Vec<Body> {
        BodyKind::ALL
            .into_iter()
            .map(|kind| Body::create(kind, None))
            .collect()
    }

    /// Returns the kind of this body.
    pub fn kind(&self) -> BodyKind {
        match self {
            Body::Sphere(_) => BodyKind::Sphere,
            Body::Cube(_) => BodyKind::Cube,
        }
    }

    /// Lowercase body name.
    pub fn name(&self) -> &'static str {
        self.solid().name()
    }

    /// Capitalized body name for labels (`"Esfera"`, `"Cubo"`).
    pub fn display_name(&self) -> String {
        capitalize(self.name())
    }

    /// Fixed parameter keys in form order.
    pub fn parameter_keys(&self) -> &'static [&'static str] {
        self.solid().parameter_keys()
    }

    /// Current `(key, value)` pairs in form order.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        let solid = self.solid();
        solid
            .parameter_keys()
            .iter()
            .filter_map(|key| solid.parameter(key).map(|value| (*key, value)))
            .collect()
    }

    /// Returns the value of `key`.
    ///
    /// # Errors
    /// [`BodyError::NotFound`] when `key` is not one of this body's keys.
    pub fn get(&self, key: &str) -> BodyResult<f64> {
        self.solid()
            .parameter(key)
            .ok_or_else(|| self.not_found(key))
    }

    /// Sets `key` to `value`; does nothing when `key` is not one of this
    /// body's keys.
    ///
    /// # Examples
    /// ```
    /// use bodies::{Body, BodyKind};
    ///
    /// let mut cube = Body::create(BodyKind::Cube, None);
    /// cube.set("lado", 2.0);
    /// cube.set("nonexistent_key", 42.0);
    /// assert_eq!(cube.parameters(), vec![("lado", 2.0)]);
    /// ```
    pub fn set(&mut self, key: &str, value: f64) {
        if let Some(slot) = self.solid_mut().parameter_mut(key) {
            *slot = value;
        }
    }

    /// Sets `key` to `value`, failing on unknown keys.
    ///
    /// # Errors
    /// [`BodyError::NotFound`] when `key` is not one of this body's keys; the
    /// body is left untouched.
    pub fn try_set(&mut self, key: &str, value: f64) -> BodyResult<()> {
        if let Some(slot) = self.solid_mut().parameter_mut(key) {
            *slot = value;
            return Ok(());
        }
        Err(self.not_found(key))
    }

    /// Volume computed from the current parameters.
    pub fn volume(&self) -> f64 {
        self.solid().volume()
    }

    /// Surface area computed from the current parameters.
    pub fn surface(&self) -> f64 {
        self.solid().surface()
    }

    /// Path of the decorative image for this body inside `dir`.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use bodies::{Body, BodyKind};
    ///
    /// let sphere = Body::create(BodyKind::Sphere, None);
    /// assert_eq!(sphere.image_path("images"), Path::new("images/esfera.png"));
    /// ```
    pub fn image_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref()
            .join(self.name().to_lowercase())
            .with_extension(IMAGE_EXTENSION)
    }

    /// Plain data view used for serialization.
    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            name: self.name().to_string(),
            parameters: self
                .parameters()
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }

    fn solid(&self) -> &dyn Solid {
        match self {
            Body::Sphere(sphere) => sphere,
            Body::Cube(cube) => cube,
        }
    }

    fn solid_mut(&mut self) -> &mut dyn Solid {
        match self {
            Body::Sphere(sphere) => sphere,
            Body::Cube(cube) => cube,
        }
    }

    fn not_found(&self, key: &str) -> BodyError {
        BodyError::NotFound {
            body: self.name(),
            key: key.to_string(),
        }
    }
}

/// Serialized form of a [`Body`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    /// Body name or kind identifier.
    pub name: String,
    /// Parameter values keyed by parameter name.
    #[serde(default)]
    pub parameters: BTreeMap<String, f64>,
}

impl From<Body> for BodySnapshot {
    fn from(body: Body) -> Self {
        body.snapshot()
    }
}

impl TryFrom<BodySnapshot> for Body {
    type Error = BodyError;

    fn try_from(snapshot: BodySnapshot) -> Result<Self, Self::Error> {
        let kind: BodyKind = snapshot.name.parse()?;
        Ok(Body::create(kind, Some(&snapshot.parameters)))
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests;
