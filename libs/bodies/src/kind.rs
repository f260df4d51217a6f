//! Closed set of body kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BodyError;
use crate::primitives::{cube::Cube, sphere::Sphere};

/// Body kinds compiled into the calculator, in menu order.
///
/// Parsing accepts the English identifier and the Spanish body name,
/// ignoring case.
///
/// # Examples
/// ```
/// use bodies::BodyKind;
///
/// assert_eq!("sphere".parse::<BodyKind>().unwrap(), BodyKind::Sphere);
/// assert_eq!("Cubo".parse::<BodyKind>().unwrap(), BodyKind::Cube);
/// assert!("torus".parse::<BodyKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// Sphere with a single radius parameter.
    Sphere,
    /// Cube with a single side parameter.
    Cube,
}

impl BodyKind {
    /// Every kind, in the order the presentation layer lists them.
    pub const ALL: [BodyKind; 2] = [BodyKind::Sphere, BodyKind::Cube];

    /// Lowercase body name (`"esfera"`, `"cubo"`).
    pub fn name(self) -> &'static str {
        match self {
            BodyKind::Sphere => Sphere::NAME,
            BodyKind::Cube => Cube::NAME,
        }
    }

    /// Stable English identifier (`"sphere"`, `"cube"`).
    pub fn id(self) -> &'static str {
        match self {
            BodyKind::Sphere => "sphere",
            BodyKind::Cube => "cube",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BodyKind {
    type Err = BodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        BodyKind::ALL
            .into_iter()
            .find(|kind| {
                needle.eq_ignore_ascii_case(kind.id()) || needle.eq_ignore_ascii_case(kind.name())
            })
            .ok_or_else(|| BodyError::UnknownKind(s.to_string()))
    }
}
