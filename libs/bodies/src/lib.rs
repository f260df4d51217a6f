//! Geometric body model for the volumetric calculator.
//!
//! A body is a named shape with a fixed set of numeric parameters. The set of
//! kinds is closed: every kind is a variant of [`Body`] backed by a primitive
//! implementing [`Solid`].
//!
//! ```
//! use bodies::{Body, BodyKind};
//!
//! let mut cube = Body::create(BodyKind::Cube, None);
//! cube.set("lado", 2.0);
//! assert_eq!(cube.volume(), 8.0);
//! assert_eq!(cube.surface(), 24.0);
//! assert_eq!(cube.display_name(), "Cubo");
//! ```

pub mod body;
pub mod error;
pub mod kind;
pub mod primitives;

pub use body::{Body, BodySnapshot};
pub use error::{BodyError, BodyResult};
pub use kind::BodyKind;
pub use primitives::{cube::Cube, sphere::Sphere, Solid};
