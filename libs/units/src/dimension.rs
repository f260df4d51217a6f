//! Physical dimensions handled by the converter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::{ScaleTable, AREA, LENGTH, VOLUME};

/// A physical dimension with its own base unit and scale table.
///
/// # Examples
/// ```
/// use units::Dimension;
///
/// assert_eq!(Dimension::Length.base_unit(), "m");
/// assert_eq!(Dimension::Volume.base_unit(), "m3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Length, base unit meters.
    Length,
    /// Area, base unit square meters.
    Area,
    /// Volume, base unit cubic meters.
    Volume,
}

impl Dimension {
    /// Every dimension.
    pub const ALL: [Dimension; 3] = [Dimension::Length, Dimension::Area, Dimension::Volume];

    /// Scale table for this dimension.
    pub fn table(self) -> &'static ScaleTable {
        match self {
            Dimension::Length => &LENGTH,
            Dimension::Area => &AREA,
            Dimension::Volume => &VOLUME,
        }
    }

    /// Code of the base unit every conversion routes through.
    pub fn base_unit(self) -> &'static str {
        self.table().base
    }

    /// Lowercase English name.
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Area => "area",
            Dimension::Volume => "volume",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
