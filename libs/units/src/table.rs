//! Base-unit-relative scale tables.
//!
//! A unit's `scale` is how many of that unit make up one base unit, so
//! `from_base(v, u) = v * scale(u)` and `to_base(v, u) = v / scale(u)`.

use serde::Serialize;

use crate::dimension::Dimension;
use crate::error::{UnitError, UnitResult};

/// One row of a scale table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitSpec {
    /// Canonical bare code (`"km"`).
    pub code: &'static str,
    /// Alternate spellings of the same code (`"m²"` for `"m2"`).
    pub aliases: &'static [&'static str],
    /// Spanish label shown next to the code.
    pub name: &'static str,
    /// Units per one base unit.
    pub scale: f64,
}

impl UnitSpec {
    const fn new(code: &'static str, name: &'static str, scale: f64) -> Self {
        Self {
            code,
            aliases: &[],
            name,
            scale,
        }
    }

    const fn with_aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    /// True when `code` is this unit's code or one of its aliases.
    pub fn matches(&self, code: &str) -> bool {
        self.code == code || self.aliases.iter().any(|alias| *alias == code)
    }
}

/// Scale table for one dimension.
///
/// # Examples
/// ```
/// use units::Dimension;
///
/// let table = Dimension::Length.table();
/// assert_eq!(table.scale("cm").unwrap(), 100.0);
/// assert!(table.scale("km2").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleTable {
    /// Dimension the table belongs to.
    pub dimension: Dimension,
    /// Code of the base unit (scale 1).
    pub base: &'static str,
    /// Rows in menu order.
    pub units: &'static [UnitSpec],
}

impl ScaleTable {
    /// Finds the row for `code`.
    pub fn lookup(&self, code: &str) -> Option<&'static UnitSpec> {
        self.units.iter().find(|unit| unit.matches(code))
    }

    /// Scale factor for `code`.
    ///
    /// # Errors
    /// [`UnitError::InvalidUnit`] when `code` is not in the table.
    pub fn scale(&self, code: &str) -> UnitResult<f64> {
        self.lookup(code)
            .map(|unit| unit.scale)
            .ok_or_else(|| UnitError::InvalidUnit {
                dimension: self.dimension,
                unit: code.to_string(),
            })
    }

    /// Canonical codes in menu order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        self.units.iter().map(|unit| unit.code)
    }
}

// =============================================================================
// TABLES
// =============================================================================

/// Length units relative to meters.
pub static LENGTH: ScaleTable = ScaleTable {
    dimension: Dimension::Length,
    base: "m",
    units: &[
        UnitSpec::new("km", "Kilómetros", 0.001),
        UnitSpec::new("hm", "Hectómetros", 0.01),
        UnitSpec::new("dam", "Decámetros", 0.1),
        UnitSpec::new("m", "Metros", 1.0),
        UnitSpec::new("dm", "Decímetros", 10.0),
        UnitSpec::new("cm", "Centímetros", 100.0),
        UnitSpec::new("mm", "Milímetros", 1000.0),
        UnitSpec::new("inch", "Pulgadas", 39.370_078_74),
    ],
};

/// Area units relative to square meters.
///
/// Only the base unit is available; any other code is rejected.
pub static AREA: ScaleTable = ScaleTable {
    dimension: Dimension::Area,
    base: "m2",
    units: &[UnitSpec::new("m2", "Metro cuadrado", 1.0).with_aliases(&["m²"])],
};

/// Volume units relative to cubic meters.
pub static VOLUME: ScaleTable = ScaleTable {
    dimension: Dimension::Volume,
    base: "m3",
    units: &[
        UnitSpec::new("m3", "Metro cúbico", 1.0).with_aliases(&["m³"]),
        UnitSpec::new("l", "Litro", 1_000.0),
        UnitSpec::new("dm3", "Decímetro cúbico", 1_000.0).with_aliases(&["dm³"]),
        UnitSpec::new("ml", "Mililitro", 1_000_000.0),
        UnitSpec::new("cm3", "Centímetro cúbico", 1_000_000.0).with_aliases(&["cm³"]),
        UnitSpec::new("mm3", "Milímetro cúbico", 1_000_000_000.0).with_aliases(&["mm³"]),
    ],
};
