//! The calculator session.
//!
//! Parameters are entered in the selected length unit. Results are computed
//! in base units and then expressed in the selected area and volume units.

use std::path::{Path, PathBuf};

use bodies::{Body, BodyKind};
use config::constants::{GlobalConfig, GREETING, ICON_FILE, IMAGES_DIR, WINDOW_TITLE};
use serde::{Deserialize, Serialize};
use units::Dimension;

use crate::error::{CalculatorError, CalculatorResult};
use crate::format::format_value_with;
use crate::input::parse_entry;

/// Units used for input parameters and displayed results.
///
/// # Examples
/// ```
/// use calculator::UnitSelection;
///
/// let units = UnitSelection::default();
/// assert_eq!(units.length, "m");
/// assert_eq!(units.area, "m2");
/// assert_eq!(units.volume, "m3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSelection {
    /// Unit the body parameters are entered in.
    pub length: String,
    /// Unit the surface is shown in.
    pub area: String,
    /// Unit the volume is shown in.
    pub volume: String,
}

impl UnitSelection {
    /// Builds a selection from three unit codes without validating them.
    pub fn new(
        length: impl Into<String>,
        area: impl Into<String>,
        volume: impl Into<String>,
    ) -> Self {
        Self {
            length: length.into(),
            area: area.into(),
            volume: volume.into(),
        }
    }

    fn validate(&self) -> CalculatorResult<()> {
        units::scale(Dimension::Length, &self.length)?;
        units::scale(Dimension::Area, &self.area)?;
        units::scale(Dimension::Volume, &self.volume)?;
        Ok(())
    }
}

impl Default for UnitSelection {
    fn default() -> Self {
        Self::new(
            Dimension::Length.base_unit(),
            Dimension::Area.base_unit(),
            Dimension::Volume.base_unit(),
        )
    }
}

/// Volume and surface in the selected units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Results {
    /// Volume in the selected volume unit.
    pub volume: f64,
    /// Surface in the selected area unit.
    pub surface: f64,
}

impl Results {
    /// Formats both values for display.
    pub fn format(&self, config: &GlobalConfig) -> FormattedResults {
        FormattedResults {
            volume: format_value_with(self.volume, config),
            surface: format_value_with(self.surface, config),
        }
    }

    /// Formats both values with the default display settings.
    pub fn display(&self) -> FormattedResults {
        self.format(&GlobalConfig::default())
    }
}

/// Display strings for [`Results`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedResults {
    /// Formatted volume.
    pub volume: String,
    /// Formatted surface.
    pub surface: String,
}

/// Holds the selected body and units between form events.
#[derive(Debug, Clone)]
pub struct Calculator {
    config: GlobalConfig,
    body: Option<Body>,
    units: UnitSelection,
    images_dir: PathBuf,
}

impl Calculator {
    /// Creates a session with default configuration and no body selected.
    pub fn new() -> Self {
        Self::with_config(GlobalConfig::default())
    }

    /// Creates a session using `config` for result formatting.
    pub fn with_config(config: GlobalConfig) -> Self {
        Self {
            config,
            body: None,
            units: UnitSelection::default(),
            images_dir: PathBuf::from(IMAGES_DIR),
        }
    }

    /// Looks for body images in `dir` instead of the default directory.
    pub fn with_images_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.images_dir = dir.into();
        self
    }

    /// Message to show while no body is selected.
    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    /// Window title for the presentation layer.
    pub fn title(&self) -> &'static str {
        WINDOW_TITLE
    }

    /// Path of the window icon, if that file exists.
    pub fn icon(&self) -> Option<PathBuf> {
        let path = PathBuf::from(ICON_FILE);
        if path.is_file() {
            Some(path)
        } else {
            tracing::debug!(path = %path.display(), "window icon not found");
            None
        }
    }

    /// Formatting configuration.
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Currently selected body.
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Currently selected units.
    pub fn units(&self) -> &UnitSelection {
        &self.units
    }

    /// Selects a fresh, default-valued body of `kind`, discarding the
    /// previous one.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn select(&mut self, kind: BodyKind) -> &Body {
        self.body.insert(Body::create(kind, None))
    }

    /// Selects a body by kind identifier or body name.
    ///
    /// # Errors
    /// [`CalculatorError::Body`] when `name` is not a known kind; the current
    /// selection is kept.
    pub fn select_by_name(&mut self, name: &str) -> CalculatorResult<&Body> {
        let kind: BodyKind = name.parse()?;
        Ok(self.select(kind))
    }

    /// Clears the selection.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.body = None;
    }

    /// Replaces the unit selection after validating every code.
    ///
    /// # Errors
    /// [`CalculatorError::Unit`] for the first unknown code; the previous
    /// selection is kept.
    pub fn set_units(&mut self, selection: UnitSelection) -> CalculatorResult<()> {
        if let Err(err) = selection.validate() {
            tracing::warn!(%err, ?selection, "rejected unit selection");
            return Err(err);
        }
        tracing::debug!(?selection, "units changed");
        self.units = selection;
        Ok(())
    }

    /// Applies the text of a parameter field and returns refreshed results.
    ///
    /// Unknown keys are ignored like [`Body::set`] does, but logged.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidArgument`] for malformed input and
    /// [`CalculatorError::NoBodySelected`] without a body. In both cases the
    /// body is unchanged.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn change_value(&mut self, key: &str, text: &str) -> CalculatorResult<Results> {
        let value = match parse_entry(text) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(%err, "rejected entry");
                return Err(err);
            }
        };
        let body = self.body.as_mut().ok_or(CalculatorError::NoBodySelected)?;
        if let Err(err) = body.try_set(key, value) {
            tracing::warn!(%err, "ignoring unknown parameter");
        }
        self.results()
    }

    /// Volume and surface of the selected body in the selected units.
    ///
    /// # Errors
    /// [`CalculatorError::NoBodySelected`] without a body.
    pub fn results(&self) -> CalculatorResult<Results> {
        let body = self.body.as_ref().ok_or(CalculatorError::NoBodySelected)?;
        let mut in_meters = body.clone();
        for (key, value) in body.parameters() {
            in_meters.set(key, units::to_base(Dimension::Length, value, &self.units.length)?);
        }
        Ok(Results {
            volume: units::from_base(Dimension::Volume, in_meters.volume(), &self.units.volume)?,
            surface: units::from_base(Dimension::Area, in_meters.surface(), &self.units.area)?,
        })
    }

    /// [`Calculator::results`] formatted with the session configuration.
    pub fn formatted_results(&self) -> CalculatorResult<FormattedResults> {
        Ok(self.results()?.format(&self.config))
    }

    /// Path of the selected body's image, if that file exists.
    pub fn image(&self) -> Option<PathBuf> {
        let path = self.body.as_ref()?.image_path(&self.images_dir);
        if path.is_file() {
            Some(path)
        } else {
            tracing::debug!(path = %path.display(), "body image not found");
            None
        }
    }

    /// Directory searched for body images.
    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
