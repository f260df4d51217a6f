//! Centralized configuration values shared across the calculator crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// DISPLAY CONSTANTS
// =============================================================================

/// Number of decimals kept when a result is shown in fixed notation.
///
/// # Examples
/// ```
/// use config::constants::DISPLAY_DECIMALS;
/// let shown = format!("{:.*}", DISPLAY_DECIMALS as usize, 1.0 / 3.0);
/// assert_eq!(shown, "0.3333");
/// ```
pub const DISPLAY_DECIMALS: u32 = 4;

/// Results at or below this magnitude switch to scientific notation so that
/// tiny volumes stay readable.
///
/// # Examples
/// ```
/// use config::constants::SCIENTIFIC_THRESHOLD;
/// assert!(0.0001 < SCIENTIFIC_THRESHOLD);
/// ```
pub const SCIENTIFIC_THRESHOLD: f64 = 1.0e-3;

/// Results at or above this magnitude switch to scientific notation; fixed
/// notation would print every integer digit and rounding at
/// [`DISPLAY_DECIMALS`] would overflow for the largest finite values.
///
/// # Examples
/// ```
/// use config::constants::FIXED_NOTATION_LIMIT;
/// assert!((1.0e20_f64) >= FIXED_NOTATION_LIMIT);
/// ```
pub const FIXED_NOTATION_LIMIT: f64 = 1.0e15;

// =============================================================================
// BODY DEFAULTS
// =============================================================================

/// Value every body parameter starts with when a shape is created.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PARAMETER;
/// assert_eq!(DEFAULT_PARAMETER, 0.0);
/// ```
pub const DEFAULT_PARAMETER: f64 = 0.0;

// =============================================================================
// ASSET CONSTANTS
// =============================================================================

/// Directory holding the decorative per-body images.
///
/// Images are looked up as `<IMAGES_DIR>/<lowercased body name>.<IMAGE_EXTENSION>`.
pub const IMAGES_DIR: &str = "images";

/// File extension of the decorative per-body images.
pub const IMAGE_EXTENSION: &str = "png";

/// Window icon file name.
pub const ICON_FILE: &str = "icon.ico";

// =============================================================================
// LABELS
// =============================================================================

/// Title shown by the presentation layer.
pub const WINDOW_TITLE: &str = "Calculadora de volumen";

/// Greeting shown while no body is selected.
///
/// # Examples
/// ```
/// use config::constants::GREETING;
/// assert!(GREETING.contains("volumen"));
/// ```
pub const GREETING: &str =
    "Seleccione una figura del menú desplegable para calcular su volumen";

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of display settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert_eq!(config.display_decimals, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Decimals kept in fixed notation.
    pub display_decimals: u32,
    /// Magnitude at or below which results use scientific notation.
    pub scientific_threshold: f64,
}

impl GlobalConfig {
    /// Upper bound on displayed decimals; `f64` carries ~15 significant digits.
    pub const MAX_DECIMALS: u32 = 15;

    /// Builds a configuration enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(2, 1.0e-2).expect("valid config");
    /// assert_eq!(cfg.display_decimals, 2);
    /// assert!(GlobalConfig::new(40, 1.0e-2).is_err());
    /// ```
    pub fn new(display_decimals: u32, scientific_threshold: f64) -> Result<Self, ConfigError> {
        if display_decimals > Self::MAX_DECIMALS {
            return Err(ConfigError::InvalidDecimals(display_decimals));
        }
        if scientific_threshold < 0.0 || !scientific_threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(scientific_threshold));
        }
        Ok(Self {
            display_decimals,
            scientific_threshold,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            display_decimals: DISPLAY_DECIMALS,
            scientific_threshold: SCIENTIFIC_THRESHOLD,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when more decimals are requested than `f64` can represent.
    InvalidDecimals(u32),
    /// Raised when the scientific threshold is negative or not finite.
    InvalidThreshold(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDecimals(value) => {
                write!(
                    f,
                    "display_decimals must be <= {}: {value}",
                    GlobalConfig::MAX_DECIMALS
                )
            }
            ConfigError::InvalidThreshold(value) => {
                write!(f, "scientific_threshold must be >= 0: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
