//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// DISPLAY TESTS
// =============================================================================

#[test]
fn test_display_decimals_matches_results_panel() {
    // Results are rounded to four decimals before display
    assert_eq!(DISPLAY_DECIMALS, 4);
}

#[test]
fn test_fixed_notation_window_is_not_empty() {
    assert!(SCIENTIFIC_THRESHOLD > 0.0);
    assert!(FIXED_NOTATION_LIMIT > SCIENTIFIC_THRESHOLD);
}

#[test]
fn test_rounding_below_limit_stays_finite() {
    let factor = 10f64.powi(GlobalConfig::MAX_DECIMALS as i32);
    assert!((FIXED_NOTATION_LIMIT * factor).is_finite());
}

#[test]
fn test_default_parameter_is_zero() {
    assert_eq!(DEFAULT_PARAMETER, 0.0);
}

// =============================================================================
// ASSET TESTS
// =============================================================================

#[test]
fn test_image_lookup_parts() {
    assert_eq!(IMAGES_DIR, "images");
    assert_eq!(IMAGE_EXTENSION, "png");
    assert!(ICON_FILE.ends_with(".ico"));
}

#[test]
fn test_labels_are_spanish() {
    assert!(WINDOW_TITLE.contains("volumen"));
    assert!(GREETING.starts_with("Seleccione"));
}
