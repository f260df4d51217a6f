//! Result formatting.
//!
//! Zero and values between the scientific threshold and
//! [`FIXED_NOTATION_LIMIT`] are rounded to a fixed number of decimals.
//! Anything else (tiny, huge or negative) is shown in scientific notation.

use config::constants::{GlobalConfig, FIXED_NOTATION_LIMIT};

/// Formats `value` with the default [`GlobalConfig`].
///
/// # Examples
/// ```
/// use calculator::format_value;
///
/// assert_eq!(format_value(0.0), "0");
/// assert_eq!(format_value(113.09733552923255), "113.0973");
/// assert_eq!(format_value(0.000123456), "1.2346e-4");
/// assert_eq!(format_value(1e306), "1.0000e306");
/// ```
pub fn format_value(value: f64) -> String {
    format_value_with(value, &GlobalConfig::default())
}

/// Formats `value` using the decimals and threshold of `config`.
pub fn format_value_with(value: f64, config: &GlobalConfig) -> String {
    let decimals = config.display_decimals;
    if value == 0.0 || (value > config.scientific_threshold && value < FIXED_NOTATION_LIMIT) {
        let factor = 10f64.powi(decimals as i32);
        let rounded = (value * factor).round() / factor;
        if rounded.is_finite() {
            return format!("{rounded}");
        }
    }
    format!("{:.*e}", decimals as usize, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_have_no_trailing_zeros() {
        assert_eq!(format_value(8.0), "8");
        assert_eq!(format_value(24.0), "24");
    }

    #[test]
    fn test_rounds_to_four_decimals() {
        assert_eq!(format_value(4.188_790_204_786_391), "4.1888");
        assert_eq!(format_value(0.12346), "0.1235");
    }

    #[test]
    fn test_threshold_itself_is_scientific() {
        assert_eq!(format_value(0.001), "1.0000e-3");
    }

    #[test]
    fn test_negative_values_are_scientific() {
        assert_eq!(format_value(-27.0), "-2.7000e1");
    }

    #[test]
    fn test_huge_values_are_scientific() {
        assert_eq!(format_value(1e306), "1.0000e306");
        assert_eq!(format_value(f64::MAX), "1.7977e308");
        assert_eq!(format_value(1e20), "1.0000e20");
    }

    #[test]
    fn test_fixed_notation_below_limit() {
        assert_eq!(format_value(123_456_789_012.5), "123456789012.5");
        assert_eq!(format_value(FIXED_NOTATION_LIMIT), "1.0000e15");
    }

    #[test]
    fn test_respects_custom_config() {
        let config = GlobalConfig::new(2, 0.1).unwrap();
        assert_eq!(format_value_with(3.14159, &config), "3.14");
        assert_eq!(format_value_with(0.05, &config), "5.00e-2");
    }
}
