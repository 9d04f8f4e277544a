//! Number formatting: the number → display text boundary

/// Values at or above this magnitude are shown in exponential notation
const EXPONENTIAL_ABOVE: f64 = 1e21;

/// Non-zero values below this magnitude are shown in exponential notation
const EXPONENTIAL_BELOW: f64 = 1e-6;

/// Largest integer an f64 holds exactly (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Formats a result for display.
///
/// Returns `None` for NaN and infinities; the caller shows its error text.
/// Finite values are rounded to `precision` decimal places to hide
/// floating-point noise, then printed as the shortest decimal string, or in
/// exponential notation (`1e+21`, `1.5e-7`) when very large or very small.
///
/// ```
/// use pocket_calc::core::format_number;
///
/// assert_eq!(format_number(0.1 + 0.2, 12).as_deref(), Some("0.3"));
/// assert_eq!(format_number(1e21, 12).as_deref(), Some("1e+21"));
/// assert_eq!(format_number(f64::NAN, 12), None);
/// ```
#[must_use]
pub fn format_number(value: f64, precision: u32) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let rounded = round_to(value, precision);
    if rounded == 0.0 {
        // Covers -0 as well
        return Some("0".to_string());
    }

    if is_exponential(rounded) {
        return Some(format_exponential(rounded));
    }

    Some(format!("{rounded}"))
}

/// Rounds `value` to `places` decimal places.
///
/// Values whose magnitude already exceeds the precision an f64 can carry at
/// that scale are returned unchanged.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(crate::core::Settings::MAX_PRECISION) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
        return value;
    }
    scaled.round() / factor
}

fn is_exponential(value: f64) -> bool {
    let magnitude = value.abs();
    magnitude >= EXPONENTIAL_ABOVE || (magnitude != 0.0 && magnitude < EXPONENTIAL_BELOW)
}

/// `{:e}` prints `1e21`; the display uses an explicit exponent sign.
fn format_exponential(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
