//! Result rounding and number formatting.

/// Decimal places results are rounded to unless configured otherwise.
pub const DEFAULT_PRECISION: u32 = 10;

/// Round `value` to `places` fractional digits.
///
/// Rounding goes through fixed-point formatting of the exact binary value,
/// which removes accumulated noise such as `0.1 + 0.2`.
///
/// ```rust
/// use calcpad::eval::round_to;
///
/// assert_eq!(round_to(0.1 + 0.2, 10), 0.3);
/// assert_eq!(round_to(2.0 / 3.0, 3), 0.667);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let fixed = format!("{:.*}", places as usize, value);
    fixed.parse().unwrap_or(value)
}

/// Format a number with the shortest representation that round-trips.
///
/// Integral values print without a fractional part, trailing zeros never
/// appear and negative zero prints as `0`.
///
/// ```rust
/// use calcpad::eval::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.07), "0.07");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_binary_noise() {
        assert_eq!(format_number(round_to(0.1 + 0.2, DEFAULT_PRECISION)), "0.3");
        assert_eq!(format_number(round_to(1.1 * 3.0, DEFAULT_PRECISION)), "3.3");
    }

    #[test]
    fn keeps_ten_fractional_digits() {
        let third = round_to(1.0 / 3.0, DEFAULT_PRECISION);
        assert_eq!(format_number(third), "0.3333333333");
    }

    #[test]
    fn tiny_values_round_to_zero() {
        assert_eq!(format_number(round_to(1e-12, DEFAULT_PRECISION)), "0");
        assert_eq!(format_number(round_to(-1e-12, DEFAULT_PRECISION)), "0");
    }

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_number(round_to(8.0, DEFAULT_PRECISION)), "8");
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn large_values_do_not_use_exponent_notation() {
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn zero_places_rounds_to_integer() {
        assert_eq!(round_to(2.75, 0), 3.0);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_to(f64::NAN, 10).is_nan());
        assert_eq!(round_to(f64::INFINITY, 10), f64::INFINITY);
    }
}
