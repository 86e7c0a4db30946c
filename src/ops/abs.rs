use crate::{error::FormatError, util::num::parse_operand};

/// Returns the absolute value of an `f64`.
///
/// # Example
/// ```
/// use flatcalc::ops::abs;
///
/// assert_eq!(abs(5.5), 5.5);
/// assert_eq!(abs(-3.7), 3.7);
/// assert_eq!(abs(0.0), 0.0);
/// ```
#[must_use]
pub fn abs(value: f64) -> f64 {
    value.abs()
}

/// Returns the absolute value of an `i32`.
///
/// `i32::MIN` has no positive counterpart and maps to itself.
///
/// # Example
/// ```
/// use flatcalc::ops::abs_int;
///
/// assert_eq!(abs_int(10), 10);
/// assert_eq!(abs_int(-7), 7);
/// ```
#[must_use]
pub const fn abs_int(value: i32) -> i32 {
    value.wrapping_abs()
}

/// Returns the absolute value of a numeric string, formatted back.
///
/// # Errors
/// `InvalidOperand` when the operand does not parse as a number.
///
/// # Example
/// ```
/// use flatcalc::ops::abs_str;
///
/// assert_eq!(abs_str("-15.3").unwrap(), "15.3");
/// assert!(abs_str("invalid").is_err());
/// ```
pub fn abs_str(value: &str) -> Result<String, FormatError> {
    Ok(abs(parse_operand(value)?).to_string())
}
