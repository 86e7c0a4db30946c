use crate::{error::FormatError, util::num::parse_operand};

/// Subtracts one `f64` value from another.
///
/// # Example
/// ```
/// use flatcalc::ops::subtract;
///
/// assert_eq!(subtract(5.5, 2.5), 3.0);
/// ```
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Subtracts one `i32` value from another.
#[must_use]
pub const fn subtract_int(a: i32, b: i32) -> i32 {
    a - b
}

/// Subtracts two numeric strings and formats the difference back.
///
/// # Errors
/// `InvalidOperand` when either operand does not parse as a number.
///
/// # Example
/// ```
/// use flatcalc::ops::subtract_str;
///
/// assert_eq!(subtract_str("7.5", "2.5").unwrap(), "5");
/// ```
pub fn subtract_str(a: &str, b: &str) -> Result<String, FormatError> {
    let difference = parse_operand(a)? - parse_operand(b)?;
    Ok(difference.to_string())
}
