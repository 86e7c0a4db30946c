use crate::{error::FormatError, util::num::parse_operand};

/// Multiplies two `f64` values.
///
/// # Example
/// ```
/// use flatcalc::ops::multiply;
///
/// assert_eq!(multiply(2.5, 4.0), 10.0);
/// ```
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Multiplies two `i32` values.
#[must_use]
pub const fn multiply_int(a: i32, b: i32) -> i32 {
    a * b
}

/// Multiplies two numeric strings and formats the product back.
///
/// # Errors
/// `InvalidOperand` when either operand does not parse as a number.
///
/// # Example
/// ```
/// use flatcalc::ops::multiply_str;
///
/// assert_eq!(multiply_str("2.5", "4").unwrap(), "10");
/// ```
pub fn multiply_str(a: &str, b: &str) -> Result<String, FormatError> {
    let product = parse_operand(a)? * parse_operand(b)?;
    Ok(product.to_string())
}
