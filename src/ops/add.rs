use crate::{error::FormatError, util::num::parse_operand};

/// Adds two `f64` values.
///
/// # Example
/// ```
/// use flatcalc::ops::add;
///
/// assert_eq!(add(2.5, 3.5), 6.0);
/// ```
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Adds two `i32` values.
///
/// # Example
/// ```
/// use flatcalc::ops::add_int;
///
/// assert_eq!(add_int(4, 5), 9);
/// ```
#[must_use]
pub const fn add_int(a: i32, b: i32) -> i32 {
    a + b
}

/// Adds two numeric strings and formats the sum back.
///
/// Both operands are parsed as `f64`; the result is the default string
/// form of the `f64` sum.
///
/// # Errors
/// `InvalidOperand` when either operand does not parse as a number.
///
/// # Example
/// ```
/// use flatcalc::ops::add_str;
///
/// assert_eq!(add_str("3.2", "1.8").unwrap(), "5");
/// assert!(add_str("a", "2").is_err());
/// ```
pub fn add_str(a: &str, b: &str) -> Result<String, FormatError> {
    let sum = parse_operand(a)? + parse_operand(b)?;
    Ok(sum.to_string())
}
