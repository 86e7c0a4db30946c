use crate::{
    error::FormatError,
    util::num::{f64_to_i32_checked, parse_operand},
};

/// Concatenates the truncated first operand with the second and reparses.
///
/// The first operand is truncated to `i32`; its text is concatenated with
/// the second operand's default text, and the concatenation is parsed back
/// as `f64`. Not a sum in any arithmetic sense, but the behavior is part
/// of the public contract.
///
/// # Errors
/// - `IntegerOverflow` when the first operand is not representable as
///   `i32`.
/// - `InvalidOperand` when the concatenation does not parse as a number
///   (e.g. a negative second operand puts a `-` mid-string).
///
/// # Example
/// ```
/// use flatcalc::ops::super_sum;
///
/// assert_eq!(super_sum(12.3, 4.56).unwrap(), 124.56);
/// assert!(super_sum(f64::NAN, 1.0).is_err());
/// assert!(super_sum(1.0, -2.0).is_err());
/// ```
pub fn super_sum(a: f64, b: f64) -> Result<f64, FormatError> {
    let head = f64_to_i32_checked(a)?;

    let concatenated = format!("{head}{b}");
    concatenated.parse()
                .map_err(|_| FormatError::InvalidOperand { text: concatenated })
}

/// Concatenates the texts of two `i32` values and reparses them as `f64`.
///
/// # Errors
/// `InvalidOperand` when the concatenation does not parse as a number
/// (a negative second operand).
///
/// # Example
/// ```
/// use flatcalc::ops::super_sum_int;
///
/// assert_eq!(super_sum_int(123, 456).unwrap(), 123_456.0);
/// assert!(super_sum_int(12, -3).is_err());
/// ```
pub fn super_sum_int(a: i32, b: i32) -> Result<f64, FormatError> {
    let concatenated = format!("{a}{b}");
    concatenated.parse()
                .map_err(|_| FormatError::InvalidOperand { text: concatenated })
}

/// Parses two numeric strings and applies [`super_sum`] to them.
///
/// # Errors
/// - `InvalidOperand` when either operand does not parse as a number, or
///   when the concatenation does not.
/// - `IntegerOverflow` when the first operand is not representable as
///   `i32`.
///
/// # Example
/// ```
/// use flatcalc::ops::super_sum_str;
///
/// assert_eq!(super_sum_str("12.3", "4.56").unwrap(), 124.56);
/// assert!(super_sum_str("a", "1").is_err());
/// ```
pub fn super_sum_str(a: &str, b: &str) -> Result<f64, FormatError> {
    super_sum(parse_operand(a)?, parse_operand(b)?)
}
