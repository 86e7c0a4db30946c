use crate::{
    error::{EvalError, MathError},
    util::num::parse_operand,
};

/// Divides one `f64` value by another.
///
/// # Errors
/// `DivisionByZero` when the divisor is exactly zero.
///
/// # Example
/// ```
/// use flatcalc::ops::divide;
///
/// assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
/// assert!(divide(5.0, 0.0).is_err());
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }

    Ok(a / b)
}

/// Divides one `i32` value by another, truncating toward zero.
///
/// # Errors
/// `DivisionByZero` when the divisor is zero.
///
/// # Panics
/// Overflows (and panics) for `i32::MIN / -1`.
///
/// # Example
/// ```
/// use flatcalc::ops::divide_int;
///
/// assert_eq!(divide_int(10, 2).unwrap(), 5);
/// assert!(divide_int(5, 0).is_err());
/// ```
pub const fn divide_int(a: i32, b: i32) -> Result<i32, MathError> {
    if b == 0 {
        return Err(MathError::DivisionByZero);
    }

    Ok(a / b)
}

/// Divides two numeric strings and formats the quotient back.
///
/// # Errors
/// - `EvalError::Format` when either operand does not parse as a number.
/// - `EvalError::Math` when the divisor parses to exactly zero.
///
/// # Example
/// ```
/// use flatcalc::ops::divide_str;
///
/// assert_eq!(divide_str("10", "2").unwrap(), "5");
/// assert!(divide_str("5", "0").is_err());
/// assert!(divide_str("a", "2").is_err());
/// ```
pub fn divide_str(a: &str, b: &str) -> Result<String, EvalError> {
    let quotient = divide(parse_operand(a)?, parse_operand(b)?)?;
    Ok(quotient.to_string())
}
