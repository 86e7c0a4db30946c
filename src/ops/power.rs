use crate::{
    error::{EvalError, MathError},
    util::num::parse_operand,
};

/// Raises an `f64` base to an `f64` exponent.
///
/// # Errors
/// `DivisionByZero` when the base is zero and the exponent is negative.
///
/// # Example
/// ```
/// use flatcalc::ops::power;
///
/// assert_eq!(power(2.0, 3.0).unwrap(), 8.0);
/// assert_eq!(power(2.0, -1.0).unwrap(), 0.5);
/// assert!(power(0.0, -1.0).is_err());
/// ```
pub fn power(base: f64, exponent: f64) -> Result<f64, MathError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(MathError::DivisionByZero);
    }

    Ok(base.powf(exponent))
}

/// Raises an `i32` base to a non-negative `i32` exponent by repeated
/// multiplication, wrapping on overflow.
///
/// Negative exponents are unsupported for integers. The condition reports
/// `DivisionByZero` for compatibility with the other power variants; no
/// division is involved.
///
/// # Errors
/// `DivisionByZero` when the exponent is negative.
///
/// # Example
/// ```
/// use flatcalc::ops::power_int;
///
/// assert_eq!(power_int(2, 3).unwrap(), 8);
/// assert_eq!(power_int(7, 0).unwrap(), 1);
/// assert!(power_int(2, -1).is_err());
/// ```
pub fn power_int(base: i32, exponent: i32) -> Result<i32, MathError> {
    if exponent < 0 {
        return Err(MathError::DivisionByZero);
    }

    let mut result = 1_i32;
    for _ in 0..exponent {
        result = result.wrapping_mul(base);
    }

    Ok(result)
}

/// Raises one numeric string to the power of another and formats the
/// result back.
///
/// Both operands are parsed as `f64` and delegated to [`power`].
///
/// # Errors
/// - `EvalError::Format` when either operand does not parse as a number.
/// - `EvalError::Math` when the base parses to zero and the exponent is
///   negative.
///
/// # Example
/// ```
/// use flatcalc::ops::power_str;
///
/// assert_eq!(power_str("2", "3").unwrap(), "8");
/// assert!(power_str("a", "2").is_err());
/// ```
pub fn power_str(base: &str, exponent: &str) -> Result<String, EvalError> {
    let result = power(parse_operand(base)?, parse_operand(exponent)?)?;
    Ok(result.to_string())
}
