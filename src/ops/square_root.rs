use crate::{error::FormatError, util::num::parse_operand};

/// Computes the square root of an `f64` value.
///
/// # Errors
/// `NegativeSquareRoot` when the input is negative; the real square root
/// is not defined there.
///
/// # Example
/// ```
/// use flatcalc::ops::square_root;
///
/// assert_eq!(square_root(25.0).unwrap(), 5.0);
/// assert!(square_root(-1.0).is_err());
/// ```
pub fn square_root(value: f64) -> Result<f64, FormatError> {
    if value < 0.0 {
        return Err(FormatError::NegativeSquareRoot { value });
    }

    Ok(value.sqrt())
}

/// Computes the floor of the square root of an `i32` value.
///
/// Uses a binary search over the candidate roots, so the result is the
/// largest integer whose square does not exceed the input.
///
/// # Errors
/// `NegativeSquareRoot` when the input is negative.
///
/// # Example
/// ```
/// use flatcalc::ops::square_root_int;
///
/// assert_eq!(square_root_int(25).unwrap(), 5);
/// assert_eq!(square_root_int(26).unwrap(), 5);
/// assert_eq!(square_root_int(0).unwrap(), 0);
/// assert!(square_root_int(-1).is_err());
/// ```
pub fn square_root_int(value: i32) -> Result<i32, FormatError> {
    if value < 0 {
        return Err(FormatError::NegativeSquareRoot { value: f64::from(value) });
    }
    if value == 0 {
        return Ok(0);
    }

    let mut left = 1;
    let mut right = value;
    let mut result = 0;

    while left <= right {
        let mid = left + (right - left) / 2;

        if mid <= value / mid {
            left = mid + 1;
            result = mid;
        } else {
            right = mid - 1;
        }
    }

    Ok(result)
}

/// Computes the square root of a numeric string and formats it back.
///
/// # Errors
/// - `InvalidOperand` when the operand does not parse as a number.
/// - `NegativeSquareRoot` when the operand parses to a negative value.
///
/// # Example
/// ```
/// use flatcalc::ops::square_root_str;
///
/// assert_eq!(square_root_str("25").unwrap(), "5");
/// assert!(square_root_str("a").is_err());
/// assert!(square_root_str("-1").is_err());
/// ```
pub fn square_root_str(value: &str) -> Result<String, FormatError> {
    let root = square_root(parse_operand(value)?)?;
    Ok(root.to_string())
}
