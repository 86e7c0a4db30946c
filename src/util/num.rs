use crate::error::FormatError;

/// Parses a string operand as `f64`.
///
/// Surrounding whitespace is ignored; everything else must be a valid
/// numeric literal for the native float parser.
///
/// ## Errors
/// Returns `FormatError::InvalidOperand` carrying the original text when
/// parsing fails.
///
/// ## Parameters
/// - `text`: The operand text to parse.
///
/// ## Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(FormatError::InvalidOperand { .. })`: If the text is not a
///   number.
///
/// ## Example
/// ```
/// use flatcalc::util::num::parse_operand;
///
/// assert_eq!(parse_operand("3.2").unwrap(), 3.2);
/// assert_eq!(parse_operand(" -15.3 ").unwrap(), -15.3);
/// assert!(parse_operand("invalid").is_err());
/// ```
pub fn parse_operand(text: &str) -> Result<f64, FormatError> {
    text.trim()
        .parse()
        .map_err(|_| FormatError::InvalidOperand { text: text.to_string() })
}

/// Converts an `f64` to `i32` by truncation if and only if the truncated
/// value is representable.
///
/// ## Errors
/// Returns an error for non-finite values and for values whose integer
/// part falls outside the `i32` range.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
///
/// ## Returns
/// - `Ok(i32)`: The truncated value if it is representable.
/// - `Err(FormatError::IntegerOverflow { .. })`: If it is not.
///
/// ## Example
/// ```
/// use flatcalc::util::num::f64_to_i32_checked;
///
/// assert_eq!(f64_to_i32_checked(12.9).unwrap(), 12);
/// assert_eq!(f64_to_i32_checked(-3.7).unwrap(), -3);
/// assert!(f64_to_i32_checked(f64::NAN).is_err());
/// assert!(f64_to_i32_checked(3e10).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i32_checked(value: f64) -> Result<i32, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::IntegerOverflow { value });
    }

    let truncated = value.trunc();
    if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
        return Err(FormatError::IntegerOverflow { value });
    }

    Ok(truncated as i32)
}
