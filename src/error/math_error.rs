#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents an arithmetic operation that left its domain.
///
/// Division by zero is the only arithmetic fault this crate raises. The
/// power operations reuse it for their unsupported-exponent conditions, so
/// callers observe a single, stable error kind for every arithmetic
/// rejection.
pub enum MathError {
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for MathError {}
