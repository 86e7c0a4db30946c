/// Format errors.
///
/// Defines all error types that can occur while scanning an expression or
/// parsing string operands. Format errors include empty input, invalid
/// characters, malformed literals, and any other issues caused by input
/// that does not match the expected shape.
pub mod format_error;
/// Arithmetic errors.
///
/// Contains the error type raised when an arithmetic operation leaves its
/// domain, which for this crate is division by zero (and the operations
/// that report the same kind by inherited contract).
pub mod math_error;

/// Combined error type for operations that can fail either way.
///
/// Wraps a [`FormatError`] or a [`MathError`] behind a single enum so that
/// the expression evaluator and the string-typed wrappers can propagate
/// both kinds with `?`.
pub mod eval_error;

pub use eval_error::EvalError;
pub use format_error::FormatError;
pub use math_error::MathError;
