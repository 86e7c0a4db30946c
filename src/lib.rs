//! # flatcalc
//!
//! flatcalc is a flat infix arithmetic expression evaluator written in Rust.
//! It scans and evaluates expressions built from numeric literals and the
//! four basic operators (`+ - * /`) with standard precedence, and ships a
//! set of typed wrapper functions for single arithmetic operations over
//! numeric and string operands.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    evaluator::{reducer::reduce, scanner::scan},
};

/// Provides unified error types for scanning and evaluation.
///
/// This module defines all errors that can be raised while scanning an
/// expression or performing an arithmetic operation. It standardizes error
/// reporting and carries detailed information about failures, including
/// offending positions and operand text for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for the two failure kinds (format, arithmetic).
/// - Attaches positions and operand text for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the evaluation of flat infix expressions.
///
/// This module ties together the lexer, the scanner, and the precedence
/// reducer to turn an expression string into a single numeric result. Each
/// evaluation is a pure function of its input: there is no shared state, no
/// I/O, and no lifecycle beyond the call.
///
/// # Responsibilities
/// - Tokenizes the expression and validates the alternating grammar.
/// - Collapses operators tier by tier, preserving left-to-right order.
/// - Reports format errors and division by zero.
pub mod evaluator;
/// Typed arithmetic wrappers over numeric and string operands.
///
/// This module provides one file per operation (add, subtract, multiply,
/// divide, power, square root, absolute value, and the `super_sum`
/// concatenation oddity), each with three clearly named variants: an `f64`
/// function, an `i32` function, and a string function that parses its
/// operands first and formats the result back.
///
/// # Responsibilities
/// - Implements each operation for `f64`, `i32`, and numeric strings.
/// - Reports unparseable operands as format errors.
/// - Reports division by zero and the inherited power-operation quirks.
pub mod ops;
/// General utilities for operand parsing and safe numeric conversion.
///
/// This module provides reusable helpers shared by the wrapper operations:
/// parsing string operands into `f64` and converting `f64` values into
/// `i32` without silent data loss.
///
/// # Responsibilities
/// - Parses numeric string operands, surfacing failures as format errors.
/// - Safely truncates `f64` values to `i32`, rejecting out-of-range input.
pub mod util;

/// Evaluates a flat infix arithmetic expression and returns the result.
///
/// The expression may contain numeric literals and the operators `+`, `-`,
/// `*` and `/`. Whitespace is ignored entirely, so tokens may abut or be
/// spaced arbitrarily. Multiplication and division are applied before
/// addition and subtraction; operators of the same tier are applied
/// strictly left to right. A `-` directly before a literal at the start of
/// the expression or after another operator is treated as the literal's
/// sign.
///
/// # Errors
/// Returns [`EvalError::Format`] when the input is empty, contains an
/// invalid character, or breaks the alternating number/operator grammar,
/// and [`EvalError::Math`] when a division by zero occurs.
///
/// # Examples
/// ```
/// use flatcalc::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate(" 2 + 3 ").unwrap(), 5.0);
/// assert_eq!(evaluate("-5+3*2").unwrap(), 1.0);
///
/// // Same-tier operators evaluate left to right.
/// assert_eq!(evaluate("20/4/5").unwrap(), 1.0);
///
/// // Division by zero is reported, never computed.
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let (numbers, operators) = scan(expression)?;
    let result = reduce(numbers, operators)?;
    Ok(result)
}
