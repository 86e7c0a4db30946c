/// Operand parsing and numeric conversion helpers.
///
/// This module provides the shared routines the wrapper operations rely
/// on: parsing numeric string operands into `f64`, and converting `f64`
/// values into `i32` by truncation without risking silent wrap-around.
///
/// All fallible functions return a `Result`, which is `Ok` if the operand
/// or conversion is valid, or a `FormatError` otherwise.
pub mod num;
