/// Absolute value over `f64`, `i32` and numeric strings.
pub mod abs;
/// Addition over `f64`, `i32` and numeric strings.
pub mod add;
/// Division over `f64`, `i32` and numeric strings, rejecting zero
/// divisors.
pub mod divide;
/// Multiplication over `f64`, `i32` and numeric strings.
pub mod multiply;
/// Exponentiation over `f64`, `i32` and numeric strings, with the
/// inherited unsupported-exponent conditions.
pub mod power;
/// Square root over `f64`, `i32` and numeric strings, rejecting negative
/// input.
pub mod square_root;
/// Subtraction over `f64`, `i32` and numeric strings.
pub mod subtract;
/// The `super_sum` concatenation oddity: textual concatenation reparsed as
/// a number.
pub mod super_sum;

pub use abs::{abs, abs_int, abs_str};
pub use add::{add, add_int, add_str};
pub use divide::{divide, divide_int, divide_str};
pub use multiply::{multiply, multiply_int, multiply_str};
pub use power::{power, power_int, power_str};
pub use square_root::{square_root, square_root_int, square_root_str};
pub use subtract::{subtract, subtract_int, subtract_str};
pub use super_sum::{super_sum, super_sum_int, super_sum_str};
