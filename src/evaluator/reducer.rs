use crate::{error::MathError, evaluator::lexer::Operator};

/// Result type used by the reducer.
///
/// All reduction functions return either a value of type `T` or a
/// `MathError` describing the arithmetic fault.
pub type ReduceResult<T> = Result<T, MathError>;

/// Reduces scanned number and operator sequences to a single value.
///
/// Reduction runs two left-to-right passes: the high tier (`*` and `/`) is
/// spliced in place first, then the remaining low tier (`+` and `-`) is
/// folded. Within a tier every operator applies strictly left to right, so
/// non-associative chains like `20/4/5` evaluate as `(20/4)/5`.
///
/// The sequences must satisfy the scanner's invariant
/// `numbers.len() == operators.len() + 1`.
///
/// # Parameters
/// - `numbers`: Operand sequence, in source order.
/// - `operators`: Operator sequence, in source order.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// `DivisionByZero` when the right operand of a `/` is exactly zero.
///
/// # Panics
/// May panic if the sequences violate the arity invariant.
///
/// # Example
/// ```
/// use flatcalc::evaluator::{lexer::Operator, reducer::reduce};
///
/// // 3 * 4 + 2
/// let numbers = vec![3.0, 4.0, 2.0];
/// let operators = vec![Operator::Mul, Operator::Add];
///
/// assert_eq!(reduce(numbers, operators).unwrap(), 14.0);
/// ```
pub fn reduce(mut numbers: Vec<f64>, mut operators: Vec<Operator>) -> ReduceResult<f64> {
    debug_assert_eq!(numbers.len(), operators.len() + 1);

    collapse_high_tier(&mut numbers, &mut operators)?;
    Ok(fold_low_tier(&numbers, &operators))
}

/// Splices every `*` and `/` into its computed result, left to right.
///
/// The index does not advance past a collapsed position, so a chain like
/// `2*3*4` collapses progressively from the left. `+` and `-` are skipped
/// without touching the sequences.
fn collapse_high_tier(numbers: &mut Vec<f64>, operators: &mut Vec<Operator>) -> ReduceResult<()> {
    let mut i = 0;
    while i < operators.len() {
        let operator = operators[i];
        if !matches!(operator, Operator::Mul | Operator::Div) {
            i += 1;
            continue;
        }

        let a = numbers[i];
        let b = numbers[i + 1];
        let value = match operator {
            Operator::Mul => a * b,
            Operator::Div => {
                if b == 0.0 {
                    return Err(MathError::DivisionByZero);
                }
                a / b
            },
            _ => unreachable!(),
        };

        numbers[i] = value;
        numbers.remove(i + 1);
        operators.remove(i);
    }

    Ok(())
}

/// Folds the remaining `+` and `-` operators strictly left to right.
///
/// Only the low tier survives the high-tier pass, so every operator here
/// has the same priority and the fold order is the evaluation order.
fn fold_low_tier(numbers: &[f64], operators: &[Operator]) -> f64 {
    let mut result = numbers[0];
    for (operator, &value) in operators.iter().zip(numbers.iter().skip(1)) {
        result = match operator {
            Operator::Add => result + value,
            Operator::Sub => result - value,
            _ => unreachable!(),
        };
    }

    result
}
