use logos::Logos;

use crate::{
    error::FormatError,
    evaluator::lexer::{Operator, Token, token_to_operator},
};

/// Result type used by the scanner.
///
/// All scanning functions return either a value of type `T` or a
/// `FormatError` describing why the input was rejected.
pub type ScanResult<T> = Result<T, FormatError>;

/// Scans an expression into parallel number and operator sequences.
///
/// Whitespace is stripped first, so tokens may abut or be spaced
/// arbitrarily; every reported position refers to the stripped text. The
/// scanner then alternates between two states over the token stream: where
/// a number is expected, a `-` is consumed as the sign of the directly
/// following literal (this is the only place a `-` is not a binary
/// operator); where an operator is expected, anything but `+ - * /` is
/// rejected.
///
/// On success the sequences satisfy `numbers.len() == operators.len() + 1`.
///
/// # Parameters
/// - `expression`: The expression text to scan.
///
/// # Returns
/// The numbers and operators of the expression, in source order.
///
/// # Errors
/// - `EmptyExpression` for empty or whitespace-only input.
/// - `InvalidNumber` when a literal fails to parse or is missing.
/// - `InvalidOperator` when a non-operator character fills an operator
///   position.
/// - `MalformedExpression` when the final arity check fails (e.g. a
///   trailing operator).
///
/// # Example
/// ```
/// use flatcalc::evaluator::{lexer::Operator, scanner::scan};
///
/// let (numbers, operators) = scan("2*-3 + 4").unwrap();
/// assert_eq!(numbers, vec![2.0, -3.0, 4.0]);
/// assert_eq!(operators, vec![Operator::Mul, Operator::Add]);
/// ```
pub fn scan(expression: &str) -> ScanResult<(Vec<f64>, Vec<Operator>)> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(FormatError::EmptyExpression);
    }

    let mut numbers = Vec::new();
    let mut operators = Vec::new();

    let mut lexer = Token::lexer(&stripped);
    let mut expecting_number = true;

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;

        if expecting_number {
            let value = match token {
                Ok(Token::Number) => parse_literal(lexer.slice(), position)?,

                // A `-` here signs the literal directly after it.
                Ok(Token::Minus) => match lexer.next() {
                    Some(Ok(Token::Number)) => -parse_literal(lexer.slice(), position)?,
                    _ => return Err(FormatError::InvalidNumber { position }),
                },

                _ => return Err(FormatError::InvalidNumber { position }),
            };

            numbers.push(value);
            expecting_number = false;
        } else {
            match token.ok().as_ref().and_then(token_to_operator) {
                Some(operator) => operators.push(operator),
                None => return Err(FormatError::InvalidOperator { position }),
            }
            expecting_number = true;
        }
    }

    if numbers.len() != operators.len() + 1 {
        return Err(FormatError::MalformedExpression);
    }

    Ok((numbers, operators))
}

/// Parses one greedy literal capture as `f64`.
///
/// The capture may hold multiple decimal points (`1.2.3`) or be otherwise
/// unparseable; any failure is reported at the literal's starting position,
/// which includes a consumed unary sign.
fn parse_literal(text: &str, position: usize) -> ScanResult<f64> {
    text.parse()
        .map_err(|_| FormatError::InvalidNumber { position })
}
