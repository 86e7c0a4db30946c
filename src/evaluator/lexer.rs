use logos::Logos;

/// Represents a lexical token in a flat infix expression.
/// A token is either a numeric literal capture or one of the four operator
/// characters. Whitespace is stripped before lexing, so no skip patterns
/// are needed; any unmatched character becomes a lexing error.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Greedy numeric literal capture, such as `42`, `2.5` or `.5`.
    ///
    /// The capture takes every adjacent digit and decimal point, so
    /// malformed literals like `1.2.3` are captured whole and rejected
    /// when the scanner parses them.
    #[regex(r"[0-9.]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

/// The four binary operators an expression may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`), low tier.
    Add,
    /// Subtraction (`-`), low tier.
    Sub,
    /// Multiplication (`*`), high tier.
    Mul,
    /// Division (`/`), high tier.
    Div,
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(Operator)` when the token is one of the four operator
/// characters, and `None` for numeric literal tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(Operator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use flatcalc::evaluator::lexer::{Operator, Token, token_to_operator};
///
/// assert_eq!(token_to_operator(&Token::Plus), Some(Operator::Add));
/// assert_eq!(token_to_operator(&Token::Number), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Add),
        Token::Minus => Some(Operator::Sub),
        Token::Star => Some(Operator::Mul),
        Token::Slash => Some(Operator::Div),
        Token::Number => None,
    }
}
