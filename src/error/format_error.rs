#[derive(Debug, Clone, PartialEq)]
/// Represents all errors caused by malformed or unparseable input.
pub enum FormatError {
    /// The input expression was empty or contained only whitespace.
    EmptyExpression,
    /// A numeric literal failed to parse.
    InvalidNumber {
        /// Byte offset of the literal in the whitespace-stripped expression.
        position: usize,
    },
    /// A character that is not one of `+ - * /` appeared where an operator
    /// was required.
    InvalidOperator {
        /// Byte offset of the character in the whitespace-stripped
        /// expression.
        position: usize,
    },
    /// The expression did not end with one more number than operators.
    MalformedExpression,
    /// A string operand of a wrapper operation did not parse as a number.
    InvalidOperand {
        /// The operand text that failed to parse.
        text: String,
    },
    /// The square root of a negative number was requested.
    NegativeSquareRoot {
        /// The offending input value.
        value: f64,
    },
    /// A value could not be represented as a 32-bit integer.
    IntegerOverflow {
        /// The offending input value.
        value: f64,
    },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => {
                write!(f, "Input expression cannot be empty.")
            },

            Self::InvalidNumber { position } => {
                write!(f, "Invalid number at position {position}.")
            },

            Self::InvalidOperator { position } => {
                write!(f, "Invalid operator at position {position}.")
            },

            Self::MalformedExpression => write!(f, "Invalid expression format."),

            Self::InvalidOperand { text } => {
                write!(f, "Operand '{text}' is not a valid number.")
            },

            Self::NegativeSquareRoot { value } => {
                write!(f, "Square root of negative number {value} is not defined.")
            },

            Self::IntegerOverflow { value } => {
                write!(f, "Value {value} cannot be represented as a 32-bit integer.")
            },
        }
    }
}

impl std::error::Error for FormatError {}
