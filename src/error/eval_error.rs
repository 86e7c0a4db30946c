use crate::error::{FormatError, MathError};

#[derive(Debug, Clone, PartialEq)]
/// Union of the two failure kinds an evaluation can produce.
///
/// [`evaluate`](crate::evaluate) and the string-typed division and power
/// wrappers can fail with either kind, so they return this enum. Both
/// inner errors convert with `?` through the `From` impls below.
pub enum EvalError {
    /// The input was malformed or unparseable.
    Format(FormatError),
    /// An arithmetic operation left its domain.
    Math(MathError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(e) => write!(f, "{e}"),
            Self::Math(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            Self::Math(e) => Some(e),
        }
    }
}

impl From<FormatError> for EvalError {
    fn from(error: FormatError) -> Self {
        Self::Format(error)
    }
}

impl From<MathError> for EvalError {
    fn from(error: MathError) -> Self {
        Self::Math(error)
    }
}
