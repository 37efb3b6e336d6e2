//! Expression-engine error model.

use thiserror::Error;

/// Error raised while lexing or parsing an expression string.
///
/// Evaluation itself is total (IEEE-754 semantics), so everything that can
/// go wrong is rejected here, before an [`crate::Expr`] exists. Positions
/// are byte offsets into the source string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// A character the lexer does not recognize.
    #[error("unexpected character '{ch}' at position {at}")]
    UnexpectedChar { ch: char, at: usize },

    /// A numeric literal that does not form a valid f64 (e.g. "1.2.3").
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A token in a position the grammar does not allow.
    #[error("unexpected '{token}' at position {at}")]
    UnexpectedToken { token: String, at: usize },

    /// Input ended in the middle of an expression.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// A call to a function name the engine does not know.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
}
