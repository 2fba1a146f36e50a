use calc_lexer::{LexError, TokenKind};
use thiserror::Error;

/// Errors that can occur while evaluating an expression
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    /// The input contains a character the lexer does not know
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A number literal that is not a valid float, e.g. `1..2`
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// An operand was required but the input ended or another token followed
    #[error("expecting number{}", .0.as_ref().map(|t| format!(", got '{t}'")).unwrap_or_default())]
    ExpectedOperand(Option<String>),

    /// A `(` was never closed
    #[error("missing right parenthesis")]
    MissingCloseParen,

    /// A complete expression was followed by more tokens
    #[error("invalid expression: unexpected '{0}'")]
    TrailingTokens(String),

    /// A token kind with no binary arithmetic was applied as an operator
    #[error("unknown operator")]
    UnknownOperator(TokenKind),

    /// Nesting exceeded [`EvalConfig::max_depth`](crate::EvalConfig)
    #[error("expression nesting exceeds limit of {0}")]
    NestingTooDeep(usize),
}

/// Result type for evaluation
pub type EvalResult<T> = Result<T, EvalError>;
