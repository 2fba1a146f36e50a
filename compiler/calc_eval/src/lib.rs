//! Floating-point arithmetic expression evaluator.
//!
//! Expressions are tokenized by [`calc_lexer`] and interpreted directly into
//! an `f64` by a precedence-climbing parser; no syntax tree is built.
//!
//! ```text
//! evaluate("2 + 3 ^ 2 * 3 + 4") == Ok(33.0)
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod precedence;
pub mod token_slice;

pub use config::EvalConfig;
pub use error::EvalError;
pub use evaluator::{evaluate, Evaluator};
pub use precedence::{Associativity, OperatorInfo};
pub use token_slice::TokenSlice;
