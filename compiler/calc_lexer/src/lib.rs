//! Arithmetic expression tokenizer
//!
//! This crate provides lexical analysis for floating-point arithmetic
//! expressions, converting source text into the token sequence consumed by
//! the evaluator.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{tokenize, Lexer};
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenKind};
