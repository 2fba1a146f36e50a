//! Lexer errors.

use thiserror::Error;

use crate::token::Location;

/// Errors that can occur while tokenizing
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character outside digits, `.`, operators, parentheses and ASCII whitespace
    #[error("unknown character '{character}' at {location}")]
    UnknownCharacter {
        /// The offending character
        character: char,
        /// Where it was found
        location: Location,
    },
}
