//! Raw token recognizer generated by `logos`.

use logos::Logos;

use crate::token::TokenKind;

/// Raw token type produced by the logos state machine.
///
/// A number is any run of ASCII digits and dots. Whether the run is a
/// well-formed float is decided later, when the evaluator parses it.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum LogosToken {
    /// Digit/dot run, e.g. `3.14`, `.5`, `1..2`
    #[regex(r"[0-9.]+")]
    Number,

    // Operators
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
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,

    // Delimiters
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl From<LogosToken> for TokenKind {
    /// `+` and `-` always map to their binary kinds; the evaluator decides
    /// from parse position whether they act as unary operators.
    fn from(raw: LogosToken) -> Self {
        match raw {
            LogosToken::Number => TokenKind::Number,
            LogosToken::Plus => TokenKind::Add,
            LogosToken::Minus => TokenKind::Sub,
            LogosToken::Star => TokenKind::Mul,
            LogosToken::Slash => TokenKind::Div,
            LogosToken::Percent => TokenKind::Mod,
            LogosToken::Caret => TokenKind::Pow,
            LogosToken::LeftParen => TokenKind::LParen,
            LogosToken::RightParen => TokenKind::RParen,
        }
    }
}
