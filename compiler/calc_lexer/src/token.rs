//! Token types shared by the lexer and the evaluator.

use std::fmt;

/// Represents a token's location in the source text.
///
/// Line and column numbers are 1-based, the byte offset is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number
    pub line: usize,
    /// The 1-based column number, counted in characters
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

/// The kind of a token.
///
/// `UnaryPlus` and `UnaryMinus` are never produced by the lexer. A `+` or
/// `-` is always lexed as `Add`/`Sub`; the evaluator treats it as unary
/// when it appears where an operand is expected, and uses the unary kinds
/// only to look up their precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// A digit/dot run
    Number,

    // Operators
    /// Binary `+`
    Add,
    /// Binary `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// Prefix `+`
    UnaryPlus,
    /// Prefix `-`
    UnaryMinus,
    /// `^`
    Pow,

    // Structural
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl TokenKind {
    /// The character this kind is written with, or `None` for numbers.
    pub fn symbol(&self) -> Option<char> {
        match self {
            TokenKind::Number => None,
            TokenKind::Add | TokenKind::UnaryPlus => Some('+'),
            TokenKind::Sub | TokenKind::UnaryMinus => Some('-'),
            TokenKind::Mul => Some('*'),
            TokenKind::Div => Some('/'),
            TokenKind::Mod => Some('%'),
            TokenKind::Pow => Some('^'),
            TokenKind::LParen => Some('('),
            TokenKind::RParen => Some(')'),
        }
    }

    /// Returns true for every operator kind, unary ones included
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Mod
                | TokenKind::UnaryPlus
                | TokenKind::UnaryMinus
                | TokenKind::Pow
        )
    }

    /// Returns true for the operator kinds the lexer can produce
    pub fn is_binary_operator(&self) -> bool {
        self.is_operator() && !matches!(self, TokenKind::UnaryPlus | TokenKind::UnaryMinus)
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is
    pub kind: TokenKind,
    /// The exact source text of the token
    pub lexeme: String,
    /// Where the token starts in the source
    pub location: Location,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: &str, location: Location) -> Self {
        Self {
            kind,
            lexeme: lexeme.to_string(),
            location,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(c) => write!(f, "{c}"),
            None => f.write_str("number"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})@{}", self.kind, self.lexeme, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
