//! Lexer implementation for arithmetic expressions
//! Converts source text into a stream of tokens for the evaluator

use logos::Logos;
use std::ops::Range;

use crate::error::LexError;
use crate::token::{Location, Token, TokenKind};
use crate::LogosToken;

/// The main lexer struct that holds the state of the lexing process
pub struct Lexer<'a> {
    /// The source text being lexed
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The byte offset `line`/`column` refer to
    offset: usize,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
    /// Set once an error has been yielded; the lexer is fused afterwards
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            offset: 0,
            inner: LogosToken::lexer(source),
            failed: false,
        }
    }

    /// Advance line/column tracking up to the start of `span`.
    /// Columns count characters, not bytes.
    fn sync_position_to(&mut self, span: &Range<usize>) {
        let text = &self.source[self.offset..span.start];

        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else if c == '\r' {
                // \r\n is a single line break
                if iter.peek() == Some(&'\n') {
                    iter.next();
                }
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.offset = span.start;
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let raw = self.inner.next()?;
        let span = self.inner.span();
        self.sync_position_to(&span);
        let location = self.location();

        match raw {
            Ok(raw) => {
                let token = Token::new(TokenKind::from(raw), &self.source[span], location);
                #[cfg(feature = "logging")]
                log::trace!("lexed {:?} '{}' at {}", token.kind, token.lexeme, location);
                Some(Ok(token))
            }
            Err(()) => {
                self.failed = true;
                let character = self.source[span.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                #[cfg(feature = "logging")]
                log::trace!("unknown character {character:?} at {location}");
                Some(Err(LexError::UnknownCharacter {
                    character,
                    location,
                }))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenize a whole expression, stopping at the first unknown character.
///
/// Empty or all-whitespace input yields an empty sequence.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
