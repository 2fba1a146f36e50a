use calc_lexer::Token;

/// A cheap, copyable view over the tokens still to be consumed.
///
/// Parsing functions take a `TokenSlice` and hand back the remainder
/// alongside their result, in the `nom::IResult` shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenSlice<'a>(pub &'a [Token]);

impl<'a> TokenSlice<'a> {
    /// Create a new token slice
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenSlice(tokens)
    }

    /// Get the current token without advancing
    pub fn peek(&self) -> Option<&'a Token> {
        self.0.first()
    }

    /// The slice without its first token
    pub fn advance(&self) -> Self {
        TokenSlice(self.0.get(1..).unwrap_or_default())
    }

    /// Number of tokens left
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if we're at the end of input
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_lexer::tokenize;

    #[test]
    fn test_advance() {
        let tokens = tokenize("1 + 2").unwrap();
        let slice = TokenSlice::new(&tokens);

        assert_eq!(slice.len(), 3);
        assert_eq!(slice.peek().map(|t| t.lexeme.as_str()), Some("1"));

        let rest = slice.advance().advance();
        assert_eq!(rest.peek().map(|t| t.lexeme.as_str()), Some("2"));

        let end = rest.advance();
        assert!(end.is_empty());
        assert!(end.peek().is_none());
        assert!(end.advance().is_empty());
    }
}
