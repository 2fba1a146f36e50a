//! Operand parsing: numbers, prefix operators and parenthesized groups.

use calc_lexer::TokenKind;

use super::binary::parse_expr;
use super::{fail, Depth, ParseResult};
use crate::error::EvalError;
use crate::precedence::PREFIX;
use crate::token_slice::TokenSlice;

/// Parses one operand.
///
/// - a number literal, parsed as `f64`
/// - `+` or `-` followed by an expression at prefix precedence
/// - `(` expression `)`
///
/// Anything else, including running out of tokens, is
/// [`EvalError::ExpectedOperand`].
pub fn parse_operand(input: TokenSlice<'_>, depth: Depth) -> ParseResult<'_> {
    let Some(token) = input.peek() else {
        return fail(EvalError::ExpectedOperand(None));
    };
    let rest = input.advance();

    match token.kind {
        // Literals too large for f64 are rejected rather than read as infinity
        TokenKind::Number => match token.lexeme.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok((rest, value)),
            _ => fail(EvalError::InvalidNumber(token.lexeme.clone())),
        },
        // In operand position `+`/`-` are prefix operators
        TokenKind::Add => parse_expr(rest, PREFIX.precedence, depth),
        TokenKind::Sub => {
            let (rest, value) = parse_expr(rest, PREFIX.precedence, depth)?;
            Ok((rest, -value))
        }
        TokenKind::LParen => {
            let (rest, value) = parse_expr(rest, 0, depth)?;
            match rest.peek() {
                Some(close) if close.kind == TokenKind::RParen => Ok((rest.advance(), value)),
                _ => fail(EvalError::MissingCloseParen),
            }
        }
        _ => fail(EvalError::ExpectedOperand(Some(token.lexeme.clone()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn operand(source: &str) -> Result<(usize, f64), EvalError> {
        let tokens = tokenize(source).unwrap();
        match parse_operand(TokenSlice::new(&tokens), Depth::new(64)) {
            Ok((rest, value)) => Ok((rest.len(), value)),
            Err(nom::Err::Failure(err)) | Err(nom::Err::Error(err)) => Err(err),
            Err(nom::Err::Incomplete(_)) => panic!("evaluator never reports Incomplete"),
        }
    }

    #[test]
    fn test_number() {
        assert_eq!(operand("2.5 + 1"), Ok((2, 2.5)));
        assert_eq!(operand(".5"), Ok((0, 0.5)));
        assert_eq!(operand("5."), Ok((0, 5.0)));
    }

    #[test]
    fn test_invalid_numbers() {
        for bad in [".", "..", "1..2", "127.0.0.1"] {
            assert_eq!(operand(bad), Err(EvalError::InvalidNumber(bad.to_string())));
        }
    }

    #[test]
    fn test_overflowing_literal() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(operand(&huge), Err(EvalError::InvalidNumber(huge.clone())));
        // Underflow rounds to zero like any other literal
        let tiny = format!("0.{}1", "0".repeat(400));
        assert_eq!(operand(&tiny), Ok((0, 0.0)));
    }

    #[test]
    fn test_prefix_binds_looser_than_power() {
        // -2^2 consumes the whole power
        assert_eq!(operand("-2^2"), Ok((0, -4.0)));
        // but stops before `*`
        assert_eq!(operand("-2*3"), Ok((2, -2.0)));
        assert_eq!(operand("+-1"), Ok((0, -1.0)));
    }

    #[test]
    fn test_group() {
        assert_eq!(operand("(1 + 2) * 3"), Ok((2, 3.0)));
        assert_eq!(operand("(1 + 2"), Err(EvalError::MissingCloseParen));
        assert_eq!(operand("(1 + 2 3"), Err(EvalError::MissingCloseParen));
    }

    #[test]
    fn test_expected_operand() {
        assert_eq!(operand(""), Err(EvalError::ExpectedOperand(None)));
        assert_eq!(
            operand(")"),
            Err(EvalError::ExpectedOperand(Some(")".to_string())))
        );
        assert_eq!(
            operand("*2"),
            Err(EvalError::ExpectedOperand(Some("*".to_string())))
        );
        assert_eq!(operand("-"), Err(EvalError::ExpectedOperand(None)));
    }
}
