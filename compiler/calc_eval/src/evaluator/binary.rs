//! Binary operator loop of the precedence climber.

use calc_lexer::TokenKind;

use super::operand::parse_operand;
use super::{Depth, ParseResult};
use crate::error::EvalError;
use crate::precedence::binary_operator;
use crate::token_slice::TokenSlice;

/// Parses and evaluates an expression whose binary operators all have
/// precedence `>= min_precedence`.
///
/// 1. Evaluate the left operand.
/// 2. While the next token is a binary operator at or above
///    `min_precedence`, evaluate the right operand with the operator's
///    [`next_min_precedence`](crate::OperatorInfo::next_min_precedence)
///    and fold it into the left value.
///
/// Stops at the first token that is not such an operator and returns it
/// unconsumed together with the value.
pub fn parse_expr(input: TokenSlice<'_>, min_precedence: u8, depth: Depth) -> ParseResult<'_> {
    let depth = depth.descend()?;

    let (mut input, mut left) = parse_operand(input, depth)?;

    while let Some(token) = input.peek() {
        let Some(info) = binary_operator(&token.kind) else {
            break;
        };
        if info.precedence < min_precedence {
            break;
        }

        let (rest, right) = parse_expr(input.advance(), info.next_min_precedence(), depth)?;
        let value = apply(token.kind, left, right).map_err(nom::Err::Failure)?;
        log::trace!("{left} {} {right} = {value}", token.kind);

        left = value;
        input = rest;
    }

    Ok((input, left))
}

/// Applies a binary operator with IEEE-754 semantics.
///
/// `%` keeps the sign of the dividend (`-5 % 3 == -2`). Division by zero
/// gives an infinity or NaN rather than an error.
pub fn apply(kind: TokenKind, left: f64, right: f64) -> Result<f64, EvalError> {
    match kind {
        TokenKind::Add => Ok(left + right),
        TokenKind::Sub => Ok(left - right),
        TokenKind::Mul => Ok(left * right),
        TokenKind::Div => Ok(left / right),
        TokenKind::Mod => Ok(left % right),
        TokenKind::Pow => Ok(left.powf(right)),
        other => Err(EvalError::UnknownOperator(other)),
    }
}
