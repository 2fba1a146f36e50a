//! Operator precedence and associativity table.

use calc_lexer::TokenKind;

/// How a chain of operators with equal precedence groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`
    Right,
}

/// Binding strength of an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    /// Higher binds tighter
    pub precedence: u8,
    pub associativity: Associativity,
}

impl OperatorInfo {
    const fn left(precedence: u8) -> Self {
        Self {
            precedence,
            associativity: Associativity::Left,
        }
    }

    const fn right(precedence: u8) -> Self {
        Self {
            precedence,
            associativity: Associativity::Right,
        }
    }

    /// Minimum precedence for the right-hand operand of this operator.
    ///
    /// Left-associative operators require strictly tighter operators on the
    /// right; right-associative ones accept their own level again.
    pub fn next_min_precedence(&self) -> u8 {
        match self.associativity {
            Associativity::Left => self.precedence + 1,
            Associativity::Right => self.precedence,
        }
    }
}

/// `+` `-`
pub const ADDITIVE: OperatorInfo = OperatorInfo::left(1);
/// `*` `/` `%`
pub const MULTIPLICATIVE: OperatorInfo = OperatorInfo::left(2);
/// Prefix `+` `-`. Sits between multiplication and power so that `-2^2`
/// is `-(2^2)` while `2*-3` still parses.
pub const PREFIX: OperatorInfo = OperatorInfo::right(3);
/// `^`
pub const POWER: OperatorInfo = OperatorInfo::right(4);

/// Look up any operator kind, unary ones included.
pub fn operator_info(kind: &TokenKind) -> Option<OperatorInfo> {
    match kind {
        TokenKind::Add | TokenKind::Sub => Some(ADDITIVE),
        TokenKind::Mul | TokenKind::Div | TokenKind::Mod => Some(MULTIPLICATIVE),
        TokenKind::UnaryPlus | TokenKind::UnaryMinus => Some(PREFIX),
        TokenKind::Pow => Some(POWER),
        TokenKind::Number | TokenKind::LParen | TokenKind::RParen => None,
    }
}

/// Look up an operator that may appear between two operands.
pub fn binary_operator(kind: &TokenKind) -> Option<OperatorInfo> {
    operator_info(kind).filter(|_| kind.is_binary_operator())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table() {
        let levels: Vec<(TokenKind, u8)> = [
            TokenKind::Add,
            TokenKind::Sub,
            TokenKind::Mul,
            TokenKind::Div,
            TokenKind::Mod,
            TokenKind::UnaryPlus,
            TokenKind::UnaryMinus,
            TokenKind::Pow,
        ]
        .into_iter()
        .map(|k| (k, operator_info(&k).unwrap().precedence))
        .collect();

        assert_eq!(
            levels,
            vec![
                (TokenKind::Add, 1),
                (TokenKind::Sub, 1),
                (TokenKind::Mul, 2),
                (TokenKind::Div, 2),
                (TokenKind::Mod, 2),
                (TokenKind::UnaryPlus, 3),
                (TokenKind::UnaryMinus, 3),
                (TokenKind::Pow, 4),
            ]
        );
    }

    #[test]
    fn test_associativity() {
        assert_eq!(ADDITIVE.next_min_precedence(), 2);
        assert_eq!(MULTIPLICATIVE.next_min_precedence(), 3);
        assert_eq!(POWER.next_min_precedence(), 4);
        assert_eq!(PREFIX.associativity, Associativity::Right);
    }

    #[test]
    fn test_non_operators() {
        assert_eq!(operator_info(&TokenKind::Number), None);
        assert_eq!(operator_info(&TokenKind::LParen), None);
        assert_eq!(binary_operator(&TokenKind::UnaryMinus), None);
        assert_eq!(binary_operator(&TokenKind::Sub), Some(ADDITIVE));
    }
}
