//! # Precedence-climbing evaluator
//!
//! Parsing and evaluation happen in one pass: [`binary::parse_expr`] and
//! [`operand::parse_operand`] call each other recursively and return the
//! computed value together with the unconsumed tokens, without building a
//! syntax tree.
//!
//! A `+` or `-` token met where an operand is expected is a prefix operator.
//! Its operand is parsed with the prefix precedence as the minimum, so `^`
//! still binds tighter (`-2^2 == -4`) while `*` does not (`-2*3` negates
//! only the `2`).

pub mod binary;
pub mod operand;

use calc_lexer::tokenize;
use nom::IResult;

use crate::config::EvalConfig;
use crate::error::{EvalError, EvalResult};
use crate::token_slice::TokenSlice;

pub use binary::{apply, parse_expr};
pub use operand::parse_operand;

/// Result of a parsing step: the remaining tokens and the value so far.
pub type ParseResult<'a> = IResult<TokenSlice<'a>, f64, EvalError>;

/// Stop parsing with `err`; the evaluator never backtracks.
pub(crate) fn fail<'a>(err: EvalError) -> ParseResult<'a> {
    Err(nom::Err::Failure(err))
}

/// Recursion budget threaded through the parsing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depth {
    current: usize,
    limit: usize,
}

impl Depth {
    /// A fresh budget allowing `limit` nested levels
    pub fn new(limit: usize) -> Self {
        Self { current: 0, limit }
    }

    /// Enter one more level
    pub fn descend(self) -> Result<Self, nom::Err<EvalError>> {
        if self.current >= self.limit {
            return Err(nom::Err::Failure(EvalError::NestingTooDeep(self.limit)));
        }
        Ok(Self {
            current: self.current + 1,
            ..self
        })
    }
}

/// Evaluates expressions with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Create an evaluator with the given configuration
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate a complete expression.
    ///
    /// Fails on the first lexical or syntax error; any tokens left after a
    /// complete expression are reported as [`EvalError::TrailingTokens`].
    /// Arithmetic itself never fails: division by zero and friends follow
    /// IEEE-754.
    ///
    /// The recursion runs on a scoped thread whose stack is sized from
    /// [`EvalConfig::stack_size`], so nesting up to `max_depth` never
    /// depends on the caller's stack.
    pub fn evaluate(&self, source: &str) -> EvalResult<f64> {
        std::thread::scope(|scope| {
            let worker = std::thread::Builder::new()
                .name("calc-eval".to_string())
                .stack_size(self.config.stack_size())
                .spawn_scoped(scope, || self.evaluate_here(source));

            match worker {
                Ok(handle) => handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic)),
                Err(err) => {
                    log::warn!("cannot spawn evaluation thread ({err}), evaluating inline");
                    self.evaluate_here(source)
                }
            }
        })
    }

    fn evaluate_here(&self, source: &str) -> EvalResult<f64> {
        log::debug!("evaluate: {source:?}");

        let tokens = tokenize(source)?;
        let input = TokenSlice::new(&tokens);

        let (rest, value) = match parse_expr(input, 0, Depth::new(self.config.max_depth)) {
            Ok(done) => done,
            Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => return Err(err),
            Err(nom::Err::Incomplete(_)) => return Err(EvalError::ExpectedOperand(None)),
        };

        if let Some(token) = rest.peek() {
            return Err(EvalError::TrailingTokens(token.lexeme.clone()));
        }

        log::debug!("evaluate: {source:?} = {value}");
        Ok(value)
    }
}

/// Evaluate `source` with the default configuration.
pub fn evaluate(source: &str) -> EvalResult<f64> {
    Evaluator::default().evaluate(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_DEPTH;
    use crate::tests::init_test_logger;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_evaluate_simple() {
        init_test_logger();
        assert_eq!(evaluate("1 + 2 * 3"), Ok(7.0));
        assert_eq!(evaluate("(1+2)*3"), Ok(9.0));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(evaluate(""), Err(EvalError::ExpectedOperand(None)));
        assert_eq!(evaluate("   "), Err(EvalError::ExpectedOperand(None)));
    }

    #[test]
    fn test_trailing_tokens() {
        assert_eq!(
            evaluate("1+2)"),
            Err(EvalError::TrailingTokens(")".to_string()))
        );
        assert_eq!(
            evaluate("1 2"),
            Err(EvalError::TrailingTokens("2".to_string()))
        );
    }

    #[test]
    fn test_lex_error_propagates() {
        assert!(matches!(evaluate("1+a"), Err(EvalError::Lex(_))));
    }

    #[test]
    fn test_depth_budget() {
        let depth = Depth::new(1);
        let inner = depth.descend().unwrap();
        assert_eq!(
            inner,
            Depth {
                current: 1,
                limit: 1
            }
        );
        assert!(matches!(
            inner.descend(),
            Err(nom::Err::Failure(EvalError::NestingTooDeep(1)))
        ));
    }

    #[test]
    fn test_nesting_limit() {
        let evaluator = Evaluator::new(EvalConfig::with_max_depth(4));
        assert_eq!(evaluator.evaluate("((1))"), Ok(1.0));
        assert_eq!(
            evaluator.evaluate("((((1))))"),
            Err(EvalError::NestingTooDeep(4))
        );
        // Flat chains do not deepen the recursion
        assert_eq!(evaluator.evaluate("1+1+1+1+1+1+1+1"), Ok(8.0));
    }

    #[test]
    fn test_default_limit_allows_deep_nesting() {
        let parens = format!("{}1{}", "(".repeat(300), ")".repeat(300));
        assert_eq!(evaluate(&parens), Ok(1.0));

        let negations = format!("{}1", "-".repeat(300));
        assert_eq!(evaluate(&negations), Ok(1.0));

        let powers = format!("1{}", "^1".repeat(300));
        assert_eq!(evaluate(&powers), Ok(1.0));
    }

    #[test]
    fn test_default_limit_boundary() {
        // The outermost parse_expr is level one, each '(' adds another
        let inside = DEFAULT_MAX_DEPTH - 1;
        let source = format!("{}1{}", "(".repeat(inside), ")".repeat(inside));
        assert_eq!(evaluate(&source), Ok(1.0));

        let source = format!("{}1{}", "(".repeat(inside + 1), ")".repeat(inside + 1));
        assert_eq!(
            evaluate(&source),
            Err(EvalError::NestingTooDeep(DEFAULT_MAX_DEPTH))
        );
    }

    #[test]
    fn test_deep_unary_chain_from_small_stack_thread() {
        let source = format!("{}2", "-".repeat(DEFAULT_MAX_DEPTH - 2));
        let result = std::thread::Builder::new()
            .stack_size(64 * 1024)
            .spawn(move || evaluate(&source))
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(result, Ok(2.0));
    }
}
