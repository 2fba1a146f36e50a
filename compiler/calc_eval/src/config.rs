/// Default limit on nested `parse_expr` calls.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Stack reserved per nesting level: one `parse_expr` and one
/// `parse_operand` frame, with headroom for unoptimized builds.
pub const STACK_PER_LEVEL: usize = 4 * 1024;

/// Stack reserved for everything outside the recursion.
pub const BASE_STACK: usize = 1024 * 1024;

/// Tunables for an [`Evaluator`](crate::Evaluator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum recursion depth of the precedence climber. Parentheses,
    /// prefix operators and `^` chains each add a level; `+`/`*` chains
    /// of equal precedence do not.
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EvalConfig {
    /// Configuration with a custom depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Stack size of the evaluation thread, enough for `max_depth` levels
    pub fn stack_size(&self) -> usize {
        self.max_depth
            .saturating_mul(STACK_PER_LEVEL)
            .saturating_add(BASE_STACK)
    }
}
