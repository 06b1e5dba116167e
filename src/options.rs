/// Settings for a single top-level parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Enables the packrat cache. Without it, heavily backtracking grammars can
    /// take exponential time. For most grammars the result is the same either
    /// way, with two exceptions:
    ///
    /// - Left recursion. With the cache, re-entering a rule at the same offset
    ///   is a no-match. Without it, the rule recurses until `max_depth` aborts
    ///   the parse or the stack overflows.
    /// - `max_depth`. A cache hit returns without re-running the nested
    ///   parsers, so the cached run can stay under a limit that the uncached
    ///   run exceeds.
    pub use_memoization: bool,
    /// Maximum nesting of parser invocations before the parse is aborted with
    /// [`ParseError::RecursionLimit`](crate::ParseError::RecursionLimit).
    /// `None` leaves the bound to the thread's stack.
    pub max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            use_memoization: true,
            max_depth: None,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_memoization(mut self, use_memoization: bool) -> Self {
        self.use_memoization = use_memoization;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert!(options.use_memoization);
        assert_eq!(options.max_depth, None);
    }

    #[test]
    fn test_builder() {
        let options = ParseOptions::new().with_memoization(false).with_max_depth(64);
        assert!(!options.use_memoization);
        assert_eq!(options.max_depth, Some(64));
    }
}
