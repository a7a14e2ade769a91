//! Search policy types.

/// Default iterative-deepening bound: limits `0..20` are tried.
pub const DEFAULT_MAX_DEPTH: i64 = 20;

/// Search configuration shared by every algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Iterative deepening runs depth-limited searches with limits
    /// `0..max_depth`. Values `<= 0` run no iterations at all.
    /// Ignored by breadth-first and depth-first search.
    pub max_depth: i64,
    /// Record one [`crate::trace::ExpandEvent`] per frontier pop.
    pub record_trace: bool,
}

impl SearchPolicy {
    /// Number of depth-limited iterations this policy allows.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        if self.max_depth <= 0 {
            0
        } else {
            usize::try_from(self.max_depth).unwrap_or(usize::MAX)
        }
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            record_trace: false,
        }
    }
}
