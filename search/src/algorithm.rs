//! Closed set of search strategies.

use std::str::FromStr;

use vacuum_kernel::carrier::grid::GridWorld;
use vacuum_kernel::carrier::position::Position;

use crate::error::SearchError;
use crate::ids::iterative_deepening;
use crate::policy::SearchPolicy;
use crate::search::{breadth_first, depth_first, SearchResult};

/// A search strategy. Every variant shares the same
/// `search(grid, start) -> SearchResult` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    IterativeDeepening,
}

impl Algorithm {
    /// All strategies in presentation order.
    pub const ALL: [Algorithm; 3] = [Self::BreadthFirst, Self::DepthFirst, Self::IterativeDeepening];

    /// Short machine name (`bfs`, `dfs`, `ids`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::IterativeDeepening => "ids",
        }
    }

    /// Display label (`BFS`, `DFS`, `IDS`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::IterativeDeepening => "IDS",
        }
    }

    /// Run this strategy.
    ///
    /// `policy.max_depth` only affects [`Algorithm::IterativeDeepening`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidInput`] if `start` lies outside `grid`.
    pub fn search(
        self,
        grid: &GridWorld,
        start: Position,
        policy: &SearchPolicy,
    ) -> Result<SearchResult, SearchError> {
        match self {
            Self::BreadthFirst => breadth_first(grid, start, policy),
            Self::DepthFirst => depth_first(grid, start, policy),
            Self::IterativeDeepening => iterative_deepening(grid, start, policy),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::UnknownAlgorithm { name: s.to_string() })
    }
}
