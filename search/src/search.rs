//! Search entry points and the shared expansion loop.
//!
//! Breadth-first, depth-first and depth-limited search are the same loop
//! over a [`Frontier`] with a different discipline and an optional depth
//! ceiling. Per popped node, in order:
//!
//! 1. count the pop as an expansion,
//! 2. discard if the path is longer than the depth ceiling,
//! 3. discard if the visited key was already processed, else mark it,
//! 4. clean the node's own cell,
//! 5. stop if the snapshot is goal,
//! 6. push north, south, west, east successors.

use vacuum_kernel::carrier::grid::GridWorld;
use vacuum_kernel::carrier::position::Position;

use crate::error::SearchError;
use crate::frontier::{Frontier, FrontierDiscipline, VisitedSet};
use crate::node::SearchNode;
use crate::policy::SearchPolicy;
use crate::trace::{ExpandEvent, ExpandOutcome};

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A popped node's snapshot was fully clean.
    GoalReached,
    /// The frontier emptied without reaching the goal.
    FrontierExhausted,
    /// Iterative deepening ran out of depth limits.
    DepthLimitExhausted { max_depth: i64 },
}

impl TerminationReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::DepthLimitExhausted { .. } => "depth_limit_exhausted",
        }
    }
}

/// Counters collected alongside the node count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Pops discarded because their visited key was already processed.
    pub duplicates_suppressed: u64,
    /// Pops discarded for exceeding the depth ceiling.
    pub depth_cutoffs: u64,
    /// Largest frontier size seen (max over iterations for IDS).
    pub frontier_high_water: u64,
    /// Frontier searches run: 1 for BFS/DFS, the iteration count for IDS.
    pub iterations: u64,
}

impl SearchStats {
    /// Fold one iteration's counters into an accumulated total.
    pub fn absorb(&mut self, other: &SearchStats) {
        self.duplicates_suppressed += other.duplicates_suppressed;
        self.depth_cutoffs += other.depth_cutoffs;
        self.frontier_high_water = self.frontier_high_water.max(other.frontier_high_water);
        self.iterations += other.iterations;
    }
}

/// Result of a search execution.
///
/// Exhaustion is a normal outcome: `path` is `None` and `nodes_expanded`
/// holds the full count.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Start to goal, inclusive, when the goal was reached.
    pub path: Option<Vec<Position>>,
    /// Every frontier pop, including duplicate and depth-cutoff discards.
    pub nodes_expanded: u64,
    pub termination: TerminationReason,
    pub stats: SearchStats,
    /// Populated only when the policy asks for it.
    pub trace: Vec<ExpandEvent>,
}

impl SearchResult {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReason::GoalReached
    }

    /// Edge count of the path (`len - 1`).
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// The `(path-or-none, nodes-expanded)` pair.
    #[must_use]
    pub fn into_pair(self) -> (Option<Vec<Position>>, u64) {
        (self.path, self.nodes_expanded)
    }
}

/// Breadth-first search: FIFO frontier, no depth ceiling.
///
/// Returns a minimum-step path since every move costs one.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] if `start` lies outside `grid`.
pub fn breadth_first(
    grid: &GridWorld,
    start: Position,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    grid.check_start(start)?;
    Ok(frontier_search(
        grid,
        start,
        FrontierDiscipline::Fifo,
        None,
        policy.record_trace,
        0,
    ))
}

/// Depth-first search: LIFO frontier, no depth ceiling.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] if `start` lies outside `grid`.
pub fn depth_first(
    grid: &GridWorld,
    start: Position,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    grid.check_start(start)?;
    Ok(frontier_search(
        grid,
        start,
        FrontierDiscipline::Lifo,
        None,
        policy.record_trace,
        0,
    ))
}

/// Depth-limited search: LIFO frontier, nodes whose path has more than
/// `limit` edges are discarded when popped.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] if `start` lies outside `grid`.
pub fn depth_limited(
    grid: &GridWorld,
    start: Position,
    limit: usize,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    grid.check_start(start)?;
    Ok(frontier_search(
        grid,
        start,
        FrontierDiscipline::Lifo,
        Some(limit),
        policy.record_trace,
        0,
    ))
}

/// The shared expansion loop. `start` must already be validated.
///
/// `order_offset` shifts trace expansion orders so that iterative deepening
/// can concatenate traces from successive iterations.
pub(crate) fn frontier_search(
    grid: &GridWorld,
    start: Position,
    discipline: FrontierDiscipline,
    depth_limit: Option<usize>,
    record_trace: bool,
    order_offset: u64,
) -> SearchResult {
    tracing::debug!(
        discipline = discipline.as_str(),
        ?depth_limit,
        rows = grid.rows(),
        cols = grid.cols(),
        %start,
        dirty = grid.dirty_count(),
        "frontier search started"
    );

    let mut frontier = Frontier::new(discipline);
    let mut visited = VisitedSet::new();
    let mut stats = SearchStats {
        iterations: 1,
        ..SearchStats::default()
    };
    let mut trace = Vec::new();
    let mut nodes_expanded: u64 = 0;

    frontier.push(SearchNode::root(grid, start));

    while let Some(mut node) = frontier.pop() {
        let expansion_order = order_offset + nodes_expanded;
        nodes_expanded += 1;

        let fingerprint = if record_trace {
            node.visited_key().fingerprint().hex_digest().to_string()
        } else {
            String::new()
        };
        let mut record = |node: &SearchNode, outcome: ExpandOutcome| {
            tracing::trace!(
                expansion_order,
                position = %node.position,
                depth = node.depth(),
                outcome = outcome.as_str(),
                "node popped"
            );
            if record_trace {
                trace.push(ExpandEvent {
                    expansion_order,
                    depth_limit,
                    position: node.position,
                    depth: node.depth(),
                    state_fingerprint: fingerprint.clone(),
                    outcome,
                });
            }
        };

        if depth_limit.is_some_and(|limit| node.depth() > limit) {
            stats.depth_cutoffs += 1;
            record(&node, ExpandOutcome::DepthCutoff);
            continue;
        }

        if !visited.insert(node.visited_key()) {
            stats.duplicates_suppressed += 1;
            record(&node, ExpandOutcome::Duplicate);
            continue;
        }

        node.clean();

        if node.is_goal() {
            record(&node, ExpandOutcome::Goal);
            stats.frontier_high_water = frontier.high_water();
            tracing::debug!(
                nodes_expanded,
                steps = node.depth(),
                visited = visited.len(),
                "goal reached"
            );
            return SearchResult {
                path: Some(node.path),
                nodes_expanded,
                termination: TerminationReason::GoalReached,
                stats,
                trace,
            };
        }

        let mut children: u8 = 0;
        for child in node.children() {
            frontier.push(child);
            children += 1;
        }
        record(&node, ExpandOutcome::Expanded { children });
    }

    stats.frontier_high_water = frontier.high_water();
    tracing::debug!(
        nodes_expanded,
        visited = visited.len(),
        "frontier exhausted"
    );
    SearchResult {
        path: None,
        nodes_expanded,
        termination: TerminationReason::FrontierExhausted,
        stats,
        trace,
    }
}
