//! Iterative deepening: depth-limited search under growing ceilings.
//!
//! Each iteration starts from scratch (fresh frontier, fresh visited set) and
//! node counts are summed across iterations. An explicit loop over limits and
//! the explicit LIFO frontier inside each iteration keep stack usage flat no
//! matter how large `max_depth` is.

use vacuum_kernel::carrier::grid::GridWorld;
use vacuum_kernel::carrier::position::Position;

use crate::error::SearchError;
use crate::frontier::FrontierDiscipline;
use crate::policy::SearchPolicy;
use crate::search::{frontier_search, SearchResult, SearchStats, TerminationReason};

/// Run depth-limited search with limits `0, 1, …, max_depth - 1`.
///
/// Returns on the first successful iteration with the node count accumulated
/// over all iterations so far. If none succeeds, returns failure with the
/// full accumulated count. `max_depth <= 0` runs nothing and reports zero
/// expanded nodes.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] if `start` lies outside `grid`.
pub fn iterative_deepening(
    grid: &GridWorld,
    start: Position,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    grid.check_start(start)?;

    let mut nodes_expanded: u64 = 0;
    let mut stats = SearchStats::default();
    let mut trace = Vec::new();

    for limit in 0..policy.iteration_count() {
        let iteration = frontier_search(
            grid,
            start,
            FrontierDiscipline::Lifo,
            Some(limit),
            policy.record_trace,
            nodes_expanded,
        );
        nodes_expanded += iteration.nodes_expanded;
        stats.absorb(&iteration.stats);
        trace.extend(iteration.trace);

        tracing::debug!(
            limit,
            iteration_nodes = iteration.nodes_expanded,
            nodes_expanded,
            found = iteration.path.is_some(),
            "depth-limited iteration finished"
        );

        if let Some(path) = iteration.path {
            return Ok(SearchResult {
                path: Some(path),
                nodes_expanded,
                termination: TerminationReason::GoalReached,
                stats,
                trace,
            });
        }
    }

    tracing::debug!(
        max_depth = policy.max_depth,
        nodes_expanded,
        "iterative deepening exhausted depth limits"
    );
    Ok(SearchResult {
        path: None,
        nodes_expanded,
        termination: TerminationReason::DepthLimitExhausted {
            max_depth: policy.max_depth,
        },
        stats,
        trace,
    })
}
