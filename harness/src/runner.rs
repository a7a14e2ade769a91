//! Harness runner: times an algorithm over a room and packages the result.
//!
//! The runner uses ONLY the search crate's public entry points. It does not
//! implement search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! Room → Algorithm::search() (timed) → RunRecord → SearchReport → digest
//! ```

use std::time::{Duration, Instant};

use vacuum_kernel::proof::canon::CanonError;
use vacuum_kernel::proof::hash::ContentHash;
use vacuum_search::algorithm::Algorithm;
use vacuum_search::error::SearchError;
use vacuum_search::policy::SearchPolicy;
use vacuum_search::report::SearchReport;
use vacuum_search::search::SearchResult;

use crate::room::Room;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Pre-flight search rejection.
    Search(SearchError),
    /// Report serialization failed.
    Canon(CanonError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::Canon(e) => write!(f, "report serialization failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::Canon(e) => Some(e),
        }
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// One timed algorithm run.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    /// Wall-clock time spent inside the search call.
    pub elapsed: Duration,
}

impl RunRecord {
    /// Deterministic report for this run (elapsed time excluded).
    #[must_use]
    pub fn report(&self, room: &Room, policy: &SearchPolicy) -> SearchReport {
        SearchReport::new(self.algorithm, policy, &room.grid, room.start, &self.result)
    }
}

/// Run `algorithm` on `room`, measuring elapsed time around the search call.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the search rejects its input.
pub fn run_algorithm(
    room: &Room,
    algorithm: Algorithm,
    policy: &SearchPolicy,
) -> Result<RunRecord, RunError> {
    let started = Instant::now();
    let result = algorithm.search(&room.grid, room.start, policy)?;
    let elapsed = started.elapsed();

    tracing::info!(
        algorithm = algorithm.name(),
        found = result.path.is_some(),
        steps = ?result.steps(),
        nodes = result.nodes_expanded,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "run finished"
    );

    Ok(RunRecord {
        algorithm,
        result,
        elapsed,
    })
}

/// Run every algorithm on the same room, in [`Algorithm::ALL`] order.
///
/// # Errors
///
/// Returns the first [`RunError`] encountered.
pub fn run_all(room: &Room, policy: &SearchPolicy) -> Result<Vec<RunRecord>, RunError> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| run_algorithm(room, algorithm, policy))
        .collect()
}

/// Run and return the canonical report plus its digest.
///
/// # Errors
///
/// Returns [`RunError`] if the search or report serialization fails.
pub fn run_report(
    room: &Room,
    algorithm: Algorithm,
    policy: &SearchPolicy,
) -> Result<(SearchReport, ContentHash), RunError> {
    let record = run_algorithm(room, algorithm, policy)?;
    let report = record.report(room, policy);
    let digest = report.digest()?;
    Ok((report, digest))
}
