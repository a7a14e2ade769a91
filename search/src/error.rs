//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Failing to reach the
//! goal is a normal outcome expressed via
//! [`crate::search::TerminationReason`], never an error.

use vacuum_kernel::carrier::grid::InvalidInputError;

/// Typed failure for pre-flight search validation.
///
/// Returned before the root node is expanded; no result is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Grid or start position rejected.
    InvalidInput(InvalidInputError),
    /// An algorithm name did not match `bfs`, `dfs` or `ids`.
    UnknownAlgorithm { name: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid search input: {e}"),
            Self::UnknownAlgorithm { name } => {
                write!(f, "unknown algorithm {name:?} (expected bfs, dfs or ids)")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::UnknownAlgorithm { .. } => None,
        }
    }
}

impl From<InvalidInputError> for SearchError {
    fn from(e: InvalidInputError) -> Self {
        Self::InvalidInput(e)
    }
}
