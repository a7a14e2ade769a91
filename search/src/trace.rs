//! Expansion audit trace.
//!
//! One [`ExpandEvent`] per frontier pop, in pop order, when
//! [`crate::policy::SearchPolicy::record_trace`] is set. The trace is the
//! decision surface of a run: replaying it reproduces the node count and
//! shows why every popped node was kept or discarded.

use vacuum_kernel::carrier::position::Position;

/// What happened to a popped node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandOutcome {
    /// Path longer than the depth ceiling; discarded without marking visited.
    DepthCutoff,
    /// State already visited in this call; discarded.
    Duplicate,
    /// Snapshot clean after cleaning; search stops here.
    Goal,
    /// Successors pushed onto the frontier.
    Expanded { children: u8 },
}

impl ExpandOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DepthCutoff => "depth_cutoff",
            Self::Duplicate => "duplicate",
            Self::Goal => "goal",
            Self::Expanded { .. } => "expanded",
        }
    }
}

/// A single frontier pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Zero-based pop order within the whole call (across IDS iterations).
    pub expansion_order: u64,
    /// Depth ceiling in force, `None` for unbounded searches.
    pub depth_limit: Option<usize>,
    pub position: Position,
    /// Edge count from the start.
    pub depth: usize,
    /// Hex fingerprint of the node's visited key at pop time (before cleaning).
    pub state_fingerprint: String,
    pub outcome: ExpandOutcome,
}

impl ExpandEvent {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut outcome = serde_json::json!({ "type": self.outcome.as_str() });
        if let ExpandOutcome::Expanded { children } = self.outcome {
            outcome["children"] = serde_json::json!(children);
        }
        serde_json::json!({
            "depth": self.depth,
            "depth_limit": self.depth_limit,
            "expansion_order": self.expansion_order,
            "outcome": outcome,
            "position": [self.position.row, self.position.col],
            "state_fingerprint": self.state_fingerprint,
        })
    }
}
