//! Search node and visited-key types.

use vacuum_kernel::carrier::grid::GridWorld;
use vacuum_kernel::carrier::position::Position;
use vacuum_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// A node on the frontier.
///
/// Every node owns a full copy of the grid. The snapshot reflects the
/// cleaning done by its ancestors; the node's own cell is cleaned only when
/// the node is removed from the frontier and processed ([`SearchNode::clean`]).
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Agent position; always inside `snapshot`.
    pub position: Position,
    /// Independent dirt snapshot for this branch.
    pub snapshot: GridWorld,
    /// Positions from the start to `position`, inclusive. Never empty.
    pub path: Vec<Position>,
}

impl SearchNode {
    /// The synthetic root: start position, deep copy of the input grid,
    /// path `[start]`.
    #[must_use]
    pub fn root(grid: &GridWorld, start: Position) -> Self {
        Self {
            position: start,
            snapshot: grid.clone(),
            path: vec![start],
        }
    }

    /// Edge count from the start (`path.len() - 1`).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Dedup identity of this node's current state.
    #[must_use]
    pub fn visited_key(&self) -> VisitedKey {
        VisitedKey {
            position: self.position,
            dirt: self.snapshot.clone(),
        }
    }

    /// Clean the snapshot at the node's own position. Returns `true` iff a
    /// Dirty cell became Clean.
    pub fn clean(&mut self) -> bool {
        self.snapshot.clean(self.position)
    }

    /// Whether this node's snapshot has no dirt left.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.snapshot.is_goal()
    }

    /// Successors in north, south, west, east order.
    ///
    /// Each child gets its own copy of this node's snapshot and path.
    pub fn children(&self) -> impl Iterator<Item = SearchNode> + '_ {
        self.snapshot.neighbors(self.position).map(move |next| {
            let mut path = Vec::with_capacity(self.path.len() + 1);
            path.extend_from_slice(&self.path);
            path.push(next);
            SearchNode {
                position: next,
                snapshot: self.snapshot.clone(),
                path,
            }
        })
    }
}

/// Dedup identity: agent position plus the full dirt configuration.
///
/// Two nodes are the same state only if both coincide, regardless of the
/// cleaning history that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisitedKey {
    pub position: Position,
    pub dirt: GridWorld,
}

impl VisitedKey {
    /// Canonical bytes: row and col as u64 LE, then the grid identity bytes.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let grid = self.dirt.identity_bytes();
        let mut out = Vec::with_capacity(16 + grid.len());
        out.extend_from_slice(&(self.position.row as u64).to_le_bytes());
        out.extend_from_slice(&(self.position.col as u64).to_le_bytes());
        out.extend_from_slice(&grid);
        out
    }

    /// Domain-separated SHA-256 fingerprint, used in audit traces.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(HashDomain::VisitedKey, &self.identity_bytes())
    }
}
