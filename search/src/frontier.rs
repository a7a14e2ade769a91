//! FIFO/LIFO frontier and the visited set.
//!
//! Uses a `BTreeSet`-based visited set (not `HashSet`) so iteration order is
//! deterministic wherever the set is inspected.

use std::collections::{BTreeSet, VecDeque};

use crate::node::{SearchNode, VisitedKey};

/// Which end of the frontier nodes are removed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierDiscipline {
    /// Oldest inserted first (breadth-first).
    Fifo,
    /// Most recently inserted first (depth-first, depth-limited).
    Lifo,
}

impl FrontierDiscipline {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lifo => "lifo",
        }
    }
}

/// Pending-exploration collection.
///
/// Nodes are always appended at the back; `pop` takes from the front for
/// [`FrontierDiscipline::Fifo`] and from the back for
/// [`FrontierDiscipline::Lifo`]. The frontier does no deduplication: the
/// visited check happens when a node is popped.
#[derive(Debug)]
pub struct Frontier {
    discipline: FrontierDiscipline,
    nodes: VecDeque<SearchNode>,
    high_water: u64,
}

impl Frontier {
    #[must_use]
    pub fn new(discipline: FrontierDiscipline) -> Self {
        Self {
            discipline,
            nodes: VecDeque::new(),
            high_water: 0,
        }
    }

    pub fn push(&mut self, node: SearchNode) {
        self.nodes.push_back(node);
        let size = self.nodes.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove the next node per the frontier discipline.
    #[must_use]
    pub fn pop(&mut self) -> Option<SearchNode> {
        match self.discipline {
            FrontierDiscipline::Fifo => self.nodes.pop_front(),
            FrontierDiscipline::Lifo => self.nodes.pop_back(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// Set of states already processed within one search call.
#[derive(Debug, Default)]
pub struct VisitedSet {
    keys: BTreeSet<VisitedKey>,
}

impl VisitedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` visited. Returns `false` if it already was.
    pub fn insert(&mut self, key: VisitedKey) -> bool {
        self.keys.insert(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
