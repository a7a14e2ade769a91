//! Agent coordinates and the four axis-aligned moves.
//!
//! Move order is normative: north, south, west, east. Every search frontier
//! inserts successors in this order, so it decides tie-breaking and therefore
//! which of several equal-length paths is returned.

/// A `(row, col)` cell coordinate.
///
/// Ordering is row-major, which makes `Position` usable as a `BTreeSet` /
/// `BTreeMap` key with deterministic iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this position lies inside a `rows x cols` grid.
    #[must_use]
    pub const fn in_bounds(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// Move one step in `direction`, returning `None` if the result would
    /// leave a `rows x cols` grid.
    #[must_use]
    pub fn step(self, direction: Direction, rows: usize, cols: usize) -> Option<Self> {
        let next = match direction {
            Direction::North => Self::new(self.row.checked_sub(1)?, self.col),
            Direction::South => Self::new(self.row.checked_add(1)?, self.col),
            Direction::West => Self::new(self.row, self.col.checked_sub(1)?),
            Direction::East => Self::new(self.row, self.col.checked_add(1)?),
        };
        next.in_bounds(rows, cols).then_some(next)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four axis-aligned moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All moves in successor-generation order.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::West, Self::East];
}
