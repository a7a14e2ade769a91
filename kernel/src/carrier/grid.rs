//! `GridWorld`: the rectangular Clean/Dirty room.
//!
//! # Layout
//!
//! Cells are stored row-major as a packed dirt bitset: bit `row * cols + col`
//! is set iff that cell is Dirty. Dimensions are fixed at construction and
//! never change.
//!
//! # Equality semantics
//!
//! `GridWorld` derives `Eq`, `Hash` and `Ord` over `(rows, cols, dirt bits)`.
//! Two grids compare equal iff they have the same shape and the same
//! remaining dirt, which is exactly the dirt half of a search visited key.
//! Snapshots are owned values; cloning one never aliases another node's dirt.

use crate::carrier::position::{Direction, Position};

const WORD_BITS: usize = 64;

/// Status of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CellStatus {
    Clean = 0,
    Dirty = 1,
}

impl CellStatus {
    /// Convert from the `0`/`1` room encoding. Returns `None` for other values.
    #[must_use]
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(Self::Clean),
            1 => Some(Self::Dirty),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }
}

/// Typed rejection of malformed engine input.
///
/// Returned before any search step is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The grid has no rows.
    EmptyGrid,
    /// A row has no cells.
    EmptyRow { row: usize },
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A raw cell value is neither `0` (clean) nor `1` (dirty).
    InvalidCell { row: usize, col: usize, value: u8 },
    /// `rows * cols` does not fit in `usize`.
    DimensionOverflow { rows: usize, cols: usize },
    /// The start position lies outside the grid.
    StartOutOfBounds {
        start: Position,
        rows: usize,
        cols: usize,
    },
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid has no rows"),
            Self::EmptyRow { row } => write!(f, "row {row} has no cells"),
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} cells, expected {expected} (grid must be rectangular)"
            ),
            Self::InvalidCell { row, col, value } => {
                write!(f, "cell ({row}, {col}) has value {value}, expected 0 or 1")
            }
            Self::DimensionOverflow { rows, cols } => {
                write!(f, "grid dimensions {rows}x{cols} overflow")
            }
            Self::StartOutOfBounds { start, rows, cols } => {
                write!(f, "start {start} is outside the {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// Rectangular matrix of cell statuses with a packed dirt bitset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridWorld {
    rows: usize,
    cols: usize,
    /// Dirt bitset, `ceil(rows * cols / 64)` words.
    dirt: Vec<u64>,
}

impl GridWorld {
    /// Create an all-clean grid.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::EmptyGrid`] / [`InvalidInputError::EmptyRow`]
    /// for zero dimensions and [`InvalidInputError::DimensionOverflow`] if the
    /// cell count overflows.
    pub fn all_clean(rows: usize, cols: usize) -> Result<Self, InvalidInputError> {
        if rows == 0 {
            return Err(InvalidInputError::EmptyGrid);
        }
        if cols == 0 {
            return Err(InvalidInputError::EmptyRow { row: 0 });
        }
        let cells = rows
            .checked_mul(cols)
            .ok_or(InvalidInputError::DimensionOverflow { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            dirt: vec![0; cells.div_ceil(WORD_BITS)],
        })
    }

    /// Build a grid from row-major cell statuses.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] if the matrix is empty or not rectangular.
    pub fn from_cells<R: AsRef<[CellStatus]>>(rows: &[R]) -> Result<Self, InvalidInputError> {
        let cols = check_shape(rows)?;
        let mut grid = Self::all_clean(rows.len(), cols)?;
        for (r, row) in rows.iter().enumerate() {
            for (c, &status) in row.as_ref().iter().enumerate() {
                if status == CellStatus::Dirty {
                    grid.set_dirty_bit(grid.index(Position::new(r, c)));
                }
            }
        }
        Ok(grid)
    }

    /// Build a grid from the `0` = clean / `1` = dirty room encoding.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] if the matrix is empty, not rectangular,
    /// or contains a value other than `0` or `1`.
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, InvalidInputError> {
        let cols = check_shape(rows)?;
        let mut grid = Self::all_clean(rows.len(), cols)?;
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.as_ref().iter().enumerate() {
                match CellStatus::from_byte(value) {
                    Some(CellStatus::Dirty) => grid.set_dirty_bit(grid.index(Position::new(r, c))),
                    Some(CellStatus::Clean) => {}
                    None => return Err(InvalidInputError::InvalidCell { row: r, col: c, value }),
                }
            }
        }
        Ok(grid)
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `position` lies inside this grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.in_bounds(self.rows, self.cols)
    }

    /// Reject a start position outside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::StartOutOfBounds`].
    pub fn check_start(&self, start: Position) -> Result<(), InvalidInputError> {
        if self.contains(start) {
            Ok(())
        } else {
            Err(InvalidInputError::StartOutOfBounds {
                start,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Status of the cell at `position`, or `None` if out of bounds.
    #[must_use]
    pub fn status(&self, position: Position) -> Option<CellStatus> {
        if !self.contains(position) {
            return None;
        }
        let idx = self.index(position);
        if self.dirt[idx / WORD_BITS] & (1u64 << (idx % WORD_BITS)) == 0 {
            Some(CellStatus::Clean)
        } else {
            Some(CellStatus::Dirty)
        }
    }

    /// Clean the cell at `position`.
    ///
    /// Dirty becomes Clean; a Clean or out-of-bounds cell is left alone.
    /// Returns `true` iff a cell changed.
    pub fn clean(&mut self, position: Position) -> bool {
        if self.status(position) != Some(CellStatus::Dirty) {
            return false;
        }
        let idx = self.index(position);
        self.dirt[idx / WORD_BITS] &= !(1u64 << (idx % WORD_BITS));
        true
    }

    /// Goal predicate: no Dirty cell remains.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.dirt.iter().all(|&w| w == 0)
    }

    /// Number of Dirty cells.
    #[must_use]
    pub fn dirty_count(&self) -> usize {
        self.dirt.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Dirty cell positions in row-major order.
    #[must_use]
    pub fn dirty_cells(&self) -> Vec<Position> {
        (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| Position::new(r, c)))
            .filter(|&p| self.status(p) == Some(CellStatus::Dirty))
            .collect()
    }

    /// In-bounds neighbors of `position` in north, south, west, east order.
    ///
    /// There are no blocked cells: every in-bounds neighbor is traversable.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> {
        let (rows, cols) = (self.rows, self.cols);
        Direction::ALL
            .into_iter()
            .filter_map(move |d| position.step(d, rows, cols))
    }

    /// Row-major `0`/`1` matrix (inverse of [`GridWorld::from_bits`]).
    #[must_use]
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| {
                        self.status(Position::new(r, c))
                            .map_or(0, CellStatus::to_byte)
                    })
                    .collect()
            })
            .collect()
    }

    /// Canonical bytes for hashing: `rows` and `cols` as u64 LE, then the
    /// dirt words as u64 LE.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16 + self.dirt.len() * 8);
        out.extend_from_slice(&(self.rows as u64).to_le_bytes());
        out.extend_from_slice(&(self.cols as u64).to_le_bytes());
        for word in &self.dirt {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out
    }

    const fn index(&self, position: Position) -> usize {
        position.row * self.cols + position.col
    }

    fn set_dirty_bit(&mut self, idx: usize) {
        self.dirt[idx / WORD_BITS] |= 1u64 << (idx % WORD_BITS);
    }
}

impl std::fmt::Display for GridWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let ch = match self.status(Position::new(r, c)) {
                    Some(CellStatus::Dirty) => '#',
                    _ => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Validate that `rows` is non-empty and rectangular; return the column count.
fn check_shape<T, R: AsRef<[T]>>(rows: &[R]) -> Result<usize, InvalidInputError> {
    let first = rows.first().ok_or(InvalidInputError::EmptyGrid)?;
    let cols = first.as_ref().len();
    for (r, row) in rows.iter().enumerate() {
        let len = row.as_ref().len();
        if len == 0 {
            return Err(InvalidInputError::EmptyRow { row: r });
        }
        if len != cols {
            return Err(InvalidInputError::RaggedRow {
                row: r,
                expected: cols,
                actual: len,
            });
        }
    }
    Ok(cols)
}
