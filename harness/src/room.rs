//! Rooms: a grid plus the agent's start position, and random generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vacuum_kernel::carrier::grid::{CellStatus, GridWorld, InvalidInputError};
use vacuum_kernel::carrier::position::Position;

/// Default side length of a generated square room.
pub const DEFAULT_ROOM_SIZE: usize = 6;

/// Default per-cell probability that a generated cell is dirty.
pub const DEFAULT_DIRT_PROBABILITY: f64 = 0.3;

/// Input to the search engine: a grid and an in-bounds start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub grid: GridWorld,
    pub start: Position,
}

impl Room {
    /// Pair a grid with a start position.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::StartOutOfBounds`] if `start` is outside `grid`.
    pub fn new(grid: GridWorld, start: Position) -> Result<Self, InvalidInputError> {
        grid.check_start(start)?;
        Ok(Self { grid, start })
    }
}

/// Typed failure for room construction and room files.
#[derive(Debug)]
pub enum RoomError {
    /// Generator settings out of range.
    InvalidConfig { detail: String },
    /// Grid or start rejected by the kernel.
    InvalidInput(InvalidInputError),
    /// Room file could not be read or written.
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    /// Room JSON could not be parsed or produced.
    Json { detail: String },
}

impl std::fmt::Display for RoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig { detail } => write!(f, "invalid room config: {detail}"),
            Self::InvalidInput(e) => write!(f, "invalid room: {e}"),
            Self::Io { path, source } => write!(f, "room file {}: {source}", path.display()),
            Self::Json { detail } => write!(f, "room JSON: {detail}"),
        }
    }
}

impl std::error::Error for RoomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::InvalidConfig { .. } | Self::Json { .. } => None,
        }
    }
}

impl From<InvalidInputError> for RoomError {
    fn from(e: InvalidInputError) -> Self {
        Self::InvalidInput(e)
    }
}

/// Random room generator settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomConfig {
    /// Side length of the square room.
    pub size: usize,
    /// Probability in `[0, 1]` that a cell starts dirty.
    pub dirt_probability: f64,
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Agent start. Always generated clean.
    pub start: Position,
}

impl RoomConfig {
    /// Check ranges before generating.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::InvalidConfig`] for a zero size, a probability
    /// outside `[0, 1]`, or a start outside the room.
    pub fn validate(&self) -> Result<(), RoomError> {
        if self.size == 0 {
            return Err(RoomError::InvalidConfig {
                detail: "size must be at least 1".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.dirt_probability) {
            return Err(RoomError::InvalidConfig {
                detail: format!(
                    "dirt probability {} is outside [0, 1]",
                    self.dirt_probability
                ),
            });
        }
        if !self.start.in_bounds(self.size, self.size) {
            return Err(RoomError::InvalidConfig {
                detail: format!(
                    "start {} is outside a {size}x{size} room",
                    self.start,
                    size = self.size
                ),
            });
        }
        Ok(())
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_ROOM_SIZE,
            dirt_probability: DEFAULT_DIRT_PROBABILITY,
            seed: None,
            start: Position::new(0, 0),
        }
    }
}

/// Generate a square room.
///
/// Cells are drawn row-major, each dirty with probability
/// `dirt_probability`; the start cell is then forced clean. The same seed
/// always yields the same room.
///
/// # Errors
///
/// Returns [`RoomError::InvalidConfig`] if `config` fails validation.
pub fn generate_room(config: &RoomConfig) -> Result<Room, RoomError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut cells = vec![vec![CellStatus::Clean; config.size]; config.size];
    for row in &mut cells {
        for cell in row.iter_mut() {
            if rng.gen::<f64>() < config.dirt_probability {
                *cell = CellStatus::Dirty;
            }
        }
    }
    cells[config.start.row][config.start.col] = CellStatus::Clean;

    let grid = GridWorld::from_cells(cells.as_slice())?;
    tracing::debug!(
        size = config.size,
        seed = ?config.seed,
        dirty = grid.dirty_count(),
        "room generated"
    );
    Room::new(grid, config.start).map_err(RoomError::from)
}
