//! JSON room files.
//!
//! ```json
//! {"cells": [[0, 1], [1, 0]], "start": [0, 0]}
//! ```
//!
//! `cells` is row-major with `0` = clean and `1` = dirty. `start` is
//! optional and defaults to the top-left corner.

use std::path::Path;

use serde::{Deserialize, Serialize};

use vacuum_kernel::carrier::grid::GridWorld;
use vacuum_kernel::carrier::position::Position;

use crate::room::{Room, RoomError};

/// On-disk room shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomFile {
    pub cells: Vec<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<[usize; 2]>,
}

impl RoomFile {
    /// Validate into a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::InvalidInput`] if the cells are not a non-empty
    /// rectangular `0`/`1` matrix or the start is out of bounds.
    pub fn into_room(self) -> Result<Room, RoomError> {
        let grid = GridWorld::from_bits(self.cells.as_slice())?;
        let start = self
            .start
            .map_or(Position::new(0, 0), |[row, col]| Position::new(row, col));
        Ok(Room::new(grid, start)?)
    }
}

impl From<&Room> for RoomFile {
    fn from(room: &Room) -> Self {
        Self {
            cells: room.grid.to_bits(),
            start: Some([room.start.row, room.start.col]),
        }
    }
}

/// Parse a room from JSON text.
///
/// # Errors
///
/// Returns [`RoomError::Json`] for malformed JSON and
/// [`RoomError::InvalidInput`] for a malformed room.
pub fn parse_room(json: &str) -> Result<Room, RoomError> {
    let file: RoomFile = serde_json::from_str(json).map_err(|e| RoomError::Json {
        detail: e.to_string(),
    })?;
    file.into_room()
}

/// Read a room file from disk.
///
/// # Errors
///
/// Returns [`RoomError::Io`] if the file cannot be read, otherwise as
/// [`parse_room`].
pub fn load_room(path: &Path) -> Result<Room, RoomError> {
    let text = std::fs::read_to_string(path).map_err(|source| RoomError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let room = parse_room(&text)?;
    tracing::debug!(
        path = %path.display(),
        rows = room.grid.rows(),
        cols = room.grid.cols(),
        "room loaded"
    );
    Ok(room)
}

/// Write a room file (pretty JSON, trailing newline).
///
/// # Errors
///
/// Returns [`RoomError::Io`] if the file cannot be written.
pub fn save_room(path: &Path, room: &Room) -> Result<(), RoomError> {
    let mut text = serde_json::to_string_pretty(&RoomFile::from(room)).map_err(|e| {
        RoomError::Json {
            detail: e.to_string(),
        }
    })?;
    text.push('\n');
    std::fs::write(path, text).map_err(|source| RoomError::Io {
        path: path.to_path_buf(),
        source,
    })
}
