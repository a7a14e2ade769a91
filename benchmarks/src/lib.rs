//! Shared helpers for vacuum benchmark suites.

use vacuum_harness::room::{generate_room, Room, RoomConfig};
use vacuum_kernel::carrier::grid::GridWorld;
use vacuum_kernel::carrier::position::Position;

/// A named benchmark room.
pub struct Regime {
    pub name: &'static str,
    pub room: Room,
}

/// Seeded square room.
///
/// # Panics
///
/// Panics if the generator rejects the settings. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn seeded_room(size: usize, dirt_probability: f64, seed: u64) -> Room {
    generate_room(&RoomConfig {
        size,
        dirt_probability,
        seed: Some(seed),
        ..RoomConfig::default()
    })
    .expect("benchmark room generation")
}

/// A single row with dirt only at the far end: maximal path, minimal
/// branching.
///
/// # Panics
///
/// Panics if `len` is zero.
#[must_use]
pub fn corridor(len: usize) -> Room {
    let mut bits = vec![0u8; len];
    bits[len - 1] = 1;
    let grid = GridWorld::from_bits(&[bits]).expect("corridor grid");
    Room::new(grid, Position::new(0, 0)).expect("corridor start")
}

/// The regimes every macro benchmark runs over.
///
/// - `clean`: goal at the root; measures fixed overhead.
/// - `corridor`: long path through a one-row room.
/// - `sparse`: default-sized room with little dirt.
/// - `dense`: 4x4 room at the default dirt probability.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "clean",
            room: seeded_room(6, 0.0, 0),
        },
        Regime {
            name: "corridor",
            room: corridor(12),
        },
        Regime {
            name: "sparse",
            room: seeded_room(6, 0.1, 3),
        },
        Regime {
            name: "dense",
            room: seeded_room(4, 0.3, 5),
        },
    ]
}
