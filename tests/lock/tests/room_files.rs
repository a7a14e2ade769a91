//! Room files: a saved room searches exactly like the room it came from.

use vacuum_harness::room::{generate_room, RoomConfig, RoomError};
use vacuum_harness::room_file::{load_room, parse_room, save_room};
use vacuum_harness::runner::run_report;
use vacuum_kernel::carrier::position::Position;
use vacuum_search::algorithm::Algorithm;
use vacuum_search::policy::SearchPolicy;

#[test]
fn saved_room_reproduces_report_digests() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("room.json");
    let room = generate_room(&RoomConfig {
        size: 4,
        seed: Some(11),
        start: Position::new(2, 1),
        ..RoomConfig::default()
    })
    .unwrap();

    save_room(&path, &room).unwrap();
    let loaded = load_room(&path).unwrap();
    assert_eq!(loaded, room);

    let policy = SearchPolicy::default();
    for algorithm in Algorithm::ALL {
        let (_, original) = run_report(&room, algorithm, &policy).unwrap();
        let (_, reloaded) = run_report(&loaded, algorithm, &policy).unwrap();
        assert_eq!(original, reloaded, "{algorithm}");
    }
}

#[test]
fn saved_file_is_plain_cell_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("room.json");
    let room = parse_room(r#"{"cells": [[0, 1], [1, 0]], "start": [0, 0]}"#).unwrap();
    save_room(&path, &room).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["cells"], serde_json::json!([[0, 1], [1, 0]]));
    assert_eq!(value["start"], serde_json::json!([0, 0]));
}

#[test]
fn invalid_cell_values_rejected() {
    let err = parse_room(r#"{"cells": [[0, 2]]}"#).unwrap_err();
    assert!(matches!(err, RoomError::InvalidInput(_)), "{err}");
}
