//! BFS optimality against an independent exhaustive solver.
//!
//! The reference solver runs its own breadth-first search over
//! `(position, remaining-dirt bitmask)` pairs, sharing no code with the
//! engine beyond `GridWorld` accessors. Every room on a 2x3 grid (all dirt
//! patterns, all starts) is checked, plus seeded 3x3 and 4x4 rooms.

use std::collections::{HashSet, VecDeque};

use vacuum_harness::room::{generate_room, RoomConfig};
use vacuum_kernel::carrier::grid::{CellStatus, GridWorld};
use vacuum_kernel::carrier::position::Position;
use vacuum_search::algorithm::Algorithm;
use vacuum_search::policy::SearchPolicy;

/// Minimum number of moves to clean every dirty cell.
fn reference_min_steps(grid: &GridWorld, start: Position) -> usize {
    let cols = grid.cols();
    let bit = |p: Position| 1u32 << (p.row * cols + p.col);

    let mut dirt: u32 = grid.dirty_cells().into_iter().map(bit).fold(0, |a, b| a | b);
    dirt &= !bit(start);

    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert((start, dirt));
    queue.push_back((start, dirt, 0usize));

    while let Some((pos, remaining, steps)) = queue.pop_front() {
        if remaining == 0 {
            return steps;
        }
        let moves = [
            (pos.row.wrapping_sub(1), pos.col),
            (pos.row + 1, pos.col),
            (pos.row, pos.col.wrapping_sub(1)),
            (pos.row, pos.col + 1),
        ];
        for (row, col) in moves {
            let next = Position::new(row, col);
            if !grid.contains(next) {
                continue;
            }
            let after = remaining & !bit(next);
            if seen.insert((next, after)) {
                queue.push_back((next, after, steps + 1));
            }
        }
    }
    unreachable!("every cell of a grid is reachable")
}

fn grid_from_mask(rows: usize, cols: usize, mask: u32) -> GridWorld {
    let cells: Vec<Vec<CellStatus>> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    if mask & (1 << (r * cols + c)) == 0 {
                        CellStatus::Clean
                    } else {
                        CellStatus::Dirty
                    }
                })
                .collect()
        })
        .collect();
    GridWorld::from_cells(cells.as_slice()).expect("valid grid")
}

fn check_room(grid: &GridWorld, start: Position) {
    let policy = SearchPolicy::default();
    let expected = reference_min_steps(grid, start);

    let bfs = Algorithm::BreadthFirst.search(grid, start, &policy).unwrap();
    assert_eq!(
        bfs.steps(),
        Some(expected),
        "BFS not minimal on\n{grid}start {start}"
    );
    assert!(bfs.nodes_expanded >= 1);

    for algorithm in [Algorithm::DepthFirst, Algorithm::IterativeDeepening] {
        let result = algorithm.search(grid, start, &policy).unwrap();
        assert!(result.nodes_expanded >= 1, "{algorithm}");
        if let Some(steps) = result.steps() {
            assert!(
                steps >= expected,
                "{algorithm} beat the optimum on\n{grid}start {start}"
            );
        }
    }
}

#[test]
fn bfs_minimal_on_every_two_by_three_room() {
    let (rows, cols) = (2, 3);
    for mask in 0u32..(1 << (rows * cols)) {
        let grid = grid_from_mask(rows, cols, mask);
        for start in (0..rows).flat_map(|r| (0..cols).map(move |c| Position::new(r, c))) {
            check_room(&grid, start);
        }
    }
}

#[test]
fn bfs_minimal_on_seeded_rooms() {
    for size in [3, 4] {
        for seed in 0..12 {
            let room = generate_room(&RoomConfig {
                size,
                dirt_probability: 0.35,
                seed: Some(seed),
                ..RoomConfig::default()
            })
            .unwrap();
            check_room(&room.grid, room.start);
        }
    }
}

#[test]
fn dfs_always_finds_a_path() {
    // Unbounded DFS explores the whole reachable state space, so it fails
    // only if no cleaning walk exists, which never happens on a grid.
    for seed in 0..10 {
        let room = generate_room(&RoomConfig {
            size: 4,
            seed: Some(seed),
            ..RoomConfig::default()
        })
        .unwrap();
        let result = Algorithm::DepthFirst
            .search(&room.grid, room.start, &SearchPolicy::default())
            .unwrap();
        assert!(result.is_goal_reached(), "seed {seed}");
    }
}
