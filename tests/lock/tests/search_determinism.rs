//! In-process determinism and trace integrity.
//!
//! Repeated runs on the same room must produce byte-identical canonical
//! reports, and the expansion trace must agree with the reported counters.

use std::collections::BTreeSet;

use vacuum_harness::room::{generate_room, Room, RoomConfig};
use vacuum_harness::runner::run_report;
use vacuum_search::algorithm::Algorithm;
use vacuum_search::policy::SearchPolicy;
use vacuum_search::search::SearchResult;
use vacuum_search::trace::ExpandOutcome;

const N: usize = 10;

fn fixture_room() -> Room {
    generate_room(&RoomConfig {
        size: 4,
        seed: Some(7),
        ..RoomConfig::default()
    })
    .expect("fixture room")
}

fn traced() -> SearchPolicy {
    SearchPolicy {
        record_trace: true,
        ..SearchPolicy::default()
    }
}

fn traced_run(algorithm: Algorithm, room: &Room) -> SearchResult {
    algorithm
        .search(&room.grid, room.start, &traced())
        .expect("valid room")
}

#[test]
fn report_bytes_identical_across_runs() {
    let room = fixture_room();
    for algorithm in Algorithm::ALL {
        let (first, first_digest) = run_report(&room, algorithm, &traced()).unwrap();
        let first_bytes = first.to_canonical_json_bytes().unwrap();
        for i in 1..N {
            let (report, digest) = run_report(&room, algorithm, &traced()).unwrap();
            assert_eq!(
                report.to_canonical_json_bytes().unwrap(),
                first_bytes,
                "{algorithm} run {i} diverged"
            );
            assert_eq!(digest, first_digest, "{algorithm} run {i} digest diverged");
        }
    }
}

#[test]
fn trace_length_matches_node_count() {
    let room = fixture_room();
    for algorithm in Algorithm::ALL {
        let result = traced_run(algorithm, &room);
        assert_eq!(result.trace.len() as u64, result.nodes_expanded, "{algorithm}");
        for (i, event) in result.trace.iter().enumerate() {
            assert_eq!(event.expansion_order, i as u64, "{algorithm}");
        }
    }
}

#[test]
fn trace_outcomes_match_stats() {
    let room = fixture_room();
    for algorithm in Algorithm::ALL {
        let result = traced_run(algorithm, &room);
        let count = |f: fn(&ExpandOutcome) -> bool| {
            result.trace.iter().filter(|e| f(&e.outcome)).count() as u64
        };
        assert_eq!(
            count(|o| *o == ExpandOutcome::Duplicate),
            result.stats.duplicates_suppressed,
            "{algorithm}"
        );
        assert_eq!(
            count(|o| *o == ExpandOutcome::DepthCutoff),
            result.stats.depth_cutoffs,
            "{algorithm}"
        );
        let goals = count(|o| *o == ExpandOutcome::Goal);
        assert_eq!(goals, u64::from(result.is_goal_reached()), "{algorithm}");
    }
}

#[test]
fn no_state_processed_twice_per_iteration() {
    let room = fixture_room();
    for algorithm in Algorithm::ALL {
        let result = traced_run(algorithm, &room);
        let mut seen = BTreeSet::new();
        for event in &result.trace {
            if matches!(event.outcome, ExpandOutcome::Duplicate | ExpandOutcome::DepthCutoff) {
                continue;
            }
            assert!(
                seen.insert((event.depth_limit, event.state_fingerprint.clone())),
                "{algorithm} processed state {} twice under limit {:?}",
                event.state_fingerprint,
                event.depth_limit
            );
        }
    }
}

#[test]
fn unbounded_searches_never_cut_off() {
    let room = fixture_room();
    for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
        let result = traced_run(algorithm, &room);
        assert_eq!(result.stats.depth_cutoffs, 0, "{algorithm}");
        assert_eq!(result.stats.iterations, 1, "{algorithm}");
        assert!(result.trace.iter().all(|e| e.depth_limit.is_none()));
    }
}

#[test]
fn trace_does_not_change_counts() {
    let room = fixture_room();
    for algorithm in Algorithm::ALL {
        let plain = algorithm
            .search(&room.grid, room.start, &SearchPolicy::default())
            .unwrap();
        let traced = traced_run(algorithm, &room);
        assert_eq!(plain.path, traced.path, "{algorithm}");
        assert_eq!(plain.nodes_expanded, traced.nodes_expanded, "{algorithm}");
        assert_eq!(plain.stats, traced.stats, "{algorithm}");
        assert!(plain.trace.is_empty());
    }
}
