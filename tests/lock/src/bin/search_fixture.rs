//! Binary that runs every algorithm over a fixed seeded room and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: key=value lines, one block per algorithm, in `Algorithm::ALL`
//! order.

use vacuum_harness::room::{generate_room, RoomConfig};
use vacuum_harness::runner::run_report;
use vacuum_kernel::proof::hash::{canonical_hash, HashDomain};
use vacuum_search::algorithm::Algorithm;
use vacuum_search::policy::SearchPolicy;

const FIXTURE_SEED: u64 = 2024;
const FIXTURE_SIZE: usize = 4;

fn main() {
    let config = RoomConfig {
        size: FIXTURE_SIZE,
        seed: Some(FIXTURE_SEED),
        ..RoomConfig::default()
    };
    let room = generate_room(&config).expect("fixture room generation failed");
    let policy = SearchPolicy {
        record_trace: true,
        ..SearchPolicy::default()
    };

    let grid_digest = canonical_hash(HashDomain::GridSnapshot, &room.grid.identity_bytes());
    println!("grid_digest={}", grid_digest.as_str());
    println!("dirty_cells={}", room.grid.dirty_count());

    for algorithm in Algorithm::ALL {
        let (report, digest) = run_report(&room, algorithm, &policy).expect("fixture run failed");
        let name = algorithm.name();
        println!("{name}.report_digest={}", digest.as_str());
        println!("{name}.termination_reason={}", report.termination.as_str());
        match report.steps() {
            Some(steps) => println!("{name}.steps={steps}"),
            None => println!("{name}.steps=none"),
        }
        println!("{name}.nodes_expanded={}", report.nodes_expanded);
        println!("{name}.trace_events={}", report.trace.len());
    }
}
