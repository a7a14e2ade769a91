//! Text rendering of rooms and run summaries.
//!
//! Legend: `S` start, `*` a cell the path passes through, `#` dirty,
//! `.` clean.

use std::collections::BTreeSet;
use std::time::Duration;

use vacuum_kernel::carrier::grid::CellStatus;
use vacuum_kernel::carrier::position::Position;

use crate::room::Room;
use crate::runner::RunRecord;

/// Render `room`, overlaying `path` when given.
#[must_use]
pub fn render_room(room: &Room, path: Option<&[Position]>) -> String {
    let on_path: BTreeSet<Position> = path.unwrap_or_default().iter().copied().collect();
    let mut out = String::with_capacity(room.grid.rows() * (room.grid.cols() + 1));
    for row in 0..room.grid.rows() {
        for col in 0..room.grid.cols() {
            let position = Position::new(row, col);
            let ch = if position == room.start {
                'S'
            } else if on_path.contains(&position) {
                '*'
            } else if room.grid.status(position) == Some(CellStatus::Dirty) {
                '#'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Status-panel text for one run.
///
/// ```text
/// Algorithm: BFS
/// Steps: 3
/// Nodes: 9
/// Time: 0.04 ms
/// ```
///
/// A failed run prints `Failed` in place of steps and time.
#[must_use]
pub fn render_summary(record: &RunRecord) -> String {
    let label = record.algorithm.label();
    let nodes = record.result.nodes_expanded;
    match record.result.steps() {
        Some(steps) => format!(
            "Algorithm: {label}\nSteps: {steps}\nNodes: {nodes}\nTime: {}\n",
            format_millis(record.elapsed)
        ),
        None => format!("Algorithm: {label}\nFailed\nNodes: {nodes}\n"),
    }
}

/// One line per run, for side-by-side comparison.
#[must_use]
pub fn render_comparison(records: &[RunRecord]) -> String {
    let header = String::from("algorithm  steps  nodes      time\n");
    records.iter().fold(header, |mut out, record| {
        let steps = record
            .result
            .steps()
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        out.push_str(&format!(
            "{:<9}  {:>5}  {:>9}  {:>10}\n",
            record.algorithm.label(),
            steps,
            record.result.nodes_expanded,
            format_millis(record.elapsed)
        ));
        out
    })
}

fn format_millis(elapsed: Duration) -> String {
    format!("{:.2} ms", elapsed.as_secs_f64() * 1000.0)
}
