//! Vacuum Harness: everything around the search engine.
//!
//! The harness builds rooms (random or from JSON files), runs algorithms
//! through `vacuum_search` with wall-clock timing, and renders rooms and
//! results as text. It does NOT implement search logic; it delegates to
//! the search crate.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod logging;
pub mod render;
pub mod room;
pub mod room_file;
pub mod runner;
