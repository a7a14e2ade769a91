//! Carrier module: `GridWorld`, `Position`, and the move set.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod grid;
pub mod position;
