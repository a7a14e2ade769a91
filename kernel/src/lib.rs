//! Vacuum Kernel: the deterministic grid carrier for the vacuum search engine.
//!
//! # API Surface
//!
//! - [`carrier::grid::GridWorld`] -- rectangular Clean/Dirty room with cleaning and goal semantics
//! - [`carrier::position::Position`] -- in-bounds agent coordinates and the fixed move order
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 over canonical bytes
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON serializer
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `proof`
//!
//! One-way only. `proof` may read carrier types; `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod proof;
