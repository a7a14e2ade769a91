//! Vacuum Search: uninformed state-space search over a dirty grid.
//!
//! This crate provides the search layer. It depends only on
//! `vacuum_kernel`; it does NOT depend on `vacuum_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! vacuum_kernel  ←  vacuum_search  ←  vacuum_harness
//! (grid carrier)    (frontier, nodes)  (rooms, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`] -- agent position + owned grid snapshot + path so far
//! - [`VisitedKey`] -- dedup identity: position + full dirt configuration
//! - [`Frontier`] -- FIFO or LIFO pending-node collection
//! - [`Algorithm`] -- closed set of strategies: BFS, DFS, IDS
//! - [`SearchResult`] -- path-or-none, nodes expanded, termination, stats
//! - [`SearchReport`] -- canonical JSON projection of one run
//!
//! [`SearchNode`]: node::SearchNode
//! [`VisitedKey`]: node::VisitedKey
//! [`Frontier`]: frontier::Frontier
//! [`Algorithm`]: algorithm::Algorithm
//! [`SearchResult`]: search::SearchResult
//! [`SearchReport`]: report::SearchReport

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod error;
pub mod frontier;
pub mod ids;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;
pub mod trace;
