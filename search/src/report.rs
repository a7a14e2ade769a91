//! `SearchReport`: canonical projection of one search run.
//!
//! The report covers only deterministic fields. Elapsed time is measured by
//! the harness and stays out of the canonical bytes, so two runs of the same
//! algorithm on the same room always produce the same digest.

use vacuum_kernel::carrier::grid::GridWorld;
use vacuum_kernel::carrier::position::Position;
use vacuum_kernel::proof::canon::{canonical_json_bytes, CanonError};
use vacuum_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::algorithm::Algorithm;
use crate::policy::SearchPolicy;
use crate::search::{SearchResult, SearchStats, TerminationReason};
use crate::trace::ExpandEvent;

/// Deterministic summary of a search run.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub max_depth: i64,
    pub initial_grid: GridWorld,
    pub start: Position,
    pub path: Option<Vec<Position>>,
    pub nodes_expanded: u64,
    pub termination: TerminationReason,
    pub stats: SearchStats,
    pub trace: Vec<ExpandEvent>,
}

impl SearchReport {
    /// Assemble a report from a finished run.
    #[must_use]
    pub fn new(
        algorithm: Algorithm,
        policy: &SearchPolicy,
        grid: &GridWorld,
        start: Position,
        result: &SearchResult,
    ) -> Self {
        Self {
            algorithm,
            max_depth: policy.max_depth,
            initial_grid: grid.clone(),
            start,
            path: result.path.clone(),
            nodes_expanded: result.nodes_expanded,
            termination: result.termination,
            stats: result.stats.clone(),
            trace: result.trace.clone(),
        }
    }

    /// Edge count of the path, if any.
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// Serialize the report to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// `canonical_hash(SearchReport, canonical_json_bytes)`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchReport, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "algorithm": self.algorithm.name(),
            "grid": {
                "cells": self.initial_grid.to_bits(),
                "cols": self.initial_grid.cols(),
                "digest": canonical_hash(
                    HashDomain::GridSnapshot,
                    &self.initial_grid.identity_bytes(),
                ).as_str(),
                "rows": self.initial_grid.rows(),
            },
            "max_depth": self.max_depth,
            "nodes_expanded": self.nodes_expanded,
            "path": self.path.as_ref().map(|p| p.iter().map(position_to_json).collect::<Vec<_>>()),
            "start": position_to_json(&self.start),
            "stats": stats_to_json(&self.stats),
            "steps": self.steps(),
            "termination_reason": termination_reason_to_json(self.termination),
        });
        if !self.trace.is_empty() {
            obj["trace"] = self
                .trace
                .iter()
                .map(ExpandEvent::to_json_value)
                .collect();
        }
        obj
    }
}

fn position_to_json(p: &Position) -> serde_json::Value {
    serde_json::json!([p.row, p.col])
}

fn stats_to_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "depth_cutoffs": s.depth_cutoffs,
        "duplicates_suppressed": s.duplicates_suppressed,
        "frontier_high_water": s.frontier_high_water,
        "iterations": s.iterations,
    })
}

fn termination_reason_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::DepthLimitExhausted { max_depth } => {
            serde_json::json!({"max_depth": max_depth, "type": r.as_str()})
        }
        TerminationReason::GoalReached | TerminationReason::FrontierExhausted => {
            serde_json::json!({"type": r.as_str()})
        }
    }
}
