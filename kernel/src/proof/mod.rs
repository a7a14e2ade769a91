//! Proof module: canonical JSON and domain-separated hashing.
//!
//! Search and harness artifacts route every digest through here.

pub mod canon;
pub mod hash;
pub mod hash_domain;
