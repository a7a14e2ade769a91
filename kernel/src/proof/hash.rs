//! Canonical hashing: domain-separated SHA-256.
//!
//! **Exactly one place defines canonical hashing.** Callers pick a
//! [`HashDomain`] and hand over canonical bytes; the domain prefix is fed to
//! the hasher ahead of the payload.

use sha2::{Digest, Sha256};

pub use crate::proof::hash_domain::HashDomain;

const SHA256_PREFIX: &str = "sha256:";

/// A SHA-256 digest rendered as `"sha256:<64 lowercase hex>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
}

impl ContentHash {
    /// The 64-character hex digest without the algorithm prefix.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[SHA256_PREFIX.len()..]
    }

    /// The full string representation (`"sha256:<hex>"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Compute `sha256(domain_prefix || data)`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let digest = Sha256::new()
        .chain_update(domain.as_bytes())
        .chain_update(data)
        .finalize();
    ContentHash {
        full: format!("{SHA256_PREFIX}{}", hex::encode(digest)),
    }
}
