//! Domain-separated content hashes.
//!
//! Format: `"sha256:<hex_digest>"`, computed over `domain || data`. Each
//! domain prefix is null-terminated so no prefix is a prefix of another.

use std::fmt;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

/// Domain prefix for normalized grid text.
pub const DOMAIN_GRID: &[u8] = b"QUEST::GRID::V1\0";

/// Domain prefix for the JSON-encoded action sequence of a solution.
pub const DOMAIN_SOLUTION: &[u8] = b"QUEST::SOLUTION::V1\0";

/// A content-addressed hash, `"sha256:<hex_digest>"`.
///
/// Only [`canonical_hash`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash(format!("sha256:{}", hex::encode(hasher.finalize())))
}
