//! SHA-256 content digests
//!
//! Every declaration file is keyed by the digest of its raw bytes, in the
//! canonical format `sha256:<hex>`. Downstream caches compare these strings
//! to detect changes, so the format must stay stable.

use sha2::{Digest, Sha256};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of raw bytes.
pub fn compute_bytes_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{}{:x}", PREFIX, hasher.finalize())
}
