//! Keccak-256 hashing.
//!
//! This is the original Keccak padding (`0x01` domain separator), not NIST
//! SHA-3-256 (`0x06`) — the two differ by a single padding bit and produce
//! different digests for the same input.

use sha3::{Digest, Keccak256};

/// Computes the 32-byte Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}
