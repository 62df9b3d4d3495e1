//! Bit-exact codec and cryptographic core for Ethereum-compatible transactions.
//!
//! This crate decodes, validates, re-encodes, and cryptographically verifies
//! the five Ethereum transaction envelopes (legacy, EIP-2930, EIP-1559,
//! EIP-4844, EIP-7702). It is pure and stateless: every operation takes its
//! inputs by value and returns a new value, so callers may decode, sign, or
//! recover concurrently with no coordination.
//!
//! - [`rlp`] — the Recursive Length Prefix grammar: canonical byte-string and
//!   list encode/decode.
//! - [`keccak`] — Keccak-256 hashing.
//! - [`address`] — public-key-to-address derivation and EIP-55 checksums.
//! - [`signature`] — secp256k1 sign/recover, `v` handling, low-s normalization.
//! - [`transaction`] — the five typed transaction envelopes and their wire
//!   format.
//!
//! Peripheral concerns — P2P/RLPx transport, peer management, storage,
//! JSON-RPC, block processing, gas validation, mempool logic — are out of
//! scope; callers consume [`transaction::Transaction`] and the hash/signature
//! operations here through their own surfaces.

pub mod address;
pub mod error;
pub mod keccak;
pub mod rlp;
pub mod signature;
pub mod transaction;

pub use error::Error;
pub use signature::Signature;
pub use transaction::Transaction;
