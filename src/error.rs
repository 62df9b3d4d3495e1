use thiserror::Error;

/// Errors raised by the RLP codec, address/checksum utilities, signature
/// engine, and transaction codec.
///
/// Every variant is recoverable by the caller (drop the frame, reject the
/// peer, retry with different inputs) except [`Error::InvalidPrivateKey`] and
/// [`Error::InvalidDigestLength`], which indicate a programmer error at the
/// call site rather than bad wire input.
#[derive(Debug, Error)]
pub enum Error {
    /// The input ended before a declared length was satisfied.
    #[error("truncated input: expected at least {needed} bytes, got {got}")]
    Truncated { needed: usize, got: usize },

    /// An RLP length prefix was not the shortest encoding for its value
    /// (e.g. a multi-byte string header used for a single byte `< 0x80`, or a
    /// long-form length prefix with a leading zero byte).
    #[error("non-canonical RLP encoding: {0}")]
    NonCanonicalRlp(&'static str),

    /// An integer field's big-endian byte string had a leading zero byte.
    #[error("non-canonical integer: leading zero byte")]
    NonCanonicalInteger,

    /// Nesting exceeded the maximum depth enforced during decode.
    #[error("RLP nesting depth exceeded the limit of {0}")]
    DepthExceeded(usize),

    /// A transaction's RLP list did not have the field count its envelope
    /// requires.
    #[error("wrong field count: expected {expected}, got {got}")]
    WrongFieldCount { expected: usize, got: usize },

    /// The leading byte did not select one of the five known envelopes.
    #[error("unknown transaction envelope byte: 0x{0:02x}")]
    UnknownEnvelope(u8),

    /// An access list entry was malformed (wrong arity, wrong storage-key
    /// width).
    #[error("invalid access list entry: {0}")]
    InvalidAccessList(&'static str),

    /// An EIP-7702 authorization tuple was malformed.
    #[error("invalid authorization tuple: {0}")]
    InvalidAuthorization(&'static str),

    /// A signature's `r`, `s`, or `v`/`y_parity` field failed to parse or
    /// fell outside its valid range.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    /// `v` did not match any of the three known encodings (pre-EIP-155,
    /// EIP-155, or typed-envelope parity) for the recovery context given.
    #[error("invalid recovery id")]
    InvalidRecoveryId,

    /// Signature recovery ran to completion but did not yield a point
    /// consistent with the digest (a forged or corrupted signature).
    #[error("signature recovery failed")]
    RecoveryFailed,

    /// A 32-byte private key did not decode to a valid secp256k1 scalar.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// A digest passed to `sign`/`recover` was not exactly 32 bytes.
    #[error("invalid digest length: expected 32 bytes, got {0}")]
    InvalidDigestLength(usize),

    /// A public key was not a valid point on the secp256k1 curve, or was not
    /// 64/65 bytes as required.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// An address string was malformed (wrong prefix, wrong length,
    /// non-hex characters, or a failed EIP-55 checksum).
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
