//! secp256k1 sign/recover, `v`/`y_parity` handling, and low-s normalization.
//!
//! Legacy pre-EIP-155 transactions carry `v ∈ {27, 28}`; legacy EIP-155
//! transactions fold the chain ID into `v = chain_id·2 + 35 + y`; typed
//! envelopes carry `y_parity ∈ {0, 1}` directly. These three encodings never
//! leak into each other — [`recovery_id_from_v`] is a total `match` that
//! errors on anything else rather than silently defaulting.

use alloy_primitives::U256;
use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{RecoveryId, Signature as K256Signature, SigningKey, VerifyingKey};
use zeroize::Zeroize;

use crate::error::Error;

/// The order of the secp256k1 group, divided by two. EIP-2 requires `s` not
/// exceed this for a signature to be accepted.
const SECP256K1N_HALF: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// An ECDSA signature over secp256k1, as it appears in a transaction
/// envelope: `r`, `s`, and the recovery parity. The legacy `v` encoding is
/// layered on top by the transaction codec, not stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub r: U256,
    pub s: U256,
    pub y_parity: bool,
}

impl Signature {
    fn to_k256(self) -> Result<(K256Signature, RecoveryId), Error> {
        let r_bytes: [u8; 32] = self.r.to_be_bytes();
        let s_bytes: [u8; 32] = self.s.to_be_bytes();
        let mut raw = [0u8; 64];
        raw[..32].copy_from_slice(&r_bytes);
        raw[32..].copy_from_slice(&s_bytes);
        let sig = K256Signature::from_slice(&raw)
            .map_err(|e| Error::MalformedSignature(e.to_string()))?;
        let recid = RecoveryId::from_byte(self.y_parity as u8).ok_or(Error::InvalidRecoveryId)?;
        Ok((sig, recid))
    }

    fn from_k256(sig: K256Signature, recid: RecoveryId) -> Self {
        Signature {
            r: U256::from_be_slice(&sig.r().to_bytes()),
            s: U256::from_be_slice(&sig.s().to_bytes()),
            y_parity: recid.is_y_odd(),
        }
    }
}

/// Signs `digest` (exactly 32 bytes) with `private_key` using RFC-6979
/// deterministic ECDSA. Returns the legacy `v` value (`27 + y` pre-EIP-155,
/// `chain_id·2 + 35 + y` with a chain ID) alongside `r` and `s`. Typed-envelope
/// callers should ignore `v` and use the signature's `y_parity` instead.
pub fn sign(digest: &[u8], private_key: &[u8; 32], chain_id: Option<u64>) -> Result<(u128, Signature), Error> {
    if digest.len() != 32 {
        return Err(Error::InvalidDigestLength(digest.len()));
    }

    let mut key_bytes = *private_key;
    let signing_key = SigningKey::from_bytes((&key_bytes).into())
        .map_err(|e| Error::InvalidPrivateKey(e.to_string()))?;
    key_bytes.zeroize();

    let (sig, recid): (K256Signature, RecoveryId) = signing_key
        .sign_prehash(digest)
        .map_err(|e| Error::InvalidPrivateKey(e.to_string()))?;

    let signature = Signature::from_k256(sig, recid);
    let y = signature.y_parity as u128;
    let v = match chain_id {
        None => 27 + y,
        Some(cid) => (cid as u128) * 2 + 35 + y,
    };
    Ok((v, signature))
}

/// Recovers the 64-byte uncompressed public key (`X‖Y`, no `0x04` prefix)
/// consistent with `digest` and `signature`.
pub fn recover_public_key(digest: &[u8], signature: &Signature) -> Result<[u8; 64], Error> {
    if digest.len() != 32 {
        return Err(Error::InvalidDigestLength(digest.len()));
    }
    let (sig, recid) = signature.to_k256()?;
    let verifying_key = VerifyingKey::recover_from_prehash(digest, &sig, recid)
        .map_err(|_| Error::RecoveryFailed)?;
    let encoded = verifying_key.to_encoded_point(false);
    let bytes = encoded.as_bytes();
    let mut out = [0u8; 64];
    out.copy_from_slice(&bytes[1..]);
    Ok(out)
}

/// Recovers the 20-byte sender address consistent with `digest` and
/// `signature`.
pub fn recover_address(digest: &[u8], signature: &Signature) -> Result<[u8; 20], Error> {
    let public_key = recover_public_key(digest, signature)?;
    crate::address::address_from_public_key(&public_key)
}

/// Derives the recovery parity from a legacy `v` value, per the three-valued
/// rule in §4.3:
///
/// - `v ∈ {0, 1}` → direct parity (typed envelopes, or a pre-signed value).
/// - `v ∈ {27, 28}` → pre-EIP-155 legacy.
/// - `v ≥ 35` → EIP-155 legacy; the chain ID is recovered alongside.
///
/// Any other value is [`Error::InvalidRecoveryId`].
pub fn recovery_id_from_v(v: u128) -> Result<(bool, Option<u64>), Error> {
    match v {
        0 => Ok((false, None)),
        1 => Ok((true, None)),
        27 => Ok((false, None)),
        28 => Ok((true, None)),
        v if v >= 35 => {
            let y = (v - 35) % 2;
            let chain_id = (v - 35 - y) / 2;
            let chain_id: u64 = chain_id
                .try_into()
                .map_err(|_| Error::InvalidRecoveryId)?;
            Ok((y == 1, Some(chain_id)))
        }
        _ => Err(Error::InvalidRecoveryId),
    }
}

/// Normalizes a signature into low-`s` form (EIP-2): if `s > n/2`, replaces
/// `s` with `n - s` and flips the recovery parity. Idempotent, and preserves
/// the address recoverable from the signature.
pub fn normalize_signature(signature: Signature) -> Result<Signature, Error> {
    let (sig, recid) = signature.to_k256()?;
    match sig.normalize_s() {
        Some(normalized) => Ok(Signature::from_k256(
            normalized,
            RecoveryId::from_byte(recid.to_byte() ^ 1).ok_or(Error::InvalidRecoveryId)?,
        )),
        None => Ok(signature),
    }
}

/// `true` iff `r, s ∈ [1, n-1]` and `s <= n/2` (low-s form).
pub fn is_valid_signature(signature: &Signature) -> bool {
    if signature.to_k256().is_err() {
        return false;
    }
    signature.s.to_be_bytes::<32>() <= SECP256K1N_HALF
}
