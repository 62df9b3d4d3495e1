//! Public-key-to-address derivation and EIP-55 mixed-case checksums.

use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{EncodedPoint, PublicKey};

use crate::error::Error;
use crate::keccak::keccak256;

/// Derives the 20-byte Ethereum address from an uncompressed secp256k1
/// public key.
///
/// Accepts either the bare 64-byte `X‖Y` body or the 65-byte form with the
/// `0x04` SEC1 sentinel prefix, per §4.2. The address is the last 20 bytes of
/// the Keccak-256 hash of the 64-byte body.
pub fn address_from_public_key(public_key: &[u8]) -> Result<[u8; 20], Error> {
    let body = match public_key.len() {
        64 => public_key,
        65 if public_key[0] == 0x04 => &public_key[1..],
        65 => {
            return Err(Error::InvalidPublicKey(
                "65-byte key must start with 0x04".into(),
            ))
        }
        other => {
            return Err(Error::InvalidPublicKey(format!(
                "expected 64 or 65 bytes, got {other}"
            )))
        }
    };

    let hash = keccak256(body);
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&hash[12..]);
    Ok(addr)
}

/// Derives the EIP-55 checksummed address string from an uncompressed
/// (64- or 65-byte) secp256k1 public key.
pub fn pubkey_to_eth_address(public_key: &[u8]) -> Result<String, Error> {
    let addr = address_from_public_key(public_key)?;
    checksum_encode(&hex::encode(addr))
}

/// Derives an EIP-55 checksummed address from a compressed (33-byte)
/// secp256k1 public key by decompressing it first.
pub fn pubkey_bytes_to_eth_address(pubkey_33_bytes: &[u8; 33]) -> Result<String, Error> {
    let encoded = EncodedPoint::from_bytes(pubkey_33_bytes)
        .map_err(|e| Error::InvalidPublicKey(format!("invalid compressed key encoding: {e}")))?;

    let pubkey: Option<PublicKey> = PublicKey::from_encoded_point(&encoded).into();
    let pubkey =
        pubkey.ok_or_else(|| Error::InvalidPublicKey("point is not on the secp256k1 curve".into()))?;

    let uncompressed = pubkey.to_encoded_point(false);
    pubkey_to_eth_address(uncompressed.as_bytes())
}

/// Applies EIP-55 mixed-case checksum encoding.
///
/// `hex_address` is a 40-character hex string, with or without a `0x` prefix,
/// in any case. Returns the canonical `0x`-prefixed mixed-case form.
pub fn checksum_encode(hex_address: &str) -> Result<String, Error> {
    let hex_part = strip_0x(hex_address)?.to_lowercase();

    if hex_part.len() != 40 {
        return Err(Error::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }
    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidAddress(
            "address contains non-hex characters".into(),
        ));
    }

    let hash = keccak256(hex_part.as_bytes());
    let hash_hex = hex::encode(hash);

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");

    for (i, c) in hex_part.chars().enumerate() {
        if c.is_ascii_digit() {
            checksummed.push(c);
        } else {
            let hash_nibble = u8::from_str_radix(&hash_hex[i..i + 1], 16).unwrap_or(0);
            if hash_nibble >= 8 {
                checksummed.push(c.to_ascii_uppercase());
            } else {
                checksummed.push(c);
            }
        }
    }

    Ok(checksummed)
}

/// Validates a checksummed address string: accepts all-lowercase,
/// all-uppercase, and an exact EIP-55 checksum match; rejects any other
/// mixed-case string.
pub fn checksum_verify(address: &str) -> bool {
    let Ok(hex_part) = strip_0x(address) else {
        return false;
    };
    if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    let is_all_lower = hex_part.chars().all(|c| !c.is_ascii_uppercase());
    let is_all_upper = hex_part.chars().all(|c| !c.is_ascii_lowercase());
    if is_all_lower || is_all_upper {
        return true;
    }

    match checksum_encode(&hex_part.to_lowercase()) {
        Ok(checksummed) => checksummed[2..] == *hex_part,
        Err(_) => false,
    }
}

fn strip_0x(address: &str) -> Result<&str, Error> {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| Error::InvalidAddress("address must start with 0x".into()))
}
