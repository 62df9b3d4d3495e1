//! Recursive Length Prefix: the length-prefix grammar underlying every
//! Ethereum wire format.
//!
//! A single byte `b < 0x80` encodes its own value. A byte string of length
//! `<= 55` encodes as `0x80 + len` followed by the bytes; longer strings use
//! `0xB7 + len(len)` followed by the minimal big-endian length, then the
//! bytes. Lists mirror this with `0xC0`/`0xF7` pivots. A decoder must reject
//! any encoding that isn't the unique shortest one for its value — this
//! module enforces that in both directions.

use crate::error::Error;

/// Maximum nesting depth a decoded item may reach. Bounds work on pathological
/// input before any allocation happens.
pub const MAX_DEPTH: usize = 16;

/// A decoded RLP value: either a terminal byte string or an ordered list of
/// items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpItem {
    String(Vec<u8>),
    List(Vec<RlpItem>),
}

impl RlpItem {
    pub fn as_string(&self) -> Option<&[u8]> {
        match self {
            RlpItem::String(s) => Some(s),
            RlpItem::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RlpItem]> {
        match self {
            RlpItem::List(items) => Some(items),
            RlpItem::String(_) => None,
        }
    }
}

/// Encodes an [`RlpItem`] to its unique canonical byte sequence.
pub fn encode_item(item: &RlpItem) -> Vec<u8> {
    let mut out = Vec::new();
    encode_item_into(item, &mut out);
    out
}

fn encode_item_into(item: &RlpItem, out: &mut Vec<u8>) {
    match item {
        RlpItem::String(s) => encode_string_into(s, out),
        RlpItem::List(items) => {
            let mut body = Vec::new();
            for child in items {
                encode_item_into(child, &mut body);
            }
            encode_header_into(0xC0, &body, out);
            out.extend_from_slice(&body);
        }
    }
}

fn encode_string_into(s: &[u8], out: &mut Vec<u8>) {
    if s.len() == 1 && s[0] < 0x80 {
        out.push(s[0]);
        return;
    }
    encode_header_into(0x80, s, out);
    out.extend_from_slice(s);
}

/// Writes the length-prefix header for a byte string (`base = 0x80`) or list
/// body (`base = 0xC0`) of the given body.
fn encode_header_into(base: u8, body: &[u8], out: &mut Vec<u8>) {
    if body.len() <= 55 {
        out.push(base + body.len() as u8);
    } else {
        let len_bytes = minimal_be(body.len() as u128);
        out.push(base + 0x37 + len_bytes.len() as u8);
        out.extend_from_slice(&len_bytes);
    }
}

/// Decodes exactly one [`RlpItem`] from the front of `input`, returning it
/// along with the number of bytes consumed. Trailing bytes are permitted;
/// use [`decode_item_exact`] when the whole slice must be one item.
pub fn decode_item(input: &[u8]) -> Result<(RlpItem, usize), Error> {
    decode_item_at_depth(input, 0)
}

/// Decodes exactly one [`RlpItem`], requiring the entire input be consumed.
pub fn decode_item_exact(input: &[u8]) -> Result<RlpItem, Error> {
    let (item, consumed) = decode_item(input)?;
    if consumed != input.len() {
        return Err(Error::NonCanonicalRlp("trailing bytes after RLP item"));
    }
    Ok(item)
}

fn need(input: &[u8], n: usize) -> Result<(), Error> {
    if input.len() < n {
        Err(Error::Truncated {
            needed: n,
            got: input.len(),
        })
    } else {
        Ok(())
    }
}

fn decode_item_at_depth(input: &[u8], depth: usize) -> Result<(RlpItem, usize), Error> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthExceeded(MAX_DEPTH));
    }
    need(input, 1)?;
    let b = input[0];

    match b {
        0x00..=0x7F => Ok((RlpItem::String(vec![b]), 1)),
        0x80..=0xB7 => {
            let len = (b - 0x80) as usize;
            need(input, 1 + len)?;
            let body = &input[1..1 + len];
            if len == 1 && body[0] < 0x80 {
                return Err(Error::NonCanonicalRlp(
                    "single byte below 0x80 encoded with a length prefix",
                ));
            }
            Ok((RlpItem::String(body.to_vec()), 1 + len))
        }
        0xB8..=0xBF => {
            let len_of_len = (b - 0xB7) as usize;
            let (len, header_len) = decode_long_length(input, len_of_len)?;
            if len <= 55 {
                return Err(Error::NonCanonicalRlp(
                    "long-form string length should have used the short form",
                ));
            }
            need(input, header_len + len)?;
            let body = &input[header_len..header_len + len];
            Ok((RlpItem::String(body.to_vec()), header_len + len))
        }
        0xC0..=0xF7 => {
            let len = (b - 0xC0) as usize;
            need(input, 1 + len)?;
            let body = &input[1..1 + len];
            let items = decode_list_body(body, depth)?;
            Ok((RlpItem::List(items), 1 + len))
        }
        0xF8..=0xFF => {
            let len_of_len = (b - 0xF7) as usize;
            let (len, header_len) = decode_long_length(input, len_of_len)?;
            if len <= 55 {
                return Err(Error::NonCanonicalRlp(
                    "long-form list length should have used the short form",
                ));
            }
            need(input, header_len + len)?;
            let body = &input[header_len..header_len + len];
            let items = decode_list_body(body, depth)?;
            Ok((RlpItem::List(items), header_len + len))
        }
    }
}

fn decode_list_body(mut body: &[u8], depth: usize) -> Result<Vec<RlpItem>, Error> {
    let mut items = Vec::new();
    while !body.is_empty() {
        let (item, consumed) = decode_item_at_depth(body, depth + 1)?;
        items.push(item);
        body = &body[consumed..];
    }
    Ok(items)
}

/// Decodes the `len_of_len` bytes following the header byte as a big-endian
/// length, rejecting a leading zero byte (non-minimal) and overflow beyond
/// `usize`. Returns `(length, total_header_bytes_including_tag)`.
fn decode_long_length(input: &[u8], len_of_len: usize) -> Result<(usize, usize), Error> {
    if len_of_len == 0 {
        return Err(Error::NonCanonicalRlp("zero-length long-form length"));
    }
    need(input, 1 + len_of_len)?;
    let len_bytes = &input[1..1 + len_of_len];
    if len_bytes[0] == 0 {
        return Err(Error::NonCanonicalRlp(
            "long-form length has a leading zero byte",
        ));
    }
    if len_of_len > (usize::BITS as usize) / 8 {
        return Err(Error::NonCanonicalRlp("declared length overflows usize"));
    }
    let mut len: usize = 0;
    for &byte in len_bytes {
        len = len
            .checked_shl(8)
            .ok_or(Error::NonCanonicalRlp("declared length overflows usize"))?;
        len |= byte as usize;
    }
    Ok((len, 1 + len_of_len))
}

/// Strips leading zero bytes from `n`'s big-endian representation; `0`
/// itself becomes the empty byte string.
fn minimal_be(n: u128) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let bytes = n.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}

/// Strips leading zero bytes from an arbitrary big-endian byte slice. Used by
/// the transaction codec's fixed-width (256-bit) integer fields, which are
/// wider than [`uint_to_bytes`]'s `u128`.
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Rejects a byte string with a leading zero byte (non-canonical integer
/// encoding). The empty string (value zero) is always canonical.
pub fn reject_leading_zero(bytes: &[u8]) -> Result<(), Error> {
    if bytes.first() == Some(&0) {
        Err(Error::NonCanonicalInteger)
    } else {
        Ok(())
    }
}

/// Decodes a canonical RLP byte string into a fixed-width big-endian integer
/// of `N` bytes (e.g. `N = 32` for a 256-bit field), rejecting a leading zero
/// byte and anything wider than `N` bytes.
pub fn bytes_to_fixed_uint<const N: usize>(bytes: &[u8]) -> Result<[u8; N], Error> {
    reject_leading_zero(bytes)?;
    if bytes.len() > N {
        return Err(Error::NonCanonicalRlp("integer wider than field width"));
    }
    let mut buf = [0u8; N];
    buf[N - bytes.len()..].copy_from_slice(bytes);
    Ok(buf)
}

/// Encodes a non-negative integer as its canonical RLP byte string: the
/// shortest big-endian representation, with zero mapping to the empty
/// string.
pub fn uint_to_bytes(n: u128) -> Vec<u8> {
    minimal_be(n)
}

/// Decodes a canonical RLP byte string as an unsigned integer. Rejects a
/// leading zero byte and anything wider than 16 bytes (this helper is scoped
/// to `u128`-sized fields; 256-bit fields go through `alloy_primitives::U256`
/// in the transaction codec).
pub fn bytes_to_uint(bytes: &[u8]) -> Result<u128, Error> {
    if bytes.is_empty() {
        return Ok(0);
    }
    if bytes[0] == 0 {
        return Err(Error::NonCanonicalInteger);
    }
    if bytes.len() > 16 {
        return Err(Error::NonCanonicalRlp("integer wider than 128 bits"));
    }
    let mut buf = [0u8; 16];
    buf[16 - bytes.len()..].copy_from_slice(bytes);
    Ok(u128::from_be_bytes(buf))
}
