//! Typed-envelope transaction codec: five variants sharing one RLP grammar.
//!
//! Each variant pairs a field-layout struct with the [`crate::signature::Signature`]
//! that covers it. Decoding dispatches on the leading byte (§4.4); encoding is
//! its exact inverse — `encode_transaction(decode_transaction(x)?) == x` for
//! every valid `x`. Both directions are built on [`crate::rlp`]'s `RlpItem`
//! tree, the same codec exercised directly in `rlp.rs`'s own tests — there is
//! exactly one RLP implementation in this crate, not two.

use alloy_primitives::{Address, Bytes, TxKind, B256, U256};

use crate::error::Error;
use crate::keccak::keccak256;
use crate::rlp::{self, RlpItem};
use crate::signature::{self, Signature};

/// An EIP-2930 access list entry: an address plus the storage slots the
/// transaction pre-declares access to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessListItem {
    pub address: Address,
    pub storage_keys: Vec<B256>,
}

/// An EIP-7702 authorization tuple. `nonce` is `None` for the empty RLP list
/// and `Some(n)` for a single-item list — the two are distinct on the wire
/// and must not collapse to the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorization {
    pub chain_id: u64,
    pub address: Address,
    pub nonce: Option<u64>,
    pub y_parity: bool,
    pub r: U256,
    pub s: U256,
}

/// A pre-EIP-2718 legacy transaction. `chain_id` is not itself a wire field —
/// it is recovered from `v` on decode (`None` for pre-EIP-155 transactions)
/// and fed back into `v`'s computation on encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyTx {
    pub nonce: u64,
    pub gas_price: u128,
    pub gas_limit: u64,
    pub to: TxKind,
    pub value: U256,
    pub data: Bytes,
    pub chain_id: Option<u64>,
}

/// An EIP-2930 access-list transaction (type `0x01`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessListTx {
    pub chain_id: u64,
    pub nonce: u64,
    pub gas_price: u128,
    pub gas_limit: u64,
    pub to: TxKind,
    pub value: U256,
    pub data: Bytes,
    pub access_list: Vec<AccessListItem>,
}

/// An EIP-1559 dynamic-fee transaction (type `0x02`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicFeeTx {
    pub chain_id: u64,
    pub nonce: u64,
    pub max_priority_fee_per_gas: u128,
    pub max_fee_per_gas: u128,
    pub gas_limit: u64,
    pub to: TxKind,
    pub value: U256,
    pub data: Bytes,
    pub access_list: Vec<AccessListItem>,
}

/// An EIP-4844 blob transaction (type `0x03`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobTx {
    pub chain_id: u64,
    pub nonce: u64,
    pub max_priority_fee_per_gas: u128,
    pub max_fee_per_gas: u128,
    pub gas_limit: u64,
    pub to: TxKind,
    pub value: U256,
    pub data: Bytes,
    pub access_list: Vec<AccessListItem>,
    pub max_fee_per_blob_gas: u128,
    pub blob_versioned_hashes: Vec<B256>,
}

/// An EIP-7702 set-code transaction (type `0x04`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCodeTx {
    pub chain_id: u64,
    pub nonce: u64,
    pub max_priority_fee_per_gas: u128,
    pub max_fee_per_gas: u128,
    pub gas_limit: u64,
    pub to: TxKind,
    pub value: U256,
    pub data: Bytes,
    pub access_list: Vec<AccessListItem>,
    pub authorization_list: Vec<Authorization>,
}

/// A decoded or about-to-be-encoded transaction, paired with the signature
/// that covers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Legacy(LegacyTx, Signature),
    AccessList(AccessListTx, Signature),
    DynamicFee(DynamicFeeTx, Signature),
    Blob(BlobTx, Signature),
    SetCode(SetCodeTx, Signature),
}

impl Transaction {
    /// The envelope type byte, or `None` for Legacy (which has no type byte —
    /// its wire form starts directly with an RLP list header).
    pub fn type_byte(&self) -> Option<u8> {
        match self {
            Transaction::Legacy(..) => None,
            Transaction::AccessList(..) => Some(0x01),
            Transaction::DynamicFee(..) => Some(0x02),
            Transaction::Blob(..) => Some(0x03),
            Transaction::SetCode(..) => Some(0x04),
        }
    }
}

// ---------------------------------------------------------------------------
// RlpItem <-> field conversions. Every transaction field, fixed-width or not,
// goes through one of these so the codec has a single place that knows how
// each Rust type maps onto the RLP grammar.
// ---------------------------------------------------------------------------

fn expect_list(item: RlpItem) -> Result<Vec<RlpItem>, Error> {
    match item {
        RlpItem::List(items) => Ok(items),
        RlpItem::String(_) => Err(Error::NonCanonicalRlp("expected a list, found a byte string")),
    }
}

fn expect_string(item: RlpItem) -> Result<Vec<u8>, Error> {
    match item {
        RlpItem::String(bytes) => Ok(bytes),
        RlpItem::List(_) => Err(Error::NonCanonicalRlp("expected a byte string, found a list")),
    }
}

fn decode_fields(item: RlpItem, expected: usize) -> Result<Vec<RlpItem>, Error> {
    let items = expect_list(item)?;
    if items.len() != expected {
        return Err(Error::WrongFieldCount {
            expected,
            got: items.len(),
        });
    }
    Ok(items)
}

fn encode_u64(n: u64) -> RlpItem {
    RlpItem::String(rlp::uint_to_bytes(n as u128))
}

fn decode_u64(item: RlpItem) -> Result<u64, Error> {
    let bytes = expect_string(item)?;
    let value = rlp::bytes_to_uint(&bytes)?;
    u64::try_from(value).map_err(|_| Error::NonCanonicalRlp("integer field overflows u64"))
}

fn encode_u128(n: u128) -> RlpItem {
    RlpItem::String(rlp::uint_to_bytes(n))
}

fn decode_u128(item: RlpItem) -> Result<u128, Error> {
    let bytes = expect_string(item)?;
    rlp::bytes_to_uint(&bytes)
}

fn encode_u256(n: U256) -> RlpItem {
    let be = n.to_be_bytes::<32>();
    RlpItem::String(rlp::trim_leading_zeros(&be).to_vec())
}

fn decode_u256(item: RlpItem) -> Result<U256, Error> {
    let bytes = expect_string(item)?;
    let fixed = rlp::bytes_to_fixed_uint::<32>(&bytes)?;
    Ok(U256::from_be_bytes(fixed))
}

fn encode_address(addr: Address) -> RlpItem {
    RlpItem::String(addr.as_slice().to_vec())
}

fn decode_address(item: RlpItem) -> Result<Address, Error> {
    let bytes = expect_string(item)?;
    if bytes.len() != 20 {
        return Err(Error::NonCanonicalRlp("address must be exactly 20 bytes"));
    }
    Ok(Address::from_slice(&bytes))
}

fn encode_to(to: TxKind) -> RlpItem {
    match to {
        TxKind::Create => RlpItem::String(Vec::new()),
        TxKind::Call(addr) => encode_address(addr),
    }
}

fn decode_to(item: RlpItem) -> Result<TxKind, Error> {
    let bytes = expect_string(item)?;
    match bytes.len() {
        0 => Ok(TxKind::Create),
        20 => Ok(TxKind::Call(Address::from_slice(&bytes))),
        _ => Err(Error::NonCanonicalRlp(
            "`to` must be the empty string or exactly 20 bytes",
        )),
    }
}

fn encode_bytes(b: &Bytes) -> RlpItem {
    RlpItem::String(b.to_vec())
}

fn decode_bytes(item: RlpItem) -> Result<Bytes, Error> {
    Ok(Bytes::from(expect_string(item)?))
}

fn encode_b256(h: B256) -> RlpItem {
    RlpItem::String(h.as_slice().to_vec())
}

fn decode_b256(item: RlpItem) -> Result<B256, Error> {
    let bytes = expect_string(item)?;
    if bytes.len() != 32 {
        return Err(Error::NonCanonicalRlp("32-byte field has the wrong length"));
    }
    Ok(B256::from_slice(&bytes))
}

fn encode_access_list(list: &[AccessListItem]) -> RlpItem {
    RlpItem::List(list.iter().map(encode_access_list_item).collect())
}

fn encode_access_list_item(entry: &AccessListItem) -> RlpItem {
    RlpItem::List(vec![
        encode_address(entry.address),
        RlpItem::List(entry.storage_keys.iter().map(|k| encode_b256(*k)).collect()),
    ])
}

fn decode_access_list(item: RlpItem) -> Result<Vec<AccessListItem>, Error> {
    let items =
        expect_list(item).map_err(|_| Error::InvalidAccessList("access list must be a list"))?;
    items.into_iter().map(decode_access_list_item).collect()
}

fn decode_access_list_item(item: RlpItem) -> Result<AccessListItem, Error> {
    let fields = expect_list(item)
        .map_err(|_| Error::InvalidAccessList("access list entry must be a list"))?;
    if fields.len() != 2 {
        return Err(Error::InvalidAccessList(
            "access list entry must have exactly two fields",
        ));
    }
    let mut it = fields.into_iter();
    let address = decode_address(it.next().unwrap())
        .map_err(|_| Error::InvalidAccessList("address must be exactly 20 bytes"))?;
    let key_items = expect_list(it.next().unwrap())
        .map_err(|_| Error::InvalidAccessList("storage keys must be a list"))?;
    let storage_keys = key_items
        .into_iter()
        .map(|k| {
            decode_b256(k).map_err(|_| Error::InvalidAccessList("storage key must be exactly 32 bytes"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(AccessListItem {
        address,
        storage_keys,
    })
}

fn encode_authorization_list(list: &[Authorization]) -> RlpItem {
    RlpItem::List(list.iter().map(encode_authorization).collect())
}

fn encode_authorization(a: &Authorization) -> RlpItem {
    let nonce_list = match a.nonce {
        None => RlpItem::List(Vec::new()),
        Some(n) => RlpItem::List(vec![encode_u64(n)]),
    };
    RlpItem::List(vec![
        encode_u64(a.chain_id),
        encode_address(a.address),
        nonce_list,
        encode_u64(a.y_parity as u64),
        encode_u256(a.r),
        encode_u256(a.s),
    ])
}

fn decode_authorization_list(item: RlpItem) -> Result<Vec<Authorization>, Error> {
    let items = expect_list(item)
        .map_err(|_| Error::InvalidAuthorization("authorization list must be a list"))?;
    items.into_iter().map(decode_authorization).collect()
}

fn decode_authorization(item: RlpItem) -> Result<Authorization, Error> {
    let fields = expect_list(item)
        .map_err(|_| Error::InvalidAuthorization("authorization tuple must be a list"))?;
    if fields.len() != 6 {
        return Err(Error::InvalidAuthorization(
            "authorization tuple must have exactly six fields",
        ));
    }
    let mut it = fields.into_iter();
    let chain_id = decode_u64(it.next().unwrap())
        .map_err(|_| Error::InvalidAuthorization("chain_id field is malformed"))?;
    let address = decode_address(it.next().unwrap())
        .map_err(|_| Error::InvalidAuthorization("address must be exactly 20 bytes"))?;
    let nonce_items = expect_list(it.next().unwrap())
        .map_err(|_| Error::InvalidAuthorization("nonce must be a list"))?;
    let nonce = match nonce_items.len() {
        0 => None,
        1 => Some(
            decode_u64(nonce_items.into_iter().next().unwrap())
                .map_err(|_| Error::InvalidAuthorization("nonce field is malformed"))?,
        ),
        _ => {
            return Err(Error::InvalidAuthorization(
                "nonce list must have length 0 or 1",
            ))
        }
    };
    let y_parity_raw = decode_u64(it.next().unwrap())
        .map_err(|_| Error::InvalidAuthorization("y_parity field is malformed"))?;
    if y_parity_raw > 1 {
        return Err(Error::InvalidAuthorization("y_parity must be 0 or 1"));
    }
    let r = decode_u256(it.next().unwrap())
        .map_err(|_| Error::InvalidAuthorization("r field is malformed"))?;
    let s = decode_u256(it.next().unwrap())
        .map_err(|_| Error::InvalidAuthorization("s field is malformed"))?;
    Ok(Authorization {
        chain_id,
        address,
        nonce,
        y_parity: y_parity_raw == 1,
        r,
        s,
    })
}

fn legacy_v(chain_id: Option<u64>, y_parity: bool) -> u128 {
    let y = y_parity as u128;
    match chain_id {
        None => 27 + y,
        Some(cid) => (cid as u128) * 2 + 35 + y,
    }
}

fn push_signature(items: &mut Vec<RlpItem>, sig: &Signature) {
    items.push(encode_u64(sig.y_parity as u64));
    items.push(encode_u256(sig.r));
    items.push(encode_u256(sig.s));
}

fn check_y_parity_byte(v: u64) -> Result<bool, Error> {
    match v {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(Error::MalformedSignature(format!(
            "y_parity must be 0 or 1, got {other}"
        ))),
    }
}

/// Decodes a transaction from its wire bytes. Dispatches on the leading byte
/// per §4.4: an RLP list header (`>= 0xC0`) selects Legacy, `0x01`–`0x04`
/// select the typed envelopes, anything else is [`Error::UnknownEnvelope`].
pub fn decode_transaction(bytes: &[u8]) -> Result<Transaction, Error> {
    let &first = bytes
        .first()
        .ok_or(Error::Truncated { needed: 1, got: 0 })?;

    if first >= 0xC0 {
        let item = rlp::decode_item_exact(bytes)?;
        let mut it = decode_fields(item, 9)?.into_iter();
        let nonce = decode_u64(it.next().unwrap())?;
        let gas_price = decode_u128(it.next().unwrap())?;
        let gas_limit = decode_u64(it.next().unwrap())?;
        let to = decode_to(it.next().unwrap())?;
        let value = decode_u256(it.next().unwrap())?;
        let data = decode_bytes(it.next().unwrap())?;
        let v = decode_u128(it.next().unwrap())?;
        let r = decode_u256(it.next().unwrap())?;
        let s = decode_u256(it.next().unwrap())?;

        let (y_parity, chain_id) = signature::recovery_id_from_v(v)?;
        let fields = LegacyTx {
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
            data,
            chain_id,
        };
        let sig = Signature { r, s, y_parity };
        return Ok(Transaction::Legacy(fields, sig));
    }

    let rest = &bytes[1..];
    match first {
        0x01 => {
            let item = rlp::decode_item_exact(rest)?;
            let mut it = decode_fields(item, 11)?.into_iter();
            let chain_id = decode_u64(it.next().unwrap())?;
            let nonce = decode_u64(it.next().unwrap())?;
            let gas_price = decode_u128(it.next().unwrap())?;
            let gas_limit = decode_u64(it.next().unwrap())?;
            let to = decode_to(it.next().unwrap())?;
            let value = decode_u256(it.next().unwrap())?;
            let data = decode_bytes(it.next().unwrap())?;
            let access_list = decode_access_list(it.next().unwrap())?;
            let y_parity = check_y_parity_byte(decode_u64(it.next().unwrap())?)?;
            let r = decode_u256(it.next().unwrap())?;
            let s = decode_u256(it.next().unwrap())?;

            let fields = AccessListTx {
                chain_id,
                nonce,
                gas_price,
                gas_limit,
                to,
                value,
                data,
                access_list,
            };
            let sig = Signature { r, s, y_parity };
            Ok(Transaction::AccessList(fields, sig))
        }
        0x02 => {
            let item = rlp::decode_item_exact(rest)?;
            let mut it = decode_fields(item, 12)?.into_iter();
            let chain_id = decode_u64(it.next().unwrap())?;
            let nonce = decode_u64(it.next().unwrap())?;
            let max_priority_fee_per_gas = decode_u128(it.next().unwrap())?;
            let max_fee_per_gas = decode_u128(it.next().unwrap())?;
            let gas_limit = decode_u64(it.next().unwrap())?;
            let to = decode_to(it.next().unwrap())?;
            let value = decode_u256(it.next().unwrap())?;
            let data = decode_bytes(it.next().unwrap())?;
            let access_list = decode_access_list(it.next().unwrap())?;
            let y_parity = check_y_parity_byte(decode_u64(it.next().unwrap())?)?;
            let r = decode_u256(it.next().unwrap())?;
            let s = decode_u256(it.next().unwrap())?;

            let fields = DynamicFeeTx {
                chain_id,
                nonce,
                max_priority_fee_per_gas,
                max_fee_per_gas,
                gas_limit,
                to,
                value,
                data,
                access_list,
            };
            let sig = Signature { r, s, y_parity };
            Ok(Transaction::DynamicFee(fields, sig))
        }
        0x03 => {
            let item = rlp::decode_item_exact(rest)?;
            let mut it = decode_fields(item, 14)?.into_iter();
            let chain_id = decode_u64(it.next().unwrap())?;
            let nonce = decode_u64(it.next().unwrap())?;
            let max_priority_fee_per_gas = decode_u128(it.next().unwrap())?;
            let max_fee_per_gas = decode_u128(it.next().unwrap())?;
            let gas_limit = decode_u64(it.next().unwrap())?;
            let to = decode_to(it.next().unwrap())?;
            let value = decode_u256(it.next().unwrap())?;
            let data = decode_bytes(it.next().unwrap())?;
            let access_list = decode_access_list(it.next().unwrap())?;
            let max_fee_per_blob_gas = decode_u128(it.next().unwrap())?;
            let blob_items = expect_list(it.next().unwrap())?;
            let blob_versioned_hashes = blob_items
                .into_iter()
                .map(decode_b256)
                .collect::<Result<Vec<_>, _>>()?;
            let y_parity = check_y_parity_byte(decode_u64(it.next().unwrap())?)?;
            let r = decode_u256(it.next().unwrap())?;
            let s = decode_u256(it.next().unwrap())?;

            let fields = BlobTx {
                chain_id,
                nonce,
                max_priority_fee_per_gas,
                max_fee_per_gas,
                gas_limit,
                to,
                value,
                data,
                access_list,
                max_fee_per_blob_gas,
                blob_versioned_hashes,
            };
            let sig = Signature { r, s, y_parity };
            Ok(Transaction::Blob(fields, sig))
        }
        0x04 => {
            let item = rlp::decode_item_exact(rest)?;
            let mut it = decode_fields(item, 13)?.into_iter();
            let chain_id = decode_u64(it.next().unwrap())?;
            let nonce = decode_u64(it.next().unwrap())?;
            let max_priority_fee_per_gas = decode_u128(it.next().unwrap())?;
            let max_fee_per_gas = decode_u128(it.next().unwrap())?;
            let gas_limit = decode_u64(it.next().unwrap())?;
            let to = decode_to(it.next().unwrap())?;
            let value = decode_u256(it.next().unwrap())?;
            let data = decode_bytes(it.next().unwrap())?;
            let access_list = decode_access_list(it.next().unwrap())?;
            let authorization_list = decode_authorization_list(it.next().unwrap())?;
            let y_parity = check_y_parity_byte(decode_u64(it.next().unwrap())?)?;
            let r = decode_u256(it.next().unwrap())?;
            let s = decode_u256(it.next().unwrap())?;

            let fields = SetCodeTx {
                chain_id,
                nonce,
                max_priority_fee_per_gas,
                max_fee_per_gas,
                gas_limit,
                to,
                value,
                data,
                access_list,
                authorization_list,
            };
            let sig = Signature { r, s, y_parity };
            Ok(Transaction::SetCode(fields, sig))
        }
        other => Err(Error::UnknownEnvelope(other)),
    }
}

/// Encodes a transaction to its wire bytes — the exact bytes a canonical
/// full node would broadcast.
pub fn encode_transaction(tx: &Transaction) -> Vec<u8> {
    match tx {
        Transaction::Legacy(fields, sig) => {
            let v = legacy_v(fields.chain_id, sig.y_parity);
            let items = vec![
                encode_u64(fields.nonce),
                encode_u128(fields.gas_price),
                encode_u64(fields.gas_limit),
                encode_to(fields.to),
                encode_u256(fields.value),
                encode_bytes(&fields.data),
                encode_u128(v),
                encode_u256(sig.r),
                encode_u256(sig.s),
            ];
            rlp::encode_item(&RlpItem::List(items))
        }
        Transaction::AccessList(fields, sig) => {
            let mut items = vec![
                encode_u64(fields.chain_id),
                encode_u64(fields.nonce),
                encode_u128(fields.gas_price),
                encode_u64(fields.gas_limit),
                encode_to(fields.to),
                encode_u256(fields.value),
                encode_bytes(&fields.data),
                encode_access_list(&fields.access_list),
            ];
            push_signature(&mut items, sig);
            let mut out = vec![0x01];
            out.extend(rlp::encode_item(&RlpItem::List(items)));
            out
        }
        Transaction::DynamicFee(fields, sig) => {
            let mut items = vec![
                encode_u64(fields.chain_id),
                encode_u64(fields.nonce),
                encode_u128(fields.max_priority_fee_per_gas),
                encode_u128(fields.max_fee_per_gas),
                encode_u64(fields.gas_limit),
                encode_to(fields.to),
                encode_u256(fields.value),
                encode_bytes(&fields.data),
                encode_access_list(&fields.access_list),
            ];
            push_signature(&mut items, sig);
            let mut out = vec![0x02];
            out.extend(rlp::encode_item(&RlpItem::List(items)));
            out
        }
        Transaction::Blob(fields, sig) => {
            let mut items = vec![
                encode_u64(fields.chain_id),
                encode_u64(fields.nonce),
                encode_u128(fields.max_priority_fee_per_gas),
                encode_u128(fields.max_fee_per_gas),
                encode_u64(fields.gas_limit),
                encode_to(fields.to),
                encode_u256(fields.value),
                encode_bytes(&fields.data),
                encode_access_list(&fields.access_list),
                encode_u128(fields.max_fee_per_blob_gas),
                RlpItem::List(
                    fields
                        .blob_versioned_hashes
                        .iter()
                        .map(|h| encode_b256(*h))
                        .collect(),
                ),
            ];
            push_signature(&mut items, sig);
            let mut out = vec![0x03];
            out.extend(rlp::encode_item(&RlpItem::List(items)));
            out
        }
        Transaction::SetCode(fields, sig) => {
            let mut items = vec![
                encode_u64(fields.chain_id),
                encode_u64(fields.nonce),
                encode_u128(fields.max_priority_fee_per_gas),
                encode_u128(fields.max_fee_per_gas),
                encode_u64(fields.gas_limit),
                encode_to(fields.to),
                encode_u256(fields.value),
                encode_bytes(&fields.data),
                encode_access_list(&fields.access_list),
                encode_authorization_list(&fields.authorization_list),
            ];
            push_signature(&mut items, sig);
            let mut out = vec![0x04];
            out.extend(rlp::encode_item(&RlpItem::List(items)));
            out
        }
    }
}

/// The transaction hash: Keccak-256 over the full signed wire encoding
/// (`encode_transaction`'s output), exactly as published by a full node.
pub fn transaction_hash(tx: &Transaction) -> [u8; 32] {
    keccak256(&encode_transaction(tx))
}

/// The signing preimage digest for `tx`. `chain_id` only matters for Legacy:
/// `Some(id)` produces the EIP-155 preimage (appending `chain_id, 0, 0`),
/// `None` produces the pre-EIP-155 six-field preimage. Typed envelopes always
/// carry their own `chain_id` as a wire field and ignore this parameter.
pub fn signing_hash(tx: &Transaction, chain_id: Option<u64>) -> [u8; 32] {
    match tx {
        Transaction::Legacy(fields, _) => {
            let mut items = vec![
                encode_u64(fields.nonce),
                encode_u128(fields.gas_price),
                encode_u64(fields.gas_limit),
                encode_to(fields.to),
                encode_u256(fields.value),
                encode_bytes(&fields.data),
            ];
            if let Some(cid) = chain_id {
                items.push(encode_u64(cid));
                items.push(encode_u64(0));
                items.push(encode_u64(0));
            }
            keccak256(&rlp::encode_item(&RlpItem::List(items)))
        }
        Transaction::AccessList(fields, _) => {
            let items = vec![
                encode_u64(fields.chain_id),
                encode_u64(fields.nonce),
                encode_u128(fields.gas_price),
                encode_u64(fields.gas_limit),
                encode_to(fields.to),
                encode_u256(fields.value),
                encode_bytes(&fields.data),
                encode_access_list(&fields.access_list),
            ];
            keccak_with_type_byte(0x01, items)
        }
        Transaction::DynamicFee(fields, _) => {
            let items = vec![
                encode_u64(fields.chain_id),
                encode_u64(fields.nonce),
                encode_u128(fields.max_priority_fee_per_gas),
                encode_u128(fields.max_fee_per_gas),
                encode_u64(fields.gas_limit),
                encode_to(fields.to),
                encode_u256(fields.value),
                encode_bytes(&fields.data),
                encode_access_list(&fields.access_list),
            ];
            keccak_with_type_byte(0x02, items)
        }
        Transaction::Blob(fields, _) => {
            let items = vec![
                encode_u64(fields.chain_id),
                encode_u64(fields.nonce),
                encode_u128(fields.max_priority_fee_per_gas),
                encode_u128(fields.max_fee_per_gas),
                encode_u64(fields.gas_limit),
                encode_to(fields.to),
                encode_u256(fields.value),
                encode_bytes(&fields.data),
                encode_access_list(&fields.access_list),
                encode_u128(fields.max_fee_per_blob_gas),
                RlpItem::List(
                    fields
                        .blob_versioned_hashes
                        .iter()
                        .map(|h| encode_b256(*h))
                        .collect(),
                ),
            ];
            keccak_with_type_byte(0x03, items)
        }
        Transaction::SetCode(fields, _) => {
            let items = vec![
                encode_u64(fields.chain_id),
                encode_u64(fields.nonce),
                encode_u128(fields.max_priority_fee_per_gas),
                encode_u128(fields.max_fee_per_gas),
                encode_u64(fields.gas_limit),
                encode_to(fields.to),
                encode_u256(fields.value),
                encode_bytes(&fields.data),
                encode_access_list(&fields.access_list),
                encode_authorization_list(&fields.authorization_list),
            ];
            keccak_with_type_byte(0x04, items)
        }
    }
}

fn keccak_with_type_byte(type_byte: u8, items: Vec<RlpItem>) -> [u8; 32] {
    let mut buf = vec![type_byte];
    buf.extend(rlp::encode_item(&RlpItem::List(items)));
    keccak256(&buf)
}
