//! # Canonical Encoder
//!
//! Recursive-length-prefix serialization of byte strings, non-negative
//! integers, and nested lists. This is the self-describing binary form the
//! ledger hashes when it computes a deployment address internally, so the
//! output must be bit-exact with the ledger's own encoder.
//!
//! Encoding rules:
//! - A single byte below 0x80 encodes as itself.
//! - A byte string of length L <= 55 is prefixed with `0x80 + L`; longer
//!   strings get `0xb7 + len_of_len` followed by the minimal big-endian
//!   length.
//! - A list whose encoded payload is L <= 55 bytes is prefixed with
//!   `0xc0 + L`; longer payloads get `0xf7 + len_of_len` plus the length.
//! - An integer is its minimal big-endian byte string (empty for zero),
//!   then encoded under the byte-string rule.

use crate::errors::EncodingError;

// =============================================================================
// ITEMS
// =============================================================================

/// One encodable item: a raw byte string, a non-negative integer, or a
/// (possibly nested) list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Raw byte string, encoded verbatim under the string rule.
    Bytes(Vec<u8>),
    /// Non-negative integer, canonicalized to minimal big-endian bytes first.
    Uint(u64),
    /// Ordered list of nested items.
    List(Vec<Item>),
}

// =============================================================================
// INTEGER CANONICALIZATION
// =============================================================================

/// Converts an integer to its minimal big-endian byte representation.
///
/// Zero canonicalizes to the empty byte string, not to a single zero byte.
/// There are never leading zero bytes.
#[must_use]
pub fn uint_to_minimal_be(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a single item into its canonical binary form.
///
/// Identical inputs always yield identical output; there is no randomness
/// and no environment dependency.
pub fn encode(item: &Item) -> Result<Vec<u8>, EncodingError> {
    let mut out = Vec::with_capacity(64);
    encode_into(item, &mut out)?;
    Ok(out)
}

fn encode_into(item: &Item, out: &mut Vec<u8>) -> Result<(), EncodingError> {
    match item {
        Item::Bytes(bytes) => encode_bytes(bytes, out),
        Item::Uint(value) => encode_bytes(&uint_to_minimal_be(*value), out),
        Item::List(items) => {
            let mut payload = Vec::with_capacity(64);
            for nested in items {
                encode_into(nested, &mut payload)?;
            }
            if payload.len() <= 55 {
                out.push(0xc0 + payload.len() as u8);
            } else {
                let len_bytes = encode_length(payload.len())?;
                out.push(0xf7 + len_bytes.len() as u8);
                out.extend_from_slice(&len_bytes);
            }
            out.extend_from_slice(&payload);
            Ok(())
        }
    }
}

fn encode_bytes(bytes: &[u8], out: &mut Vec<u8>) -> Result<(), EncodingError> {
    if bytes.len() == 1 && bytes[0] < 0x80 {
        out.push(bytes[0]);
    } else if bytes.len() <= 55 {
        out.push(0x80 + bytes.len() as u8);
        out.extend_from_slice(bytes);
    } else {
        let len_bytes = encode_length(bytes.len())?;
        out.push(0xb7 + len_bytes.len() as u8);
        out.extend_from_slice(&len_bytes);
        out.extend_from_slice(bytes);
    }
    Ok(())
}

/// Minimal big-endian bytes of a payload length.
///
/// A length needing more than 8 bytes cannot occur for in-memory payloads;
/// the check keeps the failure distinct instead of producing wrong bytes.
fn encode_length(len: usize) -> Result<Vec<u8>, EncodingError> {
    let minimal = uint_to_minimal_be(len as u64);
    if minimal.len() > 8 {
        return Err(EncodingError::LengthOverflow(len));
    }
    Ok(minimal)
}

// =============================================================================
// TESTS
// =============================================================================
