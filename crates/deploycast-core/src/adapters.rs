//! # Adapters
//!
//! Production implementations of the derivation ports.

use crate::domain::rlp::{self, Item};
use crate::domain::value_objects::{Address, Hash};
use crate::errors::EncodingError;
use crate::ports::{Hasher, PayloadEncoder};
use sha3::{Digest, Keccak256};

// =============================================================================
// KECCAK-256 HASHER
// =============================================================================

/// [`Hasher`] backed by `sha3::Keccak256`.
///
/// Note: This is NOT SHA3-256 (standardized), it's Keccak-256
/// (pre-standardization). The ledger ecosystem uses Keccak-256 throughout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl Hasher for Keccak256Hasher {
    fn digest32(&self, data: &[u8]) -> Hash {
        let digest = Keccak256::digest(data);
        Hash::new(digest.into())
    }
}

// =============================================================================
// RLP PAYLOAD ENCODER
// =============================================================================

/// [`PayloadEncoder`] backed by the recursive-length-prefix encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct RlpPayloadEncoder;

impl PayloadEncoder for RlpPayloadEncoder {
    fn encode_deployment(
        &self,
        sender: &Address,
        nonce: u64,
    ) -> Result<Vec<u8>, EncodingError> {
        let pair = Item::List(vec![
            Item::Bytes(sender.as_bytes().to_vec()),
            Item::Uint(nonce),
        ]);
        rlp::encode(&pair)
    }
}

// =============================================================================
// TESTS
// =============================================================================
