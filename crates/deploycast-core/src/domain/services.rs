//! # Domain Services
//!
//! Pure functions composing the derivation pipeline. These are deterministic
//! and have no side effects: no I/O, no shared state, safely callable from
//! any number of threads without coordination.

use crate::domain::value_objects::{Address, Hash};
use crate::errors::DeriveError;
use crate::ports::{Hasher, PayloadEncoder};
use sha3::{Digest, Keccak256};

// =============================================================================
// ADDRESS DERIVATION
// =============================================================================

/// Extracts the raw contract address from a deployment-payload digest.
///
/// The address is the low-order 20 bytes of the 32-byte digest, i.e. bytes
/// 12..32 in big-endian layout. No failure modes.
#[must_use]
pub fn derive_raw_address(digest: &Hash) -> Address {
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&digest.as_bytes()[12..32]);
    Address::new(addr)
}

/// Computes the contract address for a standard deployment.
///
/// Address = hash(encode(\[sender, nonce\]))\[12..32\]
///
/// The encoder and hasher are injected so each can be validated against
/// published vectors on its own; production callers wire the RLP and
/// Keccak-256 adapters.
pub fn compute_contract_address<E, H>(
    sender: &Address,
    nonce: u64,
    encoder: &E,
    hasher: &H,
) -> Result<Address, DeriveError>
where
    E: PayloadEncoder,
    H: Hasher,
{
    let payload = encoder.encode_deployment(sender, nonce)?;
    let digest = hasher.digest32(&payload);
    Ok(derive_raw_address(&digest))
}

// =============================================================================
// KECCAK256 UTILITY
// =============================================================================

/// Computes keccak256 hash of data.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    let hash = Keccak256::digest(data);
    Hash::new(hash.into())
}

// =============================================================================
// TESTS
// =============================================================================
