//! # Ports
//!
//! The two capabilities the derivation pipeline depends on. Production
//! adapters implement these traits ([`crate::adapters`]); tests substitute
//! instrumented fakes so the encoder and the hash primitive can each be
//! validated against published vectors without invoking the other.

use crate::domain::value_objects::{Address, Hash};
use crate::errors::EncodingError;

// =============================================================================
// HASH PRIMITIVE
// =============================================================================

/// A 256-bit one-way hash over arbitrary byte strings.
///
/// The production implementation is Keccak-256 — the pre-standardization
/// sponge padding, NOT the NIST SHA3-256 variant. The two differ only in the
/// padding byte, but mixing them up makes every derived address wrong.
pub trait Hasher {
    /// Hashes `data` to exactly 32 bytes. Pure and deterministic.
    fn digest32(&self, data: &[u8]) -> Hash;
}

// =============================================================================
// CANONICAL ENCODER
// =============================================================================

/// Canonical binary encoding of the ordered `[sender, nonce]` pair.
///
/// The output feeds the hash primitive, so it must match what the ledger
/// itself would encode when forming the same address internally.
pub trait PayloadEncoder {
    /// Encodes the deployment pair into its canonical byte string.
    fn encode_deployment(&self, sender: &Address, nonce: u64)
        -> Result<Vec<u8>, EncodingError>;
}
