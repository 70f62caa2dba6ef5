//! # Derivation Service
//!
//! The outward-facing boundary of the crate: validates caller input, wires
//! the production adapters through the pure pipeline, and renders the result
//! in its checksummed presentation form.
//!
//! All validation happens eagerly, before any cryptographic work runs.
//! The operation is pure and deterministic — retrying with the same input
//! produces the same result (or the same error), and no partial result is
//! ever returned.

use crate::adapters::{Keccak256Hasher, RlpPayloadEncoder};
use crate::domain::checksum::checksum_encode;
use crate::domain::services::compute_contract_address;
use crate::domain::value_objects::Address;
use crate::errors::DeriveError;
use crate::ports::{Hasher, PayloadEncoder};
use tracing::debug;

// =============================================================================
// DERIVER
// =============================================================================

/// Derivation pipeline with pluggable encoder and hasher.
///
/// Stateless and trivially `Copy` with the default parts; a single value can
/// be shared across threads freely.
#[derive(Debug, Clone, Copy)]
pub struct Deriver<E = RlpPayloadEncoder, H = Keccak256Hasher> {
    encoder: E,
    hasher: H,
}

impl Deriver {
    /// Creates a deriver with the production adapters (RLP + Keccak-256).
    #[must_use]
    pub fn new() -> Self {
        Self {
            encoder: RlpPayloadEncoder,
            hasher: Keccak256Hasher,
        }
    }
}

impl Default for Deriver {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PayloadEncoder, H: Hasher> Deriver<E, H> {
    /// Creates a deriver from explicit capability implementations.
    pub fn with_parts(encoder: E, hasher: H) -> Self {
        Self { encoder, hasher }
    }

    /// Typed entry point: sender and nonce are already validated by their
    /// types. Returns the raw 20-byte contract address.
    pub fn derive(&self, sender: &Address, nonce: u64) -> Result<Address, DeriveError> {
        compute_contract_address(sender, nonce, &self.encoder, &self.hasher)
    }

    /// String boundary: parses and validates the deployer address and nonce,
    /// then returns the `0x`-prefixed mixed-case checksummed contract
    /// address.
    ///
    /// The address is accepted case-insensitively; the nonce is rejected
    /// with [`DeriveError::InvalidNonce`] when negative or too large to be a
    /// minimal non-negative byte string.
    pub fn derive_checksummed(&self, address: &str, nonce: i128) -> Result<String, DeriveError> {
        let sender = Address::from_hex(address)?;
        let nonce = u64::try_from(nonce).map_err(|_| DeriveError::InvalidNonce(nonce))?;

        let contract = self.derive(&sender, nonce)?;
        let rendered = checksum_encode(&contract, &self.hasher);
        debug!(sender = ?sender, nonce, contract = ?contract, "derived contract address");
        Ok(rendered)
    }
}

// =============================================================================
// BOUNDARY FUNCTION
// =============================================================================

/// Computes the checksummed address a contract will receive when deployed
/// from `address` at transaction count `nonce`.
///
/// Convenience wrapper over [`Deriver`] with the production adapters.
pub fn derive_contract_address(address: &str, nonce: i128) -> Result<String, DeriveError> {
    Deriver::new().derive_checksummed(address, nonce)
}

// =============================================================================
// TESTS
// =============================================================================
