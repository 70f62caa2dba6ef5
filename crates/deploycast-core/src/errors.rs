//! # Error Types
//!
//! All error types for contract address derivation.
//!
//! Validation errors are detected eagerly at the input boundary, before any
//! hashing runs. The operation is pure and deterministic, so no error here
//! is retryable and no partial result is ever returned.

use thiserror::Error;

// =============================================================================
// DERIVATION ERRORS
// =============================================================================

/// Errors surfaced by the derivation boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// Input address string is not a well-formed 20-byte hex address.
    #[error("invalid address format: {reason}")]
    InvalidAddressFormat {
        /// What exactly was malformed about the input.
        reason: String,
    },

    /// Nonce is negative or not representable as a minimal non-negative
    /// big-endian byte string.
    #[error("invalid nonce: {0} (must be a non-negative integer)")]
    InvalidNonce(i128),

    /// Canonical encoder failure. Unreachable through the fixed two-field
    /// deployment schema, but surfaced rather than silently producing
    /// wrong bytes.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

impl DeriveError {
    /// Shorthand for an address-format rejection.
    pub fn address_format(reason: impl Into<String>) -> Self {
        Self::InvalidAddressFormat {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// ENCODING ERRORS
// =============================================================================

/// Errors from the canonical recursive-length-prefix encoder.
///
/// Kept separate from [`DeriveError`] so the encoder stays generically
/// testable on its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// A payload length could not be minimally encoded into a length-of-length
    /// prefix (more than 8 length bytes).
    #[error("length prefix overflow: payload of {0} bytes")]
    LengthOverflow(usize),
}

// =============================================================================
// TESTS
// =============================================================================
