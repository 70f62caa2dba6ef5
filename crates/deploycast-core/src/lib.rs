//! # Deploycast Core - Contract Address Derivation
//!
//! Computes the deterministic on-chain address a smart contract will receive
//! when deployed from a given deployer address at a given account nonce,
//! using the standard (non-CREATE2) scheme of account-based ledgers:
//!
//! ```text
//! contract = keccak256(rlp([deployer, nonce]))[12..32]
//! ```
//!
//! rendered as a mixed-case checksummed hex string (EIP-55 style).
//!
//! ## Design
//!
//! The computation is a single pure pipeline with no persistent components:
//!
//! | Stage | Location | Purpose |
//! |-------|----------|---------|
//! | Canonical Encoder | `domain/rlp.rs` | recursive-length-prefix encoding of `[sender, nonce]` |
//! | Hash Primitive | `adapters.rs` | Keccak-256 (pre-NIST padding variant) |
//! | Address Deriver | `domain/services.rs` | low-order 20 bytes of the digest |
//! | Checksum Renderer | `domain/checksum.rs` | per-character case from a second Keccak pass |
//!
//! The encoder and hasher sit behind the [`ports`] traits so each can be
//! unit-tested against published vectors without invoking the other.
//!
//! ## Domain Invariants
//!
//! - The 20 raw address bytes are the single source of truth; hex casing
//!   carries integrity-check value only, never semantic value.
//! - Nonce zero canonicalizes to the empty byte string inside the encoding,
//!   never to a single zero byte.
//! - All input validation happens before any hashing; no partial result is
//!   ever returned.
//!
//! ## Usage Example
//!
//! ```
//! use deploycast_core::prelude::*;
//!
//! let contract = derive_contract_address("0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0", 0)?;
//! assert_eq!(contract, "0xcd234A471b72ba2F1Ccf0A70FCABA648a5eeCD8d");
//! # Ok::<(), DeriveError>(())
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Value objects
    pub use crate::domain::value_objects::{Address, Hash};

    // Domain services
    pub use crate::domain::checksum::{checksum_encode, checksum_verify};
    pub use crate::domain::services::{compute_contract_address, derive_raw_address, keccak256};

    // Ports
    pub use crate::ports::{Hasher, PayloadEncoder};

    // Adapters
    pub use crate::adapters::{Keccak256Hasher, RlpPayloadEncoder};

    // Service
    pub use crate::service::{derive_contract_address, Deriver};

    // Errors
    pub use crate::errors::{DeriveError, EncodingError};
}

pub use service::derive_contract_address;

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
