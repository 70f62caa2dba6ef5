//! # Domain Layer (Inner Hexagon)
//!
//! Pure derivation logic: canonical encoding, checksum rendering, and the
//! digest-to-address pipeline. NO I/O, NO shared state.
//!
//! Dependencies point INWARD only (adapters depend on this, not vice versa).

pub mod checksum;
pub mod rlp;
pub mod services;
pub mod value_objects;

pub use checksum::*;
pub use services::*;
pub use value_objects::*;
