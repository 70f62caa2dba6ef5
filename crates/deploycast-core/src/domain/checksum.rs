//! # Checksum Renderer
//!
//! Mixed-case checksum encoding of addresses. The case pattern is derived
//! from a second Keccak pass over the lowercase hex characters, giving the
//! presentation form a built-in typo check. Case carries no other meaning:
//! comparisons must always go through the raw bytes or a lowercased form.

use crate::domain::value_objects::Address;
use crate::errors::DeriveError;
use crate::ports::Hasher;

// =============================================================================
// ENCODING
// =============================================================================

/// Renders an address in its mixed-case checksummed form.
///
/// The hash is computed over the 40 lowercase hex *characters* (as ASCII
/// bytes), not over the 20 raw bytes. For each character position, the
/// matching hex digit of the digest decides the case: a nibble value >= 8
/// uppercases the character. Decimal digits are case-invariant and always
/// pass through unchanged.
#[must_use]
pub fn checksum_encode<H: Hasher>(addr: &Address, hasher: &H) -> String {
    let lower = addr.to_lowercase_hex();
    let digest = hasher.digest32(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, ch) in lower.bytes().enumerate() {
        let byte = digest.as_bytes()[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if nibble >= 8 {
            out.push(ch.to_ascii_uppercase() as char);
        } else {
            out.push(ch as char);
        }
    }
    out
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Checks whether a string is the exact checksummed rendering of itself.
///
/// The input must still be a well-formed address (`InvalidAddressFormat`
/// otherwise). Returns `false` for any casing that differs from the
/// computed one, including all-lowercase and all-uppercase renderings
/// whenever the checksum calls for mixed case.
pub fn checksum_verify<H: Hasher>(s: &str, hasher: &H) -> Result<bool, DeriveError> {
    let addr = Address::from_hex(s)?;
    Ok(checksum_encode(&addr, hasher) == s)
}

// =============================================================================
// TESTS
// =============================================================================
