//! End-to-end derivation scenarios and property checks.
//!
//! The canonical encoder is cross-checked against the `rlp` crate as an
//! independent oracle, and the published deployment/checksum vectors are
//! exercised through the public boundary.

use deploycast_core::domain::rlp::{encode, uint_to_minimal_be, Item};
use deploycast_core::prelude::*;
use proptest::prelude::*;
use rlp::RlpStream;

const DEPLOYER: &str = "0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0";

// =============================================================================
// KNOWN VECTORS
// =============================================================================

#[test]
fn known_deployment_vectors() {
    let vectors: [(i128, &str); 4] = [
        (0, "0xcd234A471b72ba2F1Ccf0A70FCABA648a5eeCD8d"),
        (1, "0x343c43A37D37dfF08AE8C4A11544c718AbB4fCF8"),
        (2, "0xf778B86FA74E846c4f0a1fBd1335FE81c00a0C91"),
        (3, "0xffFd933A0bC612844eaF0C6Fe3E5b8E9B6C1d19c"),
    ];
    for (nonce, expected) in vectors {
        assert_eq!(
            derive_contract_address(DEPLOYER, nonce).unwrap(),
            expected,
            "nonce {nonce}"
        );
    }
}

#[test]
fn known_zero_deployer_vectors() {
    let zero = "0x0000000000000000000000000000000000000000";
    assert_eq!(
        derive_contract_address(zero, 0).unwrap(),
        "0xBd770416a3345F91E4B34576cb804a576fa48EB1"
    );
    assert_eq!(
        derive_contract_address(zero, 1).unwrap(),
        "0x5a443704dd4B594B382c22a083e2BD3090A6feF3"
    );
}

#[test]
fn large_nonces_use_length_prefixed_encoding() {
    // 128 is the first nonce that no longer fits the single-byte form.
    assert_eq!(
        derive_contract_address(DEPLOYER, 128).unwrap(),
        "0x08e190dcB7b73F5fcDAbb43e102215c83659A76D"
    );
    assert_eq!(
        derive_contract_address(DEPLOYER, 256).unwrap(),
        "0x3837C1Ae70354f670550C746580199Ac6a73Cb0a"
    );
}

#[test]
fn rejects_malformed_addresses() {
    for bad in [
        "6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0",    // no prefix
        "0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbf",   // 39 digits
        "0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbf000", // 41 digits
        "0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbzz",  // non-hex
        "0x",
        "",
    ] {
        let err = derive_contract_address(bad, 0).unwrap_err();
        assert!(
            matches!(err, DeriveError::InvalidAddressFormat { .. }),
            "input {bad:?} produced {err:?}"
        );
    }
}

#[test]
fn rejects_invalid_nonces() {
    assert_eq!(
        derive_contract_address(DEPLOYER, -1).unwrap_err(),
        DeriveError::InvalidNonce(-1)
    );
    let too_big = i128::from(u64::MAX) + 1;
    assert_eq!(
        derive_contract_address(DEPLOYER, too_big).unwrap_err(),
        DeriveError::InvalidNonce(too_big)
    );
}

#[test]
fn mixed_case_input_matches_lowercase_input() {
    let from_lower = derive_contract_address(DEPLOYER, 5).unwrap();
    let from_upper =
        derive_contract_address("0x6AC7EA33F8831EA9DCC53393AAA88B25A785DBF0", 5).unwrap();
    assert_eq!(from_lower, from_upper);
}

// =============================================================================
// ENCODER CROSS-CHECK (rlp crate as oracle)
// =============================================================================

#[test]
fn encoder_matches_oracle_on_string_boundaries() {
    for len in [0usize, 1, 2, 54, 55, 56, 100, 1024] {
        let data = vec![0xabu8; len];
        assert_eq!(
            encode(&Item::Bytes(data.clone())).unwrap(),
            rlp::encode(&data).to_vec(),
            "string of {len} bytes"
        );
    }
    // Single low byte encodes as itself.
    let single = vec![0x05u8];
    assert_eq!(
        encode(&Item::Bytes(single.clone())).unwrap(),
        rlp::encode(&single).to_vec()
    );
}

#[test]
fn encoder_matches_oracle_on_uint_boundaries() {
    for n in [0u64, 1, 0x7f, 0x80, 0xff, 0x100, 1024, u64::MAX] {
        assert_eq!(
            encode(&Item::Uint(n)).unwrap(),
            rlp::encode(&n).to_vec(),
            "uint {n}"
        );
    }
}

#[test]
fn encoder_matches_oracle_on_lists() {
    // Empty list.
    assert_eq!(
        encode(&Item::List(vec![])).unwrap(),
        RlpStream::new_list(0).out().to_vec()
    );

    // ["cat", "dog"]
    let mut stream = RlpStream::new_list(2);
    stream.append(&b"cat".to_vec());
    stream.append(&b"dog".to_vec());
    let ours = encode(&Item::List(vec![
        Item::Bytes(b"cat".to_vec()),
        Item::Bytes(b"dog".to_vec()),
    ]))
    .unwrap();
    assert_eq!(ours, stream.out().to_vec());

    // Long list: payload over 55 bytes forces the length-of-length form.
    let mut stream = RlpStream::new_list(14);
    for _ in 0..14 {
        stream.append(&b"abc".to_vec());
    }
    let items: Vec<Item> = (0..14).map(|_| Item::Bytes(b"abc".to_vec())).collect();
    assert_eq!(encode(&Item::List(items)).unwrap(), stream.out().to_vec());
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_encoder_matches_oracle_on_strings(data in proptest::collection::vec(any::<u8>(), 0..200)) {
        prop_assert_eq!(
            encode(&Item::Bytes(data.clone())).unwrap(),
            rlp::encode(&data).to_vec()
        );
    }

    #[test]
    fn prop_encoder_matches_oracle_on_uints(n in any::<u64>()) {
        prop_assert_eq!(encode(&Item::Uint(n)).unwrap(), rlp::encode(&n).to_vec());
    }

    #[test]
    fn prop_minimal_be_has_no_leading_zeros(n in 1..=u64::MAX) {
        let bytes = uint_to_minimal_be(n);
        prop_assert!(!bytes.is_empty());
        prop_assert_ne!(bytes[0], 0);
    }

    #[test]
    fn prop_deployment_pair_matches_oracle(
        bytes in proptest::array::uniform20(any::<u8>()),
        nonce in any::<u64>(),
    ) {
        let sender = Address::new(bytes);
        let ours = RlpPayloadEncoder.encode_deployment(&sender, nonce).unwrap();

        let mut stream = RlpStream::new_list(2);
        stream.append(&sender.as_bytes().to_vec());
        stream.append(&nonce);
        prop_assert_eq!(ours, stream.out().to_vec());
    }

    #[test]
    fn prop_derivation_deterministic(
        bytes in proptest::array::uniform20(any::<u8>()),
        nonce in any::<u64>(),
    ) {
        let input = format!("0x{}", Address::new(bytes).to_lowercase_hex());
        let first = derive_contract_address(&input, i128::from(nonce)).unwrap();
        let second = derive_contract_address(&input, i128::from(nonce)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_input_casing_is_irrelevant(
        bytes in proptest::array::uniform20(any::<u8>()),
        nonce in any::<u64>(),
        mask in proptest::collection::vec(any::<bool>(), 40),
    ) {
        let lower = format!("0x{}", Address::new(bytes).to_lowercase_hex());
        let recased: String = "0x".chars()
            .chain(lower[2..].chars().zip(&mask).map(|(ch, upper)| {
                if *upper { ch.to_ascii_uppercase() } else { ch }
            }))
            .collect();
        prop_assert_eq!(
            derive_contract_address(&lower, i128::from(nonce)).unwrap(),
            derive_contract_address(&recased, i128::from(nonce)).unwrap()
        );
    }

    #[test]
    fn prop_output_checksum_is_self_consistent(
        bytes in proptest::array::uniform20(any::<u8>()),
        nonce in any::<u64>(),
    ) {
        let input = format!("0x{}", Address::new(bytes).to_lowercase_hex());
        let output = derive_contract_address(&input, i128::from(nonce)).unwrap();

        // Lowercasing the output and re-rendering reproduces it exactly.
        let reparsed = Address::from_hex(&output.to_lowercase()).unwrap();
        prop_assert_eq!(checksum_encode(&reparsed, &Keccak256Hasher), output.clone());

        // And it passes verification as-is.
        prop_assert_eq!(checksum_verify(&output, &Keccak256Hasher), Ok(true));
    }

    #[test]
    fn prop_output_digits_never_change_case(
        bytes in proptest::array::uniform20(any::<u8>()),
        nonce in any::<u64>(),
    ) {
        let input = format!("0x{}", Address::new(bytes).to_lowercase_hex());
        let output = derive_contract_address(&input, i128::from(nonce)).unwrap();
        let lower = output.to_lowercase();
        for (out_ch, low_ch) in output[2..].chars().zip(lower[2..].chars()) {
            if low_ch.is_ascii_digit() {
                prop_assert_eq!(out_ch, low_ch);
            }
        }
    }

    #[test]
    fn prop_output_is_wellformed_checksummed_form(
        bytes in proptest::array::uniform20(any::<u8>()),
        nonce in any::<u64>(),
    ) {
        let input = format!("0x{}", Address::new(bytes).to_lowercase_hex());
        let output = derive_contract_address(&input, i128::from(nonce)).unwrap();
        prop_assert_eq!(output.len(), 42);
        prop_assert!(output.starts_with("0x"));
        prop_assert!(output[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
