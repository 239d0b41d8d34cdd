// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::WpapskError;
use crate::crypt64::{ATOI64, INVALID, ITOA64, decode, encode, encoded_len};

// =============================================================================
// Tables
// =============================================================================

#[test]
fn test_tables_are_inverse() {
    for (index, c) in ITOA64.iter().enumerate() {
        assert_eq!(ATOI64[*c as usize] as usize, index);
    }

    let valid = ATOI64.iter().filter(|v| **v != INVALID).count();
    assert_eq!(valid, 64);
    assert_eq!(ATOI64[b'=' as usize], INVALID);
    assert_eq!(ATOI64[b'+' as usize], INVALID);
}

// =============================================================================
// encode()
// =============================================================================

#[test]
fn test_encode_known_groups() {
    assert_eq!(encode(&[]), "");
    assert_eq!(encode(&[0x00]), "..");
    assert_eq!(encode(&[0xff]), "z1");
    assert_eq!(encode(&[0x01, 0x00, 0x00]), "/...");
    assert_eq!(encode(&[0xff, 0xff, 0xff]), "zzzz");
}

#[test]
fn test_encoded_len() {
    assert_eq!(encoded_len(0), 0);
    assert_eq!(encoded_len(1), 2);
    assert_eq!(encoded_len(2), 3);
    assert_eq!(encoded_len(3), 4);
    assert_eq!(encoded_len(32), 43);
    assert_eq!(encode(&[7u8; 32]).len(), 43);
}

// =============================================================================
// decode()
// =============================================================================

#[test]
fn test_decode_known_groups() {
    assert_eq!(decode("").expect("decode"), Vec::<u8>::new());
    assert_eq!(decode("z1").expect("decode"), vec![0xff]);
    assert_eq!(decode("/...").expect("decode"), vec![0x01, 0x00, 0x00]);
}

#[test]
fn test_decode_rejects_bad_length() {
    assert_eq!(
        decode("zzzzz"),
        Err(WpapskError::InvalidCrypt64Length { len: 5 })
    );
}

#[test]
fn test_decode_rejects_bad_char() {
    assert_eq!(
        decode("ab!d"),
        Err(WpapskError::InvalidCrypt64Char { position: 2 })
    );
    assert_eq!(
        decode("abcd=="),
        Err(WpapskError::InvalidCrypt64Char { position: 4 })
    );
}

#[test]
fn test_decode_rejects_non_canonical_tail() {
    // "z1" is 0xff; "zz" sets bits past the single encoded byte.
    assert_eq!(
        decode("zz"),
        Err(WpapskError::InvalidCrypt64Char { position: 1 })
    );
    // Two-byte tail: the third character holds two spare bits.
    assert_eq!(decode("zzD").expect("decode"), vec![0xff, 0xff]);
    assert_eq!(
        decode("zzE"),
        Err(WpapskError::InvalidCrypt64Char { position: 2 })
    );
    assert_eq!(
        decode("..../2"),
        Err(WpapskError::InvalidCrypt64Char { position: 5 })
    );
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(bytes in proptest::collection::vec(any::<u8>(), 0..96)) {
        let text = encode(&bytes);

        prop_assert_eq!(text.len(), encoded_len(bytes.len()));
        prop_assert!(text.bytes().all(|c| ITOA64.contains(&c)));
        prop_assert_eq!(decode(&text).expect("decode"), bytes);
    }
}
