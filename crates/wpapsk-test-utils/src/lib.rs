// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for wpapsk crates.
//!
//! Reference implementations backed by the RustCrypto `sha1`, `hmac` and
//! `pbkdf2` crates, hex helpers, and proptest strategies for WPA inputs.

use hmac::{Hmac, Mac};
use proptest::prelude::*;
use sha1::{Digest, Sha1};

/// WPA PBKDF2 iteration count.
pub const WPA_ITERATIONS: u32 = 4096;

/// IEEE 802.11i H.4.1: passphrase "password", SSID "IEEE".
pub const IEEE_PASSWORD_PMK: &str =
    "f42c6fc52df0ebef9ebb4b90b38a5f902e83fe1b135a70e23aed762e9710a12e";

/// IEEE 802.11i H.4.2: passphrase "ThisIsAPassword", SSID "ThisIsASSID".
pub const THIS_IS_A_PASSWORD_PMK: &str =
    "0dc0d6eb90555ed6419756b9a15ec3e3209b63df707dd508d14581f8982721af";

/// SHA-1 of `data`.
pub fn reference_sha1(data: &[u8]) -> [u8; 20] {
    Sha1::digest(data).into()
}

/// HMAC-SHA1 of `message` under `key`.
pub fn reference_hmac_sha1(key: &[u8], message: &[u8]) -> [u8; 20] {
    let mut mac = <Hmac<Sha1> as Mac>::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// WPA PMK: PBKDF2-HMAC-SHA1(passphrase, essid, 4096, 32).
pub fn reference_pmk(passphrase: &[u8], essid: &[u8]) -> [u8; 32] {
    let mut pmk = [0u8; 32];
    pbkdf2::pbkdf2_hmac::<Sha1>(passphrase, essid, WPA_ITERATIONS, &mut pmk);
    pmk
}

/// Lowercase hex encoding.
pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decodes lowercase or uppercase hex. Panics on malformed input.
pub fn unhex(s: &str) -> Vec<u8> {
    assert!(s.len() % 2 == 0, "odd hex length");
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Passphrases of 0..=63 bytes, biased toward printable ASCII.
pub fn passphrase() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        3 => proptest::collection::vec(0x20u8..0x7f, 0..=63),
        1 => proptest::collection::vec(any::<u8>(), 0..=63),
    ]
}

/// Passphrases that may exceed the 63-byte WPA limit.
pub fn long_passphrase() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0x20u8..0x7f, 0..=96)
}

/// ESSIDs of 0..=32 arbitrary bytes.
pub fn essid() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..=32)
}

/// Batches of 1..=8 passphrases.
pub fn passphrase_batch() -> impl Strategy<Value = Vec<Vec<u8>>> {
    proptest::collection::vec(passphrase(), 1..=8)
}
