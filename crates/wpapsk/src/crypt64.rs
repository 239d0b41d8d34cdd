// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Crypt-64 encoding: the `./0-9A-Za-z` alphabet of crypt(3) hashes.
//!
//! Bytes are taken three at a time as a little-endian 24-bit value and
//! emitted as four characters, least significant six bits first. A trailing
//! group of one or two bytes emits two or three characters.

use crate::error::WpapskError;

/// Index to character.
pub const ITOA64: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Marks bytes outside the alphabet in [`ATOI64`].
pub const INVALID: u8 = 0x7f;

/// Character to index, [`INVALID`] for bytes outside the alphabet.
pub const ATOI64: [u8; 256] = build_atoi64();

const fn build_atoi64() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ITOA64.len() {
        table[ITOA64[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Encoded length of `len` bytes.
pub const fn encoded_len(len: usize) -> usize {
    let tail = len % 3;
    (len / 3) * 4 + if tail == 0 { 0 } else { tail + 1 }
}

/// Encodes `bytes` with the crypt-64 alphabet.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));

    for chunk in bytes.chunks(3) {
        let value = chunk
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, b)| acc | ((*b as u32) << (8 * i)));

        for i in 0..=chunk.len() {
            out.push(ITOA64[((value >> (6 * i)) & 0x3f) as usize] as char);
        }
    }

    out
}

/// Decodes crypt-64 text produced by [`encode`].
///
/// Only canonical text is accepted: a trailing group of two or three
/// characters must leave its unused high bits clear.
pub fn decode(text: &str) -> Result<Vec<u8>, WpapskError> {
    let chars = text.as_bytes();
    if chars.len() % 4 == 1 {
        return Err(WpapskError::InvalidCrypt64Length { len: chars.len() });
    }

    let mut out = Vec::with_capacity(chars.len() / 4 * 3 + 2);

    for (group, chunk) in chars.chunks(4).enumerate() {
        let mut value = 0u32;
        for (i, c) in chunk.iter().enumerate() {
            let index = ATOI64[*c as usize];
            if index == INVALID {
                return Err(WpapskError::InvalidCrypt64Char {
                    position: group * 4 + i,
                });
            }
            value |= (index as u32) << (6 * i);
        }

        // A short tail carries fewer bytes than its characters hold; the
        // spare high bits must be zero.
        let bytes = chunk.len() - 1;
        if value >> (8 * bytes) != 0 {
            return Err(WpapskError::InvalidCrypt64Char {
                position: group * 4 + bytes,
            });
        }

        for i in 0..bytes {
            out.push((value >> (8 * i)) as u8);
        }
    }

    Ok(out)
}
