// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use subtle::ConstantTimeEq;
use wpapsk_alloc::Zeroable;
use zeroize::Zeroize;

use crate::consts::PMK_LEN;
use crate::crypt64;
use crate::endian::be_words_to_bytes;
use crate::error::WpapskError;

/// Pairwise Master Key: 32 bytes, `T(1)[0..20] || T(2)[0..12]`.
///
/// Not `Copy`. Comparison is constant-time, `Debug` is redacted, and
/// renderings are explicit calls. Callers holding a `Pmk` outside a
/// workspace should zeroize it when done.
#[derive(Clone, Default, Zeroize)]
#[repr(transparent)]
pub struct Pmk([u8; PMK_LEN]);

// All-zero is a valid (unset) PMK; no Drop impl.
unsafe impl Zeroable for Pmk {}

impl Pmk {
    /// Wraps raw PMK bytes.
    pub fn from_bytes(bytes: [u8; PMK_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds the PMK from eight host-order SHA-1 words: five from `T(1)`
    /// followed by three from `T(2)`.
    pub fn from_be_words(words: &[u32; 8]) -> Self {
        let mut pmk = Self::default();
        be_words_to_bytes(words, &mut pmk.0);
        pmk
    }

    /// PMK bytes.
    pub fn as_bytes(&self) -> &[u8; PMK_LEN] {
        &self.0
    }

    /// Whether every byte is zero (the value of a slot never derived).
    pub fn is_zero(&self) -> bool {
        bool::from(self.0[..].ct_eq(&[0u8; PMK_LEN][..]))
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut out = String::with_capacity(PMK_LEN * 2);
        for b in self.0 {
            out.push(DIGITS[(b >> 4) as usize] as char);
            out.push(DIGITS[(b & 0x0f) as usize] as char);
        }
        out
    }

    /// Crypt-64 rendering, 43 characters.
    pub fn to_crypt64(&self) -> String {
        crypt64::encode(&self.0)
    }

    /// Parses a crypt-64 rendering produced by [`Pmk::to_crypt64`].
    pub fn from_crypt64(text: &str) -> Result<Self, WpapskError> {
        let mut decoded = crypt64::decode(text)?;

        let result = <[u8; PMK_LEN]>::try_from(decoded.as_slice())
            .map(Self)
            .map_err(|_| WpapskError::InvalidPmkLength { len: decoded.len() });

        decoded.zeroize();
        result
    }
}

impl AsRef<[u8]> for Pmk {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for Pmk {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Pmk {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Pmk {}

impl fmt::Debug for Pmk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pmk(REDACTED)")
    }
}
