// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Candidate passphrases, slots and ESSIDs.

use core::fmt;

use wpapsk_alloc::Zeroable;
use zeroize::Zeroize;

use crate::consts::{MAX_ESSID_LEN, MAX_PASSPHRASE_LEN, SLOT_CAPACITY};
use crate::error::WpapskError;

/// Anything that can be staged as a passphrase.
///
/// `Option::None` stands for an absent entry and stages like an empty
/// string.
pub trait Passphrase {
    /// Raw passphrase bytes, before truncation.
    fn passphrase_bytes(&self) -> &[u8];
}

impl Passphrase for str {
    fn passphrase_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Passphrase for [u8] {
    fn passphrase_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> Passphrase for [u8; N] {
    fn passphrase_bytes(&self) -> &[u8] {
        self
    }
}

impl Passphrase for String {
    fn passphrase_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Passphrase for Vec<u8> {
    fn passphrase_bytes(&self) -> &[u8] {
        self
    }
}

impl<T: Passphrase + ?Sized> Passphrase for &T {
    fn passphrase_bytes(&self) -> &[u8] {
        (**self).passphrase_bytes()
    }
}

impl<T: Passphrase> Passphrase for Option<T> {
    fn passphrase_bytes(&self) -> &[u8] {
        match self {
            Some(passphrase) => passphrase.passphrase_bytes(),
            None => &[],
        }
    }
}

/// One staged passphrase: up to 63 bytes plus an explicit length.
///
/// Bytes past `len` are always zero. `len == 0` marks an empty slot.
#[derive(Clone, Zeroize)]
#[repr(C)]
pub struct CandidateSlot {
    bytes: [u8; SLOT_CAPACITY],
    len: u8,
}

// All-zero is the empty slot; no Drop impl.
unsafe impl Zeroable for CandidateSlot {}

impl CandidateSlot {
    /// Passphrase length in bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the slot holds no passphrase.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Staged passphrase bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Replaces the contents with `passphrase`, truncated to 63 bytes.
    ///
    /// Returns whether truncation happened.
    pub(crate) fn fill(&mut self, passphrase: &[u8]) -> bool {
        self.zeroize();

        let len = passphrase.len().min(MAX_PASSPHRASE_LEN);
        self.bytes[..len].copy_from_slice(&passphrase[..len]);
        self.len = len as u8;

        passphrase.len() > MAX_PASSPHRASE_LEN
    }
}

impl fmt::Debug for CandidateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateSlot")
            .field("len", &self.len)
            .field("bytes", &"REDACTED")
            .finish()
    }
}

/// Network name used as PBKDF2 salt, 0..=32 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Essid<'a>(&'a [u8]);

impl<'a> Essid<'a> {
    /// Validates the ESSID length.
    pub fn new(bytes: &'a [u8]) -> Result<Self, WpapskError> {
        if bytes.len() > MAX_ESSID_LEN {
            return Err(WpapskError::EssidTooLong {
                len: bytes.len(),
                max: MAX_ESSID_LEN,
            });
        }

        Ok(Self(bytes))
    }

    /// ESSID bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }
}

/// Set of slot indices, one bit per slot.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SlotMask(u32);

impl SlotMask {
    /// No slot.
    pub const EMPTY: SlotMask = SlotMask(0);

    /// Whether `slot` is in the set.
    pub fn contains(self, slot: usize) -> bool {
        slot < 32 && self.0 & (1 << slot) != 0
    }

    pub(crate) fn insert(&mut self, slot: usize) {
        debug_assert!(slot < 32);
        self.0 |= 1 << slot;
    }

    /// Number of slots in the set.
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether any slot in `start..start + len` is in the set.
    pub fn any_in(self, start: usize, len: usize) -> bool {
        (start..start + len).any(|slot| self.contains(slot))
    }

    /// Slot indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..32).filter(move |slot| self.contains(*slot))
    }

    /// Raw bit representation, bit `i` for slot `i`.
    pub fn bits(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SlotMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
