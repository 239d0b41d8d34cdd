// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Longest WPA passphrase in bytes. Longer input is truncated.
pub const MAX_PASSPHRASE_LEN: usize = 63;

/// Longest ESSID in bytes.
pub const MAX_ESSID_LEN: usize = 32;

/// Candidates staged per batch.
pub const MAX_BATCH: usize = 8;

/// PBKDF2 iteration count fixed by IEEE 802.11i.
pub const ITERATIONS: u32 = 4096;

/// PMK size in bytes.
pub const PMK_LEN: usize = 32;

/// Storage reserved per candidate slot.
pub(crate) const SLOT_CAPACITY: usize = 64;

/// Bit length of an HMAC round message: 64-byte pad block plus 20-byte digest.
pub(crate) const ROUND_MESSAGE_BITS: u32 = (64 + 20) * 8;
