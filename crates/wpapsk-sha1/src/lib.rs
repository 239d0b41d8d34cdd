// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 compression for PBKDF2 hot loops.
//!
//! Implementation per FIPS 180-4 Section 6.1. Two surfaces:
//!
//! - [`compress`] and [`Sha1State`]: scalar, one message at a time. The
//!   streaming state can resume from an arbitrary chaining value, which is
//!   what HMAC with precomputed pads needs.
//! - [`compress_lanes`]: the same compression over a [`LaneWord`], where each
//!   lane of the word carries an independent message. One instruction
//!   sequence advances every lane.
//!
//! [`Backend`] names the available lane words and is selected at runtime
//! through [`FeatureDetector`].
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard
//!   <https://csrc.nist.gov/publications/detail/fips/180/4/final>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod backend;
mod compress;
mod consts;
mod feature_detector;
mod lanes;
mod state;

pub use backend::Backend;
pub use compress::compress;
pub use consts::{BLOCK_LEN, BLOCK_WORDS, DIGEST_LEN, H0, STATE_WORDS};
#[cfg(any(test, feature = "test-utils"))]
pub use feature_detector::FeatureDetectorBehaviour;
pub use feature_detector::FeatureDetector;
pub use lanes::{Interleaved, LaneWord, Portable, compress_lanes};
#[cfg(all(target_arch = "aarch64", not(feature = "portable")))]
pub use lanes::Neon;
#[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
pub use lanes::{Avx2, Sse2};
pub use state::{Sha1State, sha1};
