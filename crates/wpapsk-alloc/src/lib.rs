// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cache-line aligned buffers for SIMD working sets.
//!
//! `AlignedBuffer<T>` is a fixed-length heap slice that is:
//!
//! - **Aligned**: to [`ALIGN`] bytes, enough for any 128/256-bit vector load
//!   and for keeping lanes on their own cache lines
//! - **Zero-initialized**: element types implement [`Zeroable`]
//! - **Zeroized on drop**: contents are wiped before the memory is returned
//! - **Fallible**: allocation failure is an [`AllocError`], never an abort
//!
//! # Example
//!
//! ```rust
//! use wpapsk_alloc::{AlignedBuffer, AllocError, ALIGN};
//!
//! fn example() -> Result<(), AllocError> {
//!     let mut words = AlignedBuffer::<u32>::try_new_zeroed(16)?;
//!     assert_eq!(words.as_ptr() as usize % ALIGN, 0);
//!     assert!(words.iter().all(|w| *w == 0));
//!
//!     words[3] = 0xdeadbeef;
//!     words.zeroize();
//!     assert_eq!(words[3], 0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod allocator;
mod buffer;
mod error;

#[cfg(any(test, feature = "test-utils"))]
pub use allocator::AllocBehaviour;
pub use allocator::BufferAllocator;
pub use buffer::{ALIGN, AlignedBuffer, Zeroable};
pub use error::AllocError;
