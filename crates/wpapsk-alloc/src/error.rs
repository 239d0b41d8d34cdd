// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for wpapsk-alloc.

use thiserror::Error;

/// Error type for aligned buffer allocation.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// Element type has size zero.
    #[error("Zero-sized element types cannot back an aligned buffer")]
    ZeroSizedElement,

    /// Requested length does not fit in a valid layout.
    #[error("Buffer layout overflow: size would exceed isize::MAX")]
    LayoutOverflow,

    /// The global allocator returned null.
    #[error("Out of memory: failed to allocate {bytes} bytes aligned to {align}")]
    OutOfMemory {
        /// Requested size in bytes.
        bytes: usize,
        /// Requested alignment in bytes.
        align: usize,
    },
}
