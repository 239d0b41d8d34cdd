// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(any(test, feature = "test-utils"))]
use core::cell::Cell;

use crate::buffer::{AlignedBuffer, Zeroable};
use crate::error::AllocError;

/// Test behaviour for injecting allocation failures.
///
/// Only available with the `test-utils` feature. Sticky: once set it stays
/// active until changed. Injected failures report
/// [`AllocError::OutOfMemory`] with the layout that was requested.
///
/// # Example
///
/// ```rust,ignore
/// // test-utils feature required in dev-dependencies
/// use wpapsk_alloc::{AllocBehaviour, BufferAllocator};
///
/// let mut allocator = BufferAllocator::new();
/// allocator.change_behaviour(AllocBehaviour::FailAfter(2));
///
/// assert!(allocator.allocate::<u32>(8).is_ok());
/// assert!(allocator.allocate::<u32>(8).is_ok());
/// assert!(allocator.allocate::<u32>(8).is_err());
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AllocBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every `allocate()` call fails.
    FailAtAllocate,
    /// The first `n` calls succeed, every later call fails.
    FailAfter(usize),
}

/// Source of [`AlignedBuffer`]s.
///
/// Stateless in release builds. With `test-utils` it carries an
/// [`AllocBehaviour`] so callers can exercise their out-of-memory paths.
#[derive(Debug, Default, Clone)]
pub struct BufferAllocator {
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: AllocBehaviour,
    #[cfg(any(test, feature = "test-utils"))]
    allocations: Cell<usize>,
}

impl BufferAllocator {
    /// Creates an allocator backed by the global allocator.
    pub fn new() -> Self {
        Self {
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: AllocBehaviour::None,
            #[cfg(any(test, feature = "test-utils"))]
            allocations: Cell::new(0),
        }
    }

    /// Allocates `len` zeroed, aligned elements.
    pub fn allocate<T: Zeroable>(&self, len: usize) -> Result<AlignedBuffer<T>, AllocError> {
        #[cfg(any(test, feature = "test-utils"))]
        if self.should_fail() {
            let layout = AlignedBuffer::<T>::layout(len)?;
            return Err(AllocError::OutOfMemory {
                bytes: layout.size(),
                align: layout.align(),
            });
        }

        AlignedBuffer::allocate(len)
    }

    /// Change the failure injection behaviour and reset the allocation count.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: AllocBehaviour) {
        self.behaviour = behaviour;
        self.allocations.set(0);
    }

    #[cfg(any(test, feature = "test-utils"))]
    fn should_fail(&self) -> bool {
        let count = self.allocations.get();
        self.allocations.set(count + 1);

        match self.behaviour {
            AllocBehaviour::None => false,
            AllocBehaviour::FailAtAllocate => true,
            AllocBehaviour::FailAfter(n) => count >= n,
        }
    }
}
