// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{Layout, alloc_zeroed, dealloc};
use core::fmt;
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;

use zeroize::Zeroize;

use crate::allocator::BufferAllocator;
use crate::error::AllocError;

/// Alignment of every buffer, in bytes.
pub const ALIGN: usize = 64;

/// Types whose all-zero bit pattern is a valid value.
///
/// # Safety
/// Implementors must be inhabited by the all-zero byte pattern and must not
/// implement `Drop` (buffers are freed without running element destructors).
pub unsafe trait Zeroable: Sized {}

unsafe impl Zeroable for u8 {}
unsafe impl Zeroable for u16 {}
unsafe impl Zeroable for u32 {}
unsafe impl Zeroable for u64 {}
unsafe impl Zeroable for usize {}
unsafe impl<T: Zeroable, const N: usize> Zeroable for [T; N] {}

/// Fixed-length, [`ALIGN`]-aligned, zero-initialized heap slice.
///
/// Contents are zeroized before the memory is deallocated.
pub struct AlignedBuffer<T: Zeroable> {
    ptr: NonNull<T>,
    len: usize,
}

unsafe impl<T: Zeroable + Send> Send for AlignedBuffer<T> {}
unsafe impl<T: Zeroable + Sync> Sync for AlignedBuffer<T> {}

impl<T: Zeroable> AlignedBuffer<T> {
    /// Allocates `len` zeroed elements with the default allocator.
    pub fn try_new_zeroed(len: usize) -> Result<Self, AllocError> {
        BufferAllocator::new().allocate(len)
    }

    pub(crate) fn layout(len: usize) -> Result<Layout, AllocError> {
        if size_of::<T>() == 0 {
            return Err(AllocError::ZeroSizedElement);
        }

        Layout::array::<T>(len)
            .and_then(|layout| layout.align_to(ALIGN))
            .map_err(|_| AllocError::LayoutOverflow)
    }

    pub(crate) fn allocate(len: usize) -> Result<Self, AllocError> {
        let layout = Self::layout(len)?;

        if len == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len,
            });
        }

        // Layout has non-zero size: len > 0 and size_of::<T>() > 0.
        let raw = unsafe { alloc_zeroed(layout) };

        let ptr = NonNull::new(raw.cast::<T>()).ok_or(AllocError::OutOfMemory {
            bytes: layout.size(),
            align: layout.align(),
        })?;

        Ok(Self { ptr, len })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the contents in bytes.
    pub fn byte_len(&self) -> usize {
        self.len * size_of::<T>()
    }

    /// Shared view of the contents.
    pub fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Mutable view of the contents.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Raw pointer to the first element.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Overwrites every byte with zero using volatile writes.
    pub fn zeroize(&mut self) {
        if self.len == 0 {
            return;
        }

        // Zero bytes are a valid T (Zeroable).
        let bytes =
            unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr().cast::<u8>(), self.byte_len()) };
        bytes.zeroize();
    }

    /// Whether every byte is zero.
    pub fn is_zeroized(&self) -> bool {
        if self.len == 0 {
            return true;
        }

        let bytes =
            unsafe { core::slice::from_raw_parts(self.ptr.as_ptr().cast::<u8>(), self.byte_len()) };
        bytes.iter().all(|b| *b == 0)
    }
}

impl<T: Zeroable> Deref for AlignedBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Zeroable> DerefMut for AlignedBuffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Zeroable> Drop for AlignedBuffer<T> {
    fn drop(&mut self) {
        self.zeroize();

        if self.len == 0 {
            return;
        }

        // Same layout as allocation: it succeeded for this len.
        if let Ok(layout) = Self::layout(self.len) {
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

impl<T: Zeroable> fmt::Debug for AlignedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .field("align", &ALIGN)
            .field("contents", &"REDACTED")
            .finish()
    }
}
