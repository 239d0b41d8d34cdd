// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::LaneWord;
use crate::backend::Backend;

impl LaneWord for u32 {
    const LANES: usize = 1;
    const BACKEND: Backend = Backend::Scalar;

    #[inline(always)]
    unsafe fn splat(value: u32) -> Self {
        value
    }

    #[inline(always)]
    unsafe fn load(src: &[u32]) -> Self {
        src[0]
    }

    #[inline(always)]
    fn store(self, dst: &mut [u32]) {
        dst[0] = self;
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline(always)]
    fn add_const(self, k: u32) -> Self {
        self.wrapping_add(k)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        self.rotate_left(n)
    }
}

/// Four lanes in plain Rust.
///
/// Available on every target; LLVM usually turns it into whatever vector
/// unit the target has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct Portable(pub [u32; 4]);

impl LaneWord for Portable {
    const LANES: usize = 4;
    const BACKEND: Backend = Backend::Portable;

    #[inline(always)]
    unsafe fn splat(value: u32) -> Self {
        Self([value; 4])
    }

    #[inline(always)]
    unsafe fn load(src: &[u32]) -> Self {
        Self([src[0], src[1], src[2], src[3]])
    }

    #[inline(always)]
    fn store(self, dst: &mut [u32]) {
        dst[..4].copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i].wrapping_add(rhs.0[i])))
    }

    #[inline(always)]
    fn add_const(self, k: u32) -> Self {
        Self(self.0.map(|x| x.wrapping_add(k)))
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] ^ rhs.0[i]))
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] & rhs.0[i]))
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] | rhs.0[i]))
    }

    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        Self(self.0.map(|x| x.rotate_left(n)))
    }
}
