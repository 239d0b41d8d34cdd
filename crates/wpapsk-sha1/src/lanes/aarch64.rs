// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! NEON lane word for aarch64.

#![allow(unused_unsafe)]

use core::arch::aarch64::{
    uint32x4_t, vaddq_u32, vandq_u32, vdupq_n_s32, vdupq_n_u32, veorq_u32, vld1q_u32,
    vorrq_u32, vshlq_u32, vst1q_u32,
};

use super::LaneWord;
use crate::backend::Backend;

/// Four lanes in a NEON register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Neon(uint32x4_t);

impl LaneWord for Neon {
    const LANES: usize = 4;
    const BACKEND: Backend = Backend::Neon;

    #[inline(always)]
    unsafe fn splat(value: u32) -> Self {
        Self(unsafe { vdupq_n_u32(value) })
    }

    #[inline(always)]
    unsafe fn load(src: &[u32]) -> Self {
        let src = &src[..4];
        Self(unsafe { vld1q_u32(src.as_ptr()) })
    }

    #[inline(always)]
    fn store(self, dst: &mut [u32]) {
        let dst = &mut dst[..4];
        unsafe { vst1q_u32(dst.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn add_const(self, k: u32) -> Self {
        Self(unsafe { vaddq_u32(self.0, vdupq_n_u32(k)) })
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { veorq_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe { vandq_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(unsafe { vorrq_u32(self.0, rhs.0) })
    }

    // A negative shift count in `vshlq_u32` shifts right.
    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        unsafe {
            let left = vshlq_u32(self.0, vdupq_n_s32(n as i32));
            let right = vshlq_u32(self.0, vdupq_n_s32(n as i32 - 32));
            Self(vorrq_u32(left, right))
        }
    }
}
