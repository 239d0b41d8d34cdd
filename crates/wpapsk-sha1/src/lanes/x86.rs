// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SSE2 and AVX2 lane words for x86_64.
//!
//! Rotates use the shift-by-register forms so one method serves every
//! rotate amount. With `#[inline(always)]` and a constant amount LLVM folds
//! them into the immediate forms.

#![allow(unused_unsafe)]

use core::arch::x86_64::{
    __m128i, __m256i, _mm_add_epi32, _mm_and_si128, _mm_cvtsi32_si128, _mm_loadu_si128,
    _mm_or_si128, _mm_set1_epi32, _mm_sll_epi32, _mm_srl_epi32, _mm_storeu_si128,
    _mm_xor_si128, _mm256_add_epi32, _mm256_and_si256, _mm256_loadu_si256, _mm256_or_si256,
    _mm256_set1_epi32, _mm256_sll_epi32, _mm256_srl_epi32, _mm256_storeu_si256,
    _mm256_xor_si256,
};

use super::LaneWord;
use crate::backend::Backend;

/// Four lanes in an SSE2 register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Sse2(__m128i);

impl LaneWord for Sse2 {
    const LANES: usize = 4;
    const BACKEND: Backend = Backend::Sse2;

    #[inline(always)]
    unsafe fn splat(value: u32) -> Self {
        Self(unsafe { _mm_set1_epi32(value as i32) })
    }

    #[inline(always)]
    unsafe fn load(src: &[u32]) -> Self {
        let src = &src[..4];
        Self(unsafe { _mm_loadu_si128(src.as_ptr().cast::<__m128i>()) })
    }

    #[inline(always)]
    fn store(self, dst: &mut [u32]) {
        let dst = &mut dst[..4];
        unsafe { _mm_storeu_si128(dst.as_mut_ptr().cast::<__m128i>(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn add_const(self, k: u32) -> Self {
        Self(unsafe { _mm_add_epi32(self.0, _mm_set1_epi32(k as i32)) })
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe { _mm_and_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        unsafe {
            let left = _mm_cvtsi32_si128(n as i32);
            let right = _mm_cvtsi32_si128((32 - n) as i32);
            Self(_mm_or_si128(
                _mm_sll_epi32(self.0, left),
                _mm_srl_epi32(self.0, right),
            ))
        }
    }
}

/// Eight lanes in an AVX2 register.
///
/// Only constructible through [`LaneWord`]'s unsafe constructors, after
/// [`Backend::Avx2`] was reported as supported.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Avx2(__m256i);

impl LaneWord for Avx2 {
    const LANES: usize = 8;
    const BACKEND: Backend = Backend::Avx2;

    #[inline(always)]
    unsafe fn splat(value: u32) -> Self {
        Self(unsafe { _mm256_set1_epi32(value as i32) })
    }

    #[inline(always)]
    unsafe fn load(src: &[u32]) -> Self {
        let src = &src[..8];
        Self(unsafe { _mm256_loadu_si256(src.as_ptr().cast::<__m256i>()) })
    }

    #[inline(always)]
    fn store(self, dst: &mut [u32]) {
        let dst = &mut dst[..8];
        unsafe { _mm256_storeu_si256(dst.as_mut_ptr().cast::<__m256i>(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn add_const(self, k: u32) -> Self {
        Self(unsafe { _mm256_add_epi32(self.0, _mm256_set1_epi32(k as i32)) })
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_xor_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_and_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_or_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        unsafe {
            let left = _mm_cvtsi32_si128(n as i32);
            let right = _mm_cvtsi32_si128((32 - n) as i32);
            Self(_mm256_or_si256(
                _mm256_sll_epi32(self.0, left),
                _mm256_srl_epi32(self.0, right),
            ))
        }
    }
}
