// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Lane word backends and runtime selection.

use core::fmt;

use crate::feature_detector::FeatureDetector;

/// A lane word implementation of the SHA-1 compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// `u32`, one lane.
    Scalar,
    /// `[u32; 4]` in plain Rust, four lanes. Auto-vectorized where possible.
    Portable,
    /// `__m128i`, four lanes. x86_64 baseline.
    Sse2,
    /// `__m256i`, eight lanes. x86_64 with runtime AVX2 detection.
    Avx2,
    /// `uint32x4_t`, four lanes. aarch64 baseline.
    Neon,
}

impl Backend {
    /// Every backend, narrowest first.
    pub const ALL: [Backend; 5] = [
        Backend::Scalar,
        Backend::Portable,
        Backend::Sse2,
        Backend::Neon,
        Backend::Avx2,
    ];

    /// Lanes per lane word.
    pub const fn lanes(self) -> usize {
        match self {
            Backend::Scalar => 1,
            Backend::Portable | Backend::Sse2 | Backend::Neon => 4,
            Backend::Avx2 => 8,
        }
    }

    /// Lowercase backend name, as accepted by [`Backend::from_name`].
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Scalar => "scalar",
            Backend::Portable => "portable",
            Backend::Sse2 => "sse2",
            Backend::Avx2 => "avx2",
            Backend::Neon => "neon",
        }
    }

    /// Parse a backend name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|backend| backend.name().eq_ignore_ascii_case(name))
    }

    /// Whether the backend's lane word was compiled into this build.
    pub const fn is_compiled(self) -> bool {
        match self {
            Backend::Scalar | Backend::Portable => true,
            Backend::Sse2 | Backend::Avx2 => {
                cfg!(all(target_arch = "x86_64", not(feature = "portable")))
            }
            Backend::Neon => cfg!(all(target_arch = "aarch64", not(feature = "portable"))),
        }
    }

    /// Whether the backend can run on this CPU.
    pub fn is_supported(self) -> bool {
        self.is_supported_with(&FeatureDetector::new())
    }

    /// Whether the backend can run, as reported by `detector`.
    pub fn is_supported_with(self, detector: &FeatureDetector) -> bool {
        match self {
            Backend::Avx2 => self.is_compiled() && detector.has_avx2(),
            _ => self.is_compiled(),
        }
    }

    /// Widest backend supported by this CPU.
    pub fn detect() -> Self {
        Self::detect_with(&FeatureDetector::new())
    }

    /// Widest backend supported, as reported by `detector`.
    pub fn detect_with(detector: &FeatureDetector) -> Self {
        if Backend::Avx2.is_supported_with(detector) {
            Backend::Avx2
        } else if Backend::Sse2.is_supported_with(detector) {
            Backend::Sse2
        } else if Backend::Neon.is_supported_with(detector) {
            Backend::Neon
        } else {
            Backend::Portable
        }
    }

    /// Every backend this CPU supports, narrowest first.
    pub fn supported() -> impl Iterator<Item = Backend> {
        Self::ALL.into_iter().filter(|backend| backend.is_supported())
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
