// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test override for runtime CPU probing.
///
/// Sticky: stays active until changed. Forcing AVX2 on a CPU without it is
/// only safe for code paths that inspect the detected [`Backend`](crate::Backend)
/// without running it.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FeatureDetectorBehaviour {
    /// Report what the CPU actually supports.
    #[default]
    None,
    /// Report AVX2 as present.
    ForceAvx2True,
    /// Report AVX2 as absent.
    ForceAvx2False,
}

/// Runtime CPU capability detection.
#[derive(Debug, Default, Clone)]
pub struct FeatureDetector {
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: FeatureDetectorBehaviour,
}

impl FeatureDetector {
    /// Create a detector reporting the platform's capabilities.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: FeatureDetectorBehaviour::None,
        }
    }

    /// Platform-level AVX2 detection (no test override)
    #[inline(always)]
    pub fn platform_has_avx2(&self) -> bool {
        #[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
        {
            cpufeatures::new!(avx2_detection, "avx2");
            avx2_detection::get()
        }

        #[cfg(not(all(target_arch = "x86_64", not(feature = "portable"))))]
        false
    }

    /// AVX2 availability, honouring the test override.
    #[inline(always)]
    pub fn has_avx2(&self) -> bool {
        #[cfg(any(test, feature = "test-utils"))]
        {
            match self.behaviour {
                FeatureDetectorBehaviour::None => self.platform_has_avx2(),
                FeatureDetectorBehaviour::ForceAvx2True => true,
                FeatureDetectorBehaviour::ForceAvx2False => false,
            }
        }

        #[cfg(not(any(test, feature = "test-utils")))]
        self.platform_has_avx2()
    }

    /// Change the detection behaviour.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: FeatureDetectorBehaviour) {
        self.behaviour = behaviour;
    }
}
