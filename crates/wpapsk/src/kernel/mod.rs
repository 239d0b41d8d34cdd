// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Vectorized PBKDF2-HMAC-SHA1 rounds.
//!
//! A [`Kernel`] is a backend plus an interleave factor, fixed for the life
//! of the workspaces built from it. It drives iterations 2..=4096 of one
//! PBKDF2 block for a whole lane group: every round is two SHA-1
//! compressions (inner and outer pad) on a single 84-byte message block.

mod rounds;

use core::fmt;
use core::str::FromStr;

use wpapsk_sha1::{Backend, FeatureDetector};

use crate::consts::MAX_BATCH;
use crate::error::WpapskError;

pub(crate) use rounds::GroupWords;

/// Lane words driven together per round.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interleave {
    /// One lane word.
    #[default]
    X1,
    /// Two independent lane words per step.
    X2,
}

impl Interleave {
    /// Interleave factor.
    pub const fn factor(self) -> usize {
        match self {
            Interleave::X1 => 1,
            Interleave::X2 => 2,
        }
    }
}

impl FromStr for Interleave {
    type Err = WpapskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "x1" => Ok(Interleave::X1),
            "2" | "x2" => Ok(Interleave::X2),
            _ => Err(WpapskError::InvalidConfig {
                key: "interleave",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Interleave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.factor())
    }
}

/// Backend and interleave selection for PMK derivation.
///
/// Only constructible for backends the CPU supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kernel {
    backend: Backend,
    interleave: Interleave,
}

impl Kernel {
    /// Widest supported backend, no interleave.
    pub fn detect() -> Self {
        Self {
            backend: Backend::detect(),
            interleave: Interleave::X1,
        }
    }

    /// Widest backend reported by `detector` that this CPU can also run.
    ///
    /// A detector may hide features but never adds them: a backend it
    /// reports beyond the platform's support falls back to [`Kernel::detect`].
    pub fn detect_with(detector: &FeatureDetector) -> Self {
        let backend = Backend::detect_with(detector);
        if !backend.is_supported() {
            return Self::detect();
        }

        Self {
            backend,
            interleave: Interleave::X1,
        }
    }

    /// One lane, no SIMD.
    pub fn scalar() -> Self {
        Self {
            backend: Backend::Scalar,
            interleave: Interleave::X1,
        }
    }

    /// Explicit selection.
    pub fn new(backend: Backend, interleave: Interleave) -> Result<Self, WpapskError> {
        if !backend.is_supported() {
            return Err(WpapskError::BackendUnavailable { backend });
        }

        Ok(Self {
            backend,
            interleave,
        })
    }

    /// Every kernel this CPU can run.
    pub fn supported() -> impl Iterator<Item = Kernel> {
        Backend::supported().flat_map(|backend| {
            [Interleave::X1, Interleave::X2].map(|interleave| Kernel {
                backend,
                interleave,
            })
        })
    }

    /// Selected backend.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Selected interleave.
    pub fn interleave(&self) -> Interleave {
        self.interleave
    }

    /// Slots processed per round.
    pub fn lane_group(&self) -> usize {
        self.backend.lanes() * self.interleave.factor()
    }

    /// Slots allocated per workspace: a full batch rounded up to whole lane
    /// groups.
    pub fn capacity(&self) -> usize {
        MAX_BATCH.div_ceil(self.lane_group()) * self.lane_group()
    }

    /// Runs iterations 2..=4096 for one lane group.
    pub(crate) fn run_rounds(&self, words: GroupWords<'_>) {
        debug_assert_eq!(words.accum.len(), 5 * self.lane_group());
        rounds::dispatch(self.backend, self.interleave, words);
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} lanes)",
            self.backend,
            self.interleave,
            self.lane_group()
        )
    }
}
