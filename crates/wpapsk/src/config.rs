// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Kernel configuration from strings and the process environment.

use core::fmt;
use core::str::FromStr;

use wpapsk_sha1::Backend;

use crate::error::WpapskError;
use crate::kernel::{Interleave, Kernel};

/// Environment variable naming the backend (`auto`, `scalar`, `portable`,
/// `sse2`, `avx2`, `neon`).
pub const BACKEND_ENV: &str = "WPAPSK_BACKEND";

/// Environment variable naming the interleave factor (`1` or `2`).
pub const INTERLEAVE_ENV: &str = "WPAPSK_INTERLEAVE";

/// Backend request: detected at runtime or pinned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BackendChoice {
    /// Widest backend the CPU supports.
    #[default]
    Auto,
    /// A specific backend; fails at kernel construction if unsupported.
    Fixed(Backend),
}

impl FromStr for BackendChoice {
    type Err = WpapskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("auto") {
            return Ok(BackendChoice::Auto);
        }

        Backend::from_name(name)
            .map(BackendChoice::Fixed)
            .ok_or_else(|| WpapskError::InvalidConfig {
                key: "backend",
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for BackendChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendChoice::Auto => f.write_str("auto"),
            BackendChoice::Fixed(backend) => fmt::Display::fmt(backend, f),
        }
    }
}

/// Kernel selection settings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KernelConfig {
    /// Backend request.
    pub backend: BackendChoice,
    /// Interleave factor.
    pub interleave: Interleave,
}

impl KernelConfig {
    /// Reads [`BACKEND_ENV`] and [`INTERLEAVE_ENV`]. Unset or empty
    /// variables keep their defaults.
    pub fn from_env() -> Result<Self, WpapskError> {
        let mut config = Self::default();

        if let Some(value) = env_value(BACKEND_ENV) {
            config.backend = value.parse().map_err(|_| WpapskError::InvalidConfig {
                key: BACKEND_ENV,
                value,
            })?;
        }

        if let Some(value) = env_value(INTERLEAVE_ENV) {
            config.interleave = value.parse().map_err(|_| WpapskError::InvalidConfig {
                key: INTERLEAVE_ENV,
                value,
            })?;
        }

        Ok(config)
    }

    /// Builds the kernel, probing the CPU for [`BackendChoice::Auto`].
    pub fn kernel(&self) -> Result<Kernel, WpapskError> {
        let backend = match self.backend {
            BackendChoice::Auto => Backend::detect(),
            BackendChoice::Fixed(backend) => backend,
        };

        Kernel::new(backend, self.interleave)
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
