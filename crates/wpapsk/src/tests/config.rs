// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use serial_test::serial;

use crate::{
    BACKEND_ENV, Backend, BackendChoice, INTERLEAVE_ENV, Interleave, Kernel, KernelConfig,
    WpapskError,
};

fn set_env(backend: Option<&str>, interleave: Option<&str>) {
    // SAFETY: every test touching these variables is #[serial].
    unsafe {
        match backend {
            Some(value) => std::env::set_var(BACKEND_ENV, value),
            None => std::env::remove_var(BACKEND_ENV),
        }
        match interleave {
            Some(value) => std::env::set_var(INTERLEAVE_ENV, value),
            None => std::env::remove_var(INTERLEAVE_ENV),
        }
    }
}

// =============================================================================
// BackendChoice
// =============================================================================

#[test]
fn test_backend_choice_parse() {
    assert_eq!("auto".parse::<BackendChoice>(), Ok(BackendChoice::Auto));
    assert_eq!(" AUTO ".parse::<BackendChoice>(), Ok(BackendChoice::Auto));
    assert_eq!("scalar".parse::<BackendChoice>(), Ok(BackendChoice::Fixed(Backend::Scalar)));
    assert_eq!("AVX2".parse::<BackendChoice>(), Ok(BackendChoice::Fixed(Backend::Avx2)));
    assert_eq!(
        "avx512".parse::<BackendChoice>(),
        Err(WpapskError::InvalidConfig {
            key: "backend",
            value: "avx512".into(),
        })
    );
}

#[test]
fn test_backend_choice_display_round_trips() {
    for choice in [BackendChoice::Auto, BackendChoice::Fixed(Backend::Portable)] {
        assert_eq!(choice.to_string().parse::<BackendChoice>(), Ok(choice));
    }
}

// =============================================================================
// KernelConfig::from_env()
// =============================================================================

#[test]
#[serial]
fn test_from_env_defaults() {
    set_env(None, None);

    assert_eq!(KernelConfig::from_env(), Ok(KernelConfig::default()));
}

#[test]
#[serial]
fn test_from_env_blank_values_keep_defaults() {
    set_env(Some("  "), Some(""));

    assert_eq!(KernelConfig::from_env(), Ok(KernelConfig::default()));
    set_env(None, None);
}

#[test]
#[serial]
fn test_from_env_reads_both() {
    set_env(Some("scalar"), Some("x2"));

    let config = KernelConfig::from_env().expect("valid config");

    assert_eq!(config.backend, BackendChoice::Fixed(Backend::Scalar));
    assert_eq!(config.interleave, Interleave::X2);
    assert_eq!(
        config.kernel(),
        Kernel::new(Backend::Scalar, Interleave::X2)
    );
    set_env(None, None);
}

#[test]
#[serial]
fn test_from_env_reports_variable_name() {
    set_env(Some("scalar"), Some("3"));

    assert_eq!(
        KernelConfig::from_env(),
        Err(WpapskError::InvalidConfig {
            key: INTERLEAVE_ENV,
            value: "3".into(),
        })
    );

    set_env(Some("mmx"), None);

    assert!(matches!(
        KernelConfig::from_env(),
        Err(WpapskError::InvalidConfig { key: BACKEND_ENV, .. })
    ));
    set_env(None, None);
}

// =============================================================================
// KernelConfig::kernel()
// =============================================================================

#[test]
fn test_auto_kernel_matches_detect() {
    let config = KernelConfig::default();

    assert_eq!(config.kernel(), Ok(Kernel::detect()));
}

#[test]
fn test_fixed_backend_support_is_checked() {
    for backend in Backend::ALL {
        let config = KernelConfig {
            backend: BackendChoice::Fixed(backend),
            interleave: Interleave::X1,
        };

        assert_eq!(config.kernel().is_ok(), backend.is_supported());
    }
}
