// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::candidate::Passphrase;
use crate::error::WpapskError;
use crate::kernel::Kernel;
use crate::pmk::Pmk;
use crate::workspace::Workspace;

/// Derives one PMK with the widest kernel the CPU supports.
///
/// Allocates a workspace per call; batch work should reuse a
/// [`Workspace`] instead.
///
/// # Example
///
/// ```rust
/// let pmk = wpapsk::derive_pmk("password", b"IEEE").expect("derivation failed");
/// assert_eq!(
///     pmk.to_hex(),
///     "f42c6fc52df0ebef9ebb4b90b38a5f902e83fe1b135a70e23aed762e9710a12e"
/// );
/// ```
pub fn derive_pmk<P: Passphrase + ?Sized>(passphrase: &P, essid: &[u8]) -> Result<Pmk, WpapskError> {
    derive_pmk_with(Kernel::detect(), passphrase, essid)
}

/// Derives one PMK with `kernel`.
pub fn derive_pmk_with<P: Passphrase + ?Sized>(
    kernel: Kernel,
    passphrase: &P,
    essid: &[u8],
) -> Result<Pmk, WpapskError> {
    Workspace::new(kernel)?.derive_single(essid, passphrase)
}
