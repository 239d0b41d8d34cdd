// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Batched WPA/WPA2 PMK derivation.
//!
//! PMK = PBKDF2-HMAC-SHA1(passphrase, ESSID, 4096 iterations, 32 bytes),
//! computed for up to eight candidate passphrases at once with SIMD lanes.
//!
//! - [`Workspace`]: one worker's buffers, allocated once and reused per batch
//! - [`Workspace::stage`]: loads a batch, derives it, results via
//!   [`Workspace::pmk`]
//! - [`WorkspaceRegistry`]: workspaces indexed by worker, acquired lazily
//! - [`Kernel`]: runtime-selected SIMD backend and interleave
//!
//! # Example
//!
//! ```rust
//! use wpapsk::{Kernel, Workspace, WpapskError};
//!
//! fn example() -> Result<(), WpapskError> {
//!     let mut workspace = Workspace::new(Kernel::detect())?;
//!     let batch = workspace.stage(b"IEEE", &["password", "", "hunter22"])?;
//!
//!     assert_eq!(batch.active().count(), 2);
//!     assert!(workspace.pmk(0).is_some());
//!     assert!(workspace.pmk(1).is_none());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! References:
//! - IEEE 802.11i-2004, Annex H.4 (PSK to PMK mapping)
//! - RFC 8018 Section 5.2 (PBKDF2)
//! - RFC 2104 (HMAC)

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod cancel;
mod candidate;
mod config;
mod consts;
mod derive;
mod error;
mod hmac;
mod kernel;
mod lane_buffer;
mod pmk;
mod registry;
mod stager;
mod workspace;

pub mod crypt64;
pub mod endian;

#[cfg(any(test, feature = "test-utils"))]
pub use cancel::CancelBehaviour;
pub use cancel::CancelToken;
pub use candidate::{CandidateSlot, Essid, Passphrase, SlotMask};
pub use config::{BACKEND_ENV, BackendChoice, INTERLEAVE_ENV, KernelConfig};
pub use consts::{ITERATIONS, MAX_BATCH, MAX_ESSID_LEN, MAX_PASSPHRASE_LEN, PMK_LEN};
pub use derive::{derive_pmk, derive_pmk_with};
pub use error::WpapskError;
pub use kernel::{Interleave, Kernel};
pub use pmk::Pmk;
pub use registry::{WorkerId, WorkerSlot, WorkspaceRegistry};
pub use stager::StagedBatch;
pub use workspace::{BatchState, Workspace};
pub use wpapsk_sha1::Backend;
