// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod cancel;
mod config;
mod crypt64;
mod lane_buffer;
mod registry;
mod workspace;
