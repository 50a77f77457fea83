// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities re-exported from rampart-alloc and rampart-vec

#[cfg(feature = "test-utils")]
pub mod alloc {
    pub use rampart_alloc::support::test_utils::*;
}
#[cfg(feature = "test-utils")]
pub mod vec {
    pub use rampart_vec::support::test_utils::*;
}
