// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for rampart-alloc.

use thiserror::Error;

/// Errors returned when an allocator cannot satisfy a raw-memory request.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The byte size of the requested block does not fit in `isize::MAX`.
    #[error("capacity overflow: requested block size exceeds isize::MAX bytes")]
    CapacityOverflow,

    /// The underlying memory source refused the request.
    #[error("out of memory: failed to allocate {bytes} bytes")]
    OutOfMemory {
        /// Number of bytes requested.
        bytes: usize,
    },

    /// Failure injected by a [`BreakerAllocator`](crate::BreakerAllocator).
    #[cfg(any(test, feature = "test-utils"))]
    #[error("intentional allocation failure")]
    Injected,
}
