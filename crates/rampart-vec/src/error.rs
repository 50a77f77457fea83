// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for rampart-vec.

use core::convert::Infallible;

use rampart_alloc::AllocError;
use thiserror::Error;

/// Errors returned by [`Vector`](crate::Vector) operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum VectorError {
    /// Requested element count exceeds what the allocator can ever provide.
    ///
    /// Raised before any allocation is attempted.
    #[error("length error: requested {requested} elements, max_size is {max}")]
    Length {
        /// Element count that was asked for.
        requested: usize,
        /// The allocator's `max_size` for the element type.
        max: usize,
    },

    /// Position is not a valid element (or insertion point) of the vector,
    /// or an erase range is reversed or runs past the end.
    #[error("out of range: index {index} with length {len}")]
    OutOfRange {
        /// Offending position. For ranges, the larger bound.
        index: usize,
        /// Length of the vector at the time of the call.
        len: usize,
    },

    /// The allocator could not satisfy a request.
    #[error("allocation failed: {0}")]
    Alloc(#[from] AllocError),
}

/// Failure of an operation that builds elements from a fallible source.
///
/// Returned by the `try_*` methods. Either the container itself failed, or the
/// value source reported an error of its own.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConstructError<E> {
    /// The container failed before or while making room.
    #[error(transparent)]
    Vector(#[from] VectorError),

    /// The value source failed.
    #[error("element construction failed: {0}")]
    Element(E),
}

impl From<ConstructError<Infallible>> for VectorError {
    fn from(err: ConstructError<Infallible>) -> Self {
        match err {
            ConstructError::Vector(err) => err,
            ConstructError::Element(never) => match never {},
        }
    }
}

/// Panics with `err`.
///
/// Used only by trait impls (`Clone`, `Extend`, `FromIterator`, `From`)
/// whose signatures cannot carry a `Result`.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn handle_error(err: VectorError) -> ! {
    panic!("rampart-vec: {err}")
}
