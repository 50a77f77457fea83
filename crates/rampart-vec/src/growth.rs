// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growth policy.
//!
//! Capacity grows geometrically so that repeated `push` is amortized O(1):
//! starting from empty, single pushes step through 1, 2, 4, 8, ...
//! Relocation moves every live element, which cannot fail, so the only
//! fallible step (allocation) happens before any element is touched.

use rampart_alloc::Allocator;

use crate::error::VectorError;
use crate::vector::Vector;

/// Factor applied to the current capacity when a vector has to grow.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity to grow to when at least `required` slots are needed.
///
/// `max(required, current * GROWTH_FACTOR)`, clamped to `max`.
#[inline]
pub(crate) fn grown_capacity(current: usize, required: usize, max: usize) -> usize {
    current
        .saturating_mul(GROWTH_FACTOR)
        .max(required)
        .min(max)
}

impl<T, A: Allocator> Vector<T, A> {
    /// `len + additional`, or a length error if that overflows `max_size`.
    #[inline]
    pub(crate) fn required(&self, additional: usize) -> Result<usize, VectorError> {
        let max = self.max_size();

        match self.len.checked_add(additional) {
            Some(required) if required <= max => Ok(required),
            _ => Err(VectorError::Length {
                requested: self.len.saturating_add(additional),
                max,
            }),
        }
    }

    /// Makes room for at least `n` elements using the growth policy.
    #[inline]
    pub(crate) fn ensure_capacity(&mut self, n: usize) -> Result<(), VectorError> {
        if self.capacity() >= n {
            return Ok(());
        }

        self.grow_to(n)
    }

    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, n: usize) -> Result<(), VectorError> {
        let max = self.max_size();

        if n > max {
            return Err(VectorError::Length { requested: n, max });
        }

        let new_cap = grown_capacity(self.capacity(), n, max);

        // SAFETY: `[0, len)` is live and `len <= capacity < n <= new_cap`.
        unsafe { self.buf.reallocate(self.len, new_cap) }
    }

    /// Reallocates to exactly `n` slots. `n` must be at least `len`.
    pub(crate) fn reallocate_exact(&mut self, n: usize) -> Result<(), VectorError> {
        debug_assert!(n >= self.len);

        // SAFETY: `[0, len)` is live and `len <= n`.
        unsafe { self.buf.reallocate(self.len, n) }
    }
}
