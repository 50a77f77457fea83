// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element lifecycle: batch destruction and rollback guards.
//!
//! Every guard undoes its batch on drop, so the same cleanup runs on an `Err`
//! return and during unwinding. A successful batch disarms its guard.

use core::mem;
use core::ptr::{self, NonNull};

use rampart_alloc::Allocator;

use crate::vector::Vector;

/// Destroys `n` live slots starting at `start`, highest index first.
///
/// # Safety
///
/// Slots `[start, start + n)` must be live and are raw afterwards.
pub(crate) unsafe fn destroy_range<T, A>(alloc: &A, start: NonNull<T>, n: usize)
where
    A: Allocator,
{
    for offset in (0..n).rev() {
        // SAFETY: caller guarantees the slot is live.
        unsafe { alloc.destroy(start.add(offset)) };
    }
}

/// Constructs consecutive slots and destroys them again unless disarmed.
pub(crate) struct ConstructGuard<'a, T, A: Allocator> {
    alloc: &'a A,
    start: NonNull<T>,
    constructed: usize,
}

impl<'a, T, A: Allocator> ConstructGuard<'a, T, A> {
    pub(crate) fn new(alloc: &'a A, start: NonNull<T>) -> Self {
        Self {
            alloc,
            start,
            constructed: 0,
        }
    }

    /// Constructs `value` in the next slot.
    ///
    /// # Safety
    ///
    /// The next slot must be raw and inside the block.
    #[inline]
    pub(crate) unsafe fn construct(&mut self, value: T) {
        // SAFETY: caller guarantees the slot is raw and in bounds.
        unsafe { self.alloc.construct(self.start.add(self.constructed), value) };
        self.constructed += 1;
    }

    /// Keeps the constructed slots and returns how many there are.
    #[inline]
    pub(crate) fn disarm(self) -> usize {
        let constructed = self.constructed;
        mem::forget(self);
        constructed
    }
}

impl<T, A: Allocator> Drop for ConstructGuard<'_, T, A> {
    fn drop(&mut self) {
        if self.constructed == 0 {
            return;
        }

        log::debug!("rolling back {} constructed elements", self.constructed);

        // SAFETY: exactly `constructed` slots from `start` were built here.
        unsafe { destroy_range(self.alloc, self.start, self.constructed) };
    }
}

/// Fills a gap opened in the middle of a vector.
///
/// The suffix has already been shifted `gap` slots toward the tail, and `len`
/// covers only the prefix. On drop the new elements are destroyed, the suffix
/// is shifted back, and `len` is restored. [`close`](Self::close) commits.
pub(crate) struct GapGuard<'a, T, A: Allocator> {
    alloc: &'a A,
    len: &'a mut usize,
    hole: NonNull<T>,
    gap: usize,
    tail: usize,
    constructed: usize,
}

impl<'a, T, A: Allocator> GapGuard<'a, T, A> {
    pub(crate) fn new(
        alloc: &'a A,
        len: &'a mut usize,
        hole: NonNull<T>,
        gap: usize,
        tail: usize,
    ) -> Self {
        Self {
            alloc,
            len,
            hole,
            gap,
            tail,
            constructed: 0,
        }
    }

    /// Constructs `value` in the next slot of the gap.
    ///
    /// # Safety
    ///
    /// Fewer than `gap` values may have been constructed so far.
    #[inline]
    pub(crate) unsafe fn construct(&mut self, value: T) {
        debug_assert!(self.constructed < self.gap);

        // SAFETY: the gap slots are raw until filled here.
        unsafe { self.alloc.construct(self.hole.add(self.constructed), value) };
        self.constructed += 1;
    }

    /// Commits the gap. Every gap slot must be constructed.
    pub(crate) fn close(self) {
        debug_assert_eq!(self.constructed, self.gap);

        *self.len += self.gap + self.tail;
        mem::forget(self);
    }
}

impl<T, A: Allocator> Drop for GapGuard<'_, T, A> {
    fn drop(&mut self) {
        log::debug!(
            "rolling back insertion of {} elements ({} constructed)",
            self.gap,
            self.constructed
        );

        // SAFETY: `constructed` slots from `hole` were built here, and the
        // suffix sits `gap` slots past `hole`.
        unsafe {
            destroy_range(self.alloc, self.hole, self.constructed);
            ptr::copy(
                self.hole.add(self.gap).as_ptr(),
                self.hole.as_ptr(),
                self.tail,
            );
        }

        *self.len += self.tail;
    }
}

/// Truncates a vector back to a saved length unless disarmed.
pub(crate) struct TruncateGuard<'a, T, A: Allocator> {
    vector: &'a mut Vector<T, A>,
    len: usize,
}

impl<'a, T, A: Allocator> TruncateGuard<'a, T, A> {
    pub(crate) fn new(vector: &'a mut Vector<T, A>, len: usize) -> Self {
        Self { vector, len }
    }

    #[inline]
    pub(crate) fn vector(&mut self) -> &mut Vector<T, A> {
        self.vector
    }

    pub(crate) fn disarm(self) -> &'a mut Vector<T, A> {
        let this = mem::ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the reference is moved out once.
        unsafe { ptr::read(&this.vector) }
    }
}

impl<T, A: Allocator> Drop for TruncateGuard<'_, T, A> {
    fn drop(&mut self) {
        if self.vector.len() > self.len {
            log::debug!(
                "rolling back {} appended elements",
                self.vector.len() - self.len
            );
        }

        self.vector.truncate(self.len);
    }
}
