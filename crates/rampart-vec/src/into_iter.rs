// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::mem::ManuallyDrop;
use core::ptr;
use core::slice;

use rampart_alloc::{Allocator, Global};

use crate::lifecycle::destroy_range;
use crate::raw::RawBuf;
use crate::vector::Vector;

/// Owning iterator over the elements of a [`Vector`].
///
/// Elements not consumed are destroyed through the allocator when the
/// iterator is dropped, and the block is released.
pub struct IntoIter<T, A: Allocator = Global> {
    buf: RawBuf<T, A>,
    start: usize,
    end: usize,
}

impl<T, A: Allocator> IntoIter<T, A> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` is live.
        unsafe { slice::from_raw_parts(self.buf.ptr_at(self.start).as_ptr(), self.end - self.start) }
    }

    /// The allocator backing the remaining elements.
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }
}

impl<T, A: Allocator> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        let this = ManuallyDrop::new(self);

        // SAFETY: `this` is never dropped, so the buffer is moved out once.
        let buf = unsafe { ptr::read(&this.buf) };

        IntoIter {
            buf,
            start: 0,
            end: this.len,
        }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: slot `start` is live and leaves the live range here.
        let value = unsafe { ptr::read(self.buf.ptr_at(self.start).as_ptr()) };
        self.start += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;

        // SAFETY: slot `end` was live and has left the live range.
        Some(unsafe { ptr::read(self.buf.ptr_at(self.end).as_ptr()) })
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T: core::fmt::Debug, A: Allocator> core::fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        self.end = self.start;

        // SAFETY: `[start, start + remaining)` was live and is destroyed once.
        unsafe {
            destroy_range(
                self.buf.allocator(),
                self.buf.ptr_at(self.start),
                remaining,
            )
        };
    }
}
