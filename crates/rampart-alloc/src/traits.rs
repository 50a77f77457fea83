// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr::{self, NonNull};

use crate::error::AllocError;

/// Largest number of `T` a single block may hold.
///
/// Blocks are bounded by `isize::MAX` bytes. Zero-sized types never need
/// storage, so their bound is `usize::MAX`.
#[inline]
pub const fn max_size_for<T>() -> usize {
    let size = core::mem::size_of::<T>();

    if size == 0 {
        usize::MAX
    } else {
        isize::MAX as usize / size
    }
}

/// Raw-memory and element-lifecycle capability consumed by containers.
///
/// Only `allocate` and `deallocate` are required. The lifecycle hooks default
/// to plain pointer writes, drops, and copies, and exist so that instrumented
/// or pooled allocators can observe or redirect them.
///
/// # Safety
///
/// Implementors must return blocks that are valid for reads and writes of `n`
/// values of `T`, properly aligned, and not aliased by any other live block
/// until passed back to `deallocate`. Overridden lifecycle hooks must preserve
/// the semantics of their default bodies.
pub unsafe trait Allocator {
    /// Obtains raw, uninitialized storage for exactly `n` values of `T`.
    ///
    /// Callers pass `n > 0` and a non zero-sized `T`; containers handle the
    /// empty block without calling the allocator.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] when the request cannot be satisfied. No memory
    /// is reserved in that case.
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError>;

    /// Releases a block previously returned by [`allocate`](Self::allocate).
    ///
    /// # Safety
    ///
    /// `block` must come from this allocator with the same `n`, and every
    /// slot in it must already be raw (destroyed or moved out).
    unsafe fn deallocate<T>(&self, block: NonNull<T>, n: usize);

    /// Initializes one raw slot with `value`.
    ///
    /// # Safety
    ///
    /// `slot` must be valid for writes and currently hold no live value.
    #[inline]
    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        // SAFETY: caller guarantees `slot` is a writable raw slot.
        unsafe { slot.as_ptr().write(value) }
    }

    /// Finalizes the live value in `slot`. The slot is raw afterwards.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live value that is not used again.
    #[inline]
    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        // SAFETY: caller guarantees `slot` holds a live value.
        unsafe { ptr::drop_in_place(slot.as_ptr()) }
    }

    /// Moves `n` live values from `src` into the raw slots at `dst`.
    ///
    /// After the call the source slots are raw and must not be destroyed.
    ///
    /// # Safety
    ///
    /// `src` must hold `n` live values, `dst` must be `n` raw writable slots,
    /// and the two ranges must not overlap.
    #[inline]
    unsafe fn relocate<T>(&self, src: NonNull<T>, dst: NonNull<T>, n: usize) {
        // SAFETY: caller guarantees both ranges are valid and disjoint.
        unsafe { ptr::copy_nonoverlapping(src.as_ptr(), dst.as_ptr(), n) }
    }

    /// Largest element count this allocator can ever hand out in one block.
    #[inline]
    fn max_size<T>(&self) -> usize {
        max_size_for::<T>()
    }
}

// SAFETY: forwards every call to `A`, which upholds the contract.
unsafe impl<A> Allocator for &A
where
    A: Allocator + ?Sized,
{
    #[inline]
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        (**self).allocate(n)
    }

    #[inline]
    unsafe fn deallocate<T>(&self, block: NonNull<T>, n: usize) {
        // SAFETY: the caller's contract is forwarded unchanged.
        unsafe { (**self).deallocate(block, n) }
    }

    #[inline]
    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        // SAFETY: the caller's contract is forwarded unchanged.
        unsafe { (**self).construct(slot, value) }
    }

    #[inline]
    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        // SAFETY: the caller's contract is forwarded unchanged.
        unsafe { (**self).destroy(slot) }
    }

    #[inline]
    unsafe fn relocate<T>(&self, src: NonNull<T>, dst: NonNull<T>, n: usize) {
        // SAFETY: the caller's contract is forwarded unchanged.
        unsafe { (**self).relocate(src, dst, n) }
    }

    #[inline]
    fn max_size<T>(&self) -> usize {
        (**self).max_size::<T>()
    }
}
