// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use core::cell::Cell;
use core::ptr::NonNull;

use crate::error::AllocError;
use crate::global::Global;
use crate::traits::Allocator;

/// Snapshot of the calls a [`CountingAllocator`] has observed.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct AllocatorStats {
    /// Successful `allocate` calls.
    pub allocations: usize,
    /// `deallocate` calls.
    pub deallocations: usize,
    /// `construct` calls.
    pub constructs: usize,
    /// `destroy` calls.
    pub destroys: usize,
    /// Elements moved by `relocate`.
    pub relocated: usize,
    /// Bytes currently handed out and not yet released.
    pub bytes_in_use: usize,
}

impl AllocatorStats {
    /// Blocks allocated and not yet released.
    pub fn live_blocks(&self) -> usize {
        self.allocations - self.deallocations
    }

    /// Values constructed and not yet destroyed.
    pub fn live_values(&self) -> usize {
        self.constructs - self.destroys
    }

    /// `true` when every block was released and every value destroyed.
    pub fn is_balanced(&self) -> bool {
        self.live_blocks() == 0 && self.live_values() == 0 && self.bytes_in_use == 0
    }
}

#[derive(Default)]
struct Counters {
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    constructs: Cell<usize>,
    destroys: Cell<usize>,
    relocated: Cell<usize>,
    bytes_in_use: Cell<usize>,
}

fn bump(cell: &Cell<usize>, by: usize) {
    cell.set(cell.get() + by);
}

/// Allocator wrapper that counts every call it forwards.
///
/// Clones share the same counters, so a test can keep one handle while the
/// container under test owns another.
///
/// # Example
///
/// ```rust
/// use rampart_alloc::{Allocator, CountingAllocator};
///
/// let counting = CountingAllocator::new();
/// let probe = counting.clone();
///
/// let block = counting.allocate::<u32>(8).unwrap();
/// unsafe { counting.deallocate(block, 8) };
///
/// assert_eq!(probe.stats().allocations, 1);
/// assert!(probe.stats().is_balanced());
/// ```
#[derive(Clone)]
pub struct CountingAllocator<A = Global> {
    inner: A,
    counters: Rc<Counters>,
}

impl CountingAllocator<Global> {
    /// Counts calls forwarded to [`Global`].
    pub fn new() -> Self {
        Self::wrap(Global)
    }
}

impl Default for CountingAllocator<Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> CountingAllocator<A> {
    /// Counts calls forwarded to `inner`.
    pub fn wrap(inner: A) -> Self {
        Self {
            inner,
            counters: Rc::new(Counters::default()),
        }
    }

    /// Current counter values.
    pub fn stats(&self) -> AllocatorStats {
        AllocatorStats {
            allocations: self.counters.allocations.get(),
            deallocations: self.counters.deallocations.get(),
            constructs: self.counters.constructs.get(),
            destroys: self.counters.destroys.get(),
            relocated: self.counters.relocated.get(),
            bytes_in_use: self.counters.bytes_in_use.get(),
        }
    }

    /// Returns `true` if `other` shares counters with `self`.
    pub fn shares_counters_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.counters, &other.counters)
    }
}

impl<A> core::fmt::Debug for CountingAllocator<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CountingAllocator")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

// SAFETY: forwards raw-memory calls to `A` unchanged.
unsafe impl<A> Allocator for CountingAllocator<A>
where
    A: Allocator,
{
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let block = self.inner.allocate::<T>(n)?;

        bump(&self.counters.allocations, 1);
        bump(&self.counters.bytes_in_use, core::mem::size_of::<T>() * n);

        Ok(block)
    }

    unsafe fn deallocate<T>(&self, block: NonNull<T>, n: usize) {
        bump(&self.counters.deallocations, 1);
        let in_use = self.counters.bytes_in_use.get();
        self.counters
            .bytes_in_use
            .set(in_use.saturating_sub(core::mem::size_of::<T>() * n));

        // SAFETY: the caller's contract is forwarded unchanged.

        unsafe { self.inner.deallocate(block, n) }
    }

    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        bump(&self.counters.constructs, 1);
        // SAFETY: the caller's contract is forwarded unchanged.
        unsafe { self.inner.construct(slot, value) }
    }

    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        bump(&self.counters.destroys, 1);
        // SAFETY: the caller's contract is forwarded unchanged.
        unsafe { self.inner.destroy(slot) }
    }

    unsafe fn relocate<T>(&self, src: NonNull<T>, dst: NonNull<T>, n: usize) {
        bump(&self.counters.relocated, n);
        // SAFETY: the caller's contract is forwarded unchanged.
        unsafe { self.inner.relocate(src, dst, n) }
    }

    fn max_size<T>(&self) -> usize {
        self.inner.max_size::<T>()
    }
}
