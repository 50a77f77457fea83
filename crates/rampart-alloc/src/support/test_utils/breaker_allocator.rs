// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use core::cell::Cell;
use core::ptr::NonNull;

use crate::error::AllocError;
use crate::global::Global;
use crate::traits::Allocator;

/// Failure injection for [`BreakerAllocator`].
///
/// The behaviour is sticky - once set, it remains active until changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AllocatorBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every `allocate()` call fails with [`AllocError::Injected`].
    FailAtAllocate,
    /// Only the `n`-th `allocate()` call (0-based, counted from the moment the
    /// behaviour was set) fails.
    FailAtAllocateCall(usize),
}

struct BreakerState {
    behaviour: Cell<AllocatorBehaviour>,
    calls: Cell<usize>,
    max_size: Cell<Option<usize>>,
}

/// Allocator wrapper that fails on demand.
///
/// Clones share the same behaviour, so a test can flip the behaviour of an
/// allocator already owned by a container.
///
/// # Example
///
/// ```rust
/// use rampart_alloc::{AllocError, Allocator, AllocatorBehaviour, BreakerAllocator};
///
/// let breaker = BreakerAllocator::new();
/// breaker.change_behaviour(AllocatorBehaviour::FailAtAllocate);
///
/// assert_eq!(breaker.allocate::<u8>(1), Err(AllocError::Injected));
/// ```
#[derive(Clone)]
pub struct BreakerAllocator<A = Global> {
    inner: A,
    state: Rc<BreakerState>,
}

impl BreakerAllocator<Global> {
    /// Wraps [`Global`] with no injected failures.
    pub fn new() -> Self {
        Self::wrap(Global)
    }
}

impl Default for BreakerAllocator<Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> BreakerAllocator<A> {
    /// Wraps `inner` with no injected failures.
    pub fn wrap(inner: A) -> Self {
        Self {
            inner,
            state: Rc::new(BreakerState {
                behaviour: Cell::new(AllocatorBehaviour::None),
                calls: Cell::new(0),
                max_size: Cell::new(None),
            }),
        }
    }

    /// Replaces the active behaviour and restarts the call counter.
    pub fn change_behaviour(&self, behaviour: AllocatorBehaviour) {
        self.state.behaviour.set(behaviour);
        self.state.calls.set(0);
    }

    /// Caps the value reported by `max_size()`, or removes the cap.
    pub fn set_max_size(&self, max_size: Option<usize>) {
        self.state.max_size.set(max_size);
    }

    /// Gives access to the wrapped allocator.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    fn should_fail(&self) -> bool {
        let call = self.state.calls.get();
        self.state.calls.set(call + 1);

        match self.state.behaviour.get() {
            AllocatorBehaviour::None => false,
            AllocatorBehaviour::FailAtAllocate => true,
            AllocatorBehaviour::FailAtAllocateCall(n) => call == n,
        }
    }
}

impl<A> core::fmt::Debug for BreakerAllocator<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BreakerAllocator")
            .field("behaviour", &self.state.behaviour.get())
            .field("max_size", &self.state.max_size.get())
            .finish_non_exhaustive()
    }
}

// SAFETY: either fails without reserving memory or forwards to `A` unchanged.
unsafe impl<A> Allocator for BreakerAllocator<A>
where
    A: Allocator,
{
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        if self.should_fail() {
            return Err(AllocError::Injected);
        }

        self.inner.allocate(n)
    }

    unsafe fn deallocate<T>(&self, block: NonNull<T>, n: usize) {
        // SAFETY: the caller's contract is forwarded unchanged.
        unsafe { self.inner.deallocate(block, n) }
    }

    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        // SAFETY: the caller's contract is forwarded unchanged.
        unsafe { self.inner.construct(slot, value) }
    }

    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        // SAFETY: the caller's contract is forwarded unchanged.
        unsafe { self.inner.destroy(slot) }
    }

    unsafe fn relocate<T>(&self, src: NonNull<T>, dst: NonNull<T>, n: usize) {
        // SAFETY: the caller's contract is forwarded unchanged.
        unsafe { self.inner.relocate(src, dst, n) }
    }

    fn max_size<T>(&self) -> usize {
        let inner = self.inner.max_size::<T>();

        match self.state.max_size.get() {
            Some(cap) => cap.min(inner),
            None => inner,
        }
    }
}
