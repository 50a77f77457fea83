// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RawBuf - owner of one raw block of element slots.
//!
//! Obtains and releases storage through the allocator. Never constructs or
//! destroys values; callers track which slots are live.

use core::marker::PhantomData;
use core::ptr::NonNull;

use rampart_alloc::Allocator;

use crate::error::VectorError;

pub(crate) struct RawBuf<T, A: Allocator> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuf` uniquely owns its block, like `Box<[T]>`.
unsafe impl<T: Send, A: Allocator + Send> Send for RawBuf<T, A> {}
// SAFETY: shared access only hands out `&T` and `&A`.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuf<T, A> {}

impl<T, A: Allocator> RawBuf<T, A> {
    pub(crate) const IS_ZST: bool = core::mem::size_of::<T>() == 0;

    /// Empty block. Does not touch the allocator.
    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Raw storage for exactly `n` elements.
    pub(crate) fn allocate_in(n: usize, alloc: A) -> Result<Self, VectorError> {
        let mut buf = Self::new_in(alloc);

        if n == 0 || Self::IS_ZST {
            return Ok(buf);
        }

        buf.ptr = Self::allocate_block(&buf.alloc, n)?;
        buf.cap = n;

        Ok(buf)
    }

    fn allocate_block(alloc: &A, n: usize) -> Result<NonNull<T>, VectorError> {
        let max = alloc.max_size::<T>();

        if n > max {
            return Err(VectorError::Length { requested: n, max });
        }

        alloc.allocate::<T>(n).map_err(|err| {
            log::debug!("allocation of {n} slots failed: {err}");
            VectorError::Alloc(err)
        })
    }

    /// Number of slots. Zero-sized types report `usize::MAX`.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        if Self::IS_ZST { usize::MAX } else { self.cap }
    }

    #[inline]
    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline]
    pub(crate) fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index` must not exceed the capacity.
    #[inline]
    pub(crate) unsafe fn ptr_at(&self, index: usize) -> NonNull<T> {
        // SAFETY: caller keeps `index` within (or one past) the block.
        unsafe { self.ptr.add(index) }
    }

    /// Moves the `len` live values into a fresh block of `new_cap` slots and
    /// releases the old block. Nothing changes if the allocation fails.
    ///
    /// # Safety
    ///
    /// Slots `[0, len)` must be live, and `len <= new_cap`.
    pub(crate) unsafe fn reallocate(&mut self, len: usize, new_cap: usize) -> Result<(), VectorError> {
        debug_assert!(len <= new_cap);

        if Self::IS_ZST {
            return Ok(());
        }

        let new_ptr = if new_cap == 0 {
            NonNull::dangling()
        } else {
            Self::allocate_block(&self.alloc, new_cap)?
        };

        if len > 0 {
            // SAFETY: `[0, len)` is live in the old block, the new block has
            // at least `len` raw slots, and the blocks are distinct.
            unsafe { self.alloc.relocate(self.ptr, new_ptr, len) };
        }

        log::trace!("reallocated {len} elements: capacity {} -> {new_cap}", self.cap);

        self.release();
        self.ptr = new_ptr;
        self.cap = new_cap;

        Ok(())
    }

    /// Returns the block to the allocator. Every slot must already be raw.
    fn release(&mut self) {
        if self.cap == 0 || Self::IS_ZST {
            return;
        }

        // SAFETY: `ptr` came from `alloc` with exactly `cap` slots.
        unsafe { self.alloc.deallocate(self.ptr, self.cap) };

        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        self.release();
    }
}
