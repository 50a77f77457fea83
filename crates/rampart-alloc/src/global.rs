// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Global - heap-backed default allocator.

use alloc::alloc::{Layout, alloc, dealloc};
use core::ptr::NonNull;

use crate::error::AllocError;
use crate::traits::Allocator;

/// The process heap, reached through `alloc::alloc`.
///
/// Stateless and zero-sized: every `Global` is interchangeable with every
/// other, so swapping vectors between them never needs to move memory.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Global;

// SAFETY: blocks come straight from the global allocator with the layout of
// `[T; n]` and are released with the identical layout.
unsafe impl Allocator for Global {
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let layout = Layout::array::<T>(n).map_err(|_| AllocError::CapacityOverflow)?;

        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: layout has non-zero size.
        let ptr = unsafe { alloc(layout) };

        match NonNull::new(ptr.cast::<T>()) {
            Some(block) => Ok(block),
            None => {
                log::debug!("global allocator refused {} bytes", layout.size());
                Err(AllocError::OutOfMemory {
                    bytes: layout.size(),
                })
            }
        }
    }

    unsafe fn deallocate<T>(&self, block: NonNull<T>, n: usize) {
        let size = core::mem::size_of::<T>() * n;

        if size == 0 {
            return;
        }

        // SAFETY: the same layout was validated by `allocate` for this `n`.
        unsafe {
            let layout = Layout::from_size_align_unchecked(size, core::mem::align_of::<T>());
            dealloc(block.as_ptr().cast::<u8>(), layout);
        }
    }
}
