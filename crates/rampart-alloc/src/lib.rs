// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocator capability for rampart containers.
//!
//! Containers never touch the heap directly. Every raw allocation, every
//! deallocation, and every in-place construction or destruction of an element
//! goes through an [`Allocator`], so arenas, pools, or instrumented allocators
//! can be substituted without changing container logic.
//!
//! # Capability
//!
//! | Operation      | Meaning                                                    |
//! |----------------|------------------------------------------------------------|
//! | `allocate`     | raw, uninitialized storage for exactly `n` elements        |
//! | `deallocate`   | release a block obtained with the same `n`                 |
//! | `construct`    | initialize one raw slot in place                           |
//! | `destroy`      | finalize one live slot, which becomes raw again            |
//! | `relocate`     | transfer `n` live values between blocks (infallible move)  |
//! | `max_size`     | largest element count a single block can ever hold         |
//!
//! [`Global`] is the default implementation, backed by the process heap.
//!
//! # Example
//!
//! ```rust
//! use rampart_alloc::{AllocError, Allocator, Global};
//!
//! fn example() -> Result<(), AllocError> {
//!     let block = Global.allocate::<u64>(4)?;
//!
//!     unsafe {
//!         Global.construct(block, 42u64);
//!         assert_eq!(*block.as_ptr(), 42);
//!         Global.destroy(block);
//!         Global.deallocate(block, 4);
//!     }
//!
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to get instrumented allocators:
//!
//! ```toml
//! [dev-dependencies]
//! rampart-alloc = { version = "*", features = ["test-utils"] }
//! ```
//!
//! - [`CountingAllocator`] records every call so tests can assert that
//!   constructions and destructions balance and no block leaks.
//! - [`BreakerAllocator`] injects allocation failures on demand.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod global;
mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use error::AllocError;
pub use global::Global;
pub use traits::{Allocator, max_size_for};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils::{
    AllocatorBehaviour, AllocatorStats, BreakerAllocator, CountingAllocator,
};
