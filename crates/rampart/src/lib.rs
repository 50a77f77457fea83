// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable sequences with pluggable allocation.
//!
//! Rampart is a `no_std` + `alloc` container library. Its [`Vector`] keeps
//! elements contiguously in a block obtained from an [`Allocator`], routes every
//! construction and destruction through it, and rolls back partially applied
//! mutations on failure instead of leaving half-built state behind.
//!
//! # Crates
//!
//! | Re-export         | Crate           | Contents                                     |
//! |-------------------|-----------------|----------------------------------------------|
//! | [`rampart::alloc`](crate::alloc) | `rampart-alloc` | `Allocator`, `Global`, `AllocError`  |
//! | [`rampart::vec`](crate::vec)     | `rampart-vec`   | `Vector`, `IntoIter`, `VectorError`  |
//!
//! # Quick Start
//!
//! ```rust
//! use rampart::{Vector, VectorError, vector};
//!
//! fn main() -> Result<(), VectorError> {
//!     let mut numbers: Vector<i32> = Vector::new();
//!     for i in 1..=5 {
//!         numbers.push(i)?;
//!     }
//!     assert_eq!(numbers, [1, 2, 3, 4, 5]);
//!     assert_eq!(numbers.capacity(), 8);
//!
//!     numbers.erase_range(1..3)?;
//!     assert_eq!(numbers, [1, 4, 5]);
//!
//!     let mut letters = vector!['a', 'b', 'c'];
//!     letters.assign_fill(3, 'x')?;
//!     assert_eq!(letters, ['x', 'x', 'x']);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom allocators
//!
//! Implement [`Allocator`] (only `allocate` and `deallocate` are required) and
//! pass an instance to [`Vector::new_in`]:
//!
//! ```rust
//! use core::ptr::NonNull;
//!
//! use rampart::alloc::{AllocError, Allocator, Global};
//! use rampart::Vector;
//!
//! struct Forwarding;
//!
//! unsafe impl Allocator for Forwarding {
//!     fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
//!         Global.allocate(n)
//!     }
//!
//!     unsafe fn deallocate<T>(&self, block: NonNull<T>, n: usize) {
//!         unsafe { Global.deallocate(block, n) }
//!     }
//! }
//!
//! let mut vector = Vector::new_in(Forwarding);
//! vector.push(1u8).unwrap();
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub mod support;

pub use rampart_alloc as alloc;
pub use rampart_vec as vec;

pub use rampart_alloc::{AllocError, Allocator, Global};
pub use rampart_vec::{ConstructError, IntoIter, Vector, VectorError, swap, vector};
