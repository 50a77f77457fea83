// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous sequence with pluggable allocation.
//!
//! `Vector<T, A>` keeps its elements in one block obtained from an
//! [`Allocator`](rampart_alloc::Allocator). Elements are constructed and
//! destroyed individually through the allocator, so the container never holds
//! a half-initialized element and every slot is either live or raw.
//!
//! # Core Guarantees
//!
//! - **Amortized O(1) append**: capacity grows by [`GROWTH_FACTOR`] when full.
//! - **Strong guarantee** for `push`, `insert*`, `resize*`, `reserve*` and
//!   `shrink_to_fit`: on failure the vector is exactly as before the call.
//! - **Destructive assignment**: `assign_*` clears first and leaves the vector
//!   empty if the new elements cannot be built.
//! - **Checked errors**: invalid positions and ranges are reported before any
//!   mutation, as [`VectorError`].
//! - **Unwind safety**: a panicking `Clone` or closure triggers the same
//!   rollback as an `Err` from a fallible source.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use rampart_vec::{Vector, VectorError};
//!
//! fn example() -> Result<(), VectorError> {
//!     let mut vector = Vector::new();
//!     vector.reserve(5)?;
//!     assert!(vector.capacity() >= 5);
//!
//!     vector.extend_from_slice(&[1, 2, 3, 4])?;
//!     vector.insert(2, 99)?;
//!     assert_eq!(vector, [1, 2, 99, 3, 4]);
//!
//!     assert!(vector.at(5).is_err());
//!     assert_eq!(vector.at(4)?, &4);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Fallible Construction
//!
//! ```rust
//! use rampart_vec::{ConstructError, Vector};
//!
//! let mut vector = rampart_vec::vector![1, 2, 3];
//! let result = vector.try_push_with(|| "4".parse::<i32>().map_err(|_| "bad"));
//! assert!(result.is_ok());
//!
//! let result = vector.try_push_with(|| "x".parse::<i32>().map_err(|_| "bad"));
//! assert_eq!(result, Err(ConstructError::Element("bad")));
//! assert_eq!(vector, [1, 2, 3, 4]);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to get [`support::test_utils::TestBreaker`],
//! an element type whose copies fail or panic on demand, along with the
//! instrumented allocators of `rampart-alloc`:
//!
//! ```toml
//! [dev-dependencies]
//! rampart-vec = { version = "*", features = ["test-utils"] }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod growth;
mod into_iter;
mod lifecycle;
mod macros;
mod raw;
mod vector;
mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use error::{ConstructError, VectorError};
pub use growth::GROWTH_FACTOR;
pub use into_iter::IntoIter;
pub use rampart_alloc::{AllocError, Allocator, Global};
pub use vector::{Vector, swap};
