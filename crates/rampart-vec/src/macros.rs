// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Builds a [`Vector`](crate::Vector) from a list of elements or from
/// `elem; n`.
///
/// Panics if the allocation fails.
///
/// # Example
///
/// ```rust
/// use rampart_vec::vector;
///
/// let list = vector![1, 2, 3];
/// let filled = vector!['x'; 3];
///
/// assert_eq!(list, [1, 2, 3]);
/// assert_eq!(filled, ['x', 'x', 'x']);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($elem:expr; $n:expr) => {
        match $crate::Vector::from_elem($elem, $n) {
            ::core::result::Result::Ok(vector) => vector,
            ::core::result::Result::Err(err) => ::core::panic!("{}", err),
        }
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::from([$($x),+])
    };
}
