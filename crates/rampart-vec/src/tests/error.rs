// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::convert::Infallible;

use rampart_alloc::AllocError;

use crate::error::{ConstructError, VectorError};

#[test]
fn test_vector_error_display() {
    let length = VectorError::Length {
        requested: 10,
        max: 4,
    };
    let out_of_range = VectorError::OutOfRange { index: 3, len: 3 };
    let alloc = VectorError::Alloc(AllocError::OutOfMemory { bytes: 64 });

    assert_eq!(
        length.to_string(),
        "length error: requested 10 elements, max_size is 4"
    );
    assert_eq!(out_of_range.to_string(), "out of range: index 3 with length 3");
    assert_eq!(
        alloc.to_string(),
        "allocation failed: out of memory: failed to allocate 64 bytes"
    );
}

#[test]
fn test_alloc_error_converts_into_vector_error() {
    let err: VectorError = AllocError::CapacityOverflow.into();

    assert_eq!(err, VectorError::Alloc(AllocError::CapacityOverflow));
}

#[test]
fn test_construct_error_display() {
    let vector: ConstructError<&str> = VectorError::OutOfRange { index: 1, len: 0 }.into();
    let element: ConstructError<&str> = ConstructError::Element("bad input");

    assert_eq!(vector.to_string(), "out of range: index 1 with length 0");
    assert_eq!(element.to_string(), "element construction failed: bad input");
}

#[test]
fn test_infallible_construct_error_unwraps_to_vector_error() {
    let err: ConstructError<Infallible> = ConstructError::Vector(VectorError::Length {
        requested: 1,
        max: 0,
    });

    assert_eq!(
        VectorError::from(err),
        VectorError::Length {
            requested: 1,
            max: 0
        }
    );
}
