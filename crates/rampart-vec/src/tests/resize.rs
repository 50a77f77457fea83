// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::panic::{AssertUnwindSafe, catch_unwind};

use rampart_alloc::{AllocError, AllocatorBehaviour, BreakerAllocator, CountingAllocator};

use crate::error::{ConstructError, VectorError};
use crate::support::test_utils::{BreakerBehaviour, BreakerError, BreakerTracker, TestBreaker};
use crate::vector::Vector;

#[test]
fn test_resize_grows_with_clones() {
    let mut vector = Vector::from([1, 2]);

    vector.resize(5, 0).expect("Failed to resize(..)");

    assert_eq!(vector, [1, 2, 0, 0, 0]);
}

#[test]
fn test_resize_shrinks_without_reallocating() {
    let counting = CountingAllocator::new();
    let mut vector =
        Vector::from_iter_in([1, 2, 3, 4, 5], counting.clone()).expect("Failed to from_iter_in(..)");

    vector.resize(2, 0).expect("Failed to resize(..)");

    assert_eq!(vector, [1, 2]);
    assert_eq!(vector.capacity(), 5);
    assert_eq!(counting.stats().allocations, 1);
    assert_eq!(counting.stats().destroys, 3);
}

#[test]
fn test_resize_same_length_is_noop() {
    let mut vector = Vector::from([1, 2, 3]);

    vector.resize(3, 9).expect("Failed to resize(..)");

    assert_eq!(vector, [1, 2, 3]);
}

#[test]
fn test_resize_default() {
    let mut vector = Vector::from([String::from("a")]);

    vector.resize_default(3).expect("Failed to resize_default(..)");

    assert_eq!(vector, ["a", "", ""]);
}

#[test]
fn test_resize_with() {
    let mut vector: Vector<usize> = Vector::new();
    let mut counter = 10;

    vector
        .resize_with(3, || {
            counter += 1;
            counter
        })
        .expect("Failed to resize_with(..)");

    assert_eq!(vector, [11, 12, 13]);
}

#[test]
fn test_resize_failed_growth_keeps_elements() {
    let breaker = BreakerAllocator::new();
    let mut vector =
        Vector::from_iter_in([1, 2], breaker.clone()).expect("Failed to from_iter_in(..)");

    breaker.change_behaviour(AllocatorBehaviour::FailAtAllocate);

    assert_eq!(
        vector.resize(8, 0),
        Err(VectorError::Alloc(AllocError::Injected))
    );
    assert_eq!(vector, [1, 2]);
    assert_eq!(vector.capacity(), 2);
}

#[test]
fn test_try_resize_with_failure_keeps_original_length() {
    let tracker = BreakerTracker::new();
    let source = tracker.spawn(7);
    let mut vector = Vector::new();
    vector.push(tracker.spawn(0)).expect("Failed to push(..)");

    tracker.change_behaviour(BreakerBehaviour::FailAtTryClone(3));
    let result = vector.try_resize_with(6, || source.try_clone());

    assert_eq!(
        result,
        Err(ConstructError::Element(BreakerError::IntentionalCloneFailure))
    );
    assert_eq!(vector.len(), 1);
    assert_eq!(tracker.live(), 2);
}

#[test]
fn test_resize_panicking_clone_keeps_original_length() {
    let tracker = BreakerTracker::new();
    let mut vector = Vector::new();
    vector.push(tracker.spawn(0)).expect("Failed to push(..)");
    let fill = tracker.spawn(1);

    tracker.change_behaviour(BreakerBehaviour::PanicAtClone(1));
    let result = catch_unwind(AssertUnwindSafe(|| vector.resize(4, fill)));

    assert!(result.is_err());
    assert_eq!(
        vector.iter().map(TestBreaker::value).collect::<Vec<_>>(),
        [0]
    );
    assert_eq!(tracker.live(), 1);
}
