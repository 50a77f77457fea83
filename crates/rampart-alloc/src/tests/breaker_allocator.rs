// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{AllocError, Allocator, AllocatorBehaviour, BreakerAllocator, CountingAllocator};

#[test]
fn test_default_behaviour_forwards() {
    let breaker = BreakerAllocator::new();

    let block = breaker.allocate::<u16>(3).expect("Failed to allocate(..)");
    unsafe { breaker.deallocate(block, 3) };
}

#[test]
fn test_fail_at_allocate_is_sticky() {
    let breaker = BreakerAllocator::new();
    breaker.change_behaviour(AllocatorBehaviour::FailAtAllocate);

    assert_eq!(breaker.allocate::<u8>(1), Err(AllocError::Injected));
    assert_eq!(breaker.allocate::<u8>(1), Err(AllocError::Injected));

    breaker.change_behaviour(AllocatorBehaviour::None);

    let block = breaker.allocate::<u8>(1).expect("Failed to allocate(..)");
    unsafe { breaker.deallocate(block, 1) };
}

#[test]
fn test_fail_at_allocate_call_fails_only_that_call() {
    let breaker = BreakerAllocator::wrap(CountingAllocator::new());
    breaker.change_behaviour(AllocatorBehaviour::FailAtAllocateCall(1));

    let first = breaker.allocate::<u8>(1).expect("Failed to allocate(..)");
    assert_eq!(breaker.allocate::<u8>(1), Err(AllocError::Injected));
    let third = breaker.allocate::<u8>(1).expect("Failed to allocate(..)");

    unsafe {
        breaker.deallocate(first, 1);
        breaker.deallocate(third, 1);
    }

    let stats = breaker.inner().stats();
    assert_eq!(stats.allocations, 2);
    assert!(stats.is_balanced());
}

#[test]
fn test_clones_share_behaviour() {
    let breaker = BreakerAllocator::new();
    let handle = breaker.clone();

    handle.change_behaviour(AllocatorBehaviour::FailAtAllocate);

    assert_eq!(breaker.allocate::<u8>(1), Err(AllocError::Injected));
}

#[test]
fn test_set_max_size_caps_report() {
    let breaker = BreakerAllocator::new();
    assert_eq!(breaker.max_size::<u8>(), isize::MAX as usize);

    breaker.set_max_size(Some(10));
    assert_eq!(breaker.max_size::<u8>(), 10);
    assert_eq!(breaker.max_size::<u64>(), 10);

    breaker.set_max_size(None);
    assert_eq!(breaker.max_size::<u64>(), isize::MAX as usize / 8);
}

#[test]
fn test_debug_snapshot() {
    let breaker = BreakerAllocator::new();
    breaker.change_behaviour(AllocatorBehaviour::FailAtAllocateCall(2));

    let snapshot = format!("{:?}", breaker);
    insta::assert_snapshot!(snapshot, @"BreakerAllocator { behaviour: FailAtAllocateCall(2), max_size: None, .. }");
}
