// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{Allocator, AllocatorStats, CountingAllocator};

// =============================================================================
// stats()
// =============================================================================

#[test]
fn test_new_starts_balanced() {
    let counting = CountingAllocator::new();

    assert_eq!(counting.stats(), AllocatorStats::default());
    assert!(counting.stats().is_balanced());
}

#[test]
fn test_counts_allocate_and_deallocate() {
    let counting = CountingAllocator::new();

    let block = counting.allocate::<u32>(4).expect("Failed to allocate(..)");

    let stats = counting.stats();
    assert_eq!(stats.allocations, 1);
    assert_eq!(stats.live_blocks(), 1);
    assert_eq!(stats.bytes_in_use, 16);
    assert!(!stats.is_balanced());

    unsafe { counting.deallocate(block, 4) };

    let stats = counting.stats();
    assert_eq!(stats.deallocations, 1);
    assert_eq!(stats.bytes_in_use, 0);
    assert!(stats.is_balanced());
}

#[test]
fn test_counts_construct_destroy_and_relocate() {
    let counting = CountingAllocator::new();
    let src = counting.allocate::<u8>(2).expect("Failed to allocate(..)");
    let dst = counting.allocate::<u8>(2).expect("Failed to allocate(..)");

    unsafe {
        counting.construct(src, 1u8);
        counting.construct(src.add(1), 2u8);
        counting.relocate(src, dst, 2);

        assert_eq!(counting.stats().live_values(), 2);
        assert_eq!(counting.stats().relocated, 2);

        counting.destroy(dst.add(1));
        counting.destroy(dst);
        counting.deallocate(src, 2);
        counting.deallocate(dst, 2);
    }

    let stats = counting.stats();
    assert_eq!(stats.constructs, 2);
    assert_eq!(stats.destroys, 2);
    assert!(stats.is_balanced());
}

#[test]
fn test_clones_share_counters() {
    let counting = CountingAllocator::new();
    let probe = counting.clone();

    assert!(probe.shares_counters_with(&counting));
    assert!(!probe.shares_counters_with(&CountingAllocator::new()));

    let block = counting.allocate::<u64>(1).expect("Failed to allocate(..)");
    assert_eq!(probe.stats().allocations, 1);

    unsafe { counting.deallocate(block, 1) };
    assert!(probe.stats().is_balanced());
}

#[test]
fn test_failed_allocation_is_not_counted() {
    let counting = CountingAllocator::new();

    assert!(counting.allocate::<u64>(usize::MAX).is_err());
    assert_eq!(counting.stats().allocations, 0);
}

// =============================================================================
// &A forwarding
// =============================================================================

#[test]
fn test_reference_forwards_every_hook() {
    let counting = CountingAllocator::new();
    let by_ref = &counting;

    let src = by_ref.allocate::<u32>(2).expect("Failed to allocate(src)");
    let dst = by_ref.allocate::<u32>(2).expect("Failed to allocate(dst)");

    unsafe {
        by_ref.construct(src, 7);
        by_ref.construct(src.add(1), 8);
        by_ref.relocate(src, dst, 2);
        assert_eq!(dst.as_ptr().read(), 7);
        assert_eq!(dst.add(1).as_ptr().read(), 8);
        by_ref.destroy(dst);
        by_ref.destroy(dst.add(1));
        by_ref.deallocate(src, 2);
        by_ref.deallocate(dst, 2);
    }

    let stats = counting.stats();
    assert_eq!(stats.allocations, 2);
    assert_eq!(stats.constructs, 2);
    assert_eq!(stats.relocated, 2);
    assert_eq!(stats.destroys, 2);
    assert!(stats.is_balanced());
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_snapshot() {
    let counting = CountingAllocator::new();

    let snapshot = format!("{:?}", counting);
    insta::assert_snapshot!(snapshot, @"CountingAllocator { stats: AllocatorStats { allocations: 0, deallocations: 0, constructs: 0, destroys: 0, relocated: 0, bytes_in_use: 0 }, .. }");
}
