// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod breaker_allocator;
mod counting_allocator;

pub use breaker_allocator::{AllocatorBehaviour, BreakerAllocator};
pub use counting_allocator::{AllocatorStats, CountingAllocator};
