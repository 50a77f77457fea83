// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Failure-injection fixtures for exercising rollback paths.

mod test_breaker;

pub use test_breaker::{BreakerBehaviour, BreakerError, BreakerTracker, TestBreaker};
