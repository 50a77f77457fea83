// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use core::cell::Cell;

use thiserror::Error;

/// Failure injection for [`TestBreaker`].
///
/// The behaviour is sticky - once set, it remains active until changed.
/// Call numbers are 0-based and counted from the moment the behaviour was set,
/// across every breaker spawned by the same tracker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BreakerBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// The `n`-th `try_clone()` call returns [`BreakerError::IntentionalCloneFailure`].
    FailAtTryClone(usize),
    /// The `n`-th `clone()` call panics.
    PanicAtClone(usize),
}

/// Error returned by an injected `try_clone()` failure.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BreakerError {
    /// `try_clone()` was told to fail.
    #[error("intentional clone failure")]
    IntentionalCloneFailure,
}

#[derive(Default)]
struct TrackerState {
    behaviour: Cell<BreakerBehaviour>,
    clone_calls: Cell<usize>,
    try_clone_calls: Cell<usize>,
    live: Cell<usize>,
    created: Cell<usize>,
}

/// Shared bookkeeping for a family of [`TestBreaker`] values.
///
/// Counts live instances so tests can detect leaks (count too high) and
/// double drops (count underflows, which panics).
#[derive(Clone, Default)]
pub struct BreakerTracker {
    state: Rc<TrackerState>,
}

impl BreakerTracker {
    /// Creates a tracker with no injected failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a breaker carrying `value`.
    pub fn spawn(&self, value: usize) -> TestBreaker {
        self.track();

        TestBreaker {
            value,
            state: Rc::clone(&self.state),
        }
    }

    /// Replaces the active behaviour and restarts the call counters.
    pub fn change_behaviour(&self, behaviour: BreakerBehaviour) {
        self.state.behaviour.set(behaviour);
        self.state.clone_calls.set(0);
        self.state.try_clone_calls.set(0);
    }

    /// Breakers currently alive.
    pub fn live(&self) -> usize {
        self.state.live.get()
    }

    /// Breakers ever created, clones included.
    pub fn created(&self) -> usize {
        self.state.created.get()
    }

    fn track(&self) {
        track(&self.state);
    }
}

impl core::fmt::Debug for BreakerTracker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BreakerTracker")
            .field("behaviour", &self.state.behaviour.get())
            .field("live", &self.live())
            .field("created", &self.created())
            .finish_non_exhaustive()
    }
}

fn track(state: &TrackerState) {
    state.live.set(state.live.get() + 1);
    state.created.set(state.created.get() + 1);
}

fn next_call(counter: &Cell<usize>) -> usize {
    let call = counter.get();
    counter.set(call + 1);
    call
}

/// Element type whose copies fail or panic on demand.
///
/// # Example
///
/// ```rust
/// use rampart_vec::support::test_utils::{BreakerBehaviour, BreakerTracker};
///
/// let tracker = BreakerTracker::new();
/// let breaker = tracker.spawn(7);
///
/// tracker.change_behaviour(BreakerBehaviour::FailAtTryClone(0));
/// assert!(breaker.try_clone().is_err());
/// assert_eq!(tracker.live(), 1);
/// ```
pub struct TestBreaker {
    value: usize,
    state: Rc<TrackerState>,
}

impl TestBreaker {
    /// The carried value.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Fallible copy.
    ///
    /// # Errors
    ///
    /// [`BreakerError::IntentionalCloneFailure`] when the tracker's behaviour
    /// selects this call.
    pub fn try_clone(&self) -> Result<Self, BreakerError> {
        let call = next_call(&self.state.try_clone_calls);

        if self.state.behaviour.get() == BreakerBehaviour::FailAtTryClone(call) {
            return Err(BreakerError::IntentionalCloneFailure);
        }

        track(&self.state);

        Ok(Self {
            value: self.value,
            state: Rc::clone(&self.state),
        })
    }
}

impl Clone for TestBreaker {
    fn clone(&self) -> Self {
        let call = next_call(&self.state.clone_calls);

        if self.state.behaviour.get() == BreakerBehaviour::PanicAtClone(call) {
            panic!("intentional clone panic at call {call}");
        }

        track(&self.state);

        Self {
            value: self.value,
            state: Rc::clone(&self.state),
        }
    }
}

impl PartialEq for TestBreaker {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for TestBreaker {}

impl core::fmt::Debug for TestBreaker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TestBreaker")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl Drop for TestBreaker {
    fn drop(&mut self) {
        let live = self.state.live.get();

        match live.checked_sub(1) {
            Some(live) => self.state.live.set(live),
            None => panic!("TestBreaker dropped more often than created"),
        }
    }
}
