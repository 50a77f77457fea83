// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod custom_allocator_tests {
    use core::cell::{Cell, RefCell};
    use core::ptr::NonNull;
    use std::rc::Rc;

    use rampart::alloc::{AllocError, Allocator, Global};
    use rampart::{Vector, VectorError};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Allocate(usize),
        Deallocate(usize),
        Construct,
        Destroy,
        Relocate(usize),
    }

    /// Records every capability call in order.
    #[derive(Clone, Default)]
    struct Journal {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl Journal {
        fn take(&self) -> Vec<Event> {
            self.events.borrow_mut().drain(..).collect()
        }

        fn record(&self, event: Event) {
            self.events.borrow_mut().push(event);
        }
    }

    unsafe impl Allocator for Journal {
        fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
            self.record(Event::Allocate(n));
            Global.allocate(n)
        }

        unsafe fn deallocate<T>(&self, block: NonNull<T>, n: usize) {
            self.record(Event::Deallocate(n));
            unsafe { Global.deallocate(block, n) }
        }

        unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
            self.record(Event::Construct);
            unsafe { Global.construct(slot, value) }
        }

        unsafe fn destroy<T>(&self, slot: NonNull<T>) {
            self.record(Event::Destroy);
            unsafe { Global.destroy(slot) }
        }

        unsafe fn relocate<T>(&self, src: NonNull<T>, dst: NonNull<T>, n: usize) {
            self.record(Event::Relocate(n));
            unsafe { Global.relocate(src, dst, n) }
        }
    }

    /// Hands out at most `budget` bytes in total and never reuses them.
    struct Budget {
        remaining: Cell<usize>,
    }

    impl Budget {
        fn new(budget: usize) -> Self {
            Self {
                remaining: Cell::new(budget),
            }
        }
    }

    unsafe impl Allocator for Budget {
        fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
            let bytes = core::mem::size_of::<T>() * n;

            match self.remaining.get().checked_sub(bytes) {
                Some(left) => {
                    self.remaining.set(left);
                    Global.allocate(n)
                }
                None => Err(AllocError::OutOfMemory { bytes }),
            }
        }

        unsafe fn deallocate<T>(&self, block: NonNull<T>, n: usize) {
            unsafe { Global.deallocate(block, n) }
        }

        fn max_size<T>(&self) -> usize {
            64
        }
    }

    #[test]
    fn test_growth_allocates_before_relocating_and_releasing() {
        let journal = Journal::default();
        let mut vector = Vector::new_in(journal.clone());

        vector.push(1u32).expect("Failed to push(1)");
        assert_eq!(journal.take(), [Event::Allocate(1), Event::Construct]);

        vector.push(2u32).expect("Failed to push(2)");
        assert_eq!(
            journal.take(),
            [
                Event::Allocate(2),
                Event::Relocate(1),
                Event::Deallocate(1),
                Event::Construct,
            ]
        );
    }

    #[test]
    fn test_destruction_goes_through_allocator() {
        let journal = Journal::default();
        let mut vector = Vector::new_in(journal.clone());
        vector.extend_from_slice(&[1, 2, 3]).expect("Failed to extend_from_slice(..)");
        journal.take();

        vector.erase(1).expect("Failed to erase(1)");
        assert_eq!(journal.take(), [Event::Destroy]);

        drop(vector);
        assert_eq!(
            journal.take(),
            [Event::Destroy, Event::Destroy, Event::Deallocate(3)]
        );
    }

    #[test]
    fn test_shrink_to_fit_relocates_then_releases() {
        let journal = Journal::default();
        let mut vector = Vector::with_capacity_in(8, journal.clone()).expect("Failed to with_capacity_in(..)");
        vector.push('a').expect("Failed to push(..)");
        journal.take();

        vector.shrink_to_fit().expect("Failed to shrink_to_fit()");

        assert_eq!(
            journal.take(),
            [Event::Allocate(1), Event::Relocate(1), Event::Deallocate(8)]
        );
    }

    #[test]
    fn test_out_of_memory_is_reported() {
        let mut vector = Vector::new_in(Budget::new(3 * core::mem::size_of::<u64>()));

        vector.push(1u64).expect("Failed to push(1)");
        vector.push(2u64).expect("Failed to push(2)");

        assert_eq!(
            vector.push(3u64),
            Err(VectorError::Alloc(AllocError::OutOfMemory { bytes: 32 }))
        );
        assert_eq!(vector, [1, 2]);
        assert_eq!(vector.capacity(), 2);
    }

    #[test]
    fn test_allocator_max_size_bounds_reserve() {
        let mut vector: Vector<u8, _> = Vector::new_in(Budget::new(usize::MAX));

        assert_eq!(
            vector.reserve(65),
            Err(VectorError::Length {
                requested: 65,
                max: 64
            })
        );
        vector.reserve(64).expect("Failed to reserve(64)");
        assert_eq!(vector.capacity(), 64);
    }
}
