// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod logging_tests {
    use std::sync::{Mutex, Once};

    use log::{Level, LevelFilter, Log, Metadata, Record};
    use rampart::support::test_utils::alloc::{AllocatorBehaviour, BreakerAllocator};
    use rampart::Vector;

    struct Capture {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for Capture {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture {
        records: Mutex::new(Vec::new()),
    };
    static INIT: Once = Once::new();

    fn install() {
        INIT.call_once(|| {
            log::set_logger(&CAPTURE).expect("Failed to set_logger(..)");
            log::set_max_level(LevelFilter::Trace);
        });
    }

    fn captured(level: Level, needle: &str) -> bool {
        CAPTURE
            .records
            .lock()
            .expect("Failed to lock()")
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }

    #[test]
    fn test_reallocation_is_traced() {
        install();

        let mut vector = Vector::new();
        for i in 0..3u16 {
            vector.push(i).expect("Failed to push(..)");
        }

        assert!(captured(Level::Trace, "capacity 2 -> 4"));
    }

    #[test]
    fn test_failed_allocation_is_logged_at_debug() {
        install();

        let breaker = BreakerAllocator::new();
        breaker.change_behaviour(AllocatorBehaviour::FailAtAllocate);
        let mut vector: Vector<u32, _> = Vector::new_in(breaker);

        assert!(vector.reserve(7).is_err());
        assert!(captured(Level::Debug, "allocation of 7 slots failed"));
    }
}
