// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod scenarios_tests {
    use rampart::{Vector, VectorError, vector};

    #[test]
    fn test_reserve_on_empty() {
        let mut vector: Vector<i32> = Vector::new();

        vector.reserve(5).expect("Failed to reserve(5)");

        assert!(vector.capacity() >= 5);
        assert_eq!(vector.len(), 0);
    }

    #[test]
    fn test_push_one_at_a_time_doubles_capacity() {
        let mut vector = Vector::new();
        let mut capacities = vec![vector.capacity()];

        for i in 1..=5 {
            vector.push(i).expect("Failed to push(..)");
            capacities.push(vector.capacity());
        }
        capacities.dedup();

        assert_eq!(vector, [1, 2, 3, 4, 5]);
        assert_eq!(capacities, [0, 1, 2, 4, 8]);
    }

    #[test]
    fn test_insert_then_erase_range() {
        let mut vector = vector![1, 2, 3, 4];

        vector.insert(2, 99).expect("Failed to insert(..)");
        assert_eq!(vector, [1, 2, 99, 3, 4]);

        vector.erase_range(1..3).expect("Failed to erase_range(..)");
        assert_eq!(vector, [1, 3, 4]);
    }

    #[test]
    fn test_assign_fill_replaces_contents() {
        let mut vector = vector!['a', 'b'];

        vector.assign_fill(3, 'x').expect("Failed to assign_fill(..)");

        assert_eq!(vector, ['x', 'x', 'x']);
    }

    #[test]
    fn test_checked_access_at_the_boundary() {
        let vector = vector![5, 6, 7];
        let len = vector.len();

        assert_eq!(
            vector.at(len),
            Err(VectorError::OutOfRange { index: len, len })
        );
        assert_eq!(vector.at(len - 1), Ok(&7));
    }

    #[test]
    fn test_move_leaves_source_reusable() {
        let mut source = vector![String::from("kept")];

        let moved = core::mem::take(&mut source);

        assert_eq!(moved, ["kept"]);
        assert_eq!(source.len(), 0);
        assert_eq!(source.capacity(), 0);

        source.push(String::from("again")).expect("Failed to push(..)");
        assert_eq!(source, ["again"]);
    }

    #[test]
    fn test_error_messages() {
        let mut vector = vector![1, 2, 3];

        let out_of_range = vector.at(9).expect_err("Expected at(9) to fail");
        let bad_range = vector.erase_range(2..1).expect_err("Expected erase_range(2..1) to fail");
        let length = vector.reserve(usize::MAX).expect_err("Expected reserve(usize::MAX) to fail");

        insta::assert_snapshot!(out_of_range, @"out of range: index 9 with length 3");
        insta::assert_snapshot!(bad_range, @"out of range: index 2 with length 3");
        insta::assert_snapshot!(
            length,
            @"length error: requested 18446744073709551615 elements, max_size is 2305843009213693951"
        );
    }

    #[test]
    fn test_swap_free_function() {
        let mut left = vector![1, 2];
        let mut right = vector![3];

        rampart::swap(&mut left, &mut right);

        assert_eq!(left, [3]);
        assert_eq!(right, [1, 2]);
    }
}
