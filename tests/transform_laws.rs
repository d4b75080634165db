//! Property-based tests for the transform family.
//!
//! These properties pin down the behavioral contract:
//!
//! - `map` is length-preserving and pointwise
//! - `filter` preserves relative order and keeps exactly the satisfying
//!   elements
//! - `reduce` agrees with the standard left fold
//! - `try_map` either succeeds completely or fails with no partial result
//! - index-oblivious forms agree with their index-aware counterparts

use proptest::prelude::*;
use seqfn::seq::{
    filter, filter_with_index, flat_map, map, map_with_index, reduce, try_map,
};

proptest! {
    /// map preserves length and applies the iteratee pointwise.
    #[test]
    fn prop_map_is_pointwise(values in any::<Vec<i32>>()) {
        let mapped = map(&values, |element| element.wrapping_mul(2));

        prop_assert_eq!(mapped.len(), values.len());
        for (index, element) in values.iter().enumerate() {
            prop_assert_eq!(mapped[index], element.wrapping_mul(2));
        }
    }

    /// map_with_index sees indices 0..len in order.
    #[test]
    fn prop_map_with_index_enumerates(values in any::<Vec<i32>>()) {
        let indices = map_with_index(&values, |_, index| index);
        let expected: Vec<usize> = (0..values.len()).collect();

        prop_assert_eq!(indices, expected);
    }

    /// filter keeps exactly the satisfying elements, in order.
    #[test]
    fn prop_filter_agrees_with_iterator_filter(values in any::<Vec<i32>>()) {
        let kept = filter(&values, |element| element % 3 == 0);
        let expected: Vec<i32> = values.iter().filter(|element| *element % 3 == 0).copied().collect();

        prop_assert_eq!(kept, expected);
    }

    /// filter output is a subsequence of the input.
    #[test]
    fn prop_filter_with_index_preserves_relative_order(values in any::<Vec<i32>>()) {
        let kept = filter_with_index(&values, |_, index| index % 2 == 0);

        let mut cursor = values.iter();
        for element in &kept {
            prop_assert!(cursor.any(|candidate| candidate == element));
        }
    }

    /// reduce agrees with Iterator::fold.
    #[test]
    fn prop_reduce_agrees_with_fold(values in any::<Vec<i64>>(), initial in any::<i64>()) {
        let folded = reduce(&values, |accumulator, element| accumulator.wrapping_add(*element), initial);
        let expected = values.iter().fold(initial, |accumulator, element| accumulator.wrapping_add(*element));

        prop_assert_eq!(folded, expected);
    }

    /// flat_map with a singleton iteratee is map.
    #[test]
    fn prop_flat_map_singleton_is_map(values in any::<Vec<i32>>()) {
        let flat = flat_map(&values, |element| vec![element.wrapping_add(1)]);
        let mapped = map(&values, |element| element.wrapping_add(1));

        prop_assert_eq!(flat, mapped);
    }

    /// flat_map concatenates subsequences in order.
    #[test]
    fn prop_flat_map_concatenates(values in any::<Vec<i32>>()) {
        let doubled = flat_map(&values, |element| vec![*element, *element]);

        prop_assert_eq!(doubled.len(), values.len() * 2);
        for (index, element) in values.iter().enumerate() {
            prop_assert_eq!(doubled[index * 2], *element);
            prop_assert_eq!(doubled[index * 2 + 1], *element);
        }
    }

    /// try_map with an infallible iteratee behaves like map.
    #[test]
    fn prop_try_map_infallible_is_map(values in any::<Vec<i32>>()) {
        let tried: Result<Vec<i32>, String> = try_map(&values, |element| Ok(element.wrapping_mul(3)));
        let mapped = map(&values, |element| element.wrapping_mul(3));

        prop_assert_eq!(tried, Ok(mapped));
    }

    /// try_map fails with no partial result whenever any element trips the
    /// iteratee, regardless of position.
    #[test]
    fn prop_try_map_short_circuits(values in prop::collection::vec(0i32..100, 0..50), trip in 0i32..100) {
        let result: Result<Vec<i32>, i32> = try_map(&values, |element| {
            if *element == trip { Err(*element) } else { Ok(*element) }
        });

        if values.contains(&trip) {
            prop_assert_eq!(result, Err(trip));
        } else {
            prop_assert_eq!(result, Ok(values.clone()));
        }
    }
}
