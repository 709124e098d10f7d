//! Property-based and example tests for in-place filtering.

use std::collections::VecDeque;

use optfield::filter::{RemoveIf, filter};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1, 3, 5], vec![1, 3, 5])]
#[case(vec![2, 4], vec![])]
#[case(vec![1, 2, 3, 4, 5], vec![1, 3, 5])]
fn filter_removes_even_numbers(#[case] mut input: Vec<i32>, #[case] expected: Vec<i32>) {
    filter(&mut input, |n| n % 2 == 0);
    assert_eq!(input, expected);
}

#[rstest]
fn filter_tolerates_predicates_over_missing_fields() {
    let mut values = vec![Some(1), None, Some(3)];
    filter(&mut values, Option::is_some);
    assert_eq!(values, vec![None]);
}

#[rstest]
fn remove_if_on_vec_deque() {
    let mut values: VecDeque<i32> = (1..=6).collect();
    assert_eq!(values.remove_if(|n| *n <= 3), 3);
    assert_eq!(values, VecDeque::from(vec![4, 5, 6]));
}

proptest! {
    #[test]
    fn prop_filter_matches_iterator_filter(values in prop::collection::vec(any::<i16>(), 0..64)) {
        let expected: Vec<i16> = values.iter().copied().filter(|n| *n >= 0).collect();

        let mut actual = values;
        filter(&mut actual, |n| *n < 0);

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_two_passes_compose_as_set_difference(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut sequential = values.clone();
        filter(&mut sequential, |n| n % 3 == 0);
        filter(&mut sequential, |n| n % 5 == 0);

        let mut combined = values;
        filter(&mut combined, |n| n % 3 == 0 || n % 5 == 0);

        prop_assert_eq!(sequential, combined);
    }
}
