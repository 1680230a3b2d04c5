use crate::{
    BasicDedup, DedupInPlace as _, Order, SortDedup, Strategy, count_comparisons, is_correct_dedup,
};
use itertools::Itertools as _;
use proptest::{prelude::*, strategy::Strategy as Generator};

const SIZE: usize = 60;

/// Short words over a tiny alphabet, so that duplicates are common.
fn words() -> impl Generator<Value = Vec<String>> {
    proptest::collection::vec("[a-d]{0,3}", 0..SIZE)
}

fn expected(strategy: Strategy, input: &[String]) -> Vec<String> {
    match strategy.order() {
        Order::FirstOccurrence => input.iter().unique().cloned().collect(),
        Order::Sorted => input.iter().sorted().dedup().cloned().collect(),
    }
}

// to make sure that tests are not accidentally run without debug asserts.
#[should_panic]
#[test]
fn debug_assert_is_enabled() {
    debug_assert!(false);
}

proptest! {
    #[test]
    fn matches_reference(input in words()) {
        for strategy in Strategy::ALL {
            let output = strategy.dedup(&input);
            prop_assert_eq!(&output, &expected(strategy, &input), "{}", strategy);
        }
    }

    #[test]
    fn is_a_correct_dedup(input in words()) {
        for strategy in Strategy::ALL {
            let output = strategy.dedup(&input);
            prop_assert!(output.len() <= input.len());
            prop_assert!(output.iter().all(|w| input.contains(w)));
            prop_assert!(is_correct_dedup(&input, &output), "{}", strategy);
        }
    }

    #[test]
    fn idempotent(input in words()) {
        for strategy in Strategy::ALL {
            let once = strategy.dedup(&input);
            let twice = strategy.dedup(&once);
            prop_assert_eq!(once, twice, "{}", strategy);
        }
    }

    #[test]
    fn in_place_agrees(input in words()) {
        let mut basic = input.clone();
        BasicDedup.dedup_in_place(&mut basic);
        prop_assert_eq!(&basic, &Strategy::Basic.dedup(&input));

        let mut sort = input.clone();
        SortDedup.dedup_in_place(&mut sort);
        prop_assert_eq!(&sort, &Strategy::Sort.dedup(&input));
    }

    #[test]
    fn comparisons_bounded((len, copies) in (1..SIZE, 1..5_usize)) {
        // `len` distinct values, each repeated `copies` times in a row.
        let mut v: Vec<usize> = (0..len).flat_map(|i| std::iter::repeat_n(i, copies)).collect();
        let n = v.len();
        let comparisons = count_comparisons(&mut v);
        prop_assert!(comparisons >= n - 1);
        prop_assert!(comparisons <= n * (n - 1) / 2);
        prop_assert_eq!(v.len(), len);
    }
}

#[test]
fn boundaries() {
    for strategy in Strategy::ALL {
        assert_eq!(strategy.dedup::<String>(&[]), Vec::<String>::new());
        let same = vec!["same".to_owned(); 17];
        assert_eq!(strategy.dedup(&same), ["same"]);
    }
}

#[test]
fn order_examples() {
    let input: Vec<String> = ["a", "b", "a", "c", "b"].map(String::from).into();
    for strategy in Strategy::ALL {
        assert_eq!(strategy.dedup(&input), ["a", "b", "c"], "{strategy}");
    }

    let input: Vec<String> = ["b", "a", "b", "a"].map(String::from).into();
    for strategy in Strategy::ALL {
        let expected = match strategy.order() {
            Order::FirstOccurrence => ["b", "a"],
            Order::Sorted => ["a", "b"],
        };
        assert_eq!(strategy.dedup(&input), expected, "{strategy}");
    }
}
