use segsort_testkit::{
    data_gen::{self, DatasetKind},
    tagged::{tagged, untag},
};

use crate::{sort_block_merge, sort_kway_heap, sort_stack_balanced, strategy::Strategy, verify};

#[test]
fn test_literal_cases_both_strategies() {
    for strategy in Strategy::ALL {
        for (input, expected) in super::literal_cases() {
            let mut values = input.clone();
            strategy.sort(&mut values);
            assert_eq!(values, expected, "{strategy} on {input:?}");
        }
    }
}

#[test]
fn test_generated_datasets_match_std_sort() {
    for kind in DatasetKind::ALL {
        for len in [0, 1, 2, 3, 17, 1000, 4099] {
            let input = data_gen::generate(kind, len, len as u64);
            let mut expected = input.clone();
            expected.sort();

            for strategy in Strategy::ALL {
                let mut values = input.clone();
                strategy.sort(&mut values);
                assert_eq!(values, expected, "{strategy} on {kind} x {len}");
            }
        }
    }
}

#[test]
fn test_random_inputs_match_std_sort() {
    let mut rng = fastrand::Rng::with_seed(0x5e95);
    for _ in 0..500 {
        let input = super::random_values(&mut rng, 128);
        let mut expected = input.clone();
        expected.sort();

        let mut stack = input.clone();
        sort_stack_balanced(&mut stack);
        let mut kway = input.clone();
        sort_kway_heap(&mut kway);
        let mut block = input.clone();
        sort_block_merge(&mut block);

        assert_eq!(stack, expected, "{input:?}");
        assert_eq!(kway, expected, "{input:?}");
        assert_eq!(block, expected, "{input:?}");
    }
}

#[test]
fn test_sorting_is_idempotent() {
    for strategy in Strategy::ALL {
        let mut values = data_gen::generate(DatasetKind::Random, 2000, 9);
        strategy.sort(&mut values);
        let once = values.clone();
        strategy.sort(&mut values);
        assert_eq!(values, once, "{strategy}");
        assert!(verify::is_sorted(&values));
    }
}

#[test]
fn test_owned_and_in_place_agree() {
    let input = data_gen::generate(DatasetKind::KSorted, 3000, 4);
    for strategy in Strategy::ALL {
        let mut in_place = input.clone();
        strategy.sort(&mut in_place);
        assert_eq!(strategy.sorted(input.clone()), in_place, "{strategy}");
    }
}

#[test]
fn test_both_strategies_are_stable() {
    let mut rng = fastrand::Rng::with_seed(77);
    for kind in DatasetKind::ALL {
        let input = tagged(&data_gen::generate(kind, 1500, rng.u64(..)));
        let mut expected = input.clone();
        expected.sort();

        let mut stack = input.clone();
        sort_stack_balanced(&mut stack);
        let mut kway = input.clone();
        sort_kway_heap(&mut kway);
        let mut block = input.clone();
        sort_block_merge(&mut block);

        assert_eq!(untag(&stack), untag(&expected), "stack on {kind}");
        assert_eq!(untag(&kway), untag(&expected), "kway on {kind}");
        assert_eq!(untag(&block), untag(&expected), "block on {kind}");
    }
}

#[test]
fn test_cross_strategy_equivalence_with_duplicates() {
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..200 {
        let input = tagged(&super::random_values(&mut rng, 96));
        let stack = Strategy::StackBalanced.sorted(input.clone());
        let kway = Strategy::KWayHeap.sorted(input.clone());
        let block = Strategy::BlockMerge.sorted(input);
        assert_eq!(untag(&stack), untag(&kway));
        assert_eq!(untag(&stack), untag(&block));
    }
}
