//! Property tests for the draw and group engines
//!
//! These check the exhaustion, coverage and shape guarantees over arbitrary
//! name lists, including lists with duplicate names.

use std::collections::HashMap;

use lucky_draw::domain::{DrawEngine, DrawError, GroupEngine, NameList};
use proptest::prelude::*;

/// Short names from a small alphabet so duplicates are common
fn name_list() -> impl Strategy<Value = NameList> {
    prop::collection::vec("[A-E]{1,2}", 0..24).prop_map(NameList::from)
}

fn multiset<'a>(names: impl IntoIterator<Item = &'a str>) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for name in names {
        *counts.entry(name).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn no_repeat_exhausts_after_every_name(names in name_list(), seed in any::<u64>()) {
        let mut engine = DrawEngine::seeded(names.clone(), seed);

        for _ in 0..names.len() {
            prop_assert!(engine.draw().is_ok());
        }
        prop_assert_eq!(engine.draw(), Err(DrawError::ExhaustedPool));

        let drawn = multiset(engine.history().iter());
        let listed = multiset(names.iter().map(String::as_str));
        prop_assert_eq!(drawn, listed);
    }

    #[test]
    fn repeat_never_exhausts(names in name_list(), seed in any::<u64>(), draws in 1usize..60) {
        prop_assume!(!names.is_empty());
        let mut engine = DrawEngine::seeded(names.clone(), seed);
        engine.set_allow_repeat(true);

        for _ in 0..draws {
            let winner = engine.draw();
            prop_assert!(winner.is_ok());
            let winner = winner.unwrap();
            prop_assert!(names.iter().any(|n| *n == winner));
        }
        prop_assert_eq!(engine.history().len(), draws);
    }

    #[test]
    fn reset_restores_full_pool(names in name_list(), seed in any::<u64>(), draws in 0usize..30) {
        let mut engine = DrawEngine::seeded(names.clone(), seed);
        for _ in 0..draws {
            let _ = engine.draw();
        }

        engine.reset();
        prop_assert_eq!(engine.pool_size(), names.len());
        prop_assert!(engine.history().is_empty());
    }

    #[test]
    fn pool_is_always_a_sub_multiset(names in name_list(), seed in any::<u64>(), draws in 0usize..30) {
        let mut engine = DrawEngine::seeded(names.clone(), seed);
        for _ in 0..draws {
            let _ = engine.draw();
        }

        let listed = multiset(names.iter().map(String::as_str));
        for (name, count) in multiset(engine.eligible_pool()) {
            prop_assert!(listed.get(name).copied().unwrap_or(0) >= count);
        }
    }

    #[test]
    fn partition_shape_and_coverage(names in name_list(), size in 1usize..8, seed in any::<u64>()) {
        let mut engine = GroupEngine::seeded(seed);
        let partition = engine.partition(&names, size).unwrap();

        let n = names.len();
        prop_assert_eq!(partition.len(), n.div_ceil(size));
        prop_assert!(partition.iter().all(|g| !g.is_empty() && g.len() <= size));

        // Only the last group may be short
        if let Some((last, full)) = partition.groups().split_last() {
            prop_assert!(full.iter().all(|g| g.len() == size));
            let expected_last = if n % size == 0 { size } else { n % size };
            prop_assert_eq!(last.len(), expected_last);
        }

        let grouped = multiset(partition.iter().flatten().map(String::as_str));
        let listed = multiset(names.iter().map(String::as_str));
        prop_assert_eq!(grouped, listed);
    }
}

#[test]
fn concrete_three_name_scenario() {
    let names = NameList::from(&["A", "B", "C"][..]);
    let mut engine = DrawEngine::new(names);

    let mut winners: Vec<_> = (0..3).map(|_| engine.draw().unwrap()).collect();
    winners.sort();
    assert_eq!(winners, vec!["A", "B", "C"]);
    assert_eq!(engine.draw(), Err(DrawError::ExhaustedPool));

    engine.reset();
    let again = engine.draw().unwrap();
    assert!(["A", "B", "C"].contains(&again.as_str()));
}

#[test]
fn empty_list_edge_cases() {
    let mut draw = DrawEngine::new(NameList::new());
    assert_eq!(draw.draw(), Err(DrawError::ExhaustedPool));

    let mut groups = GroupEngine::new();
    assert!(groups.partition(&NameList::new(), 3).unwrap().is_empty());
}

#[test]
fn partitions_vary_between_calls() {
    let names = NameList::from(&["A", "B", "C", "D", "E", "F", "G", "H"][..]);
    let mut engine = GroupEngine::new();

    let first = engine.partition(&names, 2).unwrap().clone();
    let distinct = (0..50)
        .filter(|_| engine.partition(&names, 2).unwrap() != &first)
        .count();

    // 8! orderings; 50 straight repeats would be astronomically unlikely
    assert!(distinct > 40, "only {} of 50 partitions differed", distinct);
}
