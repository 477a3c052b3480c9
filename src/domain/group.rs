//! Random grouping
//!
//! Shuffles the name list and slices it into consecutive groups of a fixed
//! size. The last group takes the remainder and may be smaller.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;

use super::names::NameList;

/// Smallest group size accepted
pub const MIN_GROUP_SIZE: usize = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error("Invalid group size: {0} (must be at least 1)")]
    InvalidGroupSize(usize),
}

/// Ordered groups of names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupPartition(Vec<Vec<String>>);

impl GroupPartition {
    pub fn groups(&self) -> &[Vec<String>] {
        &self.0
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total names across all groups
    pub fn member_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<String>> {
        self.0.iter()
    }
}

/// Produces random partitions; keeps only the most recent one
#[derive(Debug)]
pub struct GroupEngine<R = StdRng> {
    last: GroupPartition,
    rng: R,
}

impl GroupEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GroupEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GroupEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            last: GroupPartition::default(),
            rng,
        }
    }

    /// Shuffles `names` and splits them into groups of `group_size`
    ///
    /// Every call discards the previous partition. An empty list gives zero
    /// groups.
    pub fn partition(
        &mut self,
        names: &NameList,
        group_size: usize,
    ) -> Result<&GroupPartition, GroupError> {
        if group_size < MIN_GROUP_SIZE {
            return Err(GroupError::InvalidGroupSize(group_size));
        }

        let mut shuffled = names.as_slice().to_vec();
        shuffled.shuffle(&mut self.rng);

        self.last = GroupPartition(
            shuffled
                .chunks(group_size)
                .map(<[String]>::to_vec)
                .collect(),
        );
        Ok(&self.last)
    }

    /// The most recent partition (empty before the first call)
    pub fn last(&self) -> &GroupPartition {
        &self.last
    }
}

/// Reads a group size typed by an operator
///
/// Anything that is not a whole number of at least 1 becomes 1.
pub fn coerce_group_size(raw: &str) -> usize {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n >= MIN_GROUP_SIZE)
        .unwrap_or(MIN_GROUP_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> NameList {
        NameList::from(list)
    }

    #[test]
    fn five_names_in_pairs() {
        let mut engine = GroupEngine::seeded(3);
        let partition = engine.partition(&names(&["A", "B", "C", "D", "E"]), 2).unwrap();

        let sizes: Vec<_> = partition.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);

        let mut members: Vec<_> = partition.iter().flatten().cloned().collect();
        members.sort();
        assert_eq!(members, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn divisible_list_has_full_groups() {
        let mut engine = GroupEngine::seeded(3);
        let partition = engine.partition(&names(&["A", "B", "C", "D", "E", "F"]), 3).unwrap();
        assert_eq!(partition.len(), 2);
        assert!(partition.iter().all(|g| g.len() == 3));
    }

    #[test]
    fn empty_list_gives_no_groups() {
        let mut engine = GroupEngine::seeded(3);
        let partition = engine.partition(&NameList::new(), 4).unwrap();
        assert!(partition.is_empty());
    }

    #[test]
    fn zero_group_size_is_rejected() {
        let mut engine = GroupEngine::seeded(3);
        engine.partition(&names(&["A", "B"]), 1).unwrap();

        let result = engine.partition(&names(&["A", "B"]), 0);
        assert_eq!(result, Err(GroupError::InvalidGroupSize(0)));
        // The previous partition survives a rejected call
        assert_eq!(engine.last().len(), 2);
    }

    #[test]
    fn group_size_larger_than_list() {
        let mut engine = GroupEngine::seeded(3);
        let partition = engine.partition(&names(&["A", "B"]), 10).unwrap();
        assert_eq!(partition.len(), 1);
        assert_eq!(partition.member_count(), 2);
    }

    #[test]
    fn new_call_replaces_last_partition() {
        let mut engine = GroupEngine::seeded(3);
        engine.partition(&names(&["A", "B", "C", "D"]), 2).unwrap();
        engine.partition(&names(&["A", "B", "C", "D"]), 4).unwrap();
        assert_eq!(engine.last().len(), 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut engine = GroupEngine::seeded(3);
        let partition = engine.partition(&names(&["A", "A", "B"]), 2).unwrap();
        let mut members: Vec<_> = partition.iter().flatten().cloned().collect();
        members.sort();
        assert_eq!(members, vec!["A", "A", "B"]);
    }

    #[test]
    fn coerce_group_size_defaults_to_one() {
        assert_eq!(coerce_group_size("4"), 4);
        assert_eq!(coerce_group_size(" 2 "), 2);
        assert_eq!(coerce_group_size("0"), 1);
        assert_eq!(coerce_group_size("-3"), 1);
        assert_eq!(coerce_group_size("abc"), 1);
        assert_eq!(coerce_group_size(""), 1);
    }

    #[test]
    fn first_position_is_roughly_uniform() {
        let list = names(&["A", "B", "C", "D"]);
        let mut engine = GroupEngine::seeded(11);
        let mut first_counts = std::collections::HashMap::new();

        for _ in 0..4000 {
            let partition = engine.partition(&list, 2).unwrap();
            let first = partition.groups()[0][0].clone();
            *first_counts.entry(first).or_insert(0) += 1;
        }

        assert_eq!(first_counts.len(), 4);
        for count in first_counts.values() {
            assert!((800..1200).contains(count), "count {} out of range", count);
        }
    }
}
