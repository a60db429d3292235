//! Frequency helpers shared by the aggregators.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value with its count.
///
/// Tie-break rule: when several values share the maximum count, the one whose
/// first occurrence comes earliest in iteration order wins. The result is
/// therefore deterministic for a fixed input ordering.
pub fn mode_with_count<T, I>(values: I) -> Option<(T, usize)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let counts = count_with_first_index(values);
    counts
        .into_iter()
        .min_by_key(|&(_, (count, first))| (Reverse(count), first))
        .map(|(value, (count, _))| (value, count))
}

/// Distinct values with their counts, ordered by descending count; ties keep
/// first-occurrence order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let counts = count_with_first_index(values);
    let mut entries: Vec<_> = counts.into_iter().collect();
    entries.sort_by_key(|&(_, (count, first))| (Reverse(count), first));
    entries
        .into_iter()
        .map(|(value, (count, _))| (value, count))
        .collect()
}

fn count_with_first_index<T, I>(values: I) -> HashMap<T, (usize, usize)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, index));
        entry.0 += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::{mode_with_count, value_counts};

    #[test]
    fn mode_picks_highest_count() {
        let values = ["a", "b", "b", "c", "b"];
        assert_eq!(mode_with_count(values), Some(("b", 3)));
    }

    #[test]
    fn mode_tie_breaks_by_first_occurrence() {
        let values = ["y", "x", "x", "y"];
        assert_eq!(mode_with_count(values), Some(("y", 2)));
        let values = ["x", "y", "y", "x"];
        assert_eq!(mode_with_count(values), Some(("x", 2)));
    }

    #[test]
    fn mode_of_empty_is_none() {
        assert_eq!(mode_with_count(Vec::<u32>::new()), None);
    }

    #[test]
    fn value_counts_order_is_count_then_first_occurrence() {
        let values = ["b", "a", "a", "c", "c", "a"];
        assert_eq!(value_counts(values), vec![("a", 3), ("c", 2), ("b", 1)]);
        // Tied counts keep input order of first occurrence.
        let values = ["n", "m", "m", "n"];
        assert_eq!(value_counts(values), vec![("n", 2), ("m", 2)]);
    }
}
