//! Identifier allocation
//!
//! New records take the smallest positive integer not already in use, so
//! ids freed by deletions are reused before the sequence grows.

use std::collections::BTreeSet;

/// Returns the smallest positive id not present in `used_ids`.
///
/// Absent (`None`) and non-positive entries are ignored. Duplicates are
/// harmless. An empty input yields 1.
///
/// ```
/// use shopdb::identity::next_available_id;
///
/// assert_eq!(next_available_id([1, 2, 4]), 3);
/// assert_eq!(next_available_id([2, 3, 4]), 1);
/// assert_eq!(next_available_id([1, 2, 3]), 4);
/// assert_eq!(next_available_id(Vec::<i64>::new()), 1);
/// assert_eq!(next_available_id([Some(1i64), None, Some(3)]), 2);
/// ```
pub fn next_available_id<I, T>(used_ids: I) -> i64
where
    I: IntoIterator<Item = T>,
    T: Into<Option<i64>>,
{
    let sorted: BTreeSet<i64> = used_ids
        .into_iter()
        .filter_map(|id| -> Option<i64> { id.into() })
        .filter(|id| *id > 0)
        .collect();

    let mut expected = 1;
    for id in sorted {
        if id > expected {
            // Gap found
            break;
        }
        if id == expected {
            expected += 1;
        }
    }

    expected
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference answer by direct search
    fn smallest_missing(ids: &[i64]) -> i64 {
        (1..).find(|candidate| !ids.contains(candidate)).unwrap_or(1)
    }

    #[test]
    fn test_documented_cases() {
        assert_eq!(next_available_id([1, 2, 4]), 3);
        assert_eq!(next_available_id(Vec::<i64>::new()), 1);
        assert_eq!(next_available_id([2, 3, 4]), 1);
        assert_eq!(next_available_id([1, 2, 3]), 4);
    }

    #[test]
    fn test_none_and_non_positive_are_ignored() {
        assert_eq!(next_available_id([None::<i64>, None]), 1);
        assert_eq!(next_available_id([Some(0i64), Some(-5), Some(1)]), 2);
        assert_eq!(next_available_id([-1, 0, -2]), 1);
    }

    #[test]
    fn test_unsorted_and_duplicated_input() {
        assert_eq!(next_available_id([3, 1, 1, 2, 3]), 4);
        assert_eq!(next_available_id([5, 2, 1, 2]), 3);
    }

    #[test]
    fn test_matches_smallest_missing_positive() {
        // Every subset of -2..=7
        let universe: Vec<i64> = (-2..=7).collect();
        for mask in 0u32..(1 << universe.len()) {
            let subset: Vec<i64> = universe
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, id)| *id)
                .collect();

            assert_eq!(
                next_available_id(subset.iter().copied()),
                smallest_missing(&subset),
                "subset: {:?}",
                subset
            );
        }
    }

    #[test]
    fn test_large_sparse_ids() {
        assert_eq!(next_available_id([1_000_000, 1]), 2);
        assert_eq!(next_available_id([i64::MAX]), 1);
    }
}
