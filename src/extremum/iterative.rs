use super::MaxMinCount;

/// Single-pass maximum and minimum.
///
/// Returns `None` for an empty sequence.
pub fn iterative_max_min<T: PartialOrd + Copy>(sequence: &[T]) -> Option<(T, T)> {
    iterative_max_min_counted(sequence).extremes
}

/// Like [`iterative_max_min`], also reporting comparisons.
///
/// Every element after the first costs exactly two comparisons, giving
/// `2 * (n - 1)` in total.
pub fn iterative_max_min_counted<T: PartialOrd + Copy>(sequence: &[T]) -> MaxMinCount<T> {
    let Some((&first, rest)) = sequence.split_first() else {
        return MaxMinCount {
            extremes: None,
            comparisons: 0,
        };
    };

    let mut maximum = first;
    let mut minimum = first;
    let mut comparisons = 0u64;

    for &value in rest {
        comparisons += 2;
        if value > maximum {
            maximum = value;
        }
        if value < minimum {
            minimum = value;
        }
    }

    MaxMinCount {
        extremes: Some((maximum, minimum)),
        comparisons,
    }
}
