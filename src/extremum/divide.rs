use super::MaxMinCount;

/// Recursive divide-and-conquer maximum and minimum.
///
/// Returns `None` for an empty sequence, matching
/// [`iterative_max_min`](super::iterative_max_min).
pub fn divide_and_conquer_max_min<T: PartialOrd + Copy>(sequence: &[T]) -> Option<(T, T)> {
    divide_and_conquer_max_min_counted(sequence).extremes
}

/// Like [`divide_and_conquer_max_min`], also reporting comparisons.
///
/// Halves are borrowed sub-slices split at `len / 2`. Each split halves
/// the slice, so recursion depth is bounded by `ceil(log2(len))` and
/// cannot exhaust the stack for any slice that fits in memory.
pub fn divide_and_conquer_max_min_counted<T: PartialOrd + Copy>(sequence: &[T]) -> MaxMinCount<T> {
    if sequence.is_empty() {
        return MaxMinCount {
            extremes: None,
            comparisons: 0,
        };
    }

    let mut comparisons = 0u64;
    let extremes = max_min(sequence, &mut comparisons);

    MaxMinCount {
        extremes: Some(extremes),
        comparisons,
    }
}

// `sequence` is never empty here: the base cases cover lengths 1 and 2
// and every split of a longer slice leaves both halves non-empty.
fn max_min<T: PartialOrd + Copy>(sequence: &[T], comparisons: &mut u64) -> (T, T) {
    match *sequence {
        [only] => (only, only),
        [a, b] => {
            *comparisons += 1;
            if a > b {
                (a, b)
            } else {
                (b, a)
            }
        }
        _ => {
            let (left, right) = sequence.split_at(sequence.len() / 2);
            let (left_max, left_min) = max_min(left, comparisons);
            let (right_max, right_min) = max_min(right, comparisons);

            *comparisons += 2;
            let maximum = if right_max > left_max { right_max } else { left_max };
            let minimum = if right_min < left_min { right_min } else { left_min };
            (maximum, minimum)
        }
    }
}
