use std::cmp::Ordering;

use crate::models::TraceStep;

/// Binary search over a sorted copy of `sequence`, recording every probe.
///
/// The caller's slice is left untouched; sorting happens on a private
/// copy owned by this call. The returned index refers to that sorted
/// copy. The trace holds one `Probe` per comparison followed by a single
/// `Found` or `NotFound` record.
///
/// Elements must be totally ordered in practice (no NaN); the dataset
/// loader rejects unordered values before they reach this function.
pub fn binary_search_with_trace<T>(sequence: &[T], key: &T) -> (Option<usize>, Vec<TraceStep<T>>)
where
    T: PartialOrd + Copy,
{
    let mut sorted = sequence.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut steps = Vec::new();

    if sorted.is_empty() {
        steps.push(TraceStep::NotFound { key: *key });
        return (None, steps);
    }

    let mut low = 0usize;
    let mut high = sorted.len() - 1;

    while low <= high {
        let mid = (low + high) / 2;
        let value = sorted[mid];
        steps.push(TraceStep::Probe {
            low,
            high,
            mid,
            value,
        });

        match value.partial_cmp(key) {
            Some(Ordering::Equal) => {
                steps.push(TraceStep::Found {
                    key: *key,
                    index: mid,
                });
                return (Some(mid), steps);
            }
            Some(Ordering::Greater) => match mid.checked_sub(1) {
                Some(next) => high = next,
                // high would drop below zero; the bounds have crossed.
                None => break,
            },
            _ => low = mid + 1,
        }
    }

    steps.push(TraceStep::NotFound { key: *key });
    (None, steps)
}
