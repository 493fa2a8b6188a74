//! Timed strategy comparisons.
//!
//! These functions provide the "analysis as a function" API used by the
//! CLI. Each strategy call is wrapped individually by
//! [`timing::timed`](crate::timing::timed); the binary search timing
//! includes sorting its private copy.

use tracing::debug;

use crate::dataset::Dataset;
use crate::extremum::{divide_and_conquer_max_min_counted, iterative_max_min, iterative_max_min_counted};
use crate::models::{
    DatasetOverview, ExtremumComparison, ExtremumResult, ExtremumStrategy, HistogramBin,
    SearchComparison, SearchResult, SearchStrategy, REPORT_VERSION,
};
use crate::search::{binary_search_with_trace, linear_search};
use crate::timing::timed;

/// Default number of histogram bins for [`overview`].
pub const DEFAULT_BINS: usize = 20;

/// Run linear then binary search for `key`.
pub fn compare_search<T>(sequence: &[T], key: T) -> SearchComparison<T>
where
    T: PartialOrd + Copy,
{
    let linear = timed(|| linear_search(sequence, &key));
    debug!(
        index = ?linear.value,
        elapsed_ms = linear.elapsed.as_millis_f64(),
        "linear search finished"
    );

    let binary = timed(|| binary_search_with_trace(sequence, &key));
    let (binary_index, trace) = binary.value;
    debug!(
        index = ?binary_index,
        probes = trace.len().saturating_sub(1),
        elapsed_ms = binary.elapsed.as_millis_f64(),
        "binary search finished"
    );

    SearchComparison {
        version: REPORT_VERSION.to_string(),
        key,
        dataset_len: sequence.len(),
        linear: SearchResult {
            strategy: SearchStrategy::Linear,
            index: linear.value,
            trace: Vec::new(),
            elapsed: linear.elapsed,
        },
        binary: SearchResult {
            strategy: SearchStrategy::Binary,
            index: binary_index,
            trace,
            elapsed: binary.elapsed,
        },
    }
}

/// Run the iterative then the divide-and-conquer extremum strategy.
pub fn compare_extremum<T>(sequence: &[T]) -> ExtremumComparison<T>
where
    T: PartialOrd + Copy,
{
    let iterative = timed(|| iterative_max_min_counted(sequence));
    debug!(
        comparisons = iterative.value.comparisons,
        elapsed_ms = iterative.elapsed.as_millis_f64(),
        "iterative max/min finished"
    );

    let divided = timed(|| divide_and_conquer_max_min_counted(sequence));
    debug!(
        comparisons = divided.value.comparisons,
        elapsed_ms = divided.elapsed.as_millis_f64(),
        "divide-and-conquer max/min finished"
    );

    ExtremumComparison {
        version: REPORT_VERSION.to_string(),
        dataset_len: sequence.len(),
        iterative: ExtremumResult {
            strategy: ExtremumStrategy::Iterative,
            maximum: iterative.value.extremes.map(|(max, _)| max),
            minimum: iterative.value.extremes.map(|(_, min)| min),
            comparisons: iterative.value.comparisons,
            elapsed: iterative.elapsed,
        },
        divide_and_conquer: ExtremumResult {
            strategy: ExtremumStrategy::DivideAndConquer,
            maximum: divided.value.extremes.map(|(max, _)| max),
            minimum: divided.value.extremes.map(|(_, min)| min),
            comparisons: divided.value.comparisons,
            elapsed: divided.elapsed,
        },
    }
}

/// Summary statistics and an equal-width histogram.
///
/// `bins` of zero is treated as one. When every value is equal the
/// histogram collapses to a single bin.
///
/// Values near `f64::MAX` in magnitude are handled without overflow: the
/// average divides before summing and bucket positions are computed on
/// halved operands, so `average` and every bin bound stay finite.
pub fn overview(dataset: &Dataset, bins: usize) -> DatasetOverview {
    let values = dataset.values();
    let extremes = iterative_max_min(values);

    let average = if values.is_empty() {
        None
    } else {
        let n = values.len() as f64;
        Some(values.iter().map(|value| value / n).sum::<f64>())
    };

    let histogram = match extremes {
        Some((max, min)) => histogram(values, min, max, bins.max(1)),
        None => Vec::new(),
    };

    DatasetOverview {
        version: REPORT_VERSION.to_string(),
        count: values.len(),
        maximum: extremes.map(|(max, _)| max),
        minimum: extremes.map(|(_, min)| min),
        average,
        histogram,
    }
}

fn histogram(values: &[f64], min: f64, max: f64, bins: usize) -> Vec<HistogramBin> {
    if max <= min {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    // `max - min` overflows for opposite-signed extremes near f64::MAX.
    let half_span = max * 0.5 - min * 0.5;
    let mut counts = vec![0usize; bins];
    for value in values {
        let position = (value * 0.5 - min * 0.5) / half_span;
        let slot = (position * bins as f64) as usize;
        counts[slot.min(bins - 1)] += 1;
    }

    let bound = |i: usize| {
        if i == bins {
            max
        } else {
            let t = i as f64 / bins as f64;
            min * (1.0 - t) + max * t
        }
    };

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: bound(i),
            upper: bound(i + 1),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn search_comparison_reports_both_indices() {
        let data = [5, 3, 8, 1, 9, 2];
        let result = compare_search(&data, 8);

        assert_eq!(result.dataset_len, 6);
        assert_eq!(result.linear.index, Some(2));
        assert!(result.linear.trace.is_empty());
        assert_eq!(result.binary.index, Some(4));
        assert_eq!(result.binary.trace.len(), 3);
        assert_eq!(data, [5, 3, 8, 1, 9, 2]);
    }

    #[test]
    fn search_comparison_not_found() {
        let result = compare_search(&[5, 3, 8, 1, 9, 2], 100);
        assert_eq!(result.linear.index_or_sentinel(), -1);
        assert_eq!(result.binary.index_or_sentinel(), -1);
        assert_eq!(
            result.binary.trace.last().map(ToString::to_string).as_deref(),
            Some("100 not found in the list.")
        );
    }

    #[test]
    fn searches_agree_on_membership() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let len = rng.gen_range(0..40);
            let data: Vec<i32> = (0..len).map(|_| rng.gen_range(0..20)).collect();
            let key = rng.gen_range(-2..22);
            let result = compare_search(&data, key);

            assert_eq!(result.linear.found(), data.contains(&key));
            assert_eq!(result.binary.found(), result.linear.found());

            if let Some(i) = result.linear.index {
                assert_eq!(data[i], key);
                assert!(data[..i].iter().all(|v| *v != key));
            }
            if let Some(i) = result.binary.index {
                let mut sorted = data.clone();
                sorted.sort();
                assert_eq!(sorted[i], key);
            }
        }
    }

    #[test]
    fn extremum_comparison_on_empty_input_is_absent() {
        let result = compare_extremum::<f64>(&[]);
        assert_eq!(result.iterative.maximum, None);
        assert_eq!(result.iterative.minimum, None);
        assert_eq!(result.divide_and_conquer.maximum, None);
        assert_eq!(result.divide_and_conquer.minimum, None);
    }

    #[test]
    fn extremum_comparison_agrees() {
        let result = compare_extremum(&[4, 2, 9, 9, 1]);
        assert_eq!(result.iterative.maximum, Some(9));
        assert_eq!(result.iterative.minimum, Some(1));
        assert_eq!(result.divide_and_conquer.maximum, Some(9));
        assert_eq!(result.divide_and_conquer.minimum, Some(1));
        assert_eq!(result.iterative.comparisons, 8);
        assert_eq!(result.divide_and_conquer.comparisons, 6);
    }

    #[test]
    fn overview_statistics_and_histogram() {
        let dataset = Dataset::new(vec![0.0, 1.0, 2.0, 3.0, 4.0, 10.0]).expect("dataset");
        let summary = overview(&dataset, 5);

        assert_eq!(summary.count, 6);
        assert_eq!(summary.maximum, Some(10.0));
        assert_eq!(summary.minimum, Some(0.0));
        let average = summary.average.expect("average");
        assert!((average - 20.0 / 6.0).abs() < 1e-12);

        let counts: Vec<usize> = summary.histogram.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 2, 1, 0, 1]);
        assert_eq!(summary.histogram[4].upper, 10.0);
        assert_eq!(counts.iter().sum::<usize>(), 6);
    }

    #[test]
    fn overview_stays_finite_at_extreme_magnitudes() {
        let dataset = Dataset::new(vec![-1e308, 1e308, 0.0]).expect("dataset");
        let summary = overview(&dataset, 4);

        let average = summary.average.expect("average");
        assert!(average.is_finite());
        assert!(average.abs() < 1e-300);

        assert_eq!(summary.histogram.len(), 4);
        for bin in &summary.histogram {
            assert!(bin.lower.is_finite() && bin.upper.is_finite());
            assert!(bin.lower <= bin.upper);
        }
        assert_eq!(summary.histogram[0].lower, -1e308);
        assert_eq!(summary.histogram[3].upper, 1e308);

        let counts: Vec<usize> = summary.histogram.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 0, 1, 1]);
    }

    #[test]
    fn overview_of_constant_and_empty_datasets() {
        let constant = Dataset::new(vec![3.0; 4]).expect("dataset");
        let summary = overview(&constant, DEFAULT_BINS);
        assert_eq!(summary.histogram.len(), 1);
        assert_eq!(summary.histogram[0].count, 4);

        let empty = overview(&Dataset::default(), DEFAULT_BINS);
        assert_eq!(empty.count, 0);
        assert_eq!(empty.average, None);
        assert!(empty.histogram.is_empty());
    }
}
