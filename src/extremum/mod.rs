//! Maximum/minimum strategies.
//!
//! Each strategy comes in two forms: a plain one returning the extremes
//! and a `_counted` one that also reports how many element comparisons
//! it made. Both forms share the same code path, so the counts describe
//! exactly what the plain form does.

mod divide;
mod iterative;

pub use divide::{divide_and_conquer_max_min, divide_and_conquer_max_min_counted};
pub use iterative::{iterative_max_min, iterative_max_min_counted};

/// Extremes plus the number of element comparisons used to find them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxMinCount<T> {
    /// `(maximum, minimum)`, or `None` for an empty sequence.
    pub extremes: Option<(T, T)>,
    pub comparisons: u64,
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn strategies_agree_on_random_inputs() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..200 {
            let data: Vec<i64> = (0..len).map(|_| rng.gen_range(-50..=50)).collect();
            let expected = iterative_max_min(&data);
            assert_eq!(divide_and_conquer_max_min(&data), expected, "len {len}");

            let (max, min) = expected.expect("non-empty");
            assert!(data.iter().all(|v| *v <= max && *v >= min));
            assert!(data.contains(&max) && data.contains(&min));
        }
    }

    #[test]
    fn divide_and_conquer_uses_fewer_comparisons_on_larger_inputs() {
        let data: Vec<u32> = (0..1024).rev().collect();
        let iterative = iterative_max_min_counted(&data);
        let divided = divide_and_conquer_max_min_counted(&data);

        assert_eq!(iterative.extremes, divided.extremes);
        assert_eq!(iterative.comparisons, 2 * 1023);
        // 3n/2 - 2 for powers of two.
        assert_eq!(divided.comparisons, 3 * 1024 / 2 - 2);
    }
}
