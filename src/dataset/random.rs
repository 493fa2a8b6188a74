use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{DataSource, Dataset, DatasetError};

/// Uniformly distributed random integers in an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSource {
    pub count: usize,
    pub min: i64,
    pub max: i64,
    /// Fixed seed for reproducible output; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for RandomSource {
    fn default() -> Self {
        RandomSource {
            count: 1000,
            min: 1,
            max: 100_000,
            seed: None,
        }
    }
}

impl DataSource for RandomSource {
    fn describe(&self) -> String {
        match self.seed {
            Some(seed) => format!(
                "random {} values in {}..={} (seed {seed})",
                self.count, self.min, self.max
            ),
            None => format!("random {} values in {}..={}", self.count, self.min, self.max),
        }
    }

    fn load(&self) -> Result<Dataset, DatasetError> {
        if self.min > self.max {
            return Err(DatasetError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let values = (0..self.count)
            .map(|_| rng.gen_range(self.min..=self.max) as f64)
            .collect();

        debug!(count = self.count, seed = ?self.seed, "generated random dataset");
        Dataset::new(values)
    }
}
