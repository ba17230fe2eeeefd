//! Deterministic train/test partitioning.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Row indices for the train and held-out test partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    /// Indices the model is fitted on.
    pub train: Vec<usize>,
    /// Held-out indices used for evaluation only.
    pub test: Vec<usize>,
}

/// Partition `n_rows` row indices into train/test with a seeded shuffle.
///
/// The same `(n_rows, test_fraction, seed)` always produces the same
/// partition. The test partition gets `round(n_rows * test_fraction)` rows,
/// capped so at least one row stays in the train partition whenever there is
/// more than one row.
pub fn train_test_split(n_rows: usize, test_fraction: f64, seed: u64) -> SplitIndices {
    let mut indices: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let mut test_len = (n_rows as f64 * test_fraction).round() as usize;
    if test_len >= n_rows && n_rows > 1 {
        test_len = n_rows - 1;
    }

    let train = indices[test_len..].to_vec();
    let test = indices[..test_len].to_vec();
    SplitIndices { train, test }
}
