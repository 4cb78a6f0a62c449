//! Seeded train/test partition of dataset rows.
//!
//! The row indices are shuffled with a `StdRng` seeded from `SplitSpec::seed`
//! (Fisher-Yates via `SliceRandom::shuffle`). The first `ceil(test_size * n)`
//! shuffled rows form the test partition and the remainder the train
//! partition, both kept in shuffled order. Every row lands in exactly one
//! partition.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::domain::{Dataset, SplitSpec};
use crate::error::{IngestResult, IngestionFailure, Stage};

/// Row indices into the source dataset for each partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Number of `(train, test)` rows for `n_rows` under `test_size`.
pub fn split_sizes(n_rows: usize, test_size: f64) -> IngestResult<(usize, usize)> {
    if !(test_size.is_finite() && test_size > 0.0 && test_size < 1.0) {
        return Err(IngestionFailure::new(
            Stage::Split,
            format!("test_size must be in the open interval (0, 1), got {test_size}."),
        ));
    }
    if n_rows == 0 {
        return Err(IngestionFailure::new(
            Stage::Split,
            "Dataset has no rows; nothing to split.",
        ));
    }

    let n_test = (test_size * n_rows as f64).ceil() as usize;
    let n_train = n_rows.saturating_sub(n_test);

    if n_train == 0 {
        return Err(IngestionFailure::new(
            Stage::Split,
            format!(
                "With n_samples={n_rows} and test_size={test_size}, the train partition would be empty."
            ),
        ));
    }

    Ok((n_train, n_test))
}

/// Compute the partition of `0..n_rows` for `spec`.
pub fn partition(n_rows: usize, spec: &SplitSpec) -> IngestResult<Partition> {
    let (n_train, n_test) = split_sizes(n_rows, spec.test_size)?;

    let mut order: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(spec.seed);
    order.shuffle(&mut rng);

    let train = order.split_off(n_test);
    debug_assert_eq!(train.len(), n_train);

    log::debug!(
        "Partitioned {n_rows} rows: {} train, {} test (seed={})",
        train.len(),
        order.len(),
        spec.seed
    );

    Ok(Partition { train, test: order })
}

/// Split a dataset's rows into `(train, test)` datasets sharing its header.
pub fn train_test_split(dataset: &Dataset, spec: &SplitSpec) -> IngestResult<(Dataset, Dataset)> {
    let Partition { train, test } = partition(dataset.n_rows(), spec)?;

    let pick = |idx: &[usize]| Dataset {
        headers: dataset.headers.clone(),
        rows: idx.iter().map(|&i| dataset.rows[i].clone()).collect(),
    };

    Ok((pick(&train), pick(&test)))
}
