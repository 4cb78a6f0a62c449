//! In-memory data transformations.

pub mod split;

pub use split::{Partition, partition, split_sizes, train_test_split};
