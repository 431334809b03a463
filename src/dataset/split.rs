//! Contiguous train/validation splitting.

use crate::core::error::{BoostmarkError, Result};
use crate::core::types::{Feature, Label};
use crate::dataset::SampleTable;
use ndarray::{s, ArrayView1, ArrayView2};

/// Borrowed train/validation partition of a [`SampleTable`].
///
/// The training partition is the row prefix `[0, split_index)` and the
/// validation partition is the suffix `[split_index, rows)`; no shuffling
/// happens here, rows keep the order the simulator produced. Both
/// partitions together cover every row exactly once. Splitting the same
/// table with the same fraction twice yields identical partitions.
#[derive(Debug, Clone)]
pub struct TrainValidSplit<'a> {
    train_features: ArrayView2<'a, Feature>,
    train_labels: ArrayView1<'a, Label>,
    valid_features: ArrayView2<'a, Feature>,
    valid_labels: ArrayView1<'a, Label>,
    split_index: usize,
}

impl<'a> TrainValidSplit<'a> {
    /// Split a table at `split_index = floor(rows * train_fraction)`.
    ///
    /// `train_fraction` must lie strictly inside `(0.0, 1.0)`. An empty
    /// training partition (small table, small fraction) is legal; the
    /// views simply have zero rows.
    pub fn new(table: &'a SampleTable, train_fraction: f64) -> Result<Self> {
        if !(train_fraction > 0.0 && train_fraction < 1.0) {
            return Err(BoostmarkError::invalid_parameter(
                "train_fraction",
                train_fraction.to_string(),
                "must be in range (0.0, 1.0)",
            ));
        }

        let split_index = (table.rows() as f64 * train_fraction).floor() as usize;
        let data = table.as_array();

        Ok(TrainValidSplit {
            train_features: data.slice(s![..split_index, 1..]),
            train_labels: data.slice(s![..split_index, 0]),
            valid_features: data.slice(s![split_index.., 1..]),
            valid_labels: data.slice(s![split_index.., 0]),
            split_index,
        })
    }

    /// Get the training feature matrix view.
    pub fn train_features(&self) -> ArrayView2<'a, Feature> {
        self.train_features.clone()
    }

    /// Get the training label vector view.
    pub fn train_labels(&self) -> ArrayView1<'a, Label> {
        self.train_labels.clone()
    }

    /// Get the validation feature matrix view.
    pub fn valid_features(&self) -> ArrayView2<'a, Feature> {
        self.valid_features.clone()
    }

    /// Get the validation label vector view.
    pub fn valid_labels(&self) -> ArrayView1<'a, Label> {
        self.valid_labels.clone()
    }

    /// Get the row offset separating the two partitions.
    pub fn split_index(&self) -> usize {
        self.split_index
    }

    /// Get the number of training rows.
    pub fn num_train(&self) -> usize {
        self.train_features.nrows()
    }

    /// Get the number of validation rows.
    pub fn num_valid(&self) -> usize {
        self.valid_features.nrows()
    }
}
