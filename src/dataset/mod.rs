//! Sample-table management: simulation and train/validation splitting.
//!
//! The [`SampleTable`] is the only data structure the harness owns. It is
//! created once per benchmark run by the simulator, split once into
//! contiguous train/validation views, handed to the engine's matrix
//! conversion, and dropped. Nothing here persists to disk.

pub mod simulate;
pub mod split;

pub use simulate::{simulate_data, SimulationConfig};
pub use split::TrainValidSplit;

use crate::core::error::{BoostmarkError, Result};
use crate::core::types::{Feature, Label};
use ndarray::{s, Array2, ArrayView1, ArrayView2};

/// Row-major table of labels and features.
///
/// Shape is `(rows, 1 + num_features)`: column 0 holds the label as an
/// integer category stored in floating point, columns `1..` hold the
/// feature values. The label and feature accessors return borrowed views;
/// no data is copied until the engine's matrix conversion decides to.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    data: Array2<f32>,
}

impl SampleTable {
    /// Wrap an existing array as a sample table.
    ///
    /// The array needs a label column and at least one feature column.
    pub fn from_array(data: Array2<f32>) -> Result<Self> {
        if data.ncols() < 2 {
            return Err(BoostmarkError::dataset(format!(
                "sample table needs a label column and at least one feature column, got {} columns",
                data.ncols()
            )));
        }
        Ok(SampleTable { data })
    }

    /// Get the number of rows.
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Get the number of feature columns (label column excluded).
    pub fn num_features(&self) -> usize {
        self.data.ncols() - 1
    }

    /// Get the label vector view (column 0).
    pub fn labels(&self) -> ArrayView1<'_, Label> {
        self.data.slice(s![.., 0])
    }

    /// Get the feature matrix view (columns `1..`).
    pub fn features(&self) -> ArrayView2<'_, Feature> {
        self.data.slice(s![.., 1..])
    }

    /// Get the underlying array.
    pub fn as_array(&self) -> &Array2<f32> {
        &self.data
    }

    /// Split into contiguous train/validation views.
    ///
    /// The training partition covers rows `[0, floor(rows * train_fraction))`
    /// and the validation partition covers the rest. See
    /// [`TrainValidSplit::new`] for the full contract.
    pub fn split(&self, train_fraction: f64) -> Result<TrainValidSplit<'_>> {
        TrainValidSplit::new(self, train_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_array_accessors() {
        let data = array![[1.0, 0.5, 0.25], [0.0, 0.75, 0.125]];
        let table = SampleTable::from_array(data).unwrap();

        assert_eq!(table.rows(), 2);
        assert_eq!(table.num_features(), 2);
        assert_eq!(table.labels().to_vec(), vec![1.0, 0.0]);
        assert_eq!(table.features().shape(), &[2, 2]);
        assert_eq!(table.features()[[0, 0]], 0.5);
        assert_eq!(table.features()[[1, 1]], 0.125);
    }

    #[test]
    fn test_from_array_rejects_missing_features() {
        let data = Array2::zeros((4, 1));
        assert!(SampleTable::from_array(data).is_err());
    }
}
