//! Synthetic sample-table simulation.
//!
//! Labels are drawn uniformly from `{0, …, categories - 1}`. Features are
//! either uniform binary indicators from `{0, 1}` or uniform reals from
//! `[0.0, 1.0)`, controlled by the `numerical` flag. Everything is stored
//! as `f32`, matching the engine's training matrix element type.
//!
//! The random source is always passed in by the caller, so tests can pin a
//! seeded generator while the convenience entry points fall back to
//! thread-local entropy.

use crate::core::constants::*;
use crate::core::error::{BoostmarkError, Result};
use crate::dataset::SampleTable;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Simulation dimensions and feature distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of rows to simulate
    pub rows: usize,
    /// Number of feature columns (the label column comes on top)
    pub columns: usize,
    /// Number of label categories
    pub categories: usize,
    /// Draw features from `[0.0, 1.0)` instead of `{0, 1}`
    pub numerical: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            rows: DEFAULT_NUM_ROWS,
            columns: DEFAULT_NUM_COLUMNS,
            categories: DEFAULT_NUM_CATEGORIES,
            numerical: false,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with default dimensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row count.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the feature column count.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the label category count.
    pub fn with_categories(mut self, categories: usize) -> Self {
        self.categories = categories;
        self
    }

    /// Select numerical features from `[0.0, 1.0)`.
    pub fn with_numerical(mut self, numerical: bool) -> Self {
        self.numerical = numerical;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(BoostmarkError::invalid_parameter(
                "rows",
                self.rows.to_string(),
                "must be positive",
            ));
        }

        if self.columns == 0 {
            return Err(BoostmarkError::invalid_parameter(
                "columns",
                self.columns.to_string(),
                "must be positive",
            ));
        }

        if self.categories == 0 {
            return Err(BoostmarkError::invalid_parameter(
                "categories",
                self.categories.to_string(),
                "must be positive",
            ));
        }

        Ok(())
    }

    /// Simulate a sample table using the given random source.
    ///
    /// The result has shape `(rows, columns + 1)` with labels in column 0.
    pub fn simulate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleTable> {
        self.validate()?;

        let categories = self.categories;
        let numerical = self.numerical;
        let data = Array2::from_shape_fn((self.rows, self.columns + 1), |(_, col)| {
            if col == 0 {
                rng.gen_range(0..categories) as f32
            } else if numerical {
                rng.gen::<f32>()
            } else {
                rng.gen_range(0..2u8) as f32
            }
        });

        SampleTable::from_array(data)
    }

    /// Simulate a sample table using thread-local entropy.
    pub fn simulate(&self) -> Result<SampleTable> {
        self.simulate_with(&mut rand::thread_rng())
    }
}

/// Simulate a sample table of shape `(rows, columns + 1)` in one call.
///
/// Convenience wrapper over [`SimulationConfig`] with thread-local entropy;
/// use [`SimulationConfig::simulate_with`] when the run must be
/// reproducible.
pub fn simulate_data(
    rows: usize,
    columns: usize,
    categories: usize,
    numerical: bool,
) -> Result<SampleTable> {
    SimulationConfig {
        rows,
        columns,
        categories,
        numerical,
    }
    .simulate()
}
