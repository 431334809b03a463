//! External boosting engine interface.
//!
//! The harness never constructs trees, histograms, or GPU kernels itself;
//! it hands data and parameters to an engine behind this trait and times
//! the result. Implementations wrap whatever engine is being benchmarked.

use crate::config::TrainingParams;
use crate::core::error::Result;
use crate::core::types::{Feature, Label};
use ndarray::{ArrayView1, ArrayView2};

/// A gradient boosting engine under benchmark.
///
/// Errors from either call (malformed matrix shape, device unavailable,
/// out of memory) are surfaced to the caller unchanged; the harness
/// performs no retry or recovery.
pub trait BoostingEngine {
    /// Opaque handle for data packaged in the engine's training format.
    type TrainMatrix;

    /// Opaque handle for a trained model.
    type Model;

    /// Package a feature matrix and a label vector into the engine's
    /// native training format.
    ///
    /// The views borrow the caller's sample table; the engine decides
    /// whether to copy. A zero-row view is passed through as-is (an empty
    /// split partition) and the engine decides whether it is acceptable.
    fn create_matrix(
        &self,
        features: ArrayView2<'_, Feature>,
        labels: ArrayView1<'_, Label>,
    ) -> Result<Self::TrainMatrix>;

    /// Train a model for `num_rounds` boosting iterations.
    ///
    /// `evals` is an ordered list of `(matrix, name)` pairs the engine
    /// evaluates with the configured metric after each iteration, in the
    /// order given.
    fn train(
        &self,
        params: &TrainingParams,
        train: &Self::TrainMatrix,
        num_rounds: usize,
        evals: &[(&Self::TrainMatrix, &str)],
    ) -> Result<Self::Model>;
}
