//! # Boostmark
//!
//! A benchmark harness for gradient boosting engines: simulate synthetic
//! tabular data, split it into train/validation partitions, convert both
//! through the engine's native matrix format, and time CPU-path versus
//! GPU-path training of the same model configuration.
//!
//! ## Features
//!
//! - **Synthetic data simulation**: uniform binary or numerical feature
//!   tables with categorical labels, sized to whatever the benchmark
//!   needs, with an injectable random source for reproducible runs.
//! - **Deterministic splitting**: contiguous floor-based train/validation
//!   partitions exposed as borrowed `ndarray` views, no copying and no
//!   hidden shuffling.
//! - **Typed hyperparameters**: an explicit, validated parameter record
//!   instead of a stringly-typed dictionary, rendered to the engine's flat
//!   parameter format on demand.
//! - **Engine-agnostic timing**: any engine behind the [`BoostingEngine`]
//!   trait can be benchmarked; the harness owns none of the training
//!   internals.
//!
//! ## Quick Start
//!
//! Simulating and splitting a table:
//!
//! ```rust
//! use boostmark::SimulationConfig;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn main() -> boostmark::Result<()> {
//! let mut rng = StdRng::seed_from_u64(42);
//! let table = SimulationConfig::new()
//!     .with_rows(10)
//!     .with_columns(4)
//!     .with_categories(2)
//!     .simulate_with(&mut rng)?;
//!
//! let split = table.split(0.8)?;
//! assert_eq!(split.train_features().shape(), &[8, 4]);
//! assert_eq!(split.valid_features().shape(), &[2, 4]);
//! # Ok(())
//! # }
//! ```
//!
//! Timing an engine on both devices:
//!
//! ```rust,no_run
//! use boostmark::{
//!     BenchmarkConfig, BoostingEngine, Result, SimulationConfig, TrainingParams,
//! };
//! use ndarray::{ArrayView1, ArrayView2};
//!
//! struct MyEngine;
//! struct MyMatrix;
//!
//! impl BoostingEngine for MyEngine {
//!     type TrainMatrix = MyMatrix;
//!     type Model = ();
//!
//!     fn create_matrix(
//!         &self,
//!         _features: ArrayView2<'_, f32>,
//!         _labels: ArrayView1<'_, f32>,
//!     ) -> Result<MyMatrix> {
//!         // hand the views to the engine's native conversion
//!         Ok(MyMatrix)
//!     }
//!
//!     fn train(
//!         &self,
//!         _params: &TrainingParams,
//!         _train: &MyMatrix,
//!         _num_rounds: usize,
//!         _evals: &[(&MyMatrix, &str)],
//!     ) -> Result<()> {
//!         // delegate to the engine's training entry point
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let config = BenchmarkConfig::new()
//!         .with_simulation(SimulationConfig::new().with_rows(1_000_000).with_columns(50))
//!         .with_seed(42);
//!
//!     let report = boostmark::run_benchmark(&MyEngine, &config)?;
//!     for run in &report.runs {
//!         println!("{}: {:.3} s", run.device, run.elapsed.as_secs_f64());
//!     }
//!     if let Some(speedup) = report.speedup() {
//!         println!("GPU speedup: {:.2}x", speedup);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types, constants, and error handling
//! - [`dataset`]: sample-table simulation and train/validation splitting
//! - [`config`]: the typed hyperparameter record
//! - [`engine`]: the external boosting engine trait seam
//! - [`bench`]: the device benchmark driver and report

#![doc(html_root_url = "https://docs.rs/boostmark/")]
#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Dataset management module
pub mod dataset;

// External engine interface module
pub mod engine;

// Benchmark driver module
pub mod bench;

// Re-export core functionality for convenience
pub use crate::core::{
    constants::*,
    error::{BoostmarkError, Result},
    types::{DeviceType, Feature, Label, MetricType, ObjectiveType},
};

// Re-export configuration functionality
pub use crate::config::TrainingParams;

// Re-export dataset functionality
pub use crate::dataset::{simulate_data, SampleTable, SimulationConfig, TrainValidSplit};

// Re-export engine functionality
pub use crate::engine::BoostingEngine;

// Re-export benchmark functionality
pub use crate::bench::{
    run_benchmark, BenchmarkConfig, BenchmarkReport, DeviceRun, TRAIN_EVAL_NAME, VALID_EVAL_NAME,
};
