//! Default values used throughout the benchmark harness.

/// Default fraction of rows assigned to the training partition.
pub const DEFAULT_TRAIN_FRACTION: f64 = 0.8;

/// Default number of boosting rounds per timed training run.
pub const DEFAULT_NUM_ROUNDS: usize = 100;

/// Default number of simulated rows.
/// Large enough that the GPU path has work to amortize its transfer costs.
pub const DEFAULT_NUM_ROWS: usize = 1_000_000;

/// Default number of simulated feature columns.
pub const DEFAULT_NUM_COLUMNS: usize = 50;

/// Default number of label categories.
pub const DEFAULT_NUM_CATEGORIES: usize = 2;

/// Default learning rate (shrinkage) forwarded to the engine.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Default maximum tree depth forwarded to the engine.
/// Negative value means no limit.
pub const DEFAULT_MAX_DEPTH: i32 = 6;

/// Default number of devices for the GPU training path.
pub const DEFAULT_NUM_DEVICES: usize = 1;

/// Default number of threads for the CPU training path.
/// 0 means use all available cores.
pub const DEFAULT_NUM_THREADS: usize = 0;

/// Default random seed forwarded to the engine for reproducibility.
pub const DEFAULT_RANDOM_SEED: u64 = 0;
