//! Device benchmark driver.
//!
//! Reproduces the classic CPU-versus-GPU training comparison: simulate a
//! sample table, split it, convert both partitions through the engine's
//! matrix format, then train the same configuration once per configured
//! device and record the wall-clock time of each training call.

use crate::config::TrainingParams;
use crate::core::constants::*;
use crate::core::error::{BoostmarkError, Result};
use crate::core::types::DeviceType;
use crate::dataset::SimulationConfig;
use crate::engine::BoostingEngine;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Name reported for the training eval set.
pub const TRAIN_EVAL_NAME: &str = "train";

/// Name reported for the validation eval set.
pub const VALID_EVAL_NAME: &str = "validation";

/// Benchmark run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Simulation dimensions for the sample table
    pub simulation: SimulationConfig,
    /// Fraction of rows assigned to the training partition
    pub train_fraction: f64,
    /// Number of boosting iterations per timed run
    pub num_rounds: usize,
    /// Base hyperparameters; the device key is overridden per run
    pub params: TrainingParams,
    /// Devices to benchmark, in run order
    pub devices: Vec<DeviceType>,
    /// Simulation seed; `None` draws from thread-local entropy
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            simulation: SimulationConfig::default(),
            train_fraction: DEFAULT_TRAIN_FRACTION,
            num_rounds: DEFAULT_NUM_ROUNDS,
            params: TrainingParams::default(),
            devices: vec![DeviceType::CPU, DeviceType::GPU],
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulation dimensions.
    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }

    /// Set the training fraction.
    pub fn with_train_fraction(mut self, train_fraction: f64) -> Self {
        self.train_fraction = train_fraction;
        self
    }

    /// Set the boosting iteration count.
    pub fn with_num_rounds(mut self, num_rounds: usize) -> Self {
        self.num_rounds = num_rounds;
        self
    }

    /// Set the base hyperparameters.
    pub fn with_params(mut self, params: TrainingParams) -> Self {
        self.params = params;
        self
    }

    /// Set the devices to benchmark, in run order.
    pub fn with_devices(mut self, devices: Vec<DeviceType>) -> Self {
        self.devices = devices;
        self
    }

    /// Set the simulation seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;
        self.params.validate()?;

        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(BoostmarkError::invalid_parameter(
                "train_fraction",
                self.train_fraction.to_string(),
                "must be in range (0.0, 1.0)",
            ));
        }

        if self.num_rounds == 0 {
            return Err(BoostmarkError::invalid_parameter(
                "num_rounds",
                self.num_rounds.to_string(),
                "must be positive",
            ));
        }

        if self.devices.is_empty() {
            return Err(BoostmarkError::config(
                "at least one device must be benchmarked",
            ));
        }

        Ok(())
    }
}

/// One timed training run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRun {
    /// Device the run trained on
    pub device: DeviceType,
    /// Wall-clock time of the training call
    pub elapsed: Duration,
}

/// Result of a benchmark: one timed run per configured device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// When the benchmark started
    pub started_at: DateTime<Utc>,
    /// Rows in the training partition
    pub num_train_rows: usize,
    /// Rows in the validation partition
    pub num_valid_rows: usize,
    /// Timed runs, in configured device order
    pub runs: Vec<DeviceRun>,
}

impl BenchmarkReport {
    /// Get the run for a device, if it was benchmarked.
    pub fn run_for(&self, device: DeviceType) -> Option<&DeviceRun> {
        self.runs.iter().find(|run| run.device == device)
    }

    /// CPU time divided by GPU time, when both devices ran.
    pub fn speedup(&self) -> Option<f64> {
        let cpu = self.run_for(DeviceType::CPU)?.elapsed.as_secs_f64();
        let gpu = self.run_for(DeviceType::GPU)?.elapsed.as_secs_f64();
        Some(cpu / gpu)
    }
}

/// Run the benchmark: simulate, split, convert, then train and time once
/// per configured device.
///
/// Each run derives its parameters from the base record with the run's
/// device, leaving the base record untouched. Engine errors abort the
/// benchmark and surface unchanged.
pub fn run_benchmark<E: BoostingEngine>(
    engine: &E,
    config: &BenchmarkConfig,
) -> Result<BenchmarkReport> {
    config.validate()?;
    let started_at = Utc::now();

    let table = match config.seed {
        Some(seed) => config
            .simulation
            .simulate_with(&mut StdRng::seed_from_u64(seed))?,
        None => config.simulation.simulate()?,
    };
    log::info!(
        "simulated {} rows x {} features ({} categories)",
        table.rows(),
        table.num_features(),
        config.simulation.categories
    );

    let split = table.split(config.train_fraction)?;
    log::info!(
        "split at row {}: {} train / {} validation",
        split.split_index(),
        split.num_train(),
        split.num_valid()
    );

    let dtrain = engine.create_matrix(split.train_features(), split.train_labels())?;
    let dvalid = engine.create_matrix(split.valid_features(), split.valid_labels())?;
    let evals = [(&dtrain, TRAIN_EVAL_NAME), (&dvalid, VALID_EVAL_NAME)];

    let mut runs = Vec::with_capacity(config.devices.len());
    for &device in &config.devices {
        let params = config.params.clone().with_device_type(device);
        let start = Instant::now();
        let _model = engine.train(&params, &dtrain, config.num_rounds, &evals)?;
        let elapsed = start.elapsed();
        log::info!(
            "{} training finished: {} rounds in {:.3} s",
            device,
            config.num_rounds,
            elapsed.as_secs_f64()
        );
        runs.push(DeviceRun { device, elapsed });
    }

    Ok(BenchmarkReport {
        started_at,
        num_train_rows: split.num_train(),
        num_valid_rows: split.num_valid(),
        runs,
    })
}
