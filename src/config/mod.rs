//! Training parameter management.
//!
//! The external engine consumes a flat name-to-value parameter mapping.
//! Rather than assembling that mapping out of loose string keys, the
//! harness keeps an explicit [`TrainingParams`] record that enumerates
//! every recognized key with its type, validates it up front, and renders
//! the flat mapping on demand. Switching devices between benchmark runs
//! means deriving a fresh record with [`TrainingParams::with_device_type`],
//! so a key set for one run can never leak into the next.

use crate::core::constants::*;
use crate::core::error::{BoostmarkError, Result};
use crate::core::types::{DeviceType, MetricType, ObjectiveType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Hyperparameters forwarded to the external boosting engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingParams {
    /// Objective function type (regression, classification, etc.)
    pub objective: ObjectiveType,
    /// Evaluation metric reported for each eval set
    pub metric: MetricType,
    /// Execution device (CPU or GPU)
    pub device_type: DeviceType,
    /// Number of devices used by the GPU training path
    pub num_devices: usize,
    /// Number of classes for the multiclass objective
    pub num_class: usize,
    /// Learning rate for gradient descent
    pub learning_rate: f64,
    /// Maximum depth of tree (-1 for unlimited)
    pub max_depth: i32,
    /// Number of threads for the CPU path (0 = all available cores)
    pub num_threads: usize,
    /// Random seed forwarded to the engine
    pub seed: u64,
}

impl Default for TrainingParams {
    fn default() -> Self {
        TrainingParams {
            objective: ObjectiveType::default(),
            metric: MetricType::default(),
            device_type: DeviceType::default(),
            num_devices: DEFAULT_NUM_DEVICES,
            num_class: DEFAULT_NUM_CATEGORIES,
            learning_rate: DEFAULT_LEARNING_RATE,
            max_depth: DEFAULT_MAX_DEPTH,
            num_threads: DEFAULT_NUM_THREADS,
            seed: DEFAULT_RANDOM_SEED,
        }
    }
}

impl TrainingParams {
    /// Create parameters with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the objective function.
    pub fn with_objective(mut self, objective: ObjectiveType) -> Self {
        self.objective = objective;
        self
    }

    /// Set the evaluation metric.
    pub fn with_metric(mut self, metric: MetricType) -> Self {
        self.metric = metric;
        self
    }

    /// Set the execution device.
    pub fn with_device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }

    /// Set the number of devices for the GPU path.
    pub fn with_num_devices(mut self, num_devices: usize) -> Self {
        self.num_devices = num_devices;
        self
    }

    /// Set the class count for the multiclass objective.
    pub fn with_num_class(mut self, num_class: usize) -> Self {
        self.num_class = num_class;
        self
    }

    /// Set the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the maximum tree depth (-1 for unlimited).
    pub fn with_max_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the number of CPU threads (0 = all available cores).
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Set the engine random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the parameter record.
    pub fn validate(&self) -> Result<()> {
        if self.learning_rate <= 0.0 || self.learning_rate > 1.0 {
            return Err(BoostmarkError::invalid_parameter(
                "learning_rate",
                self.learning_rate.to_string(),
                "must be in range (0.0, 1.0]",
            ));
        }

        if self.max_depth < -1 {
            return Err(BoostmarkError::invalid_parameter(
                "max_depth",
                self.max_depth.to_string(),
                "must be >= -1",
            ));
        }

        if self.device_type == DeviceType::GPU && self.num_devices == 0 {
            return Err(BoostmarkError::invalid_parameter(
                "num_devices",
                self.num_devices.to_string(),
                "must be positive for GPU training",
            ));
        }

        if self.objective == ObjectiveType::Multiclass && self.num_class < 2 {
            return Err(BoostmarkError::invalid_parameter(
                "num_class",
                self.num_class.to_string(),
                "must be at least 2 for multiclass objective",
            ));
        }

        Ok(())
    }

    /// Get the effective number of CPU threads.
    pub fn effective_num_threads(&self) -> usize {
        if self.num_threads == 0 {
            num_cpus::get()
        } else {
            self.num_threads
        }
    }

    /// Render the flat name-to-value mapping the engine's parameter
    /// interface expects.
    pub fn as_parameter_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert("objective".to_string(), self.objective.to_string());
        map.insert("metric".to_string(), self.metric.to_string());
        map.insert("device_type".to_string(), self.device_type.to_string());
        map.insert("num_devices".to_string(), self.num_devices.to_string());
        map.insert("learning_rate".to_string(), self.learning_rate.to_string());
        map.insert("max_depth".to_string(), self.max_depth.to_string());
        map.insert("num_threads".to_string(), self.num_threads.to_string());
        map.insert("seed".to_string(), self.seed.to_string());

        if self.objective == ObjectiveType::Multiclass {
            map.insert("num_class".to_string(), self.num_class.to_string());
        }

        map
    }
}
