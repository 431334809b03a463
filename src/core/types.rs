//! Core data types shared across the benchmark harness.
//!
//! The enums in this module mirror the vocabulary of the external boosting
//! engine's flat parameter format: each variant renders to the lowercase
//! string the engine recognizes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feature value type. 32-bit float, matching the engine's training matrix
/// element type.
pub type Feature = f32;

/// Target value type. Labels are integer categories stored as 32-bit floats.
pub type Label = f32;

/// Execution device for the engine's training path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    /// CPU-based training
    CPU,
    /// GPU-based training
    GPU,
}

impl Default for DeviceType {
    fn default() -> Self {
        DeviceType::CPU
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceType::CPU => write!(f, "cpu"),
            DeviceType::GPU => write!(f, "gpu"),
        }
    }
}

/// Objective function selector forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveType {
    /// Regression task (continuous target)
    Regression,
    /// Binary classification task
    Binary,
    /// Multiclass classification task
    Multiclass,
}

impl Default for ObjectiveType {
    fn default() -> Self {
        ObjectiveType::Binary
    }
}

impl fmt::Display for ObjectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectiveType::Regression => write!(f, "regression"),
            ObjectiveType::Binary => write!(f, "binary"),
            ObjectiveType::Multiclass => write!(f, "multiclass"),
        }
    }
}

/// Evaluation metric reported by the engine during training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricType {
    /// No metric
    None,
    /// Binary classification error rate
    BinaryError,
    /// Binary log loss
    BinaryLogloss,
    /// Multi-class error rate
    MultiError,
    /// Multi-class log loss
    MultiLogloss,
    /// Area Under Curve
    Auc,
    /// Root Mean Squared Error
    Rmse,
    /// Engine-specific metric with name
    Custom(String),
}

impl Default for MetricType {
    fn default() -> Self {
        MetricType::BinaryError
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricType::None => write!(f, "none"),
            MetricType::BinaryError => write!(f, "binary_error"),
            MetricType::BinaryLogloss => write!(f, "binary_logloss"),
            MetricType::MultiError => write!(f, "multi_error"),
            MetricType::MultiLogloss => write!(f, "multi_logloss"),
            MetricType::Auc => write!(f, "auc"),
            MetricType::Rmse => write!(f, "rmse"),
            MetricType::Custom(name) => write!(f, "{}", name),
        }
    }
}
