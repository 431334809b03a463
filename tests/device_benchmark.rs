//! Device benchmark integration tests.
//!
//! Drives the full simulate -> split -> convert -> train pipeline against a
//! recording mock engine, checking what the engine actually observes at the
//! seam: matrix shapes, eval ordering, and the per-run device parameter.

use boostmark::*;
use ndarray::{ArrayView1, ArrayView2};
use std::sync::Mutex;

/// Mock engine that records every call crossing the trait seam.
struct RecordingEngine {
    matrix_shapes: Mutex<Vec<(usize, usize)>>,
    label_sums: Mutex<Vec<f64>>,
    trained_devices: Mutex<Vec<String>>,
    eval_names: Mutex<Vec<Vec<String>>>,
}

struct MeanMatrix {
    rows: usize,
    label_sum: f64,
}

impl RecordingEngine {
    fn new() -> Self {
        RecordingEngine {
            matrix_shapes: Mutex::new(Vec::new()),
            label_sums: Mutex::new(Vec::new()),
            trained_devices: Mutex::new(Vec::new()),
            eval_names: Mutex::new(Vec::new()),
        }
    }
}

impl BoostingEngine for RecordingEngine {
    type TrainMatrix = MeanMatrix;
    type Model = f64;

    fn create_matrix(
        &self,
        features: ArrayView2<'_, f32>,
        labels: ArrayView1<'_, f32>,
    ) -> Result<MeanMatrix> {
        if features.nrows() != labels.len() {
            return Err(BoostmarkError::dimension_mismatch(
                format!("features rows: {}", features.nrows()),
                format!("labels length: {}", labels.len()),
            ));
        }

        let label_sum: f64 = labels.iter().map(|&label| label as f64).sum();
        self.matrix_shapes
            .lock()
            .unwrap()
            .push((features.nrows(), features.ncols()));
        self.label_sums.lock().unwrap().push(label_sum);

        Ok(MeanMatrix {
            rows: features.nrows(),
            label_sum,
        })
    }

    fn train(
        &self,
        params: &TrainingParams,
        train: &MeanMatrix,
        num_rounds: usize,
        evals: &[(&MeanMatrix, &str)],
    ) -> Result<f64> {
        self.trained_devices
            .lock()
            .unwrap()
            .push(params.device_type.to_string());
        self.eval_names.lock().unwrap().push(
            evals
                .iter()
                .map(|(_, name)| name.to_string())
                .collect::<Vec<_>>(),
        );

        // stand-in for boosting: accumulate the label mean per round
        let mut score = 0.0;
        for _ in 0..num_rounds {
            score += train.label_sum / train.rows.max(1) as f64;
        }
        Ok(score / num_rounds as f64)
    }
}

/// Engine whose training call always fails, as a missing GPU would.
struct UnavailableDeviceEngine;

impl BoostingEngine for UnavailableDeviceEngine {
    type TrainMatrix = ();
    type Model = ();

    fn create_matrix(
        &self,
        _features: ArrayView2<'_, f32>,
        _labels: ArrayView1<'_, f32>,
    ) -> Result<()> {
        Ok(())
    }

    fn train(
        &self,
        _params: &TrainingParams,
        _train: &(),
        _num_rounds: usize,
        _evals: &[(&(), &str)],
    ) -> Result<()> {
        Err(BoostmarkError::engine("GPU device not available"))
    }
}

fn small_config() -> BenchmarkConfig {
    BenchmarkConfig::new()
        .with_simulation(
            SimulationConfig::new()
                .with_rows(200)
                .with_columns(4)
                .with_categories(2),
        )
        .with_train_fraction(0.8)
        .with_num_rounds(5)
        .with_seed(7)
}

#[test]
fn test_benchmark_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();

    let engine = RecordingEngine::new();
    let report = run_benchmark(&engine, &small_config()).unwrap();

    assert_eq!(report.num_train_rows, 160);
    assert_eq!(report.num_valid_rows, 40);
    assert_eq!(report.runs.len(), 2);
    assert_eq!(report.runs[0].device, DeviceType::CPU);
    assert_eq!(report.runs[1].device, DeviceType::GPU);
    assert!(report.run_for(DeviceType::GPU).is_some());
    assert!(report.speedup().is_some());

    // the engine saw the two split partitions, training first
    let shapes = engine.matrix_shapes.lock().unwrap();
    assert_eq!(*shapes, vec![(160, 4), (40, 4)]);
}

#[test]
fn test_engine_sees_device_override_per_run() {
    let engine = RecordingEngine::new();
    let config = small_config();
    run_benchmark(&engine, &config).unwrap();

    let devices = engine.trained_devices.lock().unwrap();
    assert_eq!(*devices, vec!["cpu".to_string(), "gpu".to_string()]);

    // the base record never changes between runs
    assert_eq!(config.params.device_type, DeviceType::CPU);
}

#[test]
fn test_eval_sets_ordered_train_then_validation() {
    let engine = RecordingEngine::new();
    run_benchmark(&engine, &small_config().with_devices(vec![DeviceType::CPU])).unwrap();

    let eval_names = engine.eval_names.lock().unwrap();
    assert_eq!(eval_names.len(), 1);
    assert_eq!(
        eval_names[0],
        vec![TRAIN_EVAL_NAME.to_string(), VALID_EVAL_NAME.to_string()]
    );
}

#[test]
fn test_seeded_benchmark_is_reproducible() {
    let first = RecordingEngine::new();
    let second = RecordingEngine::new();
    let config = small_config();

    run_benchmark(&first, &config).unwrap();
    run_benchmark(&second, &config).unwrap();

    assert_eq!(
        *first.label_sums.lock().unwrap(),
        *second.label_sums.lock().unwrap()
    );
}

#[test]
fn test_engine_error_surfaces_unchanged() {
    let result = run_benchmark(&UnavailableDeviceEngine, &small_config());

    match result {
        Err(BoostmarkError::Engine { message }) => {
            assert_eq!(message, "GPU device not available");
        }
        other => panic!("expected engine error, got {:?}", other),
    }
}

#[test]
fn test_invalid_config_rejected_before_simulation() {
    let engine = RecordingEngine::new();
    let config = small_config().with_num_rounds(0);

    assert!(run_benchmark(&engine, &config).is_err());
    assert!(engine.matrix_shapes.lock().unwrap().is_empty());
}
