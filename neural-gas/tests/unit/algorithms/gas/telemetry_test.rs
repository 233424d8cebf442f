use super::*;
use crate::helpers::algorithms::gas::create_test_store;
use crate::helpers::utils::create_test_environment_with_logger;
use crate::utils::DefaultRandom;
use std::sync::Arc;

fn create_config(iterations: usize) -> NeuralGasConfig {
    NeuralGasConfig {
        neurons: 2,
        dimension: 2,
        iterations,
        learning_rate: DEFAULT_LEARNING_RATE,
        neighborhood_width: DecayRange::default_neighborhood_width(2),
    }
}

fn run_telemetry(mode: TelemetryMode, iterations: usize) -> (Option<TrainingMetrics>, Vec<String>) {
    let (environment, messages) = create_test_environment_with_logger(Arc::new(DefaultRandom::default()));
    let store = create_test_store(&[&[0., 0.], &[1., 1.]]);
    let dataset = vec![vec![0., 0.], vec![1., 0.]];
    let params = ScheduleParams { learning_rate: 0.5, neighborhood_width: 1. };

    let mut telemetry = Telemetry::new(&mode, environment.logger.clone(), iterations);
    telemetry.on_start(&create_config(iterations));
    (0..iterations).for_each(|iteration| telemetry.on_iteration(iteration, params, &store, dataset.as_slice()).unwrap());
    let metrics = telemetry.finish();

    let messages = messages.borrow().clone();

    (metrics, messages)
}

parameterized_test! {can_validate_telemetry_mode, (mode, is_valid), {
    assert_eq!(mode.validate().is_ok(), is_valid);
}}

can_validate_telemetry_mode! {
    case01_none: (TelemetryMode::None, true),
    case02_logging: (TelemetryMode::OnlyLogging { log_every: 10 }, true),
    case03_logging_zero: (TelemetryMode::OnlyLogging { log_every: 0 }, false),
    case04_metrics_zero: (TelemetryMode::OnlyMetrics { track_every: 0 }, false),
    case05_all: (TelemetryMode::All { log_every: 1, track_every: 1 }, true),
    case06_all_zero: (TelemetryMode::All { log_every: 1, track_every: 0 }, false),
}

#[test]
fn can_keep_silent_without_telemetry() {
    let (metrics, messages) = run_telemetry(TelemetryMode::None, 10);

    assert!(metrics.is_none());
    assert!(messages.is_empty());
}

parameterized_test! {can_track_snapshots, (track_every, iterations, expected), {
    let (metrics, messages) = run_telemetry(TelemetryMode::OnlyMetrics { track_every }, iterations);
    let metrics = metrics.expect("metrics should be collected");

    assert!(messages.is_empty());
    assert_eq!(metrics.iterations, iterations);
    assert_eq!(metrics.snapshots.iter().map(|snapshot| snapshot.iteration).collect::<Vec<_>>(), expected);
}}

can_track_snapshots! {
    case01_every_second: (2, 5, vec![0, 2, 4]),
    case02_every_third: (3, 5, vec![0, 3, 4]),
    case03_rare: (100, 5, vec![0, 4]),
    case04_single: (1, 1, vec![0]),
}

#[test]
fn can_track_quantization_error() {
    let (metrics, _) = run_telemetry(TelemetryMode::OnlyMetrics { track_every: 1 }, 1);
    let snapshot = metrics.unwrap().snapshots.first().cloned().unwrap();

    // squared distances to nearest: 0 and 1
    assert_eq!(
        snapshot,
        TrainingSnapshot { iteration: 0, learning_rate: 0.5, neighborhood_width: 1., quantization_error: 0.5 }
    );
}

#[test]
fn can_log_progress() {
    let (metrics, messages) = run_telemetry(TelemetryMode::OnlyLogging { log_every: 2 }, 5);

    assert!(metrics.is_none());
    assert_eq!(messages.len(), 5);
    assert!(messages[0].starts_with("started training: neurons: 2, dimension: 2, iterations: 5"));
    assert!(messages[1].contains("iteration 0/5"));
    assert!(messages[2].contains("iteration 2/5"));
    assert!(messages[3].contains("iteration 4/5"));
    assert!(messages[3].contains("quantization error: 0.500000"));
    assert!(messages[4].starts_with("training finished in"));
}

#[test]
fn can_log_and_track_together() {
    let (metrics, messages) = run_telemetry(TelemetryMode::All { log_every: 10, track_every: 2 }, 4);

    assert_eq!(metrics.unwrap().snapshots.len(), 3);
    assert_eq!(messages.len(), 3);
}
