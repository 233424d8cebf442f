#[cfg(test)]
#[path = "../../../tests/unit/algorithms/gas/telemetry_test.rs"]
mod telemetry_test;

use super::*;
use crate::utils::{InfoLogger, Timer};

/// Specifies a telemetry mode. Logging is done through the environment logger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// Specifies how often training progress is logged.
        log_every: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often training progress is tracked.
        track_every: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// Specifies how often training progress is logged.
        log_every: usize,
        /// Specifies how often training progress is tracked.
        track_every: usize,
    },
}

impl TelemetryMode {
    fn intervals(&self) -> (Option<usize>, Option<usize>) {
        match self {
            TelemetryMode::None => (None, None),
            TelemetryMode::OnlyLogging { log_every } => (Some(*log_every), None),
            TelemetryMode::OnlyMetrics { track_every } => (None, Some(*track_every)),
            TelemetryMode::All { log_every, track_every } => (Some(*log_every), Some(*track_every)),
        }
    }

    pub(crate) fn validate(&self) -> TrainingResult<()> {
        let (log_every, track_every) = self.intervals();

        if log_every == Some(0) || track_every == Some(0) {
            return Err(TrainingError::invalid_configuration("telemetry interval must be positive"));
        }

        Ok(())
    }
}

/// Encapsulates different measurements regarding training run.
#[derive(Clone, Debug, Default)]
pub struct TrainingMetrics {
    /// Training duration in milliseconds.
    pub duration: u128,
    /// Total amount of iterations.
    pub iterations: usize,
    /// Tracked network states.
    pub snapshots: Vec<TrainingSnapshot>,
}

/// Represents the network state after an iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingSnapshot {
    /// Iteration index, starting from zero.
    pub iteration: usize,
    /// Learning rate used on the iteration.
    pub learning_rate: Float,
    /// Neighborhood width used on the iteration.
    pub neighborhood_width: Float,
    /// Average squared distance from the dataset vectors to their nearest prototypes.
    pub quantization_error: Float,
}

/// Provides way to collect metrics and write information into log.
pub(crate) struct Telemetry {
    logger: InfoLogger,
    log_every: Option<usize>,
    track_every: Option<usize>,
    iterations: usize,
    timer: Timer,
    snapshots: Vec<TrainingSnapshot>,
}

impl Telemetry {
    pub fn new(mode: &TelemetryMode, logger: InfoLogger, iterations: usize) -> Self {
        let (log_every, track_every) = mode.intervals();

        Self { logger, log_every, track_every, iterations, timer: Timer::start(), snapshots: vec![] }
    }

    pub fn on_start(&self, config: &NeuralGasConfig) {
        if self.log_every.is_some() {
            self.log(
                format!(
                    "started training: neurons: {}, dimension: {}, iterations: {}, learning rate: {} -> {}, \
                     neighborhood width: {} -> {}",
                    config.neurons,
                    config.dimension,
                    config.iterations,
                    config.learning_rate.initial,
                    config.learning_rate.last,
                    config.neighborhood_width.initial,
                    config.neighborhood_width.last
                )
                .as_str(),
            );
        }
    }

    /// Reports iteration results.
    pub fn on_iteration<I: Input>(
        &mut self,
        iteration: usize,
        params: ScheduleParams,
        store: &PrototypeStore,
        dataset: &[I],
    ) -> TrainingResult<()> {
        let is_last = iteration + 1 == self.iterations;
        let should_log = self.log_every.is_some_and(|log_every| iteration % log_every == 0);
        let should_track = self.track_every.is_some_and(|track_every| iteration % track_every == 0 || is_last);

        if !should_log && !should_track {
            return Ok(());
        }

        let quantization_error = store.quantization_error(dataset)?;

        if should_log {
            self.log(
                format!(
                    "[{:.2}s] iteration {}/{}: learning rate: {:.4}, neighborhood width: {:.4}, \
                     quantization error: {:.6}",
                    self.timer.elapsed_secs_as_float(),
                    iteration,
                    self.iterations,
                    params.learning_rate,
                    params.neighborhood_width,
                    quantization_error
                )
                .as_str(),
            );
        }

        if should_track {
            self.snapshots.push(TrainingSnapshot {
                iteration,
                learning_rate: params.learning_rate,
                neighborhood_width: params.neighborhood_width,
                quantization_error,
            });
        }

        Ok(())
    }

    /// Finishes telemetry returning collected metrics, if any were tracked.
    pub fn finish(self) -> Option<TrainingMetrics> {
        let duration = self.timer.elapsed_millis();

        if self.log_every.is_some() {
            self.log(format!("training finished in {}ms, iterations: {}", duration, self.iterations).as_str());
        }

        self.track_every.map(|_| TrainingMetrics { duration, iterations: self.iterations, snapshots: self.snapshots })
    }

    fn log(&self, message: &str) {
        (self.logger)(message)
    }
}
