#[cfg(test)]
#[path = "../../../tests/unit/algorithms/gas/trainer_test.rs"]
mod trainer_test;

use super::*;
use crate::utils::{DefaultRandom, Environment, InfoLogger};
use std::sync::Arc;

/// Default amount of prototypes.
pub const DEFAULT_NEURONS: usize = 4;
/// Default prototype dimension.
pub const DEFAULT_DIMENSION: usize = 3;
/// Default amount of training iterations.
pub const DEFAULT_ITERATIONS: usize = 10000;

/// A validated trainer configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct NeuralGasConfig {
    /// Amount of prototypes.
    pub neurons: usize,
    /// Dimension of prototypes and inputs.
    pub dimension: usize,
    /// Amount of training iterations.
    pub iterations: usize,
    /// Learning rate range.
    pub learning_rate: DecayRange,
    /// Neighborhood width range.
    pub neighborhood_width: DecayRange,
}

/// Builds `NeuralGasTrainer` using fluent interface.
pub struct NeuralGasBuilder {
    neurons: usize,
    dimension: usize,
    iterations: usize,
    learning_rate: DecayRange,
    neighborhood_width: Option<DecayRange>,
    environment: Option<Arc<Environment>>,
    seed: Option<u64>,
    logger: Option<InfoLogger>,
    telemetry: TelemetryMode,
}

impl Default for NeuralGasBuilder {
    fn default() -> Self {
        Self {
            neurons: DEFAULT_NEURONS,
            dimension: DEFAULT_DIMENSION,
            iterations: DEFAULT_ITERATIONS,
            learning_rate: DEFAULT_LEARNING_RATE,
            neighborhood_width: None,
            environment: None,
            seed: None,
            logger: None,
            telemetry: TelemetryMode::None,
        }
    }
}

impl NeuralGasBuilder {
    /// Sets amount of prototypes.
    pub fn with_neurons(mut self, neurons: usize) -> Self {
        self.neurons = neurons;
        self
    }

    /// Sets dimension of prototypes and inputs.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Sets amount of training iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets learning rate range, default is `0.5 -> 0.005`.
    pub fn with_learning_rate(mut self, initial: Float, last: Float) -> Self {
        self.learning_rate = DecayRange::new(initial, last);
        self
    }

    /// Sets neighborhood width range, default is `neurons / 2 -> 0.01`.
    pub fn with_neighborhood_width(mut self, initial: Float, last: Float) -> Self {
        self.neighborhood_width = Some(DecayRange::new(initial, last));
        self
    }

    /// Sets environment.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets a seed for the random generator, it overrides the environment one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets logger, it overrides the environment one.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Sets telemetry mode.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Validates configuration and builds a trainer.
    pub fn build(self) -> TrainingResult<NeuralGasTrainer> {
        if self.neurons == 0 {
            return Err(TrainingError::invalid_configuration("amount of neurons must be positive"));
        }

        if self.dimension == 0 {
            return Err(TrainingError::invalid_configuration("dimension must be positive"));
        }

        self.telemetry.validate()?;

        let neighborhood_width =
            self.neighborhood_width.unwrap_or_else(|| DecayRange::default_neighborhood_width(self.neurons));
        let schedule = AnnealingSchedule::new(self.learning_rate, neighborhood_width, self.iterations)?;

        let environment = self.environment.unwrap_or_default();
        let environment = match (self.seed, self.logger) {
            (None, None) => environment,
            (seed, logger) => {
                let mut environment = environment.as_ref().clone();
                if let Some(seed) = seed {
                    environment.random = Arc::new(DefaultRandom::new_repeatable(seed));
                }
                if let Some(logger) = logger {
                    environment.logger = logger;
                }
                Arc::new(environment)
            }
        };

        Ok(NeuralGasTrainer {
            config: NeuralGasConfig {
                neurons: self.neurons,
                dimension: self.dimension,
                iterations: self.iterations,
                learning_rate: self.learning_rate,
                neighborhood_width,
            },
            schedule,
            environment,
            telemetry: self.telemetry,
        })
    }
}

/// Trains a prototype network on a dataset.
pub struct NeuralGasTrainer {
    config: NeuralGasConfig,
    schedule: AnnealingSchedule,
    environment: Arc<Environment>,
    telemetry: TelemetryMode,
}

impl NeuralGasTrainer {
    /// Returns trainer configuration.
    pub fn config(&self) -> &NeuralGasConfig {
        &self.config
    }

    /// Returns environment used for training.
    pub fn environment(&self) -> &Environment {
        self.environment.as_ref()
    }

    /// Trains a freshly initialized network on the dataset for the configured amount of
    /// iterations. Every iteration draws one input with replacement, so the dataset is never
    /// exhausted. Returns trained prototypes and metrics if telemetry tracks them.
    pub fn train<I: Input>(&self, dataset: &[I]) -> TrainingResult<(PrototypeStore, Option<TrainingMetrics>)> {
        if dataset.is_empty() {
            return Err(TrainingError::EmptyDataset);
        }

        ensure_dataset_dimension(dataset, self.config.dimension)?;

        let last_index = i32::try_from(dataset.len() - 1)
            .map_err(|_| TrainingError::invalid_configuration(format!("dataset is too large: {}", dataset.len())))?;

        let random = self.environment.random.as_ref();
        let mut store = PrototypeStore::new_random(self.config.neurons, self.config.dimension, random)?;
        let mut ranking = Vec::with_capacity(self.config.neurons);
        let mut telemetry =
            Telemetry::new(&self.telemetry, self.environment.logger.clone(), self.schedule.iterations());

        telemetry.on_start(&self.config);

        for time in 0..self.schedule.iterations() {
            let params = self.schedule.params_at(time);
            let sample = dataset[random.uniform_int(0, last_index) as usize].weights();

            rank_prototypes_into(sample, &store, &mut ranking)?;
            adapt(&mut store, ranking.as_slice(), sample, params)?;

            telemetry.on_iteration(time, params, &store, dataset)?;
        }

        Ok((store, telemetry.finish()))
    }
}
