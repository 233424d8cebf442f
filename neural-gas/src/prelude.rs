//! This module reimports a common used types.

pub use crate::algorithms::gas::Input;
pub use crate::algorithms::gas::NeuralGasBuilder;
pub use crate::algorithms::gas::NeuralGasConfig;
pub use crate::algorithms::gas::NeuralGasTrainer;
pub use crate::algorithms::gas::PrototypeStore;
pub use crate::algorithms::gas::TelemetryMode;
pub use crate::algorithms::gas::TrainingMetrics;
pub use crate::algorithms::gas::{DecayRange, ScheduleParams};

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::{GenericError, GenericResult};
pub use crate::utils::{TrainingError, TrainingResult};
