//! Provides an implementation of the Neural Gas algorithm.
//!
//! A training iteration draws a random sample, ranks all prototypes by their distance to it and
//! pulls every prototype toward the sample with strength `alpha * exp(-rank / lambda)`. Both
//! `alpha` (learning rate) and `lambda` (neighborhood width) are annealed linearly over the
//! iteration budget.

use crate::utils::{Float, TrainingError, TrainingResult};

mod adaptation;
pub use self::adaptation::*;

mod prototypes;
pub use self::prototypes::*;

mod ranking;
pub use self::ranking::*;

mod schedule;
pub use self::schedule::*;

mod telemetry;
pub use self::telemetry::*;

mod trainer;
pub use self::trainer::*;

/// Represents an input for network.
pub trait Input {
    /// Returns weights.
    fn weights(&self) -> &[Float];
}

impl Input for Vec<Float> {
    fn weights(&self) -> &[Float] {
        self.as_slice()
    }
}

impl<const N: usize> Input for [Float; N] {
    fn weights(&self) -> &[Float] {
        self.as_slice()
    }
}

/// Checks that a vector length is equal to the network dimension.
pub(crate) fn ensure_dimension(index: usize, expected: usize, actual: usize) -> TrainingResult<()> {
    if expected == actual { Ok(()) } else { Err(TrainingError::DimensionMismatch { index, expected, actual }) }
}

/// Checks that every input in the dataset has the network dimension.
pub(crate) fn ensure_dataset_dimension<I: Input>(dataset: &[I], dimension: usize) -> TrainingResult<()> {
    dataset
        .iter()
        .enumerate()
        .try_for_each(|(index, input)| ensure_dimension(index, dimension, input.weights().len()))
}
