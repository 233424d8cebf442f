#[cfg(test)]
#[path = "../../../tests/unit/algorithms/gas/schedule_test.rs"]
mod schedule_test;

use super::*;

/// Default learning rate range.
pub const DEFAULT_LEARNING_RATE: DecayRange = DecayRange { initial: 0.5, last: 0.005 };

/// Default final neighborhood width. The initial one depends on the amount of prototypes.
pub const DEFAULT_FINAL_NEIGHBORHOOD_WIDTH: Float = 0.01;

/// Specifies a range of a parameter linearly decayed over the training.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayRange {
    /// A value at the first iteration.
    pub initial: Float,
    /// A value approached at the end of training.
    pub last: Float,
}

impl DecayRange {
    /// Creates a new instance of `DecayRange`.
    pub fn new(initial: Float, last: Float) -> Self {
        Self { initial, last }
    }

    /// Returns default neighborhood width range for given amount of prototypes.
    pub fn default_neighborhood_width(neurons: usize) -> Self {
        Self { initial: neurons as Float / 2., last: DEFAULT_FINAL_NEIGHBORHOOD_WIDTH }
    }
}

/// Parameters used by adaptation step on a specific iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduleParams {
    /// Learning rate (alpha).
    pub learning_rate: Float,
    /// Neighborhood width (lambda).
    pub neighborhood_width: Float,
}

/// Linearly interpolates from `initial` at `time = 0` to `last` at `time = total`.
pub fn decay(initial: Float, last: Float, time: usize, total: usize) -> TrainingResult<Float> {
    if total == 0 {
        return Err(TrainingError::invalid_configuration("total amount of iterations must be positive"));
    }

    Ok(linear_decay(initial, last, time, total))
}

fn linear_decay(initial: Float, last: Float, time: usize, total: usize) -> Float {
    initial - (initial - last) * (time as Float / total as Float)
}

/// Computes learning rate and neighborhood width for an iteration.
#[derive(Clone, Debug)]
pub struct AnnealingSchedule {
    learning_rate: DecayRange,
    neighborhood_width: DecayRange,
    iterations: usize,
}

impl AnnealingSchedule {
    /// Creates a new instance of `AnnealingSchedule`.
    pub fn new(learning_rate: DecayRange, neighborhood_width: DecayRange, iterations: usize) -> TrainingResult<Self> {
        if iterations == 0 {
            return Err(TrainingError::invalid_configuration("amount of iterations must be positive"));
        }

        let is_learning_rate = |value: Float| value.is_finite() && (0. ..=1.).contains(&value);
        if !is_learning_rate(learning_rate.initial) || !is_learning_rate(learning_rate.last) {
            return Err(TrainingError::invalid_configuration(format!(
                "learning rate must be in [0, 1], got {} -> {}",
                learning_rate.initial, learning_rate.last
            )));
        }

        let is_width = |value: Float| value.is_finite() && value > 0.;
        if !is_width(neighborhood_width.initial) || !is_width(neighborhood_width.last) {
            return Err(TrainingError::invalid_configuration(format!(
                "neighborhood width must be positive, got {} -> {}",
                neighborhood_width.initial, neighborhood_width.last
            )));
        }

        Ok(Self { learning_rate, neighborhood_width, iterations })
    }

    /// Returns total amount of iterations.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns parameters for the given iteration.
    pub fn params_at(&self, time: usize) -> ScheduleParams {
        ScheduleParams {
            learning_rate: linear_decay(self.learning_rate.initial, self.learning_rate.last, time, self.iterations),
            neighborhood_width: linear_decay(
                self.neighborhood_width.initial,
                self.neighborhood_width.last,
                time,
                self.iterations,
            ),
        }
    }
}
