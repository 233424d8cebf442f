#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Joins many errors with separator.
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.0.as_str()).collect::<Vec<_>>().join(separator)
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<TrainingError> for GenericError {
    fn from(value: TrainingError) -> Self {
        Self(value.to_string())
    }
}

/// Specifies errors which terminate a training run. No partial results are returned when
/// any of them occurs.
#[derive(Clone, Debug, PartialEq)]
pub enum TrainingError {
    /// Network or schedule parameters are not usable: zero neurons, dimension or iterations,
    /// or decay ranges outside of their domain.
    InvalidConfiguration(String),

    /// Training set has no vectors, so there is nothing to sample from.
    EmptyDataset,

    /// A vector has a different length than the network dimension.
    DimensionMismatch {
        /// Index of the offending vector within its collection.
        index: usize,
        /// Network dimension.
        expected: usize,
        /// Actual vector length.
        actual: usize,
    },
}

/// A type alias for result type with `TrainingError`.
pub type TrainingResult<T> = Result<T, TrainingError>;

impl TrainingError {
    /// Creates `InvalidConfiguration` error with given message.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

impl Display for TrainingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::EmptyDataset => write!(f, "training dataset is empty"),
            Self::DimensionMismatch { index, expected, actual } => {
                write!(f, "vector at index {index} has dimension {actual}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for TrainingError {}
