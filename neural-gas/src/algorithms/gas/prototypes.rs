#[cfg(test)]
#[path = "../../../tests/unit/algorithms/gas/prototypes_test.rs"]
mod prototypes_test;

use super::*;
use crate::algorithms::math::squared_euclidean;
use crate::utils::{Random, compare_floats};

/// Represents a prototype (neuron) in network.
#[derive(Clone, Debug, PartialEq)]
pub struct Prototype {
    /// A weight vector.
    pub weights: Vec<Float>,
}

impl Prototype {
    /// Creates a new instance of `Prototype`.
    pub fn new(weights: Vec<Float>) -> Self {
        Self { weights }
    }

    /// Adjusts the weights of the prototype toward the target.
    pub fn adjust(&mut self, target: &[Float], learning_rate: Float) {
        debug_assert!(self.weights.len() == target.len());

        self.weights.iter_mut().zip(target.iter()).for_each(|(weight, value)| {
            *weight += learning_rate * (*value - *weight);
        });
    }

    /// Returns squared euclidean distance to the given weights.
    pub fn distance(&self, weights: &[Float]) -> Float {
        squared_euclidean(self.weights.iter().copied(), weights.iter().copied())
    }
}

impl Input for Prototype {
    fn weights(&self) -> &[Float] {
        self.weights.as_slice()
    }
}

/// An ordered collection of prototypes of the same dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct PrototypeStore {
    dimension: usize,
    prototypes: Vec<Prototype>,
}

impl PrototypeStore {
    /// Creates a store of `size` prototypes with `dimension` weights each, every weight is sampled
    /// uniformly from [0, 1).
    pub fn new_random(size: usize, dimension: usize, random: &dyn Random) -> TrainingResult<Self> {
        ensure_shape(size, dimension)?;

        let prototypes = (0..size)
            .map(|_| Prototype::new((0..dimension).map(|_| random.uniform_real(0., 1.)).collect()))
            .collect();

        Ok(Self { dimension, prototypes })
    }

    /// Creates a store from explicit weight vectors.
    pub fn from_weights(weights: Vec<Vec<Float>>) -> TrainingResult<Self> {
        let dimension = weights.first().map_or(0, |weights| weights.len());
        ensure_shape(weights.len(), dimension)?;
        ensure_dataset_dimension(weights.as_slice(), dimension)?;

        Ok(Self { dimension, prototypes: weights.into_iter().map(Prototype::new).collect() })
    }

    /// Returns amount of prototypes.
    pub fn size(&self) -> usize {
        self.prototypes.len()
    }

    /// Returns dimension of every prototype.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns prototype at given index.
    pub fn get(&self, index: usize) -> Option<&Prototype> {
        self.prototypes.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Prototype> {
        self.prototypes.get_mut(index)
    }

    /// Iterates over prototypes in their order.
    pub fn iter(&self) -> impl Iterator<Item = &Prototype> + '_ {
        self.prototypes.iter()
    }

    /// Consumes the store returning weight vectors of all prototypes.
    pub fn into_weights(self) -> Vec<Vec<Float>> {
        self.prototypes.into_iter().map(|prototype| prototype.weights).collect()
    }

    /// Finds the best matching prototype for given sample. Returns its index and squared distance.
    pub fn find_nearest(&self, sample: &[Float]) -> TrainingResult<(usize, Float)> {
        ensure_dimension(0, self.dimension, sample.len())?;

        self.prototypes
            .iter()
            .enumerate()
            .map(|(index, prototype)| (index, prototype.distance(sample)))
            .min_by(|(_, a), (_, b)| compare_floats(*a, *b))
            .ok_or_else(|| TrainingError::invalid_configuration("store has no prototypes"))
    }

    /// Returns the average squared distance between every input and its nearest prototype.
    pub fn quantization_error<I: Input>(&self, dataset: &[I]) -> TrainingResult<Float> {
        if dataset.is_empty() {
            return Err(TrainingError::EmptyDataset);
        }

        ensure_dataset_dimension(dataset, self.dimension)?;

        let total = dataset.iter().try_fold(Float::default(), |acc, input| {
            self.find_nearest(input.weights()).map(|(_, distance)| acc + distance)
        })?;

        Ok(total / dataset.len() as Float)
    }
}

fn ensure_shape(size: usize, dimension: usize) -> TrainingResult<()> {
    match (size, dimension) {
        (0, _) => Err(TrainingError::invalid_configuration("amount of prototypes must be positive")),
        (_, 0) => Err(TrainingError::invalid_configuration("prototype dimension must be positive")),
        _ => Ok(()),
    }
}
