//! This crate implements the Neural Gas algorithm: an unsupervised competitive learning method
//! which adapts a fixed set of prototype vectors to approximate a distribution of input data.
//!
//! Unlike k-means or self organizing maps, every prototype is adapted on every iteration, with
//! strength decaying exponentially with its distance rank to the presented sample.
//!
//! # Examples
//!
//! ```
//! use neural_gas::prelude::*;
//!
//! let dataset = vec![vec![0.9, 0.1, 0.1], vec![0.1, 0.9, 0.1], vec![0.1, 0.1, 0.9]];
//! let trainer = NeuralGasBuilder::default()
//!     .with_neurons(3)
//!     .with_dimension(3)
//!     .with_iterations(1000)
//!     .with_seed(42)
//!     .build()
//!     .expect("valid configuration");
//!
//! let (prototypes, _) = trainer.train(dataset.as_slice()).expect("non-empty dataset");
//!
//! assert_eq!(prototypes.size(), 3);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod utils;
