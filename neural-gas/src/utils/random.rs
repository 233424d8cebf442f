#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use std::cell::RefCell;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the half-open interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;
}

/// A default random implementation backed by a small, fast generator.
///
/// Uses interior mutability, so a single instance is not meant to be shared between threads.
pub struct DefaultRandom {
    rng: RefCell<SmallRng>,
}

impl DefaultRandom {
    /// Creates an instance of `DefaultRandom` which produces the same sequence of values
    /// for the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: RefCell::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RefCell::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..=max)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..max)
    }
}
