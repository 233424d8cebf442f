#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the trainer.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates an instance of `Environment` with a repeatable random generator.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_repeatable(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), Arc::new(|msg: &str| println!("{msg}")))
    }
}
