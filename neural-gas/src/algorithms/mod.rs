//! This module contains the algorithms used to train prototype networks.

pub mod gas;
pub mod math;
