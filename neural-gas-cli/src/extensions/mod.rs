//! Contains functionality which extends the trainer with input and output formats.

pub mod dataset;
pub mod output;
