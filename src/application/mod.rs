//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the predict use case.

mod predictor;

pub use predictor::{classify, PredictorService};
