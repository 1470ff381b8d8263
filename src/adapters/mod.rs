//! Adapters layer: Concrete implementations of ports.
//!
//! - `logistic`: serialized logistic-regression artifact loader

pub mod logistic;

pub use logistic::LogisticModel;
