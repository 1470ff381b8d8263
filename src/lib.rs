//! # Nephroscan
//!
//! Chronic kidney disease risk prediction from patient lab values.
//!
//! This crate provides:
//! - Fixed-order feature-vector assembly from a patient record
//! - Thresholded binary classification against a pre-trained model artifact
//! - Terminal UI for interactive, local-only use
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (patient input, feature vector, prediction)
//! - `ports`: The `Classifier` trait abstracting the model artifact
//! - `adapters`: Concrete artifact loader (serialized logistic regression)
//! - `application`: The predict use case orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{ClassProbabilities, PatientInput, Prediction, RiskLabel};

/// Result type for Nephroscan operations
pub type Result<T> = std::result::Result<T, NephroscanError>;

/// Main error type for Nephroscan
#[derive(Debug, thiserror::Error)]
pub enum NephroscanError {
    #[error("Model error: {0}")]
    Model(#[from] ports::ModelError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
