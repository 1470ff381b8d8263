//! Classifier port: Trait for the pre-trained model artifact.
//!
//! This trait abstracts the serialized model from the application logic. The
//! artifact is an opaque capability: an ordered column-name schema plus a
//! probability function over vectors assembled in that order.

use crate::domain::{ClassProbabilities, FeatureSchema, FeatureVector, SchemaError};

/// Errors from loading or invoking a model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model artifact: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model schema: {0}")]
    InvalidSchema(#[from] SchemaError),

    #[error("Invalid model parameters: {0}")]
    InvalidParameters(String),

    #[error("Feature vector shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
}

/// Trait for binary probability classifiers loaded from a persisted artifact.
///
/// Implementations are loaded once at startup and treated as immutable,
/// read-only shared state for the process lifetime.
pub trait Classifier: Send + Sync {
    /// The ordered column names this classifier expects feature vectors
    /// to be assembled against.
    fn schema(&self) -> &FeatureSchema;

    /// Predict per-class probabilities for one feature vector.
    ///
    /// The vector's length and slot order must match [`Classifier::schema`];
    /// callers assemble with that schema, so a mismatch indicates a bug or a
    /// corrupt artifact and surfaces as `ModelError::ShapeMismatch`.
    ///
    /// # Errors
    /// Returns `ModelError` if the vector is rejected.
    fn predict_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<ClassProbabilities, ModelError>;
}
