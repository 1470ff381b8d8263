//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external service dependencies.

mod features;
mod patient;
mod prediction;

pub use features::{assemble_features, assignable_columns, FeatureSchema, FeatureVector, SchemaError};
pub use patient::{FieldSpec, PatientInput, PatientRecord, FIELD_SPECS};
pub use prediction::{ClassProbabilities, Prediction, RiskLabel};
