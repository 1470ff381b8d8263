//! Feature-vector assembly.
//!
//! Maps a [`PatientInput`] onto the fixed column order the classifier was
//! trained with: the 20 direct fields, three interaction terms, and zero for
//! any schema column nothing populates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::patient::{PatientInput, FIELD_SPECS};

/// Column names of the derived interaction terms, in assembly order.
const DERIVED_COLUMNS: [&str; 3] = ["bp_x_sc", "bu_x_sc", "hemo_x_pcv"];

/// Errors from schema construction.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Schema contains no columns")]
    Empty,

    #[error("Duplicate column name in schema: {0}")]
    DuplicateColumn(String),
}

/// The ordered column names the classifier expects, as shipped alongside the
/// model artifact. Non-empty, unique, order-significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema(Vec<String>);

impl FeatureSchema {
    /// Validate and wrap an ordered column list.
    ///
    /// # Errors
    /// Returns `SchemaError` if the list is empty or contains duplicates.
    pub fn new(columns: Vec<String>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = std::collections::HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(SchemaError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self(columns))
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fixed-order numeric input to the classifier. Slot order matches the schema
/// it was assembled against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Interaction terms derived from the raw measurements.
fn derived_entries(input: &PatientInput) -> [(&'static str, f64); 3] {
    [
        (DERIVED_COLUMNS[0], input.bp * input.sc),
        (DERIVED_COLUMNS[1], input.bu * input.sc),
        (DERIVED_COLUMNS[2], input.hemo * input.pcv),
    ]
}

/// Every column name assembly can populate: the 20 direct fields plus the
/// three interaction terms. Used by artifact loaders to flag schema columns
/// that will always stay zero.
#[must_use]
pub fn assignable_columns() -> Vec<&'static str> {
    FIELD_SPECS
        .iter()
        .map(|spec| spec.key)
        .chain(DERIVED_COLUMNS)
        .collect()
}

/// Assemble the feature vector for `input` in exactly `schema`'s column order.
///
/// Every schema slot starts at zero; the direct and derived features overwrite
/// their slots by name where the schema contains them. Columns the schema does
/// not name are dropped; schema columns nothing populates remain zero (the
/// loader warns about those once at startup).
///
/// Pure and idempotent: identical input and schema yield bit-identical output.
#[must_use]
pub fn assemble_features(input: &PatientInput, schema: &FeatureSchema) -> FeatureVector {
    let mut by_name: HashMap<&str, f64> =
        HashMap::with_capacity(input.direct_entries().len() + 3);
    for (name, value) in input.direct_entries() {
        by_name.insert(name, value);
    }
    for (name, value) in derived_entries(input) {
        by_name.insert(name, value);
    }

    let values = schema
        .columns()
        .iter()
        .map(|column| by_name.get(column.as_str()).copied().unwrap_or(0.0))
        .collect();

    FeatureVector(values)
}
