//! Logistic-regression artifact adapter.
//!
//! Loads the model exported by the training pipeline: a JSON file carrying
//! the trained column order (`feature_order`), standardization parameters,
//! and logistic-regression coefficients. The artifact is validated once at
//! startup and immutable afterwards.
//!
//! This crate does not define the training procedure; it only consumes the
//! export.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{
    assignable_columns, ClassProbabilities, FeatureSchema, FeatureVector,
};
use crate::ports::{Classifier, ModelError};

/// Artifact file name expected inside a model directory.
const MODEL_FILE: &str = "model.json";

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedLogisticModel {
    /// Ordered column names the coefficients were trained against
    pub feature_order: Vec<String>,
    /// One coefficient per column, in `feature_order` order
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Standardizer mean per column
    pub scaler_mean: Vec<f64>,
    /// Standardizer scale (std deviation) per column
    pub scaler_scale: Vec<f64>,
}

/// A validated, loaded logistic-regression classifier.
#[derive(Debug)]
pub struct LogisticModel {
    schema: FeatureSchema,
    coefficients: Vec<f64>,
    intercept: f64,
    scaler_mean: Vec<f64>,
    scaler_scale: Vec<f64>,
}

impl LogisticModel {
    /// Load and validate a model artifact.
    ///
    /// `path` may be the JSON file itself or a directory containing
    /// `model.json`.
    ///
    /// # Errors
    /// Returns `ModelError` if the artifact is missing, unreadable, or
    /// internally inconsistent. All load failures are fatal at startup.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let model_path = if path.is_dir() {
            path.join(MODEL_FILE)
        } else {
            path.to_path_buf()
        };

        let content = std::fs::read_to_string(&model_path)?;
        let exported: ExportedLogisticModel = serde_json::from_str(&content)?;

        let model = Self::from_exported(exported)?;

        tracing::info!(
            "Loaded model from {:?} ({} features, intercept={:.4})",
            model_path,
            model.schema.len(),
            model.intercept
        );
        model.warn_unassignable_columns();

        Ok(model)
    }

    /// Validate an in-memory export.
    ///
    /// # Errors
    /// Returns `ModelError` if parameter arrays disagree with the schema
    /// length or contain unusable values.
    pub fn from_exported(exported: ExportedLogisticModel) -> Result<Self, ModelError> {
        let schema = FeatureSchema::new(exported.feature_order)?;
        let n = schema.len();

        if exported.coefficients.len() != n
            || exported.scaler_mean.len() != n
            || exported.scaler_scale.len() != n
        {
            return Err(ModelError::InvalidParameters(format!(
                "Parameter lengths do not match feature_order length {n} \
                 (coefficients={}, scaler_mean={}, scaler_scale={})",
                exported.coefficients.len(),
                exported.scaler_mean.len(),
                exported.scaler_scale.len()
            )));
        }

        let finite = |values: &[f64]| values.iter().all(|v| v.is_finite());
        if !finite(&exported.coefficients)
            || !finite(&exported.scaler_mean)
            || !finite(&exported.scaler_scale)
            || !exported.intercept.is_finite()
        {
            return Err(ModelError::InvalidParameters(
                "Model parameters must be finite".into(),
            ));
        }

        if exported.scaler_scale.iter().any(|s| *s == 0.0) {
            return Err(ModelError::InvalidParameters(
                "scaler_scale must not contain zeros".into(),
            ));
        }

        Ok(Self {
            schema,
            coefficients: exported.coefficients,
            intercept: exported.intercept,
            scaler_mean: exported.scaler_mean,
            scaler_scale: exported.scaler_scale,
        })
    }

    /// Flag schema columns that feature assembly can never populate.
    ///
    /// Assembly silently zero-fills such columns, so a typo in the artifact's
    /// `feature_order` would otherwise go unnoticed. Logged once at load.
    fn warn_unassignable_columns(&self) {
        let assignable = assignable_columns();
        for column in self.schema.columns() {
            if !assignable.contains(&column.as_str()) {
                tracing::warn!(
                    "Schema column {:?} is not produced by feature assembly and will always be zero",
                    column
                );
            }
        }
    }

    fn sigmoid(z: f64) -> f64 {
        1.0 / (1.0 + (-z).exp())
    }
}

impl Classifier for LogisticModel {
    fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<ClassProbabilities, ModelError> {
        if features.len() != self.schema.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.schema.len(),
                got: features.len(),
            });
        }

        // Standardize then take the linear combination, matching the
        // training pipeline: z = sum(coef_i * (x_i - mean_i) / scale_i) + b.
        let mut z = self.intercept;
        for (i, x) in features.values().iter().enumerate() {
            let standardized = (x - self.scaler_mean[i]) / self.scaler_scale[i];
            z += self.coefficients[i] * standardized;
        }

        let positive = Self::sigmoid(z);
        Ok(ClassProbabilities {
            negative: 1.0 - positive,
            positive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{assemble_features, PatientInput};

    fn identity_export(columns: &[&str], coefficients: Vec<f64>) -> ExportedLogisticModel {
        let n = columns.len();
        ExportedLogisticModel {
            feature_order: columns.iter().map(|c| (*c).to_string()).collect(),
            coefficients,
            intercept: 0.0,
            scaler_mean: vec![0.0; n],
            scaler_scale: vec![1.0; n],
        }
    }

    #[test]
    fn test_load_from_directory_and_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let model_path = temp.path().join("model.json");
        let export = identity_export(&["age", "bp"], vec![0.5, -0.5]);
        let json = serde_json::to_string(&export).expect("serialize export");
        std::fs::write(&model_path, json).expect("write artifact");

        assert!(LogisticModel::load(temp.path()).is_ok());
        assert!(LogisticModel::load(&model_path).is_ok());
    }

    #[test]
    fn test_load_fails_on_missing_artifact() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = LogisticModel::load(temp.path()).expect_err("must fail");
        assert!(matches!(err, ModelError::Read(_)));
    }

    #[test]
    fn test_load_fails_on_malformed_json() {
        let temp = tempfile::tempdir().expect("tempdir");
        let model_path = temp.path().join("model.json");
        std::fs::write(&model_path, "{not json").expect("write artifact");

        let err = LogisticModel::load(&model_path).expect_err("must fail");
        assert!(matches!(err, ModelError::Parse(_)));
    }

    #[test]
    fn test_rejects_mismatched_parameter_lengths() {
        let mut export = identity_export(&["age", "bp"], vec![0.5, -0.5]);
        export.coefficients.push(1.0);

        let err = LogisticModel::from_exported(export).expect_err("must fail");
        assert!(matches!(err, ModelError::InvalidParameters(_)));
    }

    #[test]
    fn test_rejects_duplicate_schema_columns() {
        let export = identity_export(&["age", "age"], vec![0.5, -0.5]);
        let err = LogisticModel::from_exported(export).expect_err("must fail");
        assert!(matches!(err, ModelError::InvalidSchema(_)));
    }

    #[test]
    fn test_rejects_zero_scale() {
        let mut export = identity_export(&["age", "bp"], vec![0.5, -0.5]);
        export.scaler_scale[1] = 0.0;

        let err = LogisticModel::from_exported(export).expect_err("must fail");
        assert!(matches!(err, ModelError::InvalidParameters(_)));
    }

    #[test]
    fn test_rejects_non_finite_parameters() {
        let mut export = identity_export(&["age", "bp"], vec![0.5, f64::NAN]);
        export.coefficients[1] = f64::NAN;
        let err = LogisticModel::from_exported(export).expect_err("must fail");
        assert!(matches!(err, ModelError::InvalidParameters(_)));
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let model = LogisticModel::from_exported(identity_export(&["age", "bp"], vec![1.0, 1.0]))
            .expect("valid export");

        // Assemble against a different (shorter) schema.
        let short = FeatureSchema::new(vec!["age".into()]).expect("schema");
        let features = assemble_features(&PatientInput::defaults(), &short);

        let err = model
            .predict_probabilities(&features)
            .expect_err("must fail");
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_logit_math_on_known_coefficients() {
        // Identity scaler, single feature: p = sigmoid(coef * x).
        let model = LogisticModel::from_exported(identity_export(&["al"], vec![2.0]))
            .expect("valid export");

        let schema = model.schema().clone();
        let mut input = PatientInput::defaults();
        input.al = 1.0;
        let features = assemble_features(&input, &schema);

        let probs = model
            .predict_probabilities(&features)
            .expect("predict should succeed");
        let expected = 1.0 / (1.0 + (-2.0f64).exp());
        assert!((probs.positive - expected).abs() < 1e-12);
        assert!((probs.negative - (1.0 - expected)).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_are_complementary() {
        let model =
            LogisticModel::from_exported(identity_export(&["age", "bgr"], vec![0.01, -0.01]))
                .expect("valid export");
        let features = assemble_features(&PatientInput::defaults(), model.schema());
        let probs = model
            .predict_probabilities(&features)
            .expect("predict should succeed");

        assert!((probs.positive + probs.negative - 1.0).abs() < 1e-12);
        assert!(probs.positive > 0.0 && probs.positive < 1.0);
    }
}
