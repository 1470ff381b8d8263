//! Predictor service: Orchestrates feature assembly and classification.
//!
//! The service is the explicitly constructed context object holding the
//! loaded classifier and the decision threshold. Built once at startup,
//! immutable for the process lifetime; each prediction is a pure
//! request/response cycle with no state held between invocations.

use std::sync::Arc;

use crate::domain::{assemble_features, FeatureVector, PatientInput, Prediction};
use crate::ports::{Classifier, ModelError};

/// Apply the decision rule to one feature vector.
///
/// Obtains per-class probabilities from `model` and labels the result
/// positive iff `p_positive >= threshold` (inclusive boundary). Probabilities
/// are reported exactly as the model returned them.
///
/// `features` must have been assembled against `model`'s schema; this
/// function does not validate that, the model rejects mismatches itself.
///
/// # Errors
/// Returns `ModelError` if the model rejects the feature vector.
pub fn classify<C>(
    features: &FeatureVector,
    model: &C,
    threshold: f64,
) -> Result<Prediction, ModelError>
where
    C: Classifier + ?Sized,
{
    let probabilities = model.predict_probabilities(features)?;
    Ok(Prediction::from_probabilities(probabilities, threshold))
}

/// Service for running thresholded classification over patient inputs.
pub struct PredictorService<C>
where
    C: Classifier,
{
    model: Arc<C>,
    threshold: f64,
}

impl<C> PredictorService<C>
where
    C: Classifier,
{
    /// Create a new predictor service.
    ///
    /// `threshold` must already be validated into `[0, 1]` by the caller
    /// (startup configuration).
    pub fn new(model: Arc<C>, threshold: f64) -> Self {
        Self { model, threshold }
    }

    /// The configured decision threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Run one full prediction cycle for a patient input.
    ///
    /// Assembles the feature vector in the model's trained column order,
    /// then applies the decision rule.
    ///
    /// # Errors
    /// Returns `ModelError` if the model rejects the assembled vector. The
    /// failure is fatal for this cycle only; no partial result is produced.
    pub fn predict(&self, input: &PatientInput) -> Result<Prediction, ModelError> {
        tracing::debug!("Assembling feature vector...");
        let features = assemble_features(input, self.model.schema());

        tracing::debug!("Classifying {} features...", features.len());
        let prediction = classify(&features, self.model.as_ref(), self.threshold)?;

        tracing::info!(
            "Prediction complete: label={}, p_positive={:.4}, p_negative={:.4}",
            prediction.label,
            prediction.p_positive,
            prediction.p_negative
        );

        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        assignable_columns, ClassProbabilities, FeatureSchema, RiskLabel,
    };

    /// Stub classifier returning a fixed probability pair.
    struct StubClassifier {
        schema: FeatureSchema,
        probabilities: ClassProbabilities,
    }

    impl StubClassifier {
        fn new(negative: f64, positive: f64) -> Self {
            let columns = assignable_columns().into_iter().map(String::from).collect();
            Self {
                schema: FeatureSchema::new(columns).expect("schema should validate"),
                probabilities: ClassProbabilities { negative, positive },
            }
        }
    }

    impl Classifier for StubClassifier {
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
            Ok(self.probabilities)
        }
    }

    #[test]
    fn test_default_input_positive_scenario() {
        // Stub returns (0.3, 0.7); threshold 0.6 => CKD at exactly those probabilities.
        let service = PredictorService::new(Arc::new(StubClassifier::new(0.3, 0.7)), 0.6);
        let prediction = service
            .predict(&PatientInput::defaults())
            .expect("predict should succeed");

        assert_eq!(prediction.label, RiskLabel::Ckd);
        assert_eq!(prediction.p_positive, 0.7);
        assert_eq!(prediction.p_negative, 0.3);
    }

    #[test]
    fn test_default_input_negative_scenario() {
        let service = PredictorService::new(Arc::new(StubClassifier::new(0.45, 0.55)), 0.6);
        let prediction = service
            .predict(&PatientInput::defaults())
            .expect("predict should succeed");

        assert_eq!(prediction.label, RiskLabel::NotCkd);
    }

    #[test]
    fn test_classify_inclusive_at_exact_threshold() {
        let model = StubClassifier::new(0.4, 0.6);
        let features = assemble_features(&PatientInput::defaults(), model.schema());

        let prediction = classify(&features, &model, 0.6).expect("classify should succeed");
        assert_eq!(prediction.label, RiskLabel::Ckd);
    }

    #[test]
    fn test_classify_does_not_renormalize() {
        let model = StubClassifier::new(0.2, 0.9);
        let features = assemble_features(&PatientInput::defaults(), model.schema());

        let prediction = classify(&features, &model, 0.5).expect("classify should succeed");
        assert_eq!(prediction.p_positive, 0.9);
        assert_eq!(prediction.p_negative, 0.2);
    }

    #[test]
    fn test_shape_mismatch_surfaces_as_error() {
        let model = StubClassifier::new(0.5, 0.5);
        let short = FeatureSchema::new(vec!["age".into()]).expect("schema");
        let features = assemble_features(&PatientInput::defaults(), &short);

        assert!(classify(&features, &model, 0.5).is_err());
    }
}
