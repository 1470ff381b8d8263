//! Prediction result types.
//!
//! Represents the output of the CKD risk classifier after the decision rule.

use serde::{Deserialize, Serialize};

/// Per-class probabilities as reported by the classifier.
///
/// A named pair rather than an indexable one, so the "negative" and
/// "positive" slots can never be confused.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    /// Probability of the negative class (no CKD)
    pub negative: f64,
    /// Probability of the positive class (CKD)
    pub positive: f64,
}

/// Binary outcome label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    /// Chronic kidney disease indicated
    Ckd,
    /// No chronic kidney disease indicated
    NotCkd,
}

impl RiskLabel {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ckd => "Indicators consistent with chronic kidney disease",
            Self::NotCkd => "No significant kidney disease indicators",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ckd => write!(f, "CKD"),
            Self::NotCkd => write!(f, "NOT CKD"),
        }
    }
}

/// Result of one classification cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prediction {
    /// Thresholded outcome
    pub label: RiskLabel,
    /// Probability of CKD, exactly as the model reported it
    pub p_positive: f64,
    /// Probability of no CKD, exactly as the model reported it
    pub p_negative: f64,
}

impl Prediction {
    /// Apply the decision threshold to a probability pair.
    ///
    /// The boundary is inclusive toward the positive label:
    /// `positive >= threshold` yields [`RiskLabel::Ckd`]. Probabilities are
    /// passed through untouched, never renormalized.
    #[must_use]
    pub fn from_probabilities(probabilities: ClassProbabilities, threshold: f64) -> Self {
        let label = if probabilities.positive >= threshold {
            RiskLabel::Ckd
        } else {
            RiskLabel::NotCkd
        };

        Self {
            label,
            p_positive: probabilities.positive,
            p_negative: probabilities.negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let probs = ClassProbabilities {
            negative: 0.4,
            positive: 0.6,
        };
        let prediction = Prediction::from_probabilities(probs, 0.6);
        assert_eq!(prediction.label, RiskLabel::Ckd);
    }

    #[test]
    fn test_below_threshold_is_negative() {
        let probs = ClassProbabilities {
            negative: 0.45,
            positive: 0.55,
        };
        let prediction = Prediction::from_probabilities(probs, 0.6);
        assert_eq!(prediction.label, RiskLabel::NotCkd);
    }

    #[test]
    fn test_probabilities_are_not_renormalized() {
        // Deliberately non-normalized pair: must pass through untouched.
        let probs = ClassProbabilities {
            negative: 0.2,
            positive: 0.9,
        };
        let prediction = Prediction::from_probabilities(probs, 0.5);
        assert_eq!(prediction.p_positive, 0.9);
        assert_eq!(prediction.p_negative, 0.2);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(RiskLabel::Ckd.to_string(), "CKD");
        assert_eq!(RiskLabel::NotCkd.to_string(), "NOT CKD");
    }
}
