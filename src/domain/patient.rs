//! Patient data types for chronic kidney disease risk prediction.
//!
//! Fields follow the UCI chronic kidney disease dataset after one-hot
//! encoding of the categorical attributes.

use serde::{Deserialize, Serialize};

/// Raw patient input from the TUI: 14 lab measurements plus 6 binary flags.
///
/// Values are always within the ranges declared in [`FIELD_SPECS`]; the form
/// controls clamp at the bounds, so out-of-range input is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    /// Age in years (20-80)
    pub age: f64,
    /// Blood pressure in mmHg (70-180)
    pub bp: f64,
    /// Urine specific gravity (1.005-1.030)
    pub sg: f64,
    /// Albumin grade (0-5)
    pub al: f64,
    /// Sugar grade (0-5)
    pub su: f64,
    /// Blood glucose random in mg/dL (70-200)
    pub bgr: f64,
    /// Blood urea in mg/dL (10-50)
    pub bu: f64,
    /// Serum creatinine in mg/dL (0.6-1.5)
    pub sc: f64,
    /// Sodium in mEq/L (135-145)
    pub sod: f64,
    /// Potassium in mEq/L (3.5-5.5)
    pub pot: f64,
    /// Hemoglobin in g/dL (10.0-17.5)
    pub hemo: f64,
    /// Packed cell volume in % (30-50)
    pub pcv: f64,
    /// White blood cell count per cmm (4000-11000)
    pub wbcc: f64,
    /// Red blood cell count in millions/cmm (3.5-5.5)
    pub rbcc: f64,
    /// Hypertension: 0 = no, 1 = yes
    pub htn_yes: f64,
    /// Diabetes mellitus: 0 = no, 1 = yes
    pub dm_yes: f64,
    /// Coronary artery disease: 0 = no, 1 = yes
    pub cad_yes: f64,
    /// Appetite: 0 = good, 1 = poor
    pub appet_poor: f64,
    /// Pedal edema: 0 = no, 1 = yes
    pub pe_yes: f64,
    /// Anemia: 0 = no, 1 = yes
    pub ane_yes: f64,
}

impl PatientInput {
    /// Named (column, value) pairs for the 20 direct-mapped features.
    /// Pair order matches [`FIELD_SPECS`].
    #[must_use]
    pub fn direct_entries(&self) -> [(&'static str, f64); 20] {
        [
            ("age", self.age),
            ("bp", self.bp),
            ("sg", self.sg),
            ("al", self.al),
            ("su", self.su),
            ("bgr", self.bgr),
            ("bu", self.bu),
            ("sc", self.sc),
            ("sod", self.sod),
            ("pot", self.pot),
            ("hemo", self.hemo),
            ("pcv", self.pcv),
            ("wbcc", self.wbcc),
            ("rbcc", self.rbcc),
            ("htn_yes", self.htn_yes),
            ("dm_yes", self.dm_yes),
            ("cad_yes", self.cad_yes),
            ("appet_poor", self.appet_poor),
            ("pe_yes", self.pe_yes),
            ("ane_yes", self.ane_yes),
        ]
    }

    /// Build an input from 20 values ordered as in [`FIELD_SPECS`].
    ///
    /// # Errors
    /// Returns error if the slice length is not 20.
    pub fn from_field_values(v: &[f64]) -> Result<Self, String> {
        if v.len() != FIELD_SPECS.len() {
            return Err(format!(
                "Expected {} field values, got {}",
                FIELD_SPECS.len(),
                v.len()
            ));
        }

        Ok(Self {
            age: v[0],
            bp: v[1],
            sg: v[2],
            al: v[3],
            su: v[4],
            bgr: v[5],
            bu: v[6],
            sc: v[7],
            sod: v[8],
            pot: v[9],
            hemo: v[10],
            pcv: v[11],
            wbcc: v[12],
            rbcc: v[13],
            htn_yes: v[14],
            dm_yes: v[15],
            cad_yes: v[16],
            appet_poor: v[17],
            pe_yes: v[18],
            ane_yes: v[19],
        })
    }

    /// Input with every field at its declared default.
    #[must_use]
    pub fn defaults() -> Self {
        let values: Vec<f64> = FIELD_SPECS.iter().map(|s| s.default).collect();
        // FIELD_SPECS has exactly 20 entries.
        Self::from_field_values(&values).unwrap_or_else(|_| unreachable!())
    }
}

/// A submitted patient input together with its entry timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub input: PatientInput,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PatientRecord {
    /// Snapshot the given input at the current time.
    #[must_use]
    pub fn new(input: PatientInput) -> Self {
        Self {
            input,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Static description of one form control.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Model column name
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Unit / hint text
    pub hint: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    /// Keyboard adjustment increment
    pub step: f64,
    /// Binary flags render and toggle differently from sliders
    pub binary: bool,
}

/// The 20 input controls: name, range, default, and step.
pub const FIELD_SPECS: [FieldSpec; 20] = [
    FieldSpec {
        key: "age",
        label: "Age",
        hint: "years",
        min: 20.0,
        max: 80.0,
        default: 30.0,
        step: 1.0,
        binary: false,
    },
    FieldSpec {
        key: "bp",
        label: "Blood Pressure",
        hint: "mmHg",
        min: 70.0,
        max: 180.0,
        default: 120.0,
        step: 1.0,
        binary: false,
    },
    FieldSpec {
        key: "sg",
        label: "Specific Gravity",
        hint: "",
        min: 1.005,
        max: 1.030,
        default: 1.020,
        step: 0.001,
        binary: false,
    },
    FieldSpec {
        key: "al",
        label: "Albumin",
        hint: "grade",
        min: 0.0,
        max: 5.0,
        default: 0.0,
        step: 1.0,
        binary: false,
    },
    FieldSpec {
        key: "su",
        label: "Sugar",
        hint: "grade",
        min: 0.0,
        max: 5.0,
        default: 0.0,
        step: 1.0,
        binary: false,
    },
    FieldSpec {
        key: "bgr",
        label: "Blood Glucose Random",
        hint: "mg/dL",
        min: 70.0,
        max: 200.0,
        default: 90.0,
        step: 1.0,
        binary: false,
    },
    FieldSpec {
        key: "bu",
        label: "Blood Urea",
        hint: "mg/dL",
        min: 10.0,
        max: 50.0,
        default: 15.0,
        step: 1.0,
        binary: false,
    },
    FieldSpec {
        key: "sc",
        label: "Serum Creatinine",
        hint: "mg/dL",
        min: 0.6,
        max: 1.5,
        default: 1.0,
        step: 0.1,
        binary: false,
    },
    FieldSpec {
        key: "sod",
        label: "Sodium",
        hint: "mEq/L",
        min: 135.0,
        max: 145.0,
        default: 140.0,
        step: 1.0,
        binary: false,
    },
    FieldSpec {
        key: "pot",
        label: "Potassium",
        hint: "mEq/L",
        min: 3.5,
        max: 5.5,
        default: 4.5,
        step: 0.1,
        binary: false,
    },
    FieldSpec {
        key: "hemo",
        label: "Hemoglobin",
        hint: "g/dL",
        min: 10.0,
        max: 17.5,
        default: 15.0,
        step: 0.1,
        binary: false,
    },
    FieldSpec {
        key: "pcv",
        label: "Packed Cell Volume",
        hint: "%",
        min: 30.0,
        max: 50.0,
        default: 45.0,
        step: 1.0,
        binary: false,
    },
    FieldSpec {
        key: "wbcc",
        label: "White Blood Cell Count",
        hint: "per cmm",
        min: 4000.0,
        max: 11000.0,
        default: 6000.0,
        step: 100.0,
        binary: false,
    },
    FieldSpec {
        key: "rbcc",
        label: "Red Blood Cell Count",
        hint: "mill/cmm",
        min: 3.5,
        max: 5.5,
        default: 4.5,
        step: 0.1,
        binary: false,
    },
    FieldSpec {
        key: "htn_yes",
        label: "Hypertension",
        hint: "no/yes",
        min: 0.0,
        max: 1.0,
        default: 0.0,
        step: 1.0,
        binary: true,
    },
    FieldSpec {
        key: "dm_yes",
        label: "Diabetes Mellitus",
        hint: "no/yes",
        min: 0.0,
        max: 1.0,
        default: 0.0,
        step: 1.0,
        binary: true,
    },
    FieldSpec {
        key: "cad_yes",
        label: "Coronary Artery Disease",
        hint: "no/yes",
        min: 0.0,
        max: 1.0,
        default: 0.0,
        step: 1.0,
        binary: true,
    },
    FieldSpec {
        key: "appet_poor",
        label: "Appetite",
        hint: "good/poor",
        min: 0.0,
        max: 1.0,
        default: 0.0,
        step: 1.0,
        binary: true,
    },
    FieldSpec {
        key: "pe_yes",
        label: "Pedal Edema",
        hint: "no/yes",
        min: 0.0,
        max: 1.0,
        default: 0.0,
        step: 1.0,
        binary: true,
    },
    FieldSpec {
        key: "ane_yes",
        label: "Anemia",
        hint: "no/yes",
        min: 0.0,
        max: 1.0,
        default: 0.0,
        step: 1.0,
        binary: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_field_specs() {
        let input = PatientInput::defaults();
        assert!((input.age - 30.0).abs() < f64::EPSILON);
        assert!((input.sg - 1.020).abs() < f64::EPSILON);
        assert!((input.wbcc - 6000.0).abs() < f64::EPSILON);
        assert!(input.htn_yes.abs() < f64::EPSILON);
    }

    #[test]
    fn test_direct_entries_order_matches_specs() {
        let input = PatientInput::defaults();
        for (entry, spec) in input.direct_entries().iter().zip(FIELD_SPECS.iter()) {
            assert_eq!(entry.0, spec.key);
        }
    }

    #[test]
    fn test_from_field_values_rejects_wrong_length() {
        assert!(PatientInput::from_field_values(&[1.0; 19]).is_err());
        assert!(PatientInput::from_field_values(&[1.0; 21]).is_err());
    }

    #[test]
    fn test_defaults_within_declared_ranges() {
        for spec in FIELD_SPECS.iter() {
            assert!(
                spec.default >= spec.min && spec.default <= spec.max,
                "{} default out of range",
                spec.key
            );
        }
    }
}
