//! The hypothetical patient compared against the cohort.

use super::record::{ExerciseAngina, Record, Sex};

/// Errors raised while applying raw form input to the patient.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("Unknown patient field: {0}")]
    InvalidField(String),

    #[error("{field}: cannot use {value:?}")]
    InvalidValue { field: PatientField, value: String },
}

/// The fixed attribute set of the cohort schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatientField {
    Age,
    Sex,
    ChestPainType,
    RestingBp,
    Cholesterol,
    MaxHr,
    ExerciseAngina,
    HeartDisease,
}

impl PatientField {
    /// Form order.
    pub const ALL: [PatientField; 8] = [
        Self::Age,
        Self::Sex,
        Self::ChestPainType,
        Self::RestingBp,
        Self::Cholesterol,
        Self::MaxHr,
        Self::ExerciseAngina,
        Self::HeartDisease,
    ];

    /// Column / attribute name as it appears in the CSV header.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Sex => "Sex",
            Self::ChestPainType => "ChestPainType",
            Self::RestingBp => "RestingBP",
            Self::Cholesterol => "Cholesterol",
            Self::MaxHr => "MaxHR",
            Self::ExerciseAngina => "ExerciseAngina",
            Self::HeartDisease => "HeartDisease",
        }
    }

    /// Resolve an attribute name.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidField`] for names outside the schema.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == name.trim())
            .ok_or_else(|| FieldError::InvalidField(name.to_string()))
    }

    /// Whether raw input for this field is coerced to a number.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Age | Self::RestingBp | Self::Cholesterol | Self::MaxHr | Self::HeartDisease
        )
    }
}

impl std::fmt::Display for PatientField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The single user-editable comparison subject.
///
/// Same attribute shape as [`Record`], but every field always holds a value.
#[derive(Debug, Clone, PartialEq)]
pub struct HypotheticalPatient {
    pub age: f64,
    pub sex: Sex,
    pub chest_pain_type: String,
    pub resting_bp: f64,
    pub cholesterol: f64,
    pub max_hr: f64,
    pub exercise_angina: ExerciseAngina,
    /// User-editable outcome label, 0 or 1
    pub heart_disease: u8,
}

impl Default for HypotheticalPatient {
    fn default() -> Self {
        Self {
            age: 45.0,
            sex: Sex::Male,
            chest_pain_type: "ATA".to_string(),
            resting_bp: 130.0,
            cholesterol: 220.0,
            max_hr: 150.0,
            exercise_angina: ExerciseAngina::No,
            heart_disease: 0,
        }
    }
}

impl HypotheticalPatient {
    /// Coerce `raw` for `field` and store it.
    ///
    /// Nothing is written unless coercion succeeds.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidValue`] when `raw` cannot be coerced.
    pub fn apply(&mut self, field: PatientField, raw: &str) -> Result<(), FieldError> {
        let invalid = || FieldError::InvalidValue {
            field,
            value: raw.to_string(),
        };

        match field {
            PatientField::Age => self.age = parse_number(raw).ok_or_else(invalid)?,
            PatientField::RestingBp => self.resting_bp = parse_number(raw).ok_or_else(invalid)?,
            PatientField::Cholesterol => {
                self.cholesterol = parse_number(raw).ok_or_else(invalid)?;
            }
            PatientField::MaxHr => self.max_hr = parse_number(raw).ok_or_else(invalid)?,
            PatientField::HeartDisease => {
                self.heart_disease = parse_label(raw).ok_or_else(invalid)?;
            }
            PatientField::Sex => self.sex = Sex::from_code(raw).ok_or_else(invalid)?,
            PatientField::ExerciseAngina => {
                self.exercise_angina = ExerciseAngina::from_code(raw).ok_or_else(invalid)?;
            }
            PatientField::ChestPainType => {
                let kind = raw.trim();
                if kind.is_empty() {
                    return Err(invalid());
                }
                self.chest_pain_type = kind.to_string();
            }
        }

        Ok(())
    }

    /// Current value of `field`, formatted for form display.
    #[must_use]
    pub fn display_value(&self, field: PatientField) -> String {
        match field {
            PatientField::Age => format_number(self.age),
            PatientField::Sex => self.sex.code().to_string(),
            PatientField::ChestPainType => self.chest_pain_type.clone(),
            PatientField::RestingBp => format_number(self.resting_bp),
            PatientField::Cholesterol => format_number(self.cholesterol),
            PatientField::MaxHr => format_number(self.max_hr),
            PatientField::ExerciseAngina => self.exercise_angina.code().to_string(),
            PatientField::HeartDisease => self.heart_disease.to_string(),
        }
    }

    /// Value copy of the patient as a dataset record.
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record {
            age: Some(self.age),
            sex: Some(self.sex),
            chest_pain_type: Some(self.chest_pain_type.clone()),
            resting_bp: Some(self.resting_bp),
            cholesterol: Some(self.cholesterol),
            max_hr: Some(self.max_hr),
            exercise_angina: Some(self.exercise_angina),
            heart_disease: Some(self.heart_disease),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integer coercion of the outcome label; fractional input truncates.
fn parse_label(raw: &str) -> Option<u8> {
    match parse_number(raw)?.trunc() as i64 {
        0 => Some(0),
        1 => Some(1),
        _ => None,
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in PatientField::ALL {
            assert_eq!(PatientField::from_name(field.name()), Ok(field));
        }
        assert_eq!(
            PatientField::from_name("Weight"),
            Err(FieldError::InvalidField("Weight".to_string()))
        );
    }

    #[test]
    fn test_numeric_coercion() {
        let mut patient = HypotheticalPatient::default();
        patient
            .apply(PatientField::Cholesterol, " 262.5 ")
            .expect("Should coerce number");
        assert!((patient.cholesterol - 262.5).abs() < f64::EPSILON);

        patient
            .apply(PatientField::HeartDisease, "1")
            .expect("Should coerce label");
        assert_eq!(patient.heart_disease, 1);
    }

    #[test]
    fn test_rejected_value_leaves_patient_unchanged() {
        let mut patient = HypotheticalPatient::default();
        let before = patient.clone();

        assert!(patient.apply(PatientField::Age, "").is_err());
        assert!(patient.apply(PatientField::MaxHr, "fast").is_err());
        assert!(patient.apply(PatientField::HeartDisease, "2").is_err());
        assert!(patient.apply(PatientField::Sex, "X").is_err());
        assert!(patient.apply(PatientField::ChestPainType, "   ").is_err());

        assert_eq!(patient, before);
    }

    #[test]
    fn test_to_record_copies_all_fields() {
        let patient = HypotheticalPatient::default();
        let record = patient.to_record();

        assert_eq!(record.age, Some(45.0));
        assert_eq!(record.sex, Some(Sex::Male));
        assert_eq!(record.chest_pain_type.as_deref(), Some("ATA"));
        assert_eq!(record.heart_disease, Some(0));
    }

    #[test]
    fn test_display_value() {
        let patient = HypotheticalPatient::default();
        assert_eq!(patient.display_value(PatientField::Age), "45");
        assert_eq!(patient.display_value(PatientField::ExerciseAngina), "N");
    }
}
