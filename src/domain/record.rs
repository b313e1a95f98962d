//! Historical patient observations.
//!
//! Field names follow the heart-failure cohort CSV (`Age`, `Sex`,
//! `ChestPainType`, ...). Every field is optional: ingestion tolerates
//! missing or mistyped cells, and downstream code treats an absent numeric
//! field as non-comparable instead of coercing it to zero.

/// Pie category used for records without a chest-pain type.
pub const UNKNOWN_CHEST_PAIN: &str = "Unknown";

/// Biological sex as recorded in the cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse the cohort code (`M` / `F`, case-insensitive).
    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim() {
            "M" | "m" => Some(Self::Male),
            "F" | "f" => Some(Self::Female),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

/// Exercise-induced angina flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseAngina {
    Yes,
    No,
}

impl ExerciseAngina {
    /// Parse the cohort code (`Y` / `N`, case-insensitive).
    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Y" | "y" => Some(Self::Yes),
            "N" | "n" => Some(Self::No),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Yes => "Y",
            Self::No => "N",
        }
    }
}

/// One historical patient observation.
///
/// Records are immutable once ingested. Numeric attributes are `f64` so
/// that committed hypothetical patients (whose inputs may be fractional)
/// share the same shape as ingested rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// Age in years
    pub age: Option<f64>,

    pub sex: Option<Sex>,

    /// Open set observed in data (ATA, NAP, ASY, TA, ...)
    pub chest_pain_type: Option<String>,

    /// Resting blood pressure in mmHg
    pub resting_bp: Option<f64>,

    /// Serum cholesterol in mg/dL
    pub cholesterol: Option<f64>,

    /// Maximum heart rate achieved in bpm
    pub max_hr: Option<f64>,

    pub exercise_angina: Option<ExerciseAngina>,

    /// Outcome label: 0 = no heart disease, 1 = heart disease
    pub heart_disease: Option<u8>,
}

impl Record {
    /// Category key used for chest-pain aggregation and filtering.
    ///
    /// Absent or blank types collapse into [`UNKNOWN_CHEST_PAIN`].
    #[must_use]
    pub fn chest_pain_category(&self) -> &str {
        match self.chest_pain_type.as_deref() {
            Some(kind) if !kind.trim().is_empty() => kind,
            _ => UNKNOWN_CHEST_PAIN,
        }
    }

    /// Whether the outcome label marks this record as diseased.
    #[must_use]
    pub fn has_heart_disease(&self) -> bool {
        self.heart_disease == Some(1)
    }

    /// True when no attribute carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.sex.is_none()
            && self.chest_pain_type.is_none()
            && self.resting_bp.is_none()
            && self.cholesterol.is_none()
            && self.max_hr.is_none()
            && self.exercise_angina.is_none()
            && self.heart_disease.is_none()
    }
}
