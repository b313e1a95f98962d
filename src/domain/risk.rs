//! Illustrative risk label shown next to the comparison deltas.
//!
//! This is a fixed threshold rule for display, not a validated model.

use super::patient::HypotheticalPatient;

/// Risk level classification for heart disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    /// No threshold crossed
    Low,
    /// Elevated cholesterol or blood pressure
    Moderate,
    /// Severe cholesterol, or older age with high blood pressure
    High,
}

impl RiskLevel {
    /// Classify a patient.
    ///
    /// Rules run in escalating order and a later match overrides an
    /// earlier one, so the High checks must stay after the Moderate ones.
    #[must_use]
    pub fn classify(patient: &HypotheticalPatient) -> Self {
        let mut level = Self::Low;
        if patient.cholesterol > 240.0 || patient.resting_bp > 140.0 {
            level = Self::Moderate;
        }
        if patient.cholesterol > 280.0 || (patient.age > 60.0 && patient.resting_bp > 150.0) {
            level = Self::High;
        }
        level
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }

    /// Get the associated display color (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Low => (16, 185, 129),     // Emerald (#10B981)
            Self::Moderate => (245, 158, 11), // Amber (#F59E0B)
            Self::High => (239, 68, 68),     // Red (#EF4444)
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}
