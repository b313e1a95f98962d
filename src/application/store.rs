//! Application state store.
//!
//! Exclusively owns the dataset, the hypothetical patient and the filter
//! set. Every mutation goes through a named entry point, and each call
//! either fully applies or fully rejects before returning. None of them
//! triggers a recompute; the interaction router decides what to redraw.

use crate::domain::{AgeRange, FilterState, HypotheticalPatient, PatientField, Record};
use crate::CardioscopeError;

/// Shared dashboard state with a single writer.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    dataset: Vec<Record>,
    patient: HypotheticalPatient,
    filter: FilterState,
}

impl StateStore {
    /// Create an empty store with the default patient.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn dataset(&self) -> &[Record] {
        &self.dataset
    }

    #[must_use]
    pub fn patient(&self) -> &HypotheticalPatient {
        &self.patient
    }

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Update one patient attribute from raw form input.
    ///
    /// `field` must be one of the fixed attribute names (`Age`, `RestingBP`,
    /// ...). Numeric fields are coerced to numbers and `HeartDisease` to 0/1.
    ///
    /// # Errors
    /// Returns `InvalidField` for unknown names and `InvalidValue` when the
    /// raw value cannot be coerced. The patient is unchanged in both cases.
    pub fn set_patient_field(&mut self, field: &str, value: &str) -> Result<PatientField, CardioscopeError> {
        let field = PatientField::from_name(field).inspect_err(|e| {
            tracing::warn!("Rejected patient update: {}", e);
        })?;
        self.set_field(field, value)?;
        Ok(field)
    }

    /// Typed variant of [`Self::set_patient_field`].
    ///
    /// # Errors
    /// Returns `InvalidValue` when the raw value cannot be coerced.
    pub fn set_field(&mut self, field: PatientField, value: &str) -> Result<(), CardioscopeError> {
        self.patient.apply(field, value).inspect_err(|e| {
            tracing::warn!("Rejected patient update: {}", e);
        })?;
        tracing::debug!(field = field.name(), "Patient field updated");
        Ok(())
    }

    /// Replace the dataset wholesale.
    ///
    /// Records are taken as ingestion produced them; consumers tolerate
    /// missing numeric fields. Active filters are kept.
    pub fn load_dataset(&mut self, records: Vec<Record>) {
        tracing::info!(
            previous = self.dataset.len(),
            loaded = records.len(),
            "Dataset replaced"
        );
        self.dataset = records;
    }

    /// Append a value snapshot of the current patient to the dataset.
    ///
    /// Returns the new dataset length.
    pub fn commit_patient(&mut self) -> usize {
        self.dataset.push(self.patient.to_record());
        tracing::info!(total = self.dataset.len(), "Hypothetical patient committed");
        self.dataset.len()
    }

    /// Toggle the age-range filter. Returns whether it is active afterwards.
    pub fn toggle_age_range_filter(&mut self, range: AgeRange) -> bool {
        let active = self.filter.toggle_age_range(range);
        tracing::debug!(range = %range, active, "Age filter toggled");
        active
    }

    /// Toggle the chest-pain filter. Returns whether it is active afterwards.
    pub fn toggle_chest_pain_filter(&mut self, kind: &str) -> bool {
        let active = self.filter.toggle_chest_pain(kind);
        tracing::debug!(kind, active, "Chest pain filter toggled");
        active
    }
}
