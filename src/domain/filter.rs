//! Scatter filters set by clicking histogram bins and pie slices.

use super::record::Record;

/// Half-open age interval `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeRange {
    pub min: f64,
    pub max: f64,
}

impl AgeRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, age: f64) -> bool {
        age >= self.min && age < self.max
    }
}

impl std::fmt::Display for AgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}-{:.0}", self.min, self.max)
    }
}

/// The pair of optional, independently toggled filters.
///
/// Both filters restrict only the derived scatter view; the dataset is
/// never touched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub age_range: Option<AgeRange>,
    pub chest_pain: Option<String>,
}

impl FilterState {
    /// Clear the age filter when `range` has the active lower bound,
    /// otherwise make `range` the active filter.
    ///
    /// Returns whether an age filter is active afterwards.
    pub fn toggle_age_range(&mut self, range: AgeRange) -> bool {
        match self.age_range {
            Some(active) if active.min == range.min => self.age_range = None,
            _ => self.age_range = Some(range),
        }
        self.age_range.is_some()
    }

    /// Same toggle semantics keyed on exact string equality.
    ///
    /// Returns whether a chest-pain filter is active afterwards.
    pub fn toggle_chest_pain(&mut self, kind: &str) -> bool {
        if self.chest_pain.as_deref() == Some(kind) {
            self.chest_pain = None;
        } else {
            self.chest_pain = Some(kind.to_string());
        }
        self.chest_pain.is_some()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.age_range.is_some() || self.chest_pain.is_some()
    }

    /// AND-combination of the active filters.
    ///
    /// A record without an age never matches an active age filter.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        let age_ok = match (self.age_range, record.age) {
            (None, _) => true,
            (Some(range), Some(age)) => range.contains(age),
            (Some(_), None) => false,
        };

        let pain_ok = match self.chest_pain.as_deref() {
            None => true,
            Some(kind) => record.chest_pain_category() == kind,
        };

        age_ok && pain_ok
    }
}
