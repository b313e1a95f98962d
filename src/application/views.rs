//! Derived-view builder.
//!
//! Pure projections of the current [`StateStore`] into exactly what each
//! chart draws. Views are rebuilt on every invalidation and never cached,
//! so a renderer cannot read a stale one.

use indexmap::IndexMap;

use crate::domain::metrics::{self, Bin};
use crate::domain::{HypotheticalPatient, Record, RiskLevel};

use super::store::StateStore;

/// Bucket target for both histograms.
pub const HISTOGRAM_BUCKETS: usize = 15;

/// Cholesterol delta above which the comparison is flagged.
pub const CHOLESTEROL_ALERT_DELTA: f64 = 50.0;

/// Half-width of the histogram domain when every value is identical.
const SINGLE_VALUE_PAD: f64 = 0.5;

/// Histogram metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cholesterol,
    Age,
}

impl Metric {
    #[must_use]
    pub fn record_value(&self, record: &Record) -> Option<f64> {
        match self {
            Self::Cholesterol => record.cholesterol,
            Self::Age => record.age,
        }
    }

    #[must_use]
    pub fn patient_value(&self, patient: &HypotheticalPatient) -> f64 {
        match self {
            Self::Cholesterol => patient.cholesterol,
            Self::Age => patient.age,
        }
    }

    /// Only the age histogram feeds a filter; there is no cholesterol filter.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Age)
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cholesterol => "Cholesterol",
            Self::Age => "Age",
        }
    }
}

/// One scatter mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub age: f64,
    pub max_hr: f64,
    pub heart_disease: bool,
}

/// Filtered cohort points plus the distinguished patient point.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterView {
    pub points: Vec<ScatterPoint>,
    pub patient: ScatterPoint,
}

/// Histogram of one metric over the full dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramView {
    pub metric: Metric,
    pub bins: Vec<Bin>,
    /// Bin containing the patient's current value
    pub patient_bin: Option<usize>,
    pub interactive: bool,
}

impl HistogramView {
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    #[must_use]
    pub fn domain(&self) -> Option<(f64, f64)> {
        Some((self.bins.first()?.lower, self.bins.last()?.upper))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub key: String,
    pub count: usize,
}

/// Chest-pain-type counts in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieView {
    pub slices: Vec<PieSlice>,
    /// Active chest-pain filter, used to dim the other slices
    pub selected: Option<String>,
}

impl PieView {
    #[must_use]
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    #[must_use]
    pub fn count_of(&self, key: &str) -> Option<usize> {
        self.slices.iter().find(|s| s.key == key).map(|s| s.count)
    }
}

/// Patient minus cohort mean for the compared metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// `None` when no record carries a cholesterol value
    pub chol_diff: Option<f64>,
    /// `None` when no record carries a max heart rate
    pub hr_diff: Option<f64>,
}

impl Comparison {
    /// Cholesterol difference rounded and sign-prefixed for display.
    #[must_use]
    pub fn chol_label(&self) -> String {
        self.chol_diff.map_or_else(|| "—".to_string(), format_delta)
    }

    /// Max heart rate difference rounded and sign-prefixed for display.
    #[must_use]
    pub fn hr_label(&self) -> String {
        self.hr_diff.map_or_else(|| "—".to_string(), format_delta)
    }

    /// Whether the patient's cholesterol exceeds the mean by more than
    /// [`CHOLESTEROL_ALERT_DELTA`].
    #[must_use]
    pub fn cholesterol_alert(&self) -> bool {
        self.chol_diff.is_some_and(|d| d > CHOLESTEROL_ALERT_DELTA)
    }
}

/// Summary card content.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub total_records: usize,
    /// `None` for an empty dataset
    pub comparison: Option<Comparison>,
    pub risk: RiskLevel,
}

/// Round to the nearest integer and prefix `+` when positive.
#[must_use]
pub fn format_delta(delta: f64) -> String {
    let rounded = delta.round();
    if rounded > 0.0 {
        format!("+{rounded:.0}")
    } else if rounded == 0.0 {
        // Avoid "-0".
        "0".to_string()
    } else {
        format!("{rounded:.0}")
    }
}

/// Read-only projection of a store.
pub struct ViewBuilder<'a> {
    store: &'a StateStore,
}

impl<'a> ViewBuilder<'a> {
    #[must_use]
    pub fn new(store: &'a StateStore) -> Self {
        Self { store }
    }

    /// Records passing the active filters, AND-combined.
    #[must_use]
    pub fn filtered_records(&self) -> Vec<&'a Record> {
        let filter = self.store.filter();
        self.store
            .dataset()
            .iter()
            .filter(|record| filter.matches(record))
            .collect()
    }

    /// Scatter view, or `None` for an empty dataset.
    ///
    /// Records missing age or max heart rate cannot be placed and are left out.
    #[must_use]
    pub fn scatter(&self) -> Option<ScatterView> {
        if self.store.dataset().is_empty() {
            return None;
        }

        let points = self
            .filtered_records()
            .into_iter()
            .filter_map(|record| {
                Some(ScatterPoint {
                    age: record.age?,
                    max_hr: record.max_hr?,
                    heart_disease: record.has_heart_disease(),
                })
            })
            .collect();

        let patient = self.store.patient();
        Some(ScatterView {
            points,
            patient: ScatterPoint {
                age: patient.age,
                max_hr: patient.max_hr,
                heart_disease: patient.heart_disease == 1,
            },
        })
    }

    /// Histogram over the full dataset, ignoring the scatter filters.
    ///
    /// The domain is the extent of the metric's present values. `None` when
    /// no record carries the metric.
    #[must_use]
    pub fn histogram(&self, metric: Metric) -> Option<HistogramView> {
        let values: Vec<f64> = self
            .store
            .dataset()
            .iter()
            .filter_map(|record| metric.record_value(record))
            .collect();

        let (mut lo, mut hi) = metrics::extent(values.iter().copied())?;
        if lo == hi {
            // A single distinct value still needs a drawable, clickable bin.
            lo -= SINGLE_VALUE_PAD;
            hi += SINGLE_VALUE_PAD;
        }
        let bins = metrics::bin(&values, lo, hi, HISTOGRAM_BUCKETS);
        let patient_bin = metrics::bin_index(&bins, metric.patient_value(self.store.patient()));

        Some(HistogramView {
            metric,
            bins,
            patient_bin,
            interactive: metric.is_interactive(),
        })
    }

    /// Chest-pain-type counts, or `None` for an empty dataset.
    #[must_use]
    pub fn pie(&self) -> Option<PieView> {
        if self.store.dataset().is_empty() {
            return None;
        }

        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for record in self.store.dataset() {
            *counts.entry(record.chest_pain_category()).or_insert(0) += 1;
        }

        Some(PieView {
            slices: counts
                .into_iter()
                .map(|(key, count)| PieSlice {
                    key: key.to_string(),
                    count,
                })
                .collect(),
            selected: self.store.filter().chest_pain.clone(),
        })
    }

    /// Patient-versus-cohort deltas, or `None` for an empty dataset.
    #[must_use]
    pub fn comparison(&self) -> Option<Comparison> {
        let dataset = self.store.dataset();
        if dataset.is_empty() {
            return None;
        }

        let patient = self.store.patient();
        let cholesterol: Vec<f64> = dataset.iter().filter_map(|r| r.cholesterol).collect();
        let max_hr: Vec<f64> = dataset.iter().filter_map(|r| r.max_hr).collect();

        Some(Comparison {
            chol_diff: (!cholesterol.is_empty())
                .then(|| patient.cholesterol - metrics::mean(&cholesterol)),
            hr_diff: (!max_hr.is_empty()).then(|| patient.max_hr - metrics::mean(&max_hr)),
        })
    }

    #[must_use]
    pub fn risk(&self) -> RiskLevel {
        RiskLevel::classify(self.store.patient())
    }

    #[must_use]
    pub fn summary(&self) -> SummaryView {
        SummaryView {
            total_records: self.store.dataset().len(),
            comparison: self.comparison(),
            risk: self.risk(),
        }
    }
}
