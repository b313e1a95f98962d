//! Interaction router.
//!
//! Translates UI events into state store mutations and reports exactly
//! which views each mutation invalidated. Events are dispatched one at a
//! time to completion, so no two mutations interleave.

use crate::domain::Record;
use crate::ports::{ChartId, DrawingSurface, Interaction, MarkId};
use crate::CardioscopeError;

use super::charts::ChartSurfaces;
use super::store::StateStore;
use super::views::ViewBuilder;

bitflags::bitflags! {
    /// Views that must be rebuilt after an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Invalidation: u8 {
        const SUMMARY = 1 << 0;
        const SCATTER = 1 << 1;
        const CHOLESTEROL_HISTOGRAM = 1 << 2;
        const AGE_HISTOGRAM = 1 << 3;
        const PIE = 1 << 4;
    }
}

impl Invalidation {
    #[must_use]
    pub fn for_chart(chart: ChartId) -> Self {
        match chart {
            ChartId::Scatter => Self::SCATTER,
            ChartId::CholesterolHistogram => Self::CHOLESTEROL_HISTOGRAM,
            ChartId::AgeHistogram => Self::AGE_HISTOGRAM,
            ChartId::ChestPainPie => Self::PIE,
        }
    }
}

/// Raw UI events the router understands.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A form field changed; `field` is the attribute name
    PatientFieldInput { field: String, raw: String },
    /// Ingestion completed
    DatasetLoaded(Vec<Record>),
    /// The commit trigger fired
    CommitPatient,
    /// A bound chart mark was clicked
    Click(Interaction),
    /// The pointer (or keyboard selection) moved onto a mark, or off all marks
    Hover(Option<MarkId>),
}

/// Result of a dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    pub invalidated: Invalidation,
    /// Set after a commit so the UI can show a transient acknowledgement
    pub acknowledged: bool,
}

impl DispatchOutcome {
    fn redraw(invalidated: Invalidation) -> Self {
        Self {
            invalidated,
            acknowledged: false,
        }
    }
}

/// Single writer in front of the state store.
#[derive(Debug, Default)]
pub struct InteractionRouter {
    store: StateStore,
    /// Transient hover, never part of the store
    hover: Option<MarkId>,
}

impl InteractionRouter {
    #[must_use]
    pub fn new(store: StateStore) -> Self {
        Self { store, hover: None }
    }

    #[must_use]
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    #[must_use]
    pub fn hover(&self) -> Option<MarkId> {
        self.hover
    }

    #[must_use]
    pub fn views(&self) -> ViewBuilder<'_> {
        ViewBuilder::new(&self.store)
    }

    /// Apply one event.
    ///
    /// # Errors
    /// Returns the store's rejection for invalid patient input; nothing is
    /// invalidated in that case.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<DispatchOutcome, CardioscopeError> {
        let outcome = match event {
            UiEvent::PatientFieldInput { field, raw } => {
                self.store.set_patient_field(&field, &raw)?;
                DispatchOutcome::redraw(Invalidation::all())
            }
            UiEvent::DatasetLoaded(records) => {
                // Indices in the old views no longer mean anything.
                self.hover = None;
                self.store.load_dataset(records);
                DispatchOutcome::redraw(Invalidation::all())
            }
            UiEvent::CommitPatient => {
                self.store.commit_patient();
                DispatchOutcome {
                    invalidated: Invalidation::all(),
                    acknowledged: true,
                }
            }
            UiEvent::Click(Interaction::ToggleAgeRange(range)) => {
                self.store.toggle_age_range_filter(range);
                DispatchOutcome::redraw(Invalidation::SCATTER)
            }
            UiEvent::Click(Interaction::ToggleChestPain(kind)) => {
                self.store.toggle_chest_pain_filter(&kind);
                // Pie counts are unaffected, but slice dimming reads the filter.
                DispatchOutcome::redraw(Invalidation::SCATTER | Invalidation::PIE)
            }
            UiEvent::Hover(target) => DispatchOutcome::redraw(self.set_hover(target)),
        };

        tracing::debug!(invalidated = ?outcome.invalidated, "Event dispatched");
        Ok(outcome)
    }

    fn set_hover(&mut self, target: Option<MarkId>) -> Invalidation {
        if self.hover == target {
            return Invalidation::empty();
        }

        let mut invalidated = Invalidation::empty();
        for mark in [self.hover, target].into_iter().flatten() {
            invalidated |= Invalidation::for_chart(mark.chart);
        }
        self.hover = target;
        invalidated
    }

    /// Redraw the charts in `invalidated` from freshly derived views.
    pub fn render<S: DrawingSurface>(&self, surfaces: &mut ChartSurfaces<S>, invalidated: Invalidation) {
        surfaces.render(&self.views(), self.hover, invalidated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::recording::RecordingSurface;
    use crate::domain::{AgeRange, FieldError};
    use crate::ports::{DrawCommand, MarkKey};

    fn cohort() -> Vec<Record> {
        (0..40)
            .map(|i| Record {
                age: Some(30.0 + i as f64),
                max_hr: Some(120.0 + i as f64),
                cholesterol: Some(180.0 + i as f64 * 3.0),
                chest_pain_type: Some(if i % 2 == 0 { "ATA" } else { "ASY" }.to_string()),
                heart_disease: Some((i % 3 == 0) as u8),
                ..Default::default()
            })
            .collect()
    }

    fn loaded_router() -> InteractionRouter {
        let mut router = InteractionRouter::default();
        router
            .dispatch(UiEvent::DatasetLoaded(cohort()))
            .expect("Should load");
        router
    }

    fn surfaces() -> ChartSurfaces<RecordingSurface> {
        ChartSurfaces::with(|_| RecordingSurface::new(120.0, 60.0))
    }

    #[test]
    fn test_field_input_invalidates_everything() {
        let mut router = loaded_router();
        let outcome = router
            .dispatch(UiEvent::PatientFieldInput {
                field: "Age".to_string(),
                raw: "61".to_string(),
            })
            .expect("Should accept age");

        assert_eq!(outcome.invalidated, Invalidation::all());
        assert!(!outcome.acknowledged);
        assert!((router.store().patient().age - 61.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejected_field_invalidates_nothing() {
        let mut router = loaded_router();
        let err = router
            .dispatch(UiEvent::PatientFieldInput {
                field: "Height".to_string(),
                raw: "180".to_string(),
            })
            .expect_err("Should reject unknown field");

        assert!(matches!(err, CardioscopeError::Field(FieldError::InvalidField(_))));
    }

    #[test]
    fn test_commit_acknowledges() {
        let mut router = loaded_router();
        let outcome = router
            .dispatch(UiEvent::CommitPatient)
            .expect("Should commit");

        assert!(outcome.acknowledged);
        assert_eq!(router.store().dataset().len(), 41);
    }

    #[test]
    fn test_filter_clicks_invalidate_scatter_only() {
        let mut router = loaded_router();

        let age = router
            .dispatch(UiEvent::Click(Interaction::ToggleAgeRange(AgeRange::new(30.0, 35.0))))
            .expect("Should toggle age");
        assert_eq!(age.invalidated, Invalidation::SCATTER);

        let pain = router
            .dispatch(UiEvent::Click(Interaction::ToggleChestPain("ATA".to_string())))
            .expect("Should toggle chest pain");
        assert_eq!(pain.invalidated, Invalidation::SCATTER | Invalidation::PIE);
        assert!(!pain.invalidated.contains(Invalidation::AGE_HISTOGRAM));
    }

    #[test]
    fn test_hover_invalidates_owning_charts() {
        let mut router = loaded_router();
        let bin = MarkId::new(ChartId::AgeHistogram, MarkKey::Bin(2));
        let slice = MarkId::new(ChartId::ChestPainPie, MarkKey::Slice(0));

        let first = router.dispatch(UiEvent::Hover(Some(bin))).expect("Should hover");
        assert_eq!(first.invalidated, Invalidation::AGE_HISTOGRAM);

        let same = router.dispatch(UiEvent::Hover(Some(bin))).expect("Should hover");
        assert!(same.invalidated.is_empty());

        let moved = router.dispatch(UiEvent::Hover(Some(slice))).expect("Should hover");
        assert_eq!(moved.invalidated, Invalidation::AGE_HISTOGRAM | Invalidation::PIE);

        let left = router.dispatch(UiEvent::Hover(None)).expect("Should clear hover");
        assert_eq!(left.invalidated, Invalidation::PIE);
        assert_eq!(router.hover(), None);
    }

    #[test]
    fn test_bin_click_round_trip_updates_scatter_only() {
        let mut router = loaded_router();
        let mut surfaces = surfaces();
        router.render(&mut surfaces, Invalidation::all());

        let scatter_before = surfaces.scatter.commands().to_vec();
        let age_before = surfaces.age.commands().to_vec();

        let click = surfaces
            .age
            .find_mark(MarkKey::Bin(0))
            .and_then(DrawCommand::binding)
            .and_then(|b| b.on_click.clone())
            .expect("Age bin should be clickable");

        let outcome = router.dispatch(UiEvent::Click(click.clone())).expect("Should toggle");
        router.render(&mut surfaces, outcome.invalidated);

        assert_eq!(surfaces.age.commands(), age_before.as_slice());
        assert_ne!(surfaces.scatter.commands(), scatter_before.as_slice());
        let filtered = surfaces
            .scatter
            .marks_where(|key| matches!(key, MarkKey::Record(_)))
            .len();
        assert!(filtered < 40);
        assert!(filtered > 0);

        // Clicking the same bin again clears the filter.
        let outcome = router.dispatch(UiEvent::Click(click)).expect("Should toggle");
        router.render(&mut surfaces, outcome.invalidated);
        assert_eq!(surfaces.scatter.commands(), scatter_before.as_slice());
    }

    #[test]
    fn test_empty_dataset_renders_nothing() {
        let router = InteractionRouter::default();
        let mut surfaces = surfaces();
        router.render(&mut surfaces, Invalidation::all());

        for chart in ChartId::ALL {
            assert!(surfaces.get(chart).commands().is_empty());
        }
    }

    #[test]
    fn test_reload_clears_hover() {
        let mut router = loaded_router();
        router
            .dispatch(UiEvent::Hover(Some(MarkId::new(ChartId::Scatter, MarkKey::Record(3)))))
            .expect("Should hover");
        router
            .dispatch(UiEvent::DatasetLoaded(Vec::new()))
            .expect("Should load");
        assert_eq!(router.hover(), None);
    }
}
