//! Chart renderers.
//!
//! Each renderer clears its surface, maps a derived view to marks through a
//! coordinate scale and attaches interaction bindings. Renderers never touch
//! the state store: a clicked mark carries an [`Interaction`] that the
//! interaction router applies.
//!
//! [`Interaction`]: crate::ports::Interaction

mod histogram;
mod pie;
pub mod scale;
mod scatter;

pub use histogram::render_histogram;
pub use pie::render_pie;
pub use scatter::render_scatter;

use crate::ports::{ChartId, DrawingSurface, MarkId, MarkKey, Paint};

use super::router::Invalidation;
use super::views::{Metric, ViewBuilder};

/// Shared palette.
pub mod palette {
    use crate::ports::Paint;

    /// Patient marks (#F43F5E)
    pub const PATIENT: Paint = Paint::rgb(244, 63, 94);
    pub const DISEASE: Paint = Paint::rgba(239, 68, 68, 0.4);
    pub const HEALTHY: Paint = Paint::rgba(16, 185, 129, 0.4);
    pub const BAR: Paint = Paint::rgba(148, 163, 184, 0.3);
    pub const BAR_HOVER: Paint = Paint::rgb(148, 163, 184);
    pub const AXIS: Paint = Paint::rgb(148, 163, 184);
    pub const LABEL: Paint = Paint::rgb(255, 255, 255);
    pub const OUTLINE: Paint = Paint::rgb(255, 255, 255);

    /// Pie slice colors, assigned by first-seen slice order.
    pub const CATEGORIES: [Paint; 5] = [
        Paint::rgb(244, 63, 94),
        Paint::rgb(59, 130, 246),
        Paint::rgb(16, 185, 129),
        Paint::rgb(245, 158, 11),
        Paint::rgb(139, 92, 246),
    ];

    /// Opacity of pie slices outside the active chest-pain filter.
    pub const DIMMED_OPACITY: f32 = 0.3;
}

/// Hover key for `chart`, if the hovered mark belongs to it.
fn hovered_key(hover: Option<MarkId>, chart: ChartId) -> Option<MarkKey> {
    hover.filter(|mark| mark.chart == chart).map(|mark| mark.key)
}

/// One drawing surface per dashboard chart.
pub struct ChartSurfaces<S> {
    pub scatter: S,
    pub cholesterol: S,
    pub age: S,
    pub pie: S,
}

impl<S: DrawingSurface> ChartSurfaces<S> {
    /// Build all four surfaces with the same constructor.
    pub fn with(mut make: impl FnMut(ChartId) -> S) -> Self {
        Self {
            scatter: make(ChartId::Scatter),
            cholesterol: make(ChartId::CholesterolHistogram),
            age: make(ChartId::AgeHistogram),
            pie: make(ChartId::ChestPainPie),
        }
    }

    #[must_use]
    pub fn get(&self, chart: ChartId) -> &S {
        match chart {
            ChartId::Scatter => &self.scatter,
            ChartId::CholesterolHistogram => &self.cholesterol,
            ChartId::AgeHistogram => &self.age,
            ChartId::ChestPainPie => &self.pie,
        }
    }

    pub fn get_mut(&mut self, chart: ChartId) -> &mut S {
        match chart {
            ChartId::Scatter => &mut self.scatter,
            ChartId::CholesterolHistogram => &mut self.cholesterol,
            ChartId::AgeHistogram => &mut self.age,
            ChartId::ChestPainPie => &mut self.pie,
        }
    }

    /// Rebuild and redraw the views named by `invalidated`.
    ///
    /// Views are derived fresh from `views`; charts outside the set keep
    /// their previous marks.
    pub fn render(&mut self, views: &ViewBuilder<'_>, hover: Option<MarkId>, invalidated: Invalidation) {
        if invalidated.contains(Invalidation::SCATTER) {
            render_scatter(
                views.scatter().as_ref(),
                hovered_key(hover, ChartId::Scatter),
                &mut self.scatter,
            );
        }
        if invalidated.contains(Invalidation::CHOLESTEROL_HISTOGRAM) {
            render_histogram(
                ChartId::CholesterolHistogram,
                views.histogram(Metric::Cholesterol).as_ref(),
                hovered_key(hover, ChartId::CholesterolHistogram),
                &mut self.cholesterol,
            );
        }
        if invalidated.contains(Invalidation::AGE_HISTOGRAM) {
            render_histogram(
                ChartId::AgeHistogram,
                views.histogram(Metric::Age).as_ref(),
                hovered_key(hover, ChartId::AgeHistogram),
                &mut self.age,
            );
        }
        if invalidated.contains(Invalidation::PIE) {
            render_pie(
                views.pie().as_ref(),
                hovered_key(hover, ChartId::ChestPainPie),
                &mut self.pie,
            );
        }
    }
}

/// Color for the pie slice at `index`.
#[must_use]
pub fn category_paint(index: usize) -> Paint {
    palette::CATEGORIES[index % palette::CATEGORIES.len()]
}
