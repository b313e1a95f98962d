//! Age versus max heart rate scatter.

use crate::application::views::ScatterView;
use crate::ports::{
    Binding, ChartId, DrawCommand, DrawingSurface, MarkId, MarkKey, TextAnchor,
};

use super::palette;
use super::scale::{tick_label, LinearScale, Margins, PlotArea};

/// Fixed axes keep the cohort cloud stable while filters change.
pub const AGE_DOMAIN: (f64, f64) = (20.0, 80.0);
pub const MAX_HR_DOMAIN: (f64, f64) = (60.0, 220.0);

const MARGINS: Margins = Margins {
    top: 4.0,
    right: 4.0,
    bottom: 8.0,
    left: 10.0,
};

const POINT_RADIUS: f64 = 1.0;
const HOVER_RADIUS: f64 = 1.5;
const PATIENT_RADIUS: f64 = 2.5;
const LABEL_OFFSET: f64 = 5.0;
const TICKS: usize = 5;

/// Draw the filtered cohort and the patient.
///
/// An absent view (empty dataset) leaves the surface blank. Cohort points
/// outside the fixed axes are not drawn; the patient mark is pinned to the
/// plot edge instead so it never disappears.
pub fn render_scatter<S: DrawingSurface>(view: Option<&ScatterView>, hover: Option<MarkKey>, surface: &mut S) {
    surface.clear();
    let Some(view) = view else {
        return;
    };

    let (width, height) = surface.size();
    let plot = PlotArea::inset(width, height, MARGINS);
    if plot.is_degenerate() {
        return;
    }

    let x = LinearScale::new(AGE_DOMAIN, (plot.left, plot.right));
    let y = LinearScale::new(MAX_HR_DOMAIN, (plot.bottom, plot.top));

    draw_axes(surface, &plot, &x, &y);

    for (i, point) in view.points.iter().enumerate() {
        let (px, py) = (x.map(point.age), y.map(point.max_hr));
        if !plot.contains(px, py) {
            continue;
        }

        let hovered = hover == Some(MarkKey::Record(i));
        let disease = if point.heart_disease { "Yes" } else { "No" };
        surface.draw(DrawCommand::Point {
            x: px,
            y: py,
            radius: if hovered { HOVER_RADIUS } else { POINT_RADIUS },
            paint: if point.heart_disease {
                palette::DISEASE
            } else {
                palette::HEALTHY
            },
            stroke: hovered.then_some(palette::OUTLINE),
            binding: Some(Binding::hover(
                MarkId::new(ChartId::Scatter, MarkKey::Record(i)),
                format!(
                    "Age: {} · HR: {} · Disease: {disease}",
                    tick_label(point.age),
                    tick_label(point.max_hr)
                ),
            )),
        });
    }

    let (px, py) = plot.clamp(x.map(view.patient.age), y.map(view.patient.max_hr));
    surface.draw(DrawCommand::Point {
        x: px,
        y: py,
        radius: PATIENT_RADIUS,
        paint: palette::PATIENT,
        stroke: Some(palette::OUTLINE),
        binding: Some(Binding::hover(
            MarkId::new(ChartId::Scatter, MarkKey::Patient),
            format!(
                "YOU · Age: {} · HR: {}",
                tick_label(view.patient.age),
                tick_label(view.patient.max_hr)
            ),
        )),
    });
    surface.draw(DrawCommand::Text {
        x: px,
        y: (py - LABEL_OFFSET).max(0.0),
        text: "YOU".to_string(),
        paint: palette::LABEL,
        anchor: TextAnchor::Middle,
    });
}

fn draw_axes<S: DrawingSurface>(surface: &mut S, plot: &PlotArea, x: &LinearScale, y: &LinearScale) {
    surface.draw(DrawCommand::Line {
        x1: plot.left,
        y1: plot.bottom,
        x2: plot.right,
        y2: plot.bottom,
        paint: palette::AXIS,
    });
    surface.draw(DrawCommand::Line {
        x1: plot.left,
        y1: plot.top,
        x2: plot.left,
        y2: plot.bottom,
        paint: palette::AXIS,
    });

    for tick in x.ticks(TICKS) {
        surface.draw(DrawCommand::Text {
            x: x.map(tick),
            y: plot.bottom + 2.0,
            text: tick_label(tick),
            paint: palette::AXIS,
            anchor: TextAnchor::Middle,
        });
    }
    for tick in y.ticks(TICKS) {
        surface.draw(DrawCommand::Text {
            x: plot.left - 2.0,
            y: y.map(tick),
            text: tick_label(tick),
            paint: palette::AXIS,
            anchor: TextAnchor::End,
        });
    }
}
