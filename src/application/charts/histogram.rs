//! Distribution histograms (cholesterol, age).

use crate::application::views::HistogramView;
use crate::domain::AgeRange;
use crate::ports::{
    Binding, ChartId, DrawCommand, DrawingSurface, Interaction, MarkId, MarkKey, TextAnchor,
};

use super::palette;
use super::scale::{tick_label, LinearScale, Margins, PlotArea};

const MARGINS: Margins = Margins {
    top: 2.0,
    right: 2.0,
    bottom: 5.0,
    left: 2.0,
};

/// Horizontal gap between adjacent bars.
const BAR_GAP: f64 = 1.0;
const TICKS: usize = 5;

/// Draw one bar per bin, highlighting the bin holding the patient's value.
///
/// Bars of an interactive view (the age histogram) highlight on hover and
/// toggle the age-range filter on click.
pub fn render_histogram<S: DrawingSurface>(
    chart: ChartId,
    view: Option<&HistogramView>,
    hover: Option<MarkKey>,
    surface: &mut S,
) {
    surface.clear();
    let Some(view) = view else {
        return;
    };
    let Some(domain) = view.domain() else {
        return;
    };

    let (width, height) = surface.size();
    let plot = PlotArea::inset(width, height, MARGINS);
    if plot.is_degenerate() {
        return;
    }

    let x = LinearScale::new(domain, (plot.left, plot.right));
    let y = LinearScale::new((0.0, view.max_count() as f64), (plot.bottom, plot.top));

    for (i, bin) in view.bins.iter().enumerate() {
        let x0 = x.map(bin.lower);
        let x1 = x.map(bin.upper);
        let top = if bin.count == 0 { plot.bottom } else { y.map(bin.count as f64) };

        let is_patient = view.patient_bin == Some(i);
        let hovered = view.interactive && hover == Some(MarkKey::Bin(i));
        let paint = if is_patient {
            palette::PATIENT
        } else if hovered {
            palette::BAR_HOVER
        } else {
            palette::BAR
        };

        let mark = MarkId::new(chart, MarkKey::Bin(i));
        let tooltip = format!(
            "{} {}–{}: {}",
            view.metric.label(),
            tick_label(bin.lower),
            tick_label(bin.upper),
            bin.count
        );
        let mut binding = Binding::hover(mark, tooltip);
        if view.interactive {
            binding = binding.clickable(Interaction::ToggleAgeRange(AgeRange::new(bin.lower, bin.upper)));
        }

        surface.draw(DrawCommand::Rect {
            x: x0 + BAR_GAP / 2.0,
            y: top,
            width: (x1 - x0 - BAR_GAP).max(0.0),
            height: plot.bottom - top,
            paint,
            binding: Some(binding),
        });
    }

    for tick in x.ticks(TICKS) {
        surface.draw(DrawCommand::Text {
            x: x.map(tick),
            y: plot.bottom + 2.0,
            text: tick_label(tick),
            paint: palette::AXIS,
            anchor: TextAnchor::Middle,
        });
    }
}
