//! Chart grid: four bordered panels, each hosting one canvas surface.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

use crate::adapters::canvas::CanvasSurface;
use crate::application::ChartSurfaces;
use crate::ports::ChartId;
use crate::tui::styles::MedicalTheme;

/// Outer panel area of each chart, in `ChartId::ALL` order.
#[must_use]
pub fn chart_panels(area: Rect) -> [(ChartId, Rect); 4] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    [
        (ChartId::Scatter, top[0]),
        (ChartId::CholesterolHistogram, bottom[0]),
        (ChartId::AgeHistogram, bottom[1]),
        (ChartId::ChestPainPie, top[1]),
    ]
}

/// Panel frame for a chart.
#[must_use]
pub fn chart_block(chart: ChartId, focused: bool) -> Block<'static> {
    let hint = match chart {
        ChartId::AgeHistogram => " (click a bar to filter)",
        ChartId::ChestPainPie => " (click a slice to filter)",
        ChartId::Scatter | ChartId::CholesterolHistogram => "",
    };

    Block::default()
        .title(vec![
            Span::styled(format!(" {}", chart.title()), MedicalTheme::title()),
            Span::styled(format!("{hint} "), MedicalTheme::text_muted()),
        ])
        .borders(Borders::ALL)
        .border_style(if focused {
            MedicalTheme::border_focused()
        } else {
            MedicalTheme::border()
        })
}

/// Draw the panels and their canvases.
///
/// Surfaces must already have been resized to the panels' inner areas.
pub fn render_charts(
    f: &mut Frame,
    area: Rect,
    surfaces: &ChartSurfaces<CanvasSurface>,
    focused: Option<ChartId>,
) {
    for (chart, panel) in chart_panels(area) {
        f.render_widget(chart_block(chart, focused == Some(chart)), panel);
        let surface = surfaces.get(chart);
        f.render_widget(surface, surface.area());
    }
}
