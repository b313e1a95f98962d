//! Comparative summary card.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::application::SummaryView;
use crate::tui::styles::MedicalTheme;

/// Render total records, patient-versus-mean deltas and the risk label.
pub fn render_summary(f: &mut Frame, area: Rect, summary: &SummaryView) {
    let block = Block::default()
        .title(Span::styled(" Comparison ", MedicalTheme::title()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    let mut lines = vec![Line::from(vec![
        Span::styled(" Records      ", MedicalTheme::text_secondary()),
        Span::styled(summary.total_records.to_string(), MedicalTheme::text()),
    ])];

    match &summary.comparison {
        Some(comparison) => {
            lines.push(Line::from(vec![
                Span::styled(" Cholesterol  ", MedicalTheme::text_secondary()),
                Span::styled(
                    comparison.chol_label(),
                    MedicalTheme::cholesterol_delta(comparison.cholesterol_alert()),
                ),
                Span::styled(" vs avg", MedicalTheme::text_muted()),
            ]));
            lines.push(Line::from(vec![
                Span::styled(" Max HR       ", MedicalTheme::text_secondary()),
                Span::styled(comparison.hr_label(), MedicalTheme::text()),
                Span::styled(" vs avg", MedicalTheme::text_muted()),
            ]));
        }
        None => lines.push(Line::from(Span::styled(
            " No cohort loaded",
            MedicalTheme::text_muted(),
        ))),
    }

    lines.push(Line::from(vec![
        Span::styled(" Risk         ", MedicalTheme::text_secondary()),
        Span::styled(summary.risk.description(), MedicalTheme::risk_level(summary.risk)),
    ]));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
