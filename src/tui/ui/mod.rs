//! UI module: View components for the TUI.

pub mod charts;
pub mod patient;
pub mod summary;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::MedicalTheme;

pub fn render_header(f: &mut Frame, area: Rect, loading: Option<&str>) {
    let mut spans = vec![
        Span::styled(" Cardioscope", MedicalTheme::title()),
        Span::styled(" │ ", MedicalTheme::text_muted()),
        Span::styled("Heart Disease Cohort Explorer", MedicalTheme::text_secondary()),
    ];
    if let Some(source) = loading {
        spans.push(Span::styled(" │ ", MedicalTheme::text_muted()));
        spans.push(Span::styled(format!("Loading {source}…"), MedicalTheme::warning()));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

/// One-line status: acknowledgement, tooltip, or the last message.
pub fn render_status(f: &mut Frame, area: Rect, line: Line<'_>) {
    f.render_widget(Paragraph::new(line), area);
}

pub fn render_key_hints(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" [Tab] ", MedicalTheme::key_hint()),
        Span::styled("Form/Charts ", MedicalTheme::key_desc()),
        Span::styled("[↑↓←→] ", MedicalTheme::key_hint()),
        Span::styled("Navigate ", MedicalTheme::key_desc()),
        Span::styled("[Enter] ", MedicalTheme::key_hint()),
        Span::styled("Add/Click ", MedicalTheme::key_desc()),
        Span::styled("[Ctrl+L] ", MedicalTheme::key_hint()),
        Span::styled("Load CSV ", MedicalTheme::key_desc()),
        Span::styled("[Ctrl+Q] ", MedicalTheme::key_hint()),
        Span::styled("Quit", MedicalTheme::key_desc()),
    ]);
    f.render_widget(Paragraph::new(hints), area);
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![Span::styled(
        "DISCLAIMER: The risk label is a simple rule of thumb for exploration and does not replace professional medical evaluation.",
        MedicalTheme::text_muted(),
    )])];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(MedicalTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}

/// Modal input line for a dataset path.
pub fn render_load_prompt(f: &mut Frame, area: Rect, input: &str) {
    let width = area.width.saturating_sub(4).min(72);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height / 3,
        width,
        height: 4.min(area.height),
    };

    let block = Block::default()
        .title(Span::styled(" Load dataset (CSV path) ", MedicalTheme::title()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border_focused());

    let content = vec![
        Line::from(vec![
            Span::styled(" ", MedicalTheme::text()),
            Span::styled(input.to_string(), MedicalTheme::text()),
            Span::styled("▌", MedicalTheme::focused()),
        ]),
        Line::from(vec![
            Span::styled(" [Enter] ", MedicalTheme::key_hint()),
            Span::styled("Load ", MedicalTheme::key_desc()),
            Span::styled("[Esc] ", MedicalTheme::key_hint()),
            Span::styled("Cancel", MedicalTheme::key_desc()),
        ]),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(content).block(block), popup);
}
