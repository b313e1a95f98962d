//! Hypothetical patient input form.
//!
//! Every edit produces the field's full raw text, which the app forwards to
//! the interaction router as a field input. Choice fields cycle through an
//! option list instead of accepting free text; the chest-pain list grows
//! with the types seen in loaded data.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{HypotheticalPatient, PatientField};
use crate::tui::styles::MedicalTheme;

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: PatientField,
    pub label: &'static str,
    pub hint: &'static str,
    /// Allowed values for choice fields; empty for free numeric input
    pub options: Vec<String>,
    pub value: String,
}

impl FormField {
    fn new(field: PatientField, patient: &HypotheticalPatient) -> Self {
        let (label, hint, options): (&'static str, &'static str, &'static [&'static str]) = match field {
            PatientField::Age => ("Age", "years", &[]),
            PatientField::Sex => ("Sex", "M / F", &["M", "F"]),
            PatientField::ChestPainType => ("Chest Pain", "type", &["ATA", "NAP", "ASY", "TA"]),
            PatientField::RestingBp => ("Resting BP", "mmHg", &[]),
            PatientField::Cholesterol => ("Cholesterol", "mg/dL", &[]),
            PatientField::MaxHr => ("Max HR", "bpm", &[]),
            PatientField::ExerciseAngina => ("Ex. Angina", "Y / N", &["N", "Y"]),
            PatientField::HeartDisease => ("Heart Disease", "0 / 1", &["0", "1"]),
        };

        Self {
            field,
            label,
            hint,
            options: options.iter().map(|o| (*o).to_string()).collect(),
            value: patient.display_value(field),
        }
    }

    #[must_use]
    pub fn is_choice(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Patient form state
pub struct PatientFormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for PatientFormState {
    fn default() -> Self {
        Self::from_patient(&HypotheticalPatient::default())
    }
}

impl PatientFormState {
    /// Form prefilled with the patient's current values.
    #[must_use]
    pub fn from_patient(patient: &HypotheticalPatient) -> Self {
        Self {
            fields: PatientField::ALL
                .into_iter()
                .map(|field| FormField::new(field, patient))
                .collect(),
            selected_field: 0,
            error_message: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> &FormField {
        &self.fields[self.selected_field]
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Add a character to a numeric field.
    ///
    /// Returns the edited `(field, raw)` pair, or `None` if nothing changed.
    pub fn input_char(&mut self, c: char) -> Option<(PatientField, String)> {
        let current = &mut self.fields[self.selected_field];
        if current.is_choice() {
            // Typing a letter steps through the options starting with it.
            let letter = c.to_ascii_uppercase();
            let count = current.options.len();
            let start = current
                .options
                .iter()
                .position(|o| *o == current.value)
                .map_or(0, |i| i + 1);
            let option = (0..count)
                .map(|offset| &current.options[(start + offset) % count])
                .find(|o| o.starts_with(letter))?;
            current.value = option.clone();
        } else if c.is_ascii_digit() || c == '.' || c == '-' {
            current.value.push(c);
        } else {
            return None;
        }
        Some((current.field, current.value.clone()))
    }

    /// Delete the last character of a numeric field.
    pub fn delete_char(&mut self) -> Option<(PatientField, String)> {
        let current = &mut self.fields[self.selected_field];
        if current.is_choice() {
            return None;
        }
        current.value.pop()?;
        Some((current.field, current.value.clone()))
    }

    /// Step a choice field through its options.
    pub fn cycle_option(&mut self, forward: bool) -> Option<(PatientField, String)> {
        let current = &mut self.fields[self.selected_field];
        let count = current.options.len();
        if count == 0 {
            return None;
        }

        let position = current
            .options
            .iter()
            .position(|o| *o == current.value)
            .unwrap_or(0);
        let next = if forward {
            (position + 1) % count
        } else {
            (position + count - 1) % count
        };
        current.value = current.options[next].clone();
        Some((current.field, current.value.clone()))
    }

    /// Append values of a choice field that are not offered yet.
    pub fn extend_options<I>(&mut self, field: PatientField, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        let Some(form_field) = self.fields.iter_mut().find(|f| f.field == field) else {
            return;
        };
        if !form_field.is_choice() {
            return;
        }
        for value in values {
            if !form_field.options.contains(&value) {
                form_field.options.push(value);
            }
        }
    }
}

/// Render the patient form
pub fn render_patient_form(f: &mut Frame, area: Rect, state: &PatientFormState, focused: bool) {
    let block = Block::default()
        .title(Span::styled(" Hypothetical Patient ", MedicalTheme::title()))
        .borders(Borders::ALL)
        .border_style(if focused {
            MedicalTheme::border_focused()
        } else {
            MedicalTheme::border()
        });

    let mut lines: Vec<Line> = state
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let is_selected = focused && i == state.selected_field;
            let label_style = if is_selected {
                MedicalTheme::selected()
            } else {
                MedicalTheme::text_secondary()
            };

            let mut spans = vec![
                Span::styled(format!(" {:<14}", field.label), label_style),
                Span::raw(" "),
            ];
            if field.is_choice() {
                spans.push(Span::styled("‹ ", MedicalTheme::text_muted()));
                spans.push(Span::styled(field.value.clone(), MedicalTheme::text()));
                spans.push(Span::styled(" ›", MedicalTheme::text_muted()));
            } else {
                spans.push(Span::styled(field.value.clone(), MedicalTheme::text()));
                if is_selected {
                    spans.push(Span::styled("▌", MedicalTheme::focused()));
                }
            }
            spans.push(Span::styled(format!("  {}", field.hint), MedicalTheme::text_muted()));
            Line::from(spans)
        })
        .collect();

    lines.push(Line::raw(""));
    lines.push(match &state.error_message {
        Some(err) => Line::from(vec![
            Span::styled(" ! ", MedicalTheme::danger()),
            Span::styled(err.clone(), MedicalTheme::danger()),
        ]),
        None => Line::from(vec![
            Span::styled(" [Enter] ", MedicalTheme::key_hint()),
            Span::styled("Add to dataset", MedicalTheme::key_desc()),
        ]),
    });

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_starts_from_patient() {
        let form = PatientFormState::default();
        assert_eq!(form.fields.len(), 8);
        assert_eq!(form.fields[0].value, "45");
        assert_eq!(form.fields[2].value, "ATA");
    }

    #[test]
    fn test_numeric_edit_emits_full_value() {
        let mut form = PatientFormState::default();
        assert_eq!(form.input_char('x'), None);
        assert_eq!(
            form.input_char('6'),
            Some((PatientField::Age, "456".to_string()))
        );
        assert_eq!(
            form.delete_char(),
            Some((PatientField::Age, "45".to_string()))
        );
    }

    #[test]
    fn test_choice_fields_cycle() {
        let mut form = PatientFormState::default();
        form.next_field();
        assert_eq!(
            form.cycle_option(true),
            Some((PatientField::Sex, "F".to_string()))
        );
        assert_eq!(
            form.cycle_option(true),
            Some((PatientField::Sex, "M".to_string()))
        );
        assert_eq!(form.delete_char(), None);

        form.next_field();
        assert_eq!(
            form.input_char('a'),
            Some((PatientField::ChestPainType, "ASY".to_string()))
        );
        assert_eq!(
            form.input_char('a'),
            Some((PatientField::ChestPainType, "ATA".to_string()))
        );
        assert_eq!(
            form.cycle_option(false),
            Some((PatientField::ChestPainType, "TA".to_string()))
        );
    }

    #[test]
    fn test_chest_pain_options_grow_with_cohort() {
        let mut form = PatientFormState::default();
        form.extend_options(
            PatientField::ChestPainType,
            ["ASY".to_string(), "XYZ".to_string()],
        );
        form.extend_options(PatientField::Age, ["99".to_string()]);

        assert_eq!(form.fields[2].options, ["ATA", "NAP", "ASY", "TA", "XYZ"]);
        assert!(form.fields[0].options.is_empty());

        form.next_field();
        form.next_field();
        assert_eq!(
            form.input_char('x'),
            Some((PatientField::ChestPainType, "XYZ".to_string()))
        );
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = PatientFormState::default();
        form.prev_field();
        assert_eq!(form.current().field, PatientField::HeartDisease);
        form.next_field();
        assert_eq!(form.current().field, PatientField::Age);
    }
}
