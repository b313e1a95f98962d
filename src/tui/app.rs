//! Main TUI application state machine.
//!
//! Handles:
//! - Input event handling (keys, mouse, bracketed paste)
//! - Forwarding UI events to the interaction router
//! - Redrawing only the charts an event invalidated
//! - Background dataset ingestion via the ingestion worker

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    Frame, Terminal,
};

use crate::adapters::canvas::CanvasSurface;
use crate::adapters::csv_file::CsvSource;
use crate::application::{
    ChartSurfaces, DispatchOutcome, InteractionRouter, Invalidation, SummaryView, UiEvent,
};
use crate::config::Settings;
use crate::domain::{PatientField, UNKNOWN_CHEST_PAIN};
use crate::ports::{ChartId, Interaction, MarkId};

use super::styles::MedicalTheme;
use super::ui::{
    charts::{chart_block, chart_panels, render_charts},
    patient::{render_patient_form, PatientFormState},
    render_disclaimer, render_header, render_key_hints, render_load_prompt, render_status,
    summary::render_summary,
};
use super::worker::IngestionWorker;

/// How long the commit acknowledgement stays visible.
const ACK_DURATION: Duration = Duration::from_millis(1500);

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Charts,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    error: bool,
}

/// Main application state
pub struct App {
    /// Whether the app should quit
    should_quit: bool,

    /// Single writer in front of the dashboard state
    router: InteractionRouter,

    /// One canvas per chart
    surfaces: ChartSurfaces<CanvasSurface>,

    /// Views invalidated since the last redraw
    pending: Invalidation,

    /// Summary card content, rebuilt when SUMMARY is invalidated
    summary: SummaryView,

    /// Patient form state
    form: PatientFormState,

    focus: Focus,

    /// Chart that keyboard selection moves within
    chart_focus: ChartId,

    /// Background ingestion
    worker: IngestionWorker,

    /// Source label of the load in progress
    loading: Option<String>,

    /// Path being typed into the load prompt, when open
    prompt: Option<String>,

    status: Option<StatusMessage>,

    /// Commit acknowledgement deadline
    ack_until: Option<Instant>,
}

impl App {
    /// Create the application and start loading the configured dataset.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let router = InteractionRouter::default();
        let summary = router.views().summary();

        let mut app = Self {
            should_quit: false,
            form: PatientFormState::from_patient(router.store().patient()),
            router,
            surfaces: ChartSurfaces::with(|_| CanvasSurface::default()),
            pending: Invalidation::all(),
            summary,
            focus: Focus::Form,
            chart_focus: ChartId::Scatter,
            worker: IngestionWorker::new(),
            loading: None,
            prompt: None,
            status: None,
            ack_until: None,
        };

        if settings.data_path_explicit || settings.data_path.exists() {
            app.load(settings.data_path);
        } else {
            tracing::info!(
                path = %settings.data_path.display(),
                "No dataset found; waiting for the user to load one"
            );
            app.set_status("No dataset loaded. Press Ctrl+L or paste a CSV path.", false);
        }

        app
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            self.poll_worker();

            terminal.draw(|f| self.draw(f))?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                let event = event::read()?;
                self.handle_event(event);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Lay out and draw one frame.
    ///
    /// Chart surfaces follow their panels; a surface whose size changed is
    /// redrawn even if no event invalidated it.
    pub fn draw(&mut self, f: &mut Frame) {
        let area = f.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Status / tooltip
                Constraint::Length(1), // Key hints
                Constraint::Length(2), // Disclaimer
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(46), Constraint::Min(0)])
            .split(rows[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(12), // Form
                Constraint::Length(6),  // Summary
                Constraint::Min(0),
            ])
            .split(body[0]);

        for (chart, panel) in chart_panels(body[1]) {
            let inner = chart_block(chart, false).inner(panel);
            if self.surfaces.get_mut(chart).resize(inner) {
                self.pending |= Invalidation::for_chart(chart);
            }
        }
        self.flush();

        render_header(f, rows[0], self.loading.as_deref());
        render_patient_form(f, left[0], &self.form, self.focus == Focus::Form);
        render_summary(f, left[1], &self.summary);
        render_charts(
            f,
            body[1],
            &self.surfaces,
            (self.focus == Focus::Charts).then_some(self.chart_focus),
        );
        render_status(f, rows[2], self.status_line());
        render_key_hints(f, rows[3]);
        render_disclaimer(f, rows[4]);

        if let Some(input) = &self.prompt {
            render_load_prompt(f, area, input);
        }
    }

    /// Redraw whatever is pending.
    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        if self.pending.contains(Invalidation::SUMMARY) {
            self.summary = self.router.views().summary();
        }
        self.router.render(&mut self.surfaces, self.pending);
        self.pending = Invalidation::empty();
    }

    fn status_line(&self) -> Line<'static> {
        if self.ack_until.is_some_and(|until| Instant::now() < until) {
            return Line::from(Span::styled(" ✓ Added!", MedicalTheme::success()));
        }

        if let Some(tooltip) = self.hovered_tooltip() {
            return Line::from(Span::styled(format!(" {tooltip}"), MedicalTheme::text()));
        }

        let mut spans = Vec::new();
        if let Some(status) = &self.status {
            let style = if status.error {
                MedicalTheme::danger()
            } else {
                MedicalTheme::text_secondary()
            };
            spans.push(Span::styled(format!(" {}", status.text), style));
        }

        // Filters stay visible next to the last message.
        let filter = self.router.store().filter();
        if filter.is_active() {
            if !spans.is_empty() {
                spans.push(Span::styled(" │", MedicalTheme::text_muted()));
            }
            spans.push(Span::styled(" Filters:", MedicalTheme::text_muted()));
        }
        if let Some(range) = &filter.age_range {
            spans.push(Span::styled(format!(" Age {range}"), MedicalTheme::warning()));
        }
        if let Some(kind) = &filter.chest_pain {
            spans.push(Span::styled(format!(" Chest pain {kind}"), MedicalTheme::warning()));
        }
        Line::from(spans)
    }

    fn hovered_tooltip(&self) -> Option<String> {
        let mark = self.router.hover()?;
        self.surfaces
            .get(mark.chart)
            .binding_for(mark)?
            .tooltip
            .clone()
    }

    fn set_status(&mut self, text: impl Into<String>, error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            error,
        });
    }

    /// Drain finished ingestion requests.
    pub fn poll_worker(&mut self) {
        while let Some(report) = self.worker.try_recv() {
            self.loading = None;
            match report.outcome {
                Ok(records) => {
                    self.set_status(
                        format!("Loaded {} records from {}", records.len(), report.source),
                        false,
                    );
                    self.dispatch(UiEvent::DatasetLoaded(records));
                    self.offer_cohort_chest_pain_types();
                }
                Err(message) => {
                    // Existing dataset stays in place.
                    self.set_status(format!("Load failed: {message}"), true);
                }
            }
        }
    }

    /// Let the patient take any chest-pain type present in the cohort.
    fn offer_cohort_chest_pain_types(&mut self) {
        let Some(pie) = self.router.views().pie() else {
            return;
        };
        let observed = pie
            .slices
            .into_iter()
            .map(|slice| slice.key)
            .filter(|key| key != UNKNOWN_CHEST_PAIN);
        self.form.extend_options(PatientField::ChestPainType, observed);
    }

    fn load(&mut self, path: PathBuf) {
        let source = CsvSource::new(&path);
        self.loading = Some(path.display().to_string());
        self.worker.spawn(source);
    }

    /// Send one event through the router and schedule the redraw.
    fn dispatch(&mut self, event: UiEvent) -> Option<DispatchOutcome> {
        match self.router.dispatch(event) {
            Ok(outcome) => {
                if outcome.acknowledged {
                    self.ack_until = Some(Instant::now() + ACK_DURATION);
                }
                self.pending |= outcome.invalidated;
                self.flush();
                Some(outcome)
            }
            Err(e) => {
                self.form.error_message = Some(e.to_string());
                None
            }
        }
    }

    fn apply_field(&mut self, edit: Option<(PatientField, String)>) {
        let Some((field, raw)) = edit else {
            return;
        };
        if self
            .dispatch(UiEvent::PatientFieldInput {
                field: field.name().to_string(),
                raw,
            })
            .is_some()
        {
            self.form.error_message = None;
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(key.code, key.modifiers);
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => self.handle_paste(&text),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        if key == KeyCode::Char('l') && modifiers.contains(KeyModifiers::CONTROL) {
            self.prompt = Some(String::new());
            return;
        }

        if matches!(key, KeyCode::Tab | KeyCode::BackTab) {
            if self.focus == Focus::Charts {
                self.dispatch(UiEvent::Hover(None));
                self.focus = Focus::Form;
            } else {
                self.focus = Focus::Charts;
            }
            return;
        }

        match self.focus {
            Focus::Form => self.handle_form_key(key),
            Focus::Charts => self.handle_chart_key(key),
        }
    }

    fn handle_prompt_key(&mut self, key: KeyCode) {
        let Some(input) = self.prompt.as_mut() else {
            return;
        };
        match key {
            KeyCode::Esc => self.prompt = None,
            KeyCode::Enter => {
                let path = clean_path(input);
                self.prompt = None;
                if !path.is_empty() {
                    self.load(PathBuf::from(path));
                }
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => input.push(c),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.form.prev_field(),
            KeyCode::Down => self.form.next_field(),
            KeyCode::Left => {
                let edit = self.form.cycle_option(false);
                self.apply_field(edit);
            }
            KeyCode::Right => {
                let edit = self.form.cycle_option(true);
                self.apply_field(edit);
            }
            KeyCode::Char(c) => {
                let edit = self.form.input_char(c);
                self.apply_field(edit);
            }
            KeyCode::Backspace => {
                let edit = self.form.delete_char();
                self.apply_field(edit);
            }
            KeyCode::Enter => {
                self.dispatch(UiEvent::CommitPatient);
            }
            _ => {}
        }
    }

    fn handle_chart_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down => {
                let position = ChartId::ALL
                    .iter()
                    .position(|c| *c == self.chart_focus)
                    .unwrap_or(0);
                let count = ChartId::ALL.len();
                let next = if key == KeyCode::Down {
                    (position + 1) % count
                } else {
                    (position + count - 1) % count
                };
                self.chart_focus = ChartId::ALL[next];
                self.dispatch(UiEvent::Hover(None));
            }
            KeyCode::Right => self.select_mark(true),
            KeyCode::Left => self.select_mark(false),
            KeyCode::Enter => self.click_hovered(),
            KeyCode::Esc => {
                self.dispatch(UiEvent::Hover(None));
            }
            _ => {}
        }
    }

    /// Move the keyboard selection to the next or previous bound mark.
    fn select_mark(&mut self, forward: bool) {
        let target = {
            let bindings = self.surfaces.get(self.chart_focus).bindings();
            if bindings.is_empty() {
                return;
            }
            let count = bindings.len();
            let current = self
                .router
                .hover()
                .and_then(|hover| bindings.iter().position(|b| b.mark == hover));
            let next = match (current, forward) {
                (Some(i), true) => (i + 1) % count,
                (Some(i), false) => (i + count - 1) % count,
                (None, true) => 0,
                (None, false) => count - 1,
            };
            bindings[next].mark
        };
        self.dispatch(UiEvent::Hover(Some(target)));
    }

    fn click_hovered(&mut self) {
        let Some(mark) = self.router.hover() else {
            return;
        };
        if let Some(interaction) = self.click_target(mark) {
            self.dispatch(UiEvent::Click(interaction));
        }
    }

    fn click_target(&self, mark: MarkId) -> Option<Interaction> {
        self.surfaces.get(mark.chart).binding_for(mark)?.on_click.clone()
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let hit = ChartId::ALL.into_iter().find_map(|chart| {
            self.surfaces
                .get(chart)
                .hit_test(mouse.column, mouse.row)
                .map(|binding| (binding.mark, binding.on_click.clone()))
        });

        match mouse.kind {
            MouseEventKind::Moved => {
                self.dispatch(UiEvent::Hover(hit.map(|(mark, _)| mark)));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((mark, on_click)) = hit else {
                    return;
                };
                self.focus = Focus::Charts;
                self.chart_focus = mark.chart;
                self.dispatch(UiEvent::Hover(Some(mark)));
                if let Some(interaction) = on_click {
                    self.dispatch(UiEvent::Click(interaction));
                }
            }
            _ => {}
        }
    }

    /// A pasted path loads that file; inside the prompt it is just text.
    fn handle_paste(&mut self, text: &str) {
        if let Some(input) = self.prompt.as_mut() {
            input.push_str(text.trim_end_matches(['\r', '\n']));
            return;
        }

        let path = clean_path(text);
        if !path.is_empty() {
            self.load(PathBuf::from(path));
        }
    }
}

/// Strip whitespace, surrounding quotes and a `file://` scheme from a
/// dropped or pasted path.
fn clean_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches(|c| c == '"' || c == '\'');
    trimmed
        .strip_prefix("file://")
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogMode;
    use crate::domain::AgeRange;
    use crate::ports::MarkKey;
    use crossterm::event::KeyEvent;
    use ratatui::backend::TestBackend;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cohort_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Should create temp file");
        writeln!(
            file,
            "Age,Sex,ChestPainType,RestingBP,Cholesterol,MaxHR,ExerciseAngina,HeartDisease"
        )
        .expect("Should write header");
        for i in 0..30 {
            let pain = if i % 3 == 0 { "ASY" } else { "ATA" };
            writeln!(
                file,
                "{},M,{pain},130,{},{},N,{}",
                35 + i,
                180 + i * 4,
                120 + i,
                i % 2
            )
            .expect("Should write row");
        }
        file
    }

    fn settings(path: PathBuf, explicit: bool) -> Settings {
        Settings {
            data_path: path,
            data_path_explicit: explicit,
            log_mode: LogMode::Stdout,
            log_file: PathBuf::from("unused.log"),
        }
    }

    fn wait_loaded(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while app.worker.is_loading() && Instant::now() < deadline {
            app.poll_worker();
            std::thread::sleep(Duration::from_millis(10));
        }
        app.poll_worker();
    }

    fn key(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn empty_app() -> App {
        App::new(settings(PathBuf::from("/nonexistent/heart.csv"), false))
    }

    fn draw(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).expect("Should create terminal");
        terminal.draw(|f| app.draw(f)).expect("Should draw");
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_missing_default_dataset_is_not_fatal() {
        let mut app = empty_app();
        assert!(!app.worker.is_loading());
        assert!(app.router.store().dataset().is_empty());

        let terminal = draw(&mut app);
        assert!(screen_text(&terminal).contains("No dataset loaded"));
    }

    #[test]
    fn test_auto_load_populates_dataset() {
        let file = cohort_file();
        let mut app = App::new(settings(file.path().to_path_buf(), true));
        wait_loaded(&mut app);

        assert_eq!(app.router.store().dataset().len(), 30);
        assert_eq!(app.summary.total_records, 30);
    }

    #[test]
    fn test_failed_load_keeps_state_and_reports() {
        let file = cohort_file();
        let mut app = App::new(settings(file.path().to_path_buf(), true));
        wait_loaded(&mut app);

        app.load(PathBuf::from("/nonexistent/other.csv"));
        wait_loaded(&mut app);

        assert_eq!(app.router.store().dataset().len(), 30);
        assert!(app.status.as_ref().is_some_and(|s| s.error));
    }

    #[test]
    fn test_form_edits_update_patient() {
        let mut app = empty_app();
        for _ in 0..4 {
            key(&mut app, KeyCode::Down);
        }
        assert_eq!(app.form.current().field, PatientField::Cholesterol);

        for _ in 0..3 {
            key(&mut app, KeyCode::Backspace);
        }
        for c in ['3', '0', '0'] {
            key(&mut app, KeyCode::Char(c));
        }

        assert_eq!(app.router.store().patient().cholesterol, 300.0);
        assert_eq!(app.summary.risk, crate::domain::RiskLevel::High);
        assert!(app.form.error_message.is_none());
    }

    #[test]
    fn test_uncoercible_input_is_rejected() {
        let mut app = empty_app();
        key(&mut app, KeyCode::Backspace);
        assert_eq!(app.router.store().patient().age, 4.0);

        key(&mut app, KeyCode::Backspace);
        assert!(app.form.error_message.is_some());
        assert_eq!(app.router.store().patient().age, 4.0);

        key(&mut app, KeyCode::Char('7'));
        assert!(app.form.error_message.is_none());
        assert_eq!(app.router.store().patient().age, 7.0);
    }

    #[test]
    fn test_commit_shows_acknowledgement() {
        let file = cohort_file();
        let mut app = App::new(settings(file.path().to_path_buf(), true));
        wait_loaded(&mut app);

        key(&mut app, KeyCode::Enter);
        assert_eq!(app.router.store().dataset().len(), 31);

        let terminal = draw(&mut app);
        assert!(screen_text(&terminal).contains("Added!"));
    }

    #[test]
    fn test_keyboard_bin_selection_filters_scatter() {
        let file = cohort_file();
        let mut app = App::new(settings(file.path().to_path_buf(), true));
        wait_loaded(&mut app);
        draw(&mut app);

        key(&mut app, KeyCode::Tab);
        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Down);
        assert_eq!(app.chart_focus, ChartId::AgeHistogram);

        key(&mut app, KeyCode::Right);
        assert_eq!(
            app.router.hover(),
            Some(MarkId::new(ChartId::AgeHistogram, MarkKey::Bin(0)))
        );
        assert!(app.hovered_tooltip().is_some_and(|t| t.starts_with("Age")));

        key(&mut app, KeyCode::Enter);
        assert!(app.router.store().filter().age_range.is_some());

        // Same bin again clears the filter.
        key(&mut app, KeyCode::Enter);
        assert!(app.router.store().filter().age_range.is_none());
    }

    #[test]
    fn test_status_line_shows_filters_after_load() {
        let file = cohort_file();
        let mut app = App::new(settings(file.path().to_path_buf(), true));
        wait_loaded(&mut app);
        assert!(app.status.as_ref().is_some_and(|s| !s.error));

        app.dispatch(UiEvent::Click(Interaction::ToggleAgeRange(AgeRange::new(
            30.0, 35.0,
        ))));
        let text: String = app
            .status_line()
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(text.contains("Loaded 30 records"));
        assert!(text.contains("Age 30-35"));

        let terminal = draw(&mut app);
        assert!(screen_text(&terminal).contains("Age 30-35"));
    }

    #[test]
    fn test_cohort_chest_pain_types_become_form_options() {
        let mut file = NamedTempFile::new().expect("Should create temp file");
        writeln!(
            file,
            "Age,Sex,ChestPainType,RestingBP,Cholesterol,MaxHR,ExerciseAngina,HeartDisease"
        )
        .expect("Should write header");
        writeln!(file, "50,F,XYZ,120,200,140,N,0").expect("Should write row");
        writeln!(file, "60,M,,130,210,150,Y,1").expect("Should write row");

        let mut app = App::new(settings(file.path().to_path_buf(), true));
        wait_loaded(&mut app);

        let options = &app.form.fields[2].options;
        assert!(options.iter().any(|o| o == "XYZ"));
        assert!(!options.iter().any(|o| o == UNKNOWN_CHEST_PAIN));

        for _ in 0..2 {
            key(&mut app, KeyCode::Down);
        }
        key(&mut app, KeyCode::Char('x'));
        assert_eq!(
            app.router.store().patient().chest_pain_type,
            "XYZ".to_string()
        );
    }

    #[test]
    fn test_mouse_click_on_slice_toggles_chest_pain() {
        let file = cohort_file();
        let mut app = App::new(settings(file.path().to_path_buf(), true));
        wait_loaded(&mut app);
        draw(&mut app);

        let pie = app.surfaces.get(ChartId::ChestPainPie).area();
        // Three o'clock inside the ring: the first slice (ASY) covers a third of the circle.
        let column = pie.x + pie.width / 2 + pie.width.min(pie.height * 2) / 3;
        let row = pie.y + pie.height / 2;
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));

        assert_eq!(app.focus, Focus::Charts);
        assert!(app.router.store().filter().chest_pain.is_some());
    }

    #[test]
    fn test_paste_loads_path() {
        let file = cohort_file();
        let mut app = empty_app();
        app.handle_event(Event::Paste(format!("'{}'\n", file.path().display())));
        assert!(app.worker.is_loading());

        wait_loaded(&mut app);
        assert_eq!(app.router.store().dataset().len(), 30);
    }

    #[test]
    fn test_load_prompt() {
        let file = cohort_file();
        let mut app = empty_app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('l'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.prompt.is_some());

        app.handle_event(Event::Paste(file.path().display().to_string()));
        key(&mut app, KeyCode::Enter);
        assert!(app.prompt.is_none());

        wait_loaded(&mut app);
        assert_eq!(app.router.store().dataset().len(), 30);
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut app = empty_app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path("  '/tmp/heart.csv'\n"), "/tmp/heart.csv");
        assert_eq!(clean_path("file:///tmp/heart.csv"), "/tmp/heart.csv");
        assert_eq!(clean_path("\"a b.csv\""), "a b.csv");
    }
}
