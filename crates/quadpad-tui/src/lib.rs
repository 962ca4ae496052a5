// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use quadpad_app::{
    CLEAR_LABEL, Coefficients, FieldName, Highlight, KeypadEvent, KeypadState, Locale,
    NEXT_LABEL, ResultArea, ResultPanel, SIGN_LABEL, SOLVE_LABEL, SolveEvent, SolveOutcome,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const BUTTON_ROWS: [[&str; 3]; 5] = [
    ["7", "8", "9"],
    ["4", "5", "6"],
    ["1", "2", "3"],
    ["0", ".", SIGN_LABEL],
    [CLEAR_LABEL, NEXT_LABEL, SOLVE_LABEL],
];

const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);

/// Runs solves on behalf of the UI loop.
pub trait SolveRuntime {
    fn solve(&mut self, coefficients: Coefficients) -> SolveOutcome;

    /// Must not block the UI for the length of the round trip in a real
    /// runtime; the default runs inline and is meant for tests.
    fn spawn_solve(
        &mut self,
        request_id: u64,
        coefficients: Coefficients,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let outcome = self.solve(coefficients);
        tx.send(InternalEvent::Solve(SolveEvent::Finished {
            request_id,
            outcome,
        }))
        .map_err(|_| anyhow::anyhow!("solve event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    Solve(SolveEvent),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub keypad: KeypadState,
    pub results: ResultArea,
    pub locale: Locale,
    pub status_line: Option<String>,
}

impl UiState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ButtonCursor {
    row: usize,
    col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    button_cursor: ButtonCursor,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<R: SolveRuntime>(state: &mut UiState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();
    tracing::info!(locale = state.locale.as_str(), "keypad ready");

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut UiState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.status_line = None;
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::Solve(event) => {
                let Some(completion) = state.results.apply(event) else {
                    continue;
                };
                let request_id = completion.request_id;
                tracing::info!(request_id, stale = completion.stale, "solve finished");
                if completion.stale {
                    emit_status(
                        state,
                        view_data,
                        tx,
                        format!(
                            "showing request #{request_id}; a newer request #{} was issued",
                            state.results.last_issued()
                        ),
                    );
                }
            }
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_AFTER);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut UiState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.status_line = Some(message.into());
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: SolveRuntime>(
    state: &mut UiState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('?') => {
            view_data.help_visible = true;
            return false;
        }
        KeyCode::Up => move_button_cursor(view_data, -1, 0),
        KeyCode::Down => move_button_cursor(view_data, 1, 0),
        KeyCode::Left => move_button_cursor(view_data, 0, -1),
        KeyCode::Right => move_button_cursor(view_data, 0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let label = selected_label(view_data);
            press_label(state, runtime, view_data, internal_tx, label);
        }
        _ => {
            if let Some(label) = label_for_key(key) {
                press_label(state, runtime, view_data, internal_tx, label);
            }
        }
    }
    false
}

fn label_for_key(key: KeyEvent) -> Option<&'static str> {
    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' => BUTTON_ROWS
            .iter()
            .flatten()
            .copied()
            .find(|label| label.chars().eq(std::iter::once(ch))),
        KeyCode::Char('-') => Some(SIGN_LABEL),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Backspace | KeyCode::Delete => {
            Some(CLEAR_LABEL)
        }
        KeyCode::Tab => Some(NEXT_LABEL),
        KeyCode::Char('=') => Some(SOLVE_LABEL),
        _ => None,
    }
}

fn selected_label(view_data: &ViewData) -> &'static str {
    let ButtonCursor { row, col } = view_data.button_cursor;
    BUTTON_ROWS[row][col]
}

fn move_button_cursor(view_data: &mut ViewData, delta_row: isize, delta_col: isize) {
    let ButtonCursor { row, col } = view_data.button_cursor;
    let max_row = BUTTON_ROWS.len() as isize - 1;
    let max_col = BUTTON_ROWS[0].len() as isize - 1;
    view_data.button_cursor = ButtonCursor {
        row: (row as isize + delta_row).clamp(0, max_row) as usize,
        col: (col as isize + delta_col).clamp(0, max_col) as usize,
    };
}

fn press_label<R: SolveRuntime>(
    state: &mut UiState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    label: &str,
) {
    for event in state.keypad.press(label) {
        match event {
            KeypadEvent::SolveRequested(coefficients) => {
                submit_solve(state, runtime, view_data, internal_tx, coefficients);
            }
            KeypadEvent::CursorMoved { to, .. } => {
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("editing {}", to.as_str()),
                );
            }
            KeypadEvent::FieldChanged { .. } => {}
        }
    }
}

fn submit_solve<R: SolveRuntime>(
    state: &mut UiState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    coefficients: Coefficients,
) {
    let request_id = state.results.begin();
    tracing::info!(request_id, ?coefficients, "solve requested");

    if let Err(error) = runtime.spawn_solve(request_id, coefficients, internal_tx.clone()) {
        let message = format!("{error:#}");
        state.results.apply(SolveEvent::Finished {
            request_id,
            outcome: SolveOutcome::Failed(message.clone()),
        });
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("solve failed to start: {message}"),
        );
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &UiState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(BUTTON_ROWS.len() as u16 + 2),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let field_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(layout[0]);
    for (name, area) in FieldName::ALL.into_iter().zip(field_areas.iter()) {
        let field = state.keypad.field(name);
        let widget = Paragraph::new(field.text.clone()).block(
            Block::default()
                .title(field_title(name, field.highlight))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(highlight_color(field.highlight))),
        );
        frame.render_widget(widget, *area);
    }

    render_keypad(frame, layout[1], view_data);

    let result = Paragraph::new(state.results.lines(state.locale).join("\n"))
        .style(result_style(state.results.panel()))
        .block(Block::default().title("result").borders(Borders::ALL));
    frame.render_widget(result, layout[2]);

    let status = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[3]);

    if view_data.help_visible {
        let area = centered_rect(70, 50, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_keypad(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let selected = view_data.button_cursor;
    let rows = BUTTON_ROWS.iter().enumerate().map(|(row_index, row)| {
        Row::new(row.iter().enumerate().map(|(col_index, label)| {
            let style = if selected == (ButtonCursor {
                row: row_index,
                col: col_index,
            }) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Cell::from(format!(" {label} ")).style(style)
        }))
    });

    let table = Table::new(rows, [Constraint::Length(13); 3])
        .block(Block::default().title("keypad").borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn field_title(name: FieldName, highlight: Highlight) -> String {
    match highlight {
        Highlight::Active => format!("{} *", name.as_str()),
        Highlight::Completed | Highlight::Idle => name.as_str().to_owned(),
    }
}

fn highlight_color(highlight: Highlight) -> Color {
    match highlight {
        Highlight::Active => Color::Red,
        Highlight::Completed => Color::Green,
        Highlight::Idle => Color::Gray,
    }
}

fn result_style(panel: &ResultPanel) -> Style {
    match panel {
        ResultPanel::Resolved {
            outcome: SolveOutcome::Rejected(_) | SolveOutcome::Failed(_),
            ..
        } => Style::default().fg(Color::Red),
        ResultPanel::Pending { .. } => Style::default().add_modifier(Modifier::ITALIC),
        _ => Style::default(),
    }
}

fn status_text(state: &UiState) -> String {
    let default = "0-9 . - | c clear | tab next | = solve | arrows+enter press | ? help | esc quit";
    match &state.status_line {
        Some(status) => format!("{status} | {default}"),
        None => default.to_owned(),
    }
}

fn help_overlay_text() -> &'static str {
    "keys: 0-9 and . type into the active field | - toggles sign\n\
c or backspace clears the active field | tab moves to the next field\n\
= solves | arrows move the keypad selection | enter/space press it\n\
global: esc or ctrl+q quit | ? toggle help"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::{
        ButtonCursor, InternalEvent, SolveRuntime, UiState, ViewData, handle_key_event,
        help_overlay_text, label_for_key, process_internal_events, selected_label, status_text,
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use quadpad_app::{
        Coefficients, FieldName, Highlight, Locale, NEXT_LABEL, ResultPanel, Root, SOLVE_LABEL,
        SolveEvent, SolveOutcome, SolveReport,
    };
    use std::sync::mpsc;

    #[derive(Debug, Default)]
    struct TestRuntime {
        outcome: Option<SolveOutcome>,
        solved: Vec<Coefficients>,
        fail_spawn: bool,
    }

    impl SolveRuntime for TestRuntime {
        fn solve(&mut self, coefficients: Coefficients) -> SolveOutcome {
            self.solved.push(coefficients);
            self.outcome
                .clone()
                .unwrap_or_else(|| SolveOutcome::Failed("no scripted outcome".to_owned()))
        }

        fn spawn_solve(
            &mut self,
            request_id: u64,
            coefficients: Coefficients,
            tx: mpsc::Sender<InternalEvent>,
        ) -> anyhow::Result<()> {
            if self.fail_spawn {
                anyhow::bail!("worker pool exhausted");
            }
            let outcome = self.solve(coefficients);
            tx.send(InternalEvent::Solve(SolveEvent::Finished {
                request_id,
                outcome,
            }))
            .map_err(|_| anyhow::anyhow!("solve event channel closed"))
        }
    }

    fn internal_channel() -> (
        mpsc::Sender<InternalEvent>,
        mpsc::Receiver<InternalEvent>,
    ) {
        mpsc::channel()
    }

    fn press(
        state: &mut UiState,
        runtime: &mut TestRuntime,
        view_data: &mut ViewData,
        tx: &mpsc::Sender<InternalEvent>,
        code: KeyCode,
    ) -> bool {
        handle_key_event(
            state,
            runtime,
            view_data,
            tx,
            KeyEvent::new(code, KeyModifiers::NONE),
        )
    }

    fn type_keys(
        state: &mut UiState,
        runtime: &mut TestRuntime,
        view_data: &mut ViewData,
        tx: &mpsc::Sender<InternalEvent>,
        keys: &str,
    ) {
        for ch in keys.chars() {
            let code = if ch == '\t' {
                KeyCode::Tab
            } else {
                KeyCode::Char(ch)
            };
            press(state, runtime, view_data, tx, code);
        }
    }

    fn two_roots() -> SolveOutcome {
        SolveOutcome::Solved(SolveReport {
            roots: vec![Root::Number(2.0), Root::Number(1.0)],
            discriminant: 1.0,
            message: "Two real roots".to_owned(),
        })
    }

    #[test]
    fn typed_keys_fill_fields_across_tabs() {
        let mut state = UiState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let (tx, _rx) = internal_channel();

        type_keys(&mut state, &mut runtime, &mut view_data, &tx, "1\t3-\t2");

        assert_eq!(state.keypad.text(FieldName::A), "1");
        assert_eq!(state.keypad.text(FieldName::B), "-3");
        assert_eq!(state.keypad.text(FieldName::C), "2");
        assert_eq!(state.keypad.cursor(), FieldName::C);
        assert_eq!(
            state.keypad.field(FieldName::A).highlight,
            Highlight::Completed
        );
    }

    #[test]
    fn clear_keys_reset_active_field() {
        let mut state = UiState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let (tx, _rx) = internal_channel();

        type_keys(&mut state, &mut runtime, &mut view_data, &tx, "42");
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Backspace);
        assert_eq!(state.keypad.text(FieldName::A), "0");

        type_keys(&mut state, &mut runtime, &mut view_data, &tx, "7c");
        assert_eq!(state.keypad.text(FieldName::A), "0");
    }

    #[test]
    fn equals_solves_and_renders_outcome() {
        let mut state = UiState::default();
        let mut runtime = TestRuntime {
            outcome: Some(two_roots()),
            ..TestRuntime::default()
        };
        let mut view_data = ViewData::default();
        let (tx, rx) = internal_channel();

        type_keys(&mut state, &mut runtime, &mut view_data, &tx, "1\t3-\t2");
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('='));

        assert_eq!(runtime.solved, vec![Coefficients::new(1.0, -3.0, 2.0)]);
        assert_eq!(
            state.results.lines(Locale::En),
            vec!["Computing...".to_owned()]
        );

        process_internal_events(&mut state, &mut view_data, &tx, &rx);
        let lines = state.results.lines(Locale::En);
        assert_eq!(lines.last().map(String::as_str), Some("roots: 2, 1"));
    }

    #[test]
    fn enter_presses_the_selected_button() {
        let mut state = UiState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let (tx, _rx) = internal_channel();

        assert_eq!(selected_label(&view_data), "7");
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Enter);
        assert_eq!(state.keypad.text(FieldName::A), "7");

        for _ in 0..10 {
            press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Down);
        }
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Right);
        assert_eq!(view_data.button_cursor, ButtonCursor { row: 4, col: 1 });
        assert_eq!(selected_label(&view_data), NEXT_LABEL);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char(' '));
        assert_eq!(state.keypad.cursor(), FieldName::B);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Right);
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Right);
        assert_eq!(selected_label(&view_data), SOLVE_LABEL);
    }

    #[test]
    fn stale_completion_overwrites_and_flags_status() {
        let mut state = UiState::default();
        let mut view_data = ViewData::default();
        let (tx, rx) = internal_channel();

        let first = state.results.begin();
        let second = state.results.begin();
        tx.send(InternalEvent::Solve(SolveEvent::Finished {
            request_id: second,
            outcome: two_roots(),
        }))
        .expect("send newer");
        tx.send(InternalEvent::Solve(SolveEvent::Finished {
            request_id: first,
            outcome: SolveOutcome::Rejected("slow and wrong".to_owned()),
        }))
        .expect("send older");

        process_internal_events(&mut state, &mut view_data, &tx, &rx);

        assert_eq!(
            state.results.lines(Locale::En),
            vec!["Error: slow and wrong".to_owned()]
        );
        assert!(matches!(
            state.results.panel(),
            ResultPanel::Resolved { request_id, .. } if *request_id == first
        ));
        assert_eq!(
            state.status_line.as_deref(),
            Some("showing request #1; a newer request #2 was issued")
        );
    }

    #[test]
    fn spawn_failure_resolves_panel_with_error() {
        let mut state = UiState::new(Locale::Ru);
        let mut runtime = TestRuntime {
            fail_spawn: true,
            ..TestRuntime::default()
        };
        let mut view_data = ViewData::default();
        let (tx, _rx) = internal_channel();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('='));

        assert_eq!(
            state.results.lines(state.locale),
            vec!["Ошибка: worker pool exhausted".to_owned()]
        );
        assert!(
            state
                .status_line
                .as_deref()
                .is_some_and(|status| status.contains("solve failed to start"))
        );
    }

    #[test]
    fn stale_clear_status_tokens_are_ignored() {
        let mut state = UiState::default();
        let mut view_data = ViewData {
            status_token: 2,
            ..ViewData::default()
        };
        state.status_line = Some("editing b".to_owned());
        let (tx, rx) = internal_channel();

        tx.send(InternalEvent::ClearStatus { token: 1 })
            .expect("send old token");
        process_internal_events(&mut state, &mut view_data, &tx, &rx);
        assert_eq!(state.status_line.as_deref(), Some("editing b"));

        tx.send(InternalEvent::ClearStatus { token: 2 })
            .expect("send current token");
        process_internal_events(&mut state, &mut view_data, &tx, &rx);
        assert_eq!(state.status_line, None);
    }

    #[test]
    fn quit_keys_and_help_overlay() {
        let mut state = UiState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let (tx, _rx) = internal_channel();

        assert!(!press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('?')));
        assert!(view_data.help_visible);
        assert!(!press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('5')));
        assert_eq!(state.keypad.text(FieldName::A), "0");
        assert!(!press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Esc));
        assert!(!view_data.help_visible);

        assert!(handle_key_event(
            &mut state,
            &mut runtime,
            &mut view_data,
            &tx,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        ));
        assert!(press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Esc));
    }

    #[test]
    fn label_mapping_covers_every_direct_key() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(label_for_key(key(KeyCode::Char('0'))), Some("0"));
        assert_eq!(label_for_key(key(KeyCode::Char('.'))), Some("."));
        assert_eq!(label_for_key(key(KeyCode::Char('-'))), Some("-"));
        assert_eq!(label_for_key(key(KeyCode::Tab)), Some(NEXT_LABEL));
        assert_eq!(label_for_key(key(KeyCode::Char('='))), Some(SOLVE_LABEL));
        assert_eq!(label_for_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn status_and_help_text_document_bindings() {
        let mut state = UiState::default();
        assert!(status_text(&state).contains("= solve"));
        state.status_line = Some("editing c".to_owned());
        assert!(status_text(&state).starts_with("editing c | "));
        assert!(help_overlay_text().contains("tab moves to the next field"));
    }
}
