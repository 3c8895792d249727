//! Interactive TUI wizard for configuring and running the simulated pipeline
//!
//! The wizard walks the user through the fixed step sequence (dataset,
//! preprocessing, model, training method, metrics, visualizations, review)
//! and then drives the simulated run on the terminal Processing step.
//!
//! # Architecture
//!
//! - `WizardApp`: UI state wrapped around the `WizardState` controller
//!   (cursor, notice banner, quit overlay, file browser)
//! - `StepAction`: result of handling a key on the current step
//! - `WizardOutcome`: what the wizard hands back to `main`
//!
//! Key handling is free of terminal I/O so it can be exercised in tests; only
//! `run_wizard` touches the real terminal.

use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use log::debug;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph},
    Terminal,
};

use super::config::RunConfig;
use super::file_selector::{render_file_browser, BrowserAction, FileBrowser};
use crate::pipeline::{
    DatasetFile, Notice, NoticeKind, PipelineResults, SelectionKind, SimulatedRunner, Step,
    TickOutcome, WizardState, DATASETS, MODEL, NOT_AVAILABLE, TRAINING_METHOD,
};

/// How long a notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Upper bound on how long the loop blocks waiting for input
const IDLE_POLL: Duration = Duration::from_millis(250);

// ============================================================================
// Core Types
// ============================================================================

/// What the wizard returns when it exits
#[derive(Debug, Clone)]
pub enum WizardOutcome {
    /// The run finished and the user left the results view
    Completed(Box<PipelineResults>),
    /// The user quit before or without finishing a run
    Quit,
}

/// Action to take after handling a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    NextStep,
    PrevStep,
    StartRun,
    /// Ask for quit confirmation
    Quit,
    /// Leave the wizard from the results view
    Finish,
    Stay,
}

/// A notice plus the moment it was raised
#[derive(Debug, Clone)]
pub struct ActiveNotice {
    pub notice: Notice,
    pub shown_at: Instant,
}

/// Complete UI state of the wizard
pub struct WizardApp {
    pub state: WizardState,
    pub runner: SimulatedRunner,
    /// Highlighted row on list steps
    pub cursor: usize,
    pub notice: Option<ActiveNotice>,
    pub show_quit_confirm: bool,
    pub browser: Option<FileBrowser>,
}

impl WizardApp {
    pub fn new(state: WizardState, runner: SimulatedRunner) -> Self {
        Self {
            state,
            runner,
            cursor: 0,
            notice: None,
            show_quit_confirm: false,
            browser: None,
        }
    }

    /// Build the app from command-line presets, surfacing any import notice
    pub fn from_config(config: &RunConfig, now: Instant) -> Self {
        let (state, notice) = config.seed_state();
        let mut app = Self::new(state, config.runner());
        if let Some(notice) = notice {
            app.show_notice(notice, now);
        }
        app
    }

    pub fn show_notice(&mut self, notice: Notice, now: Instant) {
        self.notice = Some(ActiveNotice {
            notice,
            shown_at: now,
        });
    }

    /// Drop the notice once it has been visible for `NOTICE_TTL`
    pub fn expire_notice(&mut self, now: Instant) {
        if let Some(active) = &self.notice {
            if now.duration_since(active.shown_at) >= NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    /// Import a file and show the resulting notice
    pub fn import(&mut self, file: DatasetFile, now: Instant) {
        let notice = self.state.import_dataset(file);
        self.show_notice(notice, now);
    }

    /// Options listed on the current step, if it is a list step
    fn current_options(&self) -> &'static [&'static str] {
        match self.state.current_step {
            Step::DatasetSelection => &DATASETS,
            step => selection_kind(step).map(|k| k.options()).unwrap_or(&[]),
        }
    }

    fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_down(&mut self) {
        let len = self.current_options().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Handle one key press. Returns an outcome when the wizard should exit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<WizardOutcome>> {
        // Ctrl-C always leaves, even mid-run
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(WizardOutcome::Quit));
        }

        if self.show_quit_confirm {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(Some(WizardOutcome::Quit)),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.show_quit_confirm = false;
                }
                _ => {}
            }
            return Ok(None);
        }

        if let Some(browser) = self.browser.as_mut() {
            match browser.handle_key(key) {
                BrowserAction::Selected(path) => {
                    self.browser = None;
                    self.import(DatasetFile::from_path(path), now);
                }
                BrowserAction::Cancelled => self.browser = None,
                BrowserAction::Stay => {}
            }
            return Ok(None);
        }

        let action = self.handle_step_event(key);
        self.apply(action, now)
    }

    fn handle_step_event(&mut self, key: KeyEvent) -> StepAction {
        // No navigation or quitting while the simulated run is in progress
        if self.runner.is_running() {
            return StepAction::Stay;
        }

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
            && !self.state.is_complete()
        {
            return StepAction::Quit;
        }

        match self.state.current_step {
            Step::DatasetSelection => self.handle_dataset_selection(key),
            Step::PreprocessingMethods | Step::MetricsSelection | Step::VisualizationTypes => {
                self.handle_checklist(key)
            }
            Step::LanguageModel | Step::TrainingMethod => handle_fixed_choice(key),
            Step::Review => handle_review(key),
            Step::Processing => handle_results(key),
        }
    }

    fn apply(&mut self, action: StepAction, now: Instant) -> Result<Option<WizardOutcome>> {
        match action {
            StepAction::NextStep => {
                self.state.go_next();
                self.cursor = 0;
            }
            StepAction::PrevStep => {
                self.state.go_back();
                self.cursor = 0;
            }
            StepAction::StartRun => {
                self.runner.start(&mut self.state, now)?;
                self.notice = None;
            }
            StepAction::Quit => self.show_quit_confirm = true,
            StepAction::Finish => {
                let results = self
                    .state
                    .results()
                    .context("results requested before the run completed")?;
                return Ok(Some(WizardOutcome::Completed(Box::new(results))));
            }
            StepAction::Stay => {}
        }
        Ok(None)
    }

    fn handle_dataset_selection(&mut self, key: KeyEvent) -> StepAction {
        match key.code {
            KeyCode::Up => {
                self.move_cursor_up();
                StepAction::Stay
            }
            KeyCode::Down => {
                self.move_cursor_down();
                StepAction::Stay
            }
            KeyCode::Char(' ') => {
                if let Some(label) = DATASETS.get(self.cursor) {
                    self.state.select_dataset(*label);
                }
                StepAction::Stay
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                debug!("opening file browser");
                self.browser = Some(FileBrowser::at_home());
                StepAction::Stay
            }
            KeyCode::Enter | KeyCode::Right => StepAction::NextStep,
            _ => StepAction::Stay,
        }
    }

    fn handle_checklist(&mut self, key: KeyEvent) -> StepAction {
        let Some(kind) = selection_kind(self.state.current_step) else {
            return StepAction::Stay;
        };
        match key.code {
            KeyCode::Up => {
                self.move_cursor_up();
                StepAction::Stay
            }
            KeyCode::Down => {
                self.move_cursor_down();
                StepAction::Stay
            }
            KeyCode::Char(' ') => {
                if let Some(item) = kind.options().get(self.cursor) {
                    self.state.toggle(kind, item);
                }
                StepAction::Stay
            }
            KeyCode::Enter | KeyCode::Right => StepAction::NextStep,
            KeyCode::Backspace | KeyCode::Left => StepAction::PrevStep,
            _ => StepAction::Stay,
        }
    }

    /// Advance the simulated run if its tick is due
    pub fn on_tick(&mut self, now: Instant) {
        if let TickOutcome::Completed(notice) = self.runner.tick(&mut self.state, now) {
            self.show_notice(notice, now);
        }
    }
}

fn selection_kind(step: Step) -> Option<SelectionKind> {
    match step {
        Step::PreprocessingMethods => Some(SelectionKind::Preprocessing),
        Step::MetricsSelection => Some(SelectionKind::Metrics),
        Step::VisualizationTypes => Some(SelectionKind::Visualizations),
        _ => None,
    }
}

fn handle_fixed_choice(key: KeyEvent) -> StepAction {
    match key.code {
        KeyCode::Enter | KeyCode::Right => StepAction::NextStep,
        KeyCode::Backspace | KeyCode::Left => StepAction::PrevStep,
        _ => StepAction::Stay,
    }
}

fn handle_review(key: KeyEvent) -> StepAction {
    match key.code {
        KeyCode::Enter => StepAction::StartRun,
        KeyCode::Backspace | KeyCode::Left => StepAction::PrevStep,
        _ => StepAction::Stay,
    }
}

fn handle_results(key: KeyEvent) -> StepAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            StepAction::Finish
        }
        _ => StepAction::Stay,
    }
}

// ============================================================================
// Terminal Setup/Teardown
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    stdout()
        .execute(EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the wizard on the real terminal
pub fn run_wizard(config: &RunConfig) -> Result<WizardOutcome> {
    let mut app = WizardApp::from_config(config, Instant::now());
    let mut terminal = setup_terminal()?;
    let result = run_wizard_loop(&mut terminal, &mut app);
    teardown_terminal();
    result
}

/// Single-threaded event loop: key events and runner ticks share one queue
fn run_wizard_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut WizardApp,
) -> Result<WizardOutcome> {
    loop {
        app.expire_notice(Instant::now());
        terminal.draw(|f| render_wizard(f, app))?;

        let timeout = app
            .runner
            .time_until_tick(Instant::now())
            .map_or(IDLE_POLL, |t| t.min(IDLE_POLL));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(outcome) = app.handle_key(key, Instant::now())? {
                        return Ok(outcome);
                    }
                }
            }
        }

        app.on_tick(Instant::now());
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Semantic color for a step
fn step_color(step: Step) -> Color {
    match step {
        Step::DatasetSelection => Color::Magenta,
        Step::PreprocessingMethods => Color::Yellow,
        Step::LanguageModel | Step::TrainingMethod => Color::Cyan,
        Step::MetricsSelection | Step::VisualizationTypes => Color::Blue,
        Step::Review | Step::Processing => Color::Green,
    }
}

fn render_wizard(f: &mut Frame, app: &WizardApp) {
    let area = f.area();

    let logo_height = 4u16;
    let indicator_height = 2u16;
    let notice_height = 2u16;
    let hint_height = 1u16;
    let box_width = 72u16;
    let chrome = logo_height + indicator_height + notice_height + hint_height;
    let box_height = 18u16.min(area.height.saturating_sub(chrome + 2)).max(8);

    let total_height = chrome + box_height;
    let x = area.width.saturating_sub(box_width) / 2;
    let y = area.height.saturating_sub(total_height) / 2;
    let width = box_width.min(area.width);

    render_logo(f, Rect::new(x, y, width, logo_height).intersection(area));

    let indicator_area = Rect::new(x, y + logo_height, width, indicator_height);
    render_step_indicator(f, indicator_area.intersection(area), app.state.current_step);

    let box_area =
        Rect::new(x, indicator_area.y + indicator_height, width, box_height).intersection(area);
    f.render_widget(Clear, box_area);

    let step = app.state.current_step;
    let color = step_color(step);
    let title_text = format!(
        " Step {}/{} \u{00b7} {} ",
        step.index() + 1,
        Step::ALL.len(),
        step.title()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title_text)
        .title_style(Style::default().fg(color).bold())
        .title_alignment(Alignment::Center);
    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    match &app.browser {
        Some(browser) => render_file_browser(f, inner, browser),
        None => render_step(f, inner, app),
    }

    let notice_area = Rect::new(x, box_area.y + box_area.height, width, notice_height);
    if let Some(active) = &app.notice {
        render_notice(f, notice_area.intersection(area), &active.notice);
    }

    let hint_area = Rect::new(x, notice_area.y + notice_height, width, hint_height);
    render_help_bar(f, hint_area.intersection(area), app);

    if app.show_quit_confirm {
        render_quit_confirm_overlay(f);
    }
}

fn render_logo(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "┏━┓╻┏━┓┏━╸┏┓ ╻ ╻╻╻  ╺┳┓┏━╸┏━┓",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "┣━┛┃┣━┛┣╸ ┣┻┓┃ ┃┃┃   ┃┃┣╸ ┣┳┛",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "╹  ╹╹  ┗━╸┗━┛┗━┛╹┗━╸╺┻┛┗━╸╹┗╸",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "Text-classification pipelines, step by step",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Row of step markers: done, current, pending
fn render_step_indicator(f: &mut Frame, area: Rect, current: Step) {
    let mut spans = Vec::new();
    for step in Step::ALL {
        let (marker, style) = if step < current {
            ("✓".to_string(), Style::default().fg(Color::Green).bold())
        } else if step == current {
            (
                format!("{}", step.index() + 1),
                Style::default().fg(Color::Black).bg(step_color(step)).bold(),
            )
        } else {
            (
                format!("{}", step.index() + 1),
                Style::default().fg(Color::DarkGray),
            )
        };
        spans.push(Span::styled(format!(" {} ", marker), style));
        if step != Step::LAST {
            let connector = if step < current { "──" } else { "╌╌" };
            let color = if step < current { Color::Green } else { Color::DarkGray };
            spans.push(Span::styled(connector, Style::default().fg(color)));
        }
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_step(f: &mut Frame, area: Rect, app: &WizardApp) {
    match app.state.current_step {
        Step::DatasetSelection => render_dataset_selection(f, area, app),
        Step::PreprocessingMethods | Step::MetricsSelection | Step::VisualizationTypes => {
            render_checklist(f, area, app)
        }
        Step::LanguageModel => render_fixed_choice(f, area, "Language model", MODEL),
        Step::TrainingMethod => render_fixed_choice(f, area, "Training method", TRAINING_METHOD),
        Step::Review => render_review(f, area, &app.state),
        Step::Processing => match app.state.results() {
            Some(results) => render_results(f, area, &results),
            None => render_processing(f, area, app.state.progress_percent),
        },
    }
}

fn render_option_list(
    f: &mut Frame,
    area: Rect,
    items: Vec<ListItem<'static>>,
    cursor: usize,
) {
    let mut list_state = ListState::default();
    list_state.select(Some(cursor));
    f.render_stateful_widget(List::new(items), area, &mut list_state);
}

fn render_dataset_selection(f: &mut Frame, area: Rect, app: &WizardApp) {
    let color = step_color(Step::DatasetSelection);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(DATASETS.len() as u16 + 1),
            Constraint::Min(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            "  Choose a dataset",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[0],
    );

    let items: Vec<ListItem> = DATASETS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let chosen = app.state.dataset_label == *label;
            let marker = if chosen { "(•)" } else { "( )" };
            let style = if i == app.cursor {
                Style::default().fg(Color::Black).bg(color).bold()
            } else if chosen {
                Style::default().fg(color)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {} {}", marker, label)).style(style)
        })
        .collect();
    render_option_list(f, chunks[1], items, app.cursor);

    let mut lines = vec![Line::from(Span::styled(
        "  Or import your own dataset: press i to browse for a CSV file",
        Style::default().fg(Color::DarkGray),
    ))];
    if let Some(file) = &app.state.imported_file {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Imported: ", Style::default().fg(Color::DarkGray)),
            Span::styled(file.name.clone(), Style::default().fg(Color::Green)),
        ]));
    }
    f.render_widget(Paragraph::new(lines), chunks[2]);
}

fn render_checklist(f: &mut Frame, area: Rect, app: &WizardApp) {
    let Some(kind) = selection_kind(app.state.current_step) else {
        return;
    };
    let color = step_color(app.state.current_step);
    let selected = app.state.selection(kind);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!("  Select {}", kind.label()),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[0],
    );

    let items: Vec<ListItem> = kind
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let checked = selected.contains(option);
            let checkbox = if checked { "[x]" } else { "[ ]" };
            let style = if i == app.cursor {
                Style::default().fg(Color::Black).bg(color).bold()
            } else if checked {
                Style::default().fg(color)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {} {}", checkbox, option)).style(style)
        })
        .collect();
    render_option_list(f, chunks[1], items, app.cursor);
}

fn render_fixed_choice(f: &mut Frame, area: Rect, label: &str, value: &str) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", label),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ▸ ", Style::default().fg(Color::Cyan)),
            Span::styled(value.to_string(), Style::default().fg(Color::Cyan).bold()),
            Span::styled("  (only option)", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    f.render_widget(Paragraph::new(content), area);
}

fn summary_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<16}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn render_review(f: &mut Frame, area: Rect, state: &WizardState) {
    let color = step_color(Step::Review);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Configuration Summary",
            Style::default().fg(Color::DarkGray).bold(),
        )),
        Line::from(""),
        summary_line("Dataset:", state.dataset_label.clone(), color),
        summary_line("Preprocessing:", state.preprocessing.joined(), color),
        summary_line("Model:", MODEL.to_string(), color),
        summary_line("Method:", TRAINING_METHOD.to_string(), color),
        summary_line("Metrics:", state.metrics.joined(), color),
        summary_line("Visualizations:", state.visualizations.joined(), color),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Enter to start the pipeline",
            Style::default().fg(Color::DarkGray).italic(),
        )),
    ];
    f.render_widget(Paragraph::new(content), area);
}

fn render_processing(f: &mut Frame, area: Rect, progress: u8) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            "  Processing Pipeline",
            Style::default().fg(Color::White).bold(),
        )),
        chunks[0],
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(u16::from(progress));
    f.render_widget(gauge, chunks[1]);

    f.render_widget(
        Paragraph::new(format!("{}% Complete", progress)).alignment(Alignment::Center),
        chunks[2],
    );
}

fn render_results(f: &mut Frame, area: Rect, results: &PipelineResults) {
    let color = step_color(Step::Processing);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(Color::Green).bold()),
            Span::styled("Pipeline Complete", Style::default().fg(Color::White).bold()),
        ]),
        Line::from(Span::styled(
            format!("  Results for {}", results.dataset),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled("  Metrics", Style::default().fg(color).bold())),
    ];

    for metric in &results.metrics {
        let value_style = if metric.display_value() == NOT_AVAILABLE {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).bold()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("    {:<18}", metric.name), Style::default().fg(Color::Gray)),
            Span::styled(metric.display_value().to_string(), value_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Visualizations",
        Style::default().fg(color).bold(),
    )));
    for visual in &results.visualizations {
        lines.push(Line::from(vec![
            Span::styled(format!("    ▣ {:<18}", visual), Style::default().fg(Color::Gray)),
            Span::styled(
                "Visualization placeholder",
                Style::default().fg(Color::DarkGray).italic(),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_notice(f: &mut Frame, area: Rect, notice: &Notice) {
    let (icon, color) = match notice.kind {
        NoticeKind::Success => ("✓", Color::Green),
        NoticeKind::Error => ("✗", Color::Red),
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color).bold()),
            Span::styled(notice.title.clone(), Style::default().fg(color).bold()),
        ]),
        Line::from(Span::styled(
            notice.description.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Help bar with context-appropriate shortcuts
fn render_help_bar(f: &mut Frame, area: Rect, app: &WizardApp) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let text = |t: &'static str| Span::styled(t, Style::default().fg(Color::DarkGray));

    let step = app.state.current_step;
    let mut spans = vec![];

    if app.browser.is_some() {
        spans.extend([
            key("  Enter"),
            text(" open/pick  "),
            key("Bksp"),
            text(" up  "),
            key("Esc"),
            text(" cancel"),
        ]);
    } else if app.runner.is_running() {
        spans.push(text("  Running... please wait"));
    } else if step == Step::Processing {
        spans.extend([key("  Enter/Q"), text(" exit")]);
    } else {
        if step == Step::Review {
            spans.extend([key("  Enter"), text(" start run  ")]);
        } else {
            spans.extend([key("  Enter"), text(" next  ")]);
        }
        if step == Step::DatasetSelection {
            spans.extend([key("Space"), text(" select  "), key("i"), text(" import  ")]);
        }
        if selection_kind(step).is_some() {
            spans.extend([key("Space"), text(" toggle  ")]);
        }
        if step != Step::FIRST {
            spans.extend([key("Bksp"), text(" back  ")]);
        }
        spans.extend([key("Q/Esc"), text(" quit")]);
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_quit_confirm_overlay(f: &mut Frame) {
    let popup = centered_fixed_rect(40, 8, f.area());
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Quit Wizard? ")
        .title_style(Style::default().fg(Color::Red).bold())
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Are you sure you want to quit?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("      ", Style::default()),
            Span::styled("Y", Style::default().fg(Color::Cyan)),
            Span::styled(" yes  ", Style::default().fg(Color::DarkGray)),
            Span::styled("N", Style::default().fg(Color::Cyan)),
            Span::styled(" no", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    f.render_widget(Paragraph::new(content), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn app() -> WizardApp {
        WizardApp::new(WizardState::new(), SimulatedRunner::new(Duration::from_millis(10)))
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_every_step_without_panic() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        for step in Step::ALL {
            app.state.current_step = step;
            terminal.draw(|f| render_wizard(f, &app)).unwrap();
        }
        app.state.complete_run();
        terminal.draw(|f| render_wizard(f, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Pipeline Complete"));
    }

    #[test]
    fn test_results_view_lists_only_selected_items() {
        let mut app = app();
        app.state.select_dataset("Twitter Sentiment");
        app.state.toggle(SelectionKind::Metrics, "Recall");
        app.state.toggle(SelectionKind::Metrics, "ROC Curve");
        app.state.toggle(SelectionKind::Visualizations, "Confusion Matrix");
        app.state.current_step = Step::Processing;
        app.state.complete_run();

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render_wizard(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Results for Twitter Sentiment"));
        assert!(text.contains("Recall"));
        assert!(text.contains("0.87"));
        assert!(text.contains("ROC Curve"));
        assert!(text.contains("N/A"));
        assert!(text.contains("Confusion Matrix"));
        assert!(!text.contains("Precision"), "unselected metric should not render");
        assert!(!text.contains("Line Chart"), "unselected visualization should not render");
    }

    #[test]
    fn test_renders_in_tiny_terminal() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        terminal.draw(|f| render_wizard(f, &app)).unwrap();
    }

    #[test]
    fn test_step_title_in_box_header() {
        let mut app = app();
        app.state.current_step = Step::MetricsSelection;
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render_wizard(f, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Step 5/8"));
    }
}
