//! Tests for the wizard controller state machine
//!
//! These cover navigation, dataset selection and import, selection toggles,
//! and the run trigger. TUI key handling is covered at the end through
//! `WizardApp`, without a real terminal.

mod common;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pipebuilder::cli::wizard::{WizardApp, WizardOutcome, NOTICE_TTL};
use pipebuilder::pipeline::{
    DatasetFile, NoticeKind, SelectionKind, SimulatedRunner, Step, WizardError, WizardState,
    METRICS, PREPROCESSING_METHODS, VISUALIZATION_TYPES,
};
use tempfile::TempDir;

use common::{create_test_csv, create_test_txt, state_at_review};

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_go_next_clamps_for_every_step() {
    for n in 0..Step::ALL.len() {
        let mut state = WizardState::new();
        state.current_step = Step::from_index(n).unwrap();
        state.go_next();
        assert_eq!(
            state.current_step.index(),
            (n + 1).min(7),
            "go_next from step {} should land on {}",
            n,
            (n + 1).min(7)
        );
    }
}

#[test]
fn test_go_back_clamps_for_every_step() {
    for n in 0..Step::ALL.len() {
        let mut state = WizardState::new();
        state.current_step = Step::from_index(n).unwrap();
        state.go_back();
        assert_eq!(
            state.current_step.index(),
            n.saturating_sub(1),
            "go_back from step {} should land on {}",
            n,
            n.saturating_sub(1)
        );
    }
}

#[test]
fn test_step_titles_are_correct() {
    let titles: Vec<&str> = Step::ALL.iter().map(|s| s.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Dataset Selection",
            "Preprocessing Methods",
            "Language Model",
            "Training Method",
            "Metrics Selection",
            "Visualization Types",
            "Review & Start",
            "Processing",
        ]
    );
}

#[test]
fn test_empty_wizard_reaches_review() {
    let state = state_at_review();
    assert_eq!(state.current_step, Step::Review);
    assert!(state.dataset_label.is_empty());
    assert!(state.can_start_run());
}

// ============================================================================
// Dataset selection and import
// ============================================================================

#[test]
fn test_select_dataset_accepts_any_label() {
    let mut state = WizardState::new();
    state.select_dataset("IMDB Reviews");
    assert_eq!(state.dataset_label, "IMDB Reviews");
    state.select_dataset("");
    assert_eq!(state.dataset_label, "");
}

#[test]
fn test_import_csv_sets_label_and_succeeds() {
    let mut state = WizardState::new();
    let notice = state.import_dataset(DatasetFile::from_path("data.csv"));

    assert_eq!(state.dataset_label, "data.csv");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.title, "Dataset Imported");
    assert_eq!(notice.description, "Successfully imported data.csv");
    assert_eq!(
        state.imported_file.as_ref().map(|f| f.path.clone()),
        Some(PathBuf::from("data.csv"))
    );
}

#[test]
fn test_import_non_csv_leaves_state_unchanged() {
    let mut state = WizardState::new();
    state.select_dataset("Twitter Sentiment");

    let notice = state.import_dataset(DatasetFile::from_path("data.txt"));

    assert_eq!(state.dataset_label, "Twitter Sentiment");
    assert!(state.imported_file.is_none());
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.title, "Invalid File Type");
    assert_eq!(notice.description, "Please upload a CSV file");
}

#[test]
fn test_import_accepts_declared_csv_type() {
    let mut state = WizardState::new();
    let file = DatasetFile::from_path("export.dat").with_media_type("text/csv");
    let notice = state.import_dataset(file);
    assert!(!notice.is_error());
    assert_eq!(state.dataset_label, "export.dat");
}

#[test]
fn test_import_uppercase_csv_extension() {
    let mut state = WizardState::new();
    let notice = state.import_dataset(DatasetFile::from_path("/data/DATA.CSV"));

    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.description, "Successfully imported DATA.CSV");
    assert_eq!(state.dataset_label, "DATA.CSV");
}

#[test]
fn test_import_real_files() {
    let dir = TempDir::new().unwrap();
    let csv = create_test_csv(&dir, "reviews.csv");
    let txt = create_test_txt(&dir, "reviews.txt");

    let mut state = WizardState::new();
    assert!(state.import_dataset(DatasetFile::from_path(&txt)).is_error());
    assert!(state.dataset_label.is_empty());

    assert!(!state.import_dataset(DatasetFile::from_path(&csv)).is_error());
    assert_eq!(state.dataset_label, "reviews.csv");
}

#[test]
fn test_select_after_import_overrides_label() {
    let mut state = WizardState::new();
    state.import_dataset(DatasetFile::from_path("data.csv"));
    state.select_dataset("Amazon Product Reviews");
    assert_eq!(state.dataset_label, "Amazon Product Reviews");
}

// ============================================================================
// Selection toggles
// ============================================================================

#[test]
fn test_toggle_twice_restores_membership() {
    let cases = [
        (SelectionKind::Preprocessing, &PREPROCESSING_METHODS[..]),
        (SelectionKind::Metrics, &METRICS[..]),
        (SelectionKind::Visualizations, &VISUALIZATION_TYPES[..]),
    ];

    for (kind, options) in cases {
        let mut state = WizardState::new();
        // Pre-select one option so both membership states are exercised
        state.toggle(kind, options[0]);

        for option in options {
            let before = state.selection(kind).contains(option);
            state.toggle(kind, option);
            state.toggle(kind, option);
            assert_eq!(
                state.selection(kind).contains(option),
                before,
                "double toggle of {} should restore membership",
                option
            );
        }
    }
}

#[test]
fn test_toggles_are_independent_per_set() {
    let mut state = WizardState::new();
    state.toggle(SelectionKind::Metrics, "Accuracy");
    assert!(state.metrics.contains("Accuracy"));
    assert!(state.preprocessing.is_empty());
    assert!(state.visualizations.is_empty());
}

// ============================================================================
// Run trigger
// ============================================================================

#[test]
fn test_start_run_only_from_review() {
    for step in Step::ALL {
        let mut state = WizardState::new();
        state.current_step = step;
        let result = state.start_run();
        if step == Step::Review {
            assert!(result.is_ok());
            assert_eq!(state.current_step, Step::Processing);
            assert_eq!(state.progress_percent, 0);
        } else {
            assert_eq!(result, Err(WizardError::RunNotAllowed { current: step }));
            assert_eq!(state.current_step, step);
        }
    }
}

// ============================================================================
// TUI key handling
// ============================================================================

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn new_app() -> WizardApp {
    WizardApp::new(WizardState::new(), SimulatedRunner::new(Duration::from_millis(10)))
}

#[test]
fn test_app_enter_and_backspace_navigate() {
    let mut app = new_app();
    let now = Instant::now();

    app.handle_key(key(KeyCode::Enter), now).unwrap();
    assert_eq!(app.state.current_step, Step::PreprocessingMethods);

    app.handle_key(key(KeyCode::Backspace), now).unwrap();
    assert_eq!(app.state.current_step, Step::DatasetSelection);
}

#[test]
fn test_app_space_selects_dataset_and_toggles() {
    let mut app = new_app();
    let now = Instant::now();

    app.handle_key(key(KeyCode::Down), now).unwrap();
    app.handle_key(key(KeyCode::Char(' ')), now).unwrap();
    assert_eq!(app.state.dataset_label, "Amazon Product Reviews");

    app.handle_key(key(KeyCode::Enter), now).unwrap();
    assert_eq!(app.cursor, 0, "cursor resets on step change");
    app.handle_key(key(KeyCode::Char(' ')), now).unwrap();
    assert!(app.state.preprocessing.contains("Text Cleaning"));
    app.handle_key(key(KeyCode::Char(' ')), now).unwrap();
    assert!(app.state.preprocessing.is_empty());
}

#[test]
fn test_app_cursor_stays_in_bounds() {
    let mut app = new_app();
    let now = Instant::now();
    for _ in 0..10 {
        app.handle_key(key(KeyCode::Down), now).unwrap();
    }
    assert_eq!(app.cursor, 2);
    for _ in 0..10 {
        app.handle_key(key(KeyCode::Up), now).unwrap();
    }
    assert_eq!(app.cursor, 0);
}

#[test]
fn test_app_quit_confirmation() {
    let mut app = new_app();
    let now = Instant::now();

    assert!(app.handle_key(key(KeyCode::Char('q')), now).unwrap().is_none());
    assert!(app.show_quit_confirm);

    assert!(app.handle_key(key(KeyCode::Char('n')), now).unwrap().is_none());
    assert!(!app.show_quit_confirm);

    app.handle_key(key(KeyCode::Esc), now).unwrap();
    let outcome = app.handle_key(key(KeyCode::Char('y')), now).unwrap();
    assert!(matches!(outcome, Some(WizardOutcome::Quit)));
}

#[test]
fn test_app_run_blocks_navigation_and_completes() {
    let mut app = new_app();
    app.state = state_at_review();
    app.state.toggle(SelectionKind::Metrics, "Recall");
    let t0 = Instant::now();

    app.handle_key(key(KeyCode::Enter), t0).unwrap();
    assert_eq!(app.state.current_step, Step::Processing);
    assert!(app.runner.is_running());

    // Navigation and quitting are ignored mid-run
    app.handle_key(key(KeyCode::Backspace), t0).unwrap();
    app.handle_key(key(KeyCode::Char('q')), t0).unwrap();
    assert_eq!(app.state.current_step, Step::Processing);
    assert!(!app.show_quit_confirm);

    let mut now = t0;
    while app.runner.is_running() {
        now += Duration::from_millis(10);
        app.on_tick(now);
    }
    assert_eq!(app.state.progress_percent, 100);
    let notice = app.notice.as_ref().map(|n| n.notice.title.clone());
    assert_eq!(notice.as_deref(), Some("Pipeline Complete"));

    let outcome = app.handle_key(key(KeyCode::Enter), now).unwrap();
    match outcome {
        Some(WizardOutcome::Completed(results)) => {
            assert_eq!(results.metric_names(), vec!["Recall"]);
        }
        other => panic!("expected completed outcome, got {:?}", other),
    }
}

#[test]
fn test_app_ctrl_c_quits_mid_run() {
    let mut app = new_app();
    app.state = state_at_review();
    let now = Instant::now();
    app.handle_key(key(KeyCode::Enter), now).unwrap();

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    let outcome = app.handle_key(ctrl_c, now).unwrap();
    assert!(matches!(outcome, Some(WizardOutcome::Quit)));
}

#[test]
fn test_app_import_notice_expires() {
    let mut app = new_app();
    let t0 = Instant::now();
    app.import(DatasetFile::from_path("notes.txt"), t0);

    assert!(app.notice.as_ref().map(|n| n.notice.is_error()).unwrap_or(false));
    app.expire_notice(t0 + NOTICE_TTL - Duration::from_millis(1));
    assert!(app.notice.is_some());
    app.expire_notice(t0 + NOTICE_TTL);
    assert!(app.notice.is_none());
}

#[test]
fn test_app_review_enter_starts_run_only_there() {
    let mut app = new_app();
    let now = Instant::now();
    // Enter from step 0 through Visualization Types lands on Review, not Processing
    for _ in 0..6 {
        app.handle_key(key(KeyCode::Enter), now).unwrap();
    }
    assert_eq!(app.state.current_step, Step::Review);
    assert!(!app.runner.is_running());

    app.handle_key(key(KeyCode::Enter), now).unwrap();
    assert_eq!(app.state.current_step, Step::Processing);
    assert_eq!(app.state.progress_percent, 0);
}
