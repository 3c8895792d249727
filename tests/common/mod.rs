//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{Duration, Instant};

use pipebuilder::pipeline::{SimulatedRunner, Step, WizardState};
use tempfile::TempDir;

/// Write a small CSV dataset into `dir` and return its path
pub fn create_test_csv(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, "text,label\ngreat movie,1\nterrible plot,0\n").unwrap();
    path
}

/// Write a non-CSV file into `dir` and return its path
pub fn create_test_txt(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, "not a dataset").unwrap();
    path
}

/// A wizard already advanced to the Review step
pub fn state_at_review() -> WizardState {
    let mut state = WizardState::new();
    while state.current_step != Step::Review {
        state.go_next();
    }
    state
}

/// Drive a started runner to completion using synthetic time.
///
/// Returns every progress value observed, in order.
pub fn run_to_completion(
    runner: &mut SimulatedRunner,
    state: &mut WizardState,
    start: Instant,
    interval: Duration,
) -> Vec<u8> {
    let mut observed = Vec::new();
    let mut now = start;
    for _ in 0..1000 {
        now += interval;
        runner.tick(state, now);
        observed.push(state.progress_percent);
        if !runner.is_running() {
            break;
        }
    }
    observed
}
