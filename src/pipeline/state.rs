//! Wizard controller: step position and accumulated selections
//!
//! `WizardState` is the single owner of everything the user picks. Both the
//! TUI and the headless flow drive it through the same operations, and the
//! simulated runner only touches `progress_percent`.

use chrono::{DateTime, Utc};
use log::{debug, info};

use super::catalog::Step;
use super::dataset::DatasetFile;
use super::error::{Result, WizardError};
use super::notice::Notice;
use super::results::PipelineResults;
use super::selection::{SelectionKind, SelectionSet};

/// Progress value at which a run is finished
pub const PROGRESS_COMPLETE: u8 = 100;

#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub current_step: Step,
    pub dataset_label: String,
    pub imported_file: Option<DatasetFile>,
    pub preprocessing: SelectionSet,
    pub metrics: SelectionSet,
    pub visualizations: SelectionSet,
    /// Only meaningful while on `Step::Processing`
    pub progress_percent: u8,
    /// Set once when the run reaches 100%
    pub completed_at: Option<DateTime<Utc>>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one step unless already on the last one
    pub fn go_next(&mut self) {
        let next = self.current_step.next();
        if next != self.current_step {
            debug!("step {} -> {}", self.current_step.index(), next.index());
            self.current_step = next;
        }
    }

    /// Retreat one step unless already on the first one
    pub fn go_back(&mut self) {
        let prev = self.current_step.prev();
        if prev != self.current_step {
            debug!("step {} -> {}", self.current_step.index(), prev.index());
            self.current_step = prev;
        }
    }

    /// Use a catalog (or any) dataset label. Accepted unconditionally.
    pub fn select_dataset(&mut self, label: impl Into<String>) {
        self.dataset_label = label.into();
        info!("dataset selected: {}", self.dataset_label);
    }

    /// Import a user file as the dataset.
    ///
    /// Non-CSV files are rejected with an error notice and the state is left
    /// untouched.
    pub fn import_dataset(&mut self, file: DatasetFile) -> Notice {
        if !file.is_csv() {
            info!("import rejected: {}", file.name);
            return Notice::invalid_file_type();
        }

        info!("dataset imported: {}", file.path.display());
        let notice = Notice::dataset_imported(&file.name);
        self.dataset_label = file.name.clone();
        self.imported_file = Some(file);
        notice
    }

    /// Flip membership of `item` in the chosen set. Returns the new membership.
    pub fn toggle(&mut self, kind: SelectionKind, item: &str) -> bool {
        let selected = self.selection_mut(kind).toggle(item);
        debug!(
            "{} {}: {}",
            if selected { "selected" } else { "deselected" },
            kind.label(),
            item
        );
        selected
    }

    pub fn selection(&self, kind: SelectionKind) -> &SelectionSet {
        match kind {
            SelectionKind::Preprocessing => &self.preprocessing,
            SelectionKind::Metrics => &self.metrics,
            SelectionKind::Visualizations => &self.visualizations,
        }
    }

    fn selection_mut(&mut self, kind: SelectionKind) -> &mut SelectionSet {
        match kind {
            SelectionKind::Preprocessing => &mut self.preprocessing,
            SelectionKind::Metrics => &mut self.metrics,
            SelectionKind::Visualizations => &mut self.visualizations,
        }
    }

    /// Whether a run may be started from the current step
    pub fn can_start_run(&self) -> bool {
        self.current_step == Step::Review
    }

    /// Jump from Review to the terminal Processing step with progress at zero.
    ///
    /// Callers normally go through `SimulatedRunner::start`, which also arms
    /// the progress timer.
    pub fn start_run(&mut self) -> Result<()> {
        if !self.can_start_run() {
            return Err(WizardError::RunNotAllowed {
                current: self.current_step,
            });
        }
        self.current_step = Step::Processing;
        self.progress_percent = 0;
        self.completed_at = None;
        info!("pipeline run started on dataset '{}'", self.dataset_label);
        Ok(())
    }

    pub fn is_processing(&self) -> bool {
        self.current_step == Step::Processing
    }

    pub fn is_complete(&self) -> bool {
        self.is_processing() && self.progress_percent >= PROGRESS_COMPLETE
    }

    /// Set progress to 100% and stamp the completion time.
    ///
    /// Only the first call records a time; later calls keep it.
    pub fn complete_run(&mut self) {
        self.progress_percent = PROGRESS_COMPLETE;
        if self.completed_at.is_none() {
            self.completed_at = Some(Utc::now());
        }
    }

    /// Results view, available once the run has been completed
    pub fn results(&self) -> Option<PipelineResults> {
        if !self.is_complete() {
            return None;
        }
        let completed_at = self.completed_at?;
        Some(PipelineResults::from_selection(
            &self.dataset_label,
            &self.metrics,
            &self.visualizations,
            completed_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = WizardState::new();
        assert_eq!(state.current_step, Step::DatasetSelection);
        assert!(state.dataset_label.is_empty());
        assert!(state.imported_file.is_none());
        assert!(state.preprocessing.is_empty());
        assert_eq!(state.progress_percent, 0);
    }

    #[test]
    fn test_start_run_rejected_off_review() {
        let mut state = WizardState::new();
        let err = state.start_run().unwrap_err();
        assert_eq!(
            err,
            WizardError::RunNotAllowed {
                current: Step::DatasetSelection
            }
        );
        assert_eq!(state.current_step, Step::DatasetSelection);
    }

    #[test]
    fn test_results_hidden_until_complete() {
        let mut state = WizardState::new();
        state.current_step = Step::Review;
        state.start_run().unwrap();
        assert!(state.results().is_none());
        state.progress_percent = 99;
        assert!(state.results().is_none());
        state.complete_run();
        assert!(state.results().is_some());
    }

    #[test]
    fn test_results_keep_completion_time() {
        let mut state = WizardState::new();
        state.current_step = Step::Review;
        state.start_run().unwrap();
        state.complete_run();

        let first = state.results().unwrap().completed_at;
        std::thread::sleep(std::time::Duration::from_millis(20));
        state.complete_run();
        let later = state.results().unwrap().completed_at;
        assert_eq!(first, later);
        assert_eq!(state.completed_at, Some(first));
    }

    #[test]
    fn test_restart_clears_completion_time() {
        let mut state = WizardState::new();
        state.current_step = Step::Review;
        state.start_run().unwrap();
        state.complete_run();

        state.current_step = Step::Review;
        state.start_run().unwrap();
        assert!(state.completed_at.is_none());
        assert!(state.results().is_none());
    }
}
