//! Run configuration shared by the TUI and headless front ends

use std::path::PathBuf;
use std::time::Duration;

use crate::pipeline::{
    DatasetFile, Notice, SelectionKind, SimulatedRunner, WizardState, DEFAULT_TICK_INTERVAL,
};

use super::args::Cli;

/// Presets and timing collected from the command line
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub dataset: Option<String>,
    pub import: Option<PathBuf>,
    pub preprocessing: Vec<String>,
    pub metrics: Vec<String>,
    pub visualizations: Vec<String>,
    pub tick_interval: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            import: None,
            preprocessing: Vec::new(),
            metrics: Vec::new(),
            visualizations: Vec::new(),
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            dataset: cli.dataset.clone(),
            import: cli.import.clone(),
            preprocessing: cli.preprocessing.clone(),
            metrics: cli.metrics.clone(),
            visualizations: cli.visualizations.clone(),
            tick_interval: cli.tick_interval(),
        }
    }
}

impl RunConfig {
    /// Build the initial wizard state from the presets.
    ///
    /// The dataset label is applied first, then the import, so an accepted
    /// import wins. Any import notice is returned for the caller to surface.
    pub fn seed_state(&self) -> (WizardState, Option<Notice>) {
        let mut state = WizardState::new();

        if let Some(label) = &self.dataset {
            state.select_dataset(label.clone());
        }

        let notice = self
            .import
            .as_ref()
            .map(|path| state.import_dataset(DatasetFile::from_path(path)));

        let presets = [
            (SelectionKind::Preprocessing, &self.preprocessing),
            (SelectionKind::Metrics, &self.metrics),
            (SelectionKind::Visualizations, &self.visualizations),
        ];
        for (kind, items) in presets {
            for item in items.iter().map(|i| i.trim()).filter(|i| !i.is_empty()) {
                state.toggle(kind, item);
            }
        }

        (state, notice)
    }

    pub fn runner(&self) -> SimulatedRunner {
        SimulatedRunner::new(self.tick_interval)
    }
}
