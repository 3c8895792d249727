//! Static results view shown when a simulated run completes

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::catalog::{mock_metric_value, MODEL, TRAINING_METHOD};
use super::selection::SelectionSet;

/// Placeholder text for metrics without a mock value
pub const NOT_AVAILABLE: &str = "N/A";

/// One metric row in the results view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricResult {
    pub name: String,
    /// Mock value, `None` renders as "N/A"
    pub value: Option<String>,
}

impl MetricResult {
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// Results of a simulated run, keyed only by the user's selections
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResults {
    pub dataset: String,
    pub model: String,
    pub training_method: String,
    pub metrics: Vec<MetricResult>,
    pub visualizations: Vec<String>,
    pub completed_at: DateTime<Utc>,
}

impl PipelineResults {
    pub fn from_selection(
        dataset: &str,
        metrics: &SelectionSet,
        visualizations: &SelectionSet,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let metrics = metrics
            .iter()
            .map(|name| MetricResult {
                name: name.to_string(),
                value: mock_metric_value(name).map(str::to_string),
            })
            .collect();

        Self {
            dataset: dataset.to_string(),
            model: MODEL.to_string(),
            training_method: TRAINING_METHOD.to_string(),
            metrics,
            visualizations: visualizations.to_vec(),
            completed_at,
        }
    }

    pub fn metric_names(&self) -> Vec<&str> {
        self.metrics.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
