//! Fixed catalog of wizard steps and selectable options

use std::fmt;

/// Datasets offered on the selection step
pub const DATASETS: [&str; 3] = ["IMDB Reviews", "Amazon Product Reviews", "Twitter Sentiment"];

/// Preprocessing methods offered as checkboxes
pub const PREPROCESSING_METHODS: [&str; 5] = [
    "Text Cleaning",
    "Tokenization",
    "Stop Words Removal",
    "Lemmatization",
    "Stemming",
];

/// Evaluation metrics offered as checkboxes
pub const METRICS: [&str; 5] = ["Accuracy", "Precision", "Recall", "F1-Score", "ROC Curve"];

/// Visualization types offered as checkboxes
pub const VISUALIZATION_TYPES: [&str; 4] =
    ["Line Chart", "Bar Chart", "Confusion Matrix", "ROC Curve Plot"];

/// The only language model on offer
pub const MODEL: &str = "Phi-3.5";

/// The only training method on offer
pub const TRAINING_METHOD: &str = "Fine-tuning";

/// Placeholder metric values keyed by lowercased metric name
const MOCK_METRIC_VALUES: [(&str, &str); 5] = [
    ("accuracy", "0.89"),
    ("precision", "0.85"),
    ("recall", "0.87"),
    ("f1-score", "0.86"),
    ("roc-curve", "0.92"),
];

/// Look up the placeholder value shown for a metric.
///
/// The lookup is by lowercased name only, so labels containing spaces
/// (e.g. "ROC Curve") have no value and render as "N/A".
pub fn mock_metric_value(metric: &str) -> Option<&'static str> {
    let key = metric.to_lowercase();
    MOCK_METRIC_VALUES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

/// One stage of the fixed wizard sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    #[default]
    DatasetSelection,
    PreprocessingMethods,
    LanguageModel,
    TrainingMethod,
    MetricsSelection,
    VisualizationTypes,
    Review,
    Processing,
}

impl Step {
    /// All steps in wizard order
    pub const ALL: [Step; 8] = [
        Step::DatasetSelection,
        Step::PreprocessingMethods,
        Step::LanguageModel,
        Step::TrainingMethod,
        Step::MetricsSelection,
        Step::VisualizationTypes,
        Step::Review,
        Step::Processing,
    ];

    pub const FIRST: Step = Step::DatasetSelection;
    pub const LAST: Step = Step::Processing;

    /// Position of this step in the sequence (0-based)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Step at the given position, if any
    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    /// Display title for this step
    pub fn title(self) -> &'static str {
        match self {
            Step::DatasetSelection => "Dataset Selection",
            Step::PreprocessingMethods => "Preprocessing Methods",
            Step::LanguageModel => "Language Model",
            Step::TrainingMethod => "Training Method",
            Step::MetricsSelection => "Metrics Selection",
            Step::VisualizationTypes => "Visualization Types",
            Step::Review => "Review & Start",
            Step::Processing => "Processing",
        }
    }

    pub fn next(self) -> Step {
        Self::from_index(self.index() + 1).unwrap_or(Self::LAST)
    }

    pub fn prev(self) -> Step {
        Self::from_index(self.index().saturating_sub(1)).unwrap_or(Self::FIRST)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
