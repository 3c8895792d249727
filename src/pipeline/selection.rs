//! Toggle-able option sets

use serde::Serialize;

/// Set of chosen option labels, kept in the order they were picked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet {
    items: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the item if absent, remove it if present. Returns the new membership.
    pub fn toggle(&mut self, item: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(item.to_string());
            true
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }

    /// Comma-joined labels, as shown on the review step
    pub fn joined(&self) -> String {
        self.items.join(", ")
    }
}

/// Which selection set a toggle targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Preprocessing,
    Metrics,
    Visualizations,
}

impl SelectionKind {
    /// Options the user can pick from for this set
    pub fn options(self) -> &'static [&'static str] {
        use super::catalog::{METRICS, PREPROCESSING_METHODS, VISUALIZATION_TYPES};
        match self {
            SelectionKind::Preprocessing => &PREPROCESSING_METHODS,
            SelectionKind::Metrics => &METRICS,
            SelectionKind::Visualizations => &VISUALIZATION_TYPES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SelectionKind::Preprocessing => "preprocessing",
            SelectionKind::Metrics => "metrics",
            SelectionKind::Visualizations => "visualizations",
        }
    }
}
