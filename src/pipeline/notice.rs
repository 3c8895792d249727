//! User-visible notices raised by imports and runs

/// Kind of notice, drives styling only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message with a title and a description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn dataset_imported(name: &str) -> Self {
        Self::success("Dataset Imported", format!("Successfully imported {}", name))
    }

    pub fn invalid_file_type() -> Self {
        Self::error("Invalid File Type", "Please upload a CSV file")
    }

    pub fn pipeline_complete() -> Self {
        Self::success(
            "Pipeline Complete",
            "Your model has been successfully trained and evaluated.",
        )
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
