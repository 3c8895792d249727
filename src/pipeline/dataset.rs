//! Dataset file references and the CSV acceptance check
//!
//! An imported dataset is never opened: the wizard only keeps a reference
//! to it and uses its file name as the dataset label.

use std::path::{Path, PathBuf};

/// Media type that marks a file as CSV regardless of its name
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// Opaque reference to a user-supplied dataset file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFile {
    /// File name shown to the user and used as the dataset label
    pub name: String,
    pub path: PathBuf,
    /// Declared media type, when the source provides one
    pub media_type: Option<String>,
}

impl DatasetFile {
    /// Build a reference from a filesystem path.
    ///
    /// The media type is declared from the extension, the same way a file
    /// picker reports it, so `DATA.CSV` is declared as CSV.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path: path.to_path_buf(),
            media_type: media_type_for(path).map(str::to_string),
        }
    }

    /// Attach a declared media type
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// True if the declared type or the file name marks this as CSV
    pub fn is_csv(&self) -> bool {
        self.media_type.as_deref() == Some(CSV_MEDIA_TYPE) || has_csv_name(&self.name)
    }
}

/// Exact-suffix name check used when no media type is declared
pub fn has_csv_name(name: &str) -> bool {
    name.ends_with(".csv")
}

/// Media type implied by a path's extension, compared case-insensitively
pub fn media_type_for(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.eq_ignore_ascii_case("csv"))
        .map(|_| CSV_MEDIA_TYPE)
}

/// True if a path would be accepted as a CSV import
pub fn is_csv_path(path: &Path) -> bool {
    media_type_for(path).is_some()
}
