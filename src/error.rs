// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SafelistError {
    #[error("Template directory not found at {}", path.display())]
    TemplateDirNotFound { path: PathBuf },

    #[error("No .{extension} template files found in {}", path.display())]
    NoTemplates { path: PathBuf, extension: String },

    /// Read or UTF-8 decoding failure for a single template. The `Display`
    /// form is the bare underlying message; the path travels separately.
    #[error("{source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

impl SafelistError {
    /// True for the two conditions that end a run before any output.
    #[must_use]
    pub fn is_missing_templates(&self) -> bool {
        matches!(self, Self::TemplateDirNotFound { .. } | Self::NoTemplates { .. })
    }
}

pub type Result<T> = std::result::Result<T, SafelistError>;

// Allow `?` on std::io::Error by converting to SafelistError::Io with unknown path.
impl From<std::io::Error> for SafelistError {
    fn from(source: std::io::Error) -> Self {
        SafelistError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
