//! Loader error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for loading and resolving result documents.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that stop the dashboard from rendering.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The results file does not exist.
    #[error("{} file not found!", path.display())]
    MissingInputFile { path: PathBuf },

    /// The results file is not valid JSON, or a field has the wrong type.
    #[error("Invalid JSON format in {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    /// Any other read failure.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Short machine-readable kind, used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::MissingInputFile { .. } => "missing_input_file",
            LoadError::MalformedInput { .. } => "malformed_input",
            LoadError::Io { .. } => "io_error",
        }
    }

    /// Path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::MissingInputFile { path }
            | LoadError::MalformedInput { path, .. }
            | LoadError::Io { path, .. } => path,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        LoadError::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
