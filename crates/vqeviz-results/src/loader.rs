//! Reading the results file from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::document::ResultDocument;
use crate::error::{LoadError, LoadResult};

/// Path the dashboard reads when none is configured.
pub const DEFAULT_RESULTS_PATH: &str = "quantum_results.json";

/// A loaded results file: the document as stored and as resolved.
#[derive(Debug, Clone)]
pub struct LoadedResults {
    /// Where the document was read from.
    pub path: PathBuf,
    /// The JSON exactly as stored, before defaults.
    pub raw: Value,
    /// The document with defaults applied.
    pub document: ResultDocument,
}

impl LoadedResults {
    /// Build from an in-memory JSON value.
    pub fn from_value(raw: Value, path: impl Into<PathBuf>) -> LoadResult<Self> {
        let path = path.into();
        let document = ResultDocument::from_value(&raw, &path)?;
        Ok(Self {
            path,
            raw,
            document,
        })
    }

    /// Parse JSON text.
    pub fn from_json_str(source: &str, path: impl Into<PathBuf>) -> LoadResult<Self> {
        let path = path.into();
        let raw: Value = serde_json::from_str(source)
            .map_err(|e| LoadError::malformed(&path, e.to_string()))?;
        Self::from_value(raw, path)
    }
}

/// Read and resolve the results file at `path`.
///
/// No retries and no fallback paths: a missing or malformed file is reported
/// to the caller, which stops rendering.
pub fn load_results(path: impl AsRef<Path>) -> LoadResult<LoadedResults> {
    let path = path.as_ref();

    let source = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::MissingInputFile {
            path: path.to_path_buf(),
        },
        ErrorKind::InvalidData => LoadError::malformed(path, "file is not valid UTF-8"),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    });

    let loaded = source.and_then(|s| LoadedResults::from_json_str(&s, path));
    match &loaded {
        Ok(loaded) => {
            let doc = &loaded.document;
            tracing::info!(
                path = %path.display(),
                iterations = doc.iterations,
                points = doc.energy_convergence.len(),
                synthetic = doc.synthetic_convergence,
                "loaded VQE results"
            );
            if doc.length_mismatch() {
                tracing::debug!(
                    iterations = doc.iterations,
                    points = doc.energy_convergence.len(),
                    "energy_convergence length differs from iterations, left as stored"
                );
            }
        }
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to load VQE results"),
    }
    loaded
}
