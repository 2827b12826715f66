//! API endpoint handlers.

pub mod dashboard;
pub mod health;
pub mod results;

use std::sync::Arc;

use vqeviz_results::{LoadResult, LoadedResults, load_results};

use crate::error::ApiError;
use crate::state::AppState;

/// Read the configured results file off the async runtime.
///
/// Every request is a fresh invocation: the file is re-read and nothing is
/// cached between renders. The outer error covers a failed blocking task.
pub(crate) async fn load(state: &Arc<AppState>) -> Result<LoadResult<LoadedResults>, ApiError> {
    let path = state.config.results_path.clone();
    tokio::task::spawn_blocking(move || load_results(path))
        .await
        .map_err(|e| ApiError::Internal(format!("results loader task failed: {e}")))
}
