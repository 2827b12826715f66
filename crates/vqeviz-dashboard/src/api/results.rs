//! Raw results endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde_json::Value;

use super::load;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/results - the results file exactly as stored.
pub async fn raw_results(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let loaded = load(&state).await??;
    Ok(Json(loaded.raw))
}
