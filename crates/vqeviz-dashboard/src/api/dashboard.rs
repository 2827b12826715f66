//! Dashboard endpoints: the HTML page and its JSON render model.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};

use super::load;
use crate::dto::ToggleQuery;
use crate::error::ApiError;
use crate::html::render_page;
use crate::render::{Dashboard, render_dashboard, render_failure};
use crate::state::AppState;

/// GET /api/dashboard - the render model for the given toggles.
pub async fn dashboard_model(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ToggleQuery>,
) -> Result<Json<Dashboard>, ApiError> {
    let toggles = query.into_toggles()?;
    let loaded = load(&state).await??;
    Ok(Json(render_dashboard(
        &loaded,
        &toggles,
        &state.config.render,
    )))
}

/// GET / - the dashboard page.
///
/// A failed load still answers with a page, holding only the blocking error,
/// under the status code of the matching API error.
pub async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ToggleQuery>,
) -> Result<Response, ApiError> {
    let toggles = query.into_toggles()?;
    let options = &state.config.render;

    let (status, dashboard) = match load(&state).await? {
        Ok(loaded) => (
            axum::http::StatusCode::OK,
            render_dashboard(&loaded, &toggles, options),
        ),
        Err(e) => {
            let dashboard = render_failure(&e, &toggles);
            (ApiError::from(e).status().0, dashboard)
        }
    };

    let html = render_page(&dashboard, options)?;
    Ok((status, Html(html)).into_response())
}
