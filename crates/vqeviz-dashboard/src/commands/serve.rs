//! Serve command implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use vqeviz_dashboard::{AppState, DashboardConfig};

/// Start the web dashboard.
pub async fn execute(results: PathBuf, bind: SocketAddr) -> Result<()> {
    let config = DashboardConfig {
        bind_address: bind,
        results_path: results,
        ..DashboardConfig::default()
    };

    if !config.results_path.exists() {
        tracing::warn!(
            path = %config.results_path.display(),
            "results file does not exist yet; the dashboard will show an error until it does"
        );
    }

    let state = Arc::new(AppState::with_config(config));
    vqeviz_dashboard::serve(state)
        .await
        .with_context(|| format!("Failed to serve dashboard on {bind}"))
}
