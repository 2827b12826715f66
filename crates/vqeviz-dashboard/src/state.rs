//! Configuration and shared state for the dashboard.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use vqeviz_results::DEFAULT_RESULTS_PATH;

/// Knobs that shape a rendered dashboard.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Delay between two steps of the progress indicator.
    pub progress_step_delay: Duration,
    /// Bin count passed to the interactive histogram.
    pub interactive_histogram_bins: usize,
    /// Bin count of the static (SVG and terminal) histogram.
    pub static_histogram_bins: usize,
    /// Static chart size in pixels.
    pub chart_size: (u32, u32),
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            progress_step_delay: Duration::from_millis(10),
            interactive_histogram_bins: 30,
            static_histogram_bins: 20,
            chart_size: (640, 480),
        }
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Results file read on every render.
    pub results_path: PathBuf,
    /// Rendering options.
    pub render: RenderOptions,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 8501).into(),
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            render: RenderOptions::default(),
        }
    }
}

/// Shared application state. Read-only once the server starts.
#[derive(Debug, Default)]
pub struct AppState {
    /// Dashboard configuration.
    pub config: DashboardConfig,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create application state with custom configuration.
    pub fn with_config(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// Point the dashboard at a different results file.
    pub fn with_results_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.results_path = path.into();
        self
    }
}
