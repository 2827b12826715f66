//! vqeviz dashboard - web and terminal views of a precomputed VQE run.
//!
//! The dashboard reads a results file (see [`vqeviz_results`]) and shows:
//!
//! - the stored JSON and a textual energy summary
//! - the energy convergence chart
//! - an optional energy distribution histogram
//! - an optional running-average chart
//! - a simulated progress indicator over the declared iterations
//!
//! Charts are drawn by one of two backends, interactive Plotly or static SVG,
//! chosen by a toggle. Rendering is a pure function of the loaded document
//! and the toggle states; see [`render::render_dashboard`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vqeviz_dashboard::{AppState, DashboardConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = DashboardConfig::default();
//!     let state = Arc::new(AppState::with_config(config.clone()));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod charts;
pub mod dto;
pub mod error;
pub mod html;
pub mod render;
pub mod server;
pub mod state;
pub mod terminal;

pub use charts::{ChartBackend, ChartKind, ChartSpec, PlotlyBackend, SvgBackend};
pub use dto::{HealthResponse, ToggleQuery, Toggles};
pub use error::ApiError;
pub use render::{Block, Dashboard, render_dashboard, render_failure};
pub use server::{create_router, serve};
pub use state::{AppState, DashboardConfig, RenderOptions};
pub use terminal::{TerminalOptions, write_dashboard};
