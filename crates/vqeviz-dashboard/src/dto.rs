//! Data Transfer Objects for the dashboard API.
//!
//! Query parameters coming in, health responses going out.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ============================================================================
// Visualization toggles
// ============================================================================

/// The three sidebar controls. All default to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggles {
    /// Show the energy distribution histogram.
    pub show_histogram: bool,
    /// Show the running-average chart.
    pub show_running_average: bool,
    /// Render charts with the interactive (Plotly) backend instead of SVG.
    pub interactive: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            show_histogram: true,
            show_running_average: true,
            interactive: true,
        }
    }
}

/// Raw toggle query string, e.g. `?show_histogram=false&interactive=on`.
///
/// The sidebar form also sends `controls=1`. HTML forms omit unchecked
/// checkboxes, so once `controls` is present an absent flag means off.
#[derive(Debug, Default, Deserialize)]
pub struct ToggleQuery {
    pub controls: Option<String>,
    pub show_histogram: Option<String>,
    pub show_running_average: Option<String>,
    pub interactive: Option<String>,
}

impl ToggleQuery {
    /// Resolve the query into toggle states.
    pub fn into_toggles(self) -> Result<Toggles, ApiError> {
        let absent = self.controls.is_none();
        Ok(Toggles {
            show_histogram: parse_flag("show_histogram", self.show_histogram, absent)?,
            show_running_average: parse_flag(
                "show_running_average",
                self.show_running_average,
                absent,
            )?,
            interactive: parse_flag("interactive", self.interactive, absent)?,
        })
    }
}

fn parse_flag(name: &str, value: Option<String>, absent: bool) -> Result<bool, ApiError> {
    let Some(value) = value else {
        return Ok(absent);
    };
    match value.to_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        other => Err(ApiError::BadRequest(format!(
            "Invalid value '{other}' for '{name}' (expected true/false)"
        ))),
    }
}

// ============================================================================
// Health check response
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Dashboard version.
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
