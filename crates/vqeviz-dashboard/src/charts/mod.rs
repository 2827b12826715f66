//! Backend-neutral chart descriptions and the two chart backends.
//!
//! The renderer describes every chart as a [`ChartSpec`]. A [`ChartBackend`]
//! turns a spec into an HTML fragment: [`PlotlyBackend`] for interactive
//! plots, [`SvgBackend`] for static inline SVG. Both receive the same data and
//! the same labels.

mod plotly;
mod svg;

use serde::Serialize;

pub use plotly::PlotlyBackend;
pub use svg::SvgBackend;

use crate::state::RenderOptions;

/// Colours used by the dashboard's series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesColor {
    Blue,
    Green,
}

impl SeriesColor {
    /// CSS colour string.
    pub fn css(&self) -> &'static str {
        match self {
            Self::Blue => "#1f77b4",
            Self::Green => "#2ca02c",
        }
    }

    /// RGB components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (0x1f, 0x77, 0xb4),
            Self::Green => (0x2c, 0xa0, 0x2c),
        }
    }
}

/// What a chart plots.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartKind {
    /// `y` against its index.
    Line {
        series_label: String,
        color: SeriesColor,
        y: Vec<f64>,
    },
    /// Distribution of raw samples. Backends bin them.
    Histogram {
        color: SeriesColor,
        opacity: f64,
        samples: Vec<f64>,
    },
}

/// A chart as the renderer describes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Stable identifier, used as a DOM id.
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    #[serde(flatten)]
    pub kind: ChartKind,
}

impl ChartSpec {
    /// Line chart of `y` over iteration index.
    pub fn line(
        id: &str,
        title: &str,
        series_label: &str,
        color: SeriesColor,
        y: Vec<f64>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            x_label: "Iterations".to_string(),
            y_label: "Energy (Hartree)".to_string(),
            kind: ChartKind::Line {
                series_label: series_label.to_string(),
                color,
                y,
            },
        }
    }

    /// Histogram of energy samples.
    pub fn histogram(id: &str, title: &str, color: SeriesColor, samples: Vec<f64>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            x_label: "Energy (Hartree)".to_string(),
            y_label: "Frequency".to_string(),
            kind: ChartKind::Histogram {
                color,
                opacity: 0.7,
                samples,
            },
        }
    }

    /// The plotted values: `y` for lines, the samples for histograms.
    pub fn values(&self) -> &[f64] {
        match &self.kind {
            ChartKind::Line { y, .. } => y,
            ChartKind::Histogram { samples, .. } => samples,
        }
    }
}

/// Chart rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("figure serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(e.to_string())
    }
}

/// Turns a chart spec into an HTML fragment.
pub trait ChartBackend: Send + Sync {
    /// Backend name, as reported by the API.
    fn name(&self) -> &'static str;

    /// Render one chart.
    fn render(&self, chart: &ChartSpec) -> Result<String, ChartError>;

    /// Markup the page needs once, before any chart (scripts, styles).
    fn page_header(&self) -> &'static str {
        ""
    }
}

/// Pick the backend for the interactive toggle.
pub fn backend_for(interactive: bool, options: &RenderOptions) -> Box<dyn ChartBackend> {
    if interactive {
        Box::new(PlotlyBackend::new(options.interactive_histogram_bins))
    } else {
        Box::new(SvgBackend::new(options.static_histogram_bins, options.chart_size))
    }
}

/// Backend name for the interactive toggle, without building the backend.
pub fn backend_name(interactive: bool) -> &'static str {
    if interactive {
        PlotlyBackend::NAME
    } else {
        SvgBackend::NAME
    }
}
