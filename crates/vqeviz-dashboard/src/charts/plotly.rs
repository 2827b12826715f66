//! Interactive charts: Plotly figures built with `serde_json`.

use std::fmt::Write;

use serde_json::{Value, json};

use super::{ChartBackend, ChartError, ChartKind, ChartSpec};

const PLOTLY_CDN: &str =
    r#"<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>"#;

/// Emits a `<div>` and a `Plotly.newPlot` call per chart.
#[derive(Debug, Clone)]
pub struct PlotlyBackend {
    histogram_bins: usize,
}

impl PlotlyBackend {
    pub const NAME: &'static str = "plotly";

    pub fn new(histogram_bins: usize) -> Self {
        Self { histogram_bins }
    }

    /// The Plotly figure (`{ data, layout }`) for a chart.
    pub fn figure(&self, chart: &ChartSpec) -> Value {
        let trace = match &chart.kind {
            ChartKind::Line {
                series_label,
                color,
                y,
            } => json!({
                "type": "scatter",
                "mode": "lines",
                "name": series_label,
                "x": (0..y.len()).collect::<Vec<_>>(),
                "y": y,
                "line": { "color": color.css() },
            }),
            ChartKind::Histogram {
                color,
                opacity,
                samples,
            } => json!({
                "type": "histogram",
                "x": samples,
                "nbinsx": self.histogram_bins,
                "opacity": opacity,
                "marker": { "color": color.css() },
            }),
        };

        json!({
            "data": [trace],
            "layout": {
                "title": { "text": chart.title },
                "xaxis": { "title": { "text": chart.x_label } },
                "yaxis": { "title": { "text": chart.y_label } },
                "margin": { "t": 60 },
            },
        })
    }
}

impl ChartBackend for PlotlyBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn render(&self, chart: &ChartSpec) -> Result<String, ChartError> {
        let figure = serde_json::to_string(&self.figure(chart))?;
        // A literal "</" would close the surrounding <script> element.
        let figure = figure.replace("</", "<\\/");

        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div id="chart-{id}" class="chart chart-interactive"></div>
<script>
(function () {{
    const fig = {figure};
    Plotly.newPlot("chart-{id}", fig.data, fig.layout, {{ responsive: true }});
}})();
</script>"#,
            id = chart.id,
        );
        Ok(html)
    }

    fn page_header(&self) -> &'static str {
        PLOTLY_CDN
    }
}
