//! Static charts: inline SVG drawn with `plotters`.

use std::ops::Range;

use plotters::prelude::*;
use vqeviz_results::Histogram;

use super::{ChartBackend, ChartError, ChartKind, ChartSpec, SeriesColor};

/// Draws each chart into an SVG string.
#[derive(Debug, Clone)]
pub struct SvgBackend {
    histogram_bins: usize,
    size: (u32, u32),
}

impl SvgBackend {
    pub const NAME: &'static str = "svg";

    pub fn new(histogram_bins: usize, size: (u32, u32)) -> Self {
        Self {
            histogram_bins,
            size,
        }
    }

    fn draw_line(
        &self,
        chart: &ChartSpec,
        series_label: &str,
        color: SeriesColor,
        y: &[f64],
    ) -> Result<String, ChartError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE)?;

            let x_max = y.len().saturating_sub(1).max(1) as f64;
            let mut ctx = ChartBuilder::on(&root)
                .caption(&chart.title, ("sans-serif", 20))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(0.0..x_max, padded_range(y))?;

            ctx.configure_mesh()
                .x_desc(chart.x_label.as_str())
                .y_desc(chart.y_label.as_str())
                .draw()?;

            let (r, g, b) = color.rgb();
            let stroke = RGBColor(r, g, b);
            ctx.draw_series(LineSeries::new(
                y.iter().enumerate().map(|(i, v)| (i as f64, *v)),
                stroke.stroke_width(2),
            ))?
            .label(series_label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stroke));

            ctx.configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;

            root.present()?;
        }
        Ok(svg)
    }

    fn draw_histogram(
        &self,
        chart: &ChartSpec,
        color: SeriesColor,
        opacity: f64,
        samples: &[f64],
    ) -> Result<String, ChartError> {
        let hist = Histogram::from_samples(samples, self.histogram_bins);
        let x_range = match (hist.edges.first(), hist.edges.last()) {
            (Some(lo), Some(hi)) => *lo..*hi,
            _ => 0.0..1.0,
        };
        let y_max = (hist.max_count().max(1) as f64) * 1.05;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE)?;

            let mut ctx = ChartBuilder::on(&root)
                .caption(&chart.title, ("sans-serif", 20))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(x_range, 0.0..y_max)?;

            ctx.configure_mesh()
                .x_desc(chart.x_label.as_str())
                .y_desc(chart.y_label.as_str())
                .draw()?;

            let (r, g, b) = color.rgb();
            let fill = RGBColor(r, g, b).mix(opacity).filled();
            ctx.draw_series(
                hist.bins()
                    .map(|(lo, hi, count)| Rectangle::new([(lo, 0.0), (hi, count as f64)], fill)),
            )?;

            root.present()?;
        }
        Ok(svg)
    }
}

impl ChartBackend for SvgBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn render(&self, chart: &ChartSpec) -> Result<String, ChartError> {
        let svg = match &chart.kind {
            ChartKind::Line {
                series_label,
                color,
                y,
            } => self.draw_line(chart, series_label, *color, y)?,
            ChartKind::Histogram {
                color,
                opacity,
                samples,
            } => self.draw_histogram(chart, *color, *opacity, samples)?,
        };
        Ok(format!(
            r#"<figure id="chart-{}" class="chart chart-static">{svg}</figure>"#,
            chart.id
        ))
    }
}

/// Value range with 5% headroom. Falls back to `[-1, 1]` for empty or
/// constant series.
fn padded_range(values: &[f64]) -> Range<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.iter().copied().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return -1.0..1.0;
    }
    if (hi - lo).abs() < 1e-12 {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}
