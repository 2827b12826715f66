//! Terminal output.
//!
//! Prints the same blocks as the web page. Charts become sparklines and a bar
//! histogram; the progress indicator is an `indicatif` bar.

use std::io::{self, Write};
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use vqeviz_results::Histogram;

use crate::charts::{ChartKind, ChartSpec};
use crate::render::{Block, Dashboard};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Terminal output options.
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    /// Animate the progress indicator. Off prints the final state only.
    pub animate_progress: bool,
    /// Sparkline width in characters.
    pub sparkline_width: usize,
    /// Histogram bin count.
    pub histogram_bins: usize,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            animate_progress: true,
            sparkline_width: 60,
            histogram_bins: 20,
        }
    }
}

/// Write a dashboard to `out`, running the progress indicator in place.
pub async fn write_dashboard<W: Write>(
    out: &mut W,
    dashboard: &Dashboard,
    options: &TerminalOptions,
) -> io::Result<()> {
    for block in &dashboard.blocks {
        match block {
            Block::Title { text } => {
                writeln!(out, "{}", style(text).bold().underlined())?;
            }
            Block::Heading { text } | Block::Subheading { text } => {
                writeln!(out, "\n{}", style(text).bold().cyan())?;
            }
            Block::Paragraph { text } => writeln!(out, "{text}")?,
            Block::Summary { label, value, unit } => {
                let unit = unit.as_deref().map(|u| format!(" {u}")).unwrap_or_default();
                writeln!(
                    out,
                    "  {} {}{unit}",
                    style(format!("{label}:")).bold(),
                    style(value).yellow()
                )?;
            }
            Block::RawJson { value } => {
                let pretty = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
                writeln!(out, "{}", style(pretty).dim())?;
            }
            Block::Controls { toggles } => {
                let mark = |on: bool| if on { "[x]" } else { "[ ]" };
                writeln!(out, "\n{}", style("Visualization Controls").bold())?;
                writeln!(
                    out,
                    "  {} Show Energy Distribution\n  {} Show Running Average\n  {} Use Plotly for Interactive Plots",
                    mark(toggles.show_histogram),
                    mark(toggles.show_running_average),
                    mark(toggles.interactive)
                )?;
            }
            Block::Chart { chart } => write_chart(out, chart, options)?,
            Block::Progress {
                steps,
                step_delay_ms,
            } => {
                out.flush()?;
                if options.animate_progress {
                    run_progress(*steps, Duration::from_millis(*step_delay_ms)).await;
                }
                writeln!(
                    out,
                    "  {} {steps}/{steps} iterations",
                    style("✓").green().bold()
                )?;
            }
            Block::Bullet { label, text } => {
                writeln!(out, "  - {} {text}", style(format!("{label}:")).bold())?;
            }
            Block::Error { message, .. } => {
                writeln!(out, "{} {}", style("✗").red().bold(), style(message).red())?;
            }
        }
    }
    out.flush()
}

/// Tick a progress bar `steps` times, `delay` apart.
pub async fn run_progress(steps: u64, delay: Duration) {
    let bar = ProgressBar::with_draw_target(Some(steps), ProgressDrawTarget::stderr());
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("optimizing...");
    for _ in 0..steps {
        bar.inc(1);
        tokio::time::sleep(delay).await;
    }
    bar.finish_and_clear();
}

fn write_chart<W: Write>(out: &mut W, chart: &ChartSpec, options: &TerminalOptions) -> io::Result<()> {
    writeln!(out, "  {}", style(&chart.title).bold())?;
    match &chart.kind {
        ChartKind::Line { y, series_label, .. } => {
            if y.is_empty() {
                return writeln!(out, "  (no data)");
            }
            let (lo, hi) = min_max(y);
            writeln!(out, "  {}", style(sparkline(y, options.sparkline_width)).blue())?;
            writeln!(
                out,
                "  {series_label}: {} points, {} from {lo:.6} to {hi:.6}",
                y.len(),
                chart.y_label
            )?;
        }
        ChartKind::Histogram { samples, .. } => {
            let hist = Histogram::from_samples(samples, options.histogram_bins);
            if hist.is_empty() {
                return writeln!(out, "  (no data)");
            }
            let max = hist.max_count().max(1) as f64;
            for (lo, hi, count) in hist.bins() {
                let bar = "█".repeat((count as f64 / max * 30.0).round() as usize);
                writeln!(
                    out,
                    "  {lo:>10.6} .. {hi:>10.6} {count:>5} {}",
                    style(bar).green()
                )?;
            }
            writeln!(out, "  x: {}, y: {}", chart.x_label, chart.y_label)?;
        }
    }
    Ok(())
}

/// Unicode sparkline of `values`, bucket-averaged down to `width` characters.
pub fn sparkline(values: &[f64], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }
    let buckets: Vec<f64> = if values.len() <= width {
        values.to_vec()
    } else {
        (0..width)
            .map(|b| {
                let start = b * values.len() / width;
                let end = ((b + 1) * values.len() / width).max(start + 1);
                let chunk = &values[start..end];
                chunk.iter().sum::<f64>() / chunk.len() as f64
            })
            .collect()
    };

    let (lo, hi) = min_max(&buckets);
    let span = hi - lo;
    buckets
        .iter()
        .map(|v| {
            if span <= f64::EPSILON || !v.is_finite() {
                SPARK_LEVELS[0]
            } else {
                let level = ((v - lo) / span * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
                SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
            }
        })
        .collect()
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
