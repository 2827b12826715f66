//! HTML page output.
//!
//! The page is self-contained apart from the Plotly script, which is only
//! pulled in when the interactive backend is selected. Controls are a plain
//! GET form: submitting it re-renders the whole page with the new toggles.

use std::fmt::Write;

use crate::charts::{ChartBackend, ChartError, backend_for};
use crate::dto::Toggles;
use crate::render::{Block, Dashboard, TITLE};
use crate::state::RenderOptions;

const STYLE_CSS: &str = r#"
:root { --bg: #ffffff; --panel: #f0f2f6; --text: #262730; --dim: #6b6f7b; --accent: #ff4b4b; --error-bg: #ffe9e9; }
* { box-sizing: border-box; }
body { margin: 0; font-family: "Source Sans Pro", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; color: var(--text); background: var(--bg); display: flex; min-height: 100vh; }
aside { width: 280px; flex-shrink: 0; background: var(--panel); padding: 2rem 1.25rem; }
aside h2 { font-size: 1.1rem; margin-top: 0; }
aside label { display: flex; gap: .5rem; align-items: center; margin: .6rem 0; cursor: pointer; }
aside button { margin-top: 1rem; padding: .4rem 1rem; border: 1px solid var(--dim); background: var(--bg); border-radius: 4px; cursor: pointer; }
main { flex: 1; max-width: 860px; padding: 2rem 3rem; }
h1 { font-size: 2.2rem; }
pre.raw-json { background: var(--panel); padding: 1rem; border-radius: 4px; overflow-x: auto; }
.summary strong { font-weight: 600; }
.chart { margin: 1rem 0; }
.chart-static svg { max-width: 100%; height: auto; }
progress { width: 100%; height: 1rem; accent-color: var(--accent); }
.error { background: var(--error-bg); color: #7d353b; padding: 1rem; border-radius: 4px; }
"#;

/// Render a dashboard as a full HTML document.
pub fn render_page(dashboard: &Dashboard, options: &RenderOptions) -> Result<String, ChartError> {
    let backend = backend_for(dashboard.toggles.interactive, options);
    tracing::debug!(backend = backend.name(), "rendering HTML page");

    let mut body = String::new();
    for block in &dashboard.blocks {
        write_block(&mut body, block, backend.as_ref())?;
    }

    let controls = dashboard
        .blocks
        .iter()
        .find_map(|b| match b {
            Block::Controls { toggles } => Some(controls_form(toggles)),
            _ => None,
        })
        .unwrap_or_default();

    let header = if dashboard.charts().next().is_some() {
        backend.page_header()
    } else {
        ""
    };

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE_CSS}</style>
{header}
</head>
<body>
{controls}<main>
{body}</main>
</body>
</html>
"#,
        title = escape(TITLE),
    );
    Ok(html)
}

fn write_block(
    out: &mut String,
    block: &Block,
    backend: &dyn ChartBackend,
) -> Result<(), ChartError> {
    match block {
        Block::Title { text } => {
            let _ = writeln!(out, "<h1>{}</h1>", escape(text));
        }
        Block::Heading { text } => {
            let _ = writeln!(out, "<h3>{}</h3>", escape(text));
        }
        Block::Subheading { text } => {
            let _ = writeln!(out, "<h2>{}</h2>", escape(text));
        }
        Block::Paragraph { text } => {
            let _ = writeln!(out, "<p>{}</p>", escape(text));
        }
        Block::Summary { label, value, unit } => {
            let unit = unit
                .as_deref()
                .map(|u| format!(" {}", escape(u)))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                r#"<p class="summary"><strong>{}:</strong> {}{unit}</p>"#,
                escape(label),
                escape(value),
            );
        }
        Block::RawJson { value } => {
            let pretty = serde_json::to_string_pretty(value)?;
            let _ = writeln!(out, r#"<pre class="raw-json">{}</pre>"#, escape(&pretty));
        }
        // Rendered in the sidebar.
        Block::Controls { .. } => {}
        Block::Chart { chart } => {
            out.push_str(&backend.render(chart)?);
            out.push('\n');
        }
        Block::Progress {
            steps,
            step_delay_ms,
        } => {
            let _ = writeln!(
                out,
                r#"<progress id="vqe-progress" max="{max}" value="0" data-steps="{steps}"></progress>
<script>
(function () {{
    const bar = document.getElementById("vqe-progress");
    const steps = {steps};
    let i = 0;
    if (steps === 0) return;
    const timer = setInterval(function () {{
        i += 1;
        bar.value = i;
        if (i >= steps) clearInterval(timer);
    }}, {step_delay_ms});
}})();
</script>"#,
                max = (*steps).max(1),
            );
        }
        Block::Bullet { label, text } => {
            let _ = writeln!(
                out,
                "<ul><li><strong>{}:</strong> {}</li></ul>",
                escape(label),
                escape(text)
            );
        }
        Block::Error { message, .. } => {
            let _ = writeln!(out, r#"<div class="error">{}</div>"#, escape(message));
        }
    }
    Ok(())
}

fn controls_form(toggles: &Toggles) -> String {
    let checkbox = |name: &str, label: &str, checked: bool| {
        format!(
            r#"<label><input type="checkbox" name="{name}" value="on"{}> {label}</label>"#,
            if checked { " checked" } else { "" }
        )
    };
    format!(
        r#"<aside>
<h2>Visualization Controls</h2>
<form method="get" action="/">
<input type="hidden" name="controls" value="1">
{}
{}
{}
<button type="submit">Apply</button>
</form>
</aside>
"#,
        checkbox(
            "show_histogram",
            "Show Energy Distribution",
            toggles.show_histogram
        ),
        checkbox(
            "show_running_average",
            "Show Running Average",
            toggles.show_running_average
        ),
        checkbox(
            "interactive",
            "Use Plotly for Interactive Plots",
            toggles.interactive
        ),
    )
}

/// Escape text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
