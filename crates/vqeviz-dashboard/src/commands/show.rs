//! Show command implementation.
//!
//! Print the dashboard to the terminal.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use vqeviz_dashboard::{
    RenderOptions, TerminalOptions, Toggles, render_dashboard, render_failure, write_dashboard,
};
use vqeviz_results::load_results;

/// Execute the show command.
///
/// A failed load prints the blocking error and exits non-zero.
pub async fn execute(results: &Path, toggles: Toggles, animate: bool) -> Result<ExitCode> {
    let options = RenderOptions::default();
    let (dashboard, code) = match load_results(results) {
        Ok(loaded) => (
            render_dashboard(&loaded, &toggles, &options),
            ExitCode::SUCCESS,
        ),
        Err(e) => (render_failure(&e, &toggles), ExitCode::FAILURE),
    };

    let terminal = TerminalOptions {
        animate_progress: animate && console::user_attended_stderr(),
        histogram_bins: options.static_histogram_bins,
        ..TerminalOptions::default()
    };

    let mut stdout = io::stdout().lock();
    write_dashboard(&mut stdout, &dashboard, &terminal)
        .await
        .context("Failed to write dashboard")?;

    Ok(code)
}
