//! vqeviz command-line entry point.
//!
//! `vqeviz serve` starts the web dashboard, `vqeviz show` prints it to the
//! terminal.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{serve, show};

/// vqeviz - dashboard for precomputed VQE ground-state results
#[derive(Parser)]
#[command(name = "vqeviz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard over HTTP
    Serve {
        /// Results file to visualize
        #[arg(short, long, env = "VQEVIZ_RESULTS", default_value = vqeviz_results::DEFAULT_RESULTS_PATH)]
        results: PathBuf,

        /// Address to bind the server to
        #[arg(short, long, env = "VQEVIZ_BIND", default_value = "127.0.0.1:8501")]
        bind: SocketAddr,
    },

    /// Print the dashboard to the terminal
    Show {
        /// Results file to visualize
        #[arg(short, long, env = "VQEVIZ_RESULTS", default_value = vqeviz_results::DEFAULT_RESULTS_PATH)]
        results: PathBuf,

        /// Hide the energy distribution histogram
        #[arg(long)]
        no_histogram: bool,

        /// Hide the running-average chart
        #[arg(long)]
        no_running_average: bool,

        /// Select the static chart backend
        #[arg(long)]
        static_plots: bool,

        /// Skip the simulated progress animation
        #[arg(long)]
        no_progress: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging: RUST_LOG wins, then -v flags, then a per-command default.
    let fallback = match (cli.verbose, &cli.command) {
        (0, Commands::Serve { .. }) => "vqeviz=info,vqeviz_dashboard=info,vqeviz_results=info,tower_http=info",
        (0, Commands::Show { .. }) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve { results, bind } => {
            serve::execute(results, bind).await?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Show {
            results,
            no_histogram,
            no_running_average,
            static_plots,
            no_progress,
        } => {
            let toggles = vqeviz_dashboard::Toggles {
                show_histogram: !no_histogram,
                show_running_average: !no_running_average,
                interactive: !static_plots,
            };
            show::execute(&results, toggles, !no_progress).await
        }
    }
}
