//! CLI for repo-roster.
//!
//! Searches GitHub for repositories matching a name and push-date filter and
//! merges them into a markdown table that is kept across runs.

use clap::Parser;
use repo_roster::{Runner, RunnerConfig, RunnerError, SyncSummary};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repo Roster - Keep a markdown table of matching GitHub repositories up to date.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file (name filter, date window, page cap, ...).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Artifact to read and rewrite; overrides the config file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Print the regenerated artifact instead of writing it.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Another provider may already be installed; either way TLS is configured.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Sync failed");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Compact single-line output on stderr without module targets, keeping
/// stdout for the summary and dry-run output. The level comes from
/// `RUST_LOG` and defaults to `info`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<SyncSummary, RunnerError> {
    let mut config = RunnerConfig::load(args.config.as_deref(), args.token, args.dry_run)?;
    if let Some(output) = args.output {
        config = config.with_output(output);
    }

    Runner::new(config).run().await
}

/// Prints the final run summary.
fn print_summary(summary: &SyncSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Artifact: {}", summary.output.display());
    println!("  Existing records: {}", summary.existing);
    println!("  Repositories fetched: {}", summary.fetched);
    println!("  Added: {}", summary.added);
    println!("  Updated: {}", summary.updated);
    println!("  Unchanged: {}", summary.unchanged);

    if !summary.dry_run {
        println!(
            "  Updated {} with {} repositories.",
            summary.output.display(),
            summary.total
        );
    }
}
