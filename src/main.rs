//! nugbot - NuGet package update checker for .csproj files
//!
//! Reads the `<PackageReference>` declarations from a project file, asks the
//! NuGet registration index for known releases, and reports which packages
//! have a newer version admissible under the selected update policy.

use clap::Parser;
use nugbot::cli::CliArgs;
use nugbot::manifest;
use nugbot::orchestrator::Orchestrator;
use nugbot::output::create_formatter;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}

/// Set up the stderr tracing subscriber. RUST_LOG wins over --verbose.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "nugbot=debug" } else { "nugbot=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let orchestrator = Orchestrator::new(args.update_type)?;
    let report = orchestrator
        .check_project(&args.file, args.show_progress())
        .await?;

    if report.skipped > 0 {
        info!(
            skipped = report.skipped,
            checked = report.checked,
            "some packages could not be checked"
        );
    }

    if report.updates.is_empty() {
        info!(checked = report.checked, "no updates found");
        return Ok(ExitCode::SUCCESS);
    }

    // The rewrite path is a stub; it fails before any output is produced,
    // mirroring the check-only nature of the tool.
    if args.fix {
        manifest::apply_updates(&args.file, &report.updates)?;
    }

    let formatter = create_formatter(args.json);
    let mut stdout = io::stdout().lock();
    formatter.format(&report.updates, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
