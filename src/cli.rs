//! CLI argument parsing module for nugbot

use crate::domain::UpdatePolicy;
use clap::Parser;
use std::path::PathBuf;

/// NuGet package update checker for .csproj files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "nugbot",
    version,
    about = "Check for NuGet package updates in .csproj files"
)]
pub struct CliArgs {
    /// Path to the .csproj file to check
    pub file: PathBuf,

    /// How much of the version number an update may change
    #[arg(short = 'u', long = "update-type", value_enum, default_value_t = UpdatePolicy::Patch)]
    pub update_type: UpdatePolicy,

    /// Apply updates to the .csproj file (not implemented)
    #[arg(short, long)]
    pub fix: bool,

    /// Output the update list as JSON
    #[arg(long)]
    pub json: bool,

    /// Quiet mode - no progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Whether the progress bar should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}
