//! CLI entrypoint module structure.
use std::process::ExitCode;

use anyhow::Error;

use crate::bootstrap::{self, BootstrapReport, SettingsOutcome};

pub mod args;
pub mod layout;

pub use args::SetupArgs;
pub use layout::{layout_for_roots, resolve_layout, resolve_prefix, BootstrapLayout};

/// Bundles a run-fatal error message with the process exit code.
#[derive(Debug)]
pub struct SetupExit {
    message: String,
    exit_code: ExitCode,
}

impl SetupExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("Error: {err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Run the bootstrap against the resolved layout and print status lines.
pub fn run_bootstrap(layout: &BootstrapLayout) -> Result<BootstrapReport, SetupExit> {
    println!("Configuring Claude Code with Bedrock...");

    let report = bootstrap::run(layout).map_err(SetupExit::from_error)?;
    print_report(&report);
    Ok(report)
}

fn print_report(report: &BootstrapReport) {
    let names: Vec<&str> = report
        .profiles
        .iter()
        .map(|profile| profile.name.as_str())
        .collect();
    println!("Found profiles: {}", names.join(" "));
    for profile in &report.profiles {
        println!(
            "Configured AWS profile: {} (region = {})",
            profile.name, profile.region
        );
    }

    match &report.settings {
        SettingsOutcome::Rendered { backup } => {
            if let Some(backup) = backup {
                println!("⚠️  Backed up existing settings to: {}", backup.display());
            }
            println!("✓ Created {}", report.settings_destination.display());
        }
        SettingsOutcome::SkippedMissingTemplate => {
            println!("⚠️  Settings template not found, skipping Claude settings configuration");
        }
    }

    println!("✓ Configuration complete!");
}
