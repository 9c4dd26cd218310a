//! Two-phase bootstrap orchestration.
//!
//! Phase 1 (profile synchronization) is required and aborts the run on
//! failure. Phase 2 (settings rendering) is optional: a missing template
//! degrades to a partial-success outcome, while filesystem failures remain
//! fatal. No phase is retried or rolled back.

pub mod aws_config;
pub mod profile_map;
pub mod settings;

pub use aws_config::{CliConfigDocument, ProfileSynchronizer, SyncSummary, SyncedProfile};
pub use profile_map::{ProfileEntry, ProfileMap, DEFAULT_REGION};
pub use settings::{
    render_template, SettingsOutcome, SettingsRenderer, SettingsValues, CREDENTIAL_PROCESS_TOKEN,
    OTEL_HELPER_TOKEN,
};

use std::path::PathBuf;

use chrono::Local;

use crate::{
    cli::BootstrapLayout,
    lib::{
        errors::BootstrapError,
        telemetry::{emit_run_summary, PhaseSpan, RunSummary},
    },
};

/// Terminal state of a bootstrap run that did not abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Completed,
    SettingsSkipped,
}

/// Everything the CLI needs to report a finished run.
#[derive(Debug)]
pub struct BootstrapReport {
    pub outcome: BootstrapOutcome,
    pub profiles: Vec<SyncedProfile>,
    pub replaced: usize,
    pub aws_config_bak: Option<PathBuf>,
    pub settings: SettingsOutcome,
    pub settings_destination: PathBuf,
}

/// Execute one bootstrap run against the resolved layout.
pub fn run(layout: &BootstrapLayout) -> Result<BootstrapReport, BootstrapError> {
    let span = PhaseSpan::start("profile_sync");
    let sync = sync_profiles(layout);
    span.finish(if sync.is_ok() { "succeeded" } else { "failed" });
    let sync = sync?;

    let span = PhaseSpan::start("settings_render");
    let settings = render_settings(layout);
    span.finish(match &settings {
        Ok(SettingsOutcome::Rendered { .. }) => "succeeded",
        Ok(SettingsOutcome::SkippedMissingTemplate) => "skipped",
        Err(_) => "failed",
    });
    let settings = settings?;

    let outcome = match settings {
        SettingsOutcome::Rendered { .. } => BootstrapOutcome::Completed,
        SettingsOutcome::SkippedMissingTemplate => BootstrapOutcome::SettingsSkipped,
    };

    let settings_backup = match &settings {
        SettingsOutcome::Rendered { backup } => {
            backup.as_ref().map(|path| path.display().to_string())
        }
        SettingsOutcome::SkippedMissingTemplate => None,
    };
    emit_run_summary(&RunSummary {
        profiles: sync.profiles.len(),
        replaced_sections: sync.replaced,
        aws_config_path: &layout.aws_config.display().to_string(),
        settings_outcome: match outcome {
            BootstrapOutcome::Completed => "rendered",
            BootstrapOutcome::SettingsSkipped => "skipped",
        },
        settings_backup: settings_backup.as_deref(),
    });

    Ok(BootstrapReport {
        outcome,
        profiles: sync.profiles,
        replaced: sync.replaced,
        aws_config_bak: sync.bak_path,
        settings,
        settings_destination: layout.settings_destination.clone(),
    })
}

fn sync_profiles(layout: &BootstrapLayout) -> Result<SyncSummary, BootstrapError> {
    let map = ProfileMap::load(&layout.profile_config)?;
    ProfileSynchronizer::new(&layout.credential_process, &layout.aws_config).sync(&map)
}

fn render_settings(layout: &BootstrapLayout) -> Result<SettingsOutcome, BootstrapError> {
    let values = SettingsValues {
        otel_helper_path: layout.otel_helper.clone(),
        credential_process_path: layout.credential_process.clone(),
    };
    SettingsRenderer::new(&layout.settings_template, &layout.settings_destination)
        .render(&values, Local::now())
}
