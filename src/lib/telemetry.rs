//! Telemetry initialization and bootstrap phase span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one bootstrap phase.
pub struct PhaseSpan {
    span: Span,
    started_at: Instant,
    phase: &'static str,
}

impl PhaseSpan {
    /// Start a phase span.
    pub fn start(phase: &'static str) -> Self {
        let span = info_span!(
            target: "ccwb_setup::runtime",
            "bootstrap_phase",
            phase
        );
        Self {
            span,
            started_at: Instant::now(),
            phase,
        }
    }

    /// Close the span while recording status and elapsed time.
    pub fn finish(self, status: &'static str) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "ccwb_setup::runtime",
            phase = self.phase,
            status = status,
            elapsed_ms = elapsed_ms,
            "Completed bootstrap phase"
        );
    }
}

/// Payload for logging the end-of-run state as structured telemetry.
#[derive(Debug)]
pub struct RunSummary<'a> {
    pub profiles: usize,
    pub replaced_sections: usize,
    pub aws_config_path: &'a str,
    pub settings_outcome: &'a str,
    pub settings_backup: Option<&'a str>,
}

/// Emit the run summary to `tracing`.
pub fn emit_run_summary(summary: &RunSummary<'_>) {
    info!(
        target: "ccwb_setup::runtime",
        profiles = summary.profiles,
        replaced_sections = summary.replaced_sections,
        aws_config_path = summary.aws_config_path,
        settings_outcome = summary.settings_outcome,
        settings_backup = summary.settings_backup.unwrap_or(""),
        "Finished bootstrap run"
    );
}
