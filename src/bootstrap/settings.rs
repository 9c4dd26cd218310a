//! Claude settings rendering with placeholder substitution and backup.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::lib::{errors::BootstrapError, fs as fs_util};

/// Placeholder replaced with the otel-helper executable path.
pub const OTEL_HELPER_TOKEN: &str = "__OTEL_HELPER_PATH__";
/// Placeholder replaced with the credential-provider executable path.
pub const CREDENTIAL_PROCESS_TOKEN: &str = "__CREDENTIAL_PROCESS_PATH__";

/// Fixed record of substitution values for the settings template.
#[derive(Debug, Clone)]
pub struct SettingsValues {
    pub otel_helper_path: PathBuf,
    pub credential_process_path: PathBuf,
}

impl SettingsValues {
    fn substitutions(&self) -> [(&'static str, String); 2] {
        [
            (
                OTEL_HELPER_TOKEN,
                self.otel_helper_path.display().to_string(),
            ),
            (
                CREDENTIAL_PROCESS_TOKEN,
                self.credential_process_path.display().to_string(),
            ),
        ]
    }
}

/// Replace every occurrence of each placeholder token.
pub fn render_template(template: &str, values: &SettingsValues) -> String {
    let mut rendered = template.to_string();
    for (token, value) in values.substitutions() {
        rendered = rendered.replace(token, &value);
    }
    rendered
}

/// Result of the optional settings phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsOutcome {
    /// The destination was written; `backup` names the pre-run copy, if any.
    Rendered { backup: Option<PathBuf> },
    /// The template is absent; nothing was written.
    SkippedMissingTemplate,
}

/// Renders the settings template into the destination file.
#[derive(Debug)]
pub struct SettingsRenderer<'a> {
    template_path: &'a Path,
    destination: &'a Path,
}

impl<'a> SettingsRenderer<'a> {
    pub fn new(template_path: &'a Path, destination: &'a Path) -> Self {
        Self {
            template_path,
            destination,
        }
    }

    /// Render the template into the destination, backing up an existing file
    /// to `<destination>.backup.<YYYYMMDD_HHMMSS>` first. A missing template
    /// is a skip, not an error.
    pub fn render(
        &self,
        values: &SettingsValues,
        now: DateTime<Local>,
    ) -> Result<SettingsOutcome, BootstrapError> {
        let Some(template) = fs_util::read_optional_text(self.template_path)? else {
            warn!(
                target: "ccwb_setup::settings",
                template = %self.template_path.display(),
                "Settings template not found; skipping settings configuration"
            );
            return Ok(SettingsOutcome::SkippedMissingTemplate);
        };

        let backup = if self.destination.exists() {
            Some(fs_util::timestamped_backup(self.destination, now)?)
        } else {
            None
        };

        fs_util::write_text(self.destination, &render_template(&template, values))?;
        info!(
            target: "ccwb_setup::settings",
            destination = %self.destination.display(),
            backed_up = backup.is_some(),
            "Wrote settings file"
        );

        Ok(SettingsOutcome::Rendered { backup })
    }
}
