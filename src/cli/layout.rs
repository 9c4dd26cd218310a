//! Install-prefix and user-file path resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};

const CCWB_PREFIX_ENV: &str = "CCWB_PREFIX";
const HOME_ENV: &str = "HOME";
const PROFILE_CONFIG_FILE: &str = "config.json";
const CREDENTIAL_PROCESS_BIN: &str = "credential-provider";
const OTEL_HELPER_BIN: &str = "otel-helper";
const SETTINGS_TEMPLATE_FILE: &str = "settings.json.default";

/// Resolved filesystem layout for one bootstrap run.
///
/// Both phases receive these paths explicitly; nothing below the CLI seam
/// reads the environment or assumes a home directory.
#[derive(Debug, Clone)]
pub struct BootstrapLayout {
    /// `<prefix>/libexec/config.json`, the Profile Map source.
    pub profile_config: PathBuf,
    /// `<prefix>/bin/credential-provider`.
    pub credential_process: PathBuf,
    /// `<prefix>/bin/otel-helper`.
    pub otel_helper: PathBuf,
    /// `$HOME/.aws/config`.
    pub aws_config: PathBuf,
    /// `<prefix>/etc/claude-code/claude-settings/settings.json.default`.
    pub settings_template: PathBuf,
    /// `$HOME/.claude/settings.json`.
    pub settings_destination: PathBuf,
}

/// Resolve the install prefix in the order: CLI override → env var →
/// derived from the running executable (`<prefix>/bin/<exe>`).
pub fn resolve_prefix(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }

    if let Some(env_prefix) = env::var_os(CCWB_PREFIX_ENV) {
        return Ok(PathBuf::from(env_prefix));
    }

    let exe = env::current_exe().context("failed to locate the running executable")?;
    prefix_from_executable(&exe).ok_or_else(|| {
        anyhow!(
            "cannot derive the install prefix from {}; pass --prefix or set {CCWB_PREFIX_ENV}",
            exe.display()
        )
    })
}

/// `<prefix>/bin/<exe>` → `<prefix>`.
fn prefix_from_executable(exe: &Path) -> Option<PathBuf> {
    Some(exe.parent()?.parent()?.to_path_buf())
}

/// Resolve the full layout from the prefix override and `HOME`.
pub fn resolve_layout(prefix_override: Option<PathBuf>) -> Result<BootstrapLayout> {
    let prefix = resolve_prefix(prefix_override)?;
    let home = env::var_os(HOME_ENV)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("{HOME_ENV} is not set; cannot locate user configuration files"))?;
    Ok(layout_for_roots(&prefix, &home))
}

/// Build the layout from explicit roots (testable helper).
pub fn layout_for_roots(prefix: &Path, home: &Path) -> BootstrapLayout {
    BootstrapLayout {
        profile_config: prefix.join("libexec").join(PROFILE_CONFIG_FILE),
        credential_process: prefix.join("bin").join(CREDENTIAL_PROCESS_BIN),
        otel_helper: prefix.join("bin").join(OTEL_HELPER_BIN),
        aws_config: home.join(".aws").join("config"),
        settings_template: prefix
            .join("etc")
            .join("claude-code")
            .join("claude-settings")
            .join(SETTINGS_TEMPLATE_FILE),
        settings_destination: home.join(".claude").join("settings.json"),
    }
}
