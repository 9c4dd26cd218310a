//! Structured rewrite of the AWS CLI config file.
//!
//! The file is parsed into an in-memory document (preamble plus an ordered
//! list of named sections), edited, and re-serialized. Sections for profiles
//! not present in the map are preserved verbatim; rewritten sections move to
//! the end of the file in map order.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    bootstrap::profile_map::ProfileMap,
    lib::{errors::BootstrapError, fs as fs_util},
};

/// One named section: the text inside the brackets plus raw body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    lines: Vec<String>,
}

/// In-memory form of the INI-like CLI config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfigDocument {
    preamble: Vec<String>,
    sections: Vec<Section>,
}

impl CliConfigDocument {
    /// Parse the file text. Every `[name]` line starts a new section; lines
    /// before the first header form the preamble.
    pub fn parse(text: &str) -> Self {
        let mut document = Self::default();
        for line in text.lines() {
            if let Some(name) = section_name(line) {
                document.sections.push(Section {
                    name,
                    lines: Vec::new(),
                });
            } else if let Some(current) = document.sections.last_mut() {
                current.lines.push(line.to_string());
            } else {
                document.preamble.push(line.to_string());
            }
        }
        document
    }

    /// Delete every section with this exact name. Absence is not an error.
    pub fn remove_section(&mut self, name: &str) -> usize {
        let before = self.sections.len();
        self.sections.retain(|section| section.name != name);
        before - self.sections.len()
    }

    /// Append a section at the end of the document.
    pub fn push_section(&mut self, name: &str, lines: Vec<String>) {
        self.sections.push(Section {
            name: name.to_string(),
            lines,
        });
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.iter().any(|section| section.name == name)
    }

    /// Section names in document order.
    pub fn section_names(&self) -> Vec<&str> {
        self.sections
            .iter()
            .map(|section| section.name.as_str())
            .collect()
    }

    /// Serialize with one blank line separating adjacent sections and a
    /// trailing newline. Stable: serializing a reparsed document is a no-op.
    pub fn to_text(&self) -> String {
        let mut out: Vec<String> = self.preamble.clone();
        for section in &self.sections {
            if matches!(out.last(), Some(line) if !line.is_empty()) {
                out.push(String::new());
            }
            out.push(format!("[{}]", section.name));
            out.extend(section.lines.iter().cloned());
        }

        let mut text = out.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }
}

/// Extract the section name from a `[name]` line.
fn section_name(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;
    Some(inner.trim().to_string())
}

/// One profile as written into the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedProfile {
    pub name: String,
    pub region: String,
}

/// Result summary for one synchronization pass.
#[derive(Debug)]
pub struct SyncSummary {
    pub profiles: Vec<SyncedProfile>,
    /// Pre-existing sections that were replaced.
    pub replaced: usize,
    /// `.bak` snapshot of the pre-run file, when one existed.
    pub bak_path: Option<PathBuf>,
}

/// Rewrites the CLI config file so that every mapped profile has exactly one
/// section carrying a `credential_process` line and a `region` line.
#[derive(Debug)]
pub struct ProfileSynchronizer<'a> {
    credential_process: &'a Path,
    config_path: &'a Path,
}

impl<'a> ProfileSynchronizer<'a> {
    pub fn new(credential_process: &'a Path, config_path: &'a Path) -> Self {
        Self {
            credential_process,
            config_path,
        }
    }

    /// Synchronize the config file with the map. A missing file is treated
    /// as empty and created, including its parent directory.
    pub fn sync(&self, map: &ProfileMap) -> Result<SyncSummary, BootstrapError> {
        let existing = fs_util::read_optional_text(self.config_path)?;
        let mut document = CliConfigDocument::parse(existing.as_deref().unwrap_or(""));

        let bak_path = match &existing {
            Some(previous) => Some(fs_util::write_bak_sibling(self.config_path, previous)?),
            None => None,
        };

        let mut replaced = 0;
        let mut profiles = Vec::with_capacity(map.len());
        for (name, entry) in map.iter() {
            let section = format!("profile {name}");
            let region = entry.resolved_region();
            replaced += document.remove_section(&section);
            document.push_section(
                &section,
                vec![
                    format!(
                        "credential_process = {} --profile {name}",
                        self.credential_process.display()
                    ),
                    format!("region = {region}"),
                ],
            );
            debug!(
                target: "ccwb_setup::profiles",
                profile = name,
                region = region,
                "Rewrote profile section"
            );
            profiles.push(SyncedProfile {
                name: name.to_string(),
                region: region.to_string(),
            });
        }

        fs_util::write_text(self.config_path, &document.to_text())?;
        info!(
            target: "ccwb_setup::profiles",
            path = %self.config_path.display(),
            profiles = profiles.len(),
            replaced = replaced,
            "Synchronized AWS CLI profiles"
        );

        Ok(SyncSummary {
            profiles,
            replaced,
            bak_path,
        })
    }
}
