//! Profile Map loading and region resolution.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ProfileMapError;

/// Region applied when an entry carries no usable `aws_region`.
pub const DEFAULT_REGION: &str = "us-east-1";

/// One entry from `config.json`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileEntry {
    #[serde(default)]
    pub aws_region: Option<String>,
}

impl ProfileEntry {
    /// The entry's `aws_region` when present and non-empty, `us-east-1` otherwise.
    pub fn resolved_region(&self) -> &str {
        self.aws_region
            .as_deref()
            .filter(|region| !region.is_empty())
            .unwrap_or(DEFAULT_REGION)
    }
}

/// Profile-name → entry map loaded from `config.json`.
///
/// Iteration order is lexicographic, which keeps runs deterministic and
/// matches how the installed profile list is reported to the user.
#[derive(Debug, Clone)]
pub struct ProfileMap {
    profiles: BTreeMap<String, ProfileEntry>,
    source_path: PathBuf,
}

impl ProfileMap {
    /// Load the map, rejecting a missing file and an empty profile set.
    pub fn load(path: &Path) -> Result<Self, ProfileMapError> {
        if !path.exists() {
            let err = ProfileMapError::Missing {
                path: path.to_path_buf(),
            };
            error!(
                target: "ccwb_setup::config",
                path = %path.display(),
                "Profile configuration file is missing"
            );
            return Err(err);
        }

        let raw = fs::read_to_string(path).map_err(|source| ProfileMapError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let profiles: BTreeMap<String, ProfileEntry> =
            serde_json::from_str(&raw).map_err(|source| {
                let err = ProfileMapError::Parse {
                    path: path.to_path_buf(),
                    source,
                };
                error!(
                    target: "ccwb_setup::config",
                    path = %path.display(),
                    reason = %err,
                    "Failed to parse profile configuration"
                );
                err
            })?;

        if profiles.is_empty() {
            return Err(ProfileMapError::NoProfiles {
                path: path.to_path_buf(),
            });
        }

        info!(
            target: "ccwb_setup::config",
            path = %path.display(),
            profiles = profiles.len(),
            "Loaded profile configuration"
        );

        Ok(Self {
            profiles,
            source_path: path.to_path_buf(),
        })
    }

    /// Iterate entries in lexicographic profile-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProfileEntry)> {
        self.profiles
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// Profile names in iteration order.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}
