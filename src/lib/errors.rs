use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while loading the profile configuration map.
#[derive(Debug, Error)]
pub enum ProfileMapError {
    /// The profile configuration file is absent.
    #[error("config.json not found at {path}")]
    Missing { path: PathBuf },
    /// The profile configuration contains no entries.
    #[error("No profiles found in {path}")]
    NoProfiles { path: PathBuf },
    /// Failed to read the profile configuration file.
    #[error("Failed to read profile configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Failed to deserialize the profile configuration JSON.
    #[error("Failed to parse profile configuration {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors occurring while operating on user configuration files.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// High-level failure types that abort a bootstrap run.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    ProfileMap(#[from] ProfileMapError),
    #[error(transparent)]
    File(#[from] FileError),
}
