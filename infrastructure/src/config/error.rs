//! Errors from locating, reading and parsing `presets.yaml`

use presets_application::PresetSourceError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a preset document from disk.
#[derive(Error, Debug)]
pub enum PresetConfigError {
    #[error("preset configuration not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read preset configuration at {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed preset configuration at {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid loader settings: {0}")]
    Settings(#[from] Box<figment::Error>),
}

impl From<PresetConfigError> for PresetSourceError {
    fn from(err: PresetConfigError) -> Self {
        match err {
            PresetConfigError::NotFound { path } => PresetSourceError::NotFound {
                location: path.display().to_string(),
            },
            PresetConfigError::Unreadable { path, source } => PresetSourceError::Unreadable {
                location: path.display().to_string(),
                message: source.to_string(),
            },
            PresetConfigError::Malformed { path, source } => PresetSourceError::Malformed {
                location: path.display().to_string(),
                message: source.to_string(),
            },
            PresetConfigError::Settings(e) => PresetSourceError::Unreadable {
                location: "loader settings".to_string(),
                message: e.to_string(),
            },
        }
    }
}
