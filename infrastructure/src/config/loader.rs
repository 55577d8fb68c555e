//! Preset configuration file loader
//!
//! Reads `<project_root>/.claude/skills/agent-creation/presets.yaml` and
//! parses it into a [`PresetDocument`]. The file is read in full on every
//! call; nothing is cached between loads.

use super::error::PresetConfigError;
use super::settings::PresetLoaderSettings;
use presets_application::{PresetSourceError, PresetSourcePort};
use presets_domain::PresetDocument;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Location of the preset file relative to the project root.
pub const PRESETS_RELATIVE_PATH: &str = ".claude/skills/agent-creation/presets.yaml";

/// Parse a YAML preset document.
pub fn parse_document(content: &str) -> Result<PresetDocument, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

/// Loads the preset document from the local file system.
#[derive(Debug, Clone)]
pub struct PresetConfigLoader {
    path: PathBuf,
}

impl PresetConfigLoader {
    /// Loader for the preset file under `project_root`.
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            path: project_root.as_ref().join(PRESETS_RELATIVE_PATH),
        }
    }

    /// Loader for a preset file at an exact path.
    #[cfg(test)]
    pub(crate) fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_settings(settings: &PresetLoaderSettings) -> Self {
        Self::new(settings.resolve_root())
    }

    /// Loader configured from `PROJECT_ROOT` and an optional override.
    pub fn from_env(project_root: Option<&Path>) -> Result<Self, PresetConfigError> {
        let settings = PresetLoaderSettings::load(project_root)?;
        let loader = Self::from_settings(&settings);
        debug!("Preset configuration path: {}", loader.path.display());
        Ok(loader)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the preset file.
    ///
    /// Missing, unreadable and malformed files are all errors; no default
    /// document is ever substituted.
    pub fn read_document(&self) -> Result<PresetDocument, PresetConfigError> {
        let content = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                PresetConfigError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                PresetConfigError::Unreadable {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let document = parse_document(&content).map_err(|source| PresetConfigError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "Read {} presets and {} tool groups from {}",
            document.presets.len(),
            document.tool_groups.len(),
            self.path.display()
        );
        Ok(document)
    }
}

impl PresetSourcePort for PresetConfigLoader {
    fn load(&self) -> Result<PresetDocument, PresetSourceError> {
        self.read_document().map_err(PresetSourceError::from)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
