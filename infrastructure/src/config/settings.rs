//! Loader settings: where the project root is
//!
//! Priority (highest to lowest):
//!
//! 1. Explicit override (e.g. `--project-root`)
//! 2. `PROJECT_ROOT` environment variable
//! 3. Parent of the current working directory

use figment::{Figment, providers::Serialized};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides the project root.
pub const PROJECT_ROOT_ENV: &str = "PROJECT_ROOT";

/// Settings for [`PresetConfigLoader`](super::PresetConfigLoader).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetLoaderSettings {
    /// Project root; `None` means "parent of the current directory"
    pub project_root: Option<PathBuf>,
}

impl PresetLoaderSettings {
    /// Build settings from the environment plus an optional override.
    ///
    /// `PROJECT_ROOT` is taken verbatim as a path, so directory names such
    /// as `2024` or `true` are not reinterpreted as numbers or booleans.
    pub fn load(project_root: Option<&Path>) -> Result<Self, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(root) = std::env::var_os(PROJECT_ROOT_ENV) {
            figment = figment.merge(Serialized::default("project_root", PathBuf::from(root)));
        }

        if let Some(root) = project_root {
            figment = figment.merge(Serialized::default("project_root", root));
        }

        Self::from_figment(&figment)
    }

    /// Extract settings from an already-assembled figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, Box<figment::Error>> {
        figment.extract().map_err(Box::new)
    }

    /// The project root to use, falling back to the parent of the current
    /// working directory when unset or empty.
    pub fn resolve_root(&self) -> PathBuf {
        match &self.project_root {
            Some(root) if !root.as_os_str().is_empty() => root.clone(),
            _ => {
                let root = default_project_root();
                debug!("No project root configured, using {}", root.display());
                root
            }
        }
    }
}

fn default_project_root() -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => {
            let parent = cwd.parent().map(Path::to_path_buf);
            parent.unwrap_or(cwd)
        }
        Err(_) => PathBuf::from(".."),
    }
}
