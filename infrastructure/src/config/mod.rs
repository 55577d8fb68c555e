//! Preset configuration loading for agent-presets
//!
//! This module handles locating, reading and parsing `presets.yaml`.
//! The project root is resolved in this order (highest to lowest):
//!
//! 1. Explicit override passed by the caller
//! 2. `PROJECT_ROOT` environment variable
//! 3. Parent of the current working directory
//!
//! The file itself always lives at
//! `<project_root>/.claude/skills/agent-creation/presets.yaml`.

mod error;
mod loader;
mod settings;

pub use error::PresetConfigError;
pub use loader::{PRESETS_RELATIVE_PATH, PresetConfigLoader, parse_document};
pub use settings::{PROJECT_ROOT_ENV, PresetLoaderSettings};
