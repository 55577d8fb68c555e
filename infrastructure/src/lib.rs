//! Infrastructure layer for agent-presets
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including preset file loading.

pub mod config;

// Re-export commonly used types
pub use config::{
    PRESETS_RELATIVE_PATH, PROJECT_ROOT_ENV, PresetConfigError, PresetConfigLoader,
    PresetLoaderSettings, parse_document,
};
