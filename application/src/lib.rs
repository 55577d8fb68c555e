//! Application layer for agent-presets
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::preset_source::{PresetSourceError, PresetSourcePort};
pub use use_cases::resolve_presets::{ResolvePresetsError, ResolvePresetsUseCase};
pub use use_cases::validate_presets::{ValidatePresetsUseCase, ValidationReport};
