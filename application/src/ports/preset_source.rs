//! Preset source port.
//!
//! Defines where preset documents come from. The infrastructure layer
//! implements this with a YAML file reader; tests use in-memory stubs.

use presets_domain::PresetDocument;
use thiserror::Error;

/// Errors a preset source can report.
///
/// All of them are fatal for the call that triggered the load: no partial or
/// default document is ever substituted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresetSourceError {
    /// The document does not exist at the expected location.
    #[error("preset configuration not found at {location}")]
    NotFound { location: String },

    /// The document exists but could not be read.
    #[error("cannot read preset configuration at {location}: {message}")]
    Unreadable { location: String, message: String },

    /// The document was read but does not have the expected shape.
    #[error("malformed preset configuration at {location}: {message}")]
    Malformed { location: String, message: String },
}

/// Port for loading the preset document.
///
/// Implementations must read fresh on every call; callers rely on edits to
/// the source being visible on the next resolution.
pub trait PresetSourcePort: Send + Sync {
    /// Load and parse the full document.
    fn load(&self) -> Result<PresetDocument, PresetSourceError>;

    /// Human-readable location of the source (e.g. a file path).
    fn location(&self) -> String;
}
