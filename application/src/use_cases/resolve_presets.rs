//! Resolve presets use case
//!
//! Loads the preset document from a [`PresetSourcePort`] and assembles every
//! preset into a [`ResolvedPreset`].
//!
//! Nothing is cached: each call reads the source again, so an edited
//! configuration file is picked up by the very next request.
//!
//! ```ignore
//! use presets_application::ResolvePresetsUseCase;
//!
//! let use_case = ResolvePresetsUseCase::new(Arc::new(loader));
//! for preset in use_case.execute()? {
//!     println!("{}: {}", preset.id, preset.tools.join(", "));
//! }
//! ```

use crate::ports::preset_source::{PresetSourceError, PresetSourcePort};
use presets_domain::{ResolvedPreset, assemble, assemble_preset, dispatchable_only};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while resolving presets.
#[derive(Error, Debug)]
pub enum ResolvePresetsError {
    #[error(transparent)]
    Source(#[from] PresetSourceError),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// Use case for turning the preset document into resolved presets.
#[derive(Clone)]
pub struct ResolvePresetsUseCase {
    source: Arc<dyn PresetSourcePort>,
}

impl ResolvePresetsUseCase {
    pub fn new(source: Arc<dyn PresetSourcePort>) -> Self {
        Self { source }
    }

    /// Resolve every preset, in declaration order.
    pub fn execute(&self) -> Result<Vec<ResolvedPreset>, ResolvePresetsError> {
        let document = self.source.load()?;
        info!(
            "Loaded {} presets and {} tool groups from {}",
            document.presets.len(),
            document.tool_groups.len(),
            self.source.location()
        );

        let presets = assemble(&document);
        for preset in &presets {
            debug!(
                "Preset '{}' resolved to {} tools from {} groups",
                preset.id,
                preset.tools.len(),
                preset.tool_groups.len()
            );
        }
        Ok(presets)
    }

    /// Resolve only the presets marked `dispatchable`.
    pub fn execute_dispatchable(&self) -> Result<Vec<ResolvedPreset>, ResolvePresetsError> {
        Ok(dispatchable_only(self.execute()?))
    }

    /// Resolve a single preset by id.
    pub fn find(&self, id: &str) -> Result<ResolvedPreset, ResolvePresetsError> {
        let document = self.source.load()?;
        let preset = document
            .presets
            .get(id)
            .ok_or_else(|| ResolvePresetsError::UnknownPreset(id.to_string()))?;

        let resolved = assemble_preset(id, preset, &document.tool_groups);
        debug!("Preset '{}' resolved to {} tools", id, resolved.tools.len());
        Ok(resolved)
    }
}
