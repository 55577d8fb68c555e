//! Preset domain module
//!
//! Turns a declarative preset document into the flat tool lists handed to
//! autonomous agents.
//!
//! ```text
//! ┌────────────────┐    ┌───────────────┐    ┌────────────────┐
//! │ PresetDocument │───▶│ GroupResolver │───▶│ ResolvedPreset │
//! │ (groups +      │    │ (per include) │    │ (dedup tools)  │
//! │  presets)      │    └───────────────┘    └────────────────┘
//! └────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolGroup`] / [`PresetDef`] — the raw document shape
//! - [`GroupResolver`] — depth-first flattening with a per-descent cycle guard
//! - [`assemble`] — builds one [`ResolvedPreset`] per declared preset
//! - [`validate_document`] — optional report of dangling names and cycles
//!
//! Everything here is pure: no I/O, no shared state between calls.

pub mod assembler;
pub mod entities;
pub mod resolver;
pub mod validation;

pub use assembler::{assemble, assemble_preset, dedup_preserving_order, dispatchable_only};
pub use entities::{GroupMap, PresetDef, PresetDocument, PresetMap, ResolvedPreset, ToolGroup};
pub use resolver::{GroupResolver, VisitSet, resolve_group};
pub use validation::{PresetIssue, PresetIssueCode, Severity, has_errors, validate_document};
