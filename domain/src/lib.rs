//! Domain layer for agent-presets
//!
//! This crate contains the preset data model and the pure resolution logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Tool group**: a named bundle of tool identifiers, possibly composed
//!   from other groups via `includes`
//! - **Preset**: metadata (description, model, dispatchable) plus the groups
//!   and extra tools an agent is allowed to use
//! - **Resolution**: flattening a preset's groups into one ordered,
//!   duplicate-free tool list

pub mod preset;

// Re-export commonly used types
pub use preset::{
    GroupMap, GroupResolver, PresetDef, PresetDocument, PresetIssue, PresetIssueCode, PresetMap,
    ResolvedPreset, Severity, ToolGroup, VisitSet, assemble, assemble_preset,
    dedup_preserving_order, dispatchable_only, has_errors, resolve_group, validate_document,
};
