//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod resolve_presets;
pub mod validate_presets;

#[cfg(test)]
pub(crate) mod test_support;
