//! Preset domain entities
//!
//! These types mirror the shape of `presets.yaml`. Maps use [`IndexMap`] so
//! that presets come back out in the order they were declared.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Group name → group definition
pub type GroupMap = IndexMap<String, ToolGroup>;

/// Preset id → preset definition
pub type PresetMap = IndexMap<String, PresetDef>;

/// Treat an explicit YAML `null` (e.g. `tools:` with nothing after it) the
/// same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A named, reusable bundle of tool identifiers.
///
/// A group may pull in other groups through `includes`. Inclusion is a
/// reference by name; groups never own each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolGroup {
    /// Informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tools owned directly by this group, in declared order
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tools: Vec<String>,
    /// Names of groups whose tools come before this group's own
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub includes: Vec<String>,
}

impl ToolGroup {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools.extend(tools.into_iter().map(Into::into));
        self
    }

    pub fn with_includes<I, S>(mut self, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.extend(includes.into_iter().map(Into::into));
        self
    }
}

/// A preset as declared in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDef {
    pub description: String,
    /// Model identifier, opaque to resolution
    pub model: String,
    pub dispatchable: bool,
    /// Group names, resolved left to right
    #[serde(deserialize_with = "null_as_default")]
    pub includes: Vec<String>,
    /// Extra tools appended after everything the groups contribute
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub additional_tools: Vec<String>,
}

impl PresetDef {
    pub fn new(description: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            model: model.into(),
            dispatchable: false,
            includes: Vec::new(),
            additional_tools: Vec::new(),
        }
    }

    pub fn dispatchable(mut self, dispatchable: bool) -> Self {
        self.dispatchable = dispatchable;
        self
    }

    pub fn with_includes<I, S>(mut self, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.extend(includes.into_iter().map(Into::into));
        self
    }

    pub fn with_additional_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_tools
            .extend(tools.into_iter().map(Into::into));
        self
    }
}

/// The whole configuration document: tool groups plus presets.
///
/// Either section may be absent, in which case it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tool_groups: GroupMap,
    #[serde(default, deserialize_with = "null_as_default")]
    pub presets: PresetMap,
}

impl PresetDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, name: impl Into<String>, group: ToolGroup) -> Self {
        self.tool_groups.insert(name.into(), group);
        self
    }

    pub fn with_preset(mut self, id: impl Into<String>, preset: PresetDef) -> Self {
        self.presets.insert(id.into(), preset);
        self
    }
}

/// A preset after its groups have been flattened.
///
/// `tools` is the deduplicated capability list handed to the agent;
/// `tool_groups` is the preset's declared `includes`, kept verbatim for
/// tracing a tool back to where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPreset {
    pub id: String,
    pub description: String,
    pub model: String,
    pub dispatchable: bool,
    pub tools: Vec<String>,
    pub tool_groups: Vec<String>,
}
