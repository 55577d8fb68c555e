//! Preset assembly — groups + extras → deduplicated tool list
//!
//! For each preset, every name in `includes` is resolved with its own fresh
//! visiting set (see [`super::resolver`]), the results are concatenated in
//! `includes` order, `additional_tools` are appended, and the combined list
//! is deduplicated keeping the first occurrence of each tool.

use super::entities::{GroupMap, PresetDef, PresetDocument, ResolvedPreset};
use super::resolver::GroupResolver;
use std::collections::HashSet;

/// Assemble every preset in the document, in declaration order.
pub fn assemble(document: &PresetDocument) -> Vec<ResolvedPreset> {
    document
        .presets
        .iter()
        .map(|(id, preset)| assemble_preset(id, preset, &document.tool_groups))
        .collect()
}

/// Assemble a single preset against a group map.
pub fn assemble_preset(id: &str, preset: &PresetDef, groups: &GroupMap) -> ResolvedPreset {
    let resolver = GroupResolver::new(groups);

    let mut combined = Vec::new();
    for name in &preset.includes {
        combined.extend(resolver.resolve(name));
    }
    combined.extend(preset.additional_tools.iter().cloned());

    ResolvedPreset {
        id: id.to_string(),
        description: preset.description.clone(),
        model: preset.model.clone(),
        dispatchable: preset.dispatchable,
        tools: dedup_preserving_order(combined),
        tool_groups: preset.includes.clone(),
    }
}

/// Drop repeated tools, keeping the first occurrence of each.
pub fn dedup_preserving_order(tools: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(tools.len());
    tools
        .into_iter()
        .filter(|tool| seen.insert(tool.clone()))
        .collect()
}

/// Presets that may be dispatched to an autonomous agent.
pub fn dispatchable_only(presets: Vec<ResolvedPreset>) -> Vec<ResolvedPreset> {
    presets.into_iter().filter(|p| p.dispatchable).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::entities::ToolGroup;

    fn scenario() -> PresetDocument {
        PresetDocument::new()
            .with_group("base", ToolGroup::new().with_tools(["read", "write"]))
            .with_group(
                "ext",
                ToolGroup::new().with_includes(["base"]).with_tools(["deploy"]),
            )
            .with_preset(
                "dev",
                PresetDef::new("d", "m")
                    .dispatchable(true)
                    .with_includes(["ext"])
                    .with_additional_tools(["read"]),
            )
    }

    // ==================== Scenario ====================

    #[test]
    fn test_scenario_first_occurrence_wins() {
        let presets = assemble(&scenario());
        assert_eq!(presets.len(), 1);

        let dev = &presets[0];
        assert_eq!(dev.id, "dev");
        assert_eq!(dev.description, "d");
        assert_eq!(dev.model, "m");
        assert!(dev.dispatchable);
        assert_eq!(dev.tools, vec!["read", "write", "deploy"]);
        assert_eq!(dev.tool_groups, vec!["ext"]);
    }

    // ==================== Dedup ====================

    #[test]
    fn test_dedup_preserving_order() {
        let tools = ["b", "a", "b", "c", "a"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(dedup_preserving_order(tools), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_no_duplicates_and_length_matches_distinct_count() {
        let doc = PresetDocument::new()
            .with_group("a", ToolGroup::new().with_tools(["x", "y", "x"]))
            .with_group("b", ToolGroup::new().with_includes(["a"]).with_tools(["y", "z"]))
            .with_preset(
                "p",
                PresetDef::new("p", "m")
                    .with_includes(["a", "b", "a"])
                    .with_additional_tools(["z", "w"]),
            );
        let tools = &assemble(&doc)[0].tools;
        let distinct: HashSet<&String> = tools.iter().collect();
        assert_eq!(tools.len(), distinct.len());
        assert_eq!(tools, &vec!["x", "y", "z", "w"]);
    }

    // ==================== Ordering ====================

    #[test]
    fn test_additional_tools_come_last() {
        let doc = PresetDocument::new()
            .with_group("g1", ToolGroup::new().with_tools(["a"]))
            .with_preset(
                "p",
                PresetDef::new("p", "m")
                    .with_includes(["g1"])
                    .with_additional_tools(["z"]),
            );
        assert_eq!(assemble(&doc)[0].tools, vec!["a", "z"]);
    }

    #[test]
    fn test_includes_order_is_respected() {
        let doc = PresetDocument::new()
            .with_group("first", ToolGroup::new().with_tools(["1"]))
            .with_group("second", ToolGroup::new().with_tools(["2"]))
            .with_preset(
                "p",
                PresetDef::new("p", "m").with_includes(["second", "first"]),
            );
        assert_eq!(assemble(&doc)[0].tools, vec!["2", "1"]);
    }

    #[test]
    fn test_presets_keep_declaration_order() {
        let doc = PresetDocument::new()
            .with_preset("zeta", PresetDef::new("z", "m"))
            .with_preset("alpha", PresetDef::new("a", "m"));
        let ids: Vec<_> = assemble(&doc).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["zeta", "alpha"]);
    }

    // ==================== Dangling / cyclic ====================

    #[test]
    fn test_dangling_group_contributes_nothing() {
        let doc = PresetDocument::new()
            .with_group("real", ToolGroup::new().with_tools(["read"]))
            .with_preset(
                "p",
                PresetDef::new("p", "m").with_includes(["ghost", "real"]),
            );
        let preset = &assemble(&doc)[0];
        assert_eq!(preset.tools, vec!["read"]);
        assert_eq!(preset.tool_groups, vec!["ghost", "real"]);
    }

    #[test]
    fn test_tool_groups_verbatim_with_cycles() {
        let doc = PresetDocument::new()
            .with_group("a", ToolGroup::new().with_includes(["b"]).with_tools(["ta"]))
            .with_group("b", ToolGroup::new().with_includes(["a"]).with_tools(["tb"]))
            .with_preset(
                "p",
                PresetDef::new("p", "m").with_includes(["a", "missing", "b", "a"]),
            );
        let preset = &assemble(&doc)[0];
        assert_eq!(preset.tool_groups, vec!["a", "missing", "b", "a"]);
        assert_eq!(preset.tools, vec!["tb", "ta"]);
    }

    #[test]
    fn test_same_group_in_two_includes_resolves_each_time() {
        // "base" is already expanded inside "ext", yet the second entry still
        // resolves it from a fresh visiting set.
        let doc = PresetDocument::new()
            .with_group("base", ToolGroup::new().with_tools(["read"]))
            .with_group("ext", ToolGroup::new().with_includes(["base"]))
            .with_preset("p", PresetDef::new("p", "m").with_includes(["ext", "base"]));
        let groups = &doc.tool_groups;
        let resolver = GroupResolver::new(groups);
        let per_include: Vec<Vec<String>> = doc.presets["p"]
            .includes
            .iter()
            .map(|name| resolver.resolve(name))
            .collect();
        assert_eq!(per_include, vec![vec!["read"], vec!["read"]]);
        assert_eq!(assemble(&doc)[0].tools, vec!["read"]);
    }

    #[test]
    fn test_preset_without_includes_uses_additional_tools() {
        let doc = PresetDocument::new().with_preset(
            "solo",
            PresetDef::new("s", "m").with_additional_tools(["x", "x", "y"]),
        );
        let preset = &assemble(&doc)[0];
        assert_eq!(preset.tools, vec!["x", "y"]);
        assert!(preset.tool_groups.is_empty());
    }

    // ==================== Filtering ====================

    #[test]
    fn test_dispatchable_only() {
        let doc = PresetDocument::new()
            .with_preset("on", PresetDef::new("a", "m").dispatchable(true))
            .with_preset("off", PresetDef::new("b", "m"));
        let ids: Vec<_> = dispatchable_only(assemble(&doc))
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["on"]);
    }
}
