//! Configuration checks for preset documents.
//!
//! Resolution is deliberately forgiving: dangling group names and include
//! cycles never make [`assemble`](super::assembler::assemble) fail. This
//! module reports them separately so a hand-edited `presets.yaml` can be
//! checked without changing what resolution returns.
//!
//! # Examples
//!
//! ```
//! use presets_domain::preset::entities::{PresetDef, PresetDocument, ToolGroup};
//! use presets_domain::preset::validation::{validate_document, PresetIssueCode};
//!
//! let doc = PresetDocument::new()
//!     .with_group("base", ToolGroup::new().with_tools(["read"]))
//!     .with_preset("dev", PresetDef::new("d", "m").with_includes(["base", "typo"]));
//!
//! let issues = validate_document(&doc);
//! assert_eq!(issues.len(), 1);
//! assert_eq!(issues[0].code, PresetIssueCode::DanglingPresetInclude);
//! ```

use super::assembler::assemble_preset;
use super::entities::{GroupMap, PresetDocument};
use std::collections::HashMap;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The preset cannot be used as configured.
    Error,
    /// Resolution still works but probably not as the author intended.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetIssueCode {
    /// A group's `includes` names a group that does not exist.
    DanglingGroupInclude,
    /// A preset's `includes` names a group that does not exist.
    DanglingPresetInclude,
    /// A group includes itself directly.
    SelfInclude,
    /// Two or more groups include each other in a loop.
    IncludeCycle,
    /// A preset resolves to no tools at all.
    EmptyPreset,
    /// A preset has a blank `model`.
    EmptyModel,
}

/// A detected issue in a preset document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetIssue {
    pub severity: Severity,
    pub code: PresetIssueCode,
    /// Group name or preset id the issue is about
    pub subject: String,
    pub message: String,
}

impl PresetIssue {
    fn warning(code: PresetIssueCode, subject: &str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            subject: subject.to_string(),
            message,
        }
    }

    fn error(code: PresetIssueCode, subject: &str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code,
            subject: subject.to_string(),
            message,
        }
    }
}

/// Check a document, returning every issue found.
///
/// Group issues come first (in group declaration order), then preset issues.
pub fn validate_document(document: &PresetDocument) -> Vec<PresetIssue> {
    let groups = &document.tool_groups;
    let mut issues = Vec::new();

    for (name, group) in groups {
        for include in &group.includes {
            if include == name {
                issues.push(PresetIssue::warning(
                    PresetIssueCode::SelfInclude,
                    name,
                    format!("group '{}' includes itself", name),
                ));
            } else if !groups.contains_key(include) {
                issues.push(PresetIssue::warning(
                    PresetIssueCode::DanglingGroupInclude,
                    name,
                    format!("group '{}' includes unknown group '{}'", name, include),
                ));
            }
        }
    }

    for cycle in find_cycles(groups) {
        issues.push(PresetIssue::warning(
            PresetIssueCode::IncludeCycle,
            &cycle[0],
            format!("include cycle: {}", cycle.join(" -> ")),
        ));
    }

    for (id, preset) in &document.presets {
        for include in &preset.includes {
            if !groups.contains_key(include) {
                issues.push(PresetIssue::warning(
                    PresetIssueCode::DanglingPresetInclude,
                    id,
                    format!("preset '{}' includes unknown group '{}'", id, include),
                ));
            }
        }

        if preset.model.trim().is_empty() {
            issues.push(PresetIssue::error(
                PresetIssueCode::EmptyModel,
                id,
                format!("preset '{}' has an empty model", id),
            ));
        }

        if assemble_preset(id, preset, groups).tools.is_empty() {
            issues.push(PresetIssue::error(
                PresetIssueCode::EmptyPreset,
                id,
                format!("preset '{}' resolves to no tools", id),
            ));
        }
    }

    issues
}

/// Whether any issue is fatal.
pub fn has_errors(issues: &[PresetIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Find include cycles of length two or more.
///
/// One cycle is reported per back edge found by a depth-first walk, as a
/// closed path, e.g. `[a, b, a]`. A group on several overlapping loops is
/// part of at least one reported path, but not every elementary cycle is
/// listed.
fn find_cycles(groups: &GroupMap) -> Vec<Vec<String>> {
    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut stack: Vec<&str> = Vec::new();
    let mut cycles = Vec::new();

    for name in groups.keys() {
        visit(name, groups, &mut marks, &mut stack, &mut cycles);
    }
    cycles
}

fn visit<'a>(
    name: &'a str,
    groups: &'a GroupMap,
    marks: &mut HashMap<&'a str, Mark>,
    stack: &mut Vec<&'a str>,
    cycles: &mut Vec<Vec<String>>,
) {
    match marks.get(name) {
        Some(Mark::Done) => return,
        Some(Mark::InProgress) => {
            if let Some(pos) = stack.iter().position(|n| *n == name) {
                if stack.len() - pos > 1 {
                    let mut cycle: Vec<String> =
                        stack[pos..].iter().map(|n| n.to_string()).collect();
                    cycle.push(name.to_string());
                    cycles.push(cycle);
                }
            }
            return;
        }
        None => {}
    }

    let Some(group) = groups.get(name) else {
        return;
    };

    marks.insert(name, Mark::InProgress);
    stack.push(name);
    for include in &group.includes {
        visit(include, groups, marks, stack, cycles);
    }
    stack.pop();
    marks.insert(name, Mark::Done);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::entities::{PresetDef, ToolGroup};

    fn codes(issues: &[PresetIssue]) -> Vec<PresetIssueCode> {
        issues.iter().map(|i| i.code).collect()
    }

    #[test]
    fn clean_document_has_no_issues() {
        let doc = PresetDocument::new()
            .with_group("base", ToolGroup::new().with_tools(["read"]))
            .with_group("ext", ToolGroup::new().with_includes(["base"]))
            .with_preset("dev", PresetDef::new("d", "m").with_includes(["ext"]));
        assert!(validate_document(&doc).is_empty());
    }

    #[test]
    fn dangling_group_include_warns() {
        let doc = PresetDocument::new().with_group(
            "a",
            ToolGroup::new().with_includes(["ghost"]).with_tools(["t"]),
        );
        let issues = validate_document(&doc);
        assert_eq!(codes(&issues), vec![PresetIssueCode::DanglingGroupInclude]);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].subject, "a");
        assert!(issues[0].message.contains("ghost"));
    }

    #[test]
    fn self_include_warns_without_cycle_issue() {
        let doc = PresetDocument::new().with_group(
            "loop",
            ToolGroup::new().with_includes(["loop"]).with_tools(["t"]),
        );
        assert_eq!(
            codes(&validate_document(&doc)),
            vec![PresetIssueCode::SelfInclude]
        );
    }

    #[test]
    fn two_group_cycle_reported_once() {
        let doc = PresetDocument::new()
            .with_group("a", ToolGroup::new().with_includes(["b"]).with_tools(["x"]))
            .with_group("b", ToolGroup::new().with_includes(["a"]).with_tools(["y"]));
        let issues = validate_document(&doc);
        assert_eq!(codes(&issues), vec![PresetIssueCode::IncludeCycle]);
        assert_eq!(issues[0].message, "include cycle: a -> b -> a");
    }

    #[test]
    fn three_group_cycle_path() {
        let doc = PresetDocument::new()
            .with_group("a", ToolGroup::new().with_includes(["b"]))
            .with_group("b", ToolGroup::new().with_includes(["c"]))
            .with_group("c", ToolGroup::new().with_includes(["a"]));
        let issues = validate_document(&doc);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "include cycle: a -> b -> c -> a");
    }

    #[test]
    fn overlapping_cycles_reported_per_back_edge() {
        // x -> y -> z -> x and x -> z -> x share the z -> x edge.
        let doc = PresetDocument::new()
            .with_group("x", ToolGroup::new().with_includes(["y", "z"]))
            .with_group("y", ToolGroup::new().with_includes(["z"]))
            .with_group("z", ToolGroup::new().with_includes(["x"]));
        let issues = validate_document(&doc);
        assert_eq!(codes(&issues), vec![PresetIssueCode::IncludeCycle]);
        assert_eq!(issues[0].message, "include cycle: x -> y -> z -> x");
        for group in ["x", "y", "z"] {
            assert!(issues[0].message.contains(group));
        }
    }

    #[test]
    fn dangling_preset_include_warns() {
        let doc = PresetDocument::new()
            .with_group("base", ToolGroup::new().with_tools(["read"]))
            .with_preset(
                "dev",
                PresetDef::new("d", "m").with_includes(["base", "typo"]),
            );
        let issues = validate_document(&doc);
        assert_eq!(codes(&issues), vec![PresetIssueCode::DanglingPresetInclude]);
        assert_eq!(issues[0].subject, "dev");
        assert!(!has_errors(&issues));
    }

    #[test]
    fn empty_preset_is_an_error() {
        let doc = PresetDocument::new()
            .with_preset("hollow", PresetDef::new("h", "m").with_includes(["ghost"]));
        let issues = validate_document(&doc);
        assert_eq!(
            codes(&issues),
            vec![
                PresetIssueCode::DanglingPresetInclude,
                PresetIssueCode::EmptyPreset
            ]
        );
        assert!(has_errors(&issues));
    }

    #[test]
    fn blank_model_is_an_error() {
        let doc = PresetDocument::new()
            .with_preset("p", PresetDef::new("p", "  ").with_additional_tools(["t"]));
        let issues = validate_document(&doc);
        assert_eq!(codes(&issues), vec![PresetIssueCode::EmptyModel]);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn validation_does_not_change_resolution() {
        let doc = PresetDocument::new()
            .with_group("a", ToolGroup::new().with_includes(["a", "ghost"]).with_tools(["t"]))
            .with_preset("p", PresetDef::new("p", "m").with_includes(["a"]));
        let before = crate::preset::assembler::assemble(&doc);
        let _ = validate_document(&doc);
        assert_eq!(crate::preset::assembler::assemble(&doc), before);
        assert_eq!(before[0].tools, vec!["t"]);
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
