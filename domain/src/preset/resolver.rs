//! Group resolution — flattening `includes` chains into tool lists
//!
//! Resolution is depth-first: a group's `includes` are expanded in declared
//! order before the group's own `tools` are appended.
//!
//! ```text
//! ext ──includes──▶ base ──tools──▶ [read, write]
//!  └──tools──▶ [deploy]
//!
//! resolve("ext") = [read, write, deploy]
//! ```
//!
//! # Visiting scope
//!
//! Cycle protection uses a [`VisitSet`] that lives for exactly one top-level
//! descent. [`GroupResolver::resolve`] starts a fresh set on every call, so
//! the same group reached from two separate entries of a preset's `includes`
//! is resolved independently each time. Inside one descent a name is never
//! expanded twice: a cycle (including a self-include) is pruned and a
//! diamond contributes the shared group only once.
//!
//! Unknown group names resolve to nothing. Neither case is an error; see
//! [`super::validation`] for reporting them.

use super::entities::GroupMap;
use std::collections::HashSet;

/// Group names already expanded during one resolution descent.
pub type VisitSet<'a> = HashSet<&'a str>;

/// Flattens groups from a borrowed [`GroupMap`].
#[derive(Debug, Clone, Copy)]
pub struct GroupResolver<'a> {
    groups: &'a GroupMap,
}

impl<'a> GroupResolver<'a> {
    pub fn new(groups: &'a GroupMap) -> Self {
        Self { groups }
    }

    /// Resolve `name` with a fresh visiting set.
    ///
    /// The result may contain duplicates.
    pub fn resolve(&self, name: &str) -> Vec<String> {
        let mut visiting = VisitSet::new();
        self.resolve_with(name, &mut visiting)
    }

    /// Resolve `name`, threading `visiting` through the descent.
    ///
    /// Returns an empty list if `name` is already in `visiting` or does not
    /// exist in the group map.
    pub fn resolve_with(&self, name: &str, visiting: &mut VisitSet<'a>) -> Vec<String> {
        if visiting.contains(name) {
            return Vec::new();
        }
        let Some((key, group)) = self.groups.get_key_value(name) else {
            return Vec::new();
        };
        visiting.insert(key.as_str());

        let mut tools = Vec::new();
        for include in &group.includes {
            tools.extend(self.resolve_with(include, visiting));
        }
        tools.extend(group.tools.iter().cloned());
        tools
    }
}

/// Resolve a single group with a fresh visiting set.
pub fn resolve_group(name: &str, groups: &GroupMap) -> Vec<String> {
    GroupResolver::new(groups).resolve(name)
}
