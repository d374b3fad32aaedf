// Copyright 2026 the Duolist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free-text predicates applied to option labels.

use alloc::string::String;

use duolist_options::{GroupOption, LeafOption};

/// Decides whether an option satisfies a free-text query.
///
/// Leaves and group headings are consulted separately: custom
/// implementations can match a leaf against its value or title as well as
/// its label, while a matching group heading reveals all of the group's
/// descendants.
///
/// Implementations must be pure: the filter pass promises to consult the
/// predicate at most once per structurally admitted leaf, and hosts may
/// cache results across renders.
pub trait FilterPredicate<V> {
    /// Returns `true` if `leaf` satisfies `query`.
    fn leaf_matches(&self, leaf: &LeafOption<V>, query: &str) -> bool;

    /// Returns `true` if the group's heading satisfies `query`.
    fn group_matches(&self, group: &GroupOption<V>, query: &str) -> bool;
}

/// The default predicate: case-insensitive literal substring match on the
/// label.
///
/// The query is treated as plain text, never as pattern syntax, so
/// metacharacter-looking input such as `"(mars"` matches the label
/// `"Phobos (Mars)"`. An empty query matches everything.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SubstringMatch;

impl<V> FilterPredicate<V> for SubstringMatch {
    fn leaf_matches(&self, leaf: &LeafOption<V>, query: &str) -> bool {
        contains_ignore_case(&leaf.label, query)
    }

    fn group_matches(&self, group: &GroupOption<V>, query: &str) -> bool {
        contains_ignore_case(&group.label, query)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack: String = haystack.to_lowercase();
    let needle: String = needle.to_lowercase();
    haystack.contains(needle.as_str())
}
