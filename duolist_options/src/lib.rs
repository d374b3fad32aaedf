// Copyright 2026 the Duolist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Duolist Options: the hierarchical option catalog for dual-listbox widgets.
//!
//! A dual listbox renders one caller-supplied catalog of options in two list
//! controls ("available" and "selected"). This crate defines that catalog and
//! the traversal primitives every other Duolist crate builds on:
//!
//! - [`OptionNode`]: an explicit sum type over [`LeafOption`] (a selectable
//!   value/label pair) and [`GroupOption`] (a labeled container of child
//!   options that contributes no value of its own).
//! - [`flatten_values`]: depth-first, left-to-right traversal emitting each
//!   leaf's value. This order is the *catalog order* used whenever the
//!   selected list is not rendered in selection order.
//! - [`flatten_leaves`]: the same traversal, keeping the full leaf nodes.
//! - [`value_map`]: a value → leaf index for re-attaching labels and
//!   disabled/title metadata to a bare value.
//!
//! The value type `V` is caller-chosen: anything with equality works (strings
//! and integers in practice, but any `Clone + PartialEq` type is fine; a hash
//! map is only built where `Eq + Hash` is also available). The label lives on
//! the leaf, so no separate accessor functions are needed.
//!
//! ## Minimal example
//!
//! ```rust
//! use duolist_options::{GroupOption, LeafOption, OptionNode, flatten_values};
//!
//! let catalog = vec![
//!     OptionNode::leaf(LeafOption::new("luna", "Moon")),
//!     OptionNode::group(GroupOption::new(
//!         "Mars",
//!         vec![
//!             OptionNode::leaf(LeafOption::new("phobos", "Phobos")),
//!             OptionNode::leaf(LeafOption::new("deimos", "Deimos")),
//!         ],
//!     )),
//! ];
//!
//! // Groups contribute only their children's values, never one of their own.
//! assert_eq!(flatten_values(&catalog), vec!["luna", "phobos", "deimos"]);
//! ```
//!
//! Well-formedness of the catalog (every node is a leaf xor a group, leaves
//! carry a value) is guaranteed by construction here; duplicate leaf values
//! across the tree are allowed and are given meaning by the selection and
//! filter crates.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

/// A selectable option: a value, a display label, and optional metadata.
///
/// `disabled` leaves still render (hosts typically grey them out) but are
/// never moved by bulk actions, and a disabled leaf that is already selected
/// stays selected through "move all to available".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafOption<V> {
    /// The value this option contributes to the flat selection.
    pub value: V,
    /// Human-readable label shown in the list control.
    pub label: String,
    /// Whether this option is excluded from user-driven moves.
    pub disabled: bool,
    /// Optional tooltip/title text.
    pub title: Option<String>,
}

impl<V> LeafOption<V> {
    /// Creates an enabled leaf with no title.
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
            title: None,
        }
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the title text.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A labeled container of child options.
///
/// Groups nest arbitrarily (shallow nesting in practice) and carry no value
/// of their own; traversals only ever emit their descendants' leaves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupOption<V> {
    /// Heading label shown above the group's children.
    pub label: String,
    /// Child leaf or nested group options.
    pub children: Vec<OptionNode<V>>,
    /// Whether the whole group is excluded from user-driven moves.
    pub disabled: bool,
    /// Optional tooltip/title text.
    pub title: Option<String>,
}

impl<V> GroupOption<V> {
    /// Creates an enabled group with no title.
    pub fn new(label: impl Into<String>, children: Vec<OptionNode<V>>) -> Self {
        Self {
            label: label.into(),
            children,
            disabled: false,
            title: None,
        }
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the title text.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A node in the option catalog: a leaf xor a group, by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionNode<V> {
    /// A selectable value/label pair with no children.
    Leaf(LeafOption<V>),
    /// A labeled container of child options.
    Group(GroupOption<V>),
}

impl<V> OptionNode<V> {
    /// Wraps a leaf.
    pub fn leaf(leaf: LeafOption<V>) -> Self {
        Self::Leaf(leaf)
    }

    /// Wraps a group.
    pub fn group(group: GroupOption<V>) -> Self {
        Self::Group(group)
    }

    /// The display label of this node (leaf label or group heading).
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.label,
            Self::Group(group) => &group.label,
        }
    }

    /// The leaf payload, if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&LeafOption<V>> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Group(_) => None,
        }
    }

    /// The group payload, if this node is a group.
    pub fn as_group(&self) -> Option<&GroupOption<V>> {
        match self {
            Self::Leaf(_) => None,
            Self::Group(group) => Some(group),
        }
    }
}

/// Collects every leaf value in depth-first, left-to-right (catalog) order.
pub fn flatten_values<V: Clone>(tree: &[OptionNode<V>]) -> Vec<V> {
    let mut values = Vec::new();
    visit_leaves(tree, &mut |leaf| values.push(leaf.value.clone()));
    values
}

/// Collects every leaf node in depth-first, left-to-right (catalog) order.
pub fn flatten_leaves<V>(tree: &[OptionNode<V>]) -> Vec<&LeafOption<V>> {
    let mut leaves = Vec::new();
    visit_leaves(tree, &mut |leaf| leaves.push(leaf));
    leaves
}

/// Number of leaves in the catalog.
pub fn count_leaves<V>(tree: &[OptionNode<V>]) -> usize {
    let mut count = 0;
    visit_leaves(tree, &mut |_| count += 1);
    count
}

/// Builds a value → leaf index over the catalog.
///
/// Entries are inserted in catalog order, so when the same value occurs at
/// multiple tree positions the rightmost/deepest leaf wins. Duplicate-aware
/// callers do not rely on unique lookup by value; they re-derive presentation
/// data by position instead.
pub fn value_map<V: Eq + Hash>(tree: &[OptionNode<V>]) -> HashMap<&V, &LeafOption<V>> {
    let mut map = HashMap::new();
    visit_leaves(tree, &mut |leaf| {
        map.insert(&leaf.value, leaf);
    });
    map
}

/// Depth-first, left-to-right leaf visitor shared by the flatten helpers.
fn visit_leaves<'t, V>(tree: &'t [OptionNode<V>], visit: &mut impl FnMut(&'t LeafOption<V>)) {
    for node in tree {
        match node {
            OptionNode::Leaf(leaf) => visit(leaf),
            OptionNode::Group(group) => visit_leaves(&group.children, visit),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn catalog() -> Vec<OptionNode<&'static str>> {
        vec![
            OptionNode::leaf(LeafOption::new("luna", "Moon")),
            OptionNode::group(GroupOption::new(
                "Mars",
                vec![
                    OptionNode::leaf(LeafOption::new("phobos", "Phobos")),
                    OptionNode::leaf(LeafOption::new("deimos", "Deimos")),
                ],
            )),
        ]
    }

    #[test]
    fn flatten_emits_leaves_in_catalog_order() {
        assert_eq!(flatten_values(&catalog()), vec!["luna", "phobos", "deimos"]);
    }

    #[test]
    fn flatten_recurses_nested_groups() {
        let tree = vec![OptionNode::group(GroupOption::new(
            "Outer",
            vec![
                OptionNode::group(GroupOption::new(
                    "Inner",
                    vec![OptionNode::leaf(LeafOption::new(1, "one"))],
                )),
                OptionNode::leaf(LeafOption::new(2, "two")),
            ],
        ))];
        assert_eq!(flatten_values(&tree), vec![1, 2]);
        assert_eq!(count_leaves(&tree), 2);
    }

    #[test]
    fn flatten_of_empty_tree_is_empty() {
        let tree: Vec<OptionNode<u32>> = vec![];
        assert!(flatten_values(&tree).is_empty());
        assert!(flatten_leaves(&tree).is_empty());
        assert_eq!(count_leaves(&tree), 0);
    }

    #[test]
    fn value_map_looks_up_leaf_metadata() {
        let tree = catalog();
        let map = value_map(&tree);
        assert_eq!(map[&"phobos"].label, "Phobos");
        assert!(map.get(&"europa").is_none());
    }

    #[test]
    fn value_map_last_duplicate_wins() {
        let tree = vec![
            OptionNode::leaf(LeafOption::new("x", "first")),
            OptionNode::group(GroupOption::new(
                "G",
                vec![OptionNode::leaf(LeafOption::new("x", "second"))],
            )),
        ];
        let map = value_map(&tree);
        assert_eq!(map[&"x"].label, "second");
    }

    #[test]
    fn node_label_covers_both_variants() {
        let tree = catalog();
        assert_eq!(tree[0].label(), "Moon");
        assert_eq!(tree[1].label(), "Mars");
        assert!(tree[0].as_leaf().is_some());
        assert!(tree[0].as_group().is_none());
        assert!(tree[1].as_group().is_some());
    }

    #[test]
    fn builder_helpers_set_metadata() {
        let leaf = LeafOption::new("io", "Io").disabled(true).title("volcanic");
        assert!(leaf.disabled);
        assert_eq!(leaf.title.as_deref(), Some("volcanic"));

        let group: GroupOption<&str> = GroupOption::new("Jupiter", vec![]).disabled(true);
        assert!(group.disabled);
    }
}
