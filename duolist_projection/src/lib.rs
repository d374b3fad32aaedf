// Copyright 2026 the Duolist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Duolist Projection: packaging a computed selection for the host.
//!
//! Internally the selection engine works on a flat value sequence. Hosts
//! consume it in one of two shapes, per [`Projection`]:
//!
//! - [`Projection::Values`]: the flat sequence verbatim.
//! - [`Projection::Tree`]: an array mirroring the original catalog
//!   hierarchy, restricted to selected values — group wrappers are
//!   reconstructed around the selected children, in catalog order rather
//!   than selection order. A value that occurs at several tree positions
//!   matches every one of them (the mapping is deliberately
//!   many-candidate).
//!
//! Alongside either shape, a [`Change`] carries the side channel hosts use
//! to distinguish "final selection state" from "what triggered this
//! change": the options the user had highlighted when the action fired,
//! always as flat [`MarkedOption`] label/value pairs (never re-grouped),
//! plus which list the action came from.
//!
//! ## Minimal example
//!
//! ```rust
//! use duolist_options::{GroupOption, LeafOption, OptionNode};
//! use duolist_projection::{ProjectedSelection, Projection, project_selection};
//!
//! let catalog = vec![OptionNode::group(GroupOption::new(
//!     "Mars",
//!     vec![
//!         OptionNode::leaf(LeafOption::new("phobos", "Phobos")),
//!         OptionNode::leaf(LeafOption::new("deimos", "Deimos")),
//!     ],
//! ))];
//!
//! let projected = project_selection(&catalog, &["deimos"], Projection::Tree);
//! let ProjectedSelection::Tree(nodes) = projected else {
//!     unreachable!()
//! };
//! // The group wrapper is rebuilt around the one selected child.
//! let group = nodes[0].as_group().unwrap();
//! assert_eq!(group.label, "Mars");
//! assert_eq!(group.children.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use duolist_options::{GroupOption, OptionNode, value_map};
use duolist_selection::{ListSide, MarkedItem};

/// External shape of the selection payload.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Deliver the flat value sequence as-is.
    #[default]
    Values,
    /// Deliver the original hierarchy restricted to selected values.
    Tree,
}

/// A selection packaged in the host-facing shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectedSelection<V> {
    /// Flat value sequence (selection order).
    Values(Vec<V>),
    /// Reconstructed catalog subtree (catalog order).
    Tree(Vec<OptionNode<V>>),
}

/// One highlighted option in the change side channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkedOption<V> {
    /// The highlighted option's value.
    pub value: V,
    /// Its display label, re-attached through the catalog's value map.
    pub label: String,
}

/// A complete change notification for the host.
///
/// Delivered by action methods in place of a callback; the host applies
/// `selection` to its own state and may inspect `marked`/`side` to see what
/// the user actually touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change<V> {
    /// The proposed new selection, in the configured shape.
    pub selection: ProjectedSelection<V>,
    /// The options the user had highlighted when the action fired.
    pub marked: Vec<MarkedOption<V>>,
    /// Which list control the action came from.
    pub side: ListSide,
}

/// Projects a flat selection into the configured host-facing shape.
pub fn project_selection<V: Clone + PartialEq>(
    tree: &[OptionNode<V>],
    selection: &[V],
    projection: Projection,
) -> ProjectedSelection<V> {
    match projection {
        Projection::Values => ProjectedSelection::Values(selection.to_vec()),
        Projection::Tree => ProjectedSelection::Tree(reconstruct_tree(tree, selection)),
    }
}

/// Rebuilds the catalog hierarchy restricted to `selection` membership.
///
/// Iterates the original tree, so output order is catalog order; group
/// wrappers survive only around at least one selected descendant, with their
/// metadata cloned verbatim.
pub fn reconstruct_tree<V: Clone + PartialEq>(
    tree: &[OptionNode<V>],
    selection: &[V],
) -> Vec<OptionNode<V>> {
    let mut out = Vec::new();
    for node in tree {
        match node {
            OptionNode::Leaf(leaf) => {
                if selection.contains(&leaf.value) {
                    out.push(OptionNode::Leaf(leaf.clone()));
                }
            }
            OptionNode::Group(group) => {
                let children = reconstruct_tree(&group.children, selection);
                if !children.is_empty() {
                    out.push(OptionNode::Group(GroupOption {
                        label: group.label.clone(),
                        children,
                        disabled: group.disabled,
                        title: group.title.clone(),
                    }));
                }
            }
        }
    }
    out
}

/// Projects freshly marked items into the flat side-channel payload.
///
/// Labels are re-attached through the catalog's value map; a marked value
/// absent from the catalog keeps an empty label rather than dropping the
/// entry, so the payload length always matches what the user highlighted.
pub fn project_marked<V: Clone + Eq + Hash>(
    tree: &[OptionNode<V>],
    marked: &[MarkedItem<V>],
) -> Vec<MarkedOption<V>> {
    let labels = value_map(tree);
    marked
        .iter()
        .map(|item| MarkedOption {
            value: item.value.clone(),
            label: labels
                .get(&item.value)
                .map(|leaf| leaf.label.clone())
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use duolist_options::LeafOption;

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
    fn values_projection_is_the_flat_sequence() {
        let projected = project_selection(&catalog(), &["deimos", "luna"], Projection::Values);
        assert_eq!(
            projected,
            ProjectedSelection::Values(vec!["deimos", "luna"])
        );
    }

    #[test]
    fn tree_projection_follows_catalog_order_not_selection_order() {
        let projected = project_selection(&catalog(), &["deimos", "luna"], Projection::Tree);
        let ProjectedSelection::Tree(nodes) = projected else {
            panic!("expected tree projection");
        };
        // Catalog order: the ungrouped Moon first, then the Mars group.
        assert_eq!(nodes[0].label(), "Moon");
        let group = nodes[1].as_group().unwrap();
        assert_eq!(group.label, "Mars");
        assert_eq!(group.children.len(), 1);
        assert_eq!(group.children[0].label(), "Deimos");
    }

    #[test]
    fn tree_projection_drops_groups_with_no_selected_descendants() {
        let nodes = reconstruct_tree(&catalog(), &["luna"]);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label(), "Moon");
    }

    #[test]
    fn duplicated_values_match_every_catalog_position() {
        let tree = vec![
            OptionNode::leaf(LeafOption::new("x", "first")),
            OptionNode::group(GroupOption::new(
                "G",
                vec![OptionNode::leaf(LeafOption::new("x", "second"))],
            )),
        ];
        let nodes = reconstruct_tree(&tree, &["x"]);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].label(), "first");
        assert_eq!(nodes[1].as_group().unwrap().children[0].label(), "second");
    }

    #[test]
    fn empty_selection_projects_to_empty_shapes() {
        assert_eq!(
            project_selection(&catalog(), &[], Projection::Values),
            ProjectedSelection::Values(vec![])
        );
        assert!(reconstruct_tree(&catalog(), &[]).is_empty());
    }

    #[test]
    fn marked_payload_reattaches_labels_flat() {
        let marked = vec![MarkedItem::new(1, "phobos"), MarkedItem::new(0, "luna")];
        let payload = project_marked(&catalog(), &marked);
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].label, "Phobos");
        assert_eq!(payload[1].label, "Moon");
    }

    #[test]
    fn marked_payload_keeps_unknown_values_with_empty_labels() {
        let payload = project_marked(&catalog(), &[MarkedItem::new(0, "europa")]);
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].value, "europa");
        assert!(payload[0].label.is_empty());
    }
}
