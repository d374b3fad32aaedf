// Copyright 2026 the Duolist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recursive filter pass over an option tree.

use alloc::vec::Vec;

use duolist_options::{GroupOption, LeafOption, OptionNode};
use smallvec::SmallVec;

use crate::predicate::FilterPredicate;

/// Occurrence indices attached to an admitted leaf.
///
/// Selections are short in practice and a value rarely occurs more than a
/// handful of times, so these lists stay inline.
pub type Occurrences = SmallVec<[usize; 4]>;

/// Verdict of a structural filterer for one leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The leaf does not belong in this view.
    Reject,
    /// The leaf belongs in this view once, with no occurrence tag.
    Admit,
    /// The leaf belongs in this view once *per listed occurrence*, each
    /// emitted entry tagged with its position so duplicate selections stay
    /// individually addressable. An empty list admits nothing.
    AdmitOccurrences(Occurrences),
}

/// A leaf that survived a filter pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredLeaf<'t, V> {
    /// The originating catalog leaf.
    pub option: &'t LeafOption<V>,
    /// Position of this entry within the flat selection, when the view was
    /// built from an occurrence-tagging filterer.
    pub order: Option<usize>,
}

/// A group with at least one surviving descendant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredGroup<'t, V> {
    /// The originating catalog group; label/disabled/title read from here.
    pub group: &'t GroupOption<V>,
    /// Surviving children, in catalog order.
    pub children: Vec<FilteredNode<'t, V>>,
}

/// A node of the pruned view tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilteredNode<'t, V> {
    /// A surviving leaf.
    Leaf(FilteredLeaf<'t, V>),
    /// A surviving group.
    Group(FilteredGroup<'t, V>),
}

/// Prunes `tree` down to the nodes one list control should display.
///
/// `filterer` is the structural gate and runs first; `predicate` is the
/// free-text gate and runs only for structurally admitted leaves, at most
/// once per leaf. `force_allow` bypasses the text gate for this subtree; it
/// is set internally once a group heading matches `query`, and hosts set it
/// at the root to disable text filtering altogether.
///
/// Group metadata is preserved by reference; groups with no surviving
/// descendants are dropped.
pub fn filter_options<'t, V, F, P>(
    tree: &'t [OptionNode<V>],
    filterer: &mut F,
    query: &str,
    predicate: &P,
    force_allow: bool,
) -> Vec<FilteredNode<'t, V>>
where
    F: FnMut(&'t LeafOption<V>) -> Admission,
    P: FilterPredicate<V>,
{
    let mut out = Vec::new();
    for node in tree {
        match node {
            OptionNode::Group(group) => {
                let reveal = force_allow || predicate.group_matches(group, query);
                let children = filter_options(&group.children, filterer, query, predicate, reveal);
                if !children.is_empty() {
                    out.push(FilteredNode::Group(FilteredGroup { group, children }));
                }
            }
            OptionNode::Leaf(leaf) => {
                // Structural gate first: the text predicate is never consulted
                // for leaves the business logic already excluded.
                let occurrences = match filterer(leaf) {
                    Admission::Reject => continue,
                    Admission::Admit => None,
                    Admission::AdmitOccurrences(indices) => Some(indices),
                };
                if !(force_allow || predicate.leaf_matches(leaf, query)) {
                    continue;
                }
                match occurrences {
                    None => out.push(FilteredNode::Leaf(FilteredLeaf {
                        option: leaf,
                        order: None,
                    })),
                    Some(indices) => {
                        for index in indices {
                            out.push(FilteredNode::Leaf(FilteredLeaf {
                                option: leaf,
                                order: Some(index),
                            }));
                        }
                    }
                }
            }
        }
    }
    out
}

/// Collects the surviving leaves of a view in display order.
pub fn filtered_leaves<'v, 't, V>(view: &'v [FilteredNode<'t, V>]) -> Vec<&'v FilteredLeaf<'t, V>> {
    let mut leaves = Vec::new();
    collect_leaves(view, &mut leaves);
    leaves
}

/// Collects the surviving leaf labels of a view in display order.
pub fn filtered_labels<'v, V>(view: &'v [FilteredNode<'_, V>]) -> Vec<&'v str> {
    filtered_leaves(view)
        .into_iter()
        .map(|leaf| leaf.option.label.as_str())
        .collect()
}

/// Number of leaf entries in a view (occurrence entries counted separately).
pub fn count_filtered_leaves<V>(view: &[FilteredNode<'_, V>]) -> usize {
    view.iter()
        .map(|node| match node {
            FilteredNode::Leaf(_) => 1,
            FilteredNode::Group(group) => count_filtered_leaves(&group.children),
        })
        .sum()
}

fn collect_leaves<'v, 't, V>(
    view: &'v [FilteredNode<'t, V>],
    leaves: &mut Vec<&'v FilteredLeaf<'t, V>>,
) {
    for node in view {
        match node {
            FilteredNode::Leaf(leaf) => leaves.push(leaf),
            FilteredNode::Group(group) => collect_leaves(&group.children, leaves),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use core::cell::Cell;

    use duolist_options::GroupOption;
    use smallvec::smallvec;

    use super::*;
    use crate::predicate::SubstringMatch;

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

    /// Predicate wrapper that counts how many nodes it was consulted for.
    struct Counting<'c> {
        calls: &'c Cell<usize>,
    }

    impl<V> FilterPredicate<V> for Counting<'_> {
        fn leaf_matches(&self, leaf: &LeafOption<V>, query: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            SubstringMatch.leaf_matches(leaf, query)
        }

        fn group_matches(&self, group: &GroupOption<V>, query: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            SubstringMatch.group_matches(group, query)
        }
    }

    #[test]
    fn text_gate_prunes_non_matching_leaves() {
        let tree = catalog();
        let view = filter_options(&tree, &mut |_| Admission::Admit, "moo", &SubstringMatch, false);
        assert_eq!(filtered_labels(&view), vec!["Moon"]);
    }

    #[test]
    fn groups_without_survivors_are_dropped() {
        let tree = catalog();
        let view = filter_options(
            &tree,
            &mut |leaf| {
                if leaf.value == "luna" {
                    Admission::Admit
                } else {
                    Admission::Reject
                }
            },
            "",
            &SubstringMatch,
            false,
        );
        assert_eq!(view.len(), 1);
        assert!(matches!(&view[0], FilteredNode::Leaf(leaf) if leaf.option.value == "luna"));
    }

    #[test]
    fn matching_group_heading_reveals_children() {
        let tree = catalog();
        let view = filter_options(&tree, &mut |_| Admission::Admit, "mars", &SubstringMatch, false);
        assert_eq!(filtered_labels(&view), vec!["Phobos", "Deimos"]);
        // The group wrapper itself survives with its metadata intact.
        assert!(matches!(&view[0], FilteredNode::Group(group) if group.group.label == "Mars"));
    }

    #[test]
    fn revealed_children_still_face_the_structural_gate() {
        let tree = catalog();
        let view = filter_options(
            &tree,
            &mut |leaf| {
                if leaf.value == "deimos" {
                    Admission::Reject
                } else {
                    Admission::Admit
                }
            },
            "mars",
            &SubstringMatch,
            false,
        );
        assert_eq!(filtered_labels(&view), vec!["Phobos"]);
    }

    #[test]
    fn occurrence_verdicts_emit_one_entry_per_position() {
        let tree = vec![OptionNode::leaf(LeafOption::new("luna", "Moon"))];
        let view = filter_options(
            &tree,
            &mut |_| Admission::AdmitOccurrences(smallvec![0, 2]),
            "",
            &SubstringMatch,
            false,
        );
        let leaves = filtered_leaves(&view);
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].order, Some(0));
        assert_eq!(leaves[1].order, Some(2));
        assert_eq!(count_filtered_leaves(&view), 2);
    }

    #[test]
    fn empty_occurrence_list_admits_nothing() {
        let tree = vec![OptionNode::leaf(LeafOption::new("luna", "Moon"))];
        let view = filter_options(
            &tree,
            &mut |_| Admission::AdmitOccurrences(Occurrences::new()),
            "",
            &SubstringMatch,
            false,
        );
        assert!(view.is_empty());
    }

    #[test]
    fn predicate_runs_once_per_admitted_leaf_and_never_for_rejects() {
        let tree = catalog();
        let calls = Cell::new(0);
        let predicate = Counting { calls: &calls };
        let view = filter_options(
            &tree,
            &mut |leaf| {
                if leaf.value == "deimos" {
                    Admission::Reject
                } else {
                    Admission::Admit
                }
            },
            "o",
            &SubstringMatch,
            false,
        );
        // Recount with the instrumented predicate.
        calls.set(0);
        let counted_view = filter_options(
            &tree,
            &mut |leaf| {
                if leaf.value == "deimos" {
                    Admission::Reject
                } else {
                    Admission::Admit
                }
            },
            "o",
            &predicate,
            false,
        );
        assert_eq!(filtered_labels(&view), filtered_labels(&counted_view));
        // One call for the group heading, one each for the two admitted
        // leaves; none for the rejected leaf.
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn force_allow_bypasses_the_text_gate() {
        let tree = catalog();
        let view = filter_options(
            &tree,
            &mut |_| Admission::Admit,
            "no such label",
            &SubstringMatch,
            true,
        );
        assert_eq!(filtered_labels(&view), vec!["Moon", "Phobos", "Deimos"]);
    }

    #[test]
    fn empty_tree_yields_empty_view() {
        let tree: Vec<OptionNode<&str>> = vec![];
        let view = filter_options(&tree, &mut |_| Admission::Admit, "", &SubstringMatch, false);
        assert!(view.is_empty());
        assert_eq!(count_filtered_leaves(&view), 0);
    }
}
