// Copyright 2026 the Duolist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Duolist Selection: pure state transitions over a flat selection sequence.
//!
//! The only persistent state of a dual listbox is an ordered sequence of
//! values — the items currently in the "selected" list. This crate provides
//! the transition functions that compute the *next* sequence for each user
//! action. Every function is total and synchronous, never mutates its
//! inputs, and returns the unchanged selection for empty/no-op inputs
//! instead of panicking.
//!
//! - [`toggle`]: move individually marked items across the two lists.
//!   Duplicate selections are addressed by occurrence position, so removing
//!   "the second Moon" never touches the first.
//! - [`move_all_to_selected`] / [`move_all_to_available`]: bulk moves.
//!   Disabled options never move: a disabled available option is never
//!   appended, and a disabled selected option survives a bulk clear.
//! - [`reorder`]: nudge or send marked items within the selected list, per
//!   [`ReorderIntent`]. Marked items move as a block, one slot per step,
//!   without passing each other, and packing against an edge is a no-op.
//!
//! Inputs come as the current selection, the option catalog, and the
//! [`MarkedItem`] pairs the user had highlighted in the raw control when the
//! action fired.
//!
//! ## Minimal example
//!
//! ```rust
//! use duolist_options::{LeafOption, OptionNode};
//! use duolist_selection::{move_all_to_available, move_all_to_selected};
//!
//! let catalog = vec![
//!     OptionNode::leaf(LeafOption::new("luna", "Moon")),
//!     OptionNode::leaf(LeafOption::new("phobos", "Phobos")),
//! ];
//!
//! let selected = move_all_to_selected(&[], &catalog, None);
//! assert_eq!(selected, vec!["luna", "phobos"]);
//!
//! let cleared = move_all_to_available(&selected, &catalog);
//! assert!(cleared.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use duolist_options::{LeafOption, OptionNode};

/// Which of the two list controls an item or action belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListSide {
    /// The left/"available" list.
    Available,
    /// The right/"selected" list.
    Selected,
}

/// One item the user had highlighted in a raw list control when an action
/// fired.
///
/// `position` is the item's index within the list it was highlighted in: for
/// the selected list this is the occurrence index within the flat selection,
/// which keeps duplicate values individually addressable. Marked items are
/// derived fresh from the live control per action and never cached across
/// renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkedItem<V> {
    /// Index within the originating list control.
    pub position: usize,
    /// The highlighted option's value.
    pub value: V,
}

impl<V> MarkedItem<V> {
    /// Bundles a position/value pair.
    pub fn new(position: usize, value: V) -> Self {
        Self { position, value }
    }
}

/// Direction of a reorder action over the selected list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReorderIntent {
    /// Swap each marked item with its predecessor.
    Up,
    /// Swap each marked item with its successor.
    Down,
    /// Move the marked items, in their relative order, to the front.
    Top,
    /// Move the marked items, in their relative order, to the back.
    Bottom,
}

/// Computes the selection after toggling `marked` items across the lists.
///
/// Per marked item: if its value is present in the selection and either
/// duplicates are disabled or the item came from the selected list, one
/// occurrence is removed — the exact marked occurrence when the position
/// still matches, the first matching occurrence otherwise. In every other
/// case the value is appended at the end.
///
/// With duplicates enabled, toggling from the available side therefore
/// appends a further occurrence, while toggling from the selected side
/// always removes exactly the marked occurrence.
pub fn toggle<V: Clone + PartialEq>(
    selection: &[V],
    marked: &[MarkedItem<V>],
    from: ListSide,
    allow_duplicates: bool,
) -> Vec<V> {
    // Removals are by original index, so tombstone the slots instead of
    // splicing; appends collect at the end in marked order.
    let mut slots: Vec<Option<V>> = selection.iter().cloned().map(Some).collect();
    let mut appends: Vec<V> = Vec::new();

    for item in marked {
        let present = slots.iter().flatten().any(|value| *value == item.value);
        if present && (!allow_duplicates || from == ListSide::Selected) {
            remove_occurrence(&mut slots, item);
        } else {
            appends.push(item.value.clone());
        }
    }

    let mut next: Vec<V> = slots.into_iter().flatten().collect();
    next.extend(appends);
    next
}

/// Removes the marked occurrence from `slots`.
///
/// Prefers the slot at the marked position when it still holds the marked
/// value; positions can go stale between mark and act (or refer to the other
/// list entirely), in which case the first live occurrence is removed.
fn remove_occurrence<V: PartialEq>(slots: &mut [Option<V>], item: &MarkedItem<V>) {
    if let Some(slot) = slots.get_mut(item.position) {
        if slot.as_ref() == Some(&item.value) {
            *slot = None;
            return;
        }
    }
    if let Some(slot) = slots
        .iter_mut()
        .find(|slot| slot.as_ref() == Some(&item.value))
    {
        *slot = None;
    }
}

/// Computes the selection after "move all to selected".
///
/// Appends, in catalog order, the value of every enabled leaf that passes
/// the `restriction` allow-list and is not already present in the result.
/// Leaves inside disabled groups count as disabled. Idempotent: a second
/// invocation returns the same sequence.
pub fn move_all_to_selected<V: Clone + PartialEq>(
    selection: &[V],
    tree: &[OptionNode<V>],
    restriction: Option<&[V]>,
) -> Vec<V> {
    let mut next = selection.to_vec();
    each_enabled_leaf(tree, false, &mut |leaf| {
        if let Some(allowed) = restriction {
            if !allowed.contains(&leaf.value) {
                return;
            }
        }
        if !next.contains(&leaf.value) {
            next.push(leaf.value.clone());
        }
    });
    next
}

/// Computes the selection after "move all to available".
///
/// Everything is removed except values whose originating leaf is disabled
/// (directly or through a disabled ancestor group); those are stuck in the
/// selected list. Values with no originating leaf in the catalog are
/// dropped.
pub fn move_all_to_available<V: Clone + PartialEq>(
    selection: &[V],
    tree: &[OptionNode<V>],
) -> Vec<V> {
    let mut stuck: Vec<&V> = Vec::new();
    each_leaf(tree, false, &mut |leaf, disabled| {
        if disabled {
            stuck.push(&leaf.value);
        }
    });
    selection
        .iter()
        .filter(|value| stuck.contains(value))
        .cloned()
        .collect()
}

/// Computes the selection after a reorder action.
///
/// `positions` are the marked items' indices within the selection, as
/// highlighted in the selected list. Out-of-range positions are ignored and
/// an empty marked set is a no-op.
///
/// [`ReorderIntent::Up`]/[`ReorderIntent::Down`] apply one neighbor swap per
/// marked item, but only when the marked block is not already packed against
/// the relevant edge: the whole pass is skipped when the last marked index
/// fits inside the first `count` slots (Up), or the first marked index sits
/// inside the last `count` slots (Down). This batch-level check keeps
/// scattered marked items moving as a unit without leapfrogging.
pub fn reorder<V: Clone>(selection: &[V], positions: &[usize], intent: ReorderIntent) -> Vec<V> {
    let len = selection.len();
    let mut marked: Vec<usize> = positions.iter().copied().filter(|&p| p < len).collect();
    marked.sort_unstable();
    marked.dedup();
    if marked.is_empty() {
        return selection.to_vec();
    }

    let mut next = selection.to_vec();
    match intent {
        ReorderIntent::Up => {
            // Skip when the block is already packed against the top.
            if marked[marked.len() - 1] > marked.len() - 1 {
                for &index in &marked {
                    if index > 0 {
                        next.swap(index, index - 1);
                    }
                }
            }
        }
        ReorderIntent::Down => {
            // Skip when the block is already packed against the bottom.
            if marked[0] < len - marked.len() {
                for &index in marked.iter().rev() {
                    if index + 1 < len {
                        next.swap(index, index + 1);
                    }
                }
            }
        }
        ReorderIntent::Top | ReorderIntent::Bottom => {
            let mut chosen = Vec::with_capacity(marked.len());
            let mut rest = Vec::with_capacity(len - marked.len());
            for (index, value) in next.into_iter().enumerate() {
                if marked.binary_search(&index).is_ok() {
                    chosen.push(value);
                } else {
                    rest.push(value);
                }
            }
            next = if intent == ReorderIntent::Top {
                chosen.extend(rest);
                chosen
            } else {
                rest.extend(chosen);
                rest
            };
        }
    }
    next
}

/// Visits every leaf along with its effective disabled state (own flag or an
/// ancestor group's).
fn each_leaf<'t, V>(
    tree: &'t [OptionNode<V>],
    inherited_disabled: bool,
    visit: &mut impl FnMut(&'t LeafOption<V>, bool),
) {
    for node in tree {
        match node {
            OptionNode::Leaf(leaf) => visit(leaf, inherited_disabled || leaf.disabled),
            OptionNode::Group(group) => {
                each_leaf(&group.children, inherited_disabled || group.disabled, visit);
            }
        }
    }
}

fn each_enabled_leaf<'t, V>(
    tree: &'t [OptionNode<V>],
    inherited_disabled: bool,
    visit: &mut impl FnMut(&'t LeafOption<V>),
) {
    each_leaf(tree, inherited_disabled, &mut |leaf, disabled| {
        if !disabled {
            visit(leaf);
        }
    });
}
