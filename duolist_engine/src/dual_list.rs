// Copyright 2026 the Duolist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dual-listbox controller: views, actions, and widget-local state.

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use duolist_filter::{
    Admission, FilterPredicate, FilterState, FilteredLeaf, FilteredNode, Occurrences,
    SubstringMatch, filter_options,
};
use duolist_options::{LeafOption, OptionNode, value_map};
use duolist_projection::{Change, project_marked, project_selection};
use duolist_selection::{
    ListSide, MarkedItem, ReorderIntent, move_all_to_available, move_all_to_selected, reorder,
    toggle,
};

use crate::config::DualListConfig;

/// Direction of a bulk or targeted move between the two lists.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Move from the available list into the selection.
    ToSelected,
    /// Move from the selection back to the available list.
    ToAvailable,
}

/// Controller for a dual-listbox widget.
///
/// This type:
/// - computes the pruned per-side views each render,
/// - runs the selection transitions for user actions and packages each
///   result as a [`Change`],
/// - stores the only widget-owned state: per-side highlights and, in
///   uncontrolled mode, free-text filter queries.
///
/// It does *not* own the option catalog or the selection; both are passed
/// into every call and treated as immutable snapshots. It knows nothing of
/// markup or any UI framework; hosts wrap it and forward control events.
#[derive(Clone, Debug)]
pub struct DualListBox<V, P = SubstringMatch> {
    config: DualListConfig<V>,
    predicate: P,
    filter: FilterState,
    marked_available: Vec<MarkedItem<V>>,
    marked_selected: Vec<MarkedItem<V>>,
}

impl<V: Clone + Eq + Hash> DualListBox<V> {
    /// Creates a controller with the default substring text predicate.
    #[must_use]
    pub fn new(config: DualListConfig<V>) -> Self {
        Self::with_predicate(config, SubstringMatch)
    }
}

impl<V: Clone + Eq + Hash, P: FilterPredicate<V>> DualListBox<V, P> {
    /// Creates a controller with a custom free-text predicate.
    #[must_use]
    pub fn with_predicate(config: DualListConfig<V>, predicate: P) -> Self {
        Self {
            config,
            predicate,
            filter: FilterState::default(),
            marked_available: Vec::new(),
            marked_selected: Vec::new(),
        }
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &DualListConfig<V> {
        &self.config
    }

    /// The filter text currently applied to the views.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Records a filter text edit for one side.
    ///
    /// In uncontrolled mode the controller stores the new state and returns
    /// `None`. In controlled mode the controller stores nothing and returns
    /// the state the host should adopt; the views keep using whatever the
    /// host last pushed via [`Self::sync_filter`].
    pub fn set_filter(&mut self, side: ListSide, query: impl Into<String>) -> Option<FilterState> {
        let mut state = self.filter.clone();
        match side {
            ListSide::Available => state.available = query.into(),
            ListSide::Selected => state.selected = query.into(),
        }
        if self.config.controlled_filter {
            Some(state)
        } else {
            self.filter = state;
            None
        }
    }

    /// Adopts host-owned filter state (controlled mode).
    pub fn sync_filter(&mut self, state: FilterState) {
        self.filter = state;
    }

    /// The highlights currently mirrored for one side.
    pub fn marked(&self, side: ListSide) -> &[MarkedItem<V>] {
        match side {
            ListSide::Available => &self.marked_available,
            ListSide::Selected => &self.marked_selected,
        }
    }

    /// Mirrors the raw control's current highlights for one side.
    pub fn set_marked(&mut self, side: ListSide, items: Vec<MarkedItem<V>>) {
        *self.marked_slot(side) = items;
    }

    /// Drops the mirrored highlights for one side.
    pub fn clear_marked(&mut self, side: ListSide) {
        self.marked_slot(side).clear();
    }

    /// Computes what the available list should display.
    ///
    /// A leaf is structurally available when it passes the configured
    /// allow-list and, unless duplicates are permitted, is not currently
    /// selected. Disabled leaves still display. The side's filter text
    /// applies on top unless filtering is off.
    pub fn available_view<'t>(
        &self,
        tree: &'t [OptionNode<V>],
        selection: &[V],
    ) -> Vec<FilteredNode<'t, V>> {
        let restriction = self.config.available.as_deref();
        let allow_duplicates = self.config.allow_duplicates;
        filter_options(
            tree,
            &mut |leaf: &LeafOption<V>| {
                if let Some(allowed) = restriction {
                    if !allowed.contains(&leaf.value) {
                        return Admission::Reject;
                    }
                }
                if !allow_duplicates && selection.contains(&leaf.value) {
                    return Admission::Reject;
                }
                Admission::Admit
            },
            &self.filter.available,
            &self.predicate,
            !self.config.can_filter,
        )
    }

    /// Computes what the selected list should display.
    ///
    /// In catalog-order mode the option tree is filtered down to selected
    /// values, one entry per occurrence, each tagged with its position in
    /// the selection so duplicates stay individually addressable. In
    /// selection-order mode the selection itself is walked and leaf
    /// metadata is re-attached through the value map; hierarchy is dropped.
    /// Selected values with no originating leaf in the catalog are skipped.
    pub fn selected_view<'t>(
        &self,
        tree: &'t [OptionNode<V>],
        selection: &[V],
    ) -> Vec<FilteredNode<'t, V>> {
        if self.config.preserve_select_order {
            let map = value_map(tree);
            let mut out = Vec::new();
            for (position, value) in selection.iter().enumerate() {
                let Some(leaf) = map.get(value).copied() else {
                    continue;
                };
                if self.config.can_filter
                    && !self.predicate.leaf_matches(leaf, &self.filter.selected)
                {
                    continue;
                }
                out.push(FilteredNode::Leaf(FilteredLeaf {
                    option: leaf,
                    order: Some(position),
                }));
            }
            out
        } else {
            filter_options(
                tree,
                &mut |leaf: &LeafOption<V>| {
                    let occurrences: Occurrences = selection
                        .iter()
                        .enumerate()
                        .filter(|(_, value)| **value == leaf.value)
                        .map(|(position, _)| position)
                        .collect();
                    if occurrences.is_empty() {
                        Admission::Reject
                    } else {
                        Admission::AdmitOccurrences(occurrences)
                    }
                },
                &self.filter.selected,
                &self.predicate,
                !self.config.can_filter,
            )
        }
    }

    /// Moves the given freshly marked items across the lists.
    ///
    /// Marked items whose catalog leaf is disabled are skipped; the
    /// presentation shell normally filters those out, but the controller
    /// does not rely on it. The acting side's mirrored highlights are
    /// cleared, since the positions they point at may no longer exist.
    pub fn toggle_marked(
        &mut self,
        tree: &[OptionNode<V>],
        selection: &[V],
        marked: &[MarkedItem<V>],
        from: ListSide,
    ) -> Change<V> {
        let map = value_map(tree);
        let effective: Vec<MarkedItem<V>> = marked
            .iter()
            .filter(|item| map.get(&item.value).is_none_or(|leaf| !leaf.disabled))
            .cloned()
            .collect();
        let next = toggle(selection, &effective, from, self.config.allow_duplicates);
        let marked_payload = project_marked(tree, &effective);
        self.clear_marked(from);
        Change {
            selection: project_selection(tree, &next, self.config.projection),
            marked: marked_payload,
            side: from,
        }
    }

    /// Runs a bulk move in the given direction.
    ///
    /// To-selected appends every enabled, restriction-passing, unselected
    /// leaf in catalog order; to-available removes everything except
    /// disabled ("stuck") selections. The acting side's highlights are
    /// reported in the change payload and then cleared.
    pub fn move_all(
        &mut self,
        tree: &[OptionNode<V>],
        selection: &[V],
        direction: MoveDirection,
    ) -> Change<V> {
        let (next, side) = match direction {
            MoveDirection::ToSelected => (
                move_all_to_selected(selection, tree, self.config.available.as_deref()),
                ListSide::Available,
            ),
            MoveDirection::ToAvailable => {
                (move_all_to_available(selection, tree), ListSide::Selected)
            }
        };
        let acted = core::mem::take(self.marked_slot(side));
        Change {
            selection: project_selection(tree, &next, self.config.projection),
            marked: project_marked(tree, &acted),
            side,
        }
    }

    /// Reorders the marked items within the selected list.
    ///
    /// Only meaningful with selection-order preservation. Unlike moves,
    /// reorders keep the mirrored highlights: the same items are still
    /// present, one slot away.
    pub fn reorder_marked(
        &mut self,
        tree: &[OptionNode<V>],
        selection: &[V],
        marked: &[MarkedItem<V>],
        intent: ReorderIntent,
    ) -> Change<V> {
        let positions: Vec<usize> = marked.iter().map(|item| item.position).collect();
        let next = reorder(selection, &positions, intent);
        Change {
            selection: project_selection(tree, &next, self.config.projection),
            marked: project_marked(tree, marked),
            side: ListSide::Selected,
        }
    }

    fn marked_slot(&mut self, side: ListSide) -> &mut Vec<MarkedItem<V>> {
        match side {
            ListSide::Available => &mut self.marked_available,
            ListSide::Selected => &mut self.marked_selected,
        }
    }
}
