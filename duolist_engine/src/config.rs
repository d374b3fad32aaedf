// Copyright 2026 the Duolist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use alloc::vec::Vec;

use duolist_projection::Projection;

/// Configuration for a [`DualListBox`](crate::DualListBox), injected at
/// construction and read on every render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DualListConfig<V> {
    /// Permit the same value to be selected more than once. Each occurrence
    /// is a distinct positional slot and is removed individually.
    pub allow_duplicates: bool,
    /// Render the selected list in the literal selection order instead of
    /// re-deriving catalog order. Required for reorder actions to be
    /// meaningful.
    pub preserve_select_order: bool,
    /// Allow-list narrowing which catalog values may appear on the
    /// available side, regardless of selection state. `None` allows the
    /// whole catalog.
    pub available: Option<Vec<V>>,
    /// Shape of the selection payload delivered to the host.
    pub projection: Projection,
    /// Whether free-text filtering is active. When off, both views ignore
    /// filter text entirely.
    pub can_filter: bool,
    /// Whether filter text is host-owned. When set, the controller stores
    /// nothing and reports new filter state back to the host instead; the
    /// host pushes the authoritative state in via
    /// [`DualListBox::sync_filter`](crate::DualListBox::sync_filter).
    pub controlled_filter: bool,
}

impl<V> Default for DualListConfig<V> {
    fn default() -> Self {
        Self {
            allow_duplicates: false,
            preserve_select_order: false,
            available: None,
            projection: Projection::Values,
            can_filter: true,
            controlled_filter: false,
        }
    }
}
