// Copyright 2026 the Duolist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Duolist Engine: the controller behind a dual-listbox widget.
//!
//! A dual listbox is two adjacent list controls — "available" and
//! "selected" — with buttons to move items between them, reorder the
//! selected side, and filter either side by text. This crate ties the
//! Duolist building blocks together into one controller, [`DualListBox`]:
//!
//! - Per-render **views**: [`DualListBox::available_view`] and
//!   [`DualListBox::selected_view`] prune the caller's option catalog into
//!   what each list control should display, honoring the availability
//!   restriction, duplicate policy, ordering mode, and free-text filters.
//! - **Actions**: [`DualListBox::toggle_marked`], [`DualListBox::move_all`],
//!   and [`DualListBox::reorder_marked`] compute a proposed new selection
//!   and return it as a [`duolist_projection::Change`] payload.
//!
//! The controller follows the controlled-component contract throughout: the
//! option catalog and the selection are caller-owned and passed into every
//! call; an action's result only becomes visible once the caller passes the
//! proposed selection back in on the next render. The controller itself
//! owns nothing but the genuinely widget-local state — which items are
//! highlighted in each raw control, and (in uncontrolled mode) the filter
//! text. Highlights for a side are cleared after a move action, since the
//! positions they point at may no longer exist; reorders keep them.
//!
//! ## Minimal example
//!
//! ```rust
//! use duolist_engine::{DualListBox, DualListConfig, MoveDirection};
//! use duolist_options::{LeafOption, OptionNode};
//! use duolist_projection::ProjectedSelection;
//!
//! let catalog = vec![
//!     OptionNode::leaf(LeafOption::new("luna", "Moon")),
//!     OptionNode::leaf(LeafOption::new("phobos", "Phobos")),
//! ];
//! let mut widget = DualListBox::new(DualListConfig::default());
//! let selection: Vec<&str> = vec![];
//!
//! // "Move all to selected" proposes a new selection; the host applies it.
//! let change = widget.move_all(&catalog, &selection, MoveDirection::ToSelected);
//! let ProjectedSelection::Values(selection) = change.selection else {
//!     unreachable!()
//! };
//! assert_eq!(selection, vec!["luna", "phobos"]);
//!
//! // And back again.
//! let change = widget.move_all(&catalog, &selection, MoveDirection::ToAvailable);
//! let ProjectedSelection::Values(selection) = change.selection else {
//!     unreachable!()
//! };
//! assert!(selection.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod dual_list;

pub use config::DualListConfig;
pub use dual_list::{DualListBox, MoveDirection};
