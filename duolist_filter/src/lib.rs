// Copyright 2026 the Duolist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Duolist Filter: recursive option-tree filtering for dual-listbox widgets.
//!
//! Each of the two list controls shows a pruned view of the same option
//! catalog. This crate computes that view. Pruning is driven by two
//! independent gates, applied in order:
//!
//! 1. A **structural filterer**: a closure encoding business logic for one
//!    side ("is this leaf currently available?", "which selection positions
//!    does this leaf occupy?"). It returns an [`Admission`] verdict; the
//!    occurrence-list variant lets the selected side show one entry per
//!    occurrence of a duplicated value, each tagged with its position so a
//!    later removal can target exactly one occurrence.
//! 2. A **free-text predicate** ([`FilterPredicate`]): the user-facing search
//!    box. The default [`SubstringMatch`] is a case-insensitive *literal*
//!    substring match on the label, so queries like `"(mars"` behave as plain
//!    text. The predicate runs only for structurally admitted leaves, and at
//!    most once per leaf per pass.
//!
//! Group headings participate in the text search: once a group's label
//! matches, all of its descendants are shown regardless of their own labels
//! (they remain subject to the structural filterer). A group survives the
//! pass only if at least one descendant does; its metadata is preserved
//! verbatim.
//!
//! ## Minimal example
//!
//! ```rust
//! use duolist_filter::{Admission, SubstringMatch, filter_options, filtered_labels};
//! use duolist_options::{GroupOption, LeafOption, OptionNode};
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
//! // Admit everything structurally; search for "pho".
//! let view = filter_options(
//!     &catalog,
//!     &mut |_leaf| Admission::Admit,
//!     "pho",
//!     &SubstringMatch,
//!     false,
//! );
//! assert_eq!(filtered_labels(&view), vec!["Phobos"]);
//!
//! // A matching group heading reveals all of its children.
//! let view = filter_options(
//!     &catalog,
//!     &mut |_leaf| Admission::Admit,
//!     "mars",
//!     &SubstringMatch,
//!     false,
//! );
//! assert_eq!(filtered_labels(&view), vec!["Phobos", "Deimos"]);
//! ```
//!
//! A structural filterer that panics is not caught here; that is a host
//! programming error and propagates to the caller.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;

mod filter;
mod predicate;

pub use filter::{
    Admission, FilteredGroup, FilteredLeaf, FilteredNode, Occurrences, count_filtered_leaves,
    filter_options, filtered_labels, filtered_leaves,
};
pub use predicate::{FilterPredicate, SubstringMatch};

/// Free-text search state: one query per list control.
///
/// Owned by the widget when filtering is uncontrolled, supplied by the host
/// as authoritative input otherwise. Empty queries match everything under
/// [`SubstringMatch`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Query applied to the available list.
    pub available: String,
    /// Query applied to the selected list.
    pub selected: String,
}
