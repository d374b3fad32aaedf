// Copyright 2026 the Duolist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving a dual listbox from a plain event loop: views + actions.
//!
//! This example shows how a host wires the controller:
//! - `duolist_options` supplies the catalog of moons,
//! - `duolist_engine` computes the two list views and runs actions,
//! - the host owns the selection and applies each proposed change.
//!
//! Run:
//! - `cargo run -p duolist_demos --example planets`

use duolist_engine::{DualListBox, DualListConfig, MoveDirection};
use duolist_filter::{FilteredNode, filtered_leaves};
use duolist_options::{GroupOption, LeafOption, OptionNode};
use duolist_projection::{Change, ProjectedSelection};
use duolist_selection::{ListSide, MarkedItem, ReorderIntent};

fn catalog() -> Vec<OptionNode<&'static str>> {
    vec![
        OptionNode::leaf(LeafOption::new("luna", "Moon")),
        OptionNode::group(GroupOption::new(
            "Mars",
            vec![
                OptionNode::leaf(LeafOption::new("phobos", "Phobos (Mars)")),
                OptionNode::leaf(LeafOption::new("deimos", "Deimos (Mars)")),
            ],
        )),
        OptionNode::group(GroupOption::new(
            "Jupiter",
            vec![
                OptionNode::leaf(LeafOption::new("io", "Io")),
                OptionNode::leaf(LeafOption::new("europa", "Europa").disabled(true)),
            ],
        )),
    ]
}

/// Prints one list view the way a host would render it.
fn print_view(heading: &str, view: &[FilteredNode<'_, &'static str>]) {
    println!("{heading}:");
    for leaf in filtered_leaves(view) {
        match leaf.order {
            Some(order) => println!("  [{order}] {}", leaf.option.label),
            None => println!("      {}", leaf.option.label),
        }
    }
}

/// Applies a proposed change to the host-owned selection.
fn apply(change: Change<&'static str>, selection: &mut Vec<&'static str>) {
    match change.selection {
        ProjectedSelection::Values(values) => *selection = values,
        ProjectedSelection::Tree(_) => unreachable!("demo uses the flat projection"),
    }
    let labels: Vec<&str> = change.marked.iter().map(|m| m.label.as_str()).collect();
    println!("change from {:?}, user had marked {labels:?}", change.side);
}

fn main() {
    let tree = catalog();
    let mut widget = DualListBox::new(DualListConfig {
        preserve_select_order: true,
        ..DualListConfig::default()
    });

    // The host owns the selection; the controller only proposes new ones.
    let mut selection: Vec<&'static str> = Vec::new();

    println!("== initial render ==");
    print_view("available", &widget.available_view(&tree, &selection));

    println!("\n== move all to selected ==");
    let change = widget.move_all(&tree, &selection, MoveDirection::ToSelected);
    apply(change, &mut selection);
    print_view("selected", &widget.selected_view(&tree, &selection));

    println!("\n== send Moon to the bottom ==");
    let marked = vec![MarkedItem::new(0, "luna")];
    let change = widget.reorder_marked(&tree, &selection, &marked, ReorderIntent::Bottom);
    apply(change, &mut selection);
    print_view("selected", &widget.selected_view(&tree, &selection));

    println!("\n== double-click Phobos back to available ==");
    let position = selection.iter().position(|v| *v == "phobos").unwrap();
    let marked = vec![MarkedItem::new(position, "phobos")];
    let change = widget.toggle_marked(&tree, &selection, &marked, ListSide::Selected);
    apply(change, &mut selection);
    print_view("selected", &widget.selected_view(&tree, &selection));

    println!("\n== filter the available side for \"(mars\" ==");
    widget.set_filter(ListSide::Available, "(mars");
    print_view("available", &widget.available_view(&tree, &selection));
}
