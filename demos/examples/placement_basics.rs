// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement solver basics.
//!
//! Solve a panel position with room to spare, force a fallback to the second
//! preference, and force edge clamping when nothing fits.
//!
//! Run:
//! - `cargo run -p epiphyte_examples --example placement_basics`

use epiphyte_placement::{solve, Placement, PlacementList, Side, Space};
use kurbo::{Point, Rect, Size};

fn main() {
    let boundary = Rect::new(0.0, 0.0, 100.0, 100.0);
    let panel = Size::new(20.0, 10.0);
    let placements = PlacementList::parse("top bottom");

    // Plenty of room: the first preference wins.
    let anchor = Rect::new(40.0, 40.0, 60.0, 50.0);
    let pos = solve(anchor, panel, &placements, boundary, Space::Boundary);
    println!("== Roomy anchor ==\n  {} at {:?}", pos.placement, pos.origin);
    assert_eq!(pos.placement, Placement::side(Side::Top));
    assert_eq!(pos.origin, Point::new(40.0, 30.0));

    // The anchor hugs the top edge: no room above, so `bottom` wins.
    let anchor = Rect::new(40.0, 2.0, 60.0, 12.0);
    let pos = solve(anchor, panel, &placements, boundary, Space::Boundary);
    println!("== Near the top edge ==\n  {} at {:?}", pos.placement, pos.origin);
    assert_eq!(pos.placement, Placement::side(Side::Bottom));

    // A short boundary where neither side fits: the first preference is kept
    // and clamped inside the boundary.
    let short = Rect::new(0.0, 0.0, 100.0, 25.0);
    let anchor = Rect::new(40.0, 8.0, 60.0, 18.0);
    let pos = solve(anchor, Size::new(20.0, 20.0), &placements, short, Space::Boundary);
    println!("== Nothing fits ==\n  {} at {:?}", pos.placement, pos.origin);
    assert_eq!(pos.placement, Placement::side(Side::Top));
    assert_eq!(pos.origin.y, 0.0);
}
