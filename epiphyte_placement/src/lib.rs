// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=epiphyte_placement --heading-base-level=0

//! Epiphyte Placement: a Kurbo-native placement solver for anchored overlays.
//!
//! ## Overview
//!
//! Given an anchor rect, a panel size, an ordered list of preferred
//! placements, and a boundary rect, [`solve`](crate::solve::solve) picks the
//! first placement whose panel rect fits fully inside the boundary and
//! returns the panel's origin. When no preference fits, the first-listed
//! placement wins and its edges are clamped inside the boundary, so
//! author intent is preserved over auto-avoidance.
//!
//! The solver is pure and stateless. Anchors and panels move and resize, so
//! callers re-solve on every layout-stabilization tick; repeated calls with
//! the same inputs are exactly identical and accumulate no drift.
//!
//! ## Placement grammar
//!
//! A placement token is `"<side>[-<alignment>]"` with side ∈ `top`,
//! `bottom`, `left`, `right`, `auto` and alignment ∈ `start`, `center`,
//! `end` (default `center`). [`PlacementList::parse`](crate::types::PlacementList::parse)
//! accepts a whitespace-separated token list; unknown tokens are skipped and
//! a fully malformed list falls back to `auto`. `auto` expands to the four
//! concrete sides in a fixed preference order.
//!
//! ## Coordinate spaces
//!
//! Anchor and boundary are supplied in one shared space. The output origin
//! is measured from the boundary origin ([`Space::Boundary`](crate::types::Space),
//! for panels mounted into a root container) or from the anchor origin
//! ([`Space::Anchor`](crate::types::Space), for panels mounted adjacent to
//! the anchor in normal flow).
//!
//! ## Minimal usage
//!
//! ```
//! use epiphyte_placement::{solve, PlacementList, Side, Space};
//! use kurbo::{Point, Rect, Size};
//!
//! let anchor = Rect::new(40.0, 40.0, 60.0, 50.0);
//! let boundary = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let placements = PlacementList::parse("top bottom");
//!
//! let pos = solve(anchor, Size::new(20.0, 10.0), &placements, boundary, Space::Boundary);
//! assert_eq!(pos.placement.side, Side::Top);
//! assert_eq!(pos.origin, Point::new(40.0, 30.0));
//! ```
//!
//! Geometry failures degrade instead of failing: non-finite inputs resolve
//! to the boundary's origin, so a mispositioned panel is the worst outcome.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod solve;
pub mod types;

pub use solve::solve;
pub use types::{Alignment, Placement, PlacementList, Position, Side, Space};
