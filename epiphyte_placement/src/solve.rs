// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement solver: candidate generation, fit testing, and fallback.
//!
//! ## Overview
//!
//! [`solve`] walks the preference list in order, generates the would-be panel
//! rect for each candidate, and returns the first one fully contained in the
//! boundary. When nothing fits it falls back to the author's first preference
//! and clamps the rect's edges inside the boundary: the author's intent wins
//! over auto-avoidance, and the panel stays visible.
//!
//! The solver is a pure function over its inputs. It holds no state, so it is
//! safe to call on every layout-stabilization tick without accumulating
//! drift.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::types::{Alignment, Placement, PlacementList, Position, Side, Space};

/// Compute the panel position for `anchor` within `boundary`.
///
/// `anchor` and `boundary` must be given in one shared coordinate space; the
/// returned origin is measured from the boundary's origin or the anchor's
/// origin according to `space`.
///
/// Candidates are tried in list order, with `auto` expanded to top, bottom,
/// left, right. The first candidate whose rect lies fully inside `boundary`
/// (all four edges) wins. If none fits, the first candidate is clamped edge
/// by edge into the boundary; when the panel is larger than the boundary on
/// an axis, the leading edge wins.
///
/// Non-finite geometry never panics: the result degrades to the boundary's
/// origin with the first preferred placement.
///
/// ```
/// use epiphyte_placement::{solve, PlacementList, Side, Space};
/// use kurbo::{Rect, Size};
///
/// let anchor = Rect::new(40.0, 2.0, 60.0, 12.0);
/// let boundary = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let list = PlacementList::parse("top bottom");
///
/// // Not enough room above the anchor, so the second preference wins.
/// let pos = solve(anchor, Size::new(20.0, 10.0), &list, boundary, Space::Boundary);
/// assert_eq!(pos.placement.side, Side::Bottom);
/// ```
pub fn solve(
    anchor: Rect,
    panel: Size,
    placements: &PlacementList,
    boundary: Rect,
    space: Space,
) -> Position {
    let candidates = expand(placements);
    if !anchor.is_finite() || !panel.is_finite() || !boundary.is_finite() {
        return fallback_position(candidates[0], anchor, boundary, space);
    }

    for &p in &candidates {
        let rect = candidate_rect(anchor, panel, p);
        if fits(rect, boundary) {
            return Position {
                placement: p,
                origin: to_space(rect.origin(), anchor, boundary, space),
            };
        }
    }

    // Nothing fits: keep the author's first preference and clamp its edges
    // inside the boundary.
    let p = candidates[0];
    let rect = candidate_rect(anchor, panel, p);
    Position {
        placement: p,
        origin: to_space(clamp_origin(rect, boundary), anchor, boundary, space),
    }
}

/// Expand `Auto` entries into the four concrete sides, preserving list order
/// and each token's alignment. The result is never empty because
/// [`PlacementList`] is never empty.
fn expand(placements: &PlacementList) -> Vec<Placement> {
    let mut out = Vec::new();
    for p in placements.entries() {
        match p.side {
            Side::Auto => {
                for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
                    out.push(Placement::new(side, p.alignment));
                }
            }
            _ => out.push(*p),
        }
    }
    out
}

/// The panel rect, in the shared space, assuming `p` is chosen.
fn candidate_rect(anchor: Rect, panel: Size, p: Placement) -> Rect {
    let (w, h) = (panel.width, panel.height);
    let origin = match p.side {
        // `Auto` never reaches here (expanded first); treat it as `Top`.
        Side::Top | Side::Auto | Side::Bottom => {
            let y = if p.side == Side::Bottom {
                anchor.y1
            } else {
                anchor.y0 - h
            };
            let x = match p.alignment {
                Alignment::Start => anchor.x0,
                Alignment::Center => anchor.center().x - w / 2.0,
                Alignment::End => anchor.x1 - w,
            };
            Point::new(x, y)
        }
        Side::Left | Side::Right => {
            let x = if p.side == Side::Left {
                anchor.x0 - w
            } else {
                anchor.x1
            };
            let y = match p.alignment {
                Alignment::Start => anchor.y0,
                Alignment::Center => anchor.center().y - h / 2.0,
                Alignment::End => anchor.y1 - h,
            };
            Point::new(x, y)
        }
    };
    Rect::from_origin_size(origin, panel)
}

/// All four edges inside the boundary.
fn fits(rect: Rect, boundary: Rect) -> bool {
    rect.x0 >= boundary.x0
        && rect.y0 >= boundary.y0
        && rect.x1 <= boundary.x1
        && rect.y1 <= boundary.y1
}

/// Clamp the rect's origin so its edges stay inside the boundary. Oversize
/// panels pin to the boundary's leading edge.
fn clamp_origin(rect: Rect, boundary: Rect) -> Point {
    let x = rect.x0.min(boundary.x1 - rect.width()).max(boundary.x0);
    let y = rect.y0.min(boundary.y1 - rect.height()).max(boundary.y0);
    Point::new(x, y)
}

/// Convert a shared-space origin into the requested output space.
fn to_space(origin: Point, anchor: Rect, boundary: Rect, space: Space) -> Point {
    let base = match space {
        Space::Anchor => anchor.origin(),
        Space::Boundary => boundary.origin(),
    };
    (origin - base).to_point()
}

/// Degraded result for non-finite inputs: the boundary's origin.
fn fallback_position(placement: Placement, anchor: Rect, boundary: Rect, space: Space) -> Position {
    let origin = if anchor.is_finite() && boundary.is_finite() {
        to_space(boundary.origin(), anchor, boundary, space)
    } else {
        Point::ZERO
    };
    Position { placement, origin }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn list(spec: &str) -> PlacementList {
        PlacementList::parse(spec)
    }

    const BOUNDARY: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    #[test]
    fn first_fitting_placement_wins() {
        let anchor = Rect::new(40.0, 40.0, 60.0, 50.0);
        let pos = solve(
            anchor,
            Size::new(20.0, 10.0),
            &list("top bottom"),
            BOUNDARY,
            Space::Boundary,
        );
        assert_eq!(pos.placement, Placement::side(Side::Top));
        // Centered on the anchor's midpoint, sitting on its top edge.
        assert_eq!(pos.origin, Point::new(40.0, 30.0));
    }

    // An anchor near the top edge has no room above; the second preference wins.
    #[test]
    fn falls_back_in_list_order() {
        let anchor = Rect::new(40.0, 2.0, 60.0, 12.0);
        let pos = solve(
            anchor,
            Size::new(20.0, 10.0),
            &list("top bottom"),
            BOUNDARY,
            Space::Boundary,
        );
        assert_eq!(pos.placement, Placement::side(Side::Bottom));
        assert_eq!(pos.origin, Point::new(40.0, 12.0));
    }

    // When nothing fits, the first-listed placement is kept and its edges are
    // clamped inside the boundary, not re-placed.
    #[test]
    fn clamps_first_preference_when_nothing_fits() {
        let boundary = Rect::new(0.0, 0.0, 100.0, 30.0);
        let anchor = Rect::new(40.0, 8.0, 60.0, 18.0);
        let pos = solve(
            anchor,
            Size::new(20.0, 20.0),
            &list("top bottom"),
            boundary,
            Space::Boundary,
        );
        assert_eq!(pos.placement, Placement::side(Side::Top));
        // x untouched (it fit); y clamped up to the boundary's top edge.
        assert_eq!(pos.origin, Point::new(40.0, 0.0));
    }

    #[test]
    fn oversize_panel_pins_to_leading_edges() {
        let boundary = Rect::new(10.0, 10.0, 50.0, 50.0);
        let anchor = Rect::new(20.0, 20.0, 30.0, 30.0);
        let pos = solve(
            anchor,
            Size::new(100.0, 100.0),
            &list("bottom"),
            boundary,
            Space::Boundary,
        );
        assert_eq!(pos.placement, Placement::side(Side::Bottom));
        assert_eq!(pos.origin, Point::new(0.0, 0.0));
    }

    #[test]
    fn alignment_offsets_on_both_axes() {
        let anchor = Rect::new(40.0, 40.0, 60.0, 50.0);
        let panel = Size::new(30.0, 10.0);
        let cases = [
            ("bottom-start", Point::new(40.0, 50.0)),
            ("bottom-end", Point::new(30.0, 50.0)),
            ("right-start", Point::new(60.0, 40.0)),
            ("left-end", Point::new(10.0, 40.0)),
        ];
        for (spec, expected) in cases {
            let pos = solve(anchor, panel, &list(spec), BOUNDARY, Space::Boundary);
            assert_eq!(pos.origin, expected, "placement {spec}");
        }
    }

    // `auto` tries top, bottom, left, right in order; here only the right
    // side has room.
    #[test]
    fn auto_expands_to_concrete_sides() {
        let boundary = Rect::new(0.0, 0.0, 100.0, 24.0);
        let anchor = Rect::new(2.0, 2.0, 12.0, 22.0);
        let pos = solve(
            anchor,
            Size::new(10.0, 10.0),
            &list("auto"),
            boundary,
            Space::Boundary,
        );
        assert_eq!(pos.placement, Placement::side(Side::Right));
    }

    #[test]
    fn auto_carries_its_alignment() {
        let anchor = Rect::new(40.0, 40.0, 60.0, 50.0);
        let pos = solve(
            anchor,
            Size::new(20.0, 10.0),
            &list("auto-start"),
            BOUNDARY,
            Space::Boundary,
        );
        assert_eq!(pos.placement, Placement::new(Side::Top, Alignment::Start));
        assert_eq!(pos.origin, Point::new(40.0, 30.0));
    }

    #[test]
    fn anchor_space_is_relative_to_the_anchor_origin() {
        let anchor = Rect::new(40.0, 40.0, 60.0, 50.0);
        let pos = solve(
            anchor,
            Size::new(20.0, 10.0),
            &list("top"),
            BOUNDARY,
            Space::Anchor,
        );
        assert_eq!(pos.origin, Point::new(0.0, -10.0));
    }

    #[test]
    fn boundary_space_subtracts_the_boundary_origin() {
        let boundary = Rect::new(10.0, 5.0, 110.0, 105.0);
        let anchor = Rect::new(50.0, 45.0, 70.0, 55.0);
        let pos = solve(
            anchor,
            Size::new(20.0, 10.0),
            &list("top"),
            boundary,
            Space::Boundary,
        );
        assert_eq!(pos.origin, Point::new(40.0, 30.0));
    }

    #[test]
    fn non_finite_panel_degrades_to_boundary_origin() {
        let anchor = Rect::new(40.0, 40.0, 60.0, 50.0);
        let panel = Size::new(f64::NAN, 10.0);
        let pos = solve(anchor, panel, &list("top bottom"), BOUNDARY, Space::Boundary);
        assert_eq!(pos.placement, Placement::side(Side::Top));
        assert_eq!(pos.origin, Point::ZERO);

        let pos = solve(anchor, panel, &list("top"), BOUNDARY, Space::Anchor);
        assert_eq!(pos.origin, Point::new(-40.0, -40.0));
    }

    #[test]
    fn non_finite_anchor_degrades_to_zero() {
        let anchor = Rect::new(f64::INFINITY, 0.0, 10.0, 10.0);
        let pos = solve(
            anchor,
            Size::new(20.0, 10.0),
            &list("bottom"),
            BOUNDARY,
            Space::Anchor,
        );
        assert_eq!(pos.origin, Point::ZERO);
        assert_eq!(pos.placement, Placement::side(Side::Bottom));
    }

    // Two identical calls agree exactly: the solver holds no state to drift.
    #[test]
    fn repeated_calls_are_identical() {
        let anchor = Rect::new(33.0, 41.0, 55.0, 52.0);
        let placements = PlacementList::from(vec![
            Placement::new(Side::Left, Alignment::Start),
            Placement::side(Side::Auto),
        ]);
        let a = solve(
            anchor,
            Size::new(24.0, 18.0),
            &placements,
            BOUNDARY,
            Space::Boundary,
        );
        let b = solve(
            anchor,
            Size::new(24.0, 18.0),
            &placements,
            BOUNDARY,
            Space::Boundary,
        );
        assert_eq!(a, b);
    }
}
