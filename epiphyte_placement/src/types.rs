// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the placement solver: sides, alignments, placement lists,
//! coordinate spaces, and the solved position.

use alloc::vec::Vec;

use kurbo::Point;

/// The side of the anchor a panel prefers to sit on.
///
/// `Auto` is a wildcard: the solver expands it to the four concrete sides in
/// a fixed preference order (top, bottom, left, right), carrying the
/// alignment of the token it appeared in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the anchor; the panel's bottom edge touches the anchor's top edge.
    Top,
    /// Below the anchor; the panel's top edge touches the anchor's bottom edge.
    Bottom,
    /// To the left of the anchor.
    Left,
    /// To the right of the anchor.
    Right,
    /// Any side; expanded to the four concrete sides in preference order.
    Auto,
}

/// Cross-axis alignment of the panel against the anchor.
///
/// For `Top`/`Bottom` sides the cross axis is horizontal; for `Left`/`Right`
/// it is vertical.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Alignment {
    /// Leading edges aligned (left edges for horizontal, top edges for vertical).
    Start,
    /// Panel centered on the anchor's cross-axis midpoint.
    #[default]
    Center,
    /// Trailing edges aligned.
    End,
}

/// A side plus cross-axis alignment, e.g. `top-start` or `bottom`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Placement {
    /// Side of the anchor.
    pub side: Side,
    /// Cross-axis alignment. A bare side token means `Center`.
    pub alignment: Alignment,
}

impl Placement {
    /// Construct a placement with the given side and alignment.
    pub const fn new(side: Side, alignment: Alignment) -> Self {
        Self { side, alignment }
    }

    /// Construct a center-aligned placement for `side`.
    pub const fn side(side: Side) -> Self {
        Self {
            side,
            alignment: Alignment::Center,
        }
    }

    /// Parse a single `"<side>[-<alignment>]"` token.
    ///
    /// Returns `None` for unknown side or alignment names; callers skip such
    /// tokens rather than failing.
    pub fn parse(token: &str) -> Option<Self> {
        let (side, alignment) = match token.split_once('-') {
            Some((s, a)) => (s, Some(a)),
            None => (token, None),
        };
        let side = match side {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            "auto" => Side::Auto,
            _ => return None,
        };
        let alignment = match alignment {
            None => Alignment::Center,
            Some("start") => Alignment::Start,
            Some("center") => Alignment::Center,
            Some("end") => Alignment::End,
            Some(_) => return None,
        };
        Some(Self { side, alignment })
    }
}

impl core::fmt::Display for Placement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let side = match self.side {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
            Side::Auto => "auto",
        };
        match self.alignment {
            Alignment::Center => write!(f, "{side}"),
            Alignment::Start => write!(f, "{side}-start"),
            Alignment::End => write!(f, "{side}-end"),
        }
    }
}

/// An ordered list of preferred placements; the first feasible entry wins.
///
/// Built from a whitespace-separated token string or from placements
/// directly. Unknown tokens are skipped, and an empty result falls back to
/// `auto` so a fully malformed configuration still positions somewhere
/// sensible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementList {
    entries: Vec<Placement>,
}

impl PlacementList {
    /// Parse a whitespace-separated list of placement tokens.
    ///
    /// ```
    /// use epiphyte_placement::{Alignment, Placement, PlacementList, Side};
    ///
    /// let list = PlacementList::parse("top bottom-start nonsense");
    /// assert_eq!(
    ///     list.entries(),
    ///     &[
    ///         Placement::side(Side::Top),
    ///         Placement::new(Side::Bottom, Alignment::Start),
    ///     ]
    /// );
    /// ```
    pub fn parse(spec: &str) -> Self {
        let entries: Vec<Placement> = spec.split_whitespace().filter_map(Placement::parse).collect();
        if entries.is_empty() {
            return Self::default();
        }
        Self { entries }
    }

    /// The placements in preference order. Never empty.
    pub fn entries(&self) -> &[Placement] {
        &self.entries
    }

    /// The author's first preference (before any `Auto` expansion).
    pub fn first(&self) -> Placement {
        self.entries[0]
    }
}

impl Default for PlacementList {
    /// A single `auto` entry.
    fn default() -> Self {
        Self {
            entries: alloc::vec![Placement::side(Side::Auto)],
        }
    }
}

impl From<Vec<Placement>> for PlacementList {
    fn from(entries: Vec<Placement>) -> Self {
        if entries.is_empty() {
            return Self::default();
        }
        Self { entries }
    }
}

/// Coordinate space of the solved origin.
///
/// Anchor and boundary rects are supplied in one shared space; this selects
/// what the output origin is measured from.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Space {
    /// Origin relative to the anchor's origin: the panel is mounted adjacent
    /// to the anchor in normal flow.
    #[default]
    Anchor,
    /// Origin relative to the boundary's origin: the panel is mounted into a
    /// root container.
    Boundary,
}

/// A solved panel position.
///
/// Produced by [`solve`](crate::solve::solve). `placement` is the concrete
/// side/alignment that was chosen (never `Auto`), and `origin` is the panel's
/// top-left corner in the requested [`Space`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    /// The chosen placement.
    pub placement: Placement,
    /// Panel top-left corner in the requested output space.
    pub origin: Point,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    #[test]
    fn parse_bare_side_is_center_aligned() {
        assert_eq!(
            Placement::parse("top"),
            Some(Placement::new(Side::Top, Alignment::Center))
        );
    }

    #[test]
    fn parse_side_with_alignment() {
        assert_eq!(
            Placement::parse("left-end"),
            Some(Placement::new(Side::Left, Alignment::End))
        );
        assert_eq!(
            Placement::parse("auto-start"),
            Some(Placement::new(Side::Auto, Alignment::Start))
        );
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert_eq!(Placement::parse("middle"), None);
        assert_eq!(Placement::parse("top-upper"), None);
        assert_eq!(Placement::parse(""), None);
        // A second separator lands in the alignment name and is rejected.
        assert_eq!(Placement::parse("top-start-end"), None);
    }

    #[test]
    fn list_skips_unknown_and_preserves_order() {
        let list = PlacementList::parse("bottom-end bogus top");
        assert_eq!(
            list.entries(),
            &[
                Placement::new(Side::Bottom, Alignment::End),
                Placement::side(Side::Top),
            ]
        );
        assert_eq!(list.first(), Placement::new(Side::Bottom, Alignment::End));
    }

    #[test]
    fn empty_or_malformed_list_falls_back_to_auto() {
        assert_eq!(
            PlacementList::parse("").entries(),
            &[Placement::side(Side::Auto)]
        );
        assert_eq!(
            PlacementList::parse("junk more-junk").entries(),
            &[Placement::side(Side::Auto)]
        );
        assert_eq!(
            PlacementList::from(vec![]).entries(),
            &[Placement::side(Side::Auto)]
        );
    }

    #[test]
    fn display_round_trips_tokens() {
        for token in ["top", "bottom-start", "left-end", "right", "auto"] {
            let p = Placement::parse(token).unwrap();
            assert_eq!(format!("{p}"), token);
        }
        // Center alignment prints as the bare side.
        assert_eq!(
            format!("{}", Placement::new(Side::Top, Alignment::Center)),
            "top"
        );
    }
}
