// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the popover engine: states, events, identifiers,
//! configuration, and the capability traits the host implements.
//!
//! ## Overview
//!
//! The engine never touches a real scene graph. Hosts hand it opaque element
//! keys `K` plus implementations of [`PanelFactory`], [`GeometryProvider`],
//! and [`ElementLookup`], and drive it with interaction events and time. The
//! engine answers with [`PopoverEvent`] sequences the host applies.

use alloc::string::String;

use kurbo::Rect;

use epiphyte_placement::{PlacementList, Position};

use crate::autoclose::AutoClose;

/// Milliseconds on the host's monotonic clock.
///
/// The engine never reads time ambiently; every time-sensitive call takes
/// `now` so behavior is deterministic and replayable.
pub type Millis = u64;

/// Lifecycle state of a popover.
///
/// `Opening` and `Closing` are transient: they resolve to `Open`/`Closed`
/// when the scheduled delay fires, unless a reversing request cancels them
/// first.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PopupState {
    /// No panel, nothing pending.
    #[default]
    Closed,
    /// An open is scheduled but the panel is not mounted yet.
    Opening,
    /// The panel is mounted.
    Open,
    /// A close is scheduled, or a deferred unmount is in flight.
    Closing,
}

/// Notifications and effects emitted by the engine for the host to apply.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PopoverEvent {
    /// The first stabilization after a successful mount completed.
    /// Consumers observing the panel's rendered content do not race the
    /// mount.
    Shown,
    /// The unmount completed. Emitted exactly once per close.
    Hidden,
    /// Apply this placement to the mounted panel.
    Reposition(Position),
}

/// Unique identifier for a mounted panel, for host-side wiring such as
/// accessibility attributes.
///
/// Identifiers come from a [`PanelIds`] counter the host owns; there is no
/// process-global state.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PanelId(u64);

impl PanelId {
    /// Construct an identifier from a raw counter value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw counter value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for PanelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "epiphyte-popover-{}", self.0)
    }
}

/// Allocator for [`PanelId`]s.
///
/// The host owns one per document (or process) and passes a fresh id to each
/// popover it attaches.
#[derive(Clone, Debug, Default)]
pub struct PanelIds {
    next: u64,
}

impl PanelIds {
    /// Create a counter starting at zero.
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocate the next identifier.
    pub fn next_id(&mut self) -> PanelId {
        let id = PanelId(self.next);
        self.next += 1;
        id
    }
}

/// A mounted panel: the factory's handle plus the panel's element key.
///
/// The element key participates in autoclose containment and geometry
/// queries while the panel is on screen.
#[derive(Copy, Clone, Debug)]
pub struct Mount<H, K> {
    /// Factory handle, passed back on unmount.
    pub handle: H,
    /// Element key of the mounted panel.
    pub panel: K,
}

/// Outcome of a panel unmount.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Unmounted {
    /// Teardown finished synchronously.
    Done,
    /// Teardown continues (e.g. an exit transition); the host calls
    /// [`Popover::unmount_complete`](crate::popover::Popover::unmount_complete)
    /// when it finishes.
    Deferred,
}

/// Mounts and unmounts the floating panel.
///
/// Content and title are opaque to the engine; it only checks their presence
/// (a popover with neither is administratively disabled) and hands them
/// through. `mount` may return `None` when the anchor has no valid rendering
/// context; the open request is dropped silently, never an error.
pub trait PanelFactory<K> {
    /// Opaque content/title reference handed through to the host renderer.
    type Content;
    /// Handle for a mounted panel instance.
    type Handle: Copy + core::fmt::Debug;

    /// Mount the panel next to `anchor`. `animate` reflects the popover's
    /// animation configuration.
    fn mount(
        &mut self,
        content: Option<&Self::Content>,
        title: Option<&Self::Content>,
        anchor: K,
        id: PanelId,
        animate: bool,
    ) -> Option<Mount<Self::Handle, K>>;

    /// Unmount a previously mounted panel. Returning
    /// [`Unmounted::Deferred`] postpones the `Hidden` notification until the
    /// host reports completion.
    fn unmount(&mut self, handle: Self::Handle, animate: bool) -> Unmounted;
}

/// Reads current geometry on demand.
///
/// Rects are in one shared coordinate space. Queries may fail (`None`) for
/// elements detached from layout; positioning then degrades to the
/// boundary's origin instead of failing the mount.
pub trait GeometryProvider<K> {
    /// The element's current bounding rect, if it is laid out.
    fn bounding_rect(&self, element: K) -> Option<Rect>;

    /// The viewport/container boundary rect.
    fn boundary_rect(&self) -> Rect;
}

/// Look up the parent of an element, for containment walks.
///
/// Used by the autoclose detector to decide whether an interaction landed
/// inside the anchor or panel subtrees. Ancestry must be acyclic.
pub trait ElementLookup<K> {
    /// Returns the parent of `element`, or `None` at a root.
    fn parent_of(&self, element: K) -> Option<K>;
}

/// A no-op lookup for hosts whose interaction events already carry the
/// anchor/panel keys directly. All elements are roots.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParents;

impl<K> ElementLookup<K> for NoParents {
    #[inline]
    fn parent_of(&self, _element: K) -> Option<K> {
        None
    }
}

/// Where the panel is mounted, which selects the output coordinate space of
/// [`PopoverEvent::Reposition`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Container {
    /// Adjacent to the anchor in normal flow; anchor-relative coordinates.
    #[default]
    Inline,
    /// Into the root container; boundary-relative coordinates.
    Body,
}

/// Popover configuration.
///
/// Captured at attach time. `triggers` is parsed once into an immutable
/// trigger set; malformed pieces fall back to defaults rather than erroring.
#[derive(Clone, Debug, PartialEq)]
pub struct PopoverConfig {
    /// Whether mount/unmount run entry/exit transitions on the host side.
    pub animation: bool,
    /// Automatic dismissal mode.
    pub auto_close: AutoClose,
    /// Ordered placement preferences.
    pub placement: PlacementList,
    /// Trigger specification string, e.g. `"click"`, `"hover focus"`,
    /// `"mouseenter:mouseleave"`, or `"manual"`.
    pub triggers: String,
    /// Mount target, selecting the reposition coordinate space.
    pub container: Container,
    /// Administratively disable the popover; open requests are dropped.
    pub disable_popover: bool,
    /// Delay before a requested open mounts the panel.
    pub open_delay: Millis,
    /// Delay before a requested close unmounts the panel.
    pub close_delay: Millis,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            animation: true,
            auto_close: AutoClose::default(),
            placement: PlacementList::default(),
            triggers: String::from("click"),
            container: Container::Inline,
            disable_popover: false,
            open_delay: 0,
            close_delay: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn panel_ids_are_sequential_and_unique() {
        let mut ids = PanelIds::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_eq!(a.raw(), 0);
        assert_eq!(b.raw(), 1);
    }

    #[test]
    fn panel_id_display_is_host_attribute_friendly() {
        assert_eq!(format!("{}", PanelId::new(7)), "epiphyte-popover-7");
    }

    #[test]
    fn config_defaults_match_the_documented_surface() {
        let config = PopoverConfig::default();
        assert!(config.animation);
        assert_eq!(config.triggers, "click");
        assert_eq!(config.container, Container::Inline);
        assert!(!config.disable_popover);
        assert_eq!(config.open_delay, 0);
        assert_eq!(config.close_delay, 0);
    }

    #[test]
    fn no_parents_treats_everything_as_a_root() {
        assert_eq!(NoParents.parent_of(3_u32), None);
    }
}
