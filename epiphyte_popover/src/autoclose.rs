// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-interaction detection for automatic dismissal.
//!
//! ## Overview
//!
//! While a panel is mounted, the engine arms a registration over the anchor
//! and panel elements. The host feeds pointer-down, focus-in, and Escape
//! interactions through it; the registration decides whether the popover
//! should dismiss. Pointer-down is evaluated (not click) so a press that
//! starts inside the panel and releases outside does not spuriously dismiss.
//!
//! Containment is decided by walking a host-supplied [`ElementLookup`]: an
//! element is inside the targets iff it or any ancestor is a target. In
//! [`AutoClose::Inside`] mode the anchor subtree counts as outside, so the
//! anchor's own toggle trigger does not immediately re-close the popover it
//! just opened.

use alloc::vec::Vec;

use bitflags::bitflags;

use crate::types::ElementLookup;

/// Automatic dismissal mode.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum AutoClose {
    /// Never auto-dismiss, Escape included.
    Off,
    /// Dismiss on pointer-down or focus outside all targets, and on Escape
    /// regardless of focus location.
    #[default]
    Any,
    /// Dismiss only on interactions inside the targets that are not on the
    /// anchor itself, for popovers carrying their own close affordance.
    Inside,
    /// Dismiss only on interactions strictly outside all targets.
    Outside,
}

bitflags! {
    /// Interaction classes an armed registration wants delivered.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InteractionKinds: u8 {
        /// Pointer pressed anywhere in the document.
        const POINTER_DOWN = 0b0000_0001;
        /// Focus moved anywhere in the document.
        const FOCUS_IN     = 0b0000_0010;
        /// Escape key pressed.
        const KEY_DOWN     = 0b0000_0100;
    }
}

/// One host interaction, carrying the element it landed on when known.
///
/// `None` means the interaction hit nothing the host can name (e.g. the
/// document background); that counts as outside every target.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Interaction<K> {
    /// Pointer pressed on the given element.
    PointerDown(Option<K>),
    /// Focus moved to the given element.
    FocusIn(Option<K>),
    /// Escape pressed, wherever focus is.
    Escape,
}

/// An armed dismissal detector over the anchor and panel elements.
///
/// Created when the panel mounts and disarmed when it unmounts or the
/// popover detaches. Disarming is idempotent; a disarmed registration never
/// dismisses and reports no interaction interest, so subscriptions are never
/// leaked across popup instances.
#[derive(Clone, Debug)]
pub struct AutoCloseRegistration<K> {
    mode: AutoClose,
    anchor: K,
    targets: Vec<K>,
    armed: bool,
}

impl<K: Copy + Eq> AutoCloseRegistration<K> {
    /// Arm a registration for the given anchor and mounted panel.
    pub fn arm(mode: AutoClose, anchor: K, panel: K) -> Self {
        Self {
            mode,
            anchor,
            targets: alloc::vec![anchor, panel],
            armed: true,
        }
    }

    /// The interaction classes this registration needs while armed.
    /// Empty for [`AutoClose::Off`] and after disarming.
    pub fn interest(&self) -> InteractionKinds {
        if !self.armed || self.mode == AutoClose::Off {
            return InteractionKinds::empty();
        }
        InteractionKinds::POINTER_DOWN | InteractionKinds::FOCUS_IN | InteractionKinds::KEY_DOWN
    }

    /// Stop evaluating interactions. Safe to call any number of times.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Whether the registration is still live.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Decide whether `interaction` dismisses the popover.
    pub fn should_dismiss<P: ElementLookup<K>>(
        &self,
        parents: &P,
        interaction: &Interaction<K>,
    ) -> bool {
        if !self.armed || self.mode == AutoClose::Off {
            return false;
        }
        let element = match interaction {
            // Escape dismisses in every live mode, wherever focus is.
            Interaction::Escape => return true,
            Interaction::PointerDown(element) | Interaction::FocusIn(element) => *element,
        };
        let inside = element.is_some_and(|e| is_within(parents, &self.targets, e));
        match self.mode {
            AutoClose::Any | AutoClose::Outside => !inside,
            AutoClose::Inside => {
                inside && !element.is_some_and(|e| is_within(parents, &[self.anchor], e))
            }
            AutoClose::Off => false,
        }
    }
}

/// True iff `element` or any of its ancestors is one of `targets`.
/// Ancestry must be acyclic; the walk ends at the first root.
pub fn is_within<K: Copy + Eq, P: ElementLookup<K>>(
    parents: &P,
    targets: &[K],
    element: K,
) -> bool {
    let mut cur = element;
    loop {
        if targets.contains(&cur) {
            return true;
        }
        match parents.parent_of(cur) {
            Some(p) => cur = p,
            None => return false,
        }
    }
}
