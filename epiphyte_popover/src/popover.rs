// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The popup lifecycle manager: a state machine over
//! `Closed → Opening → Open → Closing → Closed`.
//!
//! ## Overview
//!
//! [`Popover`] owns the popup state and the pending open/close actions, and
//! wires the other modules together: trigger events resolve through the
//! parsed [`TriggerSpec`], delays run through the [`Scheduler`], mounting
//! goes through the host's [`PanelFactory`], placement through
//! [`solve`](epiphyte_placement::solve()), and dismissal through an armed
//! [`AutoCloseRegistration`].
//!
//! ## Host protocol
//!
//! The host drives the engine and applies what comes back:
//!
//! 1. Subscribe to [`Popover::listen_events`] on the anchor and feed them to
//!    [`Popover::handle_trigger`] with the current time.
//! 2. Call [`Popover::tick`] when [`Popover::next_deadline`] elapses.
//! 3. Call [`Popover::layout_settled`] after each layout-stable batch; the
//!    engine repositions the mounted panel there and never polls.
//! 4. While [`Popover::autoclose_interest`] is non-empty, feed document
//!    interactions to [`Popover::handle_interaction`].
//! 5. Apply the returned [`PopoverEvent`]s (reposition, shown, hidden).
//!
//! Every call takes `now` explicitly where time matters, so sequences are
//! deterministic and replayable.
//!
//! ## Ordering guarantees
//!
//! Requests for one popover are processed in arrival order. A reversing
//! request that arrives before a scheduled delay fires cancels it
//! deterministically: after a cancel, the stale action can never run. At
//! most one panel is mounted per popover at any time.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use epiphyte_placement::{Position, Space, solve};

use crate::autoclose::{AutoCloseRegistration, Interaction, InteractionKinds};
use crate::schedule::{CancelHandle, Scheduled, Scheduler};
use crate::triggers::{TriggerAction, TriggerSpec};
use crate::types::{
    Container, ElementLookup, GeometryProvider, Millis, Mount, PanelFactory, PanelId, PopoverConfig,
    PopoverEvent, PopupState, Unmounted,
};

/// What a pending scheduled action will do when it fires.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Intent {
    Open,
    Close,
}

/// An anchored popover's lifecycle manager.
///
/// One instance per anchored popup, alive for the anchor's attach lifetime.
/// The manager exclusively owns the popup state and pending actions; the
/// anchor element key and the collaborators are supplied by the host at
/// construction; there is no ambient lookup.
pub struct Popover<K, F, G, P>
where
    F: PanelFactory<K>,
{
    anchor: K,
    factory: F,
    geometry: G,
    parents: P,
    config: PopoverConfig,
    content: Option<F::Content>,
    title: Option<F::Content>,
    triggers: TriggerSpec,
    panel_id: PanelId,
    state: PopupState,
    scheduler: Scheduler<Intent>,
    pending_open: Option<CancelHandle>,
    pending_close: Option<CancelHandle>,
    mounted: Option<Mount<F::Handle, K>>,
    autoclose: Option<AutoCloseRegistration<K>>,
    shown_pending: bool,
    unmount_deferred: bool,
}

impl<K, F, G, P> core::fmt::Debug for Popover<K, F, G, P>
where
    F: PanelFactory<K>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Popover")
            .field("state", &self.state)
            .field("panel_id", &self.panel_id)
            .field("shown_pending", &self.shown_pending)
            .field("unmount_deferred", &self.unmount_deferred)
            .finish_non_exhaustive()
    }
}

impl<K, F, G, P> Popover<K, F, G, P>
where
    K: Copy + Eq,
    F: PanelFactory<K>,
    G: GeometryProvider<K>,
    P: ElementLookup<K>,
{
    /// Attach a popover to `anchor`.
    ///
    /// The trigger specification is parsed here, once; it is immutable for
    /// the popover's lifetime. Content and title start empty, which leaves
    /// the popover administratively disabled until
    /// [`set_content`](Self::set_content) or [`set_title`](Self::set_title)
    /// provides something to show.
    pub fn new(
        anchor: K,
        factory: F,
        geometry: G,
        parents: P,
        config: PopoverConfig,
        panel_id: PanelId,
    ) -> Self {
        let triggers = TriggerSpec::parse(&config.triggers);
        Self {
            anchor,
            factory,
            geometry,
            parents,
            config,
            content: None,
            title: None,
            triggers,
            panel_id,
            state: PopupState::Closed,
            scheduler: Scheduler::new(),
            pending_open: None,
            pending_close: None,
            mounted: None,
            autoclose: None,
            shown_pending: false,
            unmount_deferred: false,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PopupState {
        self.state
    }

    /// True while the panel is mounted and not closing.
    pub fn is_open(&self) -> bool {
        self.state == PopupState::Open
    }

    /// The unique identifier handed to the panel factory on mount.
    pub fn panel_id(&self) -> PanelId {
        self.panel_id
    }

    /// The configuration captured at attach time.
    pub fn config(&self) -> &PopoverConfig {
        &self.config
    }

    /// The currently mounted panel, if any.
    pub fn mounted(&self) -> Option<&Mount<F::Handle, K>> {
        self.mounted.as_ref()
    }

    /// Event names the host should deliver from the anchor to
    /// [`handle_trigger`](Self::handle_trigger). Empty for `manual`
    /// triggers.
    pub fn listen_events(&self) -> Vec<&str> {
        self.triggers.listen_events()
    }

    /// Interaction classes the host should deliver to
    /// [`handle_interaction`](Self::handle_interaction). Non-empty only
    /// while a panel is mounted with a live autoclose mode.
    pub fn autoclose_interest(&self) -> InteractionKinds {
        self.autoclose
            .as_ref()
            .map_or_else(InteractionKinds::empty, AutoCloseRegistration::interest)
    }

    /// The earliest pending deadline, for host wake-up scheduling.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.scheduler.next_deadline()
    }

    /// Handle a trigger event delivered from the anchor. Events no trigger
    /// claims are ignored.
    pub fn handle_trigger(&mut self, event: &str, now: Millis) -> Vec<PopoverEvent> {
        let mut events = Vec::new();
        match self.triggers.action_for(event) {
            Some(TriggerAction::Open) => self.request_open(now, &mut events),
            Some(TriggerAction::Close) => self.request_close(now, &mut events),
            Some(TriggerAction::Toggle) => self.toggle_intent(now, &mut events),
            None => {}
        }
        events
    }

    /// Request the popover to open, honoring `open_delay`.
    pub fn open(&mut self, now: Millis) -> Vec<PopoverEvent> {
        let mut events = Vec::new();
        self.request_open(now, &mut events);
        events
    }

    /// Request the popover to close, honoring `close_delay`. Closing an
    /// already-closed popover is a no-op.
    pub fn close(&mut self, now: Millis) -> Vec<PopoverEvent> {
        let mut events = Vec::new();
        self.request_close(now, &mut events);
        events
    }

    /// Open when closed (or closing), close when open (or opening).
    pub fn toggle(&mut self, now: Millis) -> Vec<PopoverEvent> {
        let mut events = Vec::new();
        self.toggle_intent(now, &mut events);
        events
    }

    /// Fire scheduled actions whose deadline has passed.
    pub fn tick(&mut self, now: Millis) -> Vec<PopoverEvent> {
        let mut events = Vec::new();
        for intent in self.scheduler.fire_due(now) {
            match intent {
                Intent::Open => {
                    self.pending_open = None;
                    if self.state == PopupState::Opening {
                        self.do_open(&mut events);
                    }
                }
                Intent::Close => {
                    self.pending_close = None;
                    if self.state == PopupState::Closing && !self.unmount_deferred {
                        self.do_close(self.config.animation, false, &mut events);
                    }
                }
            }
        }
        events
    }

    /// The host's layout has stabilized: reposition the mounted panel.
    ///
    /// The first stabilization after a mount also emits
    /// [`PopoverEvent::Shown`], after the reposition, so consumers observing
    /// the panel's final rendered content do not race the mount.
    pub fn layout_settled(&mut self) -> Vec<PopoverEvent> {
        let Some(mount) = &self.mounted else {
            return Vec::new();
        };
        let panel = mount.panel;
        let mut events = Vec::new();
        events.push(PopoverEvent::Reposition(self.compute_position(panel)));
        if self.shown_pending {
            self.shown_pending = false;
            events.push(PopoverEvent::Shown);
        }
        events
    }

    /// Evaluate a document interaction against the armed autoclose
    /// registration, dismissing the popover when it qualifies.
    pub fn handle_interaction(
        &mut self,
        interaction: &Interaction<K>,
        now: Millis,
    ) -> Vec<PopoverEvent> {
        let dismiss = self
            .autoclose
            .as_ref()
            .is_some_and(|reg| reg.should_dismiss(&self.parents, interaction));
        let mut events = Vec::new();
        if dismiss {
            self.request_close(now, &mut events);
        }
        events
    }

    /// Replace the popover content. Clearing both content and title disables
    /// the popover and closes it immediately: stale or empty content is
    /// never shown.
    pub fn set_content(&mut self, content: Option<F::Content>) -> Vec<PopoverEvent> {
        self.content = content;
        self.apply_disable()
    }

    /// Replace the popover title. Same disable rules as
    /// [`set_content`](Self::set_content).
    pub fn set_title(&mut self, title: Option<F::Content>) -> Vec<PopoverEvent> {
        self.title = title;
        self.apply_disable()
    }

    /// Administratively enable or disable the popover. Disabling while open
    /// closes immediately, bypassing `close_delay`.
    pub fn set_disabled(&mut self, disabled: bool) -> Vec<PopoverEvent> {
        self.config.disable_popover = disabled;
        self.apply_disable()
    }

    /// Detach from the anchor: force-close synchronously and drop every
    /// pending action and registration. Safe to call in any state, including
    /// before the popover ever opened, and idempotent.
    pub fn detach(&mut self) -> Vec<PopoverEvent> {
        let mut events = Vec::new();
        self.close_now(true, &mut events);
        self.scheduler.clear();
        events
    }

    /// The host finished a deferred unmount; emits the owed
    /// [`PopoverEvent::Hidden`].
    pub fn unmount_complete(&mut self) -> Vec<PopoverEvent> {
        if !self.unmount_deferred {
            return Vec::new();
        }
        self.unmount_deferred = false;
        self.state = PopupState::Closed;
        alloc::vec![PopoverEvent::Hidden]
    }

    /// Disabled popovers drop open requests: explicitly disabled, or nothing
    /// to show (no content and no title).
    fn is_disabled(&self) -> bool {
        self.config.disable_popover || (self.content.is_none() && self.title.is_none())
    }

    fn toggle_intent(&mut self, now: Millis, events: &mut Vec<PopoverEvent>) {
        match self.state {
            PopupState::Open | PopupState::Opening => self.request_close(now, events),
            PopupState::Closed | PopupState::Closing => self.request_open(now, events),
        }
    }

    fn request_open(&mut self, now: Millis, events: &mut Vec<PopoverEvent>) {
        match self.state {
            // At most one open: further requests are ignored.
            PopupState::Opening | PopupState::Open => {}
            PopupState::Closing => {
                if self.unmount_deferred || self.is_disabled() {
                    return;
                }
                // Reversing request before the close fires: the panel is
                // still mounted, so canceling the pending close suffices.
                if let Some(handle) = self.pending_close.take() {
                    self.scheduler.cancel(handle);
                }
                self.state = PopupState::Open;
            }
            PopupState::Closed => {
                if self.is_disabled() {
                    return;
                }
                match self.scheduler.schedule(now, self.config.open_delay, Intent::Open) {
                    Scheduled::Immediate(_) => self.do_open(events),
                    Scheduled::Pending(handle) => {
                        self.pending_open = Some(handle);
                        self.state = PopupState::Opening;
                    }
                }
            }
        }
    }

    fn request_close(&mut self, now: Millis, events: &mut Vec<PopoverEvent>) {
        match self.state {
            // Idempotent: already closed or already on the way.
            PopupState::Closed | PopupState::Closing => {}
            PopupState::Opening => {
                // Cancel before mount: nothing was shown, so no `Hidden` is
                // owed.
                if let Some(handle) = self.pending_open.take() {
                    self.scheduler.cancel(handle);
                }
                self.state = PopupState::Closed;
            }
            PopupState::Open => {
                match self
                    .scheduler
                    .schedule(now, self.config.close_delay, Intent::Close)
                {
                    Scheduled::Immediate(_) => self.do_close(self.config.animation, false, events),
                    Scheduled::Pending(handle) => {
                        self.pending_close = Some(handle);
                        self.state = PopupState::Closing;
                    }
                }
            }
        }
    }

    /// Immediate close bypassing `close_delay`: reconfiguration and detach.
    /// `force` additionally refuses to wait on a deferred unmount.
    fn close_now(&mut self, force: bool, events: &mut Vec<PopoverEvent>) {
        if let Some(handle) = self.pending_open.take() {
            self.scheduler.cancel(handle);
        }
        if let Some(handle) = self.pending_close.take() {
            self.scheduler.cancel(handle);
        }
        match self.state {
            PopupState::Closed => {}
            PopupState::Opening => self.state = PopupState::Closed,
            PopupState::Open => self.do_close(self.config.animation && !force, force, events),
            PopupState::Closing => {
                if self.unmount_deferred {
                    if force {
                        self.unmount_deferred = false;
                        self.state = PopupState::Closed;
                        events.push(PopoverEvent::Hidden);
                    }
                    // Otherwise the unmount is already in flight and `Hidden`
                    // arrives through `unmount_complete`.
                } else {
                    self.do_close(self.config.animation && !force, force, events);
                }
            }
        }
    }

    fn apply_disable(&mut self) -> Vec<PopoverEvent> {
        let mut events = Vec::new();
        if self.is_disabled() {
            self.close_now(false, &mut events);
        }
        events
    }

    fn do_open(&mut self, events: &mut Vec<PopoverEvent>) {
        match self.factory.mount(
            self.content.as_ref(),
            self.title.as_ref(),
            self.anchor,
            self.panel_id,
            self.config.animation,
        ) {
            Some(mount) => {
                self.state = PopupState::Open;
                self.autoclose = Some(AutoCloseRegistration::arm(
                    self.config.auto_close,
                    self.anchor,
                    mount.panel,
                ));
                events.push(PopoverEvent::Reposition(self.compute_position(mount.panel)));
                self.mounted = Some(mount);
                self.shown_pending = true;
            }
            // No valid rendering context: drop the request silently.
            None => self.state = PopupState::Closed,
        }
    }

    fn do_close(&mut self, animate: bool, force: bool, events: &mut Vec<PopoverEvent>) {
        if let Some(reg) = self.autoclose.as_mut() {
            reg.disarm();
        }
        self.autoclose = None;
        self.shown_pending = false;
        let Some(mount) = self.mounted.take() else {
            self.state = PopupState::Closed;
            return;
        };
        match self.factory.unmount(mount.handle, animate) {
            Unmounted::Done => {
                self.state = PopupState::Closed;
                events.push(PopoverEvent::Hidden);
            }
            Unmounted::Deferred => {
                if force {
                    // Detach does not wait on the host's teardown.
                    self.state = PopupState::Closed;
                    events.push(PopoverEvent::Hidden);
                } else {
                    self.state = PopupState::Closing;
                    self.unmount_deferred = true;
                }
            }
        }
    }

    /// Solve the panel position from current geometry. Unavailable rects
    /// degrade to the boundary's origin instead of failing the mount.
    fn compute_position(&self, panel: K) -> Position {
        let boundary = self.geometry.boundary_rect();
        let space = match self.config.container {
            Container::Body => Space::Boundary,
            Container::Inline => Space::Anchor,
        };
        let anchor = self
            .geometry
            .bounding_rect(self.anchor)
            .unwrap_or(Rect::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN));
        let panel_size = self
            .geometry
            .bounding_rect(panel)
            .map_or(Size::new(f64::NAN, f64::NAN), |r| r.size());
        solve(anchor, panel_size, &self.config.placement, boundary, space)
    }
}
