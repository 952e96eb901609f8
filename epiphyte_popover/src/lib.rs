// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=epiphyte_popover --heading-base-level=0

//! Epiphyte Popover: a deterministic lifecycle engine for anchored overlays.
//!
//! ## Overview
//!
//! This crate manages a transient floating panel (a popover) anchored to a
//! trigger element: it parses trigger configurations, runs an open/close
//! state machine with cancelable delays, solves the panel's placement
//! against the anchor and boundary, and dismisses on qualifying outside
//! interactions. It does not render, style, or own a scene graph; the host
//! supplies those capabilities through small traits and opaque element keys.
//!
//! ## Modules
//!
//! - [`triggers`]: trigger-specification parsing (`"click"`, `"hover"`,
//!   `"focusin:focusout"`, `"manual"`) and event-to-action resolution.
//! - [`schedule`]: cancelable delayed actions on a host-driven clock; zero
//!   delays run synchronously.
//! - [`autoclose`]: outside-interaction detection over the anchor and panel
//!   subtrees, with `off`/`any`/`inside`/`outside` modes.
//! - [`popover`]: the lifecycle manager tying everything together.
//! - [`types`]: states, events, identifiers, configuration, and the
//!   capability traits the host implements.
//!
//! ## Determinism
//!
//! Nothing here reads a clock, subscribes to anything, or polls. The host
//! feeds events and timestamps in; the engine hands back
//! [`PopoverEvent`](crate::types::PopoverEvent) sequences to apply. Identical
//! input sequences produce identical output sequences, which makes lifecycle
//! behavior (including delay cancellation races) directly testable.
//!
//! ## Minimal example
//!
//! ```
//! use epiphyte_popover::popover::Popover;
//! use epiphyte_popover::types::{
//!     GeometryProvider, Mount, NoParents, PanelFactory, PanelId, PopoverConfig, PopoverEvent,
//!     Unmounted,
//! };
//! use kurbo::Rect;
//!
//! // Element keys are opaque to the engine; this host uses small integers.
//! const ANCHOR: u32 = 1;
//! const PANEL: u32 = 2;
//!
//! struct Factory;
//! impl PanelFactory<u32> for Factory {
//!     type Content = &'static str;
//!     type Handle = ();
//!     fn mount(
//!         &mut self,
//!         _content: Option<&&'static str>,
//!         _title: Option<&&'static str>,
//!         _anchor: u32,
//!         _id: PanelId,
//!         _animate: bool,
//!     ) -> Option<Mount<(), u32>> {
//!         Some(Mount { handle: (), panel: PANEL })
//!     }
//!     fn unmount(&mut self, _handle: (), _animate: bool) -> Unmounted {
//!         Unmounted::Done
//!     }
//! }
//!
//! struct Geo;
//! impl GeometryProvider<u32> for Geo {
//!     fn bounding_rect(&self, element: u32) -> Option<Rect> {
//!         match element {
//!             ANCHOR => Some(Rect::new(40.0, 40.0, 60.0, 50.0)),
//!             PANEL => Some(Rect::new(0.0, 0.0, 20.0, 10.0)),
//!             _ => None,
//!         }
//!     }
//!     fn boundary_rect(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 100.0, 100.0)
//!     }
//! }
//!
//! let config = PopoverConfig::default(); // `click` toggle, no delays
//! let mut popover = Popover::new(ANCHOR, Factory, Geo, NoParents, config, PanelId::new(0));
//! let _ = popover.set_content(Some("Hello"));
//!
//! let events = popover.handle_trigger("click", 0);
//! assert!(popover.is_open());
//! assert!(matches!(events[..], [PopoverEvent::Reposition(_)]));
//!
//! // The first stabilization after the mount announces the panel.
//! let events = popover.layout_settled();
//! assert_eq!(events[1], PopoverEvent::Shown);
//!
//! let events = popover.handle_trigger("click", 5);
//! assert_eq!(events, vec![PopoverEvent::Hidden]);
//! ```
//!
//! Malformed configuration never errors: unknown trigger tokens and
//! placement tokens are skipped with documented fallbacks, disabled popovers
//! drop open requests silently, and missing geometry degrades to the
//! boundary's origin. The worst observable failure is a mispositioned or
//! non-appearing popover, never a panic.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod autoclose;
pub mod popover;
pub mod schedule;
pub mod triggers;
pub mod types;
