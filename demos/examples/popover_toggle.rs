// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-toggle popover lifecycle.
//!
//! Attach a popover with the default `click` trigger, toggle it open,
//! stabilize layout to collect the `Shown` notification, and toggle it
//! closed.
//!
//! Run:
//! - `cargo run -p epiphyte_examples --example popover_toggle`

use epiphyte_popover::popover::Popover;
use epiphyte_popover::types::{
    GeometryProvider, Mount, NoParents, PanelFactory, PanelId, PanelIds, PopoverConfig,
    PopoverEvent, Unmounted,
};
use kurbo::Rect;

const ANCHOR: u32 = 1;
const PANEL: u32 = 2;

struct Factory;
impl PanelFactory<u32> for Factory {
    type Content = &'static str;
    type Handle = u32;

    fn mount(
        &mut self,
        content: Option<&&'static str>,
        _title: Option<&&'static str>,
        _anchor: u32,
        id: PanelId,
        _animate: bool,
    ) -> Option<Mount<u32, u32>> {
        println!("  mount #{id}: {:?}", content.copied().unwrap_or(""));
        Some(Mount { handle: 1, panel: PANEL })
    }

    fn unmount(&mut self, handle: u32, _animate: bool) -> Unmounted {
        println!("  unmount #{handle}");
        Unmounted::Done
    }
}

struct Geo;
impl GeometryProvider<u32> for Geo {
    fn bounding_rect(&self, element: u32) -> Option<Rect> {
        match element {
            ANCHOR => Some(Rect::new(40.0, 40.0, 60.0, 50.0)),
            PANEL => Some(Rect::new(0.0, 0.0, 30.0, 12.0)),
            _ => None,
        }
    }

    fn boundary_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 200.0, 120.0)
    }
}

fn main() {
    let mut ids = PanelIds::new();
    let mut popover = Popover::new(
        ANCHOR,
        Factory,
        Geo,
        NoParents,
        PopoverConfig::default(),
        ids.next_id(),
    );
    let _ = popover.set_content(Some("Hello from the panel"));

    println!("== First click (opens) ==");
    let events = popover.handle_trigger("click", 0);
    assert!(popover.is_open());
    println!("  events: {events:?}");

    println!("== Layout settled ==");
    let events = popover.layout_settled();
    println!("  events: {events:?}");
    assert_eq!(events.last(), Some(&PopoverEvent::Shown));

    println!("== Second click (closes) ==");
    let events = popover.handle_trigger("click", 10);
    println!("  events: {events:?}");
    assert_eq!(events, vec![PopoverEvent::Hidden]);
    assert!(!popover.is_open());
}
