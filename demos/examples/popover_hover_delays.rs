// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover triggers with open/close delays.
//!
//! A quick pointer pass (enter then leave before the open delay elapses)
//! cancels the pending mount, so the panel never flickers. A dwell long
//! enough for the delay mounts it.
//!
//! Run:
//! - `cargo run -p epiphyte_examples --example popover_hover_delays`

use epiphyte_popover::popover::Popover;
use epiphyte_popover::types::{
    GeometryProvider, Mount, NoParents, PanelFactory, PanelId, PopoverConfig, PopupState,
    Unmounted,
};
use kurbo::Rect;

const ANCHOR: u32 = 1;
const PANEL: u32 = 2;

struct Factory {
    mounts: u32,
}
impl PanelFactory<u32> for Factory {
    type Content = &'static str;
    type Handle = u32;

    fn mount(
        &mut self,
        _content: Option<&&'static str>,
        _title: Option<&&'static str>,
        _anchor: u32,
        _id: PanelId,
        _animate: bool,
    ) -> Option<Mount<u32, u32>> {
        self.mounts += 1;
        println!("  mount (total {})", self.mounts);
        Some(Mount { handle: self.mounts, panel: PANEL })
    }

    fn unmount(&mut self, _handle: u32, _animate: bool) -> Unmounted {
        println!("  unmount");
        Unmounted::Done
    }
}

struct Geo;
impl GeometryProvider<u32> for Geo {
    fn bounding_rect(&self, element: u32) -> Option<Rect> {
        match element {
            ANCHOR => Some(Rect::new(80.0, 60.0, 120.0, 80.0)),
            PANEL => Some(Rect::new(0.0, 0.0, 40.0, 16.0)),
            _ => None,
        }
    }

    fn boundary_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 300.0, 200.0)
    }
}

fn main() {
    let config = PopoverConfig {
        triggers: String::from("hover"),
        open_delay: 200,
        close_delay: 100,
        ..PopoverConfig::default()
    };
    let mut popover = Popover::new(ANCHOR, Factory { mounts: 0 }, Geo, NoParents, config, PanelId::new(0));
    let _ = popover.set_content(Some("tooltip-ish"));
    println!("listening for: {:?}", popover.listen_events());

    println!("== Quick pass (enter at 0, leave at 50) ==");
    let _ = popover.handle_trigger("mouseenter", 0);
    assert_eq!(popover.state(), PopupState::Opening);
    let _ = popover.handle_trigger("mouseleave", 50);
    assert_eq!(popover.state(), PopupState::Closed);
    // The canceled open never fires.
    assert!(popover.tick(500).is_empty());

    println!("== Dwell (enter at 1000, delay elapses at 1200) ==");
    let _ = popover.handle_trigger("mouseenter", 1000);
    assert_eq!(popover.next_deadline(), Some(1200));
    let events = popover.tick(1200);
    println!("  events: {events:?}");
    assert!(popover.is_open());

    println!("== Leave (at 1500, close fires at 1600) ==");
    let _ = popover.handle_trigger("mouseleave", 1500);
    assert_eq!(popover.state(), PopupState::Closing);
    let events = popover.tick(1600);
    println!("  events: {events:?}");
    assert_eq!(popover.state(), PopupState::Closed);
}
