// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-interaction dismissal.
//!
//! With `outside` autoclose, pointer-downs inside the panel are ignored and
//! a pointer-down on the document body dismisses the popover. Escape
//! dismisses from anywhere.
//!
//! Run:
//! - `cargo run -p epiphyte_examples --example popover_autoclose`

use epiphyte_popover::autoclose::{AutoClose, Interaction};
use epiphyte_popover::popover::Popover;
use epiphyte_popover::types::{
    ElementLookup, GeometryProvider, Mount, PanelFactory, PanelId, PopoverConfig, PopoverEvent,
    Unmounted,
};
use kurbo::Rect;

const BODY: u32 = 0;
const ANCHOR: u32 = 1;
const PANEL: u32 = 2;
const PANEL_BUTTON: u32 = 21;

struct Doc;
impl ElementLookup<u32> for Doc {
    fn parent_of(&self, element: u32) -> Option<u32> {
        match element {
            PANEL_BUTTON => Some(PANEL),
            ANCHOR | PANEL => Some(BODY),
            _ => None,
        }
    }
}

struct Factory;
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
        Some(Mount { handle: 1, panel: PANEL })
    }

    fn unmount(&mut self, _handle: u32, _animate: bool) -> Unmounted {
        Unmounted::Done
    }
}

struct Geo;
impl GeometryProvider<u32> for Geo {
    fn bounding_rect(&self, element: u32) -> Option<Rect> {
        match element {
            ANCHOR => Some(Rect::new(10.0, 10.0, 40.0, 25.0)),
            PANEL => Some(Rect::new(0.0, 0.0, 50.0, 20.0)),
            _ => None,
        }
    }

    fn boundary_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 200.0, 200.0)
    }
}

fn main() {
    let config = PopoverConfig {
        auto_close: AutoClose::Outside,
        ..PopoverConfig::default()
    };
    let mut popover = Popover::new(ANCHOR, Factory, Geo, Doc, config, PanelId::new(0));
    let _ = popover.set_content(Some("pick an option"));

    let _ = popover.open(0);
    assert!(popover.is_open());
    println!("interaction interest: {:?}", popover.autoclose_interest());

    println!("== Pointer-down inside the panel ==");
    let events = popover.handle_interaction(&Interaction::PointerDown(Some(PANEL_BUTTON)), 10);
    println!("  events: {events:?}");
    assert!(popover.is_open());

    println!("== Pointer-down on the body ==");
    let events = popover.handle_interaction(&Interaction::PointerDown(Some(BODY)), 20);
    println!("  events: {events:?}");
    assert_eq!(events, vec![PopoverEvent::Hidden]);
    assert!(!popover.is_open());

    println!("== Escape dismisses from anywhere ==");
    let _ = popover.open(30);
    let events = popover.handle_interaction(&Interaction::Escape, 40);
    println!("  events: {events:?}");
    assert_eq!(events, vec![PopoverEvent::Hidden]);
}
