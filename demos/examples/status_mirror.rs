// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A mounted view mirroring the registry into a host "frame loop".
//!
//! The host here is a plain loop: each simulated event mutates the registry,
//! the wake hook requests a frame, and the frame renders the view through a
//! composition function that joins the status lines.
//!
//! Run:
//! - `cargo run -p overstory_demos --example status_mirror`

use std::cell::Cell;
use std::rc::Rc;

use overstory_registry::Registry;
use overstory_view::View;

fn main() {
    let statuses: Registry<String> = Registry::new();
    let mut view = View::with_compose(&statuses, |contents| contents.join(" · "));

    let frame_requested = Rc::new(Cell::new(false));
    let waker = Rc::clone(&frame_requested);
    view.mount_with(move || waker.set(true));

    let events: Vec<Box<dyn Fn(&Registry<String>)>> = vec![
        Box::new(|r| r.push(String::from("connected"))),
        Box::new(|r| {
            r.push_with(|id| format!("sync #{id} running"));
        }),
        Box::new(|r| r.push(String::from("3 files changed"))),
        Box::new(|r| r.dismiss_last()),
        Box::new(|r| r.dismiss_all()),
    ];

    for (frame, event) in events.iter().enumerate() {
        event(&statuses);
        if frame_requested.replace(false) {
            println!("frame {frame}: {}", view.render());
        }
    }

    view.unmount();
    statuses.push(String::from("unseen"));
    assert!(!frame_requested.get());
    println!("unmounted: no frame requested for later mutations");
}
