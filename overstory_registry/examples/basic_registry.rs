// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Overstory Registry: push, dismiss, and observe changes.

use std::cell::Cell;
use std::rc::Rc;

use overstory_registry::Registry;

fn main() {
    let overlays: Registry<String> = Registry::new();

    let notifications = Rc::new(Cell::new(0u32));
    let notifications_in = Rc::clone(&notifications);
    let _sub = overlays.subscribe(move || notifications_in.set(notifications_in.get() + 1));

    overlays.push(String::from("saved"));
    let id = overlays.push_with(|id| format!("upload #{id} running"));
    println!("displayed: {:?}", overlays.contents());

    overlays.dismiss(id);
    println!("after dismiss({id}): {:?}", overlays.contents());

    overlays.dismiss_last();
    println!("after dismiss_last: {:?}", overlays.contents());
    println!("notifications delivered: {}", notifications.get());
}
