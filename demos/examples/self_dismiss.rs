// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content that captures its own id for a later self-dismiss.
//!
//! `push_with` hands the freshly assigned id to the content factory, so the
//! content can carry a dismiss action targeted at itself — the pattern a
//! toast with a close button uses. This demo also uses the process-wide
//! shared registry (`std` feature) instead of an explicitly constructed one.
//!
//! Run:
//! - `cargo run -p overstory_demos --example self_dismiss`

use std::rc::Rc;

use overstory_registry::Registry;

struct Toast {
    text: String,
    close: Rc<dyn Fn()>,
}

fn spawn_toast(text: &str) {
    let overlays: Registry<Toast> = Registry::shared();
    overlays.push_with(|id| {
        let registry = Registry::<Toast>::shared();
        Toast {
            text: format!("{text} (#{id})"),
            close: Rc::new(move || registry.dismiss(id)),
        }
    });
}

fn print_toasts(label: &str) {
    let overlays: Registry<Toast> = Registry::shared();
    println!("{label}:");
    overlays.with(|entries| {
        for entry in entries {
            println!("  {}", entry.content.text);
        }
        if entries.is_empty() {
            println!("  (none)");
        }
    });
}

fn main() {
    spawn_toast("build finished");
    spawn_toast("2 warnings");
    print_toasts("after spawning");

    // A timer or close button would fire this later; here we just take the
    // first toast's close action out of the list and invoke it. The clone
    // matters: dismissing while the list is borrowed would reenter the
    // registry.
    let overlays: Registry<Toast> = Registry::shared();
    let close_first = overlays.with(|entries| Rc::clone(&entries[0].content.close));
    close_first();
    print_toasts("after the first toast closed itself");

    overlays.dismiss_all();
    print_toasts("after dismiss_all");
}
