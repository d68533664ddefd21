// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry basics.
//!
//! This minimal example pushes anonymous and tagged content, dismisses by
//! id and by position, and prints the list after each mutation.
//!
//! Run:
//! - `cargo run -p overstory_demos --example overlay_basics`

use overstory_registry::Registry;

fn print_state(label: &str, overlays: &Registry<String>) {
    overlays.with(|entries| {
        println!("{label}:");
        for entry in entries {
            match entry.id {
                Some(id) => println!("  [{id}] {}", entry.content),
                None => println!("  [-] {}", entry.content),
            }
        }
        if entries.is_empty() {
            println!("  (empty)");
        }
    });
}

fn main() {
    let overlays: Registry<String> = Registry::new();

    overlays.push(String::from("A"));
    print_state("after push(\"A\")", &overlays);

    let id = overlays.push_with(|id| format!("B{id}"));
    print_state("after push_with(|id| ..)", &overlays);

    overlays.dismiss(id);
    print_state("after dismiss(id)", &overlays);

    overlays.dismiss_last();
    print_state("after dismiss_last()", &overlays);

    // Dismissals are total: unknown ids and empty lists are silent no-ops.
    overlays.dismiss(id);
    overlays.dismiss_last();
    print_state("after redundant dismissals", &overlays);
}
