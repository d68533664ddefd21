// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_view --heading-base-level=0

//! Overstory View: a render adapter mirroring an overlay registry into a
//! declarative UI tree.
//!
//! ## Overview
//!
//! Each independent consumer of a [`Registry`](overstory_registry::Registry)
//! owns one [`View`]. On mount the view captures the current list and
//! subscribes; on every registry mutation it replaces its held snapshot,
//! marks itself dirty, and wakes the host; on unmount (or drop) it
//! deregisters. Rendering turns the snapshot into the host's renderable
//! unit through a composition function:
//!
//! 1. A per-use override passed to [`View::render_with`], else
//! 2. the composition supplied to [`View::with_compose`], else
//! 3. the position-keyed default installed by [`View::new`]
//!    (see [`keyed`](crate::compose::keyed)).
//!
//! ## Example
//!
//! ```rust
//! use overstory_registry::Registry;
//! use overstory_view::{Keyed, View};
//!
//! let overlays: Registry<&'static str> = Registry::new();
//! let mut view = View::new(&overlays);
//! view.mount();
//!
//! overlays.push("toast");
//! assert!(view.take_dirty());
//! assert_eq!(
//!     view.render(),
//!     vec![Keyed { key: 0, content: "toast" }],
//! );
//!
//! view.unmount(); // or drop the view; either way the callback is gone
//! ```
//!
//! Hosts with a scheduler mount with a wake hook instead of polling:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use overstory_registry::Registry;
//! use overstory_view::View;
//!
//! let overlays: Registry<String> = Registry::new();
//! let mut view = View::with_compose(&overlays, |contents| contents.join("\n"));
//!
//! let needs_frame = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&needs_frame);
//! view.mount_with(move || flag.set(true));
//!
//! overlays.push(String::from("download finished"));
//! assert!(needs_frame.get());
//! assert_eq!(view.render(), "download finished");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod compose;
pub mod view;

pub use compose::{ComposeFn, Keyed, keyed};
pub use view::View;
