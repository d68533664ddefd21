// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_registry --heading-base-level=0

//! Overstory Registry: an ordered overlay registry with change notification.
//!
//! ## Overview
//!
//! Declarative UI trees render from the top down, but overlays — toasts,
//! banners, transient modals — are born in event handlers, timers, and
//! asynchronous callbacks. This crate is the meeting point: imperative code
//! pushes and dismisses content here, and subscribed render adapters mirror
//! the current list back into the declarative tree.
//!
//! - [`Registry::push`] appends content with no identity tag; such entries
//!   are only removable by position.
//! - [`Registry::push_with`] assigns a fresh [`EntryId`] and hands it to a
//!   content factory, so the content can capture its own id for a later
//!   self-dismiss.
//! - [`Registry::dismiss`], [`Registry::dismiss_last`], and
//!   [`Registry::dismiss_all`] remove entries; all three are total, with
//!   unknown ids and empty lists as silent no-ops.
//! - [`Registry::subscribe`] registers a no-payload change callback and
//!   returns a [`Subscription`] guard that deregisters on drop.
//!
//! Subscribers are notified in registration order, once per mutation, with
//! no batching; they re-read state through [`Registry::snapshot`],
//! [`Registry::contents`], or [`Registry::with`].
//!
//! ## Example
//!
//! ```rust
//! use overstory_registry::Registry;
//!
//! let overlays: Registry<String> = Registry::new();
//! overlays.push(String::from("saved"));
//! let id = overlays.push_with(|id| format!("upload #{id} running"));
//! assert_eq!(overlays.contents(), vec!["saved", "upload #0 running"]);
//!
//! // The tagged entry can be dismissed from anywhere, any time later.
//! overlays.dismiss(id);
//! assert_eq!(overlays.contents(), vec!["saved"]);
//! ```
//!
//! Observing changes:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use overstory_registry::Registry;
//!
//! let overlays: Registry<&'static str> = Registry::new();
//! let seen = Rc::new(Cell::new(0));
//! let seen_in = Rc::clone(&seen);
//! let sub = overlays.subscribe(move || seen_in.set(seen_in.get() + 1));
//!
//! overlays.push("one notification per mutation");
//! overlays.dismiss_last();
//! assert_eq!(seen.get(), 2);
//!
//! drop(sub); // deregisters; later mutations no longer fire the callback
//! overlays.push("unobserved");
//! assert_eq!(seen.get(), 2);
//! ```
//!
//! ## Scope
//!
//! The registry owns ordering and identity only. Stacking policy, focus,
//! animation, and styling belong to the content pushed into it; mirroring
//! into a concrete UI tree is the adapter crate's job (`overstory_view`).
//!
//! This crate is `no_std` and uses `alloc`. The `std` feature adds
//! [`Registry::shared`], a process-wide default instance per content type.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod registry;
pub mod subscription;
pub mod types;

#[cfg(feature = "std")]
mod shared;

pub use registry::Registry;
pub use subscription::{SubscriberKey, Subscription};
pub use types::{Entry, EntryId};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    // A consumer in miniature: subscribes, re-reads on every notification,
    // and keeps its mirror equal to the registry list.
    #[test]
    fn a_subscriber_mirror_tracks_every_mutation() {
        let overlays: Registry<&str> = Registry::new();
        let mirror: Rc<RefCell<Vec<&str>>> = Rc::new(RefCell::new(Vec::new()));

        let mirror_in = Rc::clone(&mirror);
        let reader = overlays.clone();
        let _sub = overlays.subscribe(move || {
            *mirror_in.borrow_mut() = reader.contents();
        });

        overlays.push("a");
        let b = overlays.push_with(|_| "b");
        overlays.push("c");
        assert_eq!(*mirror.borrow(), vec!["a", "b", "c"]);

        overlays.dismiss(b);
        assert_eq!(*mirror.borrow(), vec!["a", "c"]);

        overlays.dismiss_last();
        assert_eq!(*mirror.borrow(), vec!["a"]);

        overlays.dismiss_all();
        assert!(mirror.borrow().is_empty());
    }

    #[test]
    fn ids_stay_unique_across_interleaved_mutations() {
        let overlays: Registry<u32> = Registry::new();
        let mut issued = Vec::new();
        for round in 0..8u32 {
            issued.push(overlays.push_with(|_| round));
            overlays.push(round);
            if round % 2 == 0 {
                overlays.dismiss_last();
            }
            if round % 3 == 0 {
                overlays.dismiss(issued[0]);
            }
        }
        let mut deduped = issued.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), issued.len());
    }
}
