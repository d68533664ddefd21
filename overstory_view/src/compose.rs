// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition functions and the position-keyed default composition.
//!
//! A composition function turns the ordered content sequence into one
//! renderable unit for the host tree. Hosts with a natural container type
//! supply their own; [`keyed`] is the fallback used by
//! [`View::new`](crate::View::new), wrapping every item with its position so
//! the host's reconciler has a key to diff on.

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Boxed composition function stored by a [`View`](crate::View).
///
/// Receives the ordered content values of the view's current snapshot and
/// returns the composed rendering.
pub type ComposeFn<C, R> = Box<dyn Fn(&[C]) -> R>;

/// Content wrapped with its position in the current rendered list.
///
/// The key is positional, so it is stable across re-renders only while the
/// relative order of items is unchanged. Items cannot be independently
/// reordered through the registry, so a dismissal shifts the keys of
/// everything behind it — acceptable for overlay stacks, where the tail is
/// the churn point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Keyed<C> {
    /// Position of the item in the rendered list.
    pub key: usize,
    /// The content value at that position.
    pub content: C,
}

/// The default composition: every content item in sequence, keyed by
/// position.
pub fn keyed<C: Clone>(contents: &[C]) -> Vec<Keyed<C>> {
    contents
        .iter()
        .cloned()
        .enumerate()
        .map(|(key, content)| Keyed { key, content })
        .collect()
}
