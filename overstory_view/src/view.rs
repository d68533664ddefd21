// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render adapter: subscription lifecycle, snapshot mirroring, and
//! rendering through composition functions.
//!
//! ## Overview
//!
//! One [`View`] per independent consumer of a registry. While mounted, the
//! view holds a registry subscription whose callback replaces the held
//! snapshot with the registry's current contents, marks the view dirty, and
//! invokes the host's wake hook. Rendering composes the held snapshot; it
//! never reads the registry directly, so a render always reflects the state
//! at the most recent notification.
//!
//! ## Lifecycle
//!
//! inactive → active ([`View::mount`]) → inactive ([`View::unmount`] or
//! drop). While active, zero or more re-renders triggered by registry
//! notifications. Mounting an active view and unmounting an inactive one
//! are no-ops.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use overstory_registry::{Registry, Subscription};

use crate::compose::{ComposeFn, Keyed, keyed};

/// A reactive view mirroring one registry into a declarative UI tree.
///
/// ## Usage
///
/// - Construct with [`View::new`] for the position-keyed default
///   composition, or [`View::with_compose`] to supply one producing any
///   rendering type.
/// - Call [`View::mount`] (or [`View::mount_with`] to install a wake hook)
///   when the consumer becomes active, and [`View::unmount`] on teardown;
///   dropping a mounted view also deregisters.
/// - Drive rendering with [`View::render`], or [`View::render_with`] for a
///   per-use composition override. Poll [`View::take_dirty`] from hosts
///   without a wake mechanism.
pub struct View<C, R> {
    registry: Registry<C>,
    // Shared with the subscription callback, which replaces it on every
    // notification while mounted.
    snapshot: Rc<RefCell<Vec<C>>>,
    dirty: Rc<Cell<bool>>,
    compose: ComposeFn<C, R>,
    subscription: Option<Subscription>,
}

impl<C, R> core::fmt::Debug for View<C, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("View")
            .field("items", &self.snapshot.borrow().len())
            .field("mounted", &self.subscription.is_some())
            .field("dirty", &self.dirty.get())
            .finish_non_exhaustive()
    }
}

impl<C: Clone + 'static> View<C, Vec<Keyed<C>>> {
    /// Create a view over `registry` using the default composition.
    ///
    /// Renders to the position-keyed content sequence; see
    /// [`keyed`](crate::compose::keyed).
    pub fn new(registry: &Registry<C>) -> Self {
        Self::with_compose(registry, |contents: &[C]| keyed(contents))
    }
}

impl<C: Clone + 'static, R> View<C, R> {
    /// Create a view over `registry` with a caller-supplied composition.
    ///
    /// The composition is applied by every [`View::render`] call for the
    /// lifetime of the view; [`View::render_with`] overrides it per use.
    pub fn with_compose(registry: &Registry<C>, compose: impl Fn(&[C]) -> R + 'static) -> Self {
        Self {
            registry: registry.clone(),
            snapshot: Rc::new(RefCell::new(registry.contents())),
            dirty: Rc::new(Cell::new(false)),
            compose: Box::new(compose),
            subscription: None,
        }
    }

    /// Activate the view: capture the current snapshot and subscribe.
    ///
    /// A no-op if already mounted.
    pub fn mount(&mut self) {
        self.mount_inner(None);
    }

    /// Activate the view with a host wake hook.
    ///
    /// `wake` is invoked after every snapshot replacement, so hosts with a
    /// scheduler can request a re-render instead of polling
    /// [`View::take_dirty`]. A no-op if already mounted.
    pub fn mount_with(&mut self, wake: impl Fn() + 'static) {
        self.mount_inner(Some(Rc::new(wake)));
    }

    fn mount_inner(&mut self, wake: Option<Rc<dyn Fn()>>) {
        if self.subscription.is_some() {
            return;
        }
        *self.snapshot.borrow_mut() = self.registry.contents();
        self.dirty.set(true);

        let reader = self.registry.clone();
        let snapshot = Rc::clone(&self.snapshot);
        let dirty = Rc::clone(&self.dirty);
        self.subscription = Some(self.registry.subscribe(move || {
            *snapshot.borrow_mut() = reader.contents();
            dirty.set(true);
            if let Some(wake) = &wake {
                wake();
            }
        }));
    }

    /// Deactivate the view, deregistering its notification callback.
    ///
    /// The held snapshot keeps the last mirrored state; later registry
    /// mutations no longer reach this view. A no-op if not mounted.
    pub fn unmount(&mut self) {
        self.subscription = None;
    }

    /// True while the view holds a live registry subscription.
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Return the dirty flag and clear it.
    ///
    /// Set on mount and on every notification; for hosts that poll.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Compose the held snapshot with the view's composition function.
    pub fn render(&self) -> R {
        let contents = self.snapshot.borrow();
        (self.compose)(&contents)
    }

    /// Compose the held snapshot with a per-use override instead of the
    /// view's own composition function.
    pub fn render_with<R2>(&self, compose: impl FnOnce(&[C]) -> R2) -> R2 {
        let contents = self.snapshot.borrow();
        compose(&contents)
    }
}
