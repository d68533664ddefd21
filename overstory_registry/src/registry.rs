// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The registry: ordered entries, mutation operations, and notification
//! dispatch.
//!
//! ## Overview
//!
//! [`Registry`] owns the ordered overlay list and the subscriber list.
//! Every mutation fully updates state and fully notifies all subscribers, in
//! registration order, before returning. Notifications carry no payload;
//! consumers re-read the current state through [`Registry::snapshot`],
//! [`Registry::contents`], or [`Registry::with`].
//!
//! ## Reentrancy
//!
//! The internal borrow is never held across caller-supplied code. Content
//! factories and notification callbacks may themselves mutate the registry or
//! manage subscriptions; dispatch iterates a snapshot of the subscriber list
//! taken up front, and a mutation performed inside a callback triggers its
//! own full, nested dispatch pass. There is no batching or coalescing.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::subscription::{SubscriberKey, Subscription};
use crate::types::{Entry, EntryId};

type Callback = Rc<dyn Fn()>;

struct Inner<C> {
    entries: Vec<Entry<C>>,
    next_id: u64,
    next_subscriber: u64,
    // Registration order is list order; dispatch walks front to back.
    subscribers: Vec<(SubscriberKey, Callback)>,
}

impl<C> Inner<C> {
    const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            next_subscriber: 0,
            subscribers: Vec::new(),
        }
    }
}

/// An ordered overlay registry with stable identity tags and change
/// notification.
///
/// ## Usage
///
/// - Construct with [`Registry::new`]; clone the handle freely — clones share
///   the same list, counter, and subscribers. Independently constructed
///   registries are completely isolated.
/// - Mutate with [`Registry::push`], [`Registry::push_with`],
///   [`Registry::dismiss`], [`Registry::dismiss_last`], and
///   [`Registry::dismiss_all`]. None of these can fail: dismissing an unknown
///   id or popping an empty list is a silent no-op.
/// - Observe with [`Registry::subscribe`]; the returned [`Subscription`]
///   guard deregisters on drop.
///
/// The registry is single-threaded: mutations, dispatch, and rendering all
/// happen on the one logical thread the hosting runtime uses.
pub struct Registry<C> {
    inner: Rc<RefCell<Inner<C>>>,
}

// Manual Clone: shares the same inner state, no `C: Clone` requirement.
impl<C> Clone for Registry<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> core::fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Registry")
            .field("len", &inner.entries.len())
            .field("subscribers", &inner.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<C> Registry<C> {
    /// Create an empty registry with its own counter and subscriber list.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner::new())),
        }
    }

    /// Append content without an identity tag.
    ///
    /// The entry can only be removed by position ([`Registry::dismiss_last`])
    /// or wholesale ([`Registry::dismiss_all`]). Triggers notification.
    pub fn push(&self, content: C) {
        self.inner
            .borrow_mut()
            .entries
            .push(Entry { id: None, content });
        self.notify();
    }

    /// Append content built by `factory`, tagged with a freshly assigned id.
    ///
    /// The factory is invoked exactly once, with the id the new entry will
    /// carry, so the content can capture its own id (e.g. for a later
    /// self-dismiss action). The id is assigned before the factory runs and
    /// the internal borrow is released around the call, so a factory that
    /// reenters the registry is handled: entries it appends land before the
    /// entry being pushed. Triggers notification and returns the id.
    pub fn push_with(&self, factory: impl FnOnce(EntryId) -> C) -> EntryId {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = EntryId::new(inner.next_id);
            inner.next_id += 1;
            id
        };
        let content = factory(id);
        self.inner.borrow_mut().entries.push(Entry {
            id: Some(id),
            content,
        });
        self.notify();
        id
    }

    /// Remove the entry tagged `id`, if present.
    ///
    /// Identity tags are unique, so at most one entry matches; the relative
    /// order of the remaining entries is unchanged. An unknown id is a
    /// no-op, not an error, but notification still fires: the source system
    /// replaces the list on every dismiss, and subscribers re-read state
    /// regardless.
    pub fn dismiss(&self, id: EntryId) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(pos) = inner.entries.iter().position(|e| e.id == Some(id)) {
                inner.entries.remove(pos);
            }
        }
        self.notify();
    }

    /// Remove the last entry, regardless of its identity tag.
    ///
    /// A no-op on an empty registry. Triggers notification.
    pub fn dismiss_last(&self) {
        self.inner.borrow_mut().entries.pop();
        self.notify();
    }

    /// Remove every entry, regardless of size. Triggers notification.
    pub fn dismiss_all(&self) {
        self.inner.borrow_mut().entries.clear();
        self.notify();
    }

    /// Clone of the current ordered entry list.
    pub fn snapshot(&self) -> Vec<Entry<C>>
    where
        C: Clone,
    {
        self.inner.borrow().entries.clone()
    }

    /// Clone of the ordered content values only.
    pub fn contents(&self) -> Vec<C>
    where
        C: Clone,
    {
        self.inner
            .borrow()
            .entries
            .iter()
            .map(|e| e.content.clone())
            .collect()
    }

    /// Borrow the current entry list without cloning.
    ///
    /// The borrow is held for the duration of `f`, so `f` must not call back
    /// into a mutation on this registry.
    pub fn with<R>(&self, f: impl FnOnce(&[Entry<C>]) -> R) -> R {
        f(&self.inner.borrow().entries)
    }

    /// Number of entries currently displayed.
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// True if no entries are currently displayed.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// True if an entry tagged `id` is currently displayed.
    pub fn contains(&self, id: EntryId) -> bool {
        self.inner
            .borrow()
            .entries
            .iter()
            .any(|e| e.id == Some(id))
    }

    /// Number of live subscriber registrations.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Register a no-argument notification callback.
    ///
    /// The callback fires once per mutation, in registration order relative
    /// to other subscribers, until the returned [`Subscription`] guard is
    /// dropped. Notifications carry no payload; re-read state through
    /// [`Registry::snapshot`] or [`Registry::contents`].
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription
    where
        C: 'static,
    {
        let callback: Callback = Rc::new(callback);
        let key = {
            let mut inner = self.inner.borrow_mut();
            let key = SubscriberKey::new(inner.next_subscriber);
            inner.next_subscriber += 1;
            inner.subscribers.push((key, callback));
            key
        };
        let weak = Rc::downgrade(&self.inner);
        Subscription::new(
            key,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(k, _)| *k != key);
                }
            }),
        )
    }

    /// Dispatch one notification pass over a stable snapshot of the
    /// subscriber list.
    ///
    /// The borrow is released before any callback runs, so callbacks may
    /// mutate the registry or manage subscriptions mid-pass.
    fn notify(&self) {
        let callbacks: Vec<Callback> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in &callbacks {
            callback();
        }
    }
}
