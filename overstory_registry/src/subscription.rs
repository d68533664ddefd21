// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subscriber registration keys and the RAII deregistration guard.

use alloc::boxed::Box;

/// Registration-order key for one subscriber.
///
/// Keys come from a per-registry monotonic counter, so comparing keys orders
/// subscribers by registration time. Removal is by key, never by callback
/// value (callbacks are not comparable).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriberKey(u64);

impl SubscriberKey {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// RAII guard for one registered notification callback.
///
/// Returned by [`Registry::subscribe`](crate::Registry::subscribe). Dropping
/// the guard deregisters the callback eagerly: it will not fire on any later
/// mutation. Tie the guard to the consumer's active lifetime so that every
/// exit path, including unwinding, deregisters.
///
/// A guard may be dropped from inside a notification callback; the in-flight
/// dispatch pass iterates a snapshot of the subscriber list and is
/// unaffected. Dropping a guard after its registry is gone is a no-op.
pub struct Subscription {
    key: SubscriberKey,
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(key: SubscriberKey, unsubscribe: Box<dyn FnOnce()>) -> Self {
        Self {
            key,
            unsubscribe: Some(unsubscribe),
        }
    }

    /// The registration key this guard releases on drop.
    pub fn key(&self) -> SubscriberKey {
        self.key
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn subscriber_keys_order_by_registration() {
        assert!(SubscriberKey::new(0) < SubscriberKey::new(1));
    }

    #[test]
    fn drop_runs_the_teardown_exactly_once() {
        let runs = Rc::new(Cell::new(0u32));
        let runs_in = Rc::clone(&runs);
        let sub = Subscription::new(
            SubscriberKey::new(0),
            Box::new(move || runs_in.set(runs_in.get() + 1)),
        );
        assert_eq!(runs.get(), 0);
        drop(sub);
        assert_eq!(runs.get(), 1);
    }
}
