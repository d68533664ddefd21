// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The process-wide shared registry, one per content type.
//!
//! Applications that only ever need a single overlay surface can use
//! [`Registry::shared`] instead of threading an explicitly constructed
//! handle through their code. The instance is initialized on first access
//! and never torn down. Libraries and tests should prefer explicit
//! instances, which avoid shared global state entirely.

use std::any::{Any, TypeId};
use std::boxed::Box;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::registry::Registry;

std::thread_local! {
    // One registry per content type. The registry is single-threaded, so the
    // "process-wide" instance is per thread; hosts run mutation, dispatch,
    // and rendering on the one UI thread anyway.
    static SHARED: RefCell<HashMap<TypeId, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

impl<C: 'static> Registry<C> {
    /// Handle to the shared default registry for content type `C`.
    ///
    /// Every call on the same thread returns a handle to the same instance;
    /// distinct content types get distinct instances. Requires the `std`
    /// feature.
    pub fn shared() -> Self {
        SHARED.with(|map| {
            let mut map = map.borrow_mut();
            map.entry(TypeId::of::<C>())
                .or_insert_with(|| Box::new(Self::new()))
                .downcast_ref::<Self>()
                .expect("the shared map is keyed by TypeId, so the boxed value is Registry<C>")
                .clone()
        })
    }
}
