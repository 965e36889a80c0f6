// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change listeners.
//!
//! Each controller keeps one [`Listeners`] list per event kind. Registration
//! hands back a [`ListenerId`] that can later be used to unregister. Listeners
//! run synchronously, in registration order, inside the call that changed the
//! viewport.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Handle for a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// An ordered list of callbacks receiving `&E`.
pub(crate) struct Listeners<E: ?Sized> {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn FnMut(&E)>)>,
}

impl<E: ?Sized> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E: ?Sized> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish()
    }
}

impl<E: ?Sized> Listeners<E> {
    /// Appends `callback` and returns its handle.
    pub(crate) fn add(&mut self, callback: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Unregisters `id`. Returns `false` if it was not registered.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Calls every listener with `event`.
    pub(crate) fn notify(&mut self, event: &E) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }
}
