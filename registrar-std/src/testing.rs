//! Testing utilities for Registrar.
//!
//! # Features
//!
//! - [`CallCounter`]: wraps a constructor and counts its invocations
//! - [`ScopedRegistration`]: registers on a global kind and unregisters on drop

use crate::{global::GlobalRegistry, table::Origin};
use registrar_core::{KindConstructor, share};
use std::{
    marker::PhantomData,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

// ============================================================================
// Call Counter
// ============================================================================

/// Counts how many times wrapped constructors run.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CallCounter::new();
/// table.register("plain", counter.wrap(|()| Box::new(Plain) as Box<dyn Named>));
///
/// table.dispatch("plain", ());
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a constructor so each call increments this counter.
    pub fn wrap<A, R, F>(&self, ctor: F) -> impl Fn(A) -> R + Send + Sync + 'static
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let calls = self.calls.clone();
        move |args| {
            calls.fetch_add(1, Ordering::SeqCst);
            ctor(args)
        }
    }

    /// Number of calls so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}

// ============================================================================
// Scoped Registration
// ============================================================================

/// A runtime registration on a global kind that is undone on drop.
///
/// Global tables outlive individual tests; this keeps a test's entries from
/// leaking into others. If the key was already registered, the shadowed
/// entry is put back on drop, origin included; otherwise the key is removed.
/// Use distinct keys per test, since tests sharing a global table run
/// concurrently.
#[must_use = "the registration is removed as soon as the guard is dropped"]
pub struct ScopedRegistration<K: GlobalRegistry> {
    key: K::Key,
    // Restored on drop.
    shadowed: Option<(K::Key, KindConstructor<K>, Origin)>,
    _kind: PhantomData<K>,
}

impl<K: GlobalRegistry> ScopedRegistration<K>
where
    K::Key: Clone,
{
    /// Register `ctor` under `key` until the guard is dropped.
    pub fn new<F>(key: impl Into<K::Key>, ctor: F) -> Self
    where
        F: Fn(K::Args) -> K::Output + Send + Sync + 'static,
    {
        let key = key.into();
        let shadowed = K::registry()
            .insert(key.clone(), share(ctor), Origin::Runtime)
            .map(|(ctor, origin)| (key.clone(), ctor, origin));
        Self {
            key,
            shadowed,
            _kind: PhantomData,
        }
    }
}

impl<K: GlobalRegistry> ScopedRegistration<K> {
    /// The registered key.
    pub fn key(&self) -> &K::Key {
        &self.key
    }

    /// Whether the guard shadows an entry that existed before it.
    pub fn is_shadowing(&self) -> bool {
        self.shadowed.is_some()
    }
}

impl<K: GlobalRegistry> Drop for ScopedRegistration<K> {
    fn drop(&mut self) {
        match self.shadowed.take() {
            Some((key, ctor, origin)) => {
                K::registry().insert(key, ctor, origin);
            }
            None => K::registry().unregister(&self.key),
        }
    }
}
