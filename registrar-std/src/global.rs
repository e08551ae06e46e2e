//! Process-wide tables, one per registry kind.

use crate::table::Registry;
use registrar_core::{Dispatched, KindConstructor, Registrable, RegistryError, RegistryKind};
use std::{borrow::Borrow, fmt::Debug, hash::Hash};

/// A registry kind with a process-wide table.
///
/// The table is created and populated with the kind's self-registrations on
/// first access, from whichever thread gets there first, and lives until the
/// process exits. Implement this with `registry_kind!`, which stores the table
/// in a `LazyLock` static.
///
/// The associated functions mirror [`Registry`]'s methods so call sites read
/// `ShapeRegistry::dispatch("circle", (1.0,))`.
///
/// # Caller Obligations
///
/// Registration is meant to happen through self-registration, before any
/// other thread exists. Runtime `register`/`unregister` calls are memory
/// safe at any time, but their ordering relative to concurrent dispatches is
/// up to the caller.
pub trait GlobalRegistry: RegistryKind {
    /// The kind's table.
    fn registry() -> &'static Registry<Self>;

    /// See [`Registry::register`].
    fn register<F>(key: impl Into<Self::Key>, ctor: F) -> bool
    where
        F: Fn(Self::Args) -> Self::Output + Send + Sync + 'static,
    {
        Self::registry().register(key, ctor)
    }

    /// See [`Registry::try_register`].
    fn try_register<F>(key: impl Into<Self::Key>, ctor: F) -> Result<(), RegistryError>
    where
        F: Fn(Self::Args) -> Self::Output + Send + Sync + 'static,
    {
        Self::registry().try_register(key, ctor)
    }

    /// See [`Registry::register_type`].
    fn register_type<T: Registrable<Self> + 'static>(key: impl Into<Self::Key>) -> bool {
        Self::registry().register_type::<T>(key)
    }

    /// See [`Registry::unregister`].
    fn unregister<Q>(key: &Q)
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        Self::registry().unregister(key)
    }

    /// See [`Registry::is_registered`].
    fn is_registered<Q>(key: &Q) -> bool
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Self::registry().is_registered(key)
    }

    /// See [`Registry::lookup`].
    fn lookup<Q>(key: &Q) -> Option<KindConstructor<Self>>
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Self::registry().lookup(key)
    }

    /// See [`Registry::dispatch`].
    #[doc(alias = "create")]
    fn dispatch<Q>(key: &Q, args: Self::Args) -> Dispatched<Self>
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        Self::registry().dispatch(key, args)
    }

    /// See [`Registry::keys`].
    fn keys() -> Vec<Self::Key>
    where
        Self::Key: Clone,
    {
        Self::registry().keys()
    }
}
