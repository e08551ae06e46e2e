//! # Registry Table
//!
//! The keyed map from identifiers to constructors for one registry kind.
//!
//! # Collision Policy
//!
//! [`Registry::register`] overwrites silently: the last registration for a
//! key wins, whether it came from self-registration or from runtime code.
//! [`Registry::try_register`] is the opt-in strict variant.
//!
//! # Locking
//!
//! Entries sit behind a `RwLock`. Reads share the lock and writes exclude
//! everything else. Constructors are cloned out of the table and invoked after
//! the lock is released, so a constructor may dispatch on any registry,
//! including its own.

use registrar_core::{
    Dispatched, KindConstructor, MissingKeyPolicy, Registrable, RegistryError, RegistryKind,
    share,
};
use std::{
    borrow::Borrow,
    collections::{HashMap, hash_map::RandomState},
    fmt::{self, Debug},
    hash::{BuildHasher, Hash},
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// Where a table entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Registered by a direct call at runtime.
    Runtime,
    /// Applied from a self-registration in the given module.
    Enrolled {
        /// `module_path!()` of the registering code.
        module: &'static str,
    },
}

struct Entry<K: RegistryKind> {
    ctor: KindConstructor<K>,
    origin: Origin,
}

/// A table of constructors for registry kind `K`.
///
/// Most code uses the process-wide table of a kind through
/// [`GlobalRegistry`](crate::GlobalRegistry). Standalone tables are useful
/// for scoped registries and tests; they behave identically.
///
/// `S` is the hasher used for keys. Global tables always use the default
/// `RandomState`; standalone tables may pick another with
/// [`Registry::with_hasher`].
///
/// # Example
///
/// ```rust
/// use registrar_std::{registry_kind, Registry};
/// use registrar_std::registrar_core::Optional;
///
/// registry_kind! {
///     pub Doubler {
///         key: String,
///         args: (i32,),
///         output: i32,
///         policy: Optional,
///     }
/// }
///
/// let table = Registry::<Doubler>::new();
/// table.register("double", |(x,)| x * 2);
///
/// assert_eq!(table.dispatch("double", (21,)), Some(42));
/// assert_eq!(table.dispatch("triple", (21,)), None);
/// ```
pub struct Registry<K: RegistryKind, S = RandomState> {
    entries: RwLock<HashMap<K::Key, Entry<K>, S>>,
}

impl<K: RegistryKind> Registry<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<K: RegistryKind, S: BuildHasher> Registry<K, S> {
    /// Create an empty table that hashes keys with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_hasher(hasher)),
        }
    }

    // No constructor runs under the lock, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K::Key, Entry<K>, S>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K::Key, Entry<K>, S>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a constructor, replacing any existing one for the key.
    ///
    /// Always returns `true`: overwriting is the collision policy, not a
    /// failure.
    pub fn register<F>(&self, key: impl Into<K::Key>, ctor: F) -> bool
    where
        F: Fn(K::Args) -> K::Output + Send + Sync + 'static,
    {
        self.insert(key.into(), share(ctor), Origin::Runtime);
        true
    }

    /// Register a constructor only if the key is free.
    ///
    /// On collision the existing entry is kept and
    /// [`RegistryError::AlreadyRegistered`] is returned.
    pub fn try_register<F>(&self, key: impl Into<K::Key>, ctor: F) -> Result<(), RegistryError>
    where
        F: Fn(K::Args) -> K::Output + Send + Sync + 'static,
    {
        let key = key.into();
        let mut entries = self.write();
        if entries.contains_key(&key) {
            #[cfg(feature = "tracing")]
            tracing::warn!(?key, "rejected duplicate registration");
            return Err(RegistryError::already_registered(&key));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(?key, "registered constructor");
        entries.insert(
            key,
            Entry {
                ctor: share(ctor),
                origin: Origin::Runtime,
            },
        );
        Ok(())
    }

    /// Register a [`Registrable`] type under the given key.
    pub fn register_type<T: Registrable<K> + 'static>(&self, key: impl Into<K::Key>) -> bool {
        self.register(key, T::construct)
    }

    /// Insert an entry, handing back the one it replaced.
    pub(crate) fn insert(
        &self,
        key: K::Key,
        ctor: KindConstructor<K>,
        origin: Origin,
    ) -> Option<(KindConstructor<K>, Origin)> {
        let mut entries = self.write();

        #[cfg(feature = "tracing")]
        {
            if entries.contains_key(&key) {
                tracing::debug!(?key, ?origin, "replaced existing constructor");
            } else {
                tracing::debug!(?key, ?origin, "registered constructor");
            }
        }

        entries
            .insert(key, Entry { ctor, origin })
            .map(|previous| (previous.ctor, previous.origin))
    }

    /// Remove the constructor for a key. Absent keys are ignored.
    pub fn unregister<Q>(&self, key: &Q)
    where
        K::Key: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let _removed = self.write().remove(key);

        #[cfg(feature = "tracing")]
        if _removed.is_some() {
            tracing::debug!(?key, "unregistered constructor");
        }
    }

    /// Whether a constructor is registered for the key.
    pub fn is_registered<Q>(&self, key: &Q) -> bool
    where
        K::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read().contains_key(key)
    }

    /// Fetch the constructor for a key without invoking it.
    pub fn lookup<Q>(&self, key: &Q) -> Option<KindConstructor<K>>
    where
        K::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read().get(key).map(|entry| entry.ctor.clone())
    }

    /// Construct a new instance by key.
    ///
    /// On a hit the stored constructor is invoked exactly once with `args`.
    /// On a miss the kind's [`MissingKeyPolicy`] decides the result.
    #[doc(alias = "create")]
    pub fn dispatch<Q>(&self, key: &Q, args: K::Args) -> Dispatched<K>
    where
        K::Key: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        match self.lookup(key) {
            Some(ctor) => <K::Policy as MissingKeyPolicy<K::Output>>::found(ctor(args)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    ?key,
                    policy = <K::Policy as MissingKeyPolicy<K::Output>>::NAME,
                    "no constructor registered"
                );
                <K::Policy as MissingKeyPolicy<K::Output>>::missing(key)
            }
        }
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of the registered keys, in no particular order.
    pub fn keys(&self) -> Vec<K::Key>
    where
        K::Key: Clone,
    {
        self.read().keys().cloned().collect()
    }

    /// Snapshot of the registered keys with their origin.
    pub fn registrations(&self) -> Vec<(K::Key, Origin)>
    where
        K::Key: Clone,
    {
        self.read()
            .iter()
            .map(|(key, entry)| (key.clone(), entry.origin))
            .collect()
    }
}

impl<K: RegistryKind, S: BuildHasher + Default> Default for Registry<K, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: RegistryKind, S: BuildHasher> Debug for Registry<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.read().keys().collect::<Vec<_>>())
            .finish()
    }
}
