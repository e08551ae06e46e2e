//! # Self-Registration via Inventory
//!
//! Registrable types announce themselves by submitting an [`Enrollment`] to
//! `inventory`. A submission is a static record; the only startup work is
//! inventory linking that record into its list. No constructor and no table
//! code runs before `main`.
//!
//! A kind's global table applies every enrollment for that kind when it is
//! first touched (see [`Registry::enrolled`]). Initialization is lazy and
//! happens exactly once, so it never depends on the order in which modules
//! were linked or on which registrant happens to run first.
//!
//! # Example
//!
//! ```rust,ignore
//! registrar::enroll!(ShapeRegistry, Circle);
//! registrar::enroll!(ShapeRegistry, "unit-square" => |(_,)| Box::new(Square::unit()));
//! ```
//!
//! Both forms expand to an `inventory::submit!` of an [`Enrollment`].

use crate::table::{Origin, Registry};
use registrar_core::{RegistryKind, share};
use std::any::{Any, TypeId};

/// A self-registration record collected by `inventory`.
///
/// One enrollment installs one constructor into the table of one kind.
/// Enrollments are type-erased so a single collection serves every kind;
/// the kind is matched by [`TypeId`] when a table is initialized.
pub struct Enrollment {
    kind: fn() -> TypeId,
    key: &'static str,
    module: &'static str,
    install: fn(&dyn Any),
}

inventory::collect!(Enrollment);

impl Enrollment {
    /// Create an enrollment for kind `K`.
    ///
    /// `key` is a human-readable label for diagnostics; the key actually
    /// inserted is chosen by `install`, which receives the table being
    /// initialized as `&dyn Any`.
    pub const fn new<K: RegistryKind>(
        key: &'static str,
        module: &'static str,
        install: fn(&dyn Any),
    ) -> Self {
        Self {
            kind: TypeId::of::<K>,
            key,
            module,
            install,
        }
    }

    /// Label of the registered key.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Module the enrollment was submitted from.
    pub fn module(&self) -> &'static str {
        self.module
    }

    /// Whether this enrollment targets kind `K`.
    pub fn is_for<K: RegistryKind>(&self) -> bool {
        (self.kind)() == TypeId::of::<K>()
    }
}

/// All enrollments submitted for kind `K`, in unspecified order.
pub fn enrollments<K: RegistryKind>() -> impl Iterator<Item = &'static Enrollment> {
    inventory::iter::<Enrollment>
        .into_iter()
        .filter(|enrollment| enrollment.is_for::<K>())
}

/// Insert a constructor into the table behind `table`.
///
/// This is the body of every generated `install` function. A table of a
/// different kind is left untouched.
pub fn install<K, F>(table: &dyn Any, key: impl Into<K::Key>, ctor: F, module: &'static str)
where
    K: RegistryKind,
    F: Fn(K::Args) -> K::Output + Send + Sync + 'static,
{
    match table.downcast_ref::<Registry<K>>() {
        Some(table) => {
            table.insert(key.into(), share(ctor), Origin::Enrolled { module });
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::error!(module, "enrollment installed into a table of another kind");
        }
    }
}

impl<K: RegistryKind> Registry<K> {
    /// Create a table populated with every enrollment for kind `K`.
    ///
    /// Global tables are built with this on first access. Calling it again
    /// yields an independent table with the same self-registered entries.
    pub fn enrolled() -> Self {
        let table = Self::new();
        for enrollment in enrollments::<K>() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                key = enrollment.key,
                module = enrollment.module,
                "applying enrollment"
            );
            (enrollment.install)(&table);
        }
        table
    }
}
