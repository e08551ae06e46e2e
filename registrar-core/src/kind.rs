//! # Registry Kinds
//!
//! A registry kind is one declared combination of key type, constructor
//! signature and missing-key policy. Each kind owns an independent table,
//! so two abstract output types never share entries even when their keys
//! collide.
//!
//! Kinds are zero-sized marker types. The `registry_kind!` macro in
//! `registrar-std` declares one together with its global table; implementing
//! the trait by hand is only needed for standalone tables.

use crate::{key::RegistryKey, policy::MissingKeyPolicy};

/// The static configuration of a registry.
///
/// `Args` is always a tuple holding the full argument list, `()` for
/// zero-argument constructors and `(A,)` for a single argument.
///
/// # Example
///
/// ```rust
/// use registrar_core::{Fallible, RegistryKind};
///
/// trait Shape {
///     fn area(&self) -> f64;
/// }
///
/// struct ShapeRegistry;
///
/// impl RegistryKind for ShapeRegistry {
///     type Key = String;
///     type Args = (f64,);
///     type Output = Box<dyn Shape>;
///     type Policy = Fallible;
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a registry kind",
    label = "missing `RegistryKind` implementation",
    note = "Declare kinds with `registry_kind!` or implement `RegistryKind` directly."
)]
pub trait RegistryKind: Sized + 'static {
    /// Identifier constructors are registered under.
    type Key: RegistryKey;

    /// Argument tuple every constructor receives.
    type Args: 'static;

    /// Owned value every constructor produces.
    type Output: 'static;

    /// Behavior of `dispatch` on a missing key.
    type Policy: MissingKeyPolicy<Self::Output>;
}

/// The result type of `dispatch` for kind `K`.
pub type Dispatched<K> = <<K as RegistryKind>::Policy as MissingKeyPolicy<
    <K as RegistryKind>::Output,
>>::Output;

/// Constructor handle type for kind `K`.
pub type KindConstructor<K> =
    crate::constructor::SharedConstructor<<K as RegistryKind>::Args, <K as RegistryKind>::Output>;
