//! # Missing-Key Policies
//!
//! What `dispatch` does when a key has no constructor is fixed per registry
//! kind, because the policy decides the return type of `dispatch` itself.
//!
//! | Policy | `dispatch` returns | On a missing key |
//! |--------|--------------------|------------------|
//! | [`Fallible`] | `Result<R, RegistryError>` | `Err(RegistryError::NotFound)` |
//! | [`DefaultConstruct`] | `R` | `R::default()` |
//! | [`Optional`] | `Option<R>` | `None` |

use crate::error::RegistryError;
use std::fmt::Debug;

/// Compile-time strategy for a dispatch on an absent key.
///
/// `R` is the output type of the registry kind's constructors.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a missing-key policy for outputs of type `{R}`",
    label = "missing `MissingKeyPolicy<{R}>` implementation",
    note = "`DefaultConstruct` requires the output type to implement `Default`."
)]
pub trait MissingKeyPolicy<R>: 'static {
    /// The type `dispatch` returns under this policy.
    type Output;

    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// Wrap a freshly constructed value.
    fn found(value: R) -> Self::Output;

    /// Produce the result for a key that is not registered.
    fn missing<Q: Debug + ?Sized>(key: &Q) -> Self::Output;
}

/// Fail with [`RegistryError::NotFound`] carrying the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fallible;

impl<R> MissingKeyPolicy<R> for Fallible {
    type Output = Result<R, RegistryError>;

    const NAME: &'static str = "fallible";

    fn found(value: R) -> Self::Output {
        Ok(value)
    }

    fn missing<Q: Debug + ?Sized>(key: &Q) -> Self::Output {
        Err(RegistryError::not_found(key))
    }
}

/// Return the output type's default value.
///
/// Best suited to outputs whose default is distinguishable from a real one,
/// such as `Option<Box<dyn Trait>>` yielding `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultConstruct;

impl<R: Default> MissingKeyPolicy<R> for DefaultConstruct {
    type Output = R;

    const NAME: &'static str = "default_construct";

    fn found(value: R) -> Self::Output {
        value
    }

    fn missing<Q: Debug + ?Sized>(_key: &Q) -> Self::Output {
        R::default()
    }
}

/// Return `None` on a miss and `Some` on a hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Optional;

impl<R> MissingKeyPolicy<R> for Optional {
    type Output = Option<R>;

    const NAME: &'static str = "optional";

    fn found(value: R) -> Self::Output {
        Some(value)
    }

    fn missing<Q: Debug + ?Sized>(_key: &Q) -> Self::Output {
        None
    }
}
