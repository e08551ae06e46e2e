//! Lookup keys.

use std::{fmt::Debug, hash::Hash};

/// A type usable as a registry key.
///
/// Keys are hashed for lookup and rendered with `Debug` when a dispatch misses.
/// Implemented automatically for every type meeting the bounds, so `String`,
/// `&'static str`, integers and field-less enums all qualify.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a registry key",
    label = "missing `Hash + Eq + Debug + Send + Sync + 'static`",
    note = "Registry keys are hashed for lookup and printed when a dispatch misses."
)]
pub trait RegistryKey: Hash + Eq + Debug + Send + Sync + 'static {}

impl<T> RegistryKey for T where T: Hash + Eq + Debug + Send + Sync + 'static {}
