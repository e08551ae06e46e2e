//! Type-erased constructor storage.
//!
//! A constructor takes the kind's whole argument tuple and returns the kind's
//! output. Keeping the argument list as one tuple lets a single erased type
//! cover every arity, while the tuple type still pins the signature at
//! compile time.

use std::sync::Arc;

/// The erased constructor callable stored in a table.
pub type DynConstructor<Args, R> = dyn Fn(Args) -> R + Send + Sync;

/// A shared handle to a stored constructor.
///
/// Tables hand these out so the constructor can run after the table lock is
/// released.
pub type SharedConstructor<Args, R> = Arc<DynConstructor<Args, R>>;

/// Erase a constructor into a [`SharedConstructor`].
pub fn share<Args, R, F>(ctor: F) -> SharedConstructor<Args, R>
where
    F: Fn(Args) -> R + Send + Sync + 'static,
{
    Arc::new(ctor)
}
