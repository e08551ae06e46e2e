//! # registrar-core
//!
//! Core traits for the Registrar self-registering factory registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugin crates that only need to describe what they register, not the
//! table implementation in `registrar-std`.
//!
//! # Building Blocks
//!
//! ## Registry kind ([`RegistryKind`])
//!
//! One declared configuration: key type, argument tuple, output type and
//! missing-key policy. Each kind gets its own table.
//!
//! ## Missing-key policy ([`MissingKeyPolicy`])
//!
//! A compile-time strategy that fixes what `dispatch` returns:
//! [`Fallible`], [`DefaultConstruct`] or [`Optional`].
//!
//! ## Registrable types ([`Registrable`])
//!
//! The collaborator contract: a concrete type that can be constructed from
//! the kind's arguments and converted into its output.
//!
//! # Error Types
//!
//! - [`RegistryError`] - missing keys and rejected strict registrations

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod constructor;
mod error;
mod key;
mod kind;
mod policy;
mod registrable;

// Re-exports
pub use constructor::{DynConstructor, SharedConstructor, share};
pub use error::RegistryError;
pub use key::RegistryKey;
pub use kind::{Dispatched, KindConstructor, RegistryKind};
pub use policy::{DefaultConstruct, Fallible, MissingKeyPolicy, Optional};
pub use registrable::Registrable;
