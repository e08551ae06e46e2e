//! Error types for Registrar.
//!
//! Duplicate registration is not an error under the default overwrite
//! semantics, so the hierarchy is deliberately small:
//!
//! - [`RegistryError::NotFound`] - dispatch on a key with no constructor
//! - [`RegistryError::AlreadyRegistered`] - strict registration collided

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur while registering or dispatching.
///
/// Keys are stored in their `Debug` rendering so the error type stays
/// independent of the registry's key type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No constructor is registered under the key.
    #[error("no constructor registered for key: {0}")]
    NotFound(String),

    /// A strict registration found the key already taken.
    #[error("constructor already registered for key: {0}")]
    AlreadyRegistered(String),
}

impl RegistryError {
    /// Build a [`RegistryError::NotFound`] for the given key.
    pub fn not_found<Q: Debug + ?Sized>(key: &Q) -> Self {
        RegistryError::NotFound(format!("{:?}", key))
    }

    /// Build a [`RegistryError::AlreadyRegistered`] for the given key.
    pub fn already_registered<Q: Debug + ?Sized>(key: &Q) -> Self {
        RegistryError::AlreadyRegistered(format!("{:?}", key))
    }

    /// The rendered key this error refers to.
    pub fn key(&self) -> &str {
        match self {
            RegistryError::NotFound(key) | RegistryError::AlreadyRegistered(key) => key,
        }
    }

    /// Whether this is a missing-key error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }
}
