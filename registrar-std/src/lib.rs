//! # registrar-std
//!
//! Standard implementations for the Registrar factory registry.
//!
//! This crate provides:
//! - **Tables**: [`Registry`], the keyed constructor map for one kind
//! - **Global tables**: [`GlobalRegistry`] and the [`registry_kind!`] macro
//! - **Self-registration**: [`Enrollment`] and the [`enroll!`] macro
//! - **Testing**: [`testing::CallCounter`], [`testing::ScopedRegistration`]
//!
//! # Features
//!
//! - `tracing`: log registrations, overwrites and missing keys via `tracing`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use registrar_core;

// Modules
pub mod enroll;
pub mod global;
mod macros;
pub mod table;
pub mod testing;

pub use enroll::Enrollment;
pub use global::GlobalRegistry;
pub use table::{Origin, Registry};

#[doc(hidden)]
pub use inventory;
