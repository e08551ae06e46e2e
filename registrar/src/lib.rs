//! # registrar - Self-Registering Factory Registries
//!
//! `registrar` lets independently compiled modules register named
//! constructors for a common abstract type, and lets other code construct an
//! instance by name without referring to the concrete type. Selecting an
//! implementation from a configured string no longer needs a central `match`
//! over every variant.
//!
//! ## Quick Start
//!
//! ```rust
//! use registrar::prelude::*;
//!
//! pub trait Printer {
//!     fn print(&self) -> String;
//! }
//!
//! registrar::registry_kind! {
//!     pub PrinterRegistry {
//!         key: String,
//!         args: (),
//!         output: Box<dyn Printer>,
//!         policy: Fallible,
//!     }
//! }
//!
//! struct Plain;
//!
//! impl Printer for Plain {
//!     fn print(&self) -> String {
//!         "Plain".to_string()
//!     }
//! }
//!
//! impl Registrable<PrinterRegistry> for Plain {
//!     fn construct(_: ()) -> Box<dyn Printer> {
//!         Box::new(Plain)
//!     }
//! }
//!
//! // Self-registration: applied before the first dispatch can observe it.
//! registrar::enroll!(PrinterRegistry, Plain);
//!
//! let printer = PrinterRegistry::dispatch("Plain", ()).unwrap();
//! assert_eq!(printer.print(), "Plain");
//! assert!(PrinterRegistry::dispatch("Foo", ()).is_err());
//! ```
//!
//! ## Missing Keys
//!
//! Each kind picks a [`MissingKeyPolicy`] that fixes what `dispatch` returns:
//! [`Fallible`] (`Result`), [`DefaultConstruct`] (the output's default) or
//! [`Optional`] (`Option`).
//!
//! ## Features
//!
//! - `macros` (default): the `#[register]` attribute, an alternative to
//!   [`enroll!`] that also adapts free functions to the kind's argument tuple
//! - `tracing`: log registrations and missing keys via `tracing`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use registrar_core::{
    // Constructors
    DynConstructor,
    // Policies
    DefaultConstruct,
    Dispatched,
    Fallible,
    KindConstructor,
    MissingKeyPolicy,
    Optional,
    // Collaborator contract
    Registrable,
    // Errors
    RegistryError,
    // Keys and kinds
    RegistryKey,
    RegistryKind,
    SharedConstructor,
    share,
};

// Tables and self-registration. `enroll` names both the macro and the
// module holding the plumbing its expansions call into.
pub use registrar_std::{Enrollment, GlobalRegistry, Origin, Registry, enroll, registry_kind};

/// Testing utilities.
pub mod testing {
    pub use registrar_std::testing::{CallCounter, ScopedRegistration};
}

/// Prelude module - common imports for Registrar.
///
/// # Usage
///
/// ```rust,ignore
/// use registrar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        DefaultConstruct, Fallible, GlobalRegistry, MissingKeyPolicy, Optional, Registrable,
        Registry, RegistryError, RegistryKind,
    };
}

#[cfg(feature = "macros")]
pub use registrar_macros::register;

#[doc(hidden)]
pub use registrar_std::inventory;
