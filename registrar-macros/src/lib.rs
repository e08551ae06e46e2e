//! Procedural macros for Registrar.
//!
//! Use through the `registrar` facade with the `macros` feature:
//!
//! ```rust,ignore
//! use registrar::register;
//!
//! #[register(ShapeRegistry)]
//! struct Circle {
//!     radius: f64,
//! }
//!
//! #[register(ShapeRegistry, key = "unit-square")]
//! fn unit_square(scale: f64) -> Box<dyn Shape> {
//!     Box::new(Square::new(scale))
//! }
//! ```

use proc_macro::TokenStream;
use syn::{Item, parse_macro_input};

mod register;

/// Self-registers a type or constructor function with a registry kind.
///
/// - On a `struct` or `enum`, the type must implement `Registrable<Kind>`; the
///   key defaults to the type name.
/// - On a free function, the parameters must match the kind's argument tuple
///   element by element and the return type must be the kind's output; the key
///   defaults to the function name.
///
/// `key = "..."` overrides the default key.
#[proc_macro_attribute]
pub fn register(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as register::RegisterArgs);
    let input = parse_macro_input!(item as Item);

    register::expand(args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
