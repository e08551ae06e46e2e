//! The collaborator contract for self-registering types.

use crate::kind::RegistryKind;

/// A concrete type that can be built by registry kind `K`.
///
/// The type must be constructible from exactly `K::Args` and convertible to
/// `K::Output`, typically by boxing itself behind the kind's trait object.
///
/// # Example
///
/// ```rust
/// use registrar_core::{Fallible, Registrable, RegistryKind};
///
/// trait Greeter {
///     fn greet(&self) -> String;
/// }
///
/// struct GreeterRegistry;
///
/// impl RegistryKind for GreeterRegistry {
///     type Key = String;
///     type Args = (String,);
///     type Output = Box<dyn Greeter>;
///     type Policy = Fallible;
/// }
///
/// struct English {
///     name: String,
/// }
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         format!("Hello, {}", self.name)
///     }
/// }
///
/// impl Registrable<GreeterRegistry> for English {
///     fn construct((name,): (String,)) -> Box<dyn Greeter> {
///         Box::new(English { name })
///     }
/// }
///
/// let greeter = <English as Registrable<GreeterRegistry>>::construct(("world".to_string(),));
/// assert_eq!(greeter.greet(), "Hello, world");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be constructed by registry kind `{K}`",
    label = "missing `Registrable<{K}>` implementation",
    note = "Implement `Registrable<{K}>` or register a constructor closure instead."
)]
pub trait Registrable<K: RegistryKind> {
    /// Build a new owned instance from the kind's argument tuple.
    fn construct(args: K::Args) -> K::Output;
}
