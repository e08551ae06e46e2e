/// Declares a registry kind with a process-wide table.
///
/// Expands to a zero-sized marker struct implementing
/// [`RegistryKind`](crate::registrar_core::RegistryKind) and
/// [`GlobalRegistry`](crate::GlobalRegistry). The table lives in a
/// `LazyLock` static, so it is built exactly once, on first access, with
/// every enrollment submitted for the kind.
///
/// `args` is always a tuple: `()`, `(A,)`, `(A, B)`, ...
///
/// # Example
///
/// ```rust
/// use registrar_std::{registry_kind, GlobalRegistry};
/// use registrar_std::registrar_core::Fallible;
///
/// pub trait Codec {
///     fn name(&self) -> &'static str;
/// }
///
/// registry_kind! {
///     /// Codecs selectable by name.
///     pub CodecRegistry {
///         key: String,
///         args: (),
///         output: Box<dyn Codec>,
///         policy: Fallible,
///     }
/// }
///
/// struct Gzip;
///
/// impl Codec for Gzip {
///     fn name(&self) -> &'static str {
///         "gzip"
///     }
/// }
///
/// CodecRegistry::register("gzip", |()| Box::new(Gzip));
/// assert_eq!(CodecRegistry::dispatch("gzip", ()).unwrap().name(), "gzip");
/// assert!(CodecRegistry::dispatch("zstd", ()).is_err());
/// ```
#[macro_export]
macro_rules! registry_kind {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            key: $key:ty,
            args: $args:ty,
            output: $output:ty,
            policy: $policy:ty $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::registrar_core::RegistryKind for $name {
            type Key = $key;
            type Args = $args;
            type Output = $output;
            type Policy = $policy;
        }

        impl $crate::GlobalRegistry for $name {
            fn registry() -> &'static $crate::Registry<Self> {
                static TABLE: ::std::sync::LazyLock<$crate::Registry<$name>> =
                    ::std::sync::LazyLock::new($crate::Registry::<$name>::enrolled);
                &TABLE
            }
        }
    };
}

/// Self-registers a constructor with a registry kind.
///
/// The registration is submitted to `inventory` and applied when the kind's
/// global table is first touched, before any dispatch can observe it.
///
/// # Forms
///
/// - `enroll!(Kind, Type)` registers `Type` under the key `"Type"`, using
///   its [`Registrable<Kind>`](crate::registrar_core::Registrable) impl.
///   `Type` must be a plain identifier in scope.
/// - `enroll!(Kind, key => constructor)` registers a closure taking the
///   kind's argument tuple. `key` is any expression convertible into the
///   kind's key type.
///
/// # Example
///
/// ```rust,ignore
/// registrar::enroll!(Base0Registry, Derived01);
/// registrar::enroll!(Base2Registry, "Derived21" => |(printer, id)| {
///     Box::new(Derived21::new(printer, id))
/// });
/// ```
#[macro_export]
macro_rules! enroll {
    (@enroll $kind:ty, $label:expr, $key:expr, $ctor:expr) => {
        const _: () = {
            fn install(table: &dyn ::core::any::Any) {
                $crate::enroll::install::<$kind, _>(table, $key, $ctor, ::core::module_path!());
            }

            $crate::inventory::submit! {
                $crate::Enrollment::new::<$kind>($label, ::core::module_path!(), install)
            }
        };
    };
    ($kind:ty, $ty:ident $(,)?) => {
        $crate::enroll!(
            @enroll $kind,
            ::core::stringify!($ty),
            ::core::stringify!($ty),
            <$ty as $crate::registrar_core::Registrable<$kind>>::construct
        );
    };
    ($kind:ty, $key:literal => $ctor:expr $(,)?) => {
        $crate::enroll!(@enroll $kind, ::core::concat!($key), $key, $ctor);
    };
    ($kind:ty, $key:expr => $ctor:expr $(,)?) => {
        $crate::enroll!(@enroll $kind, ::core::stringify!($key), $key, $ctor);
    };
}
