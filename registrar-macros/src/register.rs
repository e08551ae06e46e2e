//! The `#[register]` attribute.
//!
//! Accepted on:
//! - a `struct` or `enum`: registers `<Type as Registrable<Kind>>::construct`
//!   under the type's name
//! - a free `fn`: registers the function itself under the function's name,
//!   adapting its parameter list to the kind's argument tuple

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    FnArg, Ident, Item, ItemFn, LitStr, Token, Type,
    parse::{Parse, ParseStream},
};

/// Arguments for the `#[register]` macro.
pub(crate) struct RegisterArgs {
    /// The registry kind to register with.
    pub kind: Type,
    /// Explicit key; defaults to the item's name.
    pub key: Option<LitStr>,
}

impl Parse for RegisterArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error("expected a registry kind, e.g. `#[register(ShapeRegistry)]`"));
        }

        let kind: Type = input.parse()?;
        let mut key = None;

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }

            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "key" => {
                    key = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }
        }

        Ok(RegisterArgs { kind, key })
    }
}

pub(crate) fn expand(args: RegisterArgs, item: Item) -> syn::Result<TokenStream> {
    let (name, ctor) = match &item {
        Item::Struct(s) => (&s.ident, registrable_ctor(&s.ident, &args.kind)),
        Item::Enum(e) => (&e.ident, registrable_ctor(&e.ident, &args.kind)),
        Item::Fn(f) => (&f.sig.ident, fn_ctor(f)?),
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "#[register] can only be used on structs, enums and functions",
            ));
        }
    };

    let key = args
        .key
        .unwrap_or_else(|| LitStr::new(&name.to_string(), name.span()));
    let enrollment = enrollment(&args.kind, &key, ctor);

    Ok(quote! {
        #item
        #enrollment
    })
}

fn registrable_ctor(ty: &Ident, kind: &Type) -> TokenStream {
    quote! { <#ty as ::registrar::Registrable<#kind>>::construct }
}

fn fn_ctor(f: &ItemFn) -> syn::Result<TokenStream> {
    if !f.sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &f.sig.generics,
            "registered constructors cannot be generic",
        ));
    }
    if let Some(asyncness) = &f.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "registered constructors must be synchronous",
        ));
    }

    let mut names = Vec::new();
    for (i, arg) in f.sig.inputs.iter().enumerate() {
        match arg {
            FnArg::Typed(_) => names.push(format_ident!("__arg_{}", i)),
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new_spanned(
                    receiver,
                    "registered constructors cannot take self",
                ));
            }
        }
    }

    let fn_name = &f.sig.ident;
    Ok(quote! {
        |(#(#names,)*)| #fn_name(#(#names),*)
    })
}

fn enrollment(kind: &Type, key: &LitStr, ctor: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            fn install(table: &dyn ::core::any::Any) {
                ::registrar::enroll::install::<#kind, _>(
                    table,
                    #key,
                    #ctor,
                    ::core::module_path!(),
                );
            }

            ::registrar::inventory::submit! {
                ::registrar::Enrollment::new::<#kind>(#key, ::core::module_path!(), install)
            }
        };
    }
}
