//! Derive macro for `faces`.
//!
//! This crate generates the traversal code behind `#[derive(Faces)]`. It:
//! - reads `#[faces(...)]` field attributes and field visibility
//! - emits a `Reveal` implementation that walks nested values and resets
//!   tagged fields the caller's face does not include
//!
//! It does **not** decide which tags are visible. That happens at runtime through
//! the `TagMatcher` handed to `Reveal::reveal_with`.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::{Ident, Span, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
mod types;
use container::{parse_container_options, ContainerOptions};
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_field_bounds;
use transform::MATCHER;

/// Derives `faces::Reveal` for structs and enums.
///
/// # Container Attributes
///
/// - `#[faces(crate = "path")]` - Reach the runtime crate through `path` instead of `::faces`.
///   Use this when `faces` is re-exported from a facade crate.
///
/// # Field Attributes
///
/// - **No annotation**: The field has no tags and is never reset. If its type is not a leaf
///   (primitive, `String`, `PhantomData`), the engine walks into it through `Reveal`. Common
///   std value types (tuples, `&T`, sets, `Duration`, `SystemTime`, `NonZero*`, `std::net`
///   addresses) implement `Reveal` as no-ops or element-wise walks.
///
/// - `#[faces("tag1,tag2")]`: Declares the field's tags. The field is reset to
///   `Default::default()` unless the revealed face contains at least one of them. Several
///   string lists may be given and are unioned. The field type must implement `Default`.
///
///   Lists are split on `,`; whitespace around each tag is ignored and blank segments are
///   dropped, so `"private, public"` declares `private` and `public`. This differs from a
///   plain comma split, which would keep `" public"` as a distinct tag. `faces::Face::new`
///   and `faces::Face::parse` normalize the revealed tags the same way.
///
/// - `#[faces(opaque)]`: The engine never walks into the field, so its type does not need
///   `Reveal`. Combine with tags (`#[faces("internal", opaque)]`) to reset without walking.
///
/// # Visibility
///
/// Private struct fields are skipped entirely: they are never walked or reset and their types
/// need no trait impls. Putting `#[faces]` on a private field is a compile error. Enum variant
/// fields are always visited.
///
/// Unions are rejected at compile time.
#[proc_macro_derive(Faces, attributes(faces))]
pub fn derive_faces(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the faces crate root.
///
/// Handles crate renaming (e.g., `views = { package = "faces", ... }`). Inside the
/// `faces` crate itself, `::faces` resolves through its `extern crate self as faces`.
fn crate_root() -> TokenStream {
    match crate_name("faces") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::faces },
    }
}

struct DeriveOutput {
    reveal_body: TokenStream,
    walked_types: Vec<syn::Type>,
    defaulted_types: Vec<syn::Type>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { crate_path } = parse_container_options(&attrs)?;
    let crate_root = crate_path.map_or_else(crate_root, |path| quote! { #path });

    let derive_output = match data {
        Data::Struct(data) => {
            let output = derive_struct(data, &generics, &crate_root)?;
            DeriveOutput {
                reveal_body: output.reveal_body,
                walked_types: output.walked_types,
                defaulted_types: output.defaulted_types,
            }
        }
        Data::Enum(data) => {
            let output = derive_enum(data, &generics, &crate_root)?;
            DeriveOutput {
                reveal_body: output.reveal_body,
                walked_types: output.walked_types,
                defaulted_types: output.defaulted_types,
            }
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Faces` cannot be derived for unions",
            ));
        }
    };

    let bounded_generics = add_field_bounds(
        generics,
        &derive_output.walked_types,
        &derive_output.defaulted_types,
        &crate_root,
    );
    let (impl_generics, ty_generics, where_clause) = bounded_generics.split_for_impl();
    let reveal_body = &derive_output.reveal_body;
    let matcher = Ident::new(MATCHER, Span::call_site());

    Ok(quote! {
        impl #impl_generics #crate_root::Reveal for #ident #ty_generics #where_clause {
            const SHAPE: #crate_root::Shape = #crate_root::Shape::Structure;

            fn reveal_with<__FacesMatcher>(&mut self, #matcher: &__FacesMatcher)
            where
                __FacesMatcher: #crate_root::TagMatcher + ?::core::marker::Sized,
            {
                #reveal_body
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn expand_str(tokens: TokenStream) -> String {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        expand(input).expect("should expand").to_string()
    }

    #[test]
    fn tagged_field_emits_reset() {
        let output = expand_str(quote! {
            struct User {
                #[faces("private")]
                pub email: String,
                pub name: String,
            }
        });
        assert!(output.contains("reset_unless_visible"));
        assert!(output.contains("\"private\""));
        // String is a leaf: no walk is emitted for either field.
        assert!(!output.contains("__private :: walk"));
    }

    #[test]
    fn nested_field_emits_walk() {
        let output = expand_str(quote! {
            struct Outer {
                pub inner: Inner,
            }
        });
        assert!(output.contains("__private :: walk"));
        assert!(!output.contains("reset_unless_visible"));
    }

    #[test]
    fn private_fields_are_not_bound() {
        let output = expand_str(quote! {
            struct Account {
                pub id: Inner,
                secret: std::time::SystemTime,
            }
        });
        assert!(!output.contains("secret"));
    }

    #[test]
    fn generic_field_adds_where_bounds() {
        let output = expand_str(quote! {
            struct Page<T> {
                #[faces("internal")]
                pub items: Vec<T>,
            }
        });
        assert!(output.contains("Vec < T > : :: faces :: Reveal"));
        assert!(output.contains("Vec < T > : :: core :: default :: Default"));
    }

    #[test]
    fn crate_override_is_used() {
        let output = expand_str(quote! {
            #[faces(crate = "api::faces")]
            struct User {
                #[faces("private")]
                pub email: String,
            }
        });
        assert!(output.contains("api :: faces :: Reveal"));
    }

    #[test]
    fn enum_generates_match_arms() {
        let output = expand_str(quote! {
            enum Contact {
                Email {
                    #[faces("private")]
                    address: String,
                },
                Phone(#[faces("private")] String),
                Unknown,
            }
        });
        assert!(output.contains("Self :: Email"));
        assert!(output.contains("Self :: Phone"));
        assert!(output.contains("Self :: Unknown"));
    }

    #[test]
    fn variant_attribute_is_rejected() {
        let input: DeriveInput = syn::parse2(quote! {
            enum Contact {
                #[faces("private")]
                Email(String),
            }
        })
        .unwrap();
        let err = expand(input).unwrap_err();
        assert!(err.to_string().contains("not supported on enum variants"));
    }

    #[test]
    fn union_is_rejected() {
        let input: DeriveInput = syn::parse2(quote! {
            union Bits {
                pub a: u32,
                pub b: f32,
            }
        })
        .unwrap();
        let err = expand(input).unwrap_err();
        assert!(err.to_string().contains("cannot be derived for unions"));
    }
}
