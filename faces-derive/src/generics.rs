//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added as where-predicates on the field types themselves, and only
//! for fields whose type mentions a type parameter. Concrete field types are
//! checked directly where the generated code uses them.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is a leaf and never walked, so it never contributes a
//! bound:
//!
//! ```ignore
//! struct TypedId<T> {
//!     pub id: String,
//!     pub _marker: PhantomData<T>,  // T should NOT require Reveal
//! }
//! ```

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{parse_quote, Ident};

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            if let Some(qself) = &path.qself {
                collect_generics_from_type(&qself.ty, generics, result);
            }
            // `T::Assoc` mentions `T` through its first segment.
            if let Some(first) = path.path.segments.first() {
                push_matching_param(&first.ident, generics, result);
            }
            for segment in &path.path.segments {
                if segment.ident == "PhantomData" {
                    continue;
                }
                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    for arg in &args.args {
                        if let syn::GenericArgument::Type(inner_ty) = arg {
                            collect_generics_from_type(inner_ty, generics, result);
                        }
                    }
                }
            }
        }
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        syn::Type::Group(group) => collect_generics_from_type(&group.elem, generics, result),
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                collect_generics_from_type(elem, generics, result);
            }
        }
        _ => {}
    }
}

fn push_matching_param(ident: &Ident, generics: &syn::Generics, result: &mut Vec<Ident>) {
    for param in generics.type_params() {
        if *ident == param.ident && !result.iter().any(|g| g == &param.ident) {
            result.push(param.ident.clone());
        }
    }
}

/// Returns `true` when `ty` mentions any type parameter of `generics`.
pub(crate) fn mentions_type_params(ty: &syn::Type, generics: &syn::Generics) -> bool {
    let mut found = Vec::new();
    collect_generics_from_type(ty, generics, &mut found);
    !found.is_empty()
}

/// Records `ty` once in `types`, comparing by token representation.
pub(crate) fn push_unique_type(types: &mut Vec<syn::Type>, ty: &syn::Type) {
    let key = ty.to_token_stream().to_string();
    if !types
        .iter()
        .any(|existing| existing.to_token_stream().to_string() == key)
    {
        types.push(ty.clone());
    }
}

/// Adds `Reveal` bounds for walked field types and `Default` bounds for tagged ones.
pub(crate) fn add_field_bounds(
    mut generics: syn::Generics,
    walked_types: &[syn::Type],
    defaulted_types: &[syn::Type],
    crate_root: &TokenStream,
) -> syn::Generics {
    if walked_types.is_empty() && defaulted_types.is_empty() {
        return generics;
    }
    let where_clause = generics.make_where_clause();
    for ty in walked_types {
        where_clause
            .predicates
            .push(parse_quote!(#ty: #crate_root::Reveal));
    }
    for ty in defaulted_types {
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::core::default::Default));
    }
    generics
}
