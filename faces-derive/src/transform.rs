//! Shared field visit generation for struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote_spanned;

use crate::{
    generics::{mentions_type_params, push_unique_type},
    strategy::Strategy,
    types::is_leaf_type,
};

/// Name of the matcher parameter in the generated `reveal_with`.
pub(crate) const MATCHER: &str = "__faces_matcher";

/// Accumulated state during field processing.
///
/// This struct groups the field types that need where-clause bounds, collected
/// while walking struct fields or enum variants.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) crate_root: &'a TokenStream,
    pub(crate) walked_types: &'a mut Vec<syn::Type>,
    pub(crate) defaulted_types: &'a mut Vec<syn::Type>,
}

/// Generates the visit statements for a single field bound as `&mut` under `binding`.
///
/// Returns `None` when the field needs no code at all; the caller then leaves it
/// out of the destructuring pattern.
///
/// ## Field Visit Rules
///
/// | Strategy | Emitted |
/// |----------|---------|
/// | `Skip` | nothing |
/// | `Visit`, leaf or opaque, no tags | nothing |
/// | `Visit`, walkable | `__private::walk` |
/// | `Visit`, tags | `__private::reset_unless_visible` after any walk |
pub(crate) fn generate_field_visit(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    span: Span,
    strategy: &Strategy,
) -> Option<TokenStream> {
    let Strategy::Visit { tags, walk } = strategy else {
        return None;
    };
    let walk = *walk && !is_leaf_type(ty);
    if !walk && tags.is_empty() {
        return None;
    }

    let crate_root = ctx.crate_root;
    let matcher = Ident::new(MATCHER, Span::call_site());
    let mut visit = TokenStream::new();

    if walk {
        if mentions_type_params(ty, ctx.generics) {
            push_unique_type(ctx.walked_types, ty);
        }
        visit.extend(quote_spanned! { span =>
            #crate_root::__private::walk(#binding, #matcher);
        });
    }

    if !tags.is_empty() {
        if mentions_type_params(ty, ctx.generics) {
            push_unique_type(ctx.defaulted_types, ty);
        }
        visit.extend(quote_spanned! { span =>
            #crate_root::__private::reset_unless_visible(#binding, &[#(#tags),*], #matcher);
        });
    }

    Some(visit)
}
