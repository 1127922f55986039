//! Enum-specific `Reveal` derivation.
//!
//! This module generates match arms for each variant and collects the field
//! types that require trait bounds. Variant fields share the enum's visibility,
//! so all of them take part in traversal.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    strategy::variant_field_strategy,
    transform::{generate_field_visit, DeriveContext},
};

pub(crate) struct EnumDeriveOutput {
    pub(crate) reveal_body: TokenStream,
    pub(crate) walked_types: Vec<syn::Type>,
    pub(crate) defaulted_types: Vec<syn::Type>,
}

pub(crate) fn derive_enum(
    data: DataEnum,
    generics: &syn::Generics,
    crate_root: &TokenStream,
) -> Result<EnumDeriveOutput> {
    let mut walked_types = Vec::new();
    let mut defaulted_types = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        crate_root,
        walked_types: &mut walked_types,
        defaulted_types: &mut defaulted_types,
    };

    if data.variants.is_empty() {
        return Ok(EnumDeriveOutput {
            reveal_body: quote! { match *self {} },
            walked_types,
            defaulted_types,
        });
    }

    let mut arms = Vec::new();
    for variant in data.variants {
        if let Some(attr) = variant.attrs.iter().find(|attr| attr.path().is_ident("faces")) {
            return Err(syn::Error::new(
                attr.span(),
                "#[faces] is not supported on enum variants; tag the variant's fields instead",
            ));
        }
        let variant_ident = &variant.ident;
        let arm = match variant.fields {
            Fields::Unit => quote! { Self::#variant_ident => {} },
            Fields::Named(fields) => derive_named_variant(&mut ctx, variant_ident, fields)?,
            Fields::Unnamed(fields) => derive_unnamed_variant(&mut ctx, variant_ident, fields)?,
        };
        arms.push(arm);
    }

    Ok(EnumDeriveOutput {
        reveal_body: quote! {
            match self {
                #(#arms),*
            }
        },
        walked_types,
        defaulted_types,
    })
}

fn derive_named_variant(
    ctx: &mut DeriveContext<'_>,
    variant_ident: &Ident,
    fields: syn::FieldsNamed,
) -> Result<TokenStream> {
    let mut bindings = Vec::new();
    let mut visits = Vec::new();

    for field in fields.named {
        let span = field.span();
        let ident = field.ident.expect("named field should have an identifier");
        let strategy = variant_field_strategy(&field.attrs)?;
        if let Some(visit) = generate_field_visit(ctx, &field.ty, &ident, span, &strategy) {
            bindings.push(ident);
            visits.push(visit);
        }
    }

    Ok(quote! {
        Self::#variant_ident { #(#bindings,)* .. } => {
            #(#visits)*
        }
    })
}

fn derive_unnamed_variant(
    ctx: &mut DeriveContext<'_>,
    variant_ident: &Ident,
    fields: syn::FieldsUnnamed,
) -> Result<TokenStream> {
    let mut patterns = Vec::new();
    let mut visits = Vec::new();

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let span = field.span();
        let binding = format_ident!("field_{index}");
        let strategy = variant_field_strategy(&field.attrs)?;
        if let Some(visit) = generate_field_visit(ctx, &field.ty, &binding, span, &strategy) {
            patterns.push(quote! { #binding });
            visits.push(visit);
        } else {
            patterns.push(quote! { _ });
        }
    }

    Ok(quote! {
        Self::#variant_ident ( #(#patterns),* ) => {
            #(#visits)*
        }
    })
}
