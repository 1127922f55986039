//! Struct-specific `Reveal` derivation.
//!
//! This module generates the field visits for struct fields and collects the
//! field types that require trait bounds.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    strategy::struct_field_strategy,
    transform::{generate_field_visit, DeriveContext},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) reveal_body: TokenStream,
    pub(crate) walked_types: Vec<syn::Type>,
    pub(crate) defaulted_types: Vec<syn::Type>,
}

pub(crate) fn derive_struct(
    data: DataStruct,
    generics: &syn::Generics,
    crate_root: &TokenStream,
) -> Result<StructDeriveOutput> {
    let mut walked_types = Vec::new();
    let mut defaulted_types = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        crate_root,
        walked_types: &mut walked_types,
        defaulted_types: &mut defaulted_types,
    };

    let reveal_body = match data.fields {
        Fields::Named(fields) => derive_named_struct(&mut ctx, fields)?,
        Fields::Unnamed(fields) => derive_unnamed_struct(&mut ctx, fields)?,
        Fields::Unit => quote! {},
    };

    Ok(StructDeriveOutput {
        reveal_body,
        walked_types,
        defaulted_types,
    })
}

fn derive_named_struct(
    ctx: &mut DeriveContext<'_>,
    fields: syn::FieldsNamed,
) -> Result<TokenStream> {
    let mut bindings = Vec::new();
    let mut visits = Vec::new();

    for field in fields.named {
        let span = field.span();
        let ident = field.ident.expect("named field should have an identifier");
        let strategy = struct_field_strategy(&field.attrs, &field.vis, Some(&ident))?;
        if let Some(visit) = generate_field_visit(ctx, &field.ty, &ident, span, &strategy) {
            bindings.push(ident);
            visits.push(visit);
        }
    }

    if bindings.is_empty() {
        return Ok(quote! {});
    }
    Ok(quote! {
        let Self { #(#bindings,)* .. } = self;
        #(#visits)*
    })
}

fn derive_unnamed_struct(
    ctx: &mut DeriveContext<'_>,
    fields: syn::FieldsUnnamed,
) -> Result<TokenStream> {
    let mut patterns = Vec::new();
    let mut visits = Vec::new();

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let span = field.span();
        let binding = format_ident!("field_{index}");
        let strategy = struct_field_strategy(&field.attrs, &field.vis, None)?;
        if let Some(visit) = generate_field_visit(ctx, &field.ty, &binding, span, &strategy) {
            patterns.push(quote! { #binding });
            visits.push(visit);
        } else {
            patterns.push(quote! { _ });
        }
    }

    if visits.is_empty() {
        return Ok(quote! {});
    }
    Ok(quote! {
        let Self ( #(#patterns),* ) = self;
        #(#visits)*
    })
}
