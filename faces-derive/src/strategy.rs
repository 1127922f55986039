//! Parsing of `#[faces(...)]` field attributes.
//!
//! This module maps attribute syntax to traversal decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Ident, LitStr, Meta, Result, Token, Visibility,
};

/// Field traversal strategy derived from visibility and `#[faces(...)]`.
///
/// ## Strategy Mapping
///
/// | Field | Strategy | Behavior |
/// |-------|----------|----------|
/// | private | `Skip` | Never read, walked or reset |
/// | `pub`, no attribute | `Visit { tags: [], walk: true }` | Walked only |
/// | `pub`, `#[faces("a,b")]` | `Visit { tags: [a, b], walk: true }` | Walked, then kept or reset |
/// | `pub`, `#[faces(opaque)]` | `Visit { tags: [], walk: false }` | Untouched |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// The field is not accessible to callers and is left alone.
    Skip,
    /// The field takes part in traversal.
    Visit {
        /// Declared tags, deduplicated, in declaration order.
        tags: Vec<String>,
        /// Whether nested values are walked.
        walk: bool,
    },
}

/// Options collected from the `#[faces(...)]` attributes of a single field.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) tags: Vec<String>,
    pub(crate) opaque: bool,
    /// Span of the attribute, when one was present.
    pub(crate) annotated: Option<Span>,
}

enum FieldArg {
    Tags(LitStr),
    Opaque,
}

impl Parse for FieldArg {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(LitStr) {
            input.parse().map(FieldArg::Tags)
        } else if lookahead.peek(Ident) {
            let ident: Ident = input.parse()?;
            if ident == "opaque" {
                Ok(FieldArg::Opaque)
            } else {
                Err(syn::Error::new(
                    ident.span(),
                    format!("unknown field option `{ident}`; expected a tag list string or `opaque`"),
                ))
            }
        } else {
            Err(lookahead.error())
        }
    }
}

/// Splits a comma-separated tag list, trimming whitespace and dropping empty segments.
pub(crate) fn split_tag_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

fn push_tags(target: &mut Vec<String>, lit: &LitStr) -> Result<()> {
    let value = lit.value();
    let mut found = false;
    for tag in split_tag_list(&value) {
        found = true;
        if !target.iter().any(|existing| existing == tag) {
            target.push(tag.to_string());
        }
    }
    if !found {
        return Err(syn::Error::new(
            lit.span(),
            "tag list must name at least one tag",
        ));
    }
    Ok(())
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("faces") {
            continue;
        }
        if options.annotated.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "multiple #[faces] attributes specified on the same field",
            ));
        }
        options.annotated = Some(attr.span());

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected a tag list (e.g., #[faces(\"private,public\")])",
                ));
            }
            Meta::List(list) => {
                let args = list.parse_args_with(Punctuated::<FieldArg, Token![,]>::parse_terminated)?;
                if args.is_empty() {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected a tag list (e.g., #[faces(\"private,public\")])",
                    ));
                }
                for arg in args {
                    match arg {
                        FieldArg::Tags(lit) => push_tags(&mut options.tags, &lit)?,
                        FieldArg::Opaque => options.opaque = true,
                    }
                }
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[faces]",
                ));
            }
        }
    }
    Ok(options)
}

/// Resolves the strategy of a struct field.
///
/// `ident` is used to point diagnostics at the offending field; tuple fields pass `None`
/// and fall back to the attribute span.
pub(crate) fn struct_field_strategy(
    attrs: &[Attribute],
    vis: &Visibility,
    ident: Option<&Ident>,
) -> Result<Strategy> {
    let options = parse_field_options(attrs)?;
    if matches!(vis, Visibility::Inherited) {
        if let Some(attr_span) = options.annotated {
            let span = ident.map_or(attr_span, Ident::span);
            return Err(syn::Error::new(
                span,
                "#[faces] has no effect on private fields; make the field `pub` or remove the attribute",
            ));
        }
        return Ok(Strategy::Skip);
    }
    Ok(options.into_strategy())
}

/// Resolves the strategy of an enum variant field. Variant fields are always accessible.
pub(crate) fn variant_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    parse_field_options(attrs).map(FieldOptions::into_strategy)
}

impl FieldOptions {
    fn into_strategy(self) -> Strategy {
        Strategy::Visit {
            tags: self.tags,
            walk: !self.opaque,
        }
    }
}
