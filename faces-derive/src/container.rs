//! Container-level attribute parsing for `#[derive(Faces)]`.
//!
//! This module handles attributes on the struct/enum itself, not on fields.

use syn::{Attribute, LitStr, Meta, Result};

/// Options parsed from container-level `#[faces(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Overrides the path used to reach the `faces` runtime crate.
    pub(crate) crate_path: Option<syn::Path>,
}

/// Parses container-level `#[faces(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("faces") {
            continue;
        }

        match &attr.meta {
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "container-level #[faces] expects options, e.g. #[faces(crate = \"...\")]",
                ));
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("crate") {
                        if options.crate_path.is_some() {
                            return Err(meta.error("duplicate `crate` option"));
                        }
                        let lit: LitStr = meta.value()?.parse()?;
                        options.crate_path = Some(lit.parse()?);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `crate`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[faces]",
                ));
            }
        }
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_returns_defaults() {
        let attrs = parse_attrs(quote! {});
        let options = parse_container_options(&attrs).unwrap();
        assert!(options.crate_path.is_none());
    }

    #[test]
    fn crate_path_is_parsed() {
        let attrs = parse_attrs(quote! { #[faces(crate = "my_api::faces")] });
        let options = parse_container_options(&attrs).unwrap();
        let path = options.crate_path.unwrap();
        assert_eq!(path.segments.len(), 2);
        assert_eq!(path.segments[1].ident, "faces");
    }

    #[test]
    fn invalid_crate_path_errors() {
        let attrs = parse_attrs(quote! { #[faces(crate = "not a path")] });
        assert!(parse_container_options(&attrs).is_err());
    }

    #[test]
    fn unknown_option_errors() {
        let attrs = parse_attrs(quote! { #[faces(unknown_option)] });
        let result = parse_container_options(&attrs);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown container option"));
    }

    #[test]
    fn bare_faces_on_container_errors() {
        let attrs = parse_attrs(quote! { #[faces] });
        assert!(parse_container_options(&attrs).is_err());
    }
}
