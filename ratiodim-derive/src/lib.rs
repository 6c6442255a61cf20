//! Derive macro implementation used by `ratiodim`.
//!
//! `ratiodim-derive` mints *nominal* units: a named marker type with a hand-supplied dimension and ratio, the
//! named counterpart of `Specified`. The `Unit` derive expands in terms of `crate::Unit`, `crate::Dimension` and
//! `crate::Ratio`, so it is intended for crates that expose the `ratiodim-core` API at their root (`ratiodim-core`
//! itself, the `ratiodim` facade, or a crate that glob-imports either).
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements `crate::Unit for MyUnit`.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `dimension = <const expr>`: a `Dimension`, e.g. `Dimension::custom(17)`
//! - `ratio = <const expr>`: a `Ratio` to the canonical unit of the dimension, e.g. `Ratio::new(1, 1000)`
//! - `value = <type>` (optional, default `f64`): the numeric representation

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, Token, Type,
};

/// Derive `crate::Unit` from a `#[unit(dimension = .., ratio = .., value = ..)]` attribute.
///
/// `dimension` and `ratio` are required and must be constant expressions; `value` defaults to `f64`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let dimension = &unit_attr.dimension;
    let ratio = &unit_attr.ratio;
    let value = match &unit_attr.value {
        Some(ty) => quote!(#ty),
        None => quote!(f64),
    };

    let expanded = quote! {
        impl #impl_generics crate::Unit for #name #ty_generics #where_clause {
            const DIMENSION: crate::Dimension = #dimension;
            const RATIO: crate::Ratio = #ratio;
            type Value = #value;
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    dimension: Expr,
    ratio: Expr,
    value: Option<Type>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut dimension: Option<Expr> = None;
        let mut ratio: Option<Expr> = None;
        let mut value: Option<Type> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                "value" => {
                    value = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            dimension,
            ratio,
            value,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        derive_unit_impl(input).unwrap().to_string()
    }

    fn parse_error(input: DeriveInput) -> String {
        parse_unit_attribute(&input.attrs)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Dimension::custom(17), ratio = Ratio::new(8, 1), value = u64)]
            pub struct Byte;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert!(attr.value.is_some());
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Byte;
        };

        assert!(parse_error(input).contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_dimension() {
        let input: DeriveInput = parse_quote! {
            #[unit(ratio = Ratio::ONE)]
            pub struct Byte;
        };

        assert!(parse_error(input).contains("missing required attribute `dimension`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_ratio() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Dimension::custom(17))]
            pub struct Byte;
        };

        assert!(parse_error(input).contains("missing required attribute `ratio`"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Dimension::custom(17), ratio = Ratio::ONE, symbol = "B")]
            pub struct Byte;
        };

        assert!(parse_error(input).contains("unknown attribute `symbol`"));
    }

    #[test]
    fn test_derive_unit_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Dimension::custom(17), ratio = Ratio::ONE)]
            pub struct Bit;
        };

        let code = expand(input);
        assert!(code.contains("impl crate :: Unit for Bit"));
        assert!(code.contains("const DIMENSION : crate :: Dimension = Dimension :: custom (17)"));
        assert!(code.contains("const RATIO : crate :: Ratio = Ratio :: ONE"));
        assert!(code.contains("type Value = f64"));
    }

    #[test]
    fn test_derive_unit_impl_with_value_type() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Dimension::custom(17), ratio = Ratio::new(8, 1), value = u64)]
            pub struct Byte;
        };

        let code = expand(input);
        assert!(code.contains("const RATIO : crate :: Ratio = Ratio :: new (8 , 1)"));
        assert!(code.contains("type Value = u64"));
    }

    #[test]
    fn test_derive_unit_impl_generic_marker() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Dimension::custom(19), ratio = Ratio::ONE)]
            pub struct Tagged<T: Copy + core::fmt::Debug + 'static>(core::marker::PhantomData<T>);
        };

        let code = expand(input);
        assert!(code.contains("crate :: Unit for Tagged < T >"));
    }

    #[test]
    fn test_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            dimension = Dimension::custom(17), ratio = Ratio::ONE,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert!(attr.value.is_none());
    }

    #[test]
    fn test_unit_attribute_parse_duplicate_ratio() {
        // Parser accepts duplicates - last one wins
        let tokens = quote! {
            dimension = Dimension::custom(17), ratio = Ratio::ONE, ratio = Ratio::new(1, 8)
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        let ratio = &attr.ratio;
        assert_eq!(quote!(#ratio).to_string(), "Ratio :: new (1 , 8)");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Bit;
        };
        let result = derive_unit_impl(input);
        let code = result.err().unwrap().to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
