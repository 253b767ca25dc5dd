use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident};

use crate::common::{display_ident, find_repr, TypeAttrs, VariantAttrs};

/// #[derive(Reflect)] generates a call to the declarative macro bridge.
///
/// Each variant contributes:
/// - a signature `(Type::Variant as i64, "Variant")`, qualified by the bridge
///   with `module_path!()` and the type name
/// - an override if it carries `#[reflect(rename = "..")]`
pub fn expand_derive_reflect(input: DeriveInput) -> TokenStream2 {
    match try_expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            ident,
            "Reflect can only be derived for enums; use bitmask! for flag types",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Reflect cannot be derived for generic enums",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(ident, "Reflect requires at least one variant"));
    }

    let type_attrs = TypeAttrs::from_attrs(&input.attrs)?;
    let repr = find_repr(&input.attrs)?.unwrap_or_else(|| format_ident!("isize"));

    let mut variants: Vec<&Ident> = Vec::new();
    let mut signatures = Vec::new();
    let mut overrides = Vec::new();

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Reflect can only be derived for fieldless enums",
            ));
        }
        let name = &variant.ident;
        let text = display_ident(name);
        signatures.push(quote! { (#ident::#name as i64, #text) });

        if let Some(rename) = VariantAttrs::from_attrs(&variant.attrs)?.rename {
            overrides.push(quote! { (#ident::#name as i64, #rename) });
        }
        variants.push(name);
    }

    for combined in &type_attrs.names {
        let flags = &combined.flags;
        let name = &combined.name;
        overrides.push(quote! { (0 #(| #ident::#flags as i64)*, #name) });
    }

    let (min, max) = range_tokens(&type_attrs);

    let display = type_attrs.display.then(|| {
        quote! { ::enum_names::__impl_reflect_display!(#ident); }
    });

    Ok(quote! {
        ::enum_names::__impl_reflect! {
            type = #ident,
            repr = #repr,
            bitmask = Absent,
            range = (#min, #max),
            signatures = [#(#signatures),*],
            overrides = [#(#overrides),*],
            underlying = |this| this as #repr,
            from_underlying = |raw| match raw {
                #(value if value == #ident::#variants as i64 => ::core::option::Option::Some(#ident::#variants),)*
                _ => ::core::option::Option::None,
            },
        }
        #display
    })
}

/// Window bounds as tokens; `EnumRange::DEFAULT` when no range is given.
pub fn range_tokens(attrs: &TypeAttrs) -> (TokenStream2, TokenStream2) {
    match &attrs.range {
        Some(range) => {
            let (min, max) = (range.min, range.max);
            (quote! { #min }, quote! { #max })
        }
        None => (
            quote! { ::enum_names::EnumRange::DEFAULT.min() },
            quote! { ::enum_names::EnumRange::DEFAULT.max() },
        ),
    }
}
