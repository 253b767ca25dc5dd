use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    braced,
    parse::{Parse, ParseStream},
    Attribute, Expr, Ident, Token, Visibility,
};

use super::reflect::range_tokens;
use crate::common::{display_ident, partition_reflect_attrs, TypeAttrs, VariantAttrs};

/// `const NAME = expr;`
struct FlagDecl {
    attrs: Vec<Attribute>,
    ident: Ident,
    value: Expr,
}

impl Parse for FlagDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        input.parse::<Token![const]>()?;
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let value: Expr = input.parse()?;
        input.parse::<Token![;]>()?;
        Ok(FlagDecl { attrs, ident, value })
    }
}

/// Input for bitmask!:
///
/// ```ignore
/// #[reflect(range = 0..=16)]
/// pub struct Edge: u8 {
///     const TOP = 1;
///     #[reflect(rename = "right")]
///     const RIGHT = 2;
/// }
/// ```
pub struct BitmaskInput {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    repr: Ident,
    flags: Vec<FlagDecl>,
}

impl Parse for BitmaskInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let repr: Ident = input.parse()?;

        const INTEGERS: &[&str] = &[
            "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
        ];
        if !INTEGERS.contains(&repr.to_string().as_str()) {
            return Err(syn::Error::new(repr.span(), "expected an integer type"));
        }

        let content;
        braced!(content in input);
        let mut flags = Vec::new();
        while !content.is_empty() {
            flags.push(content.parse()?);
        }
        if flags.is_empty() {
            return Err(syn::Error::new(ident.span(), "bitmask! requires at least one flag"));
        }

        Ok(BitmaskInput {
            attrs,
            vis,
            ident,
            repr,
            flags,
        })
    }
}

/// Expand bitmask! into a transparent newtype, its flag constants, bitwise
/// operators and a `Reflect` impl with the bitmask capability.
pub fn expand_bitmask(input: BitmaskInput) -> TokenStream2 {
    match try_expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(input: BitmaskInput) -> syn::Result<TokenStream2> {
    let BitmaskInput {
        attrs,
        vis,
        ident,
        repr,
        flags,
    } = input;

    let (reflect_attrs, other_attrs) = partition_reflect_attrs(attrs);
    let type_attrs = TypeAttrs::from_attrs(&reflect_attrs)?;

    let mut consts = Vec::new();
    let mut signatures = Vec::new();
    let mut overrides = Vec::new();

    for flag in flags {
        let (reflect_attrs, doc_attrs) = partition_reflect_attrs(flag.attrs);
        let name = &flag.ident;
        let value = &flag.value;
        consts.push(quote! {
            #(#doc_attrs)*
            pub const #name: Self = Self(#value);
        });

        let text = display_ident(name);
        signatures.push(quote! { (#ident::#name.0 as i64, #text) });

        if let Some(rename) = VariantAttrs::from_attrs(&reflect_attrs)?.rename {
            overrides.push(quote! { (#ident::#name.0 as i64, #rename) });
        }
    }

    for combined in &type_attrs.names {
        let parts = &combined.flags;
        let name = &combined.name;
        overrides.push(quote! { ((0 #(| #ident::#parts.0)*) as i64, #name) });
    }

    let (min, max) = range_tokens(&type_attrs);

    let display = type_attrs.display.then(|| {
        quote! { ::enum_names::__impl_reflect_display!(#ident); }
    });

    let ops = expand_ops(&ident);

    Ok(quote! {
        #(#other_attrs)*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[repr(transparent)]
        #vis struct #ident(#repr);

        impl #ident {
            #(#consts)*

            /// No flags set.
            #[inline]
            pub const fn empty() -> Self {
                Self(0)
            }

            #[inline]
            pub const fn bits(self) -> #repr {
                self.0
            }

            /// Wrap raw bits, keeping bits that name no flag.
            #[inline]
            pub const fn from_bits_retain(bits: #repr) -> Self {
                Self(bits)
            }

            #[inline]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// All bits of `other` are set in `self`.
            #[inline]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            #[inline]
            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            #[inline]
            pub const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }
        }

        #ops

        ::enum_names::__impl_reflect! {
            type = #ident,
            repr = #repr,
            bitmask = Present,
            range = (#min, #max),
            signatures = [#(#signatures),*],
            overrides = [#(#overrides),*],
            underlying = |this| this.0,
            from_underlying = |raw| <#repr as ::enum_names::Underlying>::from_i64(raw).map(#ident),
        }
        #display
    })
}

fn expand_ops(ident: &Ident) -> TokenStream2 {
    let binary = [
        (quote!(BitOr), quote!(bitor), quote!(BitOrAssign), quote!(bitor_assign), quote!(|)),
        (quote!(BitAnd), quote!(bitand), quote!(BitAndAssign), quote!(bitand_assign), quote!(&)),
        (quote!(BitXor), quote!(bitxor), quote!(BitXorAssign), quote!(bitxor_assign), quote!(^)),
    ];

    let impls = binary.iter().map(|(tr, method, assign_tr, assign_method, op)| {
        quote! {
            impl ::core::ops::#tr for #ident {
                type Output = Self;

                #[inline]
                fn #method(self, rhs: Self) -> Self {
                    Self(self.0 #op rhs.0)
                }
            }

            impl ::core::ops::#assign_tr for #ident {
                #[inline]
                fn #assign_method(&mut self, rhs: Self) {
                    self.0 = self.0 #op rhs.0;
                }
            }
        }
    });

    quote! {
        #(#impls)*

        impl ::core::ops::Not for #ident {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }
    }
}
