//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute, Ident, LitInt, Token,
};

// =============================================================================
// Signed Integer Literals: `-1`, `0x10`, `256`
// =============================================================================

/// An integer literal with an optional leading minus sign.
#[derive(Clone)]
pub struct SignedInt {
    pub value: i64,
    pub span: Span,
}

impl Parse for SignedInt {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let negative = input.peek(Token![-]);
        if negative {
            input.parse::<Token![-]>()?;
        }
        let lit: LitInt = input.parse()?;
        let magnitude: i128 = lit.base10_parse()?;
        let signed = if negative { -magnitude } else { magnitude };
        let value = i64::try_from(signed)
            .map_err(|_| syn::Error::new(lit.span(), "integer does not fit in i64"))?;
        Ok(SignedInt {
            value,
            span: lit.span(),
        })
    }
}

// =============================================================================
// Flag Lists: `A | B | C`
// =============================================================================

/// Parse a non-empty `|`-separated list of identifiers.
pub fn parse_flag_list(input: ParseStream) -> syn::Result<Vec<Ident>> {
    let items = Punctuated::<Ident, Token![|]>::parse_separated_nonempty(input)?;
    Ok(items.into_iter().collect())
}

// =============================================================================
// Attribute Helpers
// =============================================================================

/// Split attributes into `#[reflect(..)]` and everything else.
pub fn partition_reflect_attrs(attrs: Vec<Attribute>) -> (Vec<Attribute>, Vec<Attribute>) {
    attrs
        .into_iter()
        .partition(|attr| attr.path().is_ident("reflect"))
}

/// Integer type named in `#[repr(..)]`, ignoring `C`, `align`, etc.
pub fn find_repr(attrs: &[Attribute]) -> syn::Result<Option<Ident>> {
    const INTEGERS: &[&str] = &[
        "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
    ];

    let mut found = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if INTEGERS.contains(&ident.to_string().as_str()) {
                    found = Some(ident.clone());
                }
            }
            // Skip arguments such as `align(8)`.
            if meta.input.peek(syn::token::Paren) {
                let _content;
                syn::parenthesized!(_content in meta.input);
            }
            Ok(())
        })?;
    }
    Ok(found)
}
