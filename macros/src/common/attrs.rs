//! `#[reflect(..)]` attribute model
//!
//! Type level:
//! - `range = MIN..=MAX` - scan window, validated here
//! - `name(A | B) = "TEXT"` - explicit name for a (combined) value
//! - `display` - generate `Display` by name
//!
//! Variant / flag level:
//! - `rename = "TEXT"` - explicit name for this value

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    Attribute, Ident, LitStr, Token,
};

use super::parse_utils::{parse_flag_list, SignedInt};

/// Mirrors `EnumRange::MAX_SPAN`.
const MAX_SPAN: i128 = 1 << 16;

/// Inclusive window `MIN..=MAX`.
#[derive(Clone)]
pub struct RangeSpec {
    pub min: i64,
    pub max: i64,
}

impl Parse for RangeSpec {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let min: SignedInt = input.parse()?;
        if input.peek(Token![..]) && !input.peek(Token![..=]) {
            return Err(input.error("use an inclusive range `MIN..=MAX`"));
        }
        input.parse::<Token![..=]>()?;
        let max: SignedInt = input.parse()?;

        let span = (max.value as i128) - (min.value as i128);
        if !(2..=MAX_SPAN).contains(&span) {
            return Err(syn::Error::new(
                max.span,
                format!(
                    "invalid enum range {}..={}: max - min must be at least 2 and at most {MAX_SPAN}",
                    min.value, max.value
                ),
            ));
        }
        Ok(RangeSpec {
            min: min.value,
            max: max.value,
        })
    }
}

/// `name(A | B) = "TEXT"`
#[derive(Clone)]
pub struct CombinedName {
    pub flags: Vec<Ident>,
    pub name: LitStr,
}

#[derive(Default)]
pub struct TypeAttrs {
    pub range: Option<RangeSpec>,
    pub names: Vec<CombinedName>,
    pub display: bool,
}

impl TypeAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = TypeAttrs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("reflect")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("range") {
                    if out.range.is_some() {
                        return Err(meta.error("duplicate `range`"));
                    }
                    out.range = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("name") {
                    let content;
                    syn::parenthesized!(content in meta.input);
                    let flags = parse_flag_list(&content)?;
                    meta.input.parse::<Token![=]>()?;
                    let name: LitStr = meta.input.parse()?;
                    check_name(&name)?;
                    out.names.push(CombinedName { flags, name });
                    Ok(())
                } else if meta.path.is_ident("display") {
                    out.display = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    Err(meta.error("`rename` belongs on a variant or flag"))
                } else {
                    Err(meta.error("expected `range`, `name(..)` or `display`"))
                }
            })?;
        }
        Ok(out)
    }
}

#[derive(Default)]
pub struct VariantAttrs {
    pub rename: Option<LitStr>,
}

impl VariantAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = VariantAttrs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("reflect")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    check_name(&name)?;
                    out.rename = Some(name);
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"..\"`"))
                }
            })?;
        }
        Ok(out)
    }
}

/// Explicit names must be non-empty and must not contain the flag delimiter.
fn check_name(name: &LitStr) -> syn::Result<()> {
    let value = name.value();
    if value.is_empty() {
        return Err(syn::Error::new(name.span(), "name must not be empty"));
    }
    if value.contains('|') {
        return Err(syn::Error::new(name.span(), "name must not contain `|`"));
    }
    Ok(())
}

/// Variant name as written, without a raw-identifier prefix.
pub fn display_ident(ident: &Ident) -> LitStr {
    use syn::ext::IdentExt;
    LitStr::new(&ident.unraw().to_string(), Span::call_site())
}
