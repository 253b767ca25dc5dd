//! Procedural macros for enum-names reflection
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Reflect)]` | fieldless enum | Implement `Reflect` |
//! | `bitmask!{}` | - | Declare a flag type implementing `Reflect` |
//!
//! Both expand to a call of the `enum_names::__impl_reflect!` bridge, which
//! qualifies every signature with `module_path!()` at the call site.

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (two-tier: common / user)
// =============================================================================

mod common;
mod user;

/// Derive macro implementing `Reflect` for a fieldless enum.
///
/// # Attributes
///
/// - `#[reflect(range = MIN..=MAX)]` - scan window (default `EnumRange::DEFAULT`)
/// - `#[reflect(display)]` - implement `Display` by name
/// - `#[reflect(rename = "TEXT")]` on a variant - explicit name
///
/// # Usage
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Reflect)]
/// #[reflect(range = -1..=3, display)]
/// enum Rgb {
///     Red,
///     Green,
///     Blue,
///     #[reflect(rename = "UNKNOWN")]
///     Unknown = -1,
/// }
///
/// assert_eq!(enum_names::name_of(Rgb::Unknown), "UNKNOWN");
/// assert_eq!(Rgb::Blue.to_string(), "Blue");
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_reflect(input).into()
}

/// Declare a flag type whose combined values are named `A|B`.
///
/// Generates a `#[repr(transparent)]` newtype, one associated const per
/// flag, `empty`/`bits`/`contains` helpers, the bitwise operators and a
/// `Reflect` impl with the bitmask capability.
///
/// # Usage
/// ```ignore
/// bitmask! {
///     #[reflect(range = 0..=16, name(TOP | RIGHT | BOTTOM | LEFT) = "CENTER")]
///     pub struct Edge: u8 {
///         const TOP = 1;
///         const RIGHT = 2;
///         const BOTTOM = 4;
///         const LEFT = 8;
///     }
/// }
///
/// assert_eq!(enum_names::name_of(Edge::TOP | Edge::RIGHT), "TOP|RIGHT");
/// ```
#[proc_macro]
pub fn bitmask(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::BitmaskInput);
    user::expand_bitmask(input).into()
}
