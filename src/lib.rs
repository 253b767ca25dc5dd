//! # enum-names
//!
//! Enum reflection: enumerator → name, name → enumerator, flag composition
//! and iteration over a configurable numeric window.
//!
//! ## Architecture
//!
//! ### 1. Signatures
//! `#[derive(Reflect)]` records each enumerator's qualified path, produced by
//! the compiler through `concat!(module_path!(), ...)`:
//!
//! ```text
//! enum Rgb { Blue = 2 }  ->  Signature { value: 2, text: "app::Rgb::Blue" }
//! ```
//!
//! ### 2. Scanning
//! A [`DelimiterRule`] locates the bare name inside a signature. The same
//! engine slices C++ `__PRETTY_FUNCTION__`-style text with the vendor
//! presets.
//!
//! ### 3. Tables
//! For a window `[min, max]` every integer gets one slot. Slot 0 is the
//! "not found" sentinel. Tables are built once per `(type, min, max)`.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present/Absent, EnumRange, Signature, Override                 |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Signature Scanner                                       |
//! |  - DelimiterRule (Rust path, Clang, GCC, MSVC), extract_name      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Tables & Lookup                                         |
//! |  - NameTable, cache, lookup, bitmask composer                     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: User API                                                |
//! |  - name_of, value_of, for_each, #[derive(Reflect)], bitmask!      |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use enum_names::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Reflect)]
//! #[reflect(range = -1..=3)]
//! enum Rgb { Red, Green, Blue, Unknown = -1 }
//!
//! assert_eq!(name_of(Rgb::Blue), "Blue");
//! assert_eq!(value_of::<Rgb>("Unknown"), Some(Rgb::Unknown));
//!
//! bitmask! {
//!     #[reflect(range = 0..=16, name(TOP | RIGHT | BOTTOM | LEFT) = "CENTER")]
//!     pub struct Edge: u8 {
//!         const TOP = 1;
//!         const RIGHT = 2;
//!         const BOTTOM = 4;
//!         const LEFT = 8;
//!     }
//! }
//!
//! assert_eq!(name_of(Edge::TOP | Edge::RIGHT), "TOP|RIGHT");
//! ```

// Allow `::enum_names` to work inside the crate itself
extern crate self as enum_names;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Signature Scanner
// =============================================================================
pub mod scanner;

// =============================================================================
// Layer 2: Tables, Lookup, Composition
// =============================================================================
pub mod table;
pub mod lookup;
pub mod bitmask;

// =============================================================================
// Layer 3: User API
// =============================================================================
pub mod reflect;
pub mod capability;
pub mod iter;
pub mod api;
pub mod display;
pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use api::{
    cast, for_each, for_each_in, is_bitmask, name_in, name_of, name_table, qualified_name_of,
    underlying_value, value_in, value_in_checked, value_of, value_of_checked,
};
pub use capability::{Capability, NameOf};
pub use display::{Named, named};
pub use error::{ReflectError, Result};
pub use iter::{EnumIter, EnumPair};
pub use primitives::{Absent, Bool, EnumRange, Override, Present, Signature};
pub use reflect::{Reflect, Underlying};
pub use scanner::{DelimiterRule, Scoping, extract_name};
pub use table::NameTable;

#[cfg(feature = "derive")]
pub use macros::{Reflect, bitmask};

// =============================================================================
// Declarative Macro Bridge for #[derive(Reflect)] and bitmask!
// =============================================================================
//
// The proc-macros emit a call to this macro so that:
// 1. `$crate` resolves to this crate however it was renamed by the user
// 2. `module_path!()` expands at the call site, qualifying each signature

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use `#[derive(Reflect)]` or `bitmask!` instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_reflect {
    (
        type = $ty:ident,
        repr = $repr:ty,
        bitmask = $bitmask:ident,
        range = ($min:expr, $max:expr),
        signatures = [$(($value:expr, $variant:literal)),* $(,)?],
        overrides = [$(($ovalue:expr, $oname:literal)),* $(,)?],
        underlying = |$this:ident| $underlying:expr,
        from_underlying = |$raw:ident| $from:expr $(,)?
    ) => {
        impl $crate::Reflect for $ty {
            type Repr = $repr;
            type Bitmask = $crate::$bitmask;

            const RANGE: $crate::EnumRange = $crate::EnumRange::between($min, $max);

            const SIGNATURES: &'static [$crate::Signature] = &[
                $(
                    $crate::Signature::new(
                        $value,
                        concat!(module_path!(), "::", stringify!($ty), "::", $variant),
                    ),
                )*
            ];

            const OVERRIDES: &'static [$crate::Override] = &[
                $($crate::Override::new($ovalue, $oname),)*
            ];

            #[inline]
            fn underlying(self) -> $repr {
                let $this = self;
                $underlying
            }

            #[inline]
            fn from_underlying($raw: i64) -> ::core::option::Option<Self> {
                $from
            }
        }
    };
}

/// Internal: `Display` by name for `#[reflect(display)]`.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_reflect_display {
    ($ty:ident) => {
        impl ::core::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&$crate::Named(*self), f)
            }
        }
    };
}

/// Common items for enum reflection.
pub mod prelude {
    pub use crate::api::{
        for_each, name_of, underlying_value, value_of, value_of_checked,
    };
    pub use crate::display::named;
    pub use crate::primitives::EnumRange;
    pub use crate::reflect::Reflect;
    #[cfg(feature = "derive")]
    pub use macros::{Reflect, bitmask};
}
