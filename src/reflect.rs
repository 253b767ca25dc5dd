//! The `Reflect` trait: per-type metadata provider.
//!
//! Implemented by `#[derive(Reflect)]` for fieldless enums and by
//! `bitmask!` for flag types. Hand-written impls are supported; the
//! generated ones go through [`__impl_reflect!`](crate::__impl_reflect).

use core::fmt::Debug;
use core::hash::Hash;

use crate::capability::Capability;
use crate::primitives::{EnumRange, Override, Signature};
use crate::scanner::DelimiterRule;

/// Enumeration metadata consumed by the table builder.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Copy, Reflect)]
/// #[reflect(range = -1..=3)]
/// enum Rgb { Red, Green, Blue, #[reflect(rename = "UNKNOWN")] Unknown = -1 }
///
/// assert_eq!(enum_names::name_of(Rgb::Blue), "Blue");
/// assert_eq!(enum_names::name_of(Rgb::Unknown), "UNKNOWN");
/// ```
///
/// A window must span at least two steps; `0..=1` is rejected when the
/// derive expands:
///
/// ```compile_fail
/// use enum_names::Reflect;
///
/// #[derive(Clone, Copy, Reflect)]
/// #[reflect(range = 0..=1)]
/// enum Bit { Off, On }
/// ```
///
/// So is a window wider than `EnumRange::MAX_SPAN`:
///
/// ```compile_fail
/// use enum_names::Reflect;
///
/// #[derive(Clone, Copy, Reflect)]
/// #[reflect(range = 0..=70000)]
/// enum Wide { A }
/// ```
pub trait Reflect: Copy + 'static {
    /// Integer representation backing the type.
    type Repr: Underlying;

    /// `Present` if the type supports bitwise combination, else `Absent`.
    /// Selects the name type and the lookup strategy.
    type Bitmask: Capability;

    /// Default scan window.
    const RANGE: EnumRange;

    /// One signature per declared enumerator, in declaration order.
    const SIGNATURES: &'static [Signature];

    /// Explicit names that take precedence over scanned ones.
    const OVERRIDES: &'static [Override] = &[];

    /// How names are recovered from `SIGNATURES`.
    const RULE: DelimiterRule = DelimiterRule::RUST_PATH;

    fn underlying(self) -> Self::Repr;

    /// `None` if no value of `Self` has this representation.
    fn from_underlying(value: i64) -> Option<Self>;

    #[inline]
    fn to_underlying(self) -> i64 {
        self.underlying().to_i64()
    }
}

/// Integer types usable as an enum representation.
pub trait Underlying: Copy + Debug + Eq + Hash + Ord + 'static {
    fn to_i64(self) -> i64;
    fn from_i64(value: i64) -> Option<Self>;
}

macro_rules! impl_underlying_checked {
    ($($ty:ty),*) => {
        $(
            impl Underlying for $ty {
                #[inline]
                fn to_i64(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn from_i64(value: i64) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )*
    };
}

// Wide unsigned types reinterpret the bit pattern so that the high bit
// round-trips.
macro_rules! impl_underlying_wrapping {
    ($($ty:ty),*) => {
        $(
            impl Underlying for $ty {
                #[inline]
                fn to_i64(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn from_i64(value: i64) -> Option<Self> {
                    Some(value as $ty)
                }
            }
        )*
    };
}

impl_underlying_checked!(i8, i16, i32, i64, isize, u8, u16, u32);
impl_underlying_wrapping!(u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_types_reject_out_of_range() {
        assert_eq!(u8::from_i64(255), Some(255));
        assert_eq!(u8::from_i64(256), None);
        assert_eq!(i8::from_i64(-129), None);
        assert_eq!(i16::from_i64(-1), Some(-1));
    }

    #[test]
    fn wide_unsigned_round_trips_high_bit() {
        let high = 1u64 << 63;
        assert_eq!(u64::from_i64(high.to_i64()), Some(high));
    }
}
