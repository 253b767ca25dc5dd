//! Public operations.
//!
//! Every query comes in two forms: one using the type's configured
//! `Reflect::RANGE`, and an `_in` form taking an explicit window. Tables are
//! cached per `(type, window)`, so mixing windows costs one build each.

use crate::capability::{Capability, NameOf};
use crate::error::{ReflectError, Result};
use crate::iter::EnumIter;
use crate::primitives::{Bool, EnumRange};
use crate::primitives::signature::find_signature;
use crate::reflect::Reflect;
use crate::table::{NameTable, table};

/// Name of `value`, or empty text if it is unnamed in `E::RANGE`.
#[inline]
pub fn name_of<E: Reflect>(value: E) -> NameOf<E> {
    name_in(value, E::RANGE)
}

/// Name of `value` within an explicit window.
#[inline]
pub fn name_in<E: Reflect>(value: E, range: EnumRange) -> NameOf<E> {
    <E::Bitmask as Capability>::name_in(value, range)
}

/// Value named `name`, if any.
#[inline]
pub fn value_of<E: Reflect>(name: &str) -> Option<E> {
    value_in(name, E::RANGE)
}

/// Value named `name` within an explicit window.
#[inline]
pub fn value_in<E: Reflect>(name: &str, range: EnumRange) -> Option<E> {
    <E::Bitmask as Capability>::value_in(name, range)
}

/// Like [`value_of`], but an absent value is an
/// [`InvalidAccess`](ReflectError::InvalidAccess) error.
pub fn value_of_checked<E: Reflect>(name: &str) -> Result<E> {
    value_in_checked(name, E::RANGE)
}

pub fn value_in_checked<E: Reflect>(name: &str, range: EnumRange) -> Result<E> {
    value_in(name, range).ok_or_else(|| ReflectError::InvalidAccess {
        name: name.to_owned(),
        min: range.min(),
        max: range.max(),
    })
}

/// All values of `E::RANGE` with their names, ascending.
#[inline]
pub fn for_each<E: Reflect>() -> EnumIter<E> {
    EnumIter::new(E::RANGE)
}

#[inline]
pub fn for_each_in<E: Reflect>(range: EnumRange) -> EnumIter<E> {
    EnumIter::new(range)
}

/// Whether `E` is a flag type, i.e. names combined values.
#[inline]
pub fn is_bitmask<E: Reflect>() -> bool {
    <E::Bitmask as Bool>::VALUE
}

/// Representation of `value`.
#[inline]
pub fn underlying_value<E: Reflect>(value: E) -> E::Repr {
    value.underlying()
}

/// Value with representation `raw`, only if it is named in `E::RANGE`.
pub fn cast<E: Reflect>(raw: i64) -> Option<E> {
    E::from_underlying(raw).filter(|value| !name_of(*value).as_ref().is_empty())
}

/// Full signature text of a declared enumerator, e.g. `app::Rgb::Blue`.
///
/// Independent of any window; `None` for values not declared by `E`.
pub fn qualified_name_of<E: Reflect>(value: E) -> Option<&'static str> {
    find_signature(E::SIGNATURES, value.to_underlying()).map(|sig| sig.text)
}

/// Cached table backing queries on `E` over `range`.
#[inline]
pub fn name_table<E: Reflect>(range: EnumRange) -> &'static NameTable {
    table::<E>(range)
}
