//! Capability dispatch.
//!
//! `Reflect::Bitmask` selects, at the type level, how a type is named:
//!
//! | `Bitmask` | `Name`          | value→name            | name→value          |
//! |-----------|-----------------|-----------------------|---------------------|
//! | `Absent`  | `&'static str`  | table slot            | linear search       |
//! | `Present` | `String`        | slot or composite     | split on `\|`, OR   |
//!
//! Plain names borrow the cached table; composite names are built on demand.

use core::fmt::{Debug, Display};

use crate::bitmask;
use crate::lookup;
use crate::primitives::{Absent, Bool, EnumRange, Present};
use crate::reflect::Reflect;
use crate::table::table;

/// Naming strategy selected by a type-level boolean.
pub trait Capability: Bool {
    /// Text returned by value→name queries.
    type Name: AsRef<str> + Display + Debug + Clone + Default + PartialEq + for<'a> PartialEq<&'a str>;

    fn name_in<E: Reflect>(value: E, range: EnumRange) -> Self::Name;

    fn value_in<E: Reflect>(name: &str, range: EnumRange) -> Option<E>;
}

impl Capability for Absent {
    type Name = &'static str;

    #[inline]
    fn name_in<E: Reflect>(value: E, range: EnumRange) -> Self::Name {
        lookup::name_at(table::<E>(range), value.to_underlying())
    }

    fn value_in<E: Reflect>(name: &str, range: EnumRange) -> Option<E> {
        lookup::value_at(table::<E>(range), name).and_then(E::from_underlying)
    }
}

impl Capability for Present {
    type Name = String;

    fn name_in<E: Reflect>(value: E, range: EnumRange) -> Self::Name {
        bitmask::compose(table::<E>(range), value.to_underlying())
    }

    fn value_in<E: Reflect>(name: &str, range: EnumRange) -> Option<E> {
        bitmask::decompose(table::<E>(range), name).and_then(E::from_underlying)
    }
}

/// Name type of `E`: `&'static str` for plain enums, `String` for flags.
pub type NameOf<E> = <<E as Reflect>::Bitmask as Capability>::Name;
