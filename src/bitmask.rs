//! Bitmask Composer.
//!
//! Flag types render combined values as their constituent names joined by
//! `|`, in ascending order of the constituents' values:
//!
//! ```text
//! TOP | RIGHT  (= 3)  ->  "TOP|RIGHT"
//! "RIGHT|TOP"         ->  TOP | RIGHT
//! ```

use crate::lookup::{name_at, value_at};
use crate::table::NameTable;

pub const DELIMITER: char = '|';

/// A slot name usable as a flag: non-empty and not a numeric rendering.
#[inline]
fn is_symbolic(name: &str) -> bool {
    name.as_bytes()
        .first()
        .is_some_and(|first| !first.is_ascii_digit())
}

/// Name for a possibly combined `value`.
///
/// A direct match is returned as is. Otherwise every named value `i` of
/// `[min, max)` whose bits are a subset of `value` contributes its name. A
/// result with fewer than two constituents is not a composite and yields an
/// empty string.
pub fn compose(table: &NameTable, value: i64) -> String {
    let direct = name_at(table, value);
    if is_symbolic(direct) {
        return direct.to_owned();
    }

    let range = table.range();
    let mut composed = String::new();
    for flag in range.min()..range.max() {
        let name = name_at(table, flag);
        if is_symbolic(name) && value & flag == flag {
            composed.push_str(name);
            composed.push(DELIMITER);
        }
    }
    composed.pop();

    if composed.contains(DELIMITER) {
        composed
    } else {
        String::new()
    }
}

/// Value for a `|`-joined name.
///
/// Without a delimiter this is a plain lookup. Otherwise every segment is
/// resolved and OR-ed together; any unresolved segment fails the parse.
/// Empty segments before the last delimiter are skipped, but the trailing
/// segment must resolve, so `"A||B"` parses while `"A|"` does not.
pub fn decompose(table: &NameTable, name: &str) -> Option<i64> {
    let Some((head, tail)) = name.rsplit_once(DELIMITER) else {
        return value_at(table, name);
    };

    let mut combined = 0;
    for segment in head.split(DELIMITER).filter(|s| !s.is_empty()) {
        combined |= value_at(table, segment)?;
    }
    Some(combined | value_at(table, tail)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{EnumRange, Override, Present, Signature};
    use crate::reflect::Reflect;

    #[derive(Clone, Copy)]
    struct Perm(u8);

    impl Reflect for Perm {
        type Repr = u8;
        type Bitmask = Present;

        const RANGE: EnumRange = EnumRange::between(0, 8);
        const SIGNATURES: &'static [Signature] = &[
            Signature::new(1, "fs::Perm::R"),
            Signature::new(2, "fs::Perm::W"),
            Signature::new(4, "fs::Perm::X"),
        ];
        const OVERRIDES: &'static [Override] = &[Override::new(7, "ALL")];

        fn underlying(self) -> u8 {
            self.0
        }

        fn from_underlying(value: i64) -> Option<Self> {
            u8::try_from(value).ok().map(Perm)
        }
    }

    fn perms() -> NameTable {
        NameTable::build::<Perm>(Perm::RANGE)
    }

    #[test]
    fn compose_direct_and_composite() {
        let table = perms();
        assert_eq!(compose(&table, 2), "W");
        assert_eq!(compose(&table, 7), "ALL");
        assert_eq!(compose(&table, 5), "R|X");
        assert_eq!(compose(&table, 6), "W|X");
    }

    #[test]
    fn compose_needs_two_constituents() {
        let table = perms();
        assert_eq!(compose(&table, 0), "");
        assert_eq!(compose(&table, 1 | 64), "");
    }

    #[test]
    fn decompose_segments() {
        let table = perms();
        assert_eq!(decompose(&table, "X|R"), Some(5));
        assert_eq!(decompose(&table, "R||W"), Some(3));
        assert_eq!(decompose(&table, "ALL"), Some(7));
        assert_eq!(decompose(&table, "R|"), None);
        assert_eq!(decompose(&table, "R|Q"), None);
        assert_eq!(decompose(&table, "Q|R"), None);
    }

    #[test]
    fn numeric_names_are_not_flags() {
        assert!(is_symbolic("TOP"));
        assert!(!is_symbolic(""));
        assert!(!is_symbolic("7"));
    }
}
