//! Range Table Builder.

use crate::primitives::signature::{find_override, find_signature};
use crate::primitives::EnumRange;
use crate::reflect::Reflect;
use crate::scanner::extract_name;

/// Names for every integer of an inclusive window.
///
/// ```text
/// offset:  0         1       2       ...  len - 1
/// value:   sentinel  min     min + 1 ...  max
/// ```
///
/// Offset 0 is the "not found" slot and always holds an empty name.
/// Names borrow static signature or override text; nothing is allocated per
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable {
    range: EnumRange,
    names: Box<[&'static str]>,
}

impl NameTable {
    /// Scan every value of `range` for `E`.
    ///
    /// For each value an override wins; otherwise the first signature
    /// declared with that value is scanned. Values without either stay
    /// unnamed.
    pub fn build<E: Reflect>(range: EnumRange) -> Self {
        let mut names = Vec::with_capacity(range.len() + 1);
        names.push("");
        names.extend(range.iter().map(|value| Self::scan::<E>(value)));

        NameTable {
            range,
            names: names.into_boxed_slice(),
        }
    }

    fn scan<E: Reflect>(value: i64) -> &'static str {
        if let Some(name) = find_override(E::OVERRIDES, value) {
            return name;
        }
        find_signature(E::SIGNATURES, value)
            .map(|sig| extract_name(sig.text, &E::RULE))
            .unwrap_or("")
    }

    /// Window the table was built for.
    #[inline]
    pub fn range(&self) -> EnumRange {
        self.range
    }

    /// Slots including the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.len() <= 1
    }

    /// Raw slot access by offset.
    #[inline]
    pub fn get(&self, offset: usize) -> Option<&'static str> {
        self.names.get(offset).copied()
    }

    /// Offset holding `value`, or `None` outside the window.
    #[inline]
    pub fn offset_of(&self, value: i64) -> Option<usize> {
        if !self.range.contains(value) {
            return None;
        }
        usize::try_from((value as i128) - (self.range.min() as i128) + 1).ok()
    }

    /// Value stored at `offset`. Offset 0 is the sentinel and has none.
    #[inline]
    pub fn value_at(&self, offset: usize) -> Option<i64> {
        if offset == 0 || offset >= self.names.len() {
            return None;
        }
        i64::try_from(offset as i128 + self.range.min() as i128 - 1).ok()
    }

    /// Slots after the sentinel as `(value, name)`, ascending by value.
    pub fn entries(&self) -> impl Iterator<Item = (i64, &'static str)> + '_ {
        self.range.iter().zip(self.names[1..].iter().copied())
    }

    /// Number of non-empty slots.
    pub fn named_count(&self) -> usize {
        self.names[1..].iter().filter(|name| !name.is_empty()).count()
    }

    pub(crate) fn names(&self) -> &[&'static str] {
        &self.names
    }
}
