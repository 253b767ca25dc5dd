//! Enumerator Iterator.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::RangeInclusive;

use crate::capability::{Capability, NameOf};
use crate::primitives::EnumRange;
use crate::reflect::Reflect;

/// A value together with its name.
pub struct EnumPair<E: Reflect> {
    pub value: E,
    pub name: NameOf<E>,
}

impl<E: Reflect> EnumPair<E> {
    #[inline]
    pub fn is_named(&self) -> bool {
        !self.name.as_ref().is_empty()
    }

    #[inline]
    pub fn into_tuple(self) -> (E, NameOf<E>) {
        (self.value, self.name)
    }
}

impl<E: Reflect + fmt::Debug> fmt::Debug for EnumPair<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumPair")
            .field("value", &self.value)
            .field("name", &self.name)
            .finish()
    }
}

impl<E: Reflect> Clone for EnumPair<E> {
    fn clone(&self) -> Self {
        EnumPair {
            value: self.value,
            name: self.name.clone(),
        }
    }
}

/// Lazy walk over the inclusive window `[min, max]` in ascending order.
///
/// Names are looked up as each item is produced; empty names are yielded,
/// not filtered. Integers with no value of `E` at all (gaps between the
/// variants of a fieldless enum) have nothing to yield and are stepped over.
pub struct EnumIter<E: Reflect> {
    window: EnumRange,
    cursor: RangeInclusive<i64>,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Reflect> EnumIter<E> {
    pub fn new(window: EnumRange) -> Self {
        EnumIter {
            window,
            cursor: window.iter(),
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn window(&self) -> EnumRange {
        self.window
    }

    fn pair(&self, raw: i64) -> Option<EnumPair<E>> {
        let value = E::from_underlying(raw)?;
        Some(EnumPair {
            value,
            name: <E::Bitmask as Capability>::name_in(value, self.window),
        })
    }
}

impl<E: Reflect> Iterator for EnumIter<E> {
    type Item = EnumPair<E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.cursor.next()?;
            if let Some(pair) = self.pair(raw) {
                return Some(pair);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.cursor.size_hint().1)
    }
}

impl<E: Reflect> DoubleEndedIterator for EnumIter<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.cursor.next_back()?;
            if let Some(pair) = self.pair(raw) {
                return Some(pair);
            }
        }
    }
}

impl<E: Reflect> FusedIterator for EnumIter<E> {}

impl<E: Reflect> Clone for EnumIter<E> {
    fn clone(&self) -> Self {
        EnumIter {
            window: self.window,
            cursor: self.cursor.clone(),
            _marker: PhantomData,
        }
    }
}
