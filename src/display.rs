//! Formatter integration.

use core::fmt;

use crate::api::name_of;
use crate::reflect::Reflect;

/// Displays a value by its name.
///
/// ```ignore
/// println!("{}", named(Rgb::Blue)); // Blue
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Named<E: Reflect>(pub E);

#[inline]
pub fn named<E: Reflect>(value: E) -> Named<E> {
    Named(value)
}

impl<E: Reflect> fmt::Display for Named<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` honours width and alignment flags.
        f.pad(name_of(self.0).as_ref())
    }
}

impl<E: Reflect> fmt::Debug for Named<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
