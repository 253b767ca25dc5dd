//! Type-level capability flag.
//!
//! `Reflect::Bitmask` is one of two marker types. Dispatch on it happens at
//! compile time through the `Capability` trait; `VALUE` exposes the same
//! choice to ordinary code.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;
}

/// The capability is available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// The capability is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
}

impl Bool for Absent {
    const VALUE: bool = false;
}
