//! Delimiter rules.
//!
//! Each rule describes where the bare enumerator name sits inside one
//! compiler's signature text: how many trailing bytes of boilerplate follow
//! it, which characters may precede it, and which characters betray the
//! fallback `(Type)value` rendering emitted for unnamed values.

/// Whether the signature renders an unscoped or a scoped enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scoping {
    /// Plain enumerators: the name follows the rightmost of two delimiters.
    Unscoped,
    /// Strongly typed enumerators: the name follows the last path separator
    /// and must not look like a cast.
    Scoped,
}

/// Vendor-specific slicing parameters for [`extract_name`](super::extract_name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelimiterRule {
    /// Bytes of boilerplate after the name.
    pub trailing_trim: usize,
    /// Additional trim applied to the unscoped search window.
    pub unscoped_trim: usize,
    /// First delimiter candidate for unscoped names.
    pub primary: u8,
    /// Path separator; second delimiter candidate for unscoped names.
    pub separator: u8,
    /// Byte at index 4 of a scoped name that marks a cast rendering.
    /// Unscoped names are always checked for a leading `(`.
    pub cast_open: u8,
    /// Byte whose presence in a scoped name marks a cast rendering.
    pub cast_marker: u8,
    pub scoping: Scoping,
}

impl DelimiterRule {
    /// Signatures built by `#[derive(Reflect)]`: `crate::module::Type::Variant`.
    pub const RUST_PATH: DelimiterRule = DelimiterRule {
        trailing_trim: 0,
        unscoped_trim: 0,
        primary: b' ',
        separator: b':',
        cast_open: b'(',
        cast_marker: b')',
        scoping: Scoping::Scoped,
    };

    /// Clang 13 and newer.
    pub const CLANG: DelimiterRule = DelimiterRule {
        trailing_trim: 1,
        unscoped_trim: 1,
        primary: b' ',
        separator: b':',
        cast_open: b'(',
        cast_marker: b')',
        scoping: Scoping::Unscoped,
    };

    /// Clang 6 to 12 render scoped fallbacks with a comma.
    pub const CLANG_LEGACY: DelimiterRule = DelimiterRule {
        cast_marker: b',',
        ..DelimiterRule::CLANG
    };

    /// GCC 9 and newer, C++17 and later.
    pub const GCC: DelimiterRule = DelimiterRule {
        trailing_trim: 157,
        unscoped_trim: 5,
        primary: b' ',
        separator: b':',
        cast_open: b'(',
        cast_marker: b')',
        scoping: Scoping::Unscoped,
    };

    /// GCC in C++14 mode carries a longer trailer.
    pub const GCC_CXX14: DelimiterRule = DelimiterRule {
        trailing_trim: 163,
        ..DelimiterRule::GCC
    };

    /// MSVC 2017 and newer.
    pub const MSVC: DelimiterRule = DelimiterRule {
        trailing_trim: 21,
        unscoped_trim: 0,
        primary: b',',
        separator: b':',
        cast_open: b'<',
        cast_marker: b')',
        scoping: Scoping::Unscoped,
    };

    /// Same rule, applied to scoped enumerators.
    pub const fn scoped(self) -> Self {
        DelimiterRule {
            scoping: Scoping::Scoped,
            ..self
        }
    }

    /// Same rule, applied to unscoped enumerators.
    pub const fn unscoped(self) -> Self {
        DelimiterRule {
            scoping: Scoping::Unscoped,
            ..self
        }
    }
}

impl Default for DelimiterRule {
    fn default() -> Self {
        DelimiterRule::RUST_PATH
    }
}
