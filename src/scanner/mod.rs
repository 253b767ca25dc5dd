//! # Layer 1: Signature Scanner
//!
//! Recovers the bare enumerator name from a signature string by pure byte
//! slicing. Malformed input yields the wrong text (or empty text), never a
//! panic.
//!
//! ```text
//! static sv enum_type::name() [Enum = color, e = color::blue]
//!                                                       ^^^^
//!                                 rightmost delimiter --+  +-- size - trailing_trim
//! ```
//!
//! Unnamed values are rendered by compilers as a cast, e.g. `(color)7`.
//! Both rule shapes detect that rendering and return an empty name.

mod rule;

pub use rule::{DelimiterRule, Scoping};

use memchr::memrchr;

/// First byte of every unscoped cast rendering, whatever the vendor.
const CAST_OPEN: u8 = b'(';

/// Extract the bare enumerator name from `signature`.
///
/// Returns an empty string when the signature renders an unnamed value.
pub fn extract_name<'a>(signature: &'a str, rule: &DelimiterRule) -> &'a str {
    match rule.scoping {
        Scoping::Unscoped => extract_unscoped(signature, rule),
        Scoping::Scoped => extract_scoped(signature, rule),
    }
}

fn extract_unscoped<'a>(signature: &'a str, rule: &DelimiterRule) -> &'a str {
    let bytes = signature.as_bytes();
    let Some(limit) = bytes.len().checked_sub(rule.trailing_trim + rule.unscoped_trim) else {
        return "";
    };

    // Whichever delimiter sits closer to the end wins.
    let index = rfind_at(bytes, rule.primary, limit).max(rfind_at(bytes, rule.separator, limit));
    let start = index.map_or(0, |i| i + 1);
    let end = (limit + 1).min(bytes.len());

    let name = slice(signature, start, end);
    if name.as_bytes().first() == Some(&CAST_OPEN) {
        ""
    } else {
        name
    }
}

fn extract_scoped<'a>(signature: &'a str, rule: &DelimiterRule) -> &'a str {
    let bytes = signature.as_bytes();
    let Some(limit) = bytes.len().checked_sub(rule.trailing_trim) else {
        return "";
    };

    let start = rfind_at(bytes, rule.separator, limit).map_or(0, |i| i + 1);
    let name = slice(signature, start, limit);

    let name_bytes = name.as_bytes();
    let is_cast = memchr::memchr(rule.cast_marker, name_bytes).is_some()
        || name_bytes.get(4) == Some(&rule.cast_open);

    if is_cast { "" } else { name }
}

/// Last occurrence of `needle` at an index `<= pos`.
#[inline]
fn rfind_at(haystack: &[u8], needle: u8, pos: usize) -> Option<usize> {
    let end = pos.saturating_add(1).min(haystack.len());
    memrchr(needle, &haystack[..end])
}

#[inline]
fn slice(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    text.get(start..end).unwrap_or("")
}
