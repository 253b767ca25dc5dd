//! Enumerator signatures.
//!
//! A signature is the compiler-produced text that identifies one enumerator,
//! paired with its underlying value. `#[derive(Reflect)]` builds these from
//! `concat!(module_path!(), "::", Type, "::", Variant)`, so the text carries
//! the full qualification that the scanner later strips.

/// One enumerator's underlying value and its raw signature text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    pub value: i64,
    pub text: &'static str,
}

impl Signature {
    pub const fn new(value: i64, text: &'static str) -> Self {
        Signature { value, text }
    }
}

/// Explicit name for one underlying value, consulted before the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Override {
    pub value: i64,
    pub name: &'static str,
}

impl Override {
    pub const fn new(value: i64, name: &'static str) -> Self {
        Override { value, name }
    }
}

/// First signature declared for `value`. Aliased flags share a value; the
/// earliest declaration wins.
pub fn find_signature(signatures: &'static [Signature], value: i64) -> Option<&'static Signature> {
    signatures.iter().find(|sig| sig.value == value)
}

/// First override declared for `value`.
pub fn find_override(overrides: &'static [Override], value: i64) -> Option<&'static str> {
    overrides
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.name)
}
