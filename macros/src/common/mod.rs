// Common utilities shared between the derive and bitmask! macros
//
// This module contains:
// - attrs: `#[reflect(..)]` attribute model
// - parse_utils: Common parsing helpers

mod attrs;
mod parse_utils;

pub use attrs::*;
pub use parse_utils::*;
