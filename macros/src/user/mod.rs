//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Reflect)]` | on fieldless enum | Names, parsing, iteration |
//! | `bitmask!` | function macro | Flag newtype with composite names |

mod bitmask;
mod reflect;

pub use bitmask::{expand_bitmask, BitmaskInput};
pub use reflect::expand_derive_reflect;
