//! # Layer 0: Primitives
//!
//! Basic building blocks for the reflection engine:
//! - `bool.rs`: The Present/Absent capability markers.
//! - `range.rs`: The `[min, max]` scan window.
//! - `signature.rs`: Enumerator signatures and name overrides.

pub mod bool;
pub mod range;
pub mod signature;

// Re-export key types at this level
pub use bool::{Absent, Bool, Present};
pub use range::EnumRange;
pub use signature::{Override, Signature};
