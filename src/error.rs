//! Error types.
//!
//! A missing name is not an error: lookups return `Option`/empty text.
//! Errors only arise from invalid windows and from the checked accessors.

use thiserror::Error;

/// Failure conditions surfaced by the reflection API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    /// The window `[min, max]` spans fewer than 2 or more than
    /// `EnumRange::MAX_SPAN` steps.
    #[error("invalid enum range [{min}, {max}]: max - min must be at least 2 and at most 65536")]
    InvalidRange { min: i64, max: i64 },

    /// A checked accessor was called on an absent value.
    #[error("invalid access: no enumerator named `{name}` in [{min}, {max}]")]
    InvalidAccess { name: String, min: i64, max: i64 },
}

pub type Result<T> = core::result::Result<T, ReflectError>;
