//! Scan windows.

use core::fmt;
use core::ops::RangeInclusive;

use crate::error::{ReflectError, Result};

/// Inclusive integer window `[min, max]` scanned for enumerator names.
///
/// A window must span at least two and at most [`MAX_SPAN`](Self::MAX_SPAN)
/// steps (`2 <= max - min <= MAX_SPAN`). Values outside the window are
/// treated as unnamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumRange {
    min: i64,
    max: i64,
}

impl EnumRange {
    /// Library-wide fallback window, applied by `#[derive(Reflect)]` and
    /// `bitmask!` when no `#[reflect(range = ..)]` is given.
    pub const DEFAULT: EnumRange = EnumRange::between(-128, 128);

    /// Widest accepted `max - min`. Every integer of a window gets a table
    /// slot, so the span bounds the table size.
    pub const MAX_SPAN: i64 = 1 << 16;

    /// Validate and build a window.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if Self::is_valid(min, max) {
            Ok(EnumRange { min, max })
        } else {
            Err(ReflectError::InvalidRange { min, max })
        }
    }

    /// Const constructor for `Reflect::RANGE`.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a const item) if the window is
    /// invalid.
    ///
    /// ```compile_fail
    /// use enum_names::EnumRange;
    ///
    /// let _narrow = const { EnumRange::between(0, 1) };
    /// ```
    pub const fn between(min: i64, max: i64) -> Self {
        assert!(
            Self::is_valid(min, max),
            "enum range: max - min must be at least 2 and at most 65536"
        );
        EnumRange { min, max }
    }

    /// Whether `[min, max]` spans between 2 and `MAX_SPAN` steps.
    pub const fn is_valid(min: i64, max: i64) -> bool {
        let span = (max as i128) - (min as i128);
        span >= 2 && span <= Self::MAX_SPAN as i128
    }

    #[inline]
    pub const fn min(&self) -> i64 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> i64 {
        self.max
    }

    #[inline]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of integers in the window, at most `MAX_SPAN + 1`.
    pub const fn len(&self) -> usize {
        (self.max - self.min) as usize + 1
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }
}

impl Default for EnumRange {
    fn default() -> Self {
        EnumRange::DEFAULT
    }
}

impl fmt::Display for EnumRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl TryFrom<RangeInclusive<i64>> for EnumRange {
    type Error = ReflectError;

    fn try_from(range: RangeInclusive<i64>) -> Result<Self> {
        EnumRange::new(*range.start(), *range.end())
    }
}
