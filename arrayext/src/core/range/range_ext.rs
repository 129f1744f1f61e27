// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Inclusive range checks for any ordered, copyable value.
//!
//! ```text
//!            min             max
//!             ↓               ↓
//! ──────────┬─┬───────────────┬─┬──────────
//! Underflowed │    Within     │ Overflowed
//! ──────────┴─┴───────────────┴─┴──────────
//! ```

use crate::{ArrayOpError, ArrayOpResult};

/// Where a value falls relative to an inclusive `[min, max]` range.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RangeStatus {
    /// Below `min`.
    Underflowed,
    Within,
    /// Above `max`.
    Overflowed,
}

/// Range checks, implemented for every `PartialOrd + Copy` type.
///
/// ```
/// use arrayext::{RangeExt, RangeStatus};
///
/// assert!(5.is_in_range(0, 10));
/// assert_eq!(15.clamp_to(0, 10), 10);
/// assert_eq!((-0.5_f32).check_range(0.0, 1.0), RangeStatus::Underflowed);
/// assert!(11_u8.ensure_in_range(0, 10, "volume").is_err());
/// ```
pub trait RangeExt: PartialOrd + Copy {
    fn check_range(self, min: Self, max: Self) -> RangeStatus {
        if self < min {
            RangeStatus::Underflowed
        } else if self > max {
            RangeStatus::Overflowed
        } else {
            RangeStatus::Within
        }
    }

    /// Inclusive on both ends.
    fn is_in_range(self, min: Self, max: Self) -> bool {
        self.check_range(min, max) == RangeStatus::Within
    }

    /// Pins the value to `[min, max]`. Unlike [`Ord::clamp`] this does not panic when
    /// `min > max`, the `min` check simply wins.
    fn clamp_to(self, min: Self, max: Self) -> Self {
        match self.check_range(min, max) {
            RangeStatus::Underflowed => min,
            RangeStatus::Overflowed => max,
            RangeStatus::Within => self,
        }
    }

    /// Returns the value unchanged if it is in range.
    ///
    /// # Errors
    ///
    /// [`ArrayOpError::ValueOutOfRange`] naming `name` otherwise.
    fn ensure_in_range(self, min: Self, max: Self, name: &'static str) -> ArrayOpResult<Self> {
        if self.is_in_range(min, max) {
            Ok(self)
        } else {
            Err(ArrayOpError::ValueOutOfRange { name })
        }
    }
}

impl<T: PartialOrd + Copy> RangeExt for T {}
