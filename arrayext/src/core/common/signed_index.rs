// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversions between the signed positions that the public API accepts and the
//! unsigned offsets that [`Vec`] and slices use.
//!
//! Positions are signed so that callers can pass negative values and get a typed error
//! back instead of a wrapped `usize`. Once a position has been validated it is converted
//! with [`to_offset`], which can no longer fail.

use super::{ArrayOpError, ArrayOpResult};

/// Length of a sequence as a signed value. Saturates at [`isize::MAX`], which no real
/// allocation can reach.
#[must_use]
pub fn signed_len(len: usize) -> isize { isize::try_from(len).unwrap_or(isize::MAX) }

/// Converts a validated, non-negative position into an offset. Negative positions are
/// rejected with [`ArrayOpError::IndexOutOfRange`].
///
/// # Errors
///
/// Returns [`ArrayOpError::IndexOutOfRange`] if `index` is negative.
pub fn to_offset(index: isize, len: usize) -> ArrayOpResult<usize> {
    usize::try_from(index).map_err(|_| ArrayOpError::index_out_of_range(index, len))
}

/// Checks that `index` addresses an existing element, ie: `0 <= index <= len - 1`.
///
/// # Errors
///
/// Returns [`ArrayOpError::IndexOutOfRange`] otherwise.
pub fn ensure_element_index(index: isize, len: usize) -> ArrayOpResult<usize> {
    if index < 0 || index > signed_len(len) - 1 {
        return Err(ArrayOpError::index_out_of_range(index, len));
    }
    to_offset(index, len)
}

/// Adds two signed values, mapping overflow to [`ArrayOpError::ArgumentOutOfRange`] for
/// the argument called `name`.
///
/// # Errors
///
/// Returns [`ArrayOpError::ArgumentOutOfRange`] on overflow.
pub fn checked_add(lhs: isize, rhs: isize, name: &'static str) -> ArrayOpResult<isize> {
    lhs.checked_add(rhs)
        .ok_or(ArrayOpError::argument_out_of_range(name, rhs))
}

/// Multiplies two signed values, mapping overflow to
/// [`ArrayOpError::ArgumentOutOfRange`] for the argument called `name`.
///
/// # Errors
///
/// Returns [`ArrayOpError::ArgumentOutOfRange`] on overflow.
pub fn checked_mul(lhs: isize, rhs: isize, name: &'static str) -> ArrayOpResult<isize> {
    lhs.checked_mul(rhs)
        .ok_or(ArrayOpError::argument_out_of_range(name, lhs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(0, 5 => Ok(0))]
    #[test_case(4, 5 => Ok(4))]
    #[test_case(5, 5 => Err(ArrayOpError::index_out_of_range(5, 5)))]
    #[test_case(-1, 5 => Err(ArrayOpError::index_out_of_range(-1, 5)))]
    #[test_case(0, 0 => Err(ArrayOpError::index_out_of_range(0, 0)))]
    fn test_ensure_element_index(index: isize, len: usize) -> ArrayOpResult<usize> {
        ensure_element_index(index, len)
    }

    #[test]
    fn test_signed_len_and_overflow() {
        assert_eq2!(signed_len(42), 42);
        assert_eq2!(signed_len(usize::MAX), isize::MAX);
        assert!(checked_add(isize::MAX, 1, "shift").is_err());
        assert!(checked_mul(isize::MAX, 2, "depth").is_err());
        assert_eq2!(checked_mul(3, 9, "depth"), Ok(27));
    }
}
