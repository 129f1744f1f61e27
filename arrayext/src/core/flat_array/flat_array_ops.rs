// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In place splicing of a [`Vec`].
//!
//! All positions are signed. Every method validates its arguments first and only then
//! touches the storage, so when an error is returned the [`Vec`] is unchanged.
//!
//! ```text
//! move_block(index=3, length=2, shift=-1)
//!
//!           ┌───┬───┬───┬───┬───┐
//! before    │ 0 │ 1 │ 2 │ 3 │ 4 │
//!           └───┴───┴───┴───┴───┘
//!                       ╰─block─╯
//!           ┌───┬───┬───┬───┬───┐
//! after     │ 0 │ 1 │ 3 │ 4 │ 4 │  <- the vacated cell keeps its stale value
//!           └───┴───┴───┴───┴───┘
//! ```

use crate::{ArrayOpError, ArrayOpResult, checked_add, ensure_element_index, signed_len,
            to_offset, trace_resize};

/// Splicing operations for an owned, resizable sequence.
pub trait FlatArrayOps<T> {
    /// Inserts all of `source` at `index`, shifting the tail right.
    ///
    /// - An empty `source` is a no-op.
    /// - `index == len` appends.
    ///
    /// # Errors
    ///
    /// [`ArrayOpError::IndexOutOfRange`] if `index` is negative or greater than `len`.
    fn insert_slice(&mut self, index: isize, source: &[T]) -> ArrayOpResult<()>;

    /// Overwrites elements starting at `index` with `source`, growing the sequence when
    /// `source` runs past the end. An empty `source` is a no-op.
    ///
    /// # Errors
    ///
    /// [`ArrayOpError::IndexOutOfRange`] if `index` does not address an existing element.
    /// This means replacing into an empty sequence always fails.
    fn replace_slice(&mut self, index: isize, source: &[T]) -> ArrayOpResult<()>;

    /// Copies `source` onto the end.
    fn append_slice(&mut self, source: &[T]);

    /// Pushes a single value onto the end.
    fn append_one(&mut self, value: T);

    /// Resizes to `max(length, 0)`. Growth pads with [`Default::default`]. Any length is
    /// accepted.
    ///
    /// # Errors
    ///
    /// [`ArrayOpError::ArgumentOutOfRange`] if the storage for `length` elements can't be
    /// allocated. The sequence is unchanged.
    fn crop_to(&mut self, length: isize) -> ArrayOpResult<()>
    where
        T: Default;

    /// Keeps the window of at most `length` elements that starts at `index`. An `index`
    /// outside of `[0, len - 1]` leaves the sequence unchanged.
    ///
    /// # Errors
    ///
    /// [`ArrayOpError::IndexOutOfRange`] if `length <= 0`.
    fn crop_window(&mut self, index: isize, length: isize) -> ArrayOpResult<()>;

    /// Copies the block `[index, index + length)` to `index + shift`.
    ///
    /// 1. Moving right past the end grows the sequence to `index + length + shift`,
    ///    padding with [`Default::default`].
    /// 2. Moving left past zero clips the front of the block so the destination starts
    ///    at zero.
    /// 3. Cells that the block vacates keep their old values.
    ///
    /// # Errors
    ///
    /// - [`ArrayOpError::IndexOutOfRange`] if `length <= 0`, or if the copy would read or
    ///   write outside the sequence.
    /// - [`ArrayOpError::ArgumentOutOfRange`] naming `shift` if the grown sequence can't
    ///   be allocated.
    fn move_block(&mut self, index: isize, length: isize, shift: isize) -> ArrayOpResult<()>
    where
        T: Default;

    /// Removes `length` elements starting at `index`. When the range reaches the last
    /// element the sequence is truncated to `index`. A `length < 1` is a no-op.
    ///
    /// # Errors
    ///
    /// [`ArrayOpError::IndexOutOfRange`] if `index` does not address an existing element.
    fn remove_range(&mut self, index: isize, length: isize) -> ArrayOpResult<()>;
}

impl<T: Clone> FlatArrayOps<T> for Vec<T> {
    fn insert_slice(&mut self, index: isize, source: &[T]) -> ArrayOpResult<()> {
        if source.is_empty() {
            return Ok(());
        }

        let len = self.len();
        if index < 0 || index > signed_len(len).saturating_add(1) {
            return Err(ArrayOpError::index_out_of_range(index, len));
        }
        // `len + 1` passes the bound check above, but leaves a tail of negative length.
        if index > signed_len(len) {
            return Err(ArrayOpError::index_out_of_range(index, len));
        }
        let offset = to_offset(index, len)?;

        self.splice(offset..offset, source.iter().cloned());
        trace_resize!("insert_slice", len, self.len());
        Ok(())
    }

    fn replace_slice(&mut self, index: isize, source: &[T]) -> ArrayOpResult<()> {
        if source.is_empty() {
            return Ok(());
        }

        let len = self.len();
        let offset = ensure_element_index(index, len)?;
        let overlap = source.len().min(len - offset);

        self[offset..offset + overlap].clone_from_slice(&source[..overlap]);
        if overlap < source.len() {
            self.extend_from_slice(&source[overlap..]);
            trace_resize!("replace_slice", len, self.len());
        }
        Ok(())
    }

    fn append_slice(&mut self, source: &[T]) { self.extend_from_slice(source); }

    fn append_one(&mut self, value: T) { self.push(value); }

    fn crop_to(&mut self, length: isize) -> ArrayOpResult<()>
    where
        T: Default,
    {
        let old_len = self.len();
        let new_len = usize::try_from(length).unwrap_or(0);
        try_resize_with_default(self, new_len, "length", length)?;
        trace_resize!("crop_to", old_len, new_len);
        Ok(())
    }

    fn crop_window(&mut self, index: isize, length: isize) -> ArrayOpResult<()> {
        let len = self.len();
        if length <= 0 {
            return Err(ArrayOpError::index_out_of_range(length, len));
        }

        let Ok(offset) = ensure_element_index(index, len) else {
            return Ok(());
        };
        let keep = usize::try_from(length).unwrap_or(usize::MAX);

        self.drain(..offset);
        self.truncate(keep);
        trace_resize!("crop_window", len, self.len());
        Ok(())
    }

    fn move_block(&mut self, index: isize, length: isize, shift: isize) -> ArrayOpResult<()>
    where
        T: Default,
    {
        let len = self.len();
        if length <= 0 {
            return Err(ArrayOpError::index_out_of_range(length, len));
        }

        // Work out the final length without touching the storage yet.
        let block_end = checked_add(index, length, "length")?;
        let shifted_end = checked_add(block_end, shift, "shift")?;
        let grown_len = if shift > 0 && shifted_end > signed_len(len) - 1 {
            shifted_end
        } else {
            signed_len(len)
        };

        // Clip the front of the block when it would land before zero.
        let (mut src, mut count) = (index, length);
        let dest_start = checked_add(index, shift, "shift")?;
        if dest_start < 0 {
            count += dest_start;
            src = dest_start.saturating_neg();
        }
        let count = count.min(grown_len.saturating_sub(src));
        if count <= 0 {
            return Ok(());
        }
        let dest = checked_add(src, shift, "shift")?;

        if src < 0 || src + count > grown_len {
            return Err(ArrayOpError::index_out_of_range(src, len));
        }
        if dest < 0 || dest + count > grown_len {
            return Err(ArrayOpError::index_out_of_range(dest, len));
        }

        let grown_len = to_offset(grown_len, len)?;
        if grown_len != len {
            try_resize_with_default(self, grown_len, "shift", shift)?;
            trace_resize!("move_block", len, grown_len);
        }

        let (src, dest, count) = (
            to_offset(src, len)?,
            to_offset(dest, len)?,
            to_offset(count, len)?,
        );
        let block = self[src..src + count].to_vec();
        self[dest..dest + count].clone_from_slice(&block);
        Ok(())
    }

    fn remove_range(&mut self, index: isize, length: isize) -> ArrayOpResult<()> {
        if length < 1 {
            return Ok(());
        }

        let len = self.len();
        let offset = ensure_element_index(index, len)?;

        if index.saturating_add(length) > signed_len(len) - 1 {
            self.truncate(offset);
        } else {
            let count = to_offset(length, len)?;
            self.drain(offset..offset + count);
        }
        trace_resize!("remove_range", len, self.len());
        Ok(())
    }
}

/// Resizes `items` to `new_len`, padding with [`Default::default`]. Room for the growth
/// is reserved up front, so a length that can't be allocated leaves `items` unchanged.
///
/// # Errors
///
/// Returns [`ArrayOpError::ArgumentOutOfRange`] for the argument called `name` when the
/// reservation fails.
pub fn try_resize_with_default<T: Default>(
    items: &mut Vec<T>,
    new_len: usize,
    name: &'static str,
    value: isize,
) -> ArrayOpResult<()> {
    let additional = new_len.saturating_sub(items.len());
    items
        .try_reserve(additional)
        .map_err(|_| ArrayOpError::argument_out_of_range(name, value))?;
    items.resize_with(new_len, T::default);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn zero_to_four() -> Vec<i32> { (0..5).collect() }

    #[test_case(0, &[5] => vec![5, 0, 1, 2, 3, 4]; "at start")]
    #[test_case(2, &[7, 8] => vec![0, 1, 7, 8, 2, 3, 4]; "in middle")]
    #[test_case(5, &[5, 6] => vec![0, 1, 2, 3, 4, 5, 6]; "at len appends")]
    #[test_case(3, &[] => vec![0, 1, 2, 3, 4]; "empty source")]
    fn test_insert_slice(index: isize, source: &[i32]) -> Vec<i32> {
        let mut items = zero_to_four();
        items.insert_slice(index, source).unwrap();
        items
    }

    #[test_case(-1)]
    #[test_case(6; "one past len")]
    #[test_case(7)]
    #[test_case(100)]
    fn test_insert_slice_out_of_range(index: isize) {
        let mut items = zero_to_four();
        assert_eq2!(
            items.insert_slice(index, &[5]),
            Err(ArrayOpError::index_out_of_range(index, 5))
        );
        assert_eq2!(items, zero_to_four());
    }

    #[test]
    fn test_insert_slice_into_empty() {
        let mut items: Vec<i32> = vec![];
        items.insert_slice(0, &[1, 2]).unwrap();
        assert_eq2!(items, vec![1, 2]);
    }

    #[test_case(0, &[5] => vec![5, 1, 2, 3, 4]; "first cell")]
    #[test_case(1, &[9, 9, 9] => vec![0, 9, 9, 9, 4]; "inside")]
    #[test_case(4, &[4, 5, 6, 7, 8, 9] => (0..10).collect::<Vec<_>>(); "grows past end")]
    #[test_case(2, &[] => vec![0, 1, 2, 3, 4]; "empty source")]
    fn test_replace_slice(index: isize, source: &[i32]) -> Vec<i32> {
        let mut items = zero_to_four();
        items.replace_slice(index, source).unwrap();
        items
    }

    #[test_case(-1)]
    #[test_case(5)]
    #[test_case(100)]
    fn test_replace_slice_out_of_range(index: isize) {
        let mut items = zero_to_four();
        assert!(items.replace_slice(index, &[5]).is_err());
        assert_eq2!(items, zero_to_four());
    }

    #[test]
    fn test_replace_slice_into_empty_fails() {
        let mut items: Vec<i32> = vec![];
        assert_eq2!(
            items.replace_slice(0, &[1]),
            Err(ArrayOpError::index_out_of_range(0, 0))
        );
    }

    #[test]
    fn test_append() {
        let mut items = zero_to_four();
        items.append_slice(&[5, 6]);
        items.append_slice(&[]);
        items.append_one(7);
        assert_eq2!(items, (0..8).collect::<Vec<_>>());
    }

    #[test_case(3 => vec![0, 1, 2])]
    #[test_case(0 => Vec::<i32>::new())]
    #[test_case(-10 => Vec::<i32>::new())]
    #[test_case(7 => vec![0, 1, 2, 3, 4, 0, 0])]
    fn test_crop_to(length: isize) -> Vec<i32> {
        let mut items = zero_to_four();
        items.crop_to(length).unwrap();
        items
    }

    #[test]
    fn test_crop_to_unallocatable_length() {
        let mut items: Vec<u64> = vec![0, 1, 2];
        assert_eq2!(
            items.crop_to(isize::MAX),
            Err(ArrayOpError::argument_out_of_range("length", isize::MAX))
        );
        assert_eq2!(items, vec![0, 1, 2]);
    }

    #[test_case(3, 2 => vec![3, 4])]
    #[test_case(3, 200 => vec![3, 4])]
    #[test_case(0, 3 => vec![0, 1, 2])]
    #[test_case(-2, 2 => vec![0, 1, 2, 3, 4]; "negative index unchanged")]
    #[test_case(200, 2 => vec![0, 1, 2, 3, 4]; "index past end unchanged")]
    fn test_crop_window(index: isize, length: isize) -> Vec<i32> {
        let mut items = zero_to_four();
        items.crop_window(index, length).unwrap();
        items
    }

    #[test_case(0)]
    #[test_case(-2)]
    fn test_crop_window_bad_length(length: isize) {
        let mut items = zero_to_four();
        assert_eq2!(
            items.crop_window(0, length),
            Err(ArrayOpError::index_out_of_range(length, 5))
        );
    }

    #[test_case(3, 2, -1 => vec![0, 1, 3, 4, 4]; "left by one")]
    #[test_case(3, 200, -1 => vec![0, 1, 3, 4, 4]; "left with long length")]
    #[test_case(0, 2, -1 => vec![1, 1, 2, 3, 4]; "left past zero clips")]
    #[test_case(0, 5, -5 => vec![0, 1, 2, 3, 4]; "left clipped to nothing")]
    #[test_case(0, 2, -5 => vec![0, 1, 2, 3, 4]; "left clipped below nothing")]
    #[test_case(3, 2, 1 => vec![0, 1, 2, 3, 3, 4]; "right grows by one")]
    #[test_case(1, 2, 1 => vec![0, 1, 1, 2, 4]; "right inside")]
    #[test_case(0, 5, 5 => vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4]; "whole block right")]
    #[test_case(3, 2, 3 => vec![0, 1, 2, 3, 4, 0, 3, 4]; "right with gap")]
    #[test_case(2, 2, 0 => vec![0, 1, 2, 3, 4]; "zero shift")]
    fn test_move_block(index: isize, length: isize, shift: isize) -> Vec<i32> {
        let mut items = zero_to_four();
        items.move_block(index, length, shift).unwrap();
        items
    }

    #[test]
    fn test_move_block_errors() {
        let mut items = zero_to_four();
        assert_eq2!(
            items.move_block(1, 0, 1),
            Err(ArrayOpError::index_out_of_range(0, 5))
        );
        assert_eq2!(
            items.move_block(1, -3, 1),
            Err(ArrayOpError::index_out_of_range(-3, 5))
        );
        // Source start stays negative.
        assert!(items.move_block(-1, 2, 3).is_err());
        // Overflowing arithmetic is rejected, not wrapped.
        assert!(items.move_block(1, isize::MAX, 1).is_err());
        assert_eq2!(items, zero_to_four());
    }

    #[test]
    fn test_move_block_unallocatable_growth() {
        let mut items: Vec<u64> = vec![0, 1, 2];
        assert_eq2!(
            items.move_block(0, 1, isize::MAX - 2),
            Err(ArrayOpError::argument_out_of_range("shift", isize::MAX - 2))
        );
        assert_eq2!(items, vec![0, 1, 2]);
    }

    #[test_case(0, 2 => vec![2, 3, 4])]
    #[test_case(3, 2 => vec![0, 1, 2])]
    #[test_case(1, 3 => vec![0, 4])]
    #[test_case(1, -3 => vec![0, 1, 2, 3, 4]; "negative length")]
    #[test_case(2, 200 => vec![0, 1]; "length past end truncates")]
    #[test_case(4, 1 => vec![0, 1, 2, 3])]
    fn test_remove_range(index: isize, length: isize) -> Vec<i32> {
        let mut items = zero_to_four();
        items.remove_range(index, length).unwrap();
        items
    }

    #[test_case(-2, 2)]
    #[test_case(5, 1)]
    fn test_remove_range_out_of_range(index: isize, length: isize) {
        let mut items = zero_to_four();
        assert_eq2!(
            items.remove_range(index, length),
            Err(ArrayOpError::index_out_of_range(index, 5))
        );
    }
}
