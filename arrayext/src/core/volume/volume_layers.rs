// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Whole layer operations on a flat 3D volume. These resize the sequence, so they are
//! only available on [`Vec`].
//!
//! ```text
//! insert_layer_3d(width=3, height=3, depth_index=1, source=[a, b, c])
//!
//! before  │ layer 0 (9) │ layer 1 (9) │
//! after   │ layer 0 (9) │ a b c 0 0 0 0 0 0 │ layer 1 (9) │
//!                         └─ padded to one layer ─┘
//! ```

use crate::{ArrayOpError, ArrayOpResult, FlatArrayOps, LayerDims, checked_mul, signed_len,
            to_offset, trace_resize, try_resize_with_default};

/// Resize, insert, and remove whole layers of a row-major volume.
pub trait VolumeLayers<T> {
    /// Resizes to exactly `new_depth` layers. Existing cells keep their positions, new
    /// cells are [`Default::default`].
    ///
    /// # Errors
    ///
    /// [`ArrayOpError::ArgumentOutOfRange`] for bad `width`, `height`, or
    /// `new_depth < 1`, and for a `new_depth` whose storage can't be allocated.
    fn set_depth_3d(&mut self, width: isize, height: isize, new_depth: isize)
    -> ArrayOpResult<()>;

    /// Inserts one layer before `depth_index`. A `source` shorter than a layer is padded
    /// with [`Default::default`]. Appending at `depth_index == depth` is allowed. An empty
    /// `source` is a no-op.
    ///
    /// # Errors
    ///
    /// - [`ArrayOpError::ArgumentOutOfRange`] for bad `width`, `height`, or a negative
    ///   `depth_index`.
    /// - [`ArrayOpError::InvalidArgument`] if `source` is larger than one layer.
    /// - [`ArrayOpError::IndexOutOfRange`] if `depth_index` is past the current depth.
    fn insert_layer_3d(
        &mut self,
        width: isize,
        height: isize,
        depth_index: isize,
        source: &[T],
    ) -> ArrayOpResult<()>;

    /// Removes the layer at `depth_index`.
    ///
    /// # Errors
    ///
    /// - [`ArrayOpError::ArgumentOutOfRange`] for bad `width`, `height`, or a
    ///   `depth_index` outside `[0, depth]`.
    /// - [`ArrayOpError::IndexOutOfRange`] if `depth_index == depth`, since there is no
    ///   layer there to remove.
    fn remove_layer_3d(&mut self, width: isize, height: isize, depth_index: isize)
    -> ArrayOpResult<()>;
}

impl<T: Clone + Default> VolumeLayers<T> for Vec<T> {
    fn set_depth_3d(
        &mut self,
        width: isize,
        height: isize,
        new_depth: isize,
    ) -> ArrayOpResult<()> {
        let dims = LayerDims::try_new(width, height)?;
        if new_depth < 1 {
            return Err(ArrayOpError::argument_out_of_range("depth", new_depth));
        }

        let len = self.len();
        let new_len = checked_mul(new_depth, dims.area(), "depth")?;
        let new_len = to_offset(new_len, len)?;

        try_resize_with_default(self, new_len, "depth", new_depth)?;
        trace_resize!("set_depth_3d", len, new_len);
        Ok(())
    }

    fn insert_layer_3d(
        &mut self,
        width: isize,
        height: isize,
        depth_index: isize,
        source: &[T],
    ) -> ArrayOpResult<()> {
        let dims = LayerDims::try_new(width, height)?;
        if depth_index < 0 {
            return Err(ArrayOpError::argument_out_of_range("depth", depth_index));
        }
        if source.is_empty() {
            return Ok(());
        }
        if signed_len(source.len()) > dims.area() {
            return Err(ArrayOpError::invalid_argument(
                "source",
                format!(
                    "must not be larger than (width * height) = {}, got {}",
                    dims.area(),
                    source.len()
                ),
            ));
        }

        let mut layer = source.to_vec();
        layer.crop_to(dims.area())?;

        let offset = checked_mul(depth_index, dims.area(), "depth")?;
        self.insert_slice(offset, &layer)
    }

    fn remove_layer_3d(
        &mut self,
        width: isize,
        height: isize,
        depth_index: isize,
    ) -> ArrayOpResult<()> {
        let dims = LayerDims::try_new(width, height)?;
        let depth = signed_len(dims.depth_of(self.len()));
        if depth_index < 0 || depth_index > depth {
            return Err(ArrayOpError::argument_out_of_range("depth", depth_index));
        }

        let offset = checked_mul(depth_index, dims.area(), "depth")?;
        self.remove_range(offset, dims.area())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{VolumeAccess, assert_eq2};
    use test_case::test_case;

    fn two_layers() -> Vec<i32> { (0..18).collect() }

    #[test]
    fn test_insert_layer_at_end() {
        let mut cells = two_layers();
        let source: Vec<i32> = (18..27).collect();
        cells.insert_layer_3d(3, 3, 2, &source).unwrap();
        assert_eq2!(cells, (0..27).collect::<Vec<_>>());
    }

    #[test]
    fn test_insert_short_layer_is_padded() {
        let mut cells = two_layers();
        cells.insert_layer_3d(3, 3, 2, &[18, 19, 20]).unwrap();
        assert_eq2!(cells.len(), 27);
        assert_eq2!(&cells[18..], &[18, 19, 20, 0, 0, 0, 0, 0, 0]);
        assert_eq2!(*cells.get_3d(3, 3, 2, 0, 2).unwrap(), 20);
        assert_eq2!(*cells.get_3d(3, 3, 0, 1, 2).unwrap(), 0);
    }

    #[test_case(0 => [vec![100; 9], (0..18).collect()].concat(); "at start")]
    #[test_case(1 => [(0..9).collect(), vec![100; 9], (9..18).collect()].concat(); "in middle")]
    fn test_insert_layer_positions(depth_index: isize) -> Vec<i32> {
        let mut cells = two_layers();
        cells.insert_layer_3d(3, 3, depth_index, &[100; 9]).unwrap();
        cells
    }

    #[test]
    fn test_insert_layer_errors() {
        let mut cells = two_layers();
        let fifteen: Vec<i32> = (0..15).collect();
        assert!(matches!(
            cells.insert_layer_3d(3, 3, 2, &fifteen),
            Err(ArrayOpError::InvalidArgument { name: "source", .. })
        ));
        assert_eq2!(
            cells.insert_layer_3d(3, 3, 3, &[1]),
            Err(ArrayOpError::index_out_of_range(27, 18))
        );
        assert_eq2!(
            cells.insert_layer_3d(3, 3, -1, &[1]),
            Err(ArrayOpError::argument_out_of_range("depth", -1))
        );
        assert!(cells.insert_layer_3d(0, 3, 0, &[1]).is_err());
        assert_eq2!(cells, two_layers());

        cells.insert_layer_3d(3, 3, 1, &[]).unwrap();
        assert_eq2!(cells, two_layers());
    }

    #[test_case(0 => (9..18).collect::<Vec<_>>(); "first")]
    #[test_case(1 => (0..9).collect::<Vec<_>>(); "last")]
    fn test_remove_layer(depth_index: isize) -> Vec<i32> {
        let mut cells = two_layers();
        cells.remove_layer_3d(3, 3, depth_index).unwrap();
        cells
    }

    #[test]
    fn test_remove_middle_layer() {
        let mut cells: Vec<i32> = (0..27).collect();
        cells.remove_layer_3d(3, 3, 1).unwrap();
        assert_eq2!(cells, [(0..9).collect::<Vec<_>>(), (18..27).collect()].concat());
    }

    #[test]
    fn test_remove_layer_errors() {
        let mut cells = two_layers();
        assert_eq2!(
            cells.remove_layer_3d(3, 3, 3),
            Err(ArrayOpError::argument_out_of_range("depth", 3))
        );
        assert_eq2!(
            cells.remove_layer_3d(3, 3, -1),
            Err(ArrayOpError::argument_out_of_range("depth", -1))
        );
        // At the current depth the offset equals the length.
        assert_eq2!(
            cells.remove_layer_3d(3, 3, 2),
            Err(ArrayOpError::index_out_of_range(18, 18))
        );
        assert_eq2!(cells, two_layers());
    }

    #[test]
    fn test_insert_then_remove_restores() {
        let mut cells = two_layers();
        cells.insert_layer_3d(3, 3, 1, &[7; 9]).unwrap();
        cells.remove_layer_3d(3, 3, 1).unwrap();
        assert_eq2!(cells, two_layers());
    }

    #[test]
    fn test_set_depth_3d() {
        let mut cells = two_layers();
        cells.set_depth_3d(3, 3, 3).unwrap();
        assert_eq2!(cells.depth_3d(3, 3), Ok(3));
        assert_eq2!(&cells[..18], two_layers().as_slice());
        assert!(cells[18..].iter().all(|it| *it == 0));

        cells.set_depth_3d(3, 3, 1).unwrap();
        assert_eq2!(cells, (0..9).collect::<Vec<_>>());

        assert_eq2!(
            cells.set_depth_3d(3, 3, 0),
            Err(ArrayOpError::argument_out_of_range("depth", 0))
        );
        assert!(cells.set_depth_3d(3, 0, 2).is_err());
    }

    #[test]
    fn test_set_depth_3d_unallocatable_depth() {
        let mut cells = vec![0u32; 9];
        let depth = isize::MAX / 9;
        assert_eq2!(
            cells.set_depth_3d(3, 3, depth),
            Err(ArrayOpError::argument_out_of_range("depth", depth))
        );
        assert_eq2!(cells, vec![0u32; 9]);
    }
}
