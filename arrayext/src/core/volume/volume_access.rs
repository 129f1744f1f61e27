// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Read and write single cells of a flat sequence that is addressed as a 3D volume.

use crate::{ArrayOpError, ArrayOpResult, LayerDims, to_offset};

/// Cell access for a row-major volume of `width * height` layers.
///
/// ```
/// use arrayext::VolumeAccess;
///
/// let mut cells = vec![0u8; 2 * 2 * 2];
/// cells.set_3d(2, 2, 1, 1, 1, 9).unwrap();
/// assert_eq!(cells[7], 9);
/// assert_eq!(*cells.get_3d(2, 2, 1, 1, 1).unwrap(), 9);
/// assert_eq!(cells.depth_3d(2, 2).unwrap(), 2);
/// ```
pub trait VolumeAccess<T> {
    /// # Errors
    ///
    /// - [`ArrayOpError::ArgumentOutOfRange`] for bad `width` or `height`.
    /// - [`ArrayOpError::IndexOutOfRange`] if the cell lies outside the storage.
    fn get_3d(&self, width: isize, height: isize, x: isize, y: isize, z: isize)
    -> ArrayOpResult<&T>;

    /// # Errors
    ///
    /// Same as [`VolumeAccess::get_3d`].
    fn set_3d(
        &mut self,
        width: isize,
        height: isize,
        x: isize,
        y: isize,
        z: isize,
        value: T,
    ) -> ArrayOpResult<()>;

    /// Number of complete layers, ie: `len / (width * height)`.
    ///
    /// # Errors
    ///
    /// [`ArrayOpError::ArgumentOutOfRange`] for bad `width` or `height`.
    fn depth_3d(&self, width: isize, height: isize) -> ArrayOpResult<usize>;
}

/// Linear offset of a cell, checked against `len`.
fn cell_offset(
    dims: LayerDims,
    len: usize,
    (x, y, z): (isize, isize, isize),
) -> ArrayOpResult<usize> {
    let index = dims
        .linear_index(x, y, z)
        .ok_or(ArrayOpError::index_out_of_range(isize::MAX, len))?;
    let offset = to_offset(index, len)?;
    if offset >= len {
        return Err(ArrayOpError::index_out_of_range(index, len));
    }
    Ok(offset)
}

impl<T> VolumeAccess<T> for [T] {
    fn get_3d(
        &self,
        width: isize,
        height: isize,
        x: isize,
        y: isize,
        z: isize,
    ) -> ArrayOpResult<&T> {
        let dims = LayerDims::try_new(width, height)?;
        let offset = cell_offset(dims, self.len(), (x, y, z))?;
        Ok(&self[offset])
    }

    fn set_3d(
        &mut self,
        width: isize,
        height: isize,
        x: isize,
        y: isize,
        z: isize,
        value: T,
    ) -> ArrayOpResult<()> {
        let dims = LayerDims::try_new(width, height)?;
        let offset = cell_offset(dims, self.len(), (x, y, z))?;
        self[offset] = value;
        Ok(())
    }

    fn depth_3d(&self, width: isize, height: isize) -> ArrayOpResult<usize> {
        let dims = LayerDims::try_new(width, height)?;
        Ok(dims.depth_of(self.len()))
    }
}
