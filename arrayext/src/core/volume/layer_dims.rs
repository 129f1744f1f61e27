// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The `width * height` shape of one layer of a flat 3D volume.

use crate::{ArrayOpError, ArrayOpResult, checked_mul, signed_len};

/// Width and height of a single layer. Both are at least 1.
///
/// A volume never stores its depth. It is derived from the length of the sequence, see
/// [`LayerDims::depth_of`].
///
/// ```
/// use arrayext::LayerDims;
///
/// let dims = LayerDims::try_new(3, 3).unwrap();
/// assert_eq!(dims.area(), 9);
/// assert_eq!(dims.linear_index(2, 0, 2), Some(20));
/// assert!(LayerDims::try_new(0, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerDims {
    width: isize,
    height: isize,
    area: isize,
}

impl LayerDims {
    /// # Errors
    ///
    /// [`ArrayOpError::ArgumentOutOfRange`] if `width < 1`, `height < 1`, or the area
    /// overflows.
    pub fn try_new(width: isize, height: isize) -> ArrayOpResult<Self> {
        if width < 1 {
            return Err(ArrayOpError::argument_out_of_range("width", width));
        }
        if height < 1 {
            return Err(ArrayOpError::argument_out_of_range("height", height));
        }
        let area = checked_mul(width, height, "width")?;
        Ok(Self {
            width,
            height,
            area,
        })
    }

    #[must_use]
    pub fn width(&self) -> isize { self.width }

    #[must_use]
    pub fn height(&self) -> isize { self.height }

    /// Number of cells in one layer.
    #[must_use]
    pub fn area(&self) -> isize { self.area }

    /// Row-major position of `(x, y, z)`: `z * area + y * width + x`.
    ///
    /// The axes are not checked one by one. A coordinate like `(-1, 1, 0)` maps to a
    /// valid position, callers check the combined result against the storage. `None`
    /// when the arithmetic overflows.
    #[must_use]
    pub fn linear_index(&self, x: isize, y: isize, z: isize) -> Option<isize> {
        let layer_offset = z.checked_mul(self.area)?;
        let within_layer = y.checked_mul(self.width)?.checked_add(x)?;
        layer_offset.checked_add(within_layer)
    }

    /// Number of complete layers in a sequence of `len` cells.
    #[must_use]
    pub fn depth_of(&self, len: usize) -> usize {
        usize::try_from(signed_len(len) / self.area).unwrap_or(0)
    }
}
