// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # arrayext
//!
//! Extension methods for working with plain [`Vec`]s and slices as if they were richer
//! containers.
//!
//! 1. [`FlatArrayOps`] splices a [`Vec`] in place: insert, replace, append, crop, move a
//!    block left or right, and remove a range. Every operation validates its arguments
//!    before touching the storage, so a failed call leaves the [`Vec`] exactly as it
//!    was.
//! 2. [`VolumeAccess`] and [`VolumeLayers`] treat a flat sequence as a row-major 3D
//!    volume of `width * height` layers. The depth is never stored, it is always
//!    `len / (width * height)`.
//!
//!    ```text
//!    index = z * (width * height) + y * width + x
//!
//!    z=0                z=1
//!    ┌────┬────┬────┐   ┌────┬────┬────┐
//!    │ 0  │ 1  │ 2  │   │ 9  │ 10 │ 11 │
//!    ├────┼────┼────┤   ├────┼────┼────┤
//!    │ 3  │ 4  │ 5  │   │ 12 │ 13 │ 14 │
//!    ├────┼────┼────┤   ├────┼────┼────┤
//!    │ 6  │ 7  │ 8  │   │ 15 │ 16 │ 17 │
//!    └────┴────┴────┘   └────┴────┴────┘
//!    ```
//! 3. Smaller companions: [`RangeExt`] range checks, [`ReorderExt`] list reordering,
//!    path helpers in [`crate::core::path`], and explicit property change observers
//!    in [`crate::core::notify`].
//!
//! # Example
//!
//! ```
//! use arrayext::{FlatArrayOps, VolumeAccess, VolumeLayers};
//!
//! let mut items: Vec<i32> = (0..18).collect();
//! items.insert_layer_3d(3, 3, 2, &[18, 19, 20]).unwrap();
//! assert_eq!(items.depth_3d(3, 3).unwrap(), 3);
//! assert_eq!(*items.get_3d(3, 3, 2, 0, 2).unwrap(), 20);
//! assert_eq!(*items.get_3d(3, 3, 0, 1, 2).unwrap(), 0);
//!
//! let mut items = vec![0, 1, 2, 3, 4];
//! items.remove_range(1, 3).unwrap();
//! assert_eq!(items, vec![0, 4]);
//! ```

// Enforce strict error handling in production library code only. Tests and doc tests are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;

// Re-export.
pub use crate::core::*;
