// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end scenarios for sequences addressed as `width * height * depth` volumes.

use arrayext::{ArrayOpError, LayerDims, VolumeAccess, VolumeLayers, assert_eq2};

const WIDTH: isize = 3;
const HEIGHT: isize = 3;

fn two_layers() -> Vec<i32> { (0..18).collect() }

#[test]
fn insert_layer_at_end_is_row_major() {
    let mut cells = two_layers();
    let layer: Vec<i32> = (18..27).collect();
    cells.insert_layer_3d(WIDTH, HEIGHT, 2, &layer).unwrap();

    assert_eq2!(cells.depth_3d(WIDTH, HEIGHT), Ok(3));
    let dims = LayerDims::try_new(WIDTH, HEIGHT).unwrap();
    for z in 0..3 {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let index = dims.linear_index(x, y, z).unwrap();
                let expected = i32::try_from(index).unwrap();
                assert_eq2!(*cells.get_3d(WIDTH, HEIGHT, x, y, z).unwrap(), expected);
            }
        }
    }
}

#[test]
fn oversized_layer_is_rejected() {
    let mut cells = two_layers();
    let fifteen: Vec<i32> = (0..15).collect();
    let result = cells.insert_layer_3d(WIDTH, HEIGHT, 2, &fifteen);
    assert!(matches!(result, Err(ArrayOpError::InvalidArgument { .. })));
    assert_eq2!(cells, two_layers());
}

#[test]
fn insert_past_depth_is_rejected() {
    let mut cells = two_layers();
    assert!(matches!(
        cells.insert_layer_3d(WIDTH, HEIGHT, 3, &[1]),
        Err(ArrayOpError::IndexOutOfRange { .. })
    ));
}

#[test]
fn set_get_round_trip() {
    let mut cells = two_layers();
    cells.set_3d(WIDTH, HEIGHT, 2, 1, 1, -5).unwrap();
    assert_eq2!(*cells.get_3d(WIDTH, HEIGHT, 2, 1, 1).unwrap(), -5);
    assert_eq2!(cells.iter().filter(|it| **it < 0).count(), 1);
}

#[test]
fn grow_then_shrink_depth() {
    let mut cells = two_layers();
    cells.set_depth_3d(WIDTH, HEIGHT, 4).unwrap();
    assert_eq2!(cells.depth_3d(WIDTH, HEIGHT), Ok(4));
    assert_eq2!(&cells[..18], two_layers().as_slice());
    assert_eq2!(*cells.get_3d(WIDTH, HEIGHT, 2, 2, 3).unwrap(), 0);

    cells.remove_layer_3d(WIDTH, HEIGHT, 0).unwrap();
    assert_eq2!(cells.depth_3d(WIDTH, HEIGHT), Ok(3));
    assert_eq2!(*cells.get_3d(WIDTH, HEIGHT, 0, 0, 0).unwrap(), 9);
}

#[test]
fn volume_works_on_non_copy_cells() {
    let mut cells: Vec<String> = vec![String::new(); 4];
    cells.set_3d(2, 2, 1, 0, 0, "tile".to_string()).unwrap();
    cells.insert_layer_3d(2, 2, 0, &["top".to_string()]).unwrap();
    assert_eq2!(cells.len(), 8);
    assert_eq2!(cells.get_3d(2, 2, 0, 0, 0).unwrap(), "top");
    assert_eq2!(cells.get_3d(2, 2, 1, 0, 1).unwrap(), "tile");
}
