use citizen_pac::arena::layout::{pickup_grid, CellGrid};
use citizen_pac::constants::MAX_PICKUPS;
use citizen_pac::error::LayoutError;
use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_small_arena_has_four_cells() {
    let centers = pickup_grid(220.0, 220.0, 10.0, 5.0).unwrap();

    let expected = vec![
        Vec2::new(-60.0, -60.0),
        Vec2::new(-60.0, 60.0),
        Vec2::new(60.0, -60.0),
        Vec2::new(60.0, 60.0),
    ];
    assert_eq!(centers, expected);
}

#[test]
fn test_grid_is_deterministic() {
    let first = pickup_grid(800.0, 600.0, 10.0, 5.0).unwrap();
    let second = pickup_grid(800.0, 600.0, 10.0, 5.0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_default_arena_grid_shape() {
    let grid = CellGrid::new(800.0, 600.0, 10.0, 5.0).unwrap();
    assert_that(&grid.nx).is_equal_to(8);
    assert_that(&grid.ny).is_equal_to(6);
    assert_that(&grid.len()).is_equal_to(48);
    assert_that(&grid.centers().count()).is_equal_to(48);
}

#[test]
fn test_centers_stay_inside_half_pitch_margin() {
    let grid = CellGrid::new(800.0, 600.0, 10.0, 5.0).unwrap();
    let margin = grid.pitch / 2.0;
    for center in grid.centers() {
        assert_that(&(center.x.abs() <= 400.0 - margin + 1e-3)).is_true();
        assert_that(&(center.y.abs() <= 300.0 - margin + 1e-3)).is_true();
    }
}

#[test]
fn test_column_major_order() {
    let centers = pickup_grid(800.0, 600.0, 10.0, 5.0).unwrap();
    // y varies fastest
    assert_that(&centers[0].x).is_equal_to(centers[1].x);
    assert_that(&(centers[1].y > centers[0].y)).is_true();
}

#[test]
fn test_arena_too_small_is_rejected() {
    let result = pickup_grid(200.0, 600.0, 10.0, 5.0);
    assert!(matches!(result, Err(LayoutError::ArenaTooSmall { axis: "width", .. })));

    let result = pickup_grid(800.0, 150.0, 10.0, 5.0);
    assert!(matches!(result, Err(LayoutError::ArenaTooSmall { axis: "height", .. })));
}

#[test]
fn test_invalid_inputs_are_rejected() {
    assert!(matches!(
        pickup_grid(0.0, 600.0, 10.0, 5.0),
        Err(LayoutError::NonPositiveDimensions { .. })
    ));
    assert!(matches!(
        pickup_grid(800.0, 600.0, 0.0, 5.0),
        Err(LayoutError::InvalidCell { .. })
    ));
    assert!(matches!(
        pickup_grid(800.0, 600.0, 10.0, -1.0),
        Err(LayoutError::InvalidCell { .. })
    ));
    assert!(matches!(
        pickup_grid(f32::NAN, 600.0, 10.0, 5.0),
        Err(LayoutError::NonPositiveDimensions { .. })
    ));
}

#[test]
fn test_grid_over_cell_limit_is_rejected() {
    match CellGrid::new(800.0, 600.0, 0.0005, 1.0) {
        Err(LayoutError::TooManyCells { nx, ny, max }) => {
            assert_that(&max).is_equal_to(MAX_PICKUPS);
            assert_that(&(nx * ny > MAX_PICKUPS)).is_true();
        }
        other => panic!("expected TooManyCells, got {other:?}"),
    }
    assert!(matches!(
        pickup_grid(800.0, 600.0, 0.0005, 1.0),
        Err(LayoutError::TooManyCells { .. })
    ));
}

#[test]
fn test_grid_at_cell_limit_is_accepted() {
    // 256 x 256 cells of pitch 1
    let grid = CellGrid::new(256.5, 256.5, 0.5, 1.0).unwrap();
    assert_that(&grid.len()).is_equal_to(MAX_PICKUPS);
}
