//! Shared builders for the integration tests.
//!
//! Scenario grids use 1m cells with the reference corner at the world
//! origin, so cell `(x, y)` has its center at `(x + 0.5, y + 0.5)`.

#![allow(dead_code)]

use drishti_grid::{OccupancyGrid, PlanarGrid, WorldPoint};

/// Square planar grid with every cell free.
pub fn open_grid(cells: usize, resolution: f32) -> PlanarGrid {
    OccupancyGrid::new([cells, cells], WorldPoint::ZERO, resolution, 0.0).unwrap()
}

/// World center of cell `(x, y)` on a grid built by [`open_grid`].
pub fn cell_center(x: usize, y: usize, resolution: f32) -> WorldPoint<2> {
    WorldPoint::new([
        (x as f32 + 0.5) * resolution,
        (y as f32 + 0.5) * resolution,
    ])
}

/// Obstacle points covering the perimeter cells of a square grid.
pub fn perimeter_points(cells: usize, resolution: f32) -> Vec<WorldPoint<2>> {
    let mut points = Vec::new();
    for i in 0..cells {
        points.push(cell_center(i, 0, resolution));
        points.push(cell_center(i, cells - 1, resolution));
        points.push(cell_center(0, i, resolution));
        points.push(cell_center(cells - 1, i, resolution));
    }
    points
}

/// Square room: free interior, occupied walls on all four sides.
pub fn walled_room(cells: usize, resolution: f32) -> PlanarGrid {
    let mut grid = open_grid(cells, resolution);
    grid.insert_points(&perimeter_points(cells, resolution));
    grid
}
