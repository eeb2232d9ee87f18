//! Obstacle ingestion: populating the grid from observed obstacles.
//!
//! Two insertion modes mutate the grid:
//!
//! - [`insert_points`](OccupancyGrid::insert_points): one occupied cell per
//!   observed point, grown by a fixed Chebyshev radius.
//! - [`insert_cylinders`](OccupancyGrid::insert_cylinders): circular
//!   obstacles on planar grids, with a marker at the seed cell and an
//!   inflated square footprint around it.
//!
//! Ingestion never fails: work that falls outside the grid is silently
//! skipped, and callers cannot tell a fully applied batch from a clipped
//! one. Within a single call, cell state only moves toward occupied.

use crate::core::{CellIndex, OBSTACLE_CENTER, OCCUPIED, WorldPoint};
use crate::grid::OccupancyGrid;

/// Circular obstacle observation for planar grids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    /// World position of the cylinder axis.
    pub center: WorldPoint<2>,
    /// Footprint diameter in meters.
    pub width: f32,
}

impl Cylinder {
    /// Create a cylinder observation from its center and diameter.
    #[inline]
    pub const fn new(center: WorldPoint<2>, width: f32) -> Self {
        Self { center, width }
    }
}

impl<const D: usize> OccupancyGrid<D> {
    /// Seed cell for an obstacle observation.
    ///
    /// Axis indices that come out negative are clamped to zero before the
    /// bounds test, so a point behind the origin lands in the first cell
    /// along that axis instead of being dropped. Points beyond the far edge
    /// still fail the bounds test and are dropped.
    fn obstacle_cell(&self, point: WorldPoint<D>) -> CellIndex<D> {
        let mut cell = self.world_to_cell(point);
        for i in 0..D {
            cell[i] = cell[i].max(0);
        }
        cell
    }

    /// Mark the cell under each point as occupied, with inflation.
    ///
    /// In this mode the grid's inflation scalar is read as a radius in
    /// meters: around each seed cell, every cell within
    /// `ceil(inflation_ratio / resolution)` cells (Chebyshev distance, so a
    /// square or cube, not a ball) is also marked occupied. Out-of-bounds
    /// seeds and neighbors are skipped.
    pub fn insert_points(&mut self, points: &[WorldPoint<D>]) {
        let step = (self.inflation_ratio() / self.resolution()).ceil() as i32;
        for &point in points {
            let seed = self.obstacle_cell(point);
            self.set_value(seed, OCCUPIED);
            for neighbor in seed.chebyshev_neighborhood(step) {
                self.set_value(neighbor, OCCUPIED);
            }
        }
        log::debug!(
            "inserted {} obstacle points (inflation step {step})",
            points.len()
        );
    }
}

impl OccupancyGrid<2> {
    /// Insert circular obstacles, marking each center with
    /// [`OBSTACLE_CENTER`].
    ///
    /// The seed cell keeps its marker if it already holds one; cells within
    /// `ceil((1 + inflation_ratio) * width / 2 / resolution)` cells
    /// (Chebyshev distance) of the seed are marked occupied unless they hold
    /// a marker, so a later cylinder's footprint cannot erase an earlier
    /// cylinder's center.
    pub fn insert_cylinders(&mut self, cylinders: &[Cylinder]) {
        for cylinder in cylinders {
            let seed = self.obstacle_cell(cylinder.center);
            if self.value(seed) != Some(OBSTACLE_CENTER) {
                self.set_value(seed, OBSTACLE_CENTER);
            }

            let footprint_radius = (1.0 + self.inflation_ratio()) * cylinder.width * 0.5;
            let step = (footprint_radius / self.resolution()).ceil() as i32;
            for neighbor in seed.chebyshev_neighborhood(step) {
                if self.value(neighbor) != Some(OBSTACLE_CENTER) {
                    self.set_value(neighbor, OCCUPIED);
                }
            }
        }
        log::debug!("inserted {} cylinder obstacles", cylinders.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellState, FREE};
    use crate::grid::{PlanarGrid, VoxelGrid};

    fn create_test_grid(inflation_ratio: f32) -> PlanarGrid {
        OccupancyGrid::new([10, 10], WorldPoint::ZERO, 1.0, inflation_ratio).unwrap()
    }

    #[test]
    fn test_point_marks_single_cell_without_inflation() {
        let mut grid = create_test_grid(0.0);
        grid.insert_points(&[WorldPoint::new([5.4, 5.4])]);

        for index in 0..grid.cell_count() {
            let cell = grid.index_to_cell(index);
            if cell == CellIndex::new([5, 5]) {
                assert!(grid.is_occupied(cell));
            } else {
                assert!(grid.is_free(cell), "unexpected mark at {cell:?}");
            }
        }
    }

    #[test]
    fn test_point_inflation_is_chebyshev_square() {
        // Radius 1.5m at 1m cells inflates by ceil(1.5) = 2 cells per axis.
        let mut grid = create_test_grid(1.5);
        grid.insert_points(&[WorldPoint::new([5.5, 5.5])]);

        let seed = CellIndex::new([5, 5]);
        for index in 0..grid.cell_count() {
            let cell = grid.index_to_cell(index);
            if cell.chebyshev_distance(&seed) <= 2 {
                assert!(grid.is_occupied(cell));
            } else {
                assert!(grid.is_free(cell));
            }
        }
    }

    #[test]
    fn test_point_behind_origin_clamps_to_first_cell() {
        let mut grid = create_test_grid(0.0);
        grid.insert_points(&[WorldPoint::new([-3.2, 4.5])]);
        assert!(grid.is_occupied(CellIndex::new([0, 4])));
    }

    #[test]
    fn test_point_beyond_far_edge_is_dropped() {
        let mut grid = create_test_grid(0.0);
        grid.insert_points(&[WorldPoint::new([25.0, 5.0])]);
        assert!(grid.cells().iter().all(|&v| v == FREE));
    }

    #[test]
    fn test_inflation_clips_at_boundary() {
        let mut grid = create_test_grid(1.0);
        grid.insert_points(&[WorldPoint::new([0.5, 0.5])]);

        // The 3x3 neighborhood around (0,0) loses the cells left of and
        // below the grid; the surviving quarter is marked.
        let occupied: Vec<_> = (0..grid.cell_count())
            .filter(|&i| grid.is_occupied_at(i))
            .map(|i| grid.index_to_cell(i))
            .collect();
        assert_eq!(
            occupied,
            vec![
                CellIndex::new([0, 0]),
                CellIndex::new([1, 0]),
                CellIndex::new([0, 1]),
                CellIndex::new([1, 1]),
            ]
        );
    }

    #[test]
    fn test_insertion_is_monotonic() {
        let mut grid = create_test_grid(0.5);
        grid.cells_mut()[3] = crate::core::UNKNOWN;
        grid.insert_points(&[WorldPoint::new([4.5, 4.5])]);
        let before: Vec<_> = grid.cells().to_vec();

        grid.insert_points(&[WorldPoint::new([4.5, 4.5]), WorldPoint::new([7.5, 2.5])]);
        for (index, (&was, &now)) in before.iter().zip(grid.cells().iter()).enumerate() {
            if CellState::from_raw(was).is_occupied() {
                assert!(
                    CellState::from_raw(now).is_occupied(),
                    "cell {index} lost its obstacle"
                );
            }
        }
    }

    #[test]
    fn test_voxel_point_insertion() {
        let mut grid: VoxelGrid =
            OccupancyGrid::new([8, 8, 8], WorldPoint::ZERO, 1.0, 1.0).unwrap();
        grid.insert_points(&[WorldPoint::new([4.5, 4.5, 4.5])]);

        // Inflation step ceil(1/1) = 1 marks the full 3x3x3 block.
        let counts = grid.count_by_state();
        assert_eq!(counts.occupied, 27);
        let seed = CellIndex::new([4, 4, 4]);
        for neighbor in seed.chebyshev_neighborhood(1) {
            assert!(grid.is_occupied(neighbor));
        }
    }

    #[test]
    fn test_cylinder_marks_center_and_ring() {
        let mut grid = create_test_grid(0.0);
        grid.insert_cylinders(&[Cylinder::new(WorldPoint::new([5.5, 5.5]), 2.0)]);

        let center = CellIndex::new([5, 5]);
        assert_eq!(grid.value(center), Some(OBSTACLE_CENTER));
        assert!(grid.is_occupied(center));
        assert!(!grid.is_free(center));

        // Footprint step ceil(1*2*0.5/1) = 1: the ring around the center.
        for neighbor in center.chebyshev_neighborhood(1) {
            if neighbor != center {
                assert_eq!(grid.value(neighbor), Some(OCCUPIED));
            }
        }
        let counts = grid.count_by_state();
        assert_eq!(counts.occupied, 8);
        assert_eq!(counts.obstacle_centers, 1);
    }

    #[test]
    fn test_later_cylinder_preserves_earlier_center() {
        let mut grid = create_test_grid(0.0);
        grid.insert_cylinders(&[Cylinder::new(WorldPoint::new([4.5, 5.5]), 2.0)]);
        grid.insert_cylinders(&[Cylinder::new(WorldPoint::new([5.5, 5.5]), 2.0)]);

        // The second footprint covers (4,5) but must not erase its marker.
        assert_eq!(grid.value(CellIndex::new([4, 5])), Some(OBSTACLE_CENTER));
        assert_eq!(grid.value(CellIndex::new([5, 5])), Some(OBSTACLE_CENTER));
    }

    #[test]
    fn test_cylinder_reinsertion_is_idempotent() {
        let mut grid = create_test_grid(0.0);
        let cylinder = Cylinder::new(WorldPoint::new([5.5, 5.5]), 2.0);
        grid.insert_cylinders(&[cylinder]);
        let once = grid.cells().to_vec();

        grid.insert_cylinders(&[cylinder]);
        assert_eq!(grid.cells(), &once[..]);
    }

    #[test]
    fn test_cylinder_inflation_ratio_widens_footprint() {
        // Width 2m with ratio 0.5 inflates by ceil(1.5*2*0.5/1) = 2 cells.
        let mut grid = create_test_grid(0.5);
        grid.insert_cylinders(&[Cylinder::new(WorldPoint::new([5.5, 5.5]), 2.0)]);

        let center = CellIndex::new([5, 5]);
        assert!(grid.is_occupied(CellIndex::new([3, 3])));
        assert!(grid.is_free(CellIndex::new([2, 3])));
        assert_eq!(grid.count_by_state().occupied, 5 * 5 - 1);
        assert_eq!(grid.value(center), Some(OBSTACLE_CENTER));
    }
}
