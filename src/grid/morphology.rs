//! Morphological transforms over the occupied set.
//!
//! [`dilate`](OccupancyGrid::dilate) grows every occupied region by a
//! caller-supplied structuring neighborhood, the cheap way to turn a
//! point-robot plan into one with clearance. [`free_unknown`](OccupancyGrid::free_unknown)
//! reclassifies unobserved space as traversable for planners that treat
//! unknown as free. [`cross_offsets`] and [`cube_offsets`] build the two
//! standard structuring elements.

use crate::core::{CellIndex, CellState, FREE, OCCUPIED};
use crate::grid::OccupancyGrid;

/// Cross-shaped structuring element: the zero offset plus one step in both
/// directions along each axis (5 offsets in 2-D, 7 in 3-D).
pub fn cross_offsets<const D: usize>() -> Vec<CellIndex<D>> {
    let mut offsets = vec![CellIndex::zero()];
    for axis in 0..D {
        for step in [-1, 1] {
            let mut offset = CellIndex::zero();
            offset[axis] = step;
            offsets.push(offset);
        }
    }
    offsets
}

/// Square or cube structuring element of the given Chebyshev radius, zero
/// offset included: `(2 * radius + 1)^D` offsets. A negative radius yields
/// no offsets.
pub fn cube_offsets<const D: usize>(radius: i32) -> Vec<CellIndex<D>> {
    CellIndex::zero().chebyshev_neighborhood(radius).collect()
}

impl<const D: usize> OccupancyGrid<D> {
    /// Grow every occupied cell by the given structuring offsets.
    ///
    /// Reads a snapshot of the current cells and writes into a copy, so
    /// cells that become occupied during the pass do not themselves grow;
    /// one call dilates by exactly one application of the offsets. Offsets
    /// that land outside the grid are skipped. Obstacle-center markers
    /// reached by an offset are overwritten with the canonical occupied
    /// value, but every cell occupied before the call is still occupied
    /// after it whenever the offsets include zero.
    pub fn dilate(&mut self, offsets: &[CellIndex<D>]) {
        let mut grown = self.cells().to_vec();
        let mut sources = 0usize;
        for index in 0..self.cell_count() {
            if !self.is_occupied_at(index) {
                continue;
            }
            sources += 1;
            let cell = self.index_to_cell(index);
            for &offset in offsets {
                if let Some(target) = self.linear_index(cell + offset) {
                    grown[target] = OCCUPIED;
                }
            }
        }
        self.cells_mut().copy_from_slice(&grown);
        log::debug!(
            "dilated {sources} occupied cells over {} offsets",
            offsets.len()
        );
    }

    /// Reclassify every unknown cell as free, in place.
    ///
    /// Irreversible: afterwards the grid no longer records which cells were
    /// never observed.
    pub fn free_unknown(&mut self) {
        let mut freed = 0usize;
        for value in self.cells_mut() {
            if CellState::from_raw(*value).is_unknown() {
                *value = FREE;
                freed += 1;
            }
        }
        log::debug!("reclassified {freed} unknown cells as free");
    }
}
