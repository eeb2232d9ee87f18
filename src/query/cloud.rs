//! Bulk extraction of cells by occupancy state.
//!
//! Full-grid scans that hand a planner or debugging tool the world-space
//! centers of every cell in a given state, plus a one-pass per-state tally.
//! Scans run in linear storage order (first axis fastest), so output order
//! is deterministic for a given grid.

use crate::core::{CellState, WorldPoint};
use crate::grid::OccupancyGrid;

/// Per-state cell tallies from one full scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// Traversable cells.
    pub free: usize,
    /// Canonically occupied cells, markers excluded.
    pub occupied: usize,
    /// Never-observed cells.
    pub unknown: usize,
    /// Cylinder center markers.
    pub obstacle_centers: usize,
}

impl CellCounts {
    /// Cells that block a planner: occupied plus center markers.
    #[inline]
    pub fn obstacles(&self) -> usize {
        self.occupied + self.obstacle_centers
    }

    /// Cells observed at least once.
    #[inline]
    pub fn known(&self) -> usize {
        self.free + self.obstacles()
    }

    /// Every cell in the grid.
    #[inline]
    pub fn total(&self) -> usize {
        self.known() + self.unknown
    }
}

impl<const D: usize> OccupancyGrid<D> {
    fn cells_in_state(&self, matches: impl Fn(CellState) -> bool) -> Vec<WorldPoint<D>> {
        (0..self.cell_count())
            .filter(|&index| matches(self.state_at(index)))
            .map(|index| self.cell_to_world(self.index_to_cell(index)))
            .collect()
    }

    /// World centers of every obstacle cell, in linear scan order.
    ///
    /// Center markers count as obstacles here, like everywhere occupancy is
    /// asked about.
    pub fn occupied_cells(&self) -> Vec<WorldPoint<D>> {
        self.cells_in_state(CellState::is_occupied)
    }

    /// World centers of every traversable cell, in linear scan order.
    pub fn free_cells(&self) -> Vec<WorldPoint<D>> {
        self.cells_in_state(CellState::is_free)
    }

    /// World centers of every never-observed cell, in linear scan order.
    pub fn unknown_cells(&self) -> Vec<WorldPoint<D>> {
        self.cells_in_state(CellState::is_unknown)
    }

    /// Tally every cell by decoded state in a single pass.
    pub fn count_by_state(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &value in self.cells() {
            match CellState::from_raw(value) {
                CellState::Free => counts.free += 1,
                CellState::Occupied => counts.occupied += 1,
                CellState::Unknown => counts.unknown += 1,
                CellState::ObstacleCenter => counts.obstacle_centers += 1,
            }
        }
        counts
    }
}
