//! Discrete ray tracing for line-of-sight queries.
//!
//! A segment between two world points is sampled at sub-cell spacing and
//! folded into the sequence of distinct cells it crosses. Planners call
//! [`OccupancyGrid::is_blocked`] as the occlusion test for a candidate edge
//! and [`OccupancyGrid::ray_trace`] when they need the crossed cells
//! themselves.
//!
//! The walk takes `floor(max_axis_extent_in_cells / 0.8)` evenly spaced
//! interior samples, strictly between the endpoints, and collapses
//! consecutive samples that land in the same cell. The sub-cell spacing
//! keeps the walk from stepping over a cell on any axis. Tracing ends at
//! the first sample outside the grid; segments shorter than one sampling
//! step, including coincident endpoints, yield nothing.

use crate::core::{CellIndex, WorldPoint};
use crate::grid::OccupancyGrid;

/// Cell value at or above which [`OccupancyGrid::is_blocked`] reports a hit.
///
/// Blocking compares raw cell values against a threshold rather than the
/// occupancy predicate: canonical obstacles (100) block at the default,
/// cylinder center markers (50) do not unless the caller lowers the
/// threshold, for example to [`OBSTACLE_CENTER`](crate::core::OBSTACLE_CENTER).
pub const DEFAULT_BLOCK_THRESHOLD: i8 = 100;

/// Fraction of a cell advanced per sample; below 1.0 so every crossed cell
/// is sampled at least once.
const OVERSAMPLING: f32 = 0.8;

/// Lazy iterator over the distinct cells a segment crosses.
///
/// Created by [`OccupancyGrid::ray_trace`]. Cloning restarts the walk from
/// the beginning.
#[derive(Clone, Debug)]
pub struct RayTrace<'a, const D: usize> {
    grid: &'a OccupancyGrid<D>,
    start: WorldPoint<D>,
    step: WorldPoint<D>,
    steps: i32,
    n: i32,
    prev: Option<CellIndex<D>>,
    done: bool,
}

impl<const D: usize> Iterator for RayTrace<'_, D> {
    type Item = CellIndex<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while self.n < self.steps {
            let sample = self.start + self.step * self.n as f32;
            self.n += 1;
            let cell = self.grid.world_to_cell(sample);
            if self.grid.is_out_of_bounds(cell) {
                self.done = true;
                return None;
            }
            if self.prev != Some(cell) {
                self.prev = Some(cell);
                return Some(cell);
            }
        }
        self.done = true;
        None
    }
}

impl<const D: usize> OccupancyGrid<D> {
    /// Walk the distinct cells crossed by the open segment `from..to`.
    ///
    /// The endpoint cells themselves are not sampled, so a query between
    /// two obstacle cells can still come back clear; callers that care
    /// about the endpoints test them separately. The walk stops at the
    /// first cell outside the grid.
    pub fn ray_trace(&self, from: WorldPoint<D>, to: WorldPoint<D>) -> RayTrace<'_, D> {
        let diff = to - from;
        let mut max_axis = 0.0f32;
        for i in 0..D {
            max_axis = max_axis.max((diff[i] / self.resolution()).abs());
        }
        let steps = (max_axis / OVERSAMPLING) as i32;
        let step = if steps > 0 {
            diff * (1.0 / steps as f32)
        } else {
            WorldPoint::ZERO
        };
        RayTrace {
            grid: self,
            start: from,
            step,
            steps,
            n: 1,
            prev: None,
            done: false,
        }
    }

    /// True if the segment crosses a cell at or above
    /// [`DEFAULT_BLOCK_THRESHOLD`].
    pub fn is_blocked(&self, from: WorldPoint<D>, to: WorldPoint<D>) -> bool {
        self.is_blocked_with_threshold(from, to, DEFAULT_BLOCK_THRESHOLD)
    }

    /// True if the segment crosses a cell whose raw value is at least
    /// `min_value`.
    pub fn is_blocked_with_threshold(
        &self,
        from: WorldPoint<D>,
        to: WorldPoint<D>,
        min_value: i8,
    ) -> bool {
        self.ray_trace(from, to)
            .any(|cell| self.value(cell).is_some_and(|v| v >= min_value))
    }
}
