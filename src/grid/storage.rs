//! Flat occupancy-grid storage and the canonical coordinate transform.
//!
//! The grid owns one signed byte per cell plus the geometry needed to
//! interpret it (origin, resolution, per-axis dimensions). Every other
//! component goes through the conversions defined here; insertion and
//! queries disagreeing by half a cell is the classic failure mode this
//! module exists to prevent.
//!
//! ## Coordinate Convention
//!
//! A cell's reference point is its *center*:
//!
//! ```text
//! world_to_cell(p)[i] = round((p[i] - origin[i]) / resolution - 0.5)
//! cell_to_world(c)[i] = (c[i] + 0.5) * resolution + origin[i]
//! ```
//!
//! so for any in-bounds cell `c`, `world_to_cell(cell_to_world(c)) == c`.
//!
//! ## Linear Layout
//!
//! Cells are linearized with the first axis varying fastest:
//! `index = x + dim_x * y (+ dim_x * dim_y * z)`.

use std::fmt;

use crate::core::{CellIndex, CellState, WorldPoint};
use crate::error::GridError;

/// Fixed-size occupancy grid over a `D`-dimensional world (`D` = 2 or 3).
///
/// Mutators take `&mut self` and queries take `&self`, so exclusive ownership
/// of the single grid resource is compiler-enforced. Callers that need
/// concurrent reads during ingestion can clone the grid, mutate the staging
/// copy, and swap it in.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid<const D: usize> {
    /// Raw occupancy values, one per cell, first axis fastest.
    cells: Vec<i8>,
    /// Number of cells along each axis.
    dimensions: [usize; D],
    /// World coordinate of the grid's reference corner.
    origin: WorldPoint<D>,
    /// Meters per cell edge.
    resolution: f32,
    /// Obstacle inflation scalar, see [`insert_points`](Self::insert_points)
    /// and [`insert_cylinders`](crate::grid::OccupancyGrid::insert_cylinders).
    inflation_ratio: f32,
}

/// Two-dimensional occupancy grid.
pub type PlanarGrid = OccupancyGrid<2>;

/// Three-dimensional occupancy grid.
pub type VoxelGrid = OccupancyGrid<3>;

impl<const D: usize> OccupancyGrid<D> {
    /// Create a grid with every cell free.
    ///
    /// Fails fast on degenerate geometry instead of propagating NaNs or
    /// zero-sized buffers into every later query.
    pub fn new(
        dimensions: [usize; D],
        origin: WorldPoint<D>,
        resolution: f32,
        inflation_ratio: f32,
    ) -> Result<Self, GridError> {
        let total = Self::validate_geometry(&dimensions, resolution)?;
        if !inflation_ratio.is_finite() || inflation_ratio < 0.0 {
            return Err(GridError::InvalidInflationRatio(inflation_ratio));
        }

        Ok(Self {
            cells: vec![crate::core::FREE; total],
            dimensions,
            origin,
            resolution,
            inflation_ratio,
        })
    }

    /// Check dimensions and resolution, returning the total cell count.
    fn validate_geometry(dimensions: &[usize; D], resolution: f32) -> Result<usize, GridError> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(GridError::InvalidResolution(resolution));
        }
        for (axis, &dim) in dimensions.iter().enumerate() {
            if dim == 0 {
                return Err(GridError::ZeroDimension { axis });
            }
        }
        dimensions
            .iter()
            .try_fold(1usize, |total, &dim| total.checked_mul(dim))
            .ok_or_else(|| GridError::CellCountOverflow {
                dimensions: dimensions.to_vec(),
            })
    }

    /// Replace the entire grid contents in one call.
    ///
    /// Used for bulk loads such as a deserialized persisted grid. The buffer
    /// is validated against the declared dimensions; the inflation ratio is
    /// kept from the existing grid.
    pub fn set_map(
        &mut self,
        origin: WorldPoint<D>,
        dimensions: [usize; D],
        cells: Vec<i8>,
        resolution: f32,
    ) -> Result<(), GridError> {
        let expected = Self::validate_geometry(&dimensions, resolution)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                dimensions: dimensions.to_vec(),
                expected,
                got: cells.len(),
            });
        }

        self.cells = cells;
        self.dimensions = dimensions;
        self.origin = origin;
        self.resolution = resolution;
        log::debug!(
            "grid contents replaced: {:?} cells at {:.3} m/cell",
            dimensions,
            resolution
        );
        Ok(())
    }

    // === Geometry Accessors ===

    /// Number of cells along each axis.
    #[inline]
    pub fn dimensions(&self) -> [usize; D] {
        self.dimensions
    }

    /// World coordinate of the grid's reference corner.
    #[inline]
    pub fn origin(&self) -> WorldPoint<D> {
        self.origin
    }

    /// Meters per cell edge.
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Obstacle inflation scalar configured at construction.
    #[inline]
    pub fn inflation_ratio(&self) -> f32 {
        self.inflation_ratio
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// World bounds as `(min_corner, max_corner)`.
    pub fn bounds(&self) -> (WorldPoint<D>, WorldPoint<D>) {
        let mut max = self.origin;
        for i in 0..D {
            max[i] += self.dimensions[i] as f32 * self.resolution;
        }
        (self.origin, max)
    }

    // === Coordinate Transform ===

    /// Convert a world point to the cell containing it.
    ///
    /// The result may lie outside the grid; pair with
    /// [`is_out_of_bounds`](Self::is_out_of_bounds) or
    /// [`linear_index`](Self::linear_index) before any cell access.
    #[inline]
    pub fn world_to_cell(&self, point: WorldPoint<D>) -> CellIndex<D> {
        let mut cell = [0i32; D];
        for i in 0..D {
            cell[i] = ((point[i] - self.origin[i]) / self.resolution - 0.5).round() as i32;
        }
        CellIndex(cell)
    }

    /// Convert a cell index to the world coordinate of its center.
    #[inline]
    pub fn cell_to_world(&self, cell: CellIndex<D>) -> WorldPoint<D> {
        let mut point = [0.0f32; D];
        for i in 0..D {
            point[i] = (cell[i] as f32 + 0.5) * self.resolution + self.origin[i];
        }
        WorldPoint(point)
    }

    /// True if any axis index falls outside the grid.
    #[inline]
    pub fn is_out_of_bounds(&self, cell: CellIndex<D>) -> bool {
        for i in 0..D {
            if cell[i] < 0 || cell[i] as usize >= self.dimensions[i] {
                return true;
            }
        }
        false
    }

    /// Flatten a cell index into its position in the raw cell buffer.
    ///
    /// Returns `None` for out-of-bounds indices; the per-axis test here is
    /// what keeps a neighbor that leaves the grid on one axis from wrapping
    /// into an adjacent row of the flat buffer.
    #[inline]
    pub fn linear_index(&self, cell: CellIndex<D>) -> Option<usize> {
        if self.is_out_of_bounds(cell) {
            return None;
        }
        let mut index = 0usize;
        let mut stride = 1usize;
        for i in 0..D {
            index += cell[i] as usize * stride;
            stride *= self.dimensions[i];
        }
        Some(index)
    }

    /// Inverse of [`linear_index`](Self::linear_index) for valid positions.
    #[inline]
    pub fn index_to_cell(&self, index: usize) -> CellIndex<D> {
        let mut cell = [0i32; D];
        let mut rest = index;
        for i in 0..D {
            cell[i] = (rest % self.dimensions[i]) as i32;
            rest /= self.dimensions[i];
        }
        CellIndex(cell)
    }

    // === Raw Cell Access ===

    /// Raw occupancy values, first axis fastest.
    #[inline]
    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    /// Mutable raw occupancy values, for bulk edits by external collaborators.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [i8] {
        &mut self.cells
    }

    /// Raw value of a cell, or `None` if out of bounds.
    #[inline]
    pub fn value(&self, cell: CellIndex<D>) -> Option<i8> {
        self.linear_index(cell).map(|i| self.cells[i])
    }

    /// Raw value at a linear position.
    ///
    /// # Panics
    /// Panics if `index >= cell_count()`.
    #[inline]
    pub fn value_at(&self, index: usize) -> i8 {
        self.cells[index]
    }

    /// Write a raw value at a cell. Returns false (and writes nothing) if the
    /// cell is out of bounds.
    #[inline]
    pub fn set_value(&mut self, cell: CellIndex<D>, value: i8) -> bool {
        if let Some(i) = self.linear_index(cell) {
            self.cells[i] = value;
            true
        } else {
            false
        }
    }

    // === Occupancy Queries ===

    /// Decoded state of a cell, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, cell: CellIndex<D>) -> Option<CellState> {
        self.value(cell).map(CellState::from_raw)
    }

    /// Decoded state at a linear position.
    ///
    /// # Panics
    /// Panics if `index >= cell_count()`.
    #[inline]
    pub fn state_at(&self, index: usize) -> CellState {
        CellState::from_raw(self.cells[index])
    }

    /// Is this cell traversable? Out-of-bounds cells are *not* free.
    #[inline]
    pub fn is_free(&self, cell: CellIndex<D>) -> bool {
        self.state(cell).is_some_and(CellState::is_free)
    }

    /// Is this cell an obstacle? Out-of-bounds cells are *not* occupied.
    ///
    /// Callers must not infer "outside the grid" from any of the three
    /// predicates; use [`is_out_of_bounds`](Self::is_out_of_bounds).
    #[inline]
    pub fn is_occupied(&self, cell: CellIndex<D>) -> bool {
        self.state(cell).is_some_and(CellState::is_occupied)
    }

    /// Is this cell unobserved? Out-of-bounds cells are *not* unknown.
    #[inline]
    pub fn is_unknown(&self, cell: CellIndex<D>) -> bool {
        self.state(cell).is_some_and(CellState::is_unknown)
    }

    /// [`is_free`](Self::is_free) by linear position.
    ///
    /// # Panics
    /// Panics if `index >= cell_count()`.
    #[inline]
    pub fn is_free_at(&self, index: usize) -> bool {
        self.state_at(index).is_free()
    }

    /// [`is_occupied`](Self::is_occupied) by linear position.
    ///
    /// # Panics
    /// Panics if `index >= cell_count()`.
    #[inline]
    pub fn is_occupied_at(&self, index: usize) -> bool {
        self.state_at(index).is_occupied()
    }

    /// [`is_unknown`](Self::is_unknown) by linear position.
    ///
    /// # Panics
    /// Panics if `index >= cell_count()`.
    #[inline]
    pub fn is_unknown_at(&self, index: usize) -> bool {
        self.state_at(index).is_unknown()
    }
}

impl<const D: usize> fmt::Display for OccupancyGrid<D> {
    /// Human-readable geometry summary, for diagnostics only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = self.bounds();
        write!(
            f,
            "occupancy grid {:?} cells @ {:.3} m/cell, extent {:?} to {:?} ({} cells)",
            self.dimensions,
            self.resolution,
            min.0,
            max.0,
            self.cell_count()
        )
    }
}
