//! Coordinate types for the occupancy grid.
//!
//! Both types are thin newtypes over fixed-length arrays so the same code
//! serves planar (`D = 2`) and volumetric (`D = 3`) grids without duplicated
//! per-dimension branches.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// Discrete cell coordinate (one integer index per axis).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellIndex<const D: usize>(pub [i32; D]);

impl<const D: usize> CellIndex<D> {
    /// Create a cell index from per-axis indices.
    #[inline]
    pub const fn new(indices: [i32; D]) -> Self {
        Self(indices)
    }

    /// The all-zero index.
    #[inline]
    pub const fn zero() -> Self {
        Self([0; D])
    }

    /// Chebyshev distance (maximum per-axis difference) to another index.
    ///
    /// This is the metric behind square/cube inflation neighborhoods.
    #[inline]
    pub fn chebyshev_distance(&self, other: &Self) -> i32 {
        let mut max = 0;
        for i in 0..D {
            max = max.max((self.0[i] - other.0[i]).abs());
        }
        max
    }

    /// Iterate every cell within `radius` Chebyshev distance of this one,
    /// including the cell itself. A negative radius yields nothing.
    ///
    /// The first axis varies fastest, matching the grid's linear scan order.
    #[inline]
    pub fn chebyshev_neighborhood(self, radius: i32) -> ChebyshevNeighborhood<D> {
        ChebyshevNeighborhood {
            center: self,
            radius,
            offset: [-radius; D],
            done: radius < 0,
        }
    }
}

impl<const D: usize> Default for CellIndex<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const D: usize> Index<usize> for CellIndex<D> {
    type Output = i32;

    #[inline]
    fn index(&self, axis: usize) -> &i32 {
        &self.0[axis]
    }
}

impl<const D: usize> IndexMut<usize> for CellIndex<D> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut i32 {
        &mut self.0[axis]
    }
}

impl<const D: usize> Add for CellIndex<D> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        let mut out = self.0;
        for i in 0..D {
            out[i] += other.0[i];
        }
        Self(out)
    }
}

impl<const D: usize> Sub for CellIndex<D> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        let mut out = self.0;
        for i in 0..D {
            out[i] -= other.0[i];
        }
        Self(out)
    }
}

/// Iterator over the square/cube neighborhood of a cell.
///
/// Produced by [`CellIndex::chebyshev_neighborhood`]. Walks per-axis offsets
/// like an odometer: `offset[0]` spins fastest from `-radius` to `+radius`.
#[derive(Clone, Debug)]
pub struct ChebyshevNeighborhood<const D: usize> {
    center: CellIndex<D>,
    radius: i32,
    offset: [i32; D],
    done: bool,
}

impl<const D: usize> Iterator for ChebyshevNeighborhood<D> {
    type Item = CellIndex<D>;

    fn next(&mut self) -> Option<CellIndex<D>> {
        if self.done {
            return None;
        }

        let mut cell = self.center;
        for i in 0..D {
            cell.0[i] += self.offset[i];
        }

        // Advance to the next offset combination.
        let mut axis = 0;
        loop {
            if axis == D {
                self.done = true;
                break;
            }
            self.offset[axis] += 1;
            if self.offset[axis] <= self.radius {
                break;
            }
            self.offset[axis] = -self.radius;
            axis += 1;
        }

        Some(cell)
    }
}

/// Continuous world coordinate in meters (one float per axis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPoint<const D: usize>(pub [f32; D]);

impl<const D: usize> WorldPoint<D> {
    /// The world origin.
    pub const ZERO: WorldPoint<D> = WorldPoint([0.0; D]);

    /// Create a world point from per-axis coordinates.
    #[inline]
    pub const fn new(coords: [f32; D]) -> Self {
        Self(coords)
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        let mut sum = 0.0;
        for i in 0..D {
            let d = self.0[i] - other.0[i];
            sum += d * d;
        }
        sum.sqrt()
    }
}

impl<const D: usize> Default for WorldPoint<D> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const D: usize> Index<usize> for WorldPoint<D> {
    type Output = f32;

    #[inline]
    fn index(&self, axis: usize) -> &f32 {
        &self.0[axis]
    }
}

impl<const D: usize> IndexMut<usize> for WorldPoint<D> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f32 {
        &mut self.0[axis]
    }
}

impl<const D: usize> Add for WorldPoint<D> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        let mut out = self.0;
        for i in 0..D {
            out[i] += other.0[i];
        }
        Self(out)
    }
}

impl<const D: usize> Sub for WorldPoint<D> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        let mut out = self.0;
        for i in 0..D {
            out[i] -= other.0[i];
        }
        Self(out)
    }
}

impl<const D: usize> Mul<f32> for WorldPoint<D> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        let mut out = self.0;
        for c in out.iter_mut() {
            *c *= scalar;
        }
        Self(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_index_arithmetic() {
        let a = CellIndex::new([3, 4]);
        let b = CellIndex::new([1, -2]);
        assert_eq!(a + b, CellIndex::new([4, 2]));
        assert_eq!(a - b, CellIndex::new([2, 6]));
        assert_eq!(a[0], 3);
        assert_eq!(a[1], 4);
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = CellIndex::new([0, 0, 0]);
        let b = CellIndex::new([2, -5, 1]);
        assert_eq!(a.chebyshev_distance(&b), 5);
        assert_eq!(b.chebyshev_distance(&a), 5);
    }

    #[test]
    fn test_neighborhood_radius_zero() {
        let c = CellIndex::new([7, 7]);
        let cells: Vec<_> = c.chebyshev_neighborhood(0).collect();
        assert_eq!(cells, vec![c]);
    }

    #[test]
    fn test_neighborhood_radius_one_2d() {
        let c = CellIndex::new([5, 5]);
        let cells: Vec<_> = c.chebyshev_neighborhood(1).collect();
        assert_eq!(cells.len(), 9);
        // First axis varies fastest.
        assert_eq!(cells[0], CellIndex::new([4, 4]));
        assert_eq!(cells[1], CellIndex::new([5, 4]));
        assert_eq!(cells[2], CellIndex::new([6, 4]));
        assert_eq!(cells[8], CellIndex::new([6, 6]));
        for cell in &cells {
            assert!(cell.chebyshev_distance(&c) <= 1);
        }
    }

    #[test]
    fn test_neighborhood_radius_one_3d() {
        let c = CellIndex::new([0, 0, 0]);
        let cells: Vec<_> = c.chebyshev_neighborhood(1).collect();
        assert_eq!(cells.len(), 27);
    }

    #[test]
    fn test_neighborhood_negative_radius() {
        let c = CellIndex::<2>::zero();
        assert_eq!(c.chebyshev_neighborhood(-1).count(), 0);
    }

    #[test]
    fn test_world_point_ops() {
        let a = WorldPoint::new([1.0, 2.0]);
        let b = WorldPoint::new([0.5, -1.0]);
        assert_eq!(a + b, WorldPoint::new([1.5, 1.0]));
        assert_eq!(a - b, WorldPoint::new([0.5, 3.0]));
        assert_eq!(a * 2.0, WorldPoint::new([2.0, 4.0]));
    }

    #[test]
    fn test_world_point_distance() {
        let a = WorldPoint::new([0.0, 0.0]);
        let b = WorldPoint::new([3.0, 4.0]);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }
}
