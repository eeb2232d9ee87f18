//! Core types shared by every grid component.
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`CellIndex`]: integer cell indices, one per axis
//! - [`WorldPoint`]: floating-point world coordinates in meters
//! - [`ChebyshevNeighborhood`]: iterator over a square/cube of cells
//!
//! ### Cell States
//! - [`CellState`]: decoded occupancy tag (free, occupied, unknown, center)
//! - [`FREE`], [`UNKNOWN`], [`OCCUPIED`], [`OBSTACLE_CENTER`]: the raw `i8`
//!   storage values those tags project to

mod cell;
mod point;

pub use cell::{CellState, FREE, OBSTACLE_CENTER, OCCUPIED, UNKNOWN};
pub use point::{CellIndex, ChebyshevNeighborhood, WorldPoint};
