//! # DrishtiGrid
//!
//! Occupancy-grid collision and visibility oracle for motion planning.
//!
//! ## Overview
//!
//! A fixed-size grid of signed occupancy bytes over a planar (`D = 2`) or
//! volumetric (`D = 3`) world. Each cell holds one of four states:
//!
//! - **Free** - Traversable space
//! - **Occupied** - An obstacle, observed or inflated
//! - **Unknown** - Never observed by any sensor
//! - **ObstacleCenter** - The seed cell of an inserted cylinder footprint
//!
//! Obstacles arrive as point clouds or circular footprints and are inflated
//! at insertion time, so the per-query work stays a handful of loads. The
//! grid answers the questions a planner asks at high frequency: is this
//! cell free, does this segment cross an obstacle, where are the obstacles.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti_grid::{GridConfig, WorldPoint};
//!
//! // 10m x 10m at 10cm cells, centered on the world origin.
//! let mut grid = GridConfig::for_area(&[10.0, 10.0], 0.1).build::<2>()?;
//!
//! // Obstacles from a sensor sweep.
//! grid.insert_points(&scan_points);
//!
//! // Line-of-sight check for a candidate path edge.
//! let start = WorldPoint::new([0.0, 0.0]);
//! let goal = WorldPoint::new([3.0, 2.0]);
//! if !grid.is_blocked(start, goal) {
//!     // the straight edge is collision-free
//! }
//! ```
//!
//! ## Coordinate Convention
//!
//! World coordinates are meters. Cell indices count cells from the grid's
//! reference corner and linearize with the first axis fastest. A cell's
//! reference point is its *center*, so converting an in-bounds cell to
//! world coordinates and back always returns the same cell.

#![warn(missing_docs)]

// Coordinate and cell-state primitives
pub mod core;

// Grid storage, obstacle ingestion, and morphology
pub mod grid;

// Collision and visibility queries
pub mod query;

// Serializable configuration
pub mod config;

// Construction and bulk-load errors
pub mod error;

// Re-export the grid and its companions at the crate root
pub use grid::{Cylinder, OccupancyGrid, PlanarGrid, VoxelGrid, cross_offsets, cube_offsets};

// Re-export coordinate and state types
pub use core::{CellIndex, CellState, WorldPoint};

// Re-export query types
pub use query::{CellCounts, DEFAULT_BLOCK_THRESHOLD, RayTrace};

// Re-export configuration and errors
pub use config::{ConfigError, GridConfig};
pub use error::GridError;
