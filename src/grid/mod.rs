//! Occupancy grid storage and mutation.
//!
//! - [`OccupancyGrid`]: flat cell storage, the world/cell coordinate
//!   transform, per-cell occupancy queries, and bulk load
//! - [`Cylinder`] and the insertion methods: obstacle ingestion with
//!   inflation
//! - [`cross_offsets`] / [`cube_offsets`]: structuring elements for
//!   [`OccupancyGrid::dilate`]

mod insert;
mod morphology;
mod storage;

pub use insert::Cylinder;
pub use morphology::{cross_offsets, cube_offsets};
pub use storage::{OccupancyGrid, PlanarGrid, VoxelGrid};
