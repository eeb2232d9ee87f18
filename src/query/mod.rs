//! Collision and visibility queries against the grid.
//!
//! - [`RayTrace`] and the blocking predicates: discrete line-of-sight
//!   checks between world points
//! - The cloud extractors and [`CellCounts`]: bulk views of the grid by
//!   occupancy state

mod cloud;
mod raytrace;

pub use cloud::CellCounts;
pub use raytrace::{DEFAULT_BLOCK_THRESHOLD, RayTrace};
