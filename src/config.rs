//! Grid configuration with YAML load and save.
//!
//! [`GridConfig`] is the serializable description of a grid: resolution,
//! per-axis cell counts, an optional origin, and the obstacle inflation
//! scalar. Axis counts live in plain lists so one config type covers both
//! planar and volumetric grids; [`GridConfig::build`] checks the lists
//! against the grid's dimensionality when the typed grid is constructed.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::WorldPoint;
use crate::error::GridError;
use crate::grid::OccupancyGrid;

/// Serializable grid parameters.
///
/// ## Example YAML
///
/// ```yaml
/// resolution: 0.05
/// dimensions: [400, 400]
/// origin: [-10.0, -10.0]
/// inflation_ratio: 0.2
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Meters per cell edge (e.g., 0.05 = 5cm cells).
    pub resolution: f32,
    /// Cells along each axis; the list length picks 2-D or 3-D.
    pub dimensions: Vec<usize>,
    /// World coordinate of the grid's reference corner, one value per axis.
    /// `None` centers the grid on the world origin.
    pub origin: Option<Vec<f32>>,
    /// Obstacle inflation scalar, see the insertion methods on
    /// [`OccupancyGrid`].
    #[serde(default = "default_inflation_ratio")]
    pub inflation_ratio: f32,
}

fn default_inflation_ratio() -> f32 {
    0.0
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution: 0.05,           // 5cm cells
            dimensions: vec![400, 400], // 20m x 20m
            origin: None,               // centered on the world origin
            inflation_ratio: default_inflation_ratio(),
        }
    }
}

impl GridConfig {
    /// Configuration covering a world extent, given in meters per axis.
    ///
    /// Cell counts round up, so the grid never undershoots the extent.
    pub fn for_area(extent_m: &[f32], resolution: f32) -> Self {
        Self {
            resolution,
            dimensions: extent_m
                .iter()
                .map(|&extent| (extent / resolution).ceil() as usize)
                .collect(),
            origin: None,
            inflation_ratio: default_inflation_ratio(),
        }
    }

    /// Reference corner that centers the grid on the world origin.
    pub fn centered_origin(&self) -> Vec<f32> {
        self.dimensions
            .iter()
            .map(|&dim| -(dim as f32 * self.resolution) / 2.0)
            .collect()
    }

    /// Configured origin, or the centered one when none was given.
    pub fn effective_origin(&self) -> Vec<f32> {
        self.origin
            .clone()
            .unwrap_or_else(|| self.centered_origin())
    }

    /// Build the typed grid this configuration describes.
    ///
    /// `D` must match the configured axis counts; the geometry itself is
    /// validated by [`OccupancyGrid::new`].
    pub fn build<const D: usize>(&self) -> Result<OccupancyGrid<D>, ConfigError> {
        let dimensions = to_array::<usize, D>(&self.dimensions, "dimensions")?;
        let origin = to_array::<f32, D>(&self.effective_origin(), "origin")?;
        Ok(OccupancyGrid::new(
            dimensions,
            WorldPoint::new(origin),
            self.resolution,
            self.inflation_ratio,
        )?)
    }

    /// Parse a configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_yaml(&std::fs::read_to_string(path)?)
    }

    /// Serialize the configuration to YAML text.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save the configuration to a YAML file.
    pub fn to_yaml_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        Ok(std::fs::write(path, self.to_yaml()?)?)
    }
}

/// Copy a per-axis list into a fixed-length array, checking the length.
fn to_array<T: Copy + Default, const D: usize>(
    values: &[T],
    field: &'static str,
) -> Result<[T; D], ConfigError> {
    if values.len() != D {
        return Err(ConfigError::AxisCountMismatch {
            field,
            expected: D,
            got: values.len(),
        });
    }
    let mut array = [T::default(); D];
    array.copy_from_slice(values);
    Ok(array)
}

/// Failures loading, saving, or building from a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("config file access failed: {0}")]
    Io(#[from] std::io::Error),

    /// The config text is not valid YAML for [`GridConfig`].
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A per-axis list does not match the grid's dimensionality.
    #[error("config {field} lists {got} axes, the grid needs {expected}")]
    AxisCountMismatch {
        /// Offending configuration field.
        field: &'static str,
        /// Axis count the grid type requires.
        expected: usize,
        /// Axis count the configuration supplied.
        got: usize,
    },

    /// The configured geometry fails grid construction checks.
    #[error(transparent)]
    Grid(#[from] GridError),
}
