//! Cell occupancy states and their raw storage encoding.
//!
//! The grid stores one signed byte per cell. Planners and persistence layers
//! exchange those raw values directly, so the encoding is part of the public
//! contract:
//!
//! | state            | raw value |
//! |------------------|-----------|
//! | free             | `0`       |
//! | unknown          | `-1`      |
//! | occupied         | `100` (canonical; any value above free counts) |
//! | obstacle center  | `50`      |
//!
//! Query logic works on the decoded [`CellState`] tag, never on ad hoc
//! numeric comparisons; the raw bytes only matter at the storage boundary.

/// Raw value of a traversable cell.
pub const FREE: i8 = 0;

/// Raw value of a cell that has never been observed.
pub const UNKNOWN: i8 = -1;

/// Canonical raw value of an obstacle cell.
pub const OCCUPIED: i8 = 100;

/// Raw marker written at the seed cell of an inserted cylindrical obstacle.
///
/// The marker keeps later cylinder inflations from erasing an earlier
/// obstacle's center. It still counts as occupied for planning queries.
pub const OBSTACLE_CENTER: i8 = 50;

/// Decoded occupancy state of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Traversable space.
    #[default]
    Free,
    /// Obstacle (observed or inflated).
    Occupied,
    /// Never observed.
    Unknown,
    /// Seed cell of a cylindrical obstacle. Counts as occupied.
    ObstacleCenter,
}

impl CellState {
    /// Decode a raw storage byte.
    ///
    /// Any positive value other than the center marker decodes as occupied;
    /// any negative value decodes as unknown. Both rules match how bulk-loaded
    /// external grids (e.g. ROS-style 0..100 ranges) are interpreted.
    #[inline]
    pub const fn from_raw(value: i8) -> CellState {
        match value {
            FREE => CellState::Free,
            OBSTACLE_CENTER => CellState::ObstacleCenter,
            v if v > FREE => CellState::Occupied,
            _ => CellState::Unknown,
        }
    }

    /// Encode this state as its canonical storage byte.
    #[inline]
    pub const fn to_raw(self) -> i8 {
        match self {
            CellState::Free => FREE,
            CellState::Occupied => OCCUPIED,
            CellState::Unknown => UNKNOWN,
            CellState::ObstacleCenter => OBSTACLE_CENTER,
        }
    }

    /// Is this cell traversable?
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, CellState::Free)
    }

    /// Is this cell an obstacle? Obstacle centers count.
    #[inline]
    pub const fn is_occupied(self) -> bool {
        matches!(self, CellState::Occupied | CellState::ObstacleCenter)
    }

    /// Has this cell never been observed?
    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, CellState::Unknown)
    }
}
