//! Common types for 3D Battleship: coordinates, shot results and errors.

use core::fmt;
use thiserror::Error;

use crate::game::Player;
use crate::vessel::{VesselId, VesselKind};

/// A single cell on a 3D board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
    pub layer: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize, layer: usize) -> Self {
        Self { row, col, layer }
    }
}

impl From<(usize, usize, usize)> for Coord {
    fn from((row, col, layer): (usize, usize, usize)) -> Self {
        Self::new(row, col, layer)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.layer)
    }
}

/// Extent of a board: rows × cols per layer, stacked `layers` deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
    pub layers: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, cols: usize, layers: usize) -> Self {
        Self { rows, cols, layers }
    }

    /// Returns `true` if `coord` lies inside the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols && coord.layer < self.layers
    }

    pub fn cells_per_layer(&self) -> usize {
        self.rows * self.cols
    }

    pub fn total_cells(&self) -> usize {
        self.cells_per_layer() * self.layers
    }

    /// Total cell count, or `None` if it does not fit in a `usize`.
    pub fn checked_total_cells(&self) -> Option<usize> {
        self.rows
            .checked_mul(self.cols)
            .and_then(|per_layer| per_layer.checked_mul(self.layers))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.rows, self.cols, self.layers)
    }
}

/// Result of firing at a single cell of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot struck an intact segment of a vessel that is still afloat.
    Hit { id: VesselId, kind: VesselKind },
    /// Shot struck the last intact segment of a vessel.
    Destroyed { id: VesselId, kind: VesselKind },
    /// The cell had already been fired at and was water. Nothing changed.
    AlreadyMissed,
    /// The cell had already been hit. Nothing changed.
    AlreadyHit { id: VesselId, kind: VesselKind },
}

impl ShotResult {
    /// `true` for shots that damaged a vessel on this turn.
    pub fn is_fresh_hit(&self) -> bool {
        matches!(self, ShotResult::Hit { .. } | ShotResult::Destroyed { .. })
    }

    /// `true` if the cell had already been resolved before this shot.
    pub fn is_repeat(&self) -> bool {
        matches!(self, ShotResult::AlreadyMissed | ShotResult::AlreadyHit { .. })
    }

    /// Kind of vessel struck, if any.
    pub fn kind(&self) -> Option<VesselKind> {
        match *self {
            ShotResult::Hit { kind, .. }
            | ShotResult::Destroyed { kind, .. }
            | ShotResult::AlreadyHit { kind, .. } => Some(kind),
            ShotResult::Miss | ShotResult::AlreadyMissed => None,
        }
    }
}

/// Errors raised while validating a game configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("'{0}' is not a valid integer")]
    NotANumber(String),
    #[error("{axis} must be a positive integer, got {value}")]
    NonPositiveDimension { axis: &'static str, value: i64 },
    #[error("{axis} must be at most {max}, got {value}")]
    DimensionTooLarge {
        axis: &'static str,
        value: i64,
        max: usize,
    },
    #[error("a {rows}x{cols}x{layers} board exceeds the limit of {max} cells")]
    BoardTooLarge {
        rows: usize,
        cols: usize,
        layers: usize,
        max: usize,
    },
    #[error("the number of {kind}s must be zero or more, got {value}")]
    NegativeCount { kind: VesselKind, value: i64 },
    #[error("{0} has no permitted layers")]
    NoPermittedLayers(VesselKind),
    #[error("{kind} is assigned to layer {layer} but the board only has {layers} layers")]
    LayerOutOfRange {
        kind: VesselKind,
        layer: usize,
        layers: usize,
    },
    #[error("placement needs at least one attempt per piece")]
    ZeroAttempts,
}

/// Errors raised while building or generating a board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(
        "could not place a {kind} after {attempts} attempts; \
         try again with fewer vessels or a larger board"
    )]
    PlacementExhausted { kind: VesselKind, attempts: usize },
    #[error("{kind} anchored at {anchor} does not fit on the board")]
    OutOfBounds { kind: VesselKind, anchor: Coord },
    #[error("{kind} anchored at {anchor} overlaps vessel {other}")]
    Overlap {
        kind: VesselKind,
        anchor: Coord,
        other: VesselId,
    },
    #[error("{kind} may not be placed on layer {layer}")]
    LayerNotPermitted { kind: VesselKind, layer: usize },
    #[error("all {count} {kind} pieces are already placed")]
    PieceLimit { kind: VesselKind, count: usize },
    #[error("only {placed} of {expected} {kind} pieces were placed")]
    IncompleteFleet {
        kind: VesselKind,
        placed: usize,
        expected: usize,
    },
    #[error("the board has no General")]
    MissingGeneral,
}

/// Errors raised when a shot cannot be resolved. The game state is untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FireError {
    #[error("target {target} is outside the {dimensions} board")]
    OutOfBounds {
        target: Coord,
        dimensions: Dimensions,
    },
    #[error("the game is over; {winner} won")]
    GameOver { winner: Player },
    #[error("cell belongs to vessel {0}, which is not on the board")]
    UnknownVessel(VesselId),
}
