//! Commonly used types and utilities for ease of import.

pub use crate::{
    render_snapshot, Board, BoardError, BoardGenerator, BoardSnapshot, Coord, FireError,
    FireReport, GameConfig, GameState, GameStatus, Player, ShotResult, VesselId, VesselKind,
    WinCondition,
};

#[cfg(feature = "cli")]
pub use crate::cli::{Command, Prompter};
