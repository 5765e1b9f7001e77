//! Two-player game state: both boards, whose turn it is and the win check.

use core::fmt;

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord, FireError, ShotResult};
use crate::config::{GameConfig, WinCondition};
use crate::snapshot::BoardSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameStatus {
    /// Waiting for the given player to fire.
    AwaitingFire(Player),
    GameOver { winner: Player },
}

/// Outcome of one resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FireReport {
    pub shooter: Player,
    pub target: Coord,
    pub result: ShotResult,
    /// Status after the shot.
    pub status: GameStatus,
}

impl FireReport {
    /// Whether this shot ended the game.
    pub fn is_winning(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { .. })
    }
}

/// Game engine holding both boards. Player One fires first.
#[derive(Debug, Clone)]
pub struct GameState {
    boards: [Board; 2],
    status: GameStatus,
    win_condition: WinCondition,
    history: Vec<FireReport>,
}

impl GameState {
    /// Generate both boards from the same configuration.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let first = Board::generate(config, rng)?;
        let second = Board::generate(config, rng)?;
        Ok(Self::from_boards(first, second, config.win_condition()))
    }

    /// Start a game on prebuilt boards.
    pub fn from_boards(player_one: Board, player_two: Board, win_condition: WinCondition) -> Self {
        Self {
            boards: [player_one, player_two],
            status: GameStatus::AwaitingFire(Player::One),
            win_condition,
            history: Vec::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player due to fire, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::AwaitingFire(player) => Some(player),
            GameStatus::GameOver { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::GameOver { winner } => Some(winner),
            GameStatus::AwaitingFire(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn win_condition(&self) -> WinCondition {
        self.win_condition
    }

    /// `player`'s own board.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    /// The board `player` fires at.
    pub fn opponent_board(&self, player: Player) -> &Board {
        self.board(player.opponent())
    }

    /// Resolved turns, oldest first.
    pub fn history(&self) -> &[FireReport] {
        &self.history
    }

    /// Full view of `player`'s own board.
    pub fn snapshot(&self, player: Player) -> BoardSnapshot {
        self.board(player).snapshot()
    }

    /// `player`'s board as the opponent is allowed to see it.
    pub fn concealed_snapshot(&self, player: Player) -> BoardSnapshot {
        self.board(player).concealed_snapshot()
    }

    /// Fire the current player's shot at (`row`, `col`, `layer`) on the
    /// opponent's board.
    pub fn fire(&mut self, row: usize, col: usize, layer: usize) -> Result<FireReport, FireError> {
        self.fire_at(Coord::new(row, col, layer))
    }

    /// Fire the current player's shot at `target` on the opponent's board.
    ///
    /// Errors leave the game untouched and the turn unused. Any resolved shot,
    /// including a repeat at an already resolved cell, passes the turn unless
    /// it wins the game.
    pub fn fire_at(&mut self, target: Coord) -> Result<FireReport, FireError> {
        let shooter = match self.status {
            GameStatus::AwaitingFire(player) => player,
            GameStatus::GameOver { winner } => return Err(FireError::GameOver { winner }),
        };
        let opponent = &mut self.boards[shooter.opponent().index()];
        let result = opponent.fire_at(target)?;

        self.status = if result.is_fresh_hit() && self.win_condition.is_met(opponent) {
            log::info!("{} wins with a shot at {}", shooter, target);
            GameStatus::GameOver { winner: shooter }
        } else {
            GameStatus::AwaitingFire(shooter.opponent())
        };

        let report = FireReport {
            shooter,
            target,
            result,
            status: self.status,
        };
        self.history.push(report);
        Ok(report)
    }
}

impl WinCondition {
    /// Whether `board`'s owner has lost.
    pub fn is_met(self, board: &Board) -> bool {
        match self {
            WinCondition::GeneralDestroyed => board.general_destroyed(),
            WinCondition::GeneralOrFleet => board.general_destroyed() || board.fleet_destroyed(),
        }
    }
}
