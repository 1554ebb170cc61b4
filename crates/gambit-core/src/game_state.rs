//! Side to move, game status, move counter, and last move.

use std::fmt;

use crate::color::Color;
use crate::position::Position;

/// Classification of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    /// Reserved; never produced by the rules core.
    Draw,
}

impl Status {
    /// Return `true` for statuses that end the game.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate | Status::Draw)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Playing => "playing",
            Status::Check => "check",
            Status::Checkmate => "checkmate",
            Status::Stalemate => "stalemate",
            Status::Draw => "draw",
        };
        f.write_str(s)
    }
}

/// Turn bookkeeping. Cloned onto the undo stack before every move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    side_to_move: Color,
    status: Status,
    move_count: u32,
    last_move: Option<(Position, Position)>,
}

impl GameState {
    /// White to move, nothing played yet.
    pub const fn new() -> GameState {
        GameState {
            side_to_move: Color::White,
            status: Status::Playing,
            move_count: 0,
            last_move: None,
        }
    }

    /// `side` to move, nothing played yet.
    pub const fn with_side_to_move(side: Color) -> GameState {
        GameState {
            side_to_move: side,
            ..GameState::new()
        }
    }

    /// Return the side to move.
    #[inline]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the current status.
    #[inline]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Number of half-moves played.
    #[inline]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Origin and destination of the previous half-move.
    #[inline]
    pub const fn last_move(&self) -> Option<(Position, Position)> {
        self.last_move
    }

    /// Origin of the previous half-move.
    #[inline]
    pub fn last_move_from(&self) -> Option<Position> {
        self.last_move.map(|(from, _)| from)
    }

    /// Destination of the previous half-move, where the piece now stands.
    #[inline]
    pub fn last_move_to(&self) -> Option<Position> {
        self.last_move.map(|(_, to)| to)
    }

    /// Return `true` once the game has ended.
    #[inline]
    pub const fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Human-readable summary of the status.
    pub fn status_message(&self) -> String {
        match self.status {
            Status::Checkmate => format!("Checkmate! {} wins.", self.side_to_move.opposite()),
            Status::Stalemate => "Draw by stalemate.".to_string(),
            Status::Draw => "Draw.".to_string(),
            Status::Check => format!("Game is running. {} is in check.", self.side_to_move),
            Status::Playing => "Game is running.".to_string(),
        }
    }

    #[inline]
    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    #[inline]
    pub(crate) fn set_last_move(&mut self, from: Position, to: Position) {
        self.last_move = Some((from, to));
    }

    /// Hand the move to the other side and count the half-move.
    #[inline]
    pub(crate) fn next_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.move_count += 1;
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
