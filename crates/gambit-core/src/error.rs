//! Error types for square parsing, board validation, and move requests.

use crate::color::Color;
use crate::position::Position;

/// A string that is not an algebraic square such as `"e4"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: \"{input}\"")]
pub struct ParsePositionError {
    /// The rejected input.
    pub input: String,
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// The cached king location does not hold that side's king.
    #[error("king cache for {color} points to {cached:?}, king stands on {actual:?}")]
    StaleKingCache {
        /// Which side's cache is stale.
        color: Color,
        /// Cached location.
        cached: Option<Position>,
        /// Where the king actually stands.
        actual: Option<Position>,
    },
    /// A piece records a position different from the cell holding it.
    #[error("piece in cell {cell} records position {recorded}")]
    MisplacedPiece {
        /// The cell holding the piece.
        cell: Position,
        /// The position stored in the piece.
        recorded: Position,
    },
}

/// Why a move request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// A coordinate lies outside the board.
    #[error("position {position:?} is off the board")]
    OffBoard {
        /// The out-of-range coordinate.
        position: Position,
    },
    /// No piece stands on the source square.
    #[error("no piece on {position}")]
    EmptySquare {
        /// The empty source square.
        position: Position,
    },
    /// The piece on the source square belongs to the side not on move.
    #[error("piece on {position} does not belong to {expected}")]
    WrongColor {
        /// The source square.
        position: Position,
        /// The side to move.
        expected: Color,
    },
    /// The move breaks the rules or leaves the mover's king attacked.
    #[error("illegal move {from}{to}")]
    Illegal {
        /// Source square.
        from: Position,
        /// Destination square.
        to: Position,
    },
    /// A SAN string matches no legal move.
    #[error("no legal move matches \"{san}\"")]
    UnknownSan {
        /// The SAN string.
        san: String,
    },
}
