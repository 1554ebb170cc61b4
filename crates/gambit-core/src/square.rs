//! A single board cell.

use crate::piece::Piece;
use crate::position::Position;

/// One of the 64 cells: its coordinate and at most one occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    position: Position,
    piece: Option<Piece>,
}

impl Square {
    /// Create an empty cell.
    #[inline]
    pub const fn new(position: Position) -> Square {
        Square {
            position,
            piece: None,
        }
    }

    /// Return the cell's coordinate.
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Return `true` for light cells, where `row + col` is even.
    #[inline]
    pub const fn is_light(&self) -> bool {
        self.position.is_light()
    }

    /// Return the occupant, if any.
    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    /// Return `true` if the cell holds no piece.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, piece: Piece) -> Option<Piece> {
        self.piece.replace(piece)
    }

    #[inline]
    pub(crate) fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}
